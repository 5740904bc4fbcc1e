use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Destination {
    id: i64,
    city: String,
    country: String,
}

impl Destination {
    pub(crate) fn new(id: i64, city: String, country: String) -> Self {
        Self { id, city, country }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub(crate) fn set_city(&mut self, city: String) {
        self.city = city;
    }
}

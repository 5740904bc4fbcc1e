//! Syntactic checks applied at the HTTP boundary before the store is called.

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::InputError;

/// Largest id accepted from a client. Keeps generated ids far from overflow.
pub const MAX_ID: i64 = i32::MAX as i64;

/// Trims `value` and requires something to be left.
pub fn required(field: &'static str, value: Option<&str>) -> Result<String, InputError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(InputError::MissingField(field)),
    }
}

/// City and country names: ASCII letters and spaces only.
pub fn name(field: &'static str, value: Option<&str>) -> Result<String, InputError> {
    let value = required(field, value)?;
    if value.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        Ok(value)
    } else {
        Err(InputError::InvalidName(field))
    }
}

/// Parses a `YYYY-MM-DD` date and returns it zero-padded.
pub fn date(field: &'static str, value: Option<&str>) -> Result<String, InputError> {
    let value = required(field, value)?;
    NaiveDate::parse_from_str(&value, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| InputError::InvalidDate(field))
}

pub fn id(raw: &str) -> Result<i64, InputError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if (1..=MAX_ID).contains(&id) => Ok(id),
        _ => Err(InputError::InvalidId(raw.to_string())),
    }
}

/// An optional id from a JSON body: an integer or a string holding one.
pub fn body_id(value: Option<&Value>) -> Result<Option<i64>, InputError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) => id(raw).map(Some),
        Some(other) => match other.as_i64() {
            Some(id) if (1..=MAX_ID).contains(&id) => Ok(Some(id)),
            _ => Err(InputError::InvalidId(other.to_string())),
        },
    }
}

/// A required id from a JSON body referring to another record.
pub fn reference(field: &'static str, value: Option<&Value>) -> Result<i64, InputError> {
    body_id(value)?.ok_or(InputError::MissingField(field))
}

/// Optional fields: absent or blank means "leave unchanged".
pub fn optional(value: Option<&str>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn names_allow_letters_and_spaces() {
        assert_eq!(name("city", Some(" New York ")).unwrap(), "New York");
        assert_eq!(
            name("city", Some("Paris2")),
            Err(InputError::InvalidName("city"))
        );
        assert_eq!(
            name("country", Some("Côte d'Ivoire")),
            Err(InputError::InvalidName("country"))
        );
        assert_eq!(name("city", Some("   ")), Err(InputError::MissingField("city")));
        assert_eq!(name("city", None), Err(InputError::MissingField("city")));
    }

    #[test]
    fn dates_must_parse() {
        assert_eq!(date("start_date", Some("2099-01-01")).unwrap(), "2099-01-01");
        assert_eq!(
            date("end_date", Some("2099-02-30")),
            Err(InputError::InvalidDate("end_date"))
        );
        assert_eq!(
            date("end_date", Some("01/02/2099")),
            Err(InputError::InvalidDate("end_date"))
        );
    }

    #[test]
    fn ids_are_positive_integers() {
        assert_eq!(id("42"), Ok(42));
        assert_eq!(id("0"), Err(InputError::InvalidId("0".into())));
        assert_eq!(id("abc"), Err(InputError::InvalidId("abc".into())));
        assert_eq!(
            id(&i64::MAX.to_string()),
            Err(InputError::InvalidId(i64::MAX.to_string()))
        );
    }

    #[test]
    fn body_ids_accept_integers_and_numeric_strings() {
        assert_eq!(body_id(None), Ok(None));
        assert_eq!(body_id(Some(&json!(null))), Ok(None));
        assert_eq!(body_id(Some(&json!(4))), Ok(Some(4)));
        assert_eq!(body_id(Some(&json!("4"))), Ok(Some(4)));
        assert_eq!(
            body_id(Some(&json!("abc"))),
            Err(InputError::InvalidId("abc".into()))
        );
        assert_eq!(
            body_id(Some(&json!(1.5))),
            Err(InputError::InvalidId("1.5".into()))
        );
        assert_eq!(
            body_id(Some(&json!(-1))),
            Err(InputError::InvalidId("-1".into()))
        );
        assert_eq!(
            body_id(Some(&json!(i64::MAX))),
            Err(InputError::InvalidId(i64::MAX.to_string()))
        );
    }

    #[test]
    fn references_are_required() {
        assert_eq!(
            reference("destination_id", None),
            Err(InputError::MissingField("destination_id"))
        );
        assert_eq!(reference("destination_id", Some(&json!(3))), Ok(3));
    }

    #[test]
    fn optional_drops_blank_values() {
        assert_eq!(optional(Some("  ")), None);
        assert_eq!(optional(Some(" Rome ")), Some("Rome".into()));
        assert_eq!(optional(None), None);
    }
}

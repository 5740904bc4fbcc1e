use std::{env, net::SocketAddr, sync::Arc};

use chrono::NaiveDate;

use crate::{
    clock::{Clock, FixedClock, SystemClock},
    error::AppError,
};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    /// Pinned "current date"; `None` follows the system clock.
    pub today: Option<NaiveDate>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let listen_addr: SocketAddr = env::var("APP_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid APP_LISTEN_ADDR: {err}")))?;

        let today = match env::var("TRIP_PLANNER_TODAY") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|err| {
                    AppError::Config(format!("invalid TRIP_PLANNER_TODAY: {err}"))
                })?,
            ),
            _ => None,
        };

        Ok(Self { listen_addr, today })
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        match self.today {
            Some(date) => Arc::new(FixedClock(date)),
            None => Arc::new(SystemClock),
        }
    }
}

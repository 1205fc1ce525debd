use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Storage key under which the theme preference is persisted.
pub const THEME_STORAGE_KEY: &str = "theme";

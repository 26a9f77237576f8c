use std::{env, path::PathBuf, str::FromStr, time::Duration};

use storefront_utils::{
    debounce::DEFAULT_DEBOUNCE_MS, pagination::DEFAULT_PAGE_SIZE,
    search::DEFAULT_SUGGESTION_LIMIT,
};

pub const CATALOG_VAR: &str = "STOREFRONT_CATALOG";
pub const PAGE_SIZE_VAR: &str = "STOREFRONT_PAGE_SIZE";
pub const SUGGESTION_LIMIT_VAR: &str = "STOREFRONT_SUGGESTION_LIMIT";
pub const DEBOUNCE_MS_VAR: &str = "STOREFRONT_DEBOUNCE_MS";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{name} must be a whole number, got `{value}`")]
    InvalidValue { name: &'static str, value: String },
    #[error("{name} must be at least 1")]
    Zero { name: &'static str },
}

/// Runtime knobs for the filter controller and the input loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Catalog JSON file; `None` runs with an empty catalog.
    pub catalog_path: Option<PathBuf>,
    pub page_size: usize,
    pub suggestion_limit: usize,
    pub debounce: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let defaults = Self::default();
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let page_size = match read(PAGE_SIZE_VAR) {
            Some(raw) => parse_positive(PAGE_SIZE_VAR, &raw)?,
            None => defaults.page_size,
        };

        let suggestion_limit = match read(SUGGESTION_LIMIT_VAR) {
            Some(raw) => parse_count(SUGGESTION_LIMIT_VAR, &raw)?,
            None => defaults.suggestion_limit,
        };

        let debounce = match read(DEBOUNCE_MS_VAR) {
            Some(raw) => Duration::from_millis(parse_count(DEBOUNCE_MS_VAR, &raw)?),
            None => defaults.debounce,
        };

        Ok(Self {
            catalog_path: read(CATALOG_VAR).map(PathBuf::from),
            page_size,
            suggestion_limit,
            debounce,
        })
    }
}

fn parse_count<T: FromStr>(name: &'static str, raw: &str) -> Result<T, SettingsError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| SettingsError::InvalidValue {
            name,
            value: raw.to_owned(),
        })
}

fn parse_positive(name: &'static str, raw: &str) -> Result<usize, SettingsError> {
    match parse_count::<usize>(name, raw)? {
        0 => Err(SettingsError::Zero { name }),
        value => Ok(value),
    }
}

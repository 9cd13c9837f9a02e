//! Configuration loading and representation.
//!
//! Everything comes from environment variables:
//!
//! - `WIGSTOCK_SEED_DEMO`: seed the demo records (`true`/`false`, default `true`)
//! - `WIGSTOCK_USER`: signed-in user's email; unset means anonymous
//! - `WIGSTOCK_SEARCH`: free-text search term
//! - `WIGSTOCK_SORT`: `column` or `column:asc|desc`
//! - `WIGSTOCK_FILTERS`: `column=value,column=value`

use thiserror::Error;

use wigstock_inventory::{Column, SortDirection, SortState};

use crate::session::Session;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: unknown column '{value}'")]
    UnknownColumn { var: &'static str, value: String },

    #[error("{var}: invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed_demo: bool,
    pub user: Option<String>,
    pub search: String,
    pub sort: SortState,
    pub filters: Vec<(Column, String)>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_demo: true,
            user: None,
            search: String::new(),
            sort: SortState::Unsorted,
            filters: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("WIGSTOCK_SEED_DEMO") {
            config.seed_demo = parse_bool("WIGSTOCK_SEED_DEMO", &raw)?;
        }
        config.user = lookup("WIGSTOCK_USER").filter(|u| !u.trim().is_empty());
        config.search = lookup("WIGSTOCK_SEARCH").unwrap_or_default();
        if let Some(raw) = lookup("WIGSTOCK_SORT") {
            config.sort = parse_sort(&raw)?;
        }
        if let Some(raw) = lookup("WIGSTOCK_FILTERS") {
            config.filters = parse_filters(&raw)?;
        }

        Ok(config)
    }

    pub fn session(&self) -> Session {
        match &self.user {
            Some(email) => Session::authenticated(email.trim()),
            None => Session::Anonymous,
        }
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: raw.to_string(),
            reason: "expected true or false",
        }),
    }
}

fn parse_column(var: &'static str, raw: &str) -> Result<Column, ConfigError> {
    raw.parse().map_err(|_| ConfigError::UnknownColumn {
        var,
        value: raw.trim().to_string(),
    })
}

fn parse_sort(raw: &str) -> Result<SortState, ConfigError> {
    const VAR: &str = "WIGSTOCK_SORT";
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(SortState::Unsorted);
    }

    let (column, direction) = match raw.split_once(':') {
        Some((column, direction)) => (column, Some(direction)),
        None => (raw, None),
    };
    let column = parse_column(VAR, column)?;
    let direction = match direction.map(|d| d.trim().to_lowercase()) {
        None => SortDirection::Ascending,
        Some(d) if d == "asc" => SortDirection::Ascending,
        Some(d) if d == "desc" => SortDirection::Descending,
        Some(_) => {
            return Err(ConfigError::Invalid {
                var: VAR,
                value: raw.to_string(),
                reason: "direction must be asc or desc",
            });
        }
    };
    Ok(SortState::Sorted { column, direction })
}

fn parse_filters(raw: &str) -> Result<Vec<(Column, String)>, ConfigError> {
    const VAR: &str = "WIGSTOCK_FILTERS";
    raw.split(',')
        .filter(|pair| !pair.trim().is_empty())
        .map(|pair| -> Result<(Column, String), ConfigError> {
            let (column, value) = pair.split_once('=').ok_or_else(|| ConfigError::Invalid {
                var: VAR,
                value: pair.to_string(),
                reason: "expected column=value",
            })?;
            Ok((parse_column(VAR, column)?, value.trim().to_string()))
        })
        .collect()
}

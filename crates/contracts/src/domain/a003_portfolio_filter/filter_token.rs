use std::fmt;

use super::category::CategorySet;

/// Token that shows every grid item.
pub const ALL: &str = "all";

/// The active portfolio filter, always trimmed and lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterToken(String);

impl FilterToken {
    /// Normalize a raw value; missing or blank input means [`ALL`].
    pub fn new(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => Self(raw.to_lowercase()),
            None => Self::all(),
        }
    }

    pub fn all() -> Self {
        Self(ALL.to_string())
    }

    pub fn is_all(&self) -> bool {
        self.0 == ALL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Visibility rule for a grid item.
    pub fn matches(&self, categories: &CategorySet) -> bool {
        self.is_all() || categories.contains(&self.0)
    }

    /// Whether a filter bar control carrying `control` should be marked
    /// current. Controls with a blank token never are.
    pub fn is_control_active(&self, control: Option<&str>) -> bool {
        match control {
            Some(control) if !control.trim().is_empty() => Self::new(Some(control)) == *self,
            _ => false,
        }
    }
}

impl Default for FilterToken {
    fn default() -> Self {
        Self::all()
    }
}

impl From<&str> for FilterToken {
    fn from(raw: &str) -> Self {
        Self::new(Some(raw))
    }
}

impl fmt::Display for FilterToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Stateless control-id encoding, parsing, and validation.

use std::{fmt, str::FromStr};

const TOKEN_PREFIX: &str = "pg";

/// Navigation intent carried by a control id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    First,
    Prev,
    Page,
    Next,
    Last,
}

impl ControlAction {
    fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Prev => "prev",
            Self::Page => "page",
            Self::Next => "next",
            Self::Last => "last",
        }
    }
}

impl fmt::Display for ControlAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlAction {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "first" => Ok(Self::First),
            "prev" => Ok(Self::Prev),
            "page" => Ok(Self::Page),
            "next" => Ok(Self::Next),
            "last" => Ok(Self::Last),
            _ => Err(()),
        }
    }
}

/// Parsed control id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlToken {
    pub action: ControlAction,
    /// Target page number, 1-based.
    pub page: usize,
    /// Total page count when the control was rendered.
    pub total_pages: usize,
}

/// Validation outcome for control clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlValidationError {
    Invalid,
    /// The result set changed since the control was rendered.
    Stale,
    OutOfRange,
}

impl fmt::Display for ControlValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Invalid => "invalid pagination control",
            Self::Stale => "pagination control is out of date",
            Self::OutOfRange => "page is out of range",
        };
        f.write_str(message)
    }
}

/// Build a compact id carrying the control's target page.
pub fn build_control_id(action: ControlAction, target_page: usize, total_pages: usize) -> String {
    format!("{TOKEN_PREFIX}:{action}:{target_page}:{total_pages}")
}

/// Parse a control id.
pub fn parse_control_id(control_id: &str) -> Option<ControlToken> {
    let mut parts = control_id.trim().split(':');

    let prefix = parts.next()?;
    if prefix != TOKEN_PREFIX {
        return None;
    }

    let action = parts.next()?.parse::<ControlAction>().ok()?;
    let page = parts.next()?.parse::<usize>().ok()?;
    let total_pages = parts.next()?.parse::<usize>().ok()?;

    if parts.next().is_some() {
        return None;
    }

    Some(ControlToken {
        action,
        page,
        total_pages,
    })
}

/// Validate a control id against the current page count.
pub fn validate_control_id(
    control_id: &str,
    current_total_pages: usize,
) -> Result<ControlToken, ControlValidationError> {
    let token = parse_control_id(control_id).ok_or(ControlValidationError::Invalid)?;

    if token.total_pages != current_total_pages {
        return Err(ControlValidationError::Stale);
    }

    if token.page == 0 || token.page > token.total_pages {
        return Err(ControlValidationError::OutOfRange);
    }

    Ok(token)
}

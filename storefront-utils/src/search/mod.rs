//! Stable facade for catalog matching used by the filter controller.

/// Default number of entries shown in the suggestion dropdown.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 6;

mod matcher;
pub mod normalize;

pub use matcher::{filter, filter_positions, matches_query, suggest};
pub use normalize::{compact_query, name_initials, normalize_query};

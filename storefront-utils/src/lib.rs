/// Debounce policy and its tokio driver.
pub mod debounce;
/// Single source of truth for the input-command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Shared pagination helpers and control-id utilities.
pub mod pagination;
/// Pure parser helpers.
pub mod parse;
/// Query matching and suggestion ranking.
pub mod search;

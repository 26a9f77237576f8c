/// Parse a one-based list index such as a suggestion number.
pub fn parse_one_based_index(raw: &str) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|index| *index >= 1)
        .map(|index| index - 1)
}

/// Split an input line into a lowercased command word and optional argument.
///
/// Returns `None` when the line does not start with `prefix`.
pub fn split_command(line: &str, prefix: char) -> Option<(String, Option<&str>)> {
    let content = line.trim().strip_prefix(prefix)?.trim();
    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let command = command_and_rest.next().unwrap_or("").to_ascii_lowercase();
    let rest = command_and_rest
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    Some((command, rest))
}

//! core/tags/util.rs
//! Small helpers shared by the tag backends.

/// ID3v2.4 stores multi-value text frames as one string with NUL separators.
/// - "A" -> ["A"]
/// - "A\0B" -> ["A", "B"]
/// - "" -> []
pub(crate) fn split_values(raw: &str) -> Vec<String> {
    raw.split('\0')
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Inverse of [`split_values`].
pub(crate) fn join_values(values: &[String]) -> String {
    values.join("\0")
}

/// Treat "present but no values" the same as "absent".
pub(crate) fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() { None } else { Some(values) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_nul_separated_values() {
        assert_eq!(split_values("Jane\0Bob"), vec!["Jane", "Bob"]);
        assert_eq!(split_values("Jane"), vec!["Jane"]);
        assert!(split_values("").is_empty());
    }

    #[test]
    fn join_matches_split() {
        let values = vec!["Jane".to_string(), "Bob".to_string()];
        assert_eq!(join_values(&values), "Jane\0Bob");
    }
}

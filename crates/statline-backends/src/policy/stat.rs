//! Stat name validation.

use statline_core::error::{Result, StatsError};

/// Reject empty names, names longer than `max_len`, and names using anything
/// other than ASCII letters, digits, `_`, `.` and `-`.
pub fn validate_stat(name: &str, max_len: usize) -> Result<()> {
    if name.is_empty() {
        return Err(StatsError::InvalidName("stat name must not be empty".into()));
    }
    if name.len() > max_len {
        return Err(StatsError::InvalidName(format!(
            "stat name {name} must be at most {max_len} characters"
        )));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')))
    {
        return Err(StatsError::InvalidName(format!(
            "stat name {name} contains invalid character {c:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use statline_core::ErrorCode;

    #[test]
    fn accepts_dotted_names() {
        assert!(validate_stat("scheduler.tasks-running_total", 250).is_ok());
    }

    #[test]
    fn rejects_bad_input() {
        for bad in ["", "has space", "tag,inside", "emoji\u{1F600}", "k=v"] {
            let err = validate_stat(bad, 250).unwrap_err();
            assert_eq!(err.code().as_str(), "INVALID_NAME", "{bad}");
        }
    }

    #[test]
    fn enforces_length() {
        let long = "a".repeat(11);
        assert!(validate_stat(&long, 10).is_err());
        assert!(validate_stat(&long[..10], 10).is_ok());
    }
}

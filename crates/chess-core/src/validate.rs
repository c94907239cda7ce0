//! Round and game identifiers arriving from request paths.

use crate::error::PipelineError;

/// Parse a 1-based round or game number.
///
/// Anything that is not a positive integer is rejected. Parsing is strict:
/// trailing junk (`"2abc"`) or surrounding whitespace (`" 2"`) is an error
/// rather than being read as `2`. Whether the number actually exists in the
/// tournament is left to the fetch stage.
pub fn parse_identifier(raw: &str) -> Result<u32, PipelineError> {
    let invalid = || PipelineError::InvalidIdentifier(raw.to_string());

    let n: i64 = raw.parse().map_err(|_| invalid())?;
    if n <= 0 {
        return Err(invalid());
    }
    u32::try_from(n).map_err(|_| invalid())
}

/// Check a tournament id before it is spliced into upstream URLs and the
/// attachment filename. Ids are opaque, but must be one non-empty path segment
/// of visible characters.
pub fn check_tournament_id(raw: &str) -> Result<&str, PipelineError> {
    let bad = |c: char| {
        matches!(c, '/' | '\\' | '?' | '#' | '"' | ';') || c.is_whitespace() || c.is_control()
    };
    if raw.is_empty() || raw == "." || raw == ".." || raw.contains(bad) {
        return Err(PipelineError::InvalidIdentifier(raw.to_string()));
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_positive_integers() {
        assert_eq!(parse_identifier("1").unwrap(), 1);
        assert_eq!(parse_identifier("42").unwrap(), 42);
    }

    #[test]
    fn test_rejects_zero_negative_and_garbage() {
        for raw in ["0", "-3", "", "abc", "1.5", " 2"] {
            assert!(
                matches!(parse_identifier(raw), Err(PipelineError::InvalidIdentifier(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_no_upper_bound_below_u32() {
        assert_eq!(parse_identifier("4000000000").unwrap(), 4_000_000_000);
    }

    #[test]
    fn test_tournament_ids() {
        assert_eq!(check_tournament_id("a1b2-c3d4").unwrap(), "a1b2-c3d4");
        for raw in ["", ".", "..", "a/b", "a?poll", "a#b", "a b", "a;b", "a\"b", "a\\b", "a\nb"] {
            assert!(
                matches!(check_tournament_id(raw), Err(PipelineError::InvalidIdentifier(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}

use crate::error::{ArcPickError, Result};

/// Parses comma-separated 1-based indices into `entries`.
///
/// Order and repeats are kept as typed. One bad token rejects the whole input.
pub fn validate_indices<T>(entries: &[T], raw_input: &str) -> Result<Vec<usize>> {
    let max = entries.len();

    raw_input
        .split(',')
        .map(|token| parse_index(token, max))
        .collect()
}

fn parse_index(token: &str, max: usize) -> Result<usize> {
    let trimmed = token.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ArcPickError::NotAnIndex {
            token: trimmed.to_string(),
        });
    }

    // Negative and oversized numbers are still numbers, just not on the list.
    match trimmed.strip_prefix('+').unwrap_or(trimmed).parse::<usize>() {
        Ok(index) if (1..=max).contains(&index) => Ok(index),
        _ => Err(ArcPickError::IndexOutOfRange {
            token: trimmed.to_string(),
            max,
        }),
    }
}

use std::cmp::Ordering;

use crate::collation::Collator;
use crate::config::CollationConfig;

/// Human-friendly ordering: embedded digit runs compare by numeric value and
/// letters compare by their Unicode lowercase form unless case sensitivity is
/// requested. Digit runs sort before text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaturalCollator {
    numeric: bool,
    case_sensitive: bool,
}

impl Default for NaturalCollator {
    fn default() -> Self {
        Self {
            numeric: true,
            case_sensitive: false,
        }
    }
}

impl From<&CollationConfig> for NaturalCollator {
    fn from(config: &CollationConfig) -> Self {
        Self {
            numeric: config.numeric,
            case_sensitive: config.case_sensitive,
        }
    }
}

impl NaturalCollator {
    pub fn new(numeric: bool, case_sensitive: bool) -> Self {
        Self {
            numeric,
            case_sensitive,
        }
    }

    fn compare_text(&self, left: &str, right: &str) -> Ordering {
        if self.case_sensitive {
            left.cmp(right)
        } else {
            left.chars()
                .flat_map(char::to_lowercase)
                .cmp(right.chars().flat_map(char::to_lowercase))
        }
    }

    fn compare_chunks(&self, left: Chunk<'_>, right: Chunk<'_>) -> Ordering {
        match (left, right) {
            (Chunk::Digits(l), Chunk::Digits(r)) => compare_numeric(l, r),
            (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
            (Chunk::Text(l), Chunk::Text(r)) => self.compare_text(l, r),
        }
    }
}

impl Collator for NaturalCollator {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        if !self.numeric {
            return self.compare_text(left, right);
        }

        let mut left_chunks = Chunks::new(left);
        let mut right_chunks = Chunks::new(right);
        loop {
            match (left_chunks.next(), right_chunks.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(l), Some(r)) => match self.compare_chunks(l, r) {
                    Ordering::Equal => continue,
                    unequal => return unequal,
                },
            }
        }
    }
}

/// Compares two ASCII digit runs by value without parsing, so arbitrarily
/// long runs never overflow. Equal values with more leading zeros sort later.
fn compare_numeric(left: &str, right: &str) -> Ordering {
    let left_value = left.trim_start_matches('0');
    let right_value = right.trim_start_matches('0');
    left_value
        .len()
        .cmp(&right_value.len())
        .then_with(|| left_value.cmp(right_value))
        .then_with(|| left.len().cmp(&right.len()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

/// Splits a name into alternating runs of ASCII digits and everything else.
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());

        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if digits {
            Chunk::Digits(chunk)
        } else {
            Chunk::Text(chunk)
        })
    }
}

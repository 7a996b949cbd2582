//! Character-offset indexing.
//!
//! Offsets count `char`s, not bytes, so `"héllo"` has five positions and slicing
//! never splits a code point.

use std::ops::{Bound, RangeBounds};

use thiserror::Error;

/// Errors that can occur when indexing a string by character offset.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum IndexError {
    /// The offset is past the end of the string.
    #[error("Index {index} out of bounds for length {length}")]
    OutOfBounds {
        /// The requested character offset.
        index: usize,
        /// The number of characters in the string.
        length: usize,
    },
    /// The range starts after it ends.
    #[error("Range start {start} is after end {end}")]
    InvertedRange {
        /// The resolved start offset.
        start: usize,
        /// The resolved end offset.
        end: usize,
    },
}

fn out_of_bounds(value: &str, index: usize) -> IndexError {
    IndexError::OutOfBounds {
        index,
        length: value.chars().count(),
    }
}

/// Byte offset of the `index`th character, where `index == len` is the end.
fn byte_offset(value: &str, index: usize) -> Result<usize, IndexError> {
    value
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(value.len()))
        .nth(index)
        .ok_or_else(|| out_of_bounds(value, index))
}

/// The character at `index`.
///
/// # Errors
///
/// * `IndexError::OutOfBounds` - If `index` is not less than the number of characters.
pub fn char_at(value: &str, index: usize) -> Result<char, IndexError> {
    value
        .chars()
        .nth(index)
        .ok_or_else(|| out_of_bounds(value, index))
}

/// The substring covering `range`, in character offsets.
///
/// Accepts any range form: `1..3`, `1..=3`, `2..`, `..=2`, `..2` and `..`.
///
/// # Errors
///
/// * `IndexError::OutOfBounds` - If either end lies past the end of the string.
/// * `IndexError::InvertedRange` - If the range starts after it ends.
pub fn substring<R: RangeBounds<usize>>(value: &str, range: R) -> Result<&str, IndexError> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start
            .checked_add(1)
            .ok_or_else(|| out_of_bounds(value, start))?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end
            .checked_add(1)
            .ok_or_else(|| out_of_bounds(value, end))?,
        Bound::Excluded(&end) => end,
        Bound::Unbounded => return Ok(&value[byte_offset(value, start)?..]),
    };

    if start > end {
        return Err(IndexError::InvertedRange { start, end });
    }

    let start = byte_offset(value, start)?;
    let end = byte_offset(value, end)?;

    Ok(&value[start..end])
}

// shuffled_numbers: bounds-checked element swap for ordered containers
// by Ian Kluft
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use std::{error::Error, fmt};

/// which argument of a swap was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapIndex {
    First,
    Second,
}

impl fmt::Display for SwapIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapIndex::First => write!(f, "first index"),
            SwapIndex::Second => write!(f, "second index"),
        }
    }
}

/// errors from swapping container elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    /// index is not within [0, len) of the container
    IndexOutOfRange {
        which: SwapIndex,
        index: usize,
        len: usize,
    },
}

impl fmt::Display for SwapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapError::IndexOutOfRange { which, index, len } => write!(
                f,
                "{which}: cannot swap element at index {index} in list of size {len}"
            ),
        }
    }
}

impl Error for SwapError {}

/// In-place swap of two elements, validating both indices first.
///
/// Implemented once for slices so arrays and vectors share the same checks.
pub trait SwapElements {
    fn swap_elements(&mut self, first: usize, second: usize) -> Result<(), SwapError>;
}

// check one index against the container length
fn check_index(which: SwapIndex, index: usize, len: usize) -> Result<(), SwapError> {
    if index >= len {
        return Err(SwapError::IndexOutOfRange { which, index, len });
    }
    Ok(())
}

impl<T> SwapElements for [T] {
    fn swap_elements(&mut self, first: usize, second: usize) -> Result<(), SwapError> {
        let len = self.len();
        check_index(SwapIndex::First, first, len)?;
        check_index(SwapIndex::Second, second, len)?;

        // an element swapped with itself stays put
        if first == second {
            return Ok(());
        }

        self.swap(first, second);
        Ok(())
    }
}

// shuffled_numbers: in-place Fisher-Yates (Durstenfeld) shuffle
// by Ian Kluft
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use crate::swap::{SwapElements, SwapError};
use rand::Rng;

/// Source of values uniformly distributed in [0, 1).
///
/// Every `rand` generator is a source, so `rand::thread_rng()` serves in production
/// and a scripted implementation can stand in for tests.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        // Standard distribution for f64 is the half-open interval [0, 1)
        self.gen::<f64>()
    }
}

// map a draw in [0, 1) onto [0, bound) by multiply and truncate toward zero
fn scale_draw(draw: f64, bound: usize) -> usize {
    (draw * bound as f64) as usize
}

/// Shuffle `items` in place.
///
/// Walks the last unshuffled position from the end down to 1, swapping it with a
/// position drawn from the still-unshuffled range. Slices of zero or one element never
/// consult `random`. The permutation depends only on the sequence of draws.
///
/// A source that breaks its contract by returning 1.0 or more selects an index past the
/// unshuffled range and the swap reports it as [`SwapError::IndexOutOfRange`].
pub fn shuffle<T, R>(items: &mut [T], random: &mut R) -> Result<(), SwapError>
where
    R: RandomSource + ?Sized,
{
    for last_unshuffled in (1..items.len()).rev() {
        // randomly pick any unshuffled element, which may be the last one itself
        let picked = scale_draw(random.next_unit(), last_unshuffled + 1);
        items.swap_elements(picked, last_unshuffled)?;
    }
    Ok(())
}

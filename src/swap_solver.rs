// Solve Swap
// Copyright (C) 2024  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use super::arrangement::{self, InvalidInput};
use super::cycles;
use super::matching::Matchings;
use std::hash::Hash;

/// Compute a shortest sequence of swaps that transforms the puzzle
/// arrangement into the target arrangement.
///
/// When a symbol appears more than once the choice of which
/// occurrence travels to which position is free, and different
/// choices give different cycle structures. A mapping with E moved
/// positions and C cycles costs E - C swaps, so the search keeps the
/// matching with the most cycles.
pub fn solve<T>(
    puzzle: &[T],
    target: &[T]
) -> Result<Vec<(usize, usize)>, InvalidInput>
where
    T: Hash + Clone + Eq
{
    arrangement::validate(puzzle, target)?;

    let mut matchings = Matchings::new(puzzle, target);

    let mut mapping = (0..puzzle.len()).collect::<Vec<usize>>();
    let mut best_mapping = mapping.clone();
    let mut best_cycles = None;

    // Every cycle covers at least two misplaced positions, so no
    // matching can beat this many cycles
    let cycle_limit = matchings.n_misplaced() / 2;

    while matchings.advance() {
        matchings.write_mapping(&mut mapping);

        let n_cycles = cycles::count(&mapping);

        if best_cycles.map(|best| n_cycles > best).unwrap_or(true) {
            best_mapping.copy_from_slice(&mapping);
            best_cycles = Some(n_cycles);

            if n_cycles >= cycle_limit {
                break;
            }
        }
    }

    let swaps = cycles::swaps(&best_mapping);

    debug_assert!({
        let mut state = puzzle.to_vec();
        arrangement::apply_swaps(&mut state, &swaps);
        state == target
    });

    Ok(swaps)
}

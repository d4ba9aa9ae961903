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

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    LengthMismatch { puzzle: usize, target: usize },
    MultisetMismatch,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidInput::LengthMismatch { puzzle, target } => {
                write!(
                    f,
                    "puzzle and target have different lengths \
                     ({} and {})",
                    puzzle,
                    target,
                )
            },
            InvalidInput::MultisetMismatch => {
                write!(f, "puzzle and target contain different symbols")
            },
        }
    }
}

/// Check that the two arrangements have the same length and the same
/// multiset of symbols. Any pair that passes can be solved.
pub fn validate<T>(puzzle: &[T], target: &[T]) -> Result<(), InvalidInput>
where
    T: Hash + Eq
{
    if puzzle.len() != target.len() {
        return Err(InvalidInput::LengthMismatch {
            puzzle: puzzle.len(),
            target: target.len(),
        });
    }

    let mut counts = HashMap::new();

    for symbol in puzzle.iter() {
        *counts.entry(symbol).or_insert(0usize) += 1;
    }

    for symbol in target.iter() {
        match counts.get_mut(symbol) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return Err(InvalidInput::MultisetMismatch),
        }
    }

    Ok(())
}

/// Apply a swap sequence in order. Used to verify that a solution
/// really transforms the puzzle into the target.
pub fn apply_swaps<T>(arrangement: &mut [T], swaps: &[(usize, usize)]) {
    for &(a, b) in swaps.iter() {
        arrangement.swap(a, b);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn matching_multisets() {
        let puzzle = "listen".chars().collect::<Vec<char>>();
        let target = "silent".chars().collect::<Vec<char>>();

        assert_eq!(validate(&puzzle, &target), Ok(()));
    }

    #[test]
    fn empty() {
        assert_eq!(validate::<char>(&[], &[]), Ok(()));
    }

    #[test]
    fn length_mismatch() {
        let puzzle = ['a', 'b', 'c'];
        let target = ['a', 'b'];

        assert_eq!(
            validate(&puzzle, &target),
            Err(InvalidInput::LengthMismatch { puzzle: 3, target: 2 }),
        );
        assert_eq!(
            InvalidInput::LengthMismatch { puzzle: 3, target: 2 }.to_string(),
            "puzzle and target have different lengths (3 and 2)",
        );
    }

    #[test]
    fn multiset_mismatch() {
        let puzzle = ['a', 'a', 'b'];
        let target = ['a', 'b', 'b'];

        assert_eq!(
            validate(&puzzle, &target),
            Err(InvalidInput::MultisetMismatch),
        );
        assert_eq!(
            InvalidInput::MultisetMismatch.to_string(),
            "puzzle and target contain different symbols",
        );
    }

    #[test]
    fn same_length_different_symbols() {
        let puzzle = ['a', 'b'];
        let target = ['a', 'c'];

        assert_eq!(
            validate(&puzzle, &target),
            Err(InvalidInput::MultisetMismatch),
        );
    }

    #[test]
    fn apply() {
        let mut arrangement = ['a', 'b', 'c', 'd'];

        apply_swaps(&mut arrangement, &[(0, 1), (0, 3)]);

        assert_eq!(arrangement, ['d', 'a', 'c', 'b']);

        apply_swaps(&mut arrangement, &[]);

        assert_eq!(arrangement, ['d', 'a', 'c', 'b']);
    }
}

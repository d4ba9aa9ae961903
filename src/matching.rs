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

use super::permute;
use std::collections::HashMap;
use std::hash::Hash;

// The misplaced positions holding one symbol value, paired with the
// misplaced positions that need that value. The two lists are always
// the same length because the arrangements share a multiset and the
// coincident positions consume one of each.
struct Group {
    sources: Vec<usize>,
    dests: permute::Permutations<usize>,
}

/// Enumerates every way of assigning each misplaced puzzle occurrence
/// of a symbol to a misplaced target occurrence of the same symbol.
/// Positions that already hold their target symbol are left out: any
/// matching that moves one can be rewired to one that doesn't without
/// needing more swaps.
pub struct Matchings {
    groups: Vec<Group>,
    n_misplaced: usize,
    started: bool,
}

impl Matchings {
    pub fn new<T>(puzzle: &[T], target: &[T]) -> Matchings
    where
        T: Hash + Eq
    {
        assert_eq!(puzzle.len(), target.len());

        let mut group_nums = HashMap::new();
        let mut groups = Vec::<(Vec<usize>, Vec<usize>)>::new();
        let mut n_misplaced = 0;

        for (i, (p, t)) in puzzle.iter().zip(target.iter()).enumerate() {
            if p == t {
                continue;
            }

            n_misplaced += 1;

            let source_group = *group_nums.entry(p).or_insert_with(|| {
                groups.push(Default::default());
                groups.len() - 1
            });
            groups[source_group].0.push(i);

            let dest_group = *group_nums.entry(t).or_insert_with(|| {
                groups.push(Default::default());
                groups.len() - 1
            });
            groups[dest_group].1.push(i);
        }

        Matchings {
            groups: groups
                .into_iter()
                .map(|(sources, dests)| Group {
                    sources,
                    dests: permute::Permutations::new(dests),
                })
                .collect(),
            n_misplaced,
            started: false,
        }
    }

    pub fn n_misplaced(&self) -> usize {
        self.n_misplaced
    }

    /// Step to the next matching, or return false once every
    /// combination of per-symbol assignments has been visited. The
    /// first matching pairs occurrences in position order, which is
    /// the naive first-occurrence baseline.
    pub fn advance(&mut self) -> bool {
        if !self.started {
            self.started = true;

            for group in self.groups.iter_mut() {
                group.dests.advance();
            }

            return true;
        }

        // Odometer over the per-symbol permutations
        for group in self.groups.iter_mut() {
            if group.dests.advance() {
                return true;
            }

            group.dests.reset();
            group.dests.advance();
        }

        false
    }

    /// Write the current matching into a mapping of position to
    /// destination position. Only the misplaced positions are
    /// touched, so the caller keeps `dest[i] == i` everywhere else.
    pub fn write_mapping(&self, dest: &mut [usize]) {
        for group in self.groups.iter() {
            let assigned = group.dests.current();

            for (&source, &d) in group.sources.iter().zip(assigned.iter()) {
                dest[source] = d;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn collect_mappings(puzzle: &str, target: &str) -> Vec<Vec<usize>> {
        let puzzle = puzzle.chars().collect::<Vec<char>>();
        let target = target.chars().collect::<Vec<char>>();
        let mut matchings = Matchings::new(&puzzle, &target);
        let mut dest = (0..puzzle.len()).collect::<Vec<usize>>();
        let mut mappings = Vec::new();

        while matchings.advance() {
            matchings.write_mapping(&mut dest);
            mappings.push(dest.clone());
        }

        mappings
    }

    #[test]
    fn identity() {
        let mappings = collect_mappings("abc", "abc");

        // One trivial matching with nothing misplaced
        assert_eq!(mappings, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn distinct_symbols_have_one_matching() {
        let mappings = collect_mappings("abcd", "bcda");

        // Each element's destination is forced
        assert_eq!(mappings, vec![vec![3, 0, 1, 2]]);
    }

    #[test]
    fn duplicate_count() {
        // Two a's and two b's are all misplaced, so there are
        // 2! * 2! assignments
        let mappings = collect_mappings("aabb", "bbaa");

        assert_eq!(mappings.len(), 4);

        for mapping in mappings.iter() {
            // a's at 0 and 1 must go to 2 or 3 and vice versa
            assert!(mapping[0] >= 2 && mapping[1] >= 2);
            assert!(mapping[2] < 2 && mapping[3] < 2);
            assert_ne!(mapping[0], mapping[1]);
            assert_ne!(mapping[2], mapping[3]);
        }
    }

    #[test]
    fn coincident_positions_are_pinned() {
        let puzzle = "aba".chars().collect::<Vec<char>>();
        let target = "aab".chars().collect::<Vec<char>>();
        let matchings = Matchings::new(&puzzle, &target);

        assert_eq!(matchings.n_misplaced(), 2);

        let mappings = collect_mappings("aba", "aab");

        assert_eq!(mappings, vec![vec![0, 2, 1]]);
    }

    #[test]
    fn first_matching_is_in_position_order() {
        let mappings = collect_mappings("abca", "caab");

        // a's at 0 and 3 paired with dests 1 and 2 in order
        assert_eq!(mappings[0], vec![1, 3, 0, 2]);
        // 2! for the duplicated a, 1 for b and c
        assert_eq!(mappings.len(), 2);
    }
}

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

// A mapping is a permutation of positions given as a slice where
// `mapping[i]` is the position that the element currently at `i`
// needs to move to. Fixed points have `mapping[i] == i`.

/// Count the cycles of length at least two. A mapping over E moved
/// positions with C such cycles needs exactly E - C swaps.
pub fn count(mapping: &[usize]) -> usize {
    let mut visited = vec![false; mapping.len()];
    let mut n_cycles = 0;

    for start in 0..mapping.len() {
        if visited[start] || mapping[start] == start {
            continue;
        }

        n_cycles += 1;

        let mut pos = start;

        while !visited[pos] {
            visited[pos] = true;
            pos = mapping[pos];
        }
    }

    n_cycles
}

/// Resolve each cycle a0 → a1 → … → a(L-1) → a0 with the swaps
/// (a0,a1), (a0,a2), …, (a0,a(L-1)). Each swap settles the next
/// position of the cycle, so the sequence length is the minimum
/// E - C for this mapping.
pub fn swaps(mapping: &[usize]) -> Vec<(usize, usize)> {
    let mut visited = vec![false; mapping.len()];
    let mut swaps = Vec::new();

    for start in 0..mapping.len() {
        if visited[start] || mapping[start] == start {
            continue;
        }

        visited[start] = true;

        let mut pos = mapping[start];

        while pos != start {
            visited[pos] = true;
            swaps.push((start, pos));
            pos = mapping[pos];
        }
    }

    swaps
}

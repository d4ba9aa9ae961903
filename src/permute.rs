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

/// Steps through every ordering of its items in place using the
/// iterative form of Heap's algorithm. After a reset it enumerates
/// every ordering of whatever the items' current order is, so a
/// full pass is always n! steps regardless of the starting order.
pub struct Permutations<T> {
    items: Vec<T>,
    counters: Vec<usize>,
    index: usize,
    started: bool,
}

impl<T> Permutations<T> {
    pub fn new(items: Vec<T>) -> Permutations<T> {
        let n_items = items.len();

        Permutations {
            items,
            counters: vec![0; n_items],
            index: 1,
            started: false,
        }
    }

    pub fn current(&self) -> &[T] {
        &self.items
    }

    /// Step to the next ordering, or return false when every
    /// ordering has been visited. The first call leaves the items
    /// untouched so that the initial order is visited too.
    pub fn advance(&mut self) -> bool {
        if !self.started {
            self.started = true;
            return !self.items.is_empty();
        }

        while self.index < self.items.len() {
            let i = self.index;

            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.items.swap(0, i);
                } else {
                    self.items.swap(self.counters[i], i);
                }

                self.counters[i] += 1;
                self.index = 1;

                return true;
            } else {
                self.counters[i] = 0;
                self.index += 1;
            }
        }

        false
    }

    pub fn reset(&mut self) {
        for counter in self.counters.iter_mut() {
            *counter = 0;
        }
        self.index = 1;
        self.started = false;
    }
}

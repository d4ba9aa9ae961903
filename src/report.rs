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

use std::fmt;

/// Formats a solution as a line starting with “<count> swaps”. The
/// calling harness matches that prefix, so it must come first; the
/// listing after it is only for diagnostics and can be turned off.
pub struct Report<'a> {
    swaps: &'a [(usize, usize)],
    list_swaps: bool,
}

impl<'a> Report<'a> {
    pub fn new(swaps: &'a [(usize, usize)], list_swaps: bool) -> Report<'a> {
        Report {
            swaps,
            list_swaps,
        }
    }
}

impl<'a> fmt::Display for Report<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} swaps", self.swaps.len())?;

        if self.list_swaps && !self.swaps.is_empty() {
            write!(f, ":")?;

            for &(a, b) in self.swaps.iter() {
                write!(f, " {},{}", a, b)?;
            }
        }

        Ok(())
    }
}

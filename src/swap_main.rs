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

mod arrangement;
mod cycles;
mod matching;
mod permute;
mod report;
mod swap_solver;

use clap::Parser;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "solve-swap",
    about = "Find the minimum number of swaps that turns the puzzle \
             arrangement into the target arrangement",
)]
struct Args {
    /// The puzzle arrangement
    puzzle: String,
    /// The target arrangement
    target: String,
    /// Print only the swap count without the list of swaps
    #[arg(long)]
    count_only: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let puzzle = args.puzzle.chars().collect::<Vec<char>>();
    let target = args.target.chars().collect::<Vec<char>>();

    match swap_solver::solve(&puzzle, &target) {
        Ok(swaps) => {
            println!("{}", report::Report::new(&swaps, !args.count_only));
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("solve-swap: {}", e);
            ExitCode::FAILURE
        },
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use clap::Parser;
use colored::Colorize;

use movecheck::{
    attackers_of, is_in_check, legal_destinations, Board, Color, Square, BOARD_WIDTH,
};

/// Show where a piece may move, and whether its square is under attack.
#[derive(Debug, Parser)]
struct Cli {
    /// Placement string of the board, such as the first field of a FEN string.
    placement: String,

    /// Square of the piece to inspect, in algebraic notation (e.g. "e2").
    square: Square,

    /// Print the board without colors.
    #[arg(long, default_value = "false")]
    plain: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    if args.plain {
        colored::control::set_override(false);
    }

    let board = Board::from_placement(&args.placement)?;
    let Some(piece) = board.occupant_at(args.square) else {
        anyhow::bail!("There is no piece on {}", args.square);
    };

    let destinations = legal_destinations(&board, args.square);
    let attackers = attackers_of(&board, args.square, piece.color());

    println!("{}", render(&board, args.square, &destinations));
    println!();
    println!(
        "{} {} on {} can reach {} square(s): {}",
        piece.color(),
        piece.kind(),
        args.square,
        destinations.len(),
        join(&destinations)
    );
    if attackers.is_empty() {
        println!("{} is not attacked", args.square);
    } else {
        println!("{} is attacked from: {}", args.square, join(&attackers));
    }

    for color in Color::all() {
        let status = if is_in_check(&board, color) {
            "in check".red().bold()
        } else {
            "not in check".green()
        };
        println!("{color} is {status}");
    }

    Ok(())
}

/// Draws the board with `selected` in yellow and its destinations in green.
fn render(board: &Board, selected: Square, destinations: &[Square]) -> String {
    let mut out = String::new();

    for line in (0..BOARD_WIDTH as u8).rev() {
        out += &format!("{}| ", line + 1);

        for column in 0..BOARD_WIDTH as u8 {
            let square = Square::new(line, column);
            let occupant = board
                .occupant_at(square)
                .map_or(String::from("."), |piece| piece.to_string());

            let cell = if square == selected {
                occupant.black().on_yellow()
            } else if destinations.contains(&square) {
                occupant.black().on_green()
            } else {
                occupant.normal()
            };
            out += &format!("{cell} ");
        }

        out += "\n";
    }
    out += " +";
    out += &"--".repeat(BOARD_WIDTH);
    out += "\n   a b c d e f g h";

    out
}

fn join(squares: &[Square]) -> String {
    squares
        .iter()
        .map(Square::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

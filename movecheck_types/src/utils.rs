/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Number of lines (and of columns) on the board.
pub const BOARD_WIDTH: usize = 8;

/// Placement string of the standard starting position.
///
/// Rows are listed from line 7 down to line 0, so White's pieces are at the end.
pub const PLACEMENT_STARTPOS: &str = "rhbqkbhr/pppppppp/8/8/8/8/PPPPPPPP/RHBQKBHR";

/// The eight `(line, column)` jumps a Horse can make.
pub const HORSE_DELTAS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The eight `(line, column)` steps a King can make.
pub const KING_DELTAS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

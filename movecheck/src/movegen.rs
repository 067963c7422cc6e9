/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use arrayvec::ArrayVec;

use super::{Board, MoveRules, Square};

/// Most squares a single piece can ever move to: a Queen in the middle of an empty board.
pub const MAX_DESTINATIONS: usize = 27;

/// An alias for an [`arrayvec::ArrayVec`] containing at most [`MAX_DESTINATIONS`] squares.
pub type DestinationList = ArrayVec<Square, MAX_DESTINATIONS>;

/// Collects every square the piece on `from` may legally move to, in square-index order.
///
/// If `from` is empty, so is the list.
///
/// # Example
/// ```
/// # use movecheck::*;
/// let board = Board::default();
/// let horse = legal_destinations(&board, Square::new(0, 1));
/// assert_eq!(horse.as_slice(), &[Square::new(2, 0), Square::new(2, 2)]);
/// ```
pub fn legal_destinations(board: &Board, from: Square) -> DestinationList {
    let mut destinations = DestinationList::new();

    let Some(piece) = board.occupant_at(from) else {
        return destinations;
    };

    for to in Square::iter() {
        if piece.can_move(board, from, to) {
            destinations.push(to);
        }
    }

    destinations
}

/// Number of legal moves available to every piece of the board, summed.
pub fn count_legal_moves(board: &Board) -> usize {
    board
        .iter()
        .map(|(square, _)| legal_destinations(board, square).len())
        .sum()
}

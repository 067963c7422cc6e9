/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use arrayvec::ArrayVec;

use super::{Board, Color, Piece, PieceKind, Square, HORSE_DELTAS, KING_DELTAS};

/// The squares strictly between two squares on a shared line, column or diagonal.
///
/// At most 6 squares can lie between two squares of an 8x8 board.
pub type Ray = ArrayVec<Square, 6>;

/// Legality of a single move for a piece, given the [`Board`] it stands on.
///
/// The piece's own location is never stored; it is always passed in with the query.
pub trait MoveRules {
    /// Returns `true` if this piece, standing on `(line, column)`, may move to `(to_line, to_column)`.
    ///
    /// Coordinates are unchecked: anything outside `[0, 7]` simply yields `false`, as does a
    /// "move" that ends where it started.
    ///
    /// # Example
    /// ```
    /// # use movecheck::*;
    /// let board = Board::default();
    /// let pawn = Piece::new(Color::White, PieceKind::Pawn);
    /// assert!(pawn.can_move_to_position(&board, 1, 3, 3, 3));
    /// assert!(!pawn.can_move_to_position(&board, 1, 3, 4, 3));
    /// assert!(!pawn.can_move_to_position(&board, 1, 3, 1, 3));
    /// assert!(!pawn.can_move_to_position(&board, 1, 3, -1, 3));
    /// ```
    fn can_move_to_position(
        &self,
        board: &Board,
        line: i32,
        column: i32,
        to_line: i32,
        to_column: i32,
    ) -> bool;

    /// Same as [`MoveRules::can_move_to_position`], for squares that are already known to be valid.
    #[inline(always)]
    fn can_move(&self, board: &Board, from: Square, to: Square) -> bool {
        self.can_move_to_position(
            board,
            from.line() as i32,
            from.column() as i32,
            to.line() as i32,
            to.column() as i32,
        )
    }
}

impl MoveRules for Piece {
    fn can_move_to_position(
        &self,
        board: &Board,
        line: i32,
        column: i32,
        to_line: i32,
        to_column: i32,
    ) -> bool {
        if !(Board::in_bounds(line)
            && Board::in_bounds(column)
            && Board::in_bounds(to_line)
            && Board::in_bounds(to_column))
        {
            return false;
        }

        let from = Square::new(line as u8, column as u8);
        let to = Square::new(to_line as u8, to_column as u8);
        if from == to {
            return false;
        }

        // Can't capture own pieces. Pawns check the destination per branch instead.
        let enemy_or_empty = !board
            .occupant_at(to)
            .is_some_and(|occupant| occupant.is_ally_of(self));

        match self.kind() {
            PieceKind::Pawn => pawn_can_move(board, self.color(), from, to),
            PieceKind::Rook => enemy_or_empty && rook_can_move(board, from, to),
            PieceKind::Bishop => enemy_or_empty && bishop_can_move(board, from, to),
            PieceKind::Queen => enemy_or_empty && queen_can_move(board, from, to),
            PieceKind::Horse => enemy_or_empty && horse_can_move(from, to),
            PieceKind::King => enemy_or_empty && king_can_move(from, to),
        }
    }
}

/// Signed `(line, column)` distance from `from` to `to`.
#[inline(always)]
const fn deltas(from: Square, to: Square) -> (i32, i32) {
    (
        to.line() as i32 - from.line() as i32,
        to.column() as i32 - from.column() as i32,
    )
}

/// Returns `true` if `from` and `to` share a line or a column.
#[inline(always)]
pub const fn is_orthogonal(from: Square, to: Square) -> bool {
    let (lines, columns) = deltas(from, to);
    lines == 0 || columns == 0
}

/// Returns `true` if `from` and `to` share a diagonal.
#[inline(always)]
pub const fn is_diagonal(from: Square, to: Square) -> bool {
    let (lines, columns) = deltas(from, to);
    lines.abs() == columns.abs()
}

/// Collects the squares strictly between `from` and `to`, walking one unit step at a time.
///
/// If the squares do not share a line, column or diagonal (or are the same square), the ray is empty.
///
/// # Example
/// ```
/// # use movecheck::*;
/// let a1 = Square::new(0, 0);
/// let d4 = Square::new(3, 3);
/// assert_eq!(ray_between(a1, d4).as_slice(), &[Square::new(1, 1), Square::new(2, 2)]);
/// assert!(ray_between(a1, Square::new(2, 1)).is_empty());
/// ```
pub fn ray_between(from: Square, to: Square) -> Ray {
    let mut ray = Ray::new();
    if from == to || !(is_orthogonal(from, to) || is_diagonal(from, to)) {
        return ray;
    }

    let (lines, columns) = deltas(from, to);
    let (line_step, column_step) = (lines.signum(), columns.signum());

    let mut current = from.offset(line_step, column_step);
    while let Some(square) = current {
        if square == to {
            break;
        }
        ray.push(square);
        current = square.offset(line_step, column_step);
    }

    ray
}

/// Returns `true` if no piece stands strictly between `from` and `to`.
#[inline(always)]
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    ray_between(from, to)
        .into_iter()
        .all(|square| !board.has(square))
}

// The per-kind rules below only judge geometry and the path. Bounds, the
// same-square case and friendly fire are settled by `MoveRules` first.

/// A Rook moves along its line or column, and cannot jump.
#[inline(always)]
pub fn rook_can_move(board: &Board, from: Square, to: Square) -> bool {
    is_orthogonal(from, to) && path_is_clear(board, from, to)
}

/// A Bishop moves along its diagonals, and cannot jump.
#[inline(always)]
pub fn bishop_can_move(board: &Board, from: Square, to: Square) -> bool {
    is_diagonal(from, to) && path_is_clear(board, from, to)
}

/// A Queen moves like either a Rook or a Bishop.
#[inline(always)]
pub fn queen_can_move(board: &Board, from: Square, to: Square) -> bool {
    (is_orthogonal(from, to) || is_diagonal(from, to)) && path_is_clear(board, from, to)
}

/// A Horse jumps in an L, ignoring anything in between.
#[inline(always)]
pub fn horse_can_move(from: Square, to: Square) -> bool {
    HORSE_DELTAS.contains(&deltas(from, to))
}

/// A King steps to any adjacent square.
#[inline(always)]
pub fn king_can_move(from: Square, to: Square) -> bool {
    KING_DELTAS.contains(&deltas(from, to))
}

/// Pawn rules for a pawn of `color` standing on `from`.
///
/// * One step forward onto an empty square.
/// * Two steps forward from the starting line, if both squares ahead are empty.
/// * One step diagonally forward, only to capture an enemy piece.
///
/// There is no en passant.
pub fn pawn_can_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let forward = color.forward();
    let (lines, columns) = deltas(from, to);

    match columns {
        0 if lines == forward => !board.has(to),

        0 if lines == 2 * forward => {
            let Some(skipped) = from.offset(forward, 0) else {
                return false;
            };
            from.line() == color.pawn_start_line() && !board.has(skipped) && !board.has(to)
        }

        -1 | 1 if lines == forward => board.color_at(to) == Some(color.opponent()),

        _ => false,
    }
}

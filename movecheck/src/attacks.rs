/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use arrayvec::ArrayVec;

use super::{Board, Color, MoveRules, Square};

/// An alias for an [`arrayvec::ArrayVec`] that can hold every square on the board.
pub type AttackerList = ArrayVec<Square, { Square::COUNT }>;

/// Returns `true` if `(line, column)` could be moved onto by any piece that is not `defending`'s color.
///
/// An attack is nothing more than a legal move: every enemy piece is asked whether it may move to the
/// target. Because of that, a Pawn never attacks a piece standing straight in front of it, and only
/// attacks its forward diagonals when they hold something to capture. When the target is the defender's
/// own King, this is exactly check. Off-board targets are never attacked.
///
/// # Example
/// ```
/// # use movecheck::*;
/// let board = Board::from_placement("8/8/8/8/8/8/8/R7").unwrap();
/// assert!(is_square_attacked(&board, 0, 7, Color::Black));
/// assert!(!is_square_attacked(&board, 0, 7, Color::White));
/// ```
pub fn is_square_attacked(board: &Board, line: i32, column: i32, defending: Color) -> bool {
    board.iter().any(|(square, piece)| {
        piece.color() != defending
            && piece.can_move_to_position(
                board,
                square.line() as i32,
                square.column() as i32,
                line,
                column,
            )
    })
}

/// Computes every square holding a piece of `defending`'s opponent that attacks `target`, in scan order.
///
/// # Example
/// ```
/// # use movecheck::*;
/// let board = Board::from_placement("8/8/8/8/8/8/1b6/K1r5").unwrap();
/// let attackers = attackers_of(&board, Square::new(0, 0), Color::White);
/// assert_eq!(attackers.as_slice(), &[Square::new(0, 2), Square::new(1, 1)]);
/// ```
pub fn attackers_of(board: &Board, target: Square, defending: Color) -> AttackerList {
    board
        .iter()
        .filter(|(square, piece)| {
            piece.color() != defending && piece.can_move(board, *square, target)
        })
        .map(|(square, _)| square)
        .collect()
}

/// Fetches the square of the first King of `color` on the board, if there is one.
#[inline(always)]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board
        .iter()
        .find(|(_, piece)| piece.color() == color && piece.is_king())
        .map(|(square, _)| square)
}

/// Returns `true` if `color`'s King is attacked by the opponent.
///
/// A side without a King on the board is never in check.
///
/// # Example
/// ```
/// # use movecheck::*;
/// assert!(!is_in_check(&Board::default(), Color::White));
///
/// let board = Board::from_placement("4k3/8/8/8/8/8/8/4R2K").unwrap();
/// assert!(is_in_check(&board, Color::Black));
/// assert!(!is_in_check(&board, Color::White));
/// ```
pub fn is_in_check(board: &Board, color: Color) -> bool {
    king_square(board, color).is_some_and(|king| {
        is_square_attacked(board, king.line() as i32, king.column() as i32, color)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Piece, PieceKind};

    #[test]
    fn test_rook_attack_along_rank() {
        let mut board = Board::new();
        board.place(Piece::new(Color::White, PieceKind::Rook), Square::new(0, 0));

        // Attacked by White, so the defender is Black
        assert!(is_square_attacked(&board, 0, 7, Color::Black));

        for color in Color::all() {
            board.place(Piece::new(color, PieceKind::Pawn), Square::new(0, 4));
            assert!(!is_square_attacked(&board, 0, 7, Color::Black));
            board.clear(Square::new(0, 4));
        }

        assert!(is_square_attacked(&board, 0, 7, Color::Black));
    }

    #[test]
    fn test_horse_attacks_king() {
        let mut board = Board::new();
        let king = Square::new(0, 4);
        board.place(Piece::new(Color::White, PieceKind::King), king);
        board.place(Piece::new(Color::Black, PieceKind::Horse), Square::new(2, 3));

        assert!(is_square_attacked(&board, 0, 4, Color::White));
        assert!(is_in_check(&board, Color::White));
        assert_eq!(
            attackers_of(&board, king, Color::White).as_slice(),
            &[Square::new(2, 3)]
        );

        // Moved out of reach
        board.clear(Square::new(2, 3));
        board.place(Piece::new(Color::Black, PieceKind::Horse), Square::new(2, 4));
        assert!(!is_in_check(&board, Color::White));
    }

    #[test]
    fn test_own_pieces_do_not_attack() {
        let board = Board::from_placement("8/8/8/8/8/8/8/R7").unwrap();
        assert!(!is_square_attacked(&board, 0, 7, Color::White));
    }

    #[test]
    fn test_pawn_attacks_only_diagonally() {
        let mut board = Board::new();
        let white_king = Piece::new(Color::White, PieceKind::King);
        board.place(Piece::new(Color::Black, PieceKind::Pawn), Square::new(4, 4));

        // Diagonal, with something to capture
        board.place(white_king, Square::new(3, 3));
        assert!(is_square_attacked(&board, 3, 3, Color::White));
        board.clear(Square::new(3, 3));

        // Straight ahead is never an attack on a piece
        board.place(white_king, Square::new(3, 4));
        assert!(!is_square_attacked(&board, 3, 4, Color::White));
        assert!(!is_in_check(&board, Color::White));

        // Empty diagonal has nothing to capture
        assert!(!is_square_attacked(&board, 3, 5, Color::White));
        // Behind the pawn
        assert!(!is_square_attacked(&board, 5, 3, Color::White));
    }

    #[test]
    fn test_out_of_bounds_target() {
        let board = Board::default();
        for (line, column) in [(-1, 0), (0, -1), (8, 3), (3, 8)] {
            for color in Color::all() {
                assert!(!is_square_attacked(&board, line, column, color));
            }
        }
    }

    #[test]
    fn test_startpos_attacks() {
        let board = Board::default();

        // A pawn push onto an empty square is a legal move, so it is reported alongside the Horse
        let attackers = attackers_of(&board, Square::new(2, 0), Color::Black);
        assert_eq!(attackers.as_slice(), &[Square::new(0, 1), Square::new(1, 0)]);

        // But a piece in front of a pawn is safe from it
        let mut blocked = board;
        blocked.place(Piece::new(Color::Black, PieceKind::Horse), Square::new(2, 3));
        assert_eq!(
            attackers_of(&blocked, Square::new(2, 3), Color::Black).as_slice(),
            &[Square::new(1, 2), Square::new(1, 4)]
        );

        // Nobody reaches the middle of the board
        assert!(!is_square_attacked(&board, 4, 4, Color::Black));
        assert!(!is_square_attacked(&board, 3, 4, Color::White));

        assert!(!is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn test_no_king_no_check() {
        let board = Board::from_placement("8/8/8/8/8/8/8/R6r").unwrap();
        assert_eq!(king_square(&board, Color::White), None);
        assert!(!is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn test_blocked_check() {
        let mut board = Board::from_placement("4k3/8/8/4q3/8/8/8/4K3").unwrap();
        assert!(is_in_check(&board, Color::White));
        assert_eq!(king_square(&board, Color::White), Some(Square::new(0, 4)));

        board.place(Piece::new(Color::White, PieceKind::Bishop), Square::new(2, 4));
        assert!(!is_in_check(&board, Color::White));
    }

    #[test]
    fn test_repeated_queries_agree() {
        let board = Board::from_placement("r3k2r/pp3ppp/2h5/3q4/3P4/2H2B2/PP3PPP/R3K2R").unwrap();

        for target in Square::iter() {
            for color in Color::all() {
                let (line, column) = (target.line() as i32, target.column() as i32);
                let first = is_square_attacked(&board, line, column, color);
                assert_eq!(first, is_square_attacked(&board, line, column, color));
                assert_eq!(first, !attackers_of(&board, target, color).is_empty());
            }
        }
    }
}

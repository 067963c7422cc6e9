/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use anyhow::{bail, Result};

use super::{is_on_board, Color, Piece, PieceKind, Square, BOARD_WIDTH, PLACEMENT_STARTPOS};

/// An 8x8 grid holding at most one [`Piece`] per [`Square`].
///
/// The board only records *which piece is where*. Legality queries read it and never change it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// One optional occupant per square, indexed by [`Square::index`].
    mailbox: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Creates a new, empty [`Board`] containing no pieces.
    ///
    /// # Example
    /// ```
    /// # use movecheck::Board;
    /// let board = Board::new();
    /// assert_eq!(board.to_placement(), "8/8/8/8/8/8/8/8");
    /// ```
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            mailbox: [None; Square::COUNT],
        }
    }

    /// Returns `true` if `coordinate` is a valid line or column, meaning it is in `[0, 7]`.
    ///
    /// # Example
    /// ```
    /// # use movecheck::Board;
    /// assert!(Board::in_bounds(0));
    /// assert!(Board::in_bounds(7));
    /// assert!(!Board::in_bounds(-1));
    /// assert!(!Board::in_bounds(8));
    /// ```
    #[inline(always)]
    pub const fn in_bounds(coordinate: i32) -> bool {
        is_on_board(coordinate)
    }

    /// Constructs a [`Board`] from a placement string, such as the first field of a FEN string.
    ///
    /// Rows run from line 7 down to line 0. Uppercase letters are White, lowercase are Black,
    /// and digits skip that many empty squares.
    pub fn from_placement(placement: &str) -> Result<Self> {
        let mut board = Self::new();

        // If this is a full FEN string, only the placements matter
        let placements = placement.split_whitespace().next().unwrap_or_default();

        if placements.matches('/').count() != BOARD_WIDTH - 1 {
            bail!("Missing placements for all 8 lines in {placement:?}");
        }

        // Reversed, so that White's pieces land on the low lines
        for (line, row) in placements.split('/').rev().enumerate() {
            let mut column = 0;

            for c in row.chars() {
                if let Some(empty) = c.to_digit(10) {
                    if !(1..=8).contains(&empty) {
                        bail!("Invalid empty-square count {c:?} on line {line}");
                    }
                    column += empty as usize;
                    continue;
                }

                let piece = Piece::from_char(c)?;
                if column >= BOARD_WIDTH {
                    bail!("Line {line} has more than 8 squares in {row:?}");
                }

                board.place(piece, Square::new(line as u8, column as u8));
                column += 1;
            }

            if column != BOARD_WIDTH {
                bail!("Line {line} describes {column} squares instead of 8 in {row:?}");
            }
        }

        Ok(board)
    }

    /// Generates the placement string of this [`Board`].
    ///
    /// # Example
    /// ```
    /// # use movecheck::{Board, PLACEMENT_STARTPOS};
    /// assert_eq!(Board::default().to_placement(), PLACEMENT_STARTPOS);
    /// ```
    pub fn to_placement(&self) -> String {
        let mut rows = Vec::with_capacity(BOARD_WIDTH);

        for line in (0..BOARD_WIDTH as u8).rev() {
            let mut row = String::new();
            let mut empty_spaces = 0;

            for column in 0..BOARD_WIDTH as u8 {
                if let Some(piece) = self.occupant_at(Square::new(line, column)) {
                    if empty_spaces != 0 {
                        row += &empty_spaces.to_string();
                        empty_spaces = 0;
                    }
                    row.push(piece.char());
                } else {
                    empty_spaces += 1;
                }
            }

            if empty_spaces != 0 {
                row += &empty_spaces.to_string();
            }
            rows.push(row);
        }

        rows.join("/")
    }

    /// Fetches the [`Piece`] at the provided [`Square`], if there is one.
    ///
    /// # Example
    /// ```
    /// # use movecheck::{Board, Color, PieceKind, Square};
    /// let board = Board::default();
    /// let piece = board.occupant_at(Square::new(1, 0)).unwrap();
    /// assert_eq!(piece.parts(), (Color::White, PieceKind::Pawn));
    /// assert!(board.occupant_at(Square::new(3, 3)).is_none());
    /// ```
    #[inline(always)]
    pub const fn occupant_at(&self, square: Square) -> Option<Piece> {
        self.mailbox[square.index()]
    }

    /// Fetches the [`Piece`] at `(line, column)`, or `None` if the square is empty or off the board.
    #[inline(always)]
    pub const fn occupant_at_coords(&self, line: i32, column: i32) -> Option<Piece> {
        match Square::new_checked(line, column) {
            Some(square) => self.occupant_at(square),
            None => None,
        }
    }

    /// Returns `true` if there is a piece at the given [`Square`], else `false`.
    #[inline(always)]
    pub const fn has(&self, square: Square) -> bool {
        self.mailbox[square.index()].is_some()
    }

    /// Fetches the [`Color`] of the piece at the provided [`Square`], if there is one.
    #[inline(always)]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.occupant_at(square).map(|piece| piece.color())
    }

    /// Fetches the [`PieceKind`] of the piece at the provided [`Square`], if there is one.
    #[inline(always)]
    pub fn kind_at(&self, square: Square) -> Option<PieceKind> {
        self.occupant_at(square).map(|piece| piece.kind())
    }

    /// Places the provided [`Piece`] on the supplied [`Square`], replacing any previous occupant.
    ///
    /// # Example
    /// ```
    /// # use movecheck::{Board, Piece, PieceKind, Color, Square};
    /// let white_horse = Piece::new(Color::White, PieceKind::Horse);
    /// let mut board = Board::new();
    /// board.place(white_horse, Square::new(3, 2));
    /// assert_eq!(board.to_placement(), "8/8/8/8/2H5/8/8/8");
    /// ```
    #[inline(always)]
    pub fn place(&mut self, piece: Piece, square: Square) {
        self.mailbox[square.index()] = Some(piece);
    }

    /// Clears the supplied [`Square`] of any pieces.
    #[inline(always)]
    pub fn clear(&mut self, square: Square) {
        self.take(square);
    }

    /// Takes the [`Piece`] from a given [`Square`], if there is one present.
    ///
    /// # Example
    /// ```
    /// # use movecheck::{Board, Piece, PieceKind, Color, Square};
    /// let mut board = Board::from_placement("k7/8/8/8/2H5/8/8/7K").unwrap();
    /// let taken = board.take(Square::new(3, 2));
    /// assert_eq!(board.to_placement(), "k7/8/8/8/8/8/8/7K");
    /// assert_eq!(taken, Some(Piece::new(Color::White, PieceKind::Horse)));
    /// ```
    #[inline(always)]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.mailbox[square.index()].take()
    }

    /// Clears the entire board, removing all pieces.
    #[inline(always)]
    pub fn clear_all(&mut self) {
        *self = Self::new();
    }

    /// An iterator over every occupied [`Square`] and its [`Piece`], in square-index order.
    #[inline(always)]
    pub fn iter(&self) -> BoardIter<'_> {
        BoardIter {
            board: self,
            index: 0,
        }
    }
}

impl Default for Board {
    /// The standard starting position.
    #[inline(always)]
    fn default() -> Self {
        // Safe unwrap because the startpos placement is always valid
        Self::from_placement(PLACEMENT_STARTPOS).unwrap()
    }
}

impl FromStr for Board {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_placement(s)
    }
}

impl From<[Option<Piece>; Square::COUNT]> for Board {
    fn from(mailbox: [Option<Piece>; Square::COUNT]) -> Self {
        Self { mailbox }
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;
    #[inline(always)]
    fn index(&self, index: Square) -> &Self::Output {
        &self.mailbox[index.index()]
    }
}

impl IndexMut<Square> for Board {
    #[inline(always)]
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self.mailbox[index.index()]
    }
}

impl<'a> IntoIterator for &'a Board {
    type IntoIter = BoardIter<'a>;
    type Item = <BoardIter<'a> as Iterator>::Item;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut board = String::with_capacity(198);

        for line in (0..BOARD_WIDTH as u8).rev() {
            board += &format!("{}| ", line + 1);

            for column in 0..BOARD_WIDTH as u8 {
                let occupant = match self.occupant_at(Square::new(line, column)) {
                    Some(piece) => piece.char(),
                    None => '.',
                };
                board += &format!("{occupant} ");
            }

            board += "\n";
        }
        board += " +";
        board += &"--".repeat(BOARD_WIDTH);
        board += "\n   ";
        for file in 'a'..='h' {
            board += &format!("{file} ");
        }

        write!(f, "{board}")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:?})", self.to_placement())
    }
}

/// An iterator over the occupied squares of a [`Board`].
///
/// Calls to [`Iterator::next`] will yield a tuple of a [`Square`] and a [`Piece`].
pub struct BoardIter<'a> {
    /// The board to retrieve pieces from.
    board: &'a Board,

    /// Index of the next square to visit.
    index: usize,
}

impl<'a> Iterator for BoardIter<'a> {
    type Item = (Square, Piece);

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(square) = Square::from_index(self.index) {
            self.index += 1;

            if let Some(piece) = self.board.occupant_at(square) {
                return Some((square, piece));
            }
        }

        None
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(Square::COUNT.saturating_sub(self.index)))
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{bail, Result};

/// Represents the color of a player, piece, etc. within a chess board.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// Number of color variants.
    pub const COUNT: usize = 2;

    /// An array of both colors, starting with White.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::White, Self::Black]
    }

    /// Returns this [`Color`]'s opposite / inverse / enemy.
    ///
    /// # Example
    /// ```
    /// # use movecheck_types::Color;
    /// assert_eq!(Color::White.opponent(), Color::Black);
    /// assert_eq!(Color::Black.opponent(), Color::White);
    /// ```
    #[inline(always)]
    pub const fn opponent(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// The line delta of a single forward pawn step for this color.
    ///
    /// White advances toward higher lines, Black toward lower ones.
    #[inline(always)]
    pub const fn forward(&self) -> i32 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    /// The line on which this color's pawns start, and from which they may step twice.
    #[inline(always)]
    pub const fn pawn_start_line(&self) -> u8 {
        match self {
            Self::White => 1,
            Self::Black => 6,
        }
    }

    /// Creates a [`Color`] from a char, according to FEN conventions: `w` or `b`.
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            'w' | 'W' => Ok(Self::White),
            'b' | 'B' => Ok(Self::Black),
            _ => bail!("Color must be either 'w' or 'b' (case-insensitive). Found {c:?}"),
        }
    }

    /// The name of this color.
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
        }
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(Self::White),
            "b" | "black" => Ok(Self::Black),
            _ => bail!("Color must be one of \"w\", \"b\", \"white\" or \"black\". Found {s:?}"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six kinds of chess pieces.
///
/// The knight goes by `Horse` and is drawn as `H`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Horse,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Number of piece kinds.
    pub const COUNT: usize = 6;

    /// An array of all six kinds.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        [
            Self::Pawn,
            Self::Rook,
            Self::Horse,
            Self::Bishop,
            Self::Queen,
            Self::King,
        ]
    }

    /// The uppercase one-character symbol for this kind.
    ///
    /// # Example
    /// ```
    /// # use movecheck_types::PieceKind;
    /// assert_eq!(PieceKind::Horse.symbol(), 'H');
    /// assert_eq!(PieceKind::Queen.symbol(), 'Q');
    /// ```
    #[inline(always)]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Rook => 'R',
            Self::Horse => 'H',
            Self::Bishop => 'B',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    /// Parses a kind from its symbol, ignoring case.
    ///
    /// `N` is accepted for the Horse, so standard FEN placements also parse.
    pub fn from_symbol(c: char) -> Result<Self> {
        Ok(match c.to_ascii_uppercase() {
            'P' => Self::Pawn,
            'R' => Self::Rook,
            'H' | 'N' => Self::Horse,
            'B' => Self::Bishop,
            'Q' => Self::Queen,
            'K' => Self::King,
            _ => bail!("Invalid piece symbol {c:?}. Expected one of PRHBQK (or N)"),
        })
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pawn => "Pawn",
            Self::Rook => "Rook",
            Self::Horse => "Horse",
            Self::Bishop => "Bishop",
            Self::Queen => "Queen",
            Self::King => "King",
        };
        f.write_str(name)
    }
}

/// A piece of a given [`Color`] and [`PieceKind`].
///
/// Pieces do not know where they stand; a [`Square`](crate::Square) is always supplied alongside one.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Piece {
    color: Color,
    kind: PieceKind,

    /// Raised when the piece is created. Nothing in the legality rules reads it.
    check: bool,
}

impl Piece {
    /// Creates a new [`Piece`] from the given [`Color`] and [`PieceKind`].
    ///
    /// # Example
    /// ```
    /// # use movecheck_types::{Color, Piece, PieceKind};
    /// let black_horse = Piece::new(Color::Black, PieceKind::Horse);
    /// assert_eq!(black_horse.color(), Color::Black);
    /// assert_eq!(black_horse.kind(), PieceKind::Horse);
    /// ```
    #[inline(always)]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            check: true,
        }
    }

    /// Fetches the [`Color`] of this piece.
    #[inline(always)]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Fetches the [`PieceKind`] of this piece.
    #[inline(always)]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Fetches both parts of this piece.
    #[inline(always)]
    pub const fn parts(&self) -> (Color, PieceKind) {
        (self.color, self.kind)
    }

    /// The construction-time `check` flag. Always `true`.
    #[inline(always)]
    pub const fn check(&self) -> bool {
        self.check
    }

    /// The one-character display code of this piece's kind, regardless of color.
    ///
    /// # Example
    /// ```
    /// # use movecheck_types::{Color, Piece, PieceKind};
    /// assert_eq!(Piece::new(Color::Black, PieceKind::Pawn).symbol(), "P");
    /// ```
    #[inline(always)]
    pub const fn symbol(&self) -> &'static str {
        match self.kind {
            PieceKind::Pawn => "P",
            PieceKind::Rook => "R",
            PieceKind::Horse => "H",
            PieceKind::Bishop => "B",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
        }
    }

    /// Returns `true` if `other` has the same color as this piece.
    #[inline(always)]
    pub const fn is_ally_of(&self, other: &Self) -> bool {
        self.color as u8 == other.color as u8
    }

    #[inline(always)]
    pub const fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// The placement-string character for this piece: uppercase for White, lowercase for Black.
    ///
    /// # Example
    /// ```
    /// # use movecheck_types::{Color, Piece, PieceKind};
    /// assert_eq!(Piece::new(Color::White, PieceKind::Rook).char(), 'R');
    /// assert_eq!(Piece::new(Color::Black, PieceKind::Horse).char(), 'h');
    /// ```
    #[inline(always)]
    pub const fn char(&self) -> char {
        let symbol = self.kind.symbol();
        match self.color {
            Color::White => symbol,
            Color::Black => symbol.to_ascii_lowercase(),
        }
    }

    /// Parses a piece from a placement-string character.
    ///
    /// The case decides the color; `N`/`n` parse as a Horse.
    pub fn from_char(c: char) -> Result<Self> {
        let kind = PieceKind::from_symbol(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        Ok(Self::new(color, kind))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_char_round_trip() {
        for color in Color::all() {
            for kind in PieceKind::all() {
                let piece = Piece::new(color, kind);
                assert_eq!(Piece::from_char(piece.char()).unwrap(), piece);
            }
        }
    }

    #[test]
    fn test_symbols_ignore_color() {
        let symbols = PieceKind::all().map(|kind| Piece::new(Color::Black, kind).symbol());
        assert_eq!(symbols, ["P", "R", "H", "B", "Q", "K"]);
    }

    #[test]
    fn test_knight_alias_parses_as_horse() {
        assert_eq!(
            Piece::from_char('n').unwrap(),
            Piece::new(Color::Black, PieceKind::Horse)
        );
        assert_eq!(
            Piece::from_char('N').unwrap(),
            Piece::new(Color::White, PieceKind::Horse)
        );
        assert!(Piece::from_char('x').is_err());
        assert!(Piece::from_char('1').is_err());
    }

    #[test]
    fn test_check_flag_set_on_construction() {
        assert!(PieceKind::all()
            .into_iter()
            .all(|kind| Piece::new(Color::White, kind).check()));
    }

    #[test]
    fn test_pawn_direction_by_color() {
        assert_eq!(Color::White.forward(), 1);
        assert_eq!(Color::Black.forward(), -1);
        assert_eq!(Color::White.pawn_start_line(), 1);
        assert_eq!(Color::Black.pawn_start_line(), 6);
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!("White".parse::<Color>().unwrap(), Color::White);
        assert_eq!("b".parse::<Color>().unwrap(), Color::Black);
        assert_eq!(Color::from_char('W').unwrap(), Color::White);
        assert!("red".parse::<Color>().is_err());
        assert_eq!(Color::Black.to_string(), "Black");
    }
}

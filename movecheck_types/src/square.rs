/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{anyhow, bail, Result};

use super::BOARD_WIDTH;

/// A single square on an 8x8 board, addressed by `(line, column)`.
///
/// Line 0 is White's back rank and column 0 is the `a` file, so `Square::new(1, 4)` is `e2`.
/// Internally this is the index `line * 8 + column`, always in `0..64`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Creates a [`Square`] from a line and column that are already known to be on the board.
    ///
    /// Out-of-range values are wrapped into range; use [`Square::new_checked`] for untrusted input.
    ///
    /// # Example
    /// ```
    /// # use movecheck_types::Square;
    /// let e2 = Square::new(1, 4);
    /// assert_eq!(e2.to_string(), "e2");
    /// ```
    #[inline(always)]
    pub const fn new(line: u8, column: u8) -> Self {
        Self((line & 7) * BOARD_WIDTH as u8 + (column & 7))
    }

    /// Creates a [`Square`] from signed coordinates, returning `None` if either is outside `[0, 7]`.
    ///
    /// # Example
    /// ```
    /// # use movecheck_types::Square;
    /// assert_eq!(Square::new_checked(7, 0), Some(Square::new(7, 0)));
    /// assert_eq!(Square::new_checked(8, 0), None);
    /// assert_eq!(Square::new_checked(0, -1), None);
    /// ```
    #[inline(always)]
    pub const fn new_checked(line: i32, column: i32) -> Option<Self> {
        if is_on_board(line) && is_on_board(column) {
            Some(Self::new(line as u8, column as u8))
        } else {
            None
        }
    }

    /// Creates a [`Square`] from its index in `0..64`.
    #[inline(always)]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// The index of this square, `line * 8 + column`.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// The line (rank index) of this square, in `[0, 7]`.
    #[inline(always)]
    pub const fn line(&self) -> u8 {
        self.0 / BOARD_WIDTH as u8
    }

    /// The column (file index) of this square, in `[0, 7]`.
    #[inline(always)]
    pub const fn column(&self) -> u8 {
        self.0 % BOARD_WIDTH as u8
    }

    /// Returns the square `lines` lines and `columns` columns away from this one, if it is on the board.
    ///
    /// # Example
    /// ```
    /// # use movecheck_types::Square;
    /// let d4 = Square::new(3, 3);
    /// assert_eq!(d4.offset(2, -1), Some(Square::new(5, 2)));
    /// assert_eq!(d4.offset(-4, 0), None);
    /// ```
    #[inline(always)]
    pub const fn offset(&self, lines: i32, columns: i32) -> Option<Self> {
        Self::new_checked(self.line() as i32 + lines, self.column() as i32 + columns)
    }

    /// An iterator over all 64 squares, in index order.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..Self::COUNT as u8).map(Self)
    }

    /// Parses a square from algebraic notation, such as `e4`.
    ///
    /// # Example
    /// ```
    /// # use movecheck_types::Square;
    /// assert_eq!(Square::from_uci("a1").unwrap(), Square::new(0, 0));
    /// assert_eq!(Square::from_uci("h8").unwrap(), Square::new(7, 7));
    /// assert!(Square::from_uci("i9").is_err());
    /// ```
    pub fn from_uci(uci: &str) -> Result<Self> {
        let mut chars = uci.trim().chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            bail!("Invalid square {uci:?}: expected a file and a rank, such as \"e4\"");
        };

        let column = match file.to_ascii_lowercase() {
            c @ 'a'..='h' => c as u8 - b'a',
            _ => bail!("Invalid square {uci:?}: file must be in a-h, got {file:?}"),
        };

        let line = rank
            .to_digit(10)
            .filter(|r| (1..=8).contains(r))
            .ok_or(anyhow!(
                "Invalid square {uci:?}: rank must be in 1-8, got {rank:?}"
            ))?;

        Ok(Self::new(line as u8 - 1, column))
    }
}

/// Returns `true` if `coordinate` is a valid line or column index, meaning it is in `[0, 7]`.
#[inline(always)]
pub const fn is_on_board(coordinate: i32) -> bool {
    0 <= coordinate && coordinate < BOARD_WIDTH as i32
}

impl FromStr for Square {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_uci(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.column()) as char;
        write!(f, "{file}{}", self.line() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self} ({}, {})", self.line(), self.column())
    }
}

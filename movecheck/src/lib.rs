/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![doc = include_str!("../README.md")]

pub use movecheck_types::*;

/// Attack detection, built on top of move legality.
mod attacks;
/// The 8x8 board and its placement strings.
mod board;
/// Enumerating every legal destination of a piece.
mod movegen;
/// Per-kind move legality, including the shared sliding-path scan.
mod rules;

pub use attacks::*;
pub use board::*;
pub use movegen::*;
pub use rules::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::attacks::*;
    pub use crate::board::*;
    pub use crate::movegen::*;
    pub use crate::rules::*;
    pub use movecheck_types::*;
}

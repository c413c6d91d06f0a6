// floorfield-sim: floor-field cellular-automaton evacuation simulator
// Copyright (C) 2026 The floorfield-sim Authors
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! Error taxonomy for the simulation core (spec.md §7).

use thiserror::Error;

use crate::types::Pos;

/// Everything that can go wrong while loading a map or running a scenario.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Rows of inconsistent width, or an empty map text (spec.md §4.1).
    #[error("invalid map: {0}")]
    InvalidMap(String),
    /// Two individuals were placed on, or moved onto, the same cell
    /// (spec.md §4.6). Surfaced to callers as `InvalidConfig`.
    #[error("placement overlap at {0:?}")]
    Overlap(Pos),
}

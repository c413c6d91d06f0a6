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

//! Module containing shared type definitions.

/// A grid coordinate, `(row, col)`.
pub type Pos = (usize, usize);

/// Direction a door slot runs in (spec.md §3 DoorSlot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Horizontal run (adjacent columns, same row).
    H,
    /// Vertical run (adjacent rows, same column).
    V,
}

/// A maximal run of adjacent DOOR cells discovered in the input map
/// (spec.md §3, §4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoorSlot {
    /// Row of the top-most / left-most cell in the run.
    pub row: usize,
    /// Column of the top-most / left-most cell in the run.
    pub col: usize,
    /// Number of cells in the run.
    pub size: usize,
    /// Orientation of the run.
    pub direction: Direction,
}

impl DoorSlot {
    /// All grid positions this slot occupies, in order.
    pub fn cells(&self) -> Vec<Pos> {
        (0..self.size)
            .map(|i| match self.direction {
                Direction::H => (self.row, self.col + i),
                Direction::V => (self.row + i, self.col),
            })
            .collect()
    }
}

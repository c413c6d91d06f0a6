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

//! Shared test fixtures.

use crate::types::DoorSlot;

/// The 5x5 single-door room from spec.md §8 scenario S1.
pub(crate) const ROOM_ONE_DOOR: &str = "11111\n10001\n10001\n10201\n11111\n";

/// The 5x5 two-door room from spec.md §8 scenario S2 (door added at (1,3)).
pub(crate) const ROOM_TWO_DOORS: &str = "11111\n10021\n10001\n10201\n11111\n";

pub(crate) fn slot_at(slots: &[DoorSlot], row: usize, col: usize) -> usize {
    slots
        .iter()
        .position(|s| s.row == row && s.col == col)
        .unwrap_or_else(|| panic!("no door slot anchored at ({row},{col})"))
}

mod test_crowd_map;
mod test_scenario;
mod test_static_map;
mod test_structure_map;

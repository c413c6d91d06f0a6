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

use pretty_assertions::assert_eq;

use crate::structure_map::StructureMap;
use crate::test::{ROOM_ONE_DOOR, ROOM_TWO_DOORS};
use crate::types::Direction;

#[test]
fn load_rejects_ragged_rows() {
    let err = StructureMap::load("111\n1101\n111\n").unwrap_err();
    assert!(err.to_string().contains("invalid map"));
}

#[test]
fn load_rejects_empty_text() {
    assert!(StructureMap::load("").is_err());
}

#[test]
fn single_door_cell_is_a_size_one_horizontal_slot() {
    let map = StructureMap::load(ROOM_ONE_DOOR).unwrap();
    let slots = map.door_slots();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].row, 3);
    assert_eq!(slots[0].col, 2);
    assert_eq!(slots[0].size, 1);
    assert_eq!(slots[0].direction, Direction::H);
}

#[test]
fn two_door_room_discovers_two_independent_slots() {
    let map = StructureMap::load(ROOM_TWO_DOORS).unwrap();
    let slots = map.door_slots();
    assert_eq!(slots.len(), 2);
    assert!(slots.iter().any(|s| (s.row, s.col) == (1, 3)));
    assert!(slots.iter().any(|s| (s.row, s.col) == (3, 2)));
}

#[test]
fn horizontal_run_is_scanned_before_vertical_run_at_an_overlap() {
    // A plus-shaped door cluster: the center row and center column both
    // form runs, and they share the cell at (2, 1). spec.md §4.2 requires
    // the horizontal scan to run first and stay stable; both candidate
    // slots are kept (a cell may belong to more than one candidate slot),
    // but their order in the discovered list reflects the horizontal-first
    // scan.
    let text = "111\n020\n222\n020\n111\n";
    let map = StructureMap::load(text).unwrap();
    let slots = map.door_slots();
    let horizontal_idx = slots.iter().position(|s| s.row == 2 && s.direction == Direction::H).unwrap();
    let vertical_idx = slots.iter().position(|s| s.col == 1 && s.direction == Direction::V).unwrap();
    assert!(horizontal_idx < vertical_idx);
    assert_eq!(slots[horizontal_idx].size, 3);
    assert_eq!(slots[vertical_idx].size, 3);
}

#[test]
fn round_trip_with_all_slots_active_preserves_door_cells() {
    let map = StructureMap::load(ROOM_TWO_DOORS).unwrap();
    let slots = map.door_slots();
    let active = vec![true; slots.len()];
    let regenerated = map.with_active_doors(&slots, &active);
    assert_eq!(regenerated.to_string(), map.to_string());
}

#[test]
fn with_active_doors_preserves_dimensions() {
    let map = StructureMap::load(ROOM_TWO_DOORS).unwrap();
    let slots = map.door_slots();
    let active = vec![false; slots.len()];
    let regenerated = map.with_active_doors(&slots, &active);
    assert_eq!(regenerated.rows(), map.rows());
    assert_eq!(regenerated.cols(), map.cols());
}

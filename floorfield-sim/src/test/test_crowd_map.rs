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

use crate::crowd_map::CrowdMap;

#[test]
fn place_rejects_overlap() {
    let mut crowd = CrowdMap::new(3, 3);
    crowd.place(0, (1, 1)).unwrap();
    let err = crowd.place(1, (1, 1)).unwrap_err();
    assert_eq!(err, crate::error::SimError::Overlap((1, 1)));
}

#[test]
fn move_to_is_atomic() {
    let mut crowd = CrowdMap::new(3, 3);
    crowd.place(0, (0, 0)).unwrap();
    crowd.move_to(0, (0, 0), (0, 1)).unwrap();
    assert!(crowd.is_empty((0, 0)));
    assert_eq!(crowd.occupant((0, 1)), Some(0));
}

#[test]
fn move_to_rejects_occupied_target() {
    let mut crowd = CrowdMap::new(3, 3);
    crowd.place(0, (0, 0)).unwrap();
    crowd.place(1, (0, 1)).unwrap();
    assert!(crowd.move_to(0, (0, 0), (0, 1)).is_err());
}

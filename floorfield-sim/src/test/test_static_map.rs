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

use crate::constants::S_WALL;
use crate::static_map::StaticMap;
use crate::structure_map::StructureMap;
use crate::test::ROOM_ONE_DOOR;

#[test]
fn door_cells_seed_at_distance_one() {
    let structure = StructureMap::load(ROOM_ONE_DOOR).unwrap();
    let field = StaticMap::derive(&structure);
    assert_eq!(field.at((3, 2)), 1.0);
}

#[test]
fn walls_and_objects_stay_at_the_sentinel() {
    let structure = StructureMap::load(ROOM_ONE_DOOR).unwrap();
    let field = StaticMap::derive(&structure);
    assert_eq!(field.at((0, 0)), S_WALL);
    assert!(!field.is_reachable((0, 0)));
}

#[test]
fn distance_increases_moving_away_from_the_door() {
    let structure = StructureMap::load(ROOM_ONE_DOOR).unwrap();
    let field = StaticMap::derive(&structure);
    // (2,2) is directly above the door at (3,2); (1,2) is one step further.
    assert!(field.at((1, 2)) > field.at((2, 2)));
    assert!(field.at((2, 2)) >= 1.0);
}

#[test]
fn unreachable_room_is_entirely_sentinel() {
    // A second room with no door at all: every EMPTY cell is unreachable.
    let text = "1111111\n1000111\n1000001\n1000111\n1111111\n";
    let structure = StructureMap::load(text).unwrap();
    let field = StaticMap::derive(&structure);
    for r in 0..structure.rows() {
        for c in 0..structure.cols() {
            if structure.at((r, c)) == crate::constants::TerrainCode::Empty {
                assert_eq!(field.at((r, c)), S_WALL, "({r},{c}) should be unreachable");
            }
        }
    }
}

#[test]
fn dimensions_match_structure_map() {
    let structure = StructureMap::load(ROOM_ONE_DOOR).unwrap();
    let field = StaticMap::derive(&structure);
    assert_eq!(field.rows(), structure.rows());
    assert_eq!(field.cols(), structure.cols());
}

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

use crate::individual::IndividualParams;
use crate::rng::scenario_rng;
use crate::scenario::{IndividualSpec, Scenario};
use crate::structure_map::StructureMap;
use crate::test::ROOM_ONE_DOOR;

fn one_door_individual_spec() -> IndividualSpec {
    IndividualSpec {
        label: "occupant".into(),
        amount: 1,
        params: IndividualParams {
            speed: 1,
            ks: 1.0,
            kw: 0.0,
            kd: 0.0,
            ki: 0.0,
        },
        positions: vec![Some((2, 2))],
    }
}

#[test]
fn build_places_prescribed_positions() {
    let base = StructureMap::load(ROOM_ONE_DOOR).unwrap();
    let slots = base.door_slots();
    let active = vec![true; slots.len()];
    let spec = one_door_individual_spec();
    let mut rng = scenario_rng(1);
    let scenario = Scenario::build(&base, &slots, &active, &[spec], &mut rng).unwrap();
    assert_eq!(scenario.individuals()[0].position, (2, 2));
}

#[test]
fn build_random_placement_avoids_overlap() {
    let base = StructureMap::load(ROOM_ONE_DOOR).unwrap();
    let slots = base.door_slots();
    let active = vec![true; slots.len()];
    let spec = IndividualSpec {
        label: "occupant".into(),
        amount: 3,
        params: IndividualParams {
            speed: 1,
            ks: 1.0,
            kw: 0.0,
            kd: 0.0,
            ki: 0.0,
        },
        positions: vec![],
    };
    let mut rng = scenario_rng(7);
    let scenario = Scenario::build(&base, &slots, &active, &[spec], &mut rng).unwrap();
    let positions: Vec<_> = scenario.individuals().iter().map(|i| i.position).collect();
    let mut unique = positions.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), positions.len());
}

#[test]
fn inactive_door_makes_the_floor_field_unreachable_from_it() {
    let base = StructureMap::load(ROOM_ONE_DOOR).unwrap();
    let slots = base.door_slots();
    let active = vec![false; slots.len()];
    let spec = one_door_individual_spec();
    let mut rng = scenario_rng(1);
    let scenario = Scenario::build(&base, &slots, &active, &[spec], &mut rng).unwrap();
    assert!(!scenario.static_map().is_reachable((2, 2)));
}

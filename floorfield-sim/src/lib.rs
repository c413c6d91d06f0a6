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

#![deny(missing_debug_implementations)]

//! # floorfield-sim
//!
//! A floor-field cellular-automaton pedestrian evacuation simulator.
//!
//! The main entry points are [`structure_map::StructureMap`] (parse a map,
//! discover candidate [`types::DoorSlot`]s), [`scenario::Scenario`] (compose
//! a structure map, a chosen door subset and an individual set into one
//! runnable instance), and [`simulator::Simulator`] (run a `Scenario` to
//! completion and get back a [`result::SimResult`]).
//!
//! ## Example
//!
//! ```
//! use floorfield_sim::prelude::*;
//!
//! let text = "11111\n10001\n10001\n10201\n11111\n";
//! let base = StructureMap::load(text).unwrap();
//! let slots = base.door_slots();
//! let active = vec![true; slots.len()];
//!
//! let spec = IndividualSpec {
//!     label: "occupant".into(),
//!     amount: 1,
//!     params: IndividualParams { speed: 1, ks: 1.0, kw: 0.0, kd: 0.0, ki: 0.0 },
//!     positions: vec![Some((2, 2))],
//! };
//!
//! let mut scenario_rng = scenario_rng(1);
//! let mut scenario =
//!     Scenario::build(&base, &slots, &active, &[spec], &mut scenario_rng).unwrap();
//!
//! let mut simulation_rng = simulation_rng(42);
//! let result = Simulator.run(&mut scenario, &mut simulation_rng);
//! assert_eq!(result.evacuated_count, 1);
//! ```

pub mod constants;
pub mod crowd_map;
pub mod dynamic_map;
pub mod error;
pub mod individual;
pub mod prelude;
pub mod result;
pub mod rng;
pub mod scenario;
pub mod simulator;
pub mod static_map;
pub mod structure_map;
pub mod types;
pub mod wall_map;

pub use error::SimError;
pub use individual::{Individual, IndividualParams};
pub use result::SimResult;
pub use scenario::{IndividualSpec, Scenario};
pub use simulator::Simulator;
pub use structure_map::StructureMap;
pub use types::{Direction, DoorSlot, Pos};

#[cfg(test)]
mod test;

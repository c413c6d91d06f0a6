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

//! Convenience re-exports of the types most callers need.

pub use crate::constants::{MAX_ITERATIONS, TerrainCode};
pub use crate::error::SimError;
pub use crate::individual::{Individual, IndividualParams};
pub use crate::result::SimResult;
pub use crate::rng::{scenario_rng, simulation_rng};
pub use crate::scenario::{IndividualSpec, Scenario};
pub use crate::simulator::Simulator;
pub use crate::structure_map::StructureMap;
pub use crate::types::{Direction, DoorSlot, Pos};

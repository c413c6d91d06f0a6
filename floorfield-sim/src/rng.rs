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

//! Deterministic RNG plumbing (spec.md §5, C14).
//!
//! Two independent, explicitly seeded streams are used per simulation run:
//! `scenario_rng` drives environment construction (e.g. random individual
//! placement), `simulation_rng` drives per-step movement choices. They must
//! never be interleaved — each lives in exactly one place
//! ([`crate::scenario::Scenario`] and [`crate::simulator::Simulator`]
//! respectively) and is never reseeded mid-run.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build the scenario-construction RNG stream from a scenario seed.
pub fn scenario_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Build the per-step movement RNG stream from a simulation seed.
pub fn simulation_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

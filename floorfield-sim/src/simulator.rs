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

//! # Simulator
//!
//! The state machine that drives a [`crate::scenario::Scenario`] through
//! `INIT -> RUNNING -> DONE | CAPPED` (spec.md §4.8).

use log::debug;
use rand::Rng;

use crate::constants::TerrainCode;
use crate::result::SimResult;
use crate::scenario::Scenario;

/// Runs one simulation to completion. Owns no state across runs: a fresh
/// `Simulator` (or a reused one via [`Simulator::run`]) is stateless, all
/// mutable state lives in the `Scenario` it's given.
#[derive(Debug, Default)]
pub struct Simulator;

impl Simulator {
    /// Run `scenario` to completion using `simulation_rng` for every
    /// per-step movement choice. `scenario_rng` must not be reused here —
    /// the two streams are kept separate (spec.md §5).
    pub fn run(&self, scenario: &mut Scenario, simulation_rng: &mut impl Rng) -> SimResult {
        let max_iterations = scenario.max_iterations();
        let mut iteration = 0u32;

        loop {
            if Self::all_evacuated(scenario) {
                break;
            }
            if iteration >= max_iterations {
                break;
            }
            self.step(scenario, simulation_rng);
            iteration += 1;
        }

        let capped = iteration >= max_iterations && !Self::all_evacuated(scenario);
        let total_distance: f64 = scenario.individuals().iter().map(|i| i.distance).sum();
        let evacuated_count = scenario
            .individuals()
            .iter()
            .filter(|i| i.evacuated)
            .count() as u32;

        debug!(
            "simulation finished after {iteration} iterations, {evacuated_count}/{} evacuated, capped={capped}",
            scenario.individuals().len()
        );

        SimResult {
            iterations: iteration,
            total_distance,
            evacuated_count,
            capped,
        }
    }

    fn all_evacuated(scenario: &Scenario) -> bool {
        scenario.individuals().iter().all(|i| i.evacuated)
    }

    /// One simulator step (spec.md §4.8): decay+diffuse the dynamic map,
    /// compute a deterministic movement order, let each not-yet-evacuated
    /// individual take up to `speed` sub-steps (recomputing direction each
    /// sub-step, resolving collisions as they happen), then deposit trails
    /// at the pre-move positions.
    fn step(&self, scenario: &mut Scenario, simulation_rng: &mut impl Rng) {
        scenario.dynamic_mut().decay_and_diffuse();

        let pre_move_positions: Vec<(usize, (usize, usize))> = scenario
            .individuals()
            .iter()
            .enumerate()
            .filter(|(_, ind)| !ind.evacuated)
            .map(|(idx, ind)| (idx, ind.position))
            .collect();

        let max_speed = scenario
            .individuals()
            .iter()
            .map(|i| i.params.speed)
            .max()
            .unwrap_or(0);

        for sub_step in 0..max_speed {
            let order = Self::movement_order(scenario);
            for idx in order {
                let ind = &scenario.individuals()[idx];
                if ind.evacuated || sub_step >= ind.params.speed {
                    continue;
                }
                self.move_one(scenario, idx, simulation_rng);
            }
        }

        for (_idx, pos) in pre_move_positions {
            scenario.dynamic_mut().deposit(pos);
        }
    }

    /// Deterministic per-step processing order: ascending static field at
    /// the individual's current position (closer to an exit moves first),
    /// ties broken by index (spec.md §4.7 collision resolution, §5).
    fn movement_order(scenario: &Scenario) -> Vec<usize> {
        let mut order: Vec<usize> = (0..scenario.individuals().len())
            .filter(|&i| !scenario.individuals()[i].evacuated)
            .collect();
        let static_map = scenario.static_map();
        order.sort_by(|&a, &b| {
            let pa = static_map.at(scenario.individuals()[a].position);
            let pb = static_map.at(scenario.individuals()[b].position);
            pa.partial_cmp(&pb).unwrap_or(std::cmp::Ordering::Equal).then(a.cmp(&b))
        });
        order
    }

    /// Move a single individual one sub-step: evaluate candidates, sample
    /// one via softmax, claim it in the crowd map (re-evaluating on a
    /// collision loss), and mark evacuation if it lands on a DOOR.
    fn move_one(&self, scenario: &mut Scenario, idx: usize, rng: &mut impl Rng) {
        loop {
            let (structure, wall, static_map, dynamic, crowd, individuals) = scenario.parts_mut();
            let candidates =
                individuals[idx].candidates(structure, wall, static_map, dynamic, crowd, idx);
            let choice = crate::individual::Individual::choose(&candidates, rng);
            let (to, dir, _) = candidates[choice];
            let from = individuals[idx].position;

            match crowd.move_to(idx, from, to) {
                Ok(()) => {
                    let door = structure.at(to) == TerrainCode::Door;
                    individuals[idx].commit_move(to, dir);
                    if door {
                        individuals[idx].evacuated = true;
                    }
                    return;
                }
                Err(_) => {
                    // Lost the race for `to`: someone else already claimed
                    // it this sub-step. Re-evaluate with the updated crowd
                    // map (spec.md §4.7); looping here re-reads occupancy
                    // and may legitimately resolve to "stay".
                    continue;
                }
            }
        }
    }
}

// evac-search: door-placement optimization over a floor-field evacuation simulator
// Copyright (C) 2026 The evac-search Authors
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

//! # Brute-force engine
//!
//! The exhaustive alternative to [`crate::nsga2::NsgaEngine`] (spec.md
//! §4.11): enumerate every `2^N` door subset, evaluate each through the
//! same [`Factory`] (and therefore the same cache), and return the exact
//! Pareto front.

use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::error::SearchError;
use crate::factory::{Factory, MAX_DOORS};
use crate::gene::{dominates, Chromosome, Gene};

/// The brute-force driver. Stateless, like [`crate::nsga2::NsgaEngine`].
#[derive(Debug, Default)]
pub struct BruteForceEngine;

impl BruteForceEngine {
    /// Evaluate every gene of length `N = factory.num_candidate_doors()`
    /// and return the Pareto front, sorted by `num_doors` then `distance`
    /// (spec.md §4.11). Fails with [`SearchError::TooLarge`] when
    /// `N > MAX_DOORS`.
    pub fn run(
        &self,
        factory: &Factory,
        three_objectives: bool,
        cancel: Option<&AtomicBool>,
    ) -> Result<Vec<Chromosome>, SearchError> {
        let n = factory.num_candidate_doors();
        if n > MAX_DOORS {
            return Err(SearchError::TooLarge(n));
        }
        let total: u64 = 1u64 << n;

        let mut population: Vec<Chromosome> = (0..total)
            .into_par_iter()
            .map(|mask| Chromosome::new(0, gene_from_mask(mask, n)))
            .collect();

        if is_cancelled(cancel) {
            return Err(SearchError::Cancelled);
        }
        population
            .par_iter_mut()
            .try_for_each(|chromosome| factory.evaluate_chromosome(chromosome, three_objectives))?;
        if is_cancelled(cancel) {
            return Err(SearchError::Cancelled);
        }

        let mut front_indices = pareto_front_indices(&population);
        front_indices.sort_by(|&a, &b| {
            let oa = population[a].obj.as_ref().unwrap();
            let ob = population[b].obj.as_ref().unwrap();
            oa[0]
                .partial_cmp(&ob[0])
                .unwrap()
                .then(oa.last().unwrap().partial_cmp(ob.last().unwrap()).unwrap())
                .then(a.cmp(&b))
        });

        let mut slots: Vec<Option<Chromosome>> = population.into_iter().map(Some).collect();
        Ok(front_indices.into_iter().map(|i| slots[i].take().unwrap()).collect())
    }
}

fn gene_from_mask(mask: u64, n: usize) -> Gene {
    (0..n).map(|bit| (mask >> bit) & 1 == 1).collect()
}

fn is_cancelled(cancel: Option<&AtomicBool>) -> bool {
    cancel.map(|flag| flag.load(Ordering::Relaxed)).unwrap_or(false)
}

/// Indices whose objective vector is not dominated by any other entry's
/// (spec.md §4.11, "compute Pareto front by pairwise dominance").
fn pareto_front_indices(population: &[Chromosome]) -> Vec<usize> {
    let n = population.len();
    let mut front = Vec::new();
    'candidate: for i in 0..n {
        let obj_i = population[i].obj.as_ref().unwrap();
        for j in 0..n {
            if i == j {
                continue;
            }
            let obj_j = population[j].obj.as_ref().unwrap();
            if dominates(obj_j, obj_i) {
                continue 'candidate;
            }
        }
        front.push(i);
    }
    front
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::{ExperimentConfig, IndividualRecord, IndividualsDescriptor, ScenarioSeeds};
    use crate::factory::Instance;

    fn two_door_config() -> ExperimentConfig {
        ExperimentConfig {
            experiment: "two-doors".into(),
            scenario_seed: ScenarioSeeds::One(1),
            simulation_seed: 42,
            draw: false,
            use_three_objectives: false,
            map: "11111\n10021\n10001\n10201\n11111\n".into(),
            individuals: IndividualsDescriptor::Bare(vec![IndividualRecord {
                label: "occupant".into(),
                amount: 1,
                speed: 1,
                ks: 1.0,
                kw: 0.0,
                kd: 0.0,
                ki: 0.0,
                color: None,
            }]),
        }
    }

    /// spec.md §8 S2: the two-door room's Pareto front must include both
    /// single-door configurations and the both-doors-open configuration.
    #[test]
    fn two_door_room_front_includes_every_single_door_and_both_doors() {
        let factory = Factory::new(Instance::build(&two_door_config()).unwrap());
        assert_eq!(factory.num_candidate_doors(), 2);
        let engine = BruteForceEngine;
        let front = engine.run(&factory, false, None).unwrap();

        let has_gene = |want: &[bool]| front.iter().any(|c| c.gene == want);
        assert!(has_gene(&[true, false]));
        assert!(has_gene(&[false, true]));
        assert!(has_gene(&[true, true]));
    }

    #[test]
    fn front_is_sorted_by_num_doors_then_distance() {
        let factory = Factory::new(Instance::build(&two_door_config()).unwrap());
        let engine = BruteForceEngine;
        let front = engine.run(&factory, false, None).unwrap();
        for pair in front.windows(2) {
            let a = pair[0].obj.as_ref().unwrap();
            let b = pair[1].obj.as_ref().unwrap();
            assert!(a[0] < b[0] || (a[0] == b[0] && a.last() <= b.last()));
        }
    }

    #[test]
    fn more_than_max_doors_is_rejected() {
        let mut config = two_door_config();
        // A single row of 21 door cells, each isolated by a wall cell on
        // both sides so `door_slots()` discovers 21 separate size-1
        // slots instead of one run: one candidate door past MAX_DOORS.
        let mut row = String::from("1");
        for _ in 0..21 {
            row.push('2');
            row.push('1');
        }
        config.map = format!("{row}\n");
        let factory = Factory::new(Instance::build(&config).unwrap());
        assert_eq!(factory.num_candidate_doors(), 21);
        let engine = BruteForceEngine;
        let err = engine.run(&factory, false, None).unwrap_err();
        assert!(matches!(err, SearchError::TooLarge(21)));
    }

    /// spec.md §8 S3: the all-false gene decodes to the worst outcome
    /// without running a simulation.
    #[test]
    fn empty_gene_is_present_and_worst() {
        let factory = Factory::new(Instance::build(&two_door_config()).unwrap());
        let (doors, iterations, distance) = factory.evaluate(&vec![false, false]).unwrap();
        assert_eq!(doors, 0);
        assert_eq!(iterations, floorfield_sim::constants::MAX_ITERATIONS as f64);
        assert_eq!(distance, 0.0);
    }
}

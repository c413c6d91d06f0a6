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

//! # Factory
//!
//! Turns a [`crate::gene::Gene`] into a built [`Scenario`], runs it, and
//! memoizes the result (spec.md §4.9). [`Factory::evaluate`] is the only
//! capability [`crate::nsga2::NsgaEngine`] and
//! [`crate::brute_force::BruteForceEngine`] need — the
//! `ChromosomeFactory`-equivalent of spec.md §9.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use floorfield_sim::constants::MAX_ITERATIONS;
use floorfield_sim::rng::{scenario_rng, simulation_rng};
use floorfield_sim::scenario::{IndividualSpec, Scenario};
use floorfield_sim::simulator::Simulator;
use floorfield_sim::structure_map::StructureMap;
use floorfield_sim::types::DoorSlot;
use log::debug;

use crate::cache::{Cache, EvalResult};
use crate::config::ExperimentConfig;
use crate::error::SearchError;
use crate::gene::{num_doors, Chromosome, Gene};

/// Hard cap on candidate doors the brute-force engine will enumerate
/// (spec.md §4.11, §GLOSSARY): `2^N` genes beyond this are infeasible to
/// exhaust.
pub const MAX_DOORS: usize = 20;

/// Immutable experiment data every gene evaluation is built against: the
/// base map, its candidate door slots, the individual groups to place, and
/// the seeds to average over (spec.md §3 "Instance").
#[derive(Debug)]
pub struct Instance {
    base: StructureMap,
    slots: Vec<DoorSlot>,
    individuals: Vec<IndividualSpec>,
    scenario_seeds: Vec<u64>,
    simulation_seed: u64,
    hash: u64,
}

impl Instance {
    /// Validate `config` and parse its map/individuals into a ready-to-run
    /// instance.
    pub fn build(config: &ExperimentConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let base = StructureMap::load(&config.map)?;
        let slots = base.door_slots();
        let individuals = config
            .individuals
            .records()
            .iter()
            .map(|record| IndividualSpec {
                label: record.label.clone(),
                amount: record.amount,
                params: record.params(),
                positions: Vec::new(),
            })
            .collect();
        let scenario_seeds = config.scenario_seed.as_slice();
        let hash = instance_hash(config);
        Ok(Self {
            base,
            slots,
            individuals,
            scenario_seeds,
            simulation_seed: config.simulation_seed,
            hash,
        })
    }

    /// `N`, the number of candidate door slots this instance's genes are
    /// sized against.
    pub fn num_candidate_doors(&self) -> usize {
        self.slots.len()
    }

    /// The candidate door slots, in discovery order (spec.md §4.2).
    pub fn slots(&self) -> &[DoorSlot] {
        &self.slots
    }

    /// Stable digest of the experiment config this instance was built
    /// from (spec.md §3 "instance hash").
    pub fn hash(&self) -> u64 {
        self.hash
    }
}

/// A stable digest over the canonical fields of `config`, used to
/// invalidate [`Cache`] when the experiment config changes (spec.md §4.9,
/// §4.12). `f64` fields hash by bit pattern, which is fine here: the same
/// config text always produces the same bits.
fn instance_hash(config: &ExperimentConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    config.experiment.hash(&mut hasher);
    config.scenario_seed.as_slice().hash(&mut hasher);
    config.simulation_seed.hash(&mut hasher);
    config.map.hash(&mut hasher);
    for record in config.individuals.records() {
        record.label.hash(&mut hasher);
        record.amount.hash(&mut hasher);
        record.speed.hash(&mut hasher);
        record.ks.to_bits().hash(&mut hasher);
        record.kw.to_bits().hash(&mut hasher);
        record.kd.to_bits().hash(&mut hasher);
        record.ki.to_bits().hash(&mut hasher);
    }
    hasher.finish()
}

/// Owns the current [`Instance`] and its [`Cache`]; evaluates genes by
/// building and running a [`Scenario`] per configured scenario seed and
/// averaging the objectives (spec.md §4.9).
#[derive(Debug)]
pub struct Factory {
    instance: Instance,
    cache: Cache,
}

impl Factory {
    /// Build a factory around a freshly-built instance.
    pub fn new(instance: Instance) -> Self {
        Self {
            instance,
            cache: Cache::new(),
        }
    }

    /// Replace the current instance. If its hash differs from the
    /// previous one, the cache is dropped (spec.md §4.9: "recompute
    /// instance hash ... if it differs ... clear cache").
    pub fn refresh(&mut self, instance: Instance) {
        if instance.hash() != self.instance.hash() {
            debug!("instance hash changed, clearing evaluation cache");
            self.cache.clear();
        }
        self.instance = instance;
    }

    /// `N`, the gene length this factory's genes must have.
    pub fn num_candidate_doors(&self) -> usize {
        self.instance.num_candidate_doors()
    }

    /// The candidate door slots genes are indexed against.
    pub fn slots(&self) -> &[DoorSlot] {
        self.instance.slots()
    }

    /// `create(gene) -> Chromosome`, the other half of the
    /// `ChromosomeFactory` capability (spec.md §9).
    pub fn create(&self, generation: u32, gene: Gene) -> Chromosome {
        Chromosome::new(generation, gene)
    }

    /// `evaluate(gene) -> (num_doors, iterations, distance)` (spec.md
    /// §4.9). Zero active doors short-circuits to the worst possible
    /// result without touching the cache or running a simulation
    /// (spec.md §4.9, §7 `NoDoors`).
    pub fn evaluate(&self, gene: &Gene) -> Result<EvalResult, SearchError> {
        if gene.len() != self.instance.num_candidate_doors() {
            return Err(SearchError::InvalidConfig(format!(
                "gene length {} does not match {} candidate doors",
                gene.len(),
                self.instance.num_candidate_doors()
            )));
        }
        if num_doors(gene) == 0 {
            return Ok((0, MAX_ITERATIONS as f64, 0.0));
        }
        Ok(self.cache.get_or_evaluate(gene.clone(), || self.run_all_seeds(gene)))
    }

    /// Fill in `chromosome.obj` via [`Factory::evaluate`], a no-op if it
    /// is already evaluated (spec.md §4.10 step 1).
    pub fn evaluate_chromosome(&self, chromosome: &mut Chromosome, three_objectives: bool) -> Result<(), SearchError> {
        if chromosome.is_evaluated() {
            return Ok(());
        }
        let (doors, iterations, distance) = self.evaluate(&chromosome.gene)?;
        chromosome.obj = Some(if three_objectives {
            vec![doors as f64, iterations, distance]
        } else {
            vec![doors as f64, distance]
        });
        Ok(())
    }

    fn run_all_seeds(&self, gene: &Gene) -> EvalResult {
        let n = self.instance.scenario_seeds.len() as f64;
        let (mut iters_sum, mut dist_sum) = (0.0, 0.0);
        for &seed in &self.instance.scenario_seeds {
            let mut scenario_rng = scenario_rng(seed);
            let mut scenario = Scenario::build(
                &self.instance.base,
                &self.instance.slots,
                gene,
                &self.instance.individuals,
                &mut scenario_rng,
            )
            .expect("instance was validated at construction");
            let mut simulation_rng = simulation_rng(self.instance.simulation_seed);
            let result = Simulator.run(&mut scenario, &mut simulation_rng);
            iters_sum += result.iterations as f64;
            dist_sum += result.total_distance;
        }
        (num_doors(gene), iters_sum / n, dist_sum / n)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::{IndividualRecord, IndividualsDescriptor, ScenarioSeeds};

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

    #[test]
    fn empty_gene_is_the_worst_outcome_without_simulating() {
        let config = two_door_config();
        let instance = Instance::build(&config).unwrap();
        let n = instance.num_candidate_doors();
        let factory = Factory::new(instance);
        let (doors, iterations, distance) = factory.evaluate(&vec![false; n]).unwrap();
        assert_eq!(doors, 0);
        assert_eq!(iterations, MAX_ITERATIONS as f64);
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn refresh_with_same_config_keeps_the_cache() {
        let config = two_door_config();
        let mut factory = Factory::new(Instance::build(&config).unwrap());
        let n = factory.num_candidate_doors();
        let gene = vec![true; n];
        factory.evaluate(&gene).unwrap();
        factory.refresh(Instance::build(&config).unwrap());
        assert!(factory.cache.get(&gene).is_some());
    }

    #[test]
    fn refresh_with_changed_config_clears_the_cache() {
        let config = two_door_config();
        let mut factory = Factory::new(Instance::build(&config).unwrap());
        let n = factory.num_candidate_doors();
        let gene = vec![true; n];
        factory.evaluate(&gene).unwrap();

        let mut changed = config.clone();
        changed.simulation_seed = 43;
        factory.refresh(Instance::build(&changed).unwrap());
        assert!(factory.cache.get(&gene).is_none());
    }
}

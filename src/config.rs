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

//! External config/result shapes (spec.md §6), behind the `serde` feature.
//! Loading these from a file and parsing CLI arguments beyond picking a
//! subcommand are deliberately left to the caller — this module only
//! defines the wire shapes.

use floorfield_sim::{DoorSlot, IndividualParams};

use crate::error::SearchError;

/// One or more scenario seeds (spec.md §6: `scenario_seed: u64 | [u64]`).
/// Factory evaluation averages objectives across every seed listed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ScenarioSeeds {
    /// A single scenario seed.
    One(u64),
    /// An explicit list of scenario seeds.
    Many(Vec<u64>),
}

impl ScenarioSeeds {
    /// Normalize to a non-empty slice of seeds.
    pub fn as_slice(&self) -> Vec<u64> {
        match self {
            Self::One(s) => vec![*s],
            Self::Many(seeds) => seeds.clone(),
        }
    }
}

/// Top-level experiment config (spec.md §6).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    /// Human-readable experiment name.
    pub experiment: String,
    /// Scenario seed(s) averaged over during evaluation.
    pub scenario_seed: ScenarioSeeds,
    /// Movement RNG seed shared by every scenario seed.
    pub simulation_seed: u64,
    /// Whether to render frames (out of scope here; carried through for
    /// downstream collaborators, spec.md §1 Non-goals).
    #[cfg_attr(feature = "serde", serde(default))]
    pub draw: bool,
    /// Switch between the 2- and 3-objective NSGA-II modes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub use_three_objectives: bool,
    /// The map text (spec.md §6 map text format).
    pub map: String,
    /// The individual groups to place (spec.md §6 individuals descriptor).
    pub individuals: IndividualsDescriptor,
}

impl ExperimentConfig {
    /// Reject configs that are missing required data or out of range
    /// (spec.md §7 InvalidConfig).
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.experiment.trim().is_empty() {
            return Err(SearchError::InvalidConfig("experiment name is empty".into()));
        }
        if self.scenario_seed.as_slice().is_empty() {
            return Err(SearchError::InvalidConfig("scenario_seed list is empty".into()));
        }
        if self.individuals.records().is_empty() {
            return Err(SearchError::InvalidConfig("no individual groups configured".into()));
        }
        for record in self.individuals.records() {
            record.validate()?;
        }
        Ok(())
    }
}

/// A single individual group record (spec.md §6).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndividualRecord {
    /// Group label.
    pub label: String,
    /// Number of individuals in this group.
    pub amount: u32,
    /// Cells moved per simulator iteration; must be >= 1.
    pub speed: u32,
    #[cfg_attr(feature = "serde", serde(rename = "KS"))]
    /// Weight of the static (floor) field.
    pub ks: f64,
    #[cfg_attr(feature = "serde", serde(rename = "KW"))]
    /// Weight of the wall field.
    pub kw: f64,
    #[cfg_attr(feature = "serde", serde(rename = "KD"))]
    /// Weight of the dynamic (trail) field.
    pub kd: f64,
    #[cfg_attr(feature = "serde", serde(rename = "KI"))]
    /// Weight of inertia.
    pub ki: f64,
    /// Optional display color; unused by the simulation core itself.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<[u8; 3]>,
}

impl IndividualRecord {
    fn validate(&self) -> Result<(), SearchError> {
        if self.amount == 0 {
            return Err(SearchError::InvalidConfig(format!(
                "individual group '{}' has amount 0",
                self.label
            )));
        }
        if self.speed == 0 {
            return Err(SearchError::InvalidConfig(format!(
                "individual group '{}' has speed 0",
                self.label
            )));
        }
        Ok(())
    }

    /// Convert to the simulation core's [`IndividualParams`].
    pub fn params(&self) -> IndividualParams {
        IndividualParams {
            speed: self.speed,
            ks: self.ks,
            kw: self.kw,
            kd: self.kd,
            ki: self.ki,
        }
    }
}

/// Accepts either `{"caracterizations": [...]}` or a bare list (spec.md
/// §6), normalized to the former internally.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum IndividualsDescriptor {
    /// `{"caracterizations": [...]}` shape.
    Wrapped {
        /// The individual group records.
        caracterizations: Vec<IndividualRecord>,
    },
    /// A bare list of individual group records.
    Bare(Vec<IndividualRecord>),
}

impl IndividualsDescriptor {
    /// The records, regardless of which wire shape was used.
    pub fn records(&self) -> &[IndividualRecord] {
        match self {
            Self::Wrapped { caracterizations } => caracterizations,
            Self::Bare(records) => records,
        }
    }
}

/// NSGA-II run parameters (spec.md §6).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NsgaConfig {
    /// Population size `P`, held constant across generations.
    pub population_size: u32,
    /// Number of generations `G` to run.
    pub generations: u32,
    /// Per-offspring-pair crossover probability `χ ∈ [0, 1]`.
    pub crossover_rate: f64,
    /// Per-offspring mutation-gate probability `µ ∈ [0, 1]`.
    pub mutation_rate: f64,
    /// Switch between the 2- and 3-objective modes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub use_three_objectives: bool,
}

impl NsgaConfig {
    /// Reject non-positive sizes or out-of-range rates (spec.md §7
    /// InvalidConfig).
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.population_size == 0 {
            return Err(SearchError::InvalidConfig("population_size must be positive".into()));
        }
        if self.generations == 0 {
            return Err(SearchError::InvalidConfig("generations must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(SearchError::InvalidConfig("crossover_rate out of [0, 1]".into()));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(SearchError::InvalidConfig("mutation_rate out of [0, 1]".into()));
        }
        Ok(())
    }

    /// The algorithm tag recorded on every [`ParetoRecord`] this run
    /// produces (spec.md §9 Open Question 3).
    pub fn algorithm_tag(&self) -> &'static str {
        if self.use_three_objectives {
            "nsga2-3obj"
        } else {
            "nsga2-2obj"
        }
    }
}

/// One member of a reported Pareto front (spec.md §6 result record).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParetoRecord {
    /// The door selection this record encodes.
    pub gene: Vec<bool>,
    /// The concrete door slots the gene activates.
    pub door_positions_grouped: Vec<DoorSlot>,
    /// Objective vector, length 2 or 3 depending on the run mode.
    pub objectives: Vec<f64>,
    /// `popcount(gene)`.
    pub num_doors: u32,
    /// Mean evacuation iterations across the configured scenario seeds.
    pub iterations: f64,
    /// Mean total travel distance across the configured scenario seeds.
    pub distance: f64,
    /// Generation the record's chromosome was produced in (0 for
    /// brute-force, which has no generational structure).
    pub generation: u32,
    /// Which search mode produced this record (spec.md §9 Open Question 3).
    pub algorithm: String,
}

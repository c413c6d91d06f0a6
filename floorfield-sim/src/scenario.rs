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

//! # Scenario
//!
//! Composition of the five maps and the individual set for one run
//! (spec.md §3 C8). A `Scenario` owns all of its maps exclusively —
//! reusing one across threads is forbidden (spec.md §5).

use rand::Rng;

use crate::constants::MAX_ITERATIONS;
use crate::crowd_map::CrowdMap;
use crate::dynamic_map::DynamicMap;
use crate::error::SimError;
use crate::individual::{Individual, IndividualParams};
use crate::static_map::StaticMap;
use crate::structure_map::StructureMap;
use crate::types::{DoorSlot, Pos};
use crate::wall_map::WallMap;

/// A request for one group of individuals, before placement is resolved
/// (spec.md §6 individuals descriptor).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndividualSpec {
    /// Group label.
    pub label: String,
    /// How many individuals of this kind to create.
    pub amount: u32,
    /// Movement parameters shared by the whole group.
    pub params: IndividualParams,
    /// Prescribed starting cells, one per individual in the group; `None`
    /// entries (or a spec shorter than `amount`) are placed randomly.
    #[cfg_attr(feature = "serde", serde(default))]
    pub positions: Vec<Option<Pos>>,
}

/// Everything needed to run one simulation: the five maps plus the
/// individual set.
#[derive(Debug, Clone)]
pub struct Scenario {
    structure: StructureMap,
    wall: WallMap,
    static_map: StaticMap,
    dynamic: DynamicMap,
    crowd: CrowdMap,
    individuals: Vec<Individual>,
    max_iterations: u32,
}

impl Scenario {
    /// Build a scenario: resolve the active door subset into a concrete
    /// `StructureMap`, derive `WallMap`/`StaticMap` from it (both depend
    /// only on active doors, spec.md §3), then place individuals using
    /// `scenario_rng` for any without a prescribed position.
    pub fn build(
        base: &StructureMap,
        all_slots: &[DoorSlot],
        active: &[bool],
        specs: &[IndividualSpec],
        scenario_rng: &mut impl Rng,
    ) -> Result<Self, SimError> {
        let structure = base.with_active_doors(all_slots, active);
        let wall = WallMap::derive(&structure);
        let static_map = StaticMap::derive(&structure);
        let mut crowd = CrowdMap::new(structure.rows(), structure.cols());
        let dynamic = DynamicMap::new(structure.rows(), structure.cols());

        let mut individuals = Vec::new();
        for spec in specs {
            for i in 0..spec.amount as usize {
                let prescribed = spec.positions.get(i).copied().flatten();
                let pos = match prescribed {
                    Some(p) => p,
                    None => crowd
                        .random_free_cell(&structure, scenario_rng)
                        .ok_or_else(|| SimError::InvalidMap("no free cell to place individual".into()))?,
                };
                let idx = individuals.len();
                crowd.place(idx, pos)?;
                individuals.push(Individual::new(spec.label.clone(), pos, spec.params));
            }
        }

        Ok(Self {
            structure,
            wall,
            static_map,
            dynamic,
            crowd,
            individuals,
            max_iterations: MAX_ITERATIONS,
        })
    }

    /// Override the default [`MAX_ITERATIONS`] cap for this scenario.
    pub fn with_max_iterations(mut self, cap: u32) -> Self {
        self.max_iterations = cap;
        self
    }

    pub(crate) fn structure(&self) -> &StructureMap {
        &self.structure
    }
    pub(crate) fn static_map(&self) -> &StaticMap {
        &self.static_map
    }
    pub(crate) fn dynamic_mut(&mut self) -> &mut DynamicMap {
        &mut self.dynamic
    }
    pub(crate) fn individuals(&self) -> &[Individual] {
        &self.individuals
    }
    pub(crate) fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Split the scenario into disjoint field borrows so a single
    /// individual's move can read the static/wall/dynamic fields and the
    /// structure while mutating the crowd map and the individual list at
    /// the same time, with no cloning.
    #[allow(clippy::type_complexity)]
    pub(crate) fn parts_mut(
        &mut self,
    ) -> (
        &StructureMap,
        &WallMap,
        &StaticMap,
        &DynamicMap,
        &mut CrowdMap,
        &mut [Individual],
    ) {
        (
            &self.structure,
            &self.wall,
            &self.static_map,
            &self.dynamic,
            &mut self.crowd,
            &mut self.individuals,
        )
    }
}

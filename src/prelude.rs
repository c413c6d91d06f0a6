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

//! Convenience re-exports of the types most callers need.

pub use crate::brute_force::BruteForceEngine;
pub use crate::cache::Cache;
pub use crate::config::{ExperimentConfig, IndividualRecord, IndividualsDescriptor, NsgaConfig, ParetoRecord, ScenarioSeeds};
pub use crate::error::SearchError;
pub use crate::factory::{Factory, Instance, MAX_DOORS};
pub use crate::gene::{Chromosome, Gene};
pub use crate::nsga2::NsgaEngine;

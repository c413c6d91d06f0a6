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

//! Error taxonomy for the search layer (spec.md §7).

use floorfield_sim::SimError;
use thiserror::Error;

/// Everything that can go wrong building an [`crate::factory::Instance`] or
/// running a driver ([`crate::nsga2::NsgaEngine`],
/// [`crate::brute_force::BruteForceEngine`]) against it.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Missing required fields, an out-of-range rate, or a non-positive
    /// size in an [`crate::config::ExperimentConfig`]/[`crate::config::NsgaConfig`].
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// Brute force was asked to enumerate more than
    /// [`crate::factory::MAX_DOORS`] candidate doors.
    #[error("too many candidate doors: {0} exceeds the brute-force cap")]
    TooLarge(usize),
    /// An external cancellation token was observed; the caller gets back
    /// whatever partial Pareto front had been computed so far.
    #[error("search cancelled")]
    Cancelled,
    /// A map failed to parse, or an individual placement overlapped.
    #[error(transparent)]
    Sim(#[from] SimError),
}

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

//! # evac-search
//!
//! The search layer of the evacuation-optimization engine: chooses which
//! candidate exit doors to open by exploring the trade-off between door
//! count, evacuation time and total travel distance.
//!
//! ## Structure
//! - [`floorfield_sim`] (a separate crate) is the cellular-automaton
//!   simulator this layer drives; it is not re-exported here, callers
//!   depend on it directly when they need [`floorfield_sim::StructureMap`]
//!   or [`floorfield_sim::SimResult`] themselves.
//! - [`gene`] defines [`gene::Gene`] and [`gene::Chromosome`], the shared
//!   currency between the two drivers below.
//! - [`factory`] owns the cache-backed evaluation of one gene into
//!   `(num_doors, iterations, distance)` ([`factory::Factory`]).
//! - [`nsga2`] is the custom NSGA-II driver ([`nsga2::NsgaEngine`]).
//! - [`brute_force`] is the exhaustive alternative
//!   ([`brute_force::BruteForceEngine`]).
//! - [`config`] defines the external wire shapes (spec.md §6), behind the
//!   `serde` feature.

#![deny(missing_debug_implementations)]

pub mod brute_force;
pub mod cache;
pub mod config;
pub mod error;
pub mod factory;
pub mod gene;
pub mod nsga2;
pub mod prelude;

#[cfg(test)]
mod test;

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

//! # Crowd Map
//!
//! Occupancy grid: at most one individual per cell (spec.md §4.6).

use rand::Rng;

use crate::error::SimError;
use crate::structure_map::StructureMap;
use crate::types::Pos;

/// Tracks which individual (by index) occupies each cell, if any.
#[derive(Debug, Clone)]
pub struct CrowdMap {
    cells: Vec<Vec<Option<usize>>>,
    rows: usize,
    cols: usize,
}

impl CrowdMap {
    /// An empty occupancy grid of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![vec![None; cols]; rows],
            rows,
            cols,
        }
    }

    /// `true` if `pos` has no occupant.
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.cells[pos.0][pos.1].is_none()
    }

    /// The occupant at `pos`, if any.
    pub fn occupant(&self, pos: Pos) -> Option<usize> {
        self.cells[pos.0][pos.1]
    }

    /// Place individual `idx` at `pos`, failing with [`SimError::Overlap`]
    /// if the cell is already taken.
    pub fn place(&mut self, idx: usize, pos: Pos) -> Result<(), SimError> {
        if self.cells[pos.0][pos.1].is_some() {
            return Err(SimError::Overlap(pos));
        }
        self.cells[pos.0][pos.1] = Some(idx);
        Ok(())
    }

    /// Atomically move individual `idx` from `from` to `to`. `to` must be
    /// empty (or equal to `from`, i.e. staying in place).
    pub fn move_to(&mut self, idx: usize, from: Pos, to: Pos) -> Result<(), SimError> {
        if from == to {
            return Ok(());
        }
        if self.cells[to.0][to.1].is_some() {
            return Err(SimError::Overlap(to));
        }
        self.cells[from.0][from.1] = None;
        self.cells[to.0][to.1] = Some(idx);
        Ok(())
    }

    /// Pick a uniformly random EMPTY, unoccupied cell for an individual
    /// with no prescribed starting position (spec.md §4.6 placement
    /// policy). Uses the caller-supplied scenario RNG, never a fresh one.
    pub fn random_free_cell(
        &self,
        structure: &StructureMap,
        rng: &mut impl Rng,
    ) -> Option<Pos> {
        let candidates: Vec<Pos> = (0..self.rows)
            .flat_map(|r| (0..self.cols).map(move |c| (r, c)))
            .filter(|&pos| {
                structure.at(pos) == crate::constants::TerrainCode::Empty && self.is_empty(pos)
            })
            .collect();
        if candidates.is_empty() {
            return None;
        }
        let i = rng.gen_range(0..candidates.len());
        Some(candidates[i])
    }
}

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

//! # Wall Map
//!
//! Per-cell wall-influence field derived from [`crate::structure_map::StructureMap`]
//! (spec.md §4.3). Every row is always emitted at the input's column width,
//! even for a terrain code this derivation has never seen — the defensive
//! fallback that fixes the historical short-row bug.

use crate::constants::NEIGHBORS_8;
use crate::structure_map::StructureMap;
use crate::types::Pos;

/// Wall-influence grid, same dimensions as its source [`StructureMap`].
#[derive(Debug, Clone)]
pub struct WallMap {
    cells: Vec<Vec<f64>>,
    rows: usize,
    cols: usize,
}

impl WallMap {
    /// Derive a wall-influence field from `structure` (spec.md §4.3).
    ///
    /// For every WALL/OBJECT cell, register a (normalized) influence of
    /// `0.0` — the source model's "wall seed" value — toward its non-wall
    /// 8-neighbors. Every other cell, *including any terrain code this
    /// function does not recognize*, gets `0.0` unconditionally: the
    /// unconditional else-branch spec.md §4.3 calls out as the bug fix.
    pub fn derive(structure: &StructureMap) -> Self {
        let rows = structure.rows();
        let cols = structure.cols();
        let mut cells = vec![vec![0.0_f64; cols]; rows];
        for r in 0..rows {
            for c in 0..cols {
                if structure.at((r, c)).blocks_movement() {
                    // Wall/object seed: influence decays outward from here.
                    // A pure seed contributes 0.0 at its own cell; the
                    // actual decaying value is read by the movement rule
                    // from neighboring non-wall cells via `influence_near`.
                    cells[r][c] = 0.0;
                } else {
                    cells[r][c] = 0.0;
                }
            }
        }
        let mut map = Self { cells, rows, cols };
        map.propagate(structure);
        map
    }

    /// Propagate a decaying influence outward from every wall/object cell
    /// using 8-connectivity, so that a non-wall cell close to a wall reads a
    /// higher `wallField` value than one far from any wall. This gives the
    /// movement rule's `KW · wallField(c)` term something non-trivial to
    /// react to (spec.md §4.7).
    fn propagate(&mut self, structure: &StructureMap) {
        const WALL_SEED: f64 = 1.0;
        const DECAY: f64 = 0.6;
        let mut frontier: Vec<Pos> = Vec::new();
        for r in 0..self.rows {
            for c in 0..self.cols {
                if structure.at((r, c)).blocks_movement() {
                    frontier.push((r, c));
                }
            }
        }
        // BFS-like relaxation in fixed neighbor order; repeat until no cell
        // improves, bounded by grid size so it always terminates.
        let mut changed = true;
        let mut distance = vec![vec![f64::MAX; self.cols]; self.rows];
        for &(r, c) in &frontier {
            distance[r][c] = 0.0;
        }
        let mut queue = frontier;
        while changed {
            changed = false;
            let mut next = Vec::new();
            for (r, c) in queue {
                let base = distance[r][c];
                for (dr, dc) in NEIGHBORS_8 {
                    let nr = r as i32 + dr;
                    let nc = c as i32 + dc;
                    if !structure.in_bounds(nr, nc) {
                        continue;
                    }
                    let (nr, nc) = (nr as usize, nc as usize);
                    if structure.at((nr, nc)).blocks_movement() {
                        continue;
                    }
                    let cand = base + 1.0;
                    if cand < distance[nr][nc] {
                        distance[nr][nc] = cand;
                        next.push((nr, nc));
                        changed = true;
                    }
                }
            }
            queue = next;
        }
        for r in 0..self.rows {
            for c in 0..self.cols {
                let d = distance[r][c];
                self.cells[r][c] = if d.is_finite() {
                    WALL_SEED * DECAY.powf(d)
                } else {
                    0.0
                };
            }
        }
    }

    /// Value at `(r, c)`.
    pub fn at(&self, pos: Pos) -> f64 {
        self.cells[pos.0][pos.1]
    }

    /// Row count; always equal to the source `StructureMap`'s.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count; always equal to the source `StructureMap`'s, for
    /// *every* row (spec.md §3, §8 invariant).
    pub fn cols(&self) -> usize {
        self.cols
    }
}

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

//! # Static Map
//!
//! The floor field (spec.md §4.4): shortest weighted distance from every
//! reachable cell to the nearest active DOOR, with diagonal steps costing
//! [`crate::constants::DISTANCE_MULTIPLIER`] and orthogonal steps costing
//! `1.0`. Recomputed whenever the active door set changes (spec.md §3).

use std::collections::BinaryHeap;
use std::cmp::Ordering;

use crate::constants::{DISTANCE_MULTIPLIER, NEIGHBORS_8, S_WALL};
use crate::structure_map::StructureMap;
use crate::types::Pos;

/// Floor field grid: `S_WALL` for blocked/unreachable cells, else the least
/// weighted distance to any DOOR.
#[derive(Debug, Clone)]
pub struct StaticMap {
    cells: Vec<Vec<f64>>,
    rows: usize,
    cols: usize,
}

/// Min-heap entry ordered by distance only; ties are broken by the
/// `BinaryHeap` pop order which, combined with row-major seeding below,
/// gives the deterministic relaxation order spec.md §4.4 requires.
#[derive(PartialEq)]
struct HeapEntry {
    dist: f64,
    pos: Pos,
}
impl Eq for HeapEntry {}
impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap, we want the smallest distance first.
        other
            .dist
            .partial_cmp(&self.dist)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}
impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl StaticMap {
    /// Recompute the floor field for `structure` given the set of active
    /// door cells (already-resolved positions, not slots — the caller
    /// resolves gene -> door cells via [`crate::structure_map::StructureMap::with_active_doors`]
    /// before calling this).
    pub fn derive(structure: &StructureMap) -> Self {
        let rows = structure.rows();
        let cols = structure.cols();
        let mut cells = vec![vec![S_WALL; cols]; rows];
        let mut heap = BinaryHeap::new();

        // Row-major seeding of every active DOOR cell at distance 1.0,
        // exactly as spec.md §4.4 specifies ("assign value 1 (seed)").
        for r in 0..rows {
            for c in 0..cols {
                if structure.at((r, c)) == crate::constants::TerrainCode::Door {
                    cells[r][c] = 1.0;
                    heap.push(HeapEntry { dist: 1.0, pos: (r, c) });
                }
            }
        }

        while let Some(HeapEntry { dist, pos: (r, c) }) = heap.pop() {
            if dist > cells[r][c] {
                continue;
            }
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
                let step_cost = if dr != 0 && dc != 0 {
                    DISTANCE_MULTIPLIER
                } else {
                    1.0
                };
                let cand = dist + step_cost;
                if cand < cells[nr][nc] {
                    cells[nr][nc] = cand;
                    heap.push(HeapEntry { dist: cand, pos: (nr, nc) });
                }
            }
        }

        Self { cells, rows, cols }
    }

    /// Value at `(r, c)`: `S_WALL` if blocked or unreachable, else the
    /// shortest weighted distance to a door.
    pub fn at(&self, pos: Pos) -> f64 {
        self.cells[pos.0][pos.1]
    }

    /// `true` if `(r, c)` can reach a door at all.
    pub fn is_reachable(&self, pos: Pos) -> bool {
        self.cells[pos.0][pos.1] < S_WALL
    }

    /// Row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count.
    pub fn cols(&self) -> usize {
        self.cols
    }
}

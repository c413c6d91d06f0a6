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

//! # Structure Map
//!
//! [`StructureMap`] is the immutable, parsed terrain grid every other map
//! (wall/static/dynamic/crowd) is derived from. It also discovers the
//! candidate [`DoorSlot`]s (spec.md §4.2) and can regenerate a map text for
//! a chosen subset of them, which is how the search layer turns a
//! [`crate`]-external gene into a concrete door configuration without ever
//! splicing map text in place.

use crate::error::SimError;
use crate::types::{DoorSlot, Direction, Pos};
use crate::constants::TerrainCode;

/// A parsed, rectangular terrain grid (spec.md §3).
#[derive(Debug, Clone)]
pub struct StructureMap {
    cells: Vec<Vec<TerrainCode>>,
    rows: usize,
    cols: usize,
}

impl StructureMap {
    /// Parse a map text (spec.md §6): one row per newline-terminated line,
    /// one ASCII digit per cell. Fails with [`SimError::InvalidMap`] when
    /// rows have inconsistent width or any row is empty.
    pub fn load(text: &str) -> Result<Self, SimError> {
        let rows: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
        if rows.is_empty() {
            return Err(SimError::InvalidMap("map text is empty".into()));
        }
        let cols = rows[0].chars().count();
        if cols == 0 {
            return Err(SimError::InvalidMap("map row is empty".into()));
        }
        let mut cells = Vec::with_capacity(rows.len());
        for (r, line) in rows.iter().enumerate() {
            let parsed: Vec<TerrainCode> = line
                .chars()
                .map(|c| {
                    TerrainCode::from_char(c)
                        .ok_or_else(|| SimError::InvalidMap(format!("unknown cell code '{c}'")))
                })
                .collect::<Result<_, _>>()?;
            if parsed.len() != cols {
                return Err(SimError::InvalidMap(format!(
                    "row {r} has width {}, expected {cols}",
                    parsed.len()
                )));
            }
            cells.push(parsed);
        }
        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Number of rows, `R`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `C`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Terrain code at `(r, c)`. Panics if out of bounds; callers stay
    /// inside `rows()`/`cols()`.
    pub fn at(&self, pos: Pos) -> TerrainCode {
        self.cells[pos.0][pos.1]
    }

    /// `true` if `(r, c)` lies on the grid.
    pub fn in_bounds(&self, r: i32, c: i32) -> bool {
        r >= 0 && c >= 0 && (r as usize) < self.rows && (c as usize) < self.cols
    }

    /// Discover all candidate [`DoorSlot`]s (spec.md §4.2). Horizontal runs
    /// are scanned first; a DOOR cell that also forms part of a vertical run
    /// still gets both slots recorded (the H/V assignment ambiguity spec.md
    /// §4.2 flags is about which scan sees it *first*, not about one
    /// excluding the other — both candidate slots are kept, and the
    /// horizontal-first order is what callers should treat as stable).
    pub fn door_slots(&self) -> Vec<DoorSlot> {
        let mut slots = Vec::new();
        // horizontal runs, scanned first (tie-break order, spec.md §4.2).
        for r in 0..self.rows {
            let mut c = 0;
            while c < self.cols {
                if self.cells[r][c] == TerrainCode::Door {
                    let start = c;
                    while c < self.cols && self.cells[r][c] == TerrainCode::Door {
                        c += 1;
                    }
                    slots.push(DoorSlot {
                        row: r,
                        col: start,
                        size: c - start,
                        direction: Direction::H,
                    });
                } else {
                    c += 1;
                }
            }
        }
        // vertical runs of length >= 2 only: a lone door cell is already
        // captured above as a size-1 horizontal slot (spec.md §4.2: "a
        // single DOOR cell qualifies as a DoorSlot of size 1, direction H
        // by convention").
        for c in 0..self.cols {
            let mut r = 0;
            while r < self.rows {
                if self.cells[r][c] == TerrainCode::Door {
                    let start = r;
                    while r < self.rows && self.cells[r][c] == TerrainCode::Door {
                        r += 1;
                    }
                    let run = r - start;
                    if run >= 2 {
                        slots.push(DoorSlot {
                            row: start,
                            col: c,
                            size: run,
                            direction: Direction::V,
                        });
                    }
                } else {
                    r += 1;
                }
            }
        }
        slots
    }

    /// Rebuild a [`StructureMap`] with only the given slots' cells marked
    /// DOOR; every other DOOR cell in the original map becomes EMPTY, and
    /// every non-door cell is left untouched. Dimensions are preserved
    /// exactly (spec.md §4.2).
    pub fn with_active_doors(&self, all_slots: &[DoorSlot], active: &[bool]) -> Self {
        let mut cells = self.cells.clone();
        for row in cells.iter_mut() {
            for code in row.iter_mut() {
                if *code == TerrainCode::Door {
                    *code = TerrainCode::Empty;
                }
            }
        }
        for (slot, &on) in all_slots.iter().zip(active.iter()) {
            if on {
                for (r, c) in slot.cells() {
                    cells[r][c] = TerrainCode::Door;
                }
            }
        }
        Self {
            cells,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl std::fmt::Display for StructureMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for code in row {
                write!(f, "{}", *code as u8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

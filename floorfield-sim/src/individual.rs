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

//! # Individual
//!
//! A single pedestrian agent (spec.md §3, §4.7): position, per-agent
//! movement parameters, and the per-step candidate-evaluation rule. Order
//! of individuals within a step, and actually committing a move into the
//! [`crate::crowd_map::CrowdMap`], are the [`crate::simulator::Simulator`]'s
//! job; this module only knows how a single individual scores and ranks its
//! own candidate cells.

use rand::Rng;

use crate::constants::{DISTANCE_MULTIPLIER, NEIGHBORS_8};
use crate::crowd_map::CrowdMap;
use crate::dynamic_map::DynamicMap;
use crate::static_map::StaticMap;
use crate::structure_map::StructureMap;
use crate::types::Pos;
use crate::wall_map::WallMap;

/// Per-agent movement weights (spec.md §3, §4.7).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndividualParams {
    /// Cells moved per simulator iteration.
    pub speed: u32,
    /// Weight of the static (floor) field.
    pub ks: f64,
    /// Weight of the wall field (subtracted).
    pub kw: f64,
    /// Weight of the dynamic (trail) field (subtracted).
    pub kd: f64,
    /// Weight of inertia (same direction as the last move).
    pub ki: f64,
}

/// A single pedestrian agent.
#[derive(Debug, Clone)]
pub struct Individual {
    /// Human-readable label (descriptor group name, spec.md §6).
    pub label: String,
    /// Current grid position.
    pub position: Pos,
    /// Movement parameters.
    pub params: IndividualParams,
    /// Whether this individual has reached a DOOR cell.
    pub evacuated: bool,
    /// Number of sub-steps actually taken before evacuating (or the cap).
    pub steps: u32,
    /// Total accumulated travel distance (orthogonal = 1, diagonal =
    /// `DISTANCE_MULTIPLIER`).
    pub distance: f64,
    /// Direction of the last accepted move, for the inertia term; `None`
    /// before the first move.
    last_move: Option<(i32, i32)>,
}

impl Individual {
    /// Construct a fresh, not-yet-evacuated individual at `position`.
    pub fn new(label: impl Into<String>, position: Pos, params: IndividualParams) -> Self {
        Self {
            label: label.into(),
            position,
            params,
            evacuated: false,
            steps: 0,
            distance: 0.0,
            last_move: None,
        }
    }

    /// Enumerate this individual's allowed candidate cells from its current
    /// position, in the fixed 8-neighborhood traversal order plus "stay",
    /// with each candidate's attraction score `A(c)` (spec.md §4.7).
    ///
    /// A candidate is disallowed if it is outside the grid, its terrain
    /// blocks movement, or the crowd map shows it occupied by someone else
    /// (the current cell is always allowed, to support "stay").
    pub fn candidates(
        &self,
        structure: &StructureMap,
        wall: &WallMap,
        static_map: &StaticMap,
        dynamic: &DynamicMap,
        crowd: &CrowdMap,
        self_idx: usize,
    ) -> Vec<(Pos, (i32, i32), f64)> {
        let (r, c) = self.position;
        let mut out = Vec::with_capacity(9);
        // "stay" is always allowed.
        out.push((self.position, (0, 0), self.attraction(self.position, (0, 0), wall, static_map, dynamic)));
        for (dr, dc) in NEIGHBORS_8 {
            let nr = r as i32 + dr;
            let nc = c as i32 + dc;
            if !structure.in_bounds(nr, nc) {
                continue;
            }
            let pos = (nr as usize, nc as usize);
            if structure.at(pos).blocks_movement() {
                continue;
            }
            match crowd.occupant(pos) {
                Some(other) if other != self_idx => continue,
                _ => {}
            }
            let score = self.attraction(pos, (dr, dc), wall, static_map, dynamic);
            out.push((pos, (dr, dc), score));
        }
        out
    }

    fn attraction(
        &self,
        pos: Pos,
        dir: (i32, i32),
        wall: &WallMap,
        static_map: &StaticMap,
        dynamic: &DynamicMap,
    ) -> f64 {
        let inertia = match self.last_move {
            Some(last) if last == dir => 1.0,
            _ => 0.0,
        };
        // `StaticMap` stores raw distance-to-door (spec.md §3), which grows
        // *away* from an exit; the attraction term needs the opposite sign
        // so that a positive KS rewards proximity, matching evacuation
        // behavior validated against S1 (spec.md §9 Open Question 2).
        let proximity = -static_map.at(pos);
        self.params.ks * proximity - self.params.kw * wall.at(pos)
            - self.params.kd * dynamic.at(pos)
            + self.params.ki * inertia
    }

    /// Softmax-sample one candidate from `candidates` (no temperature,
    /// `probability ∝ exp(A(c))`, spec.md §4.7 / §9 Open Question 2). Ties
    /// in the cumulative distribution are broken by iteration order, which
    /// is exactly the order `candidates` already yields.
    pub fn choose(candidates: &[(Pos, (i32, i32), f64)], rng: &mut impl Rng) -> usize {
        debug_assert!(!candidates.is_empty());
        let max_score = candidates
            .iter()
            .map(|(_, _, s)| *s)
            .fold(f64::NEG_INFINITY, f64::max);
        let weights: Vec<f64> = candidates
            .iter()
            .map(|(_, _, s)| (*s - max_score).exp())
            .collect();
        let total: f64 = weights.iter().sum();
        let mut pick = rng.gen_range(0.0..total);
        for (i, w) in weights.iter().enumerate() {
            if pick < *w {
                return i;
            }
            pick -= w;
        }
        weights.len() - 1
    }

    /// Commit a chosen move: update position, distance, direction memory,
    /// and step count. `dir` is `(0, 0)` for "stay".
    pub fn commit_move(&mut self, to: Pos, dir: (i32, i32)) {
        if dir != (0, 0) {
            self.distance += if dir.0 != 0 && dir.1 != 0 {
                DISTANCE_MULTIPLIER
            } else {
                1.0
            };
            self.last_move = Some(dir);
        }
        self.position = to;
        self.steps += 1;
    }
}

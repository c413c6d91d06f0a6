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

//! Grid codes, direction vectors and the few numeric knobs the floor-field
//! model needs. Kept in one place so every derivation (`wall_map`,
//! `static_map`, `dynamic_map`) agrees on them.

/// A terrain code as it appears in the map text format (spec.md §6).
///
/// Any byte outside `0..=4` is rejected by [`crate::structure_map::StructureMap::load`];
/// downstream derivations additionally treat any code they don't recognize
/// as [`TerrainCode::Empty`] (the defensive fallback spec.md §4.3 requires).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TerrainCode {
    /// Walkable, unoccupied floor.
    Empty = 0,
    /// Impassable wall.
    Wall = 1,
    /// A cell an individual evacuates through.
    Door = 2,
    /// Impassable furniture/obstacle.
    Object = 3,
    /// Outside the building footprint; impassable.
    Void = 4,
}

impl TerrainCode {
    /// Parse a single map-format character. Strict: anything other than
    /// `'0'..='4'` is rejected (the loader is allowed to be strict per
    /// spec.md §6; inner derivations remain defensive regardless).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Empty),
            '1' => Some(Self::Wall),
            '2' => Some(Self::Door),
            '3' => Some(Self::Object),
            '4' => Some(Self::Void),
            _ => None,
        }
    }

    /// `true` for codes that block both movement and the floor field.
    pub fn blocks_movement(self) -> bool {
        matches!(self, Self::Wall | Self::Object | Self::Void)
    }
}

/// Row-major `(dr, dc)` offsets of the 8-neighborhood, orthogonal first then
/// diagonal, in a fixed traversal order used everywhere a tie needs
/// deterministic breaking (movement rule, floor-field relaxation, wall
/// influence, diffusion).
pub const NEIGHBORS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Cost multiplier applied to a diagonal step, both in the floor field
/// relaxation and in per-individual distance accounting.
pub const DISTANCE_MULTIPLIER: f64 = std::f64::consts::SQRT_2;

/// Sentinel value for a [`crate::static_map::StaticMap`] cell that is
/// unreachable (blocked by wall/object/void, or not connected to any active
/// door).
pub const S_WALL: f64 = f64::MAX;

/// Decay applied to every [`crate::dynamic_map::DynamicMap`] cell each step,
/// before diffusion: `cell *= 1.0 - DIFUSIONDECAY_ALFA`.
pub const DIFUSIONDECAY_ALFA: f64 = 0.2;

/// Diffusion rate used when averaging a cell with its 8 neighbors.
pub const DIFUSIONDECAY_SIGMA: f64 = 0.1;

/// Hard iteration cap past which a simulation is reported `CAPPED`
/// (spec.md §4.8, §GLOSSARY). Configurable per [`crate::scenario::Scenario`].
pub const MAX_ITERATIONS: u32 = 1200;

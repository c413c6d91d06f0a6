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

//! # Cache
//!
//! A keyed memo of evaluated gene configurations (spec.md §3, §4.12),
//! shared by whichever driver ([`crate::nsga2::NsgaEngine`] or
//! [`crate::brute_force::BruteForceEngine`]) is currently running.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Mutex;

use crate::gene::Gene;

/// `(num_doors, iterations, distance)`, the cached value for one gene
/// (spec.md §4.9).
pub type EvalResult = (u32, f64, f64);

/// Number of mutex stripes used to coalesce concurrent misses on the same
/// key without serializing unrelated keys behind one global lock.
const STRIPES: usize = 64;

/// Mutex-protected memo of `gene -> (num_doors, iterations, distance)`,
/// invalidated whenever the enclosing instance hash changes
/// (spec.md §4.12).
#[derive(Debug)]
pub struct Cache {
    table: Mutex<HashMap<Gene, EvalResult>>,
    stripes: Vec<Mutex<()>>,
}

impl Cache {
    /// An empty cache.
    pub fn new() -> Self {
        Self {
            table: Mutex::new(HashMap::new()),
            stripes: (0..STRIPES).map(|_| Mutex::new(())).collect(),
        }
    }

    /// Drop every cached entry. Called whenever the owning
    /// [`crate::factory::Factory`] detects its instance hash changed.
    pub fn clear(&self) {
        self.table.lock().unwrap().clear();
    }

    /// Look up `gene`, without evaluating it.
    pub fn get(&self, gene: &Gene) -> Option<EvalResult> {
        self.table.lock().unwrap().get(gene).copied()
    }

    /// Return the cached value for `gene`, or call `evaluate` once and
    /// cache the result. Concurrent calls for the *same* gene serialize on
    /// that gene's stripe, so `evaluate` runs at most once per miss; calls
    /// for different genes proceed concurrently (spec.md §4.12, §5).
    pub fn get_or_evaluate(
        &self,
        gene: Gene,
        evaluate: impl FnOnce() -> EvalResult,
    ) -> EvalResult {
        if let Some(hit) = self.get(&gene) {
            return hit;
        }
        let _stripe = self.stripes[Self::stripe_index(&gene)].lock().unwrap();
        // re-check: another thread may have filled this key while we
        // waited for the stripe lock.
        if let Some(hit) = self.get(&gene) {
            return hit;
        }
        let value = evaluate();
        self.table.lock().unwrap().insert(gene, value);
        value
    }

    fn stripe_index(gene: &Gene) -> usize {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        gene.hash(&mut hasher);
        (hasher.finish() as usize) % STRIPES
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn evaluate_runs_once_per_key() {
        let cache = Cache::new();
        let calls = AtomicU32::new(0);
        let gene = vec![true, false];

        let first = cache.get_or_evaluate(gene.clone(), || {
            calls.fetch_add(1, Ordering::SeqCst);
            (1, 2.0, 3.0)
        });
        let second = cache.get_or_evaluate(gene, || {
            calls.fetch_add(1, Ordering::SeqCst);
            (9, 9.0, 9.0)
        });

        assert_eq!(first, (1, 2.0, 3.0));
        assert_eq!(second, (1, 2.0, 3.0));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn clear_forces_reevaluation() {
        let cache = Cache::new();
        let gene = vec![false, true];
        cache.get_or_evaluate(gene.clone(), || (1, 1.0, 1.0));
        cache.clear();
        assert!(cache.get(&gene).is_none());
    }
}

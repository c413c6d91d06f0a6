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

//! # NSGA-II engine
//!
//! The multi-objective genetic search driver (spec.md §4.10): a
//! population-preserving generational loop over non-dominated sorting,
//! crowding-distance-aware selection, cut-point crossover and bit-flip
//! mutation. Owns one driver-level RNG stream, distinct from and never
//! interleaved with a [`floorfield_sim::scenario::Scenario`]'s
//! `scenario_rng`/`simulation_rng` (spec.md §5, §9).

use std::sync::atomic::{AtomicBool, Ordering};

use itertools::Itertools;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::config::NsgaConfig;
use crate::error::SearchError;
use crate::factory::Factory;
use crate::gene::{dominates, Chromosome, Gene};

/// The NSGA-II driver. Stateless: every run is a fresh call against a
/// [`Factory`] and an [`NsgaConfig`].
#[derive(Debug, Default)]
pub struct NsgaEngine;

impl NsgaEngine {
    /// Run NSGA-II to completion (or until `cancel` is observed set
    /// between generations) and return the final Pareto front, rank 0 of
    /// the last generation's population (spec.md §4.10).
    pub fn run(
        &self,
        factory: &Factory,
        cfg: &NsgaConfig,
        rng_seed: u64,
        cancel: Option<&AtomicBool>,
    ) -> Result<Vec<Chromosome>, SearchError> {
        cfg.validate()?;
        let n = factory.num_candidate_doors();
        let target = cfg.population_size as usize;
        let cut = cut_point(n);
        let mut rng = StdRng::seed_from_u64(rng_seed);

        let mut population: Vec<Chromosome> = (0..target)
            .map(|_| Chromosome::new(0, random_gene(n, &mut rng)))
            .collect();
        evaluate_all(factory, &mut population, cfg.use_three_objectives)?;
        rank_and_crowd(&mut population);

        for generation in 1..=cfg.generations {
            if is_cancelled(cancel) {
                info!("nsga-ii cancelled before generation {generation}");
                return Err(SearchError::Cancelled);
            }

            let mut offspring = Vec::with_capacity(target);
            while offspring.len() < target {
                let parent_a = tournament(&population, &mut rng);
                let parent_b = tournament(&population, &mut rng);
                let (mut gene_a, mut gene_b) = (parent_a.gene.clone(), parent_b.gene.clone());
                if rng.gen::<f64>() < cfg.crossover_rate {
                    cut_point_crossover(&mut gene_a, &mut gene_b, cut);
                }
                bit_flip_mutate(&mut gene_a, cfg.mutation_rate, &mut rng);
                bit_flip_mutate(&mut gene_b, cfg.mutation_rate, &mut rng);
                offspring.push(Chromosome::new(generation, gene_a));
                if offspring.len() < target {
                    offspring.push(Chromosome::new(generation, gene_b));
                }
            }
            evaluate_all(factory, &mut offspring, cfg.use_three_objectives)?;

            let mut union: Vec<Chromosome> = population;
            union.extend(offspring);
            population = next_generation(union, target);
        }

        Ok(population.into_iter().filter(|c| c.rank == 0).collect())
    }
}

fn is_cancelled(cancel: Option<&AtomicBool>) -> bool {
    cancel.map(|flag| flag.load(Ordering::Relaxed)).unwrap_or(false)
}

/// `k = floor(0.3 * N)`, fixed per gene length (spec.md §4.10 step 3).
fn cut_point(n: usize) -> usize {
    ((n as f64) * 0.3).floor() as usize
}

fn random_gene(n: usize, rng: &mut impl Rng) -> Gene {
    (0..n).map(|_| rng.gen_bool(0.5)).collect()
}

/// Evaluate every chromosome lacking `obj`, in parallel across the shared,
/// cache-backed factory (spec.md §4.10 step 1, §2 A6).
fn evaluate_all(factory: &Factory, population: &mut [Chromosome], three_objectives: bool) -> Result<(), SearchError> {
    population
        .par_iter_mut()
        .try_for_each(|chromosome| factory.evaluate_chromosome(chromosome, three_objectives))
}

/// Cut-point crossover: swap the suffix from `cut` onward between the two
/// genes (spec.md §4.10 step 3).
fn cut_point_crossover(gene_a: &mut Gene, gene_b: &mut Gene, cut: usize) {
    for i in cut..gene_a.len() {
        std::mem::swap(&mut gene_a[i], &mut gene_b[i]);
    }
}

/// Two-level mutation gate: the offspring mutates at all with probability
/// `mutation_rate`; if it does, every bit flips independently with
/// probability 0.1 (spec.md §4.10 step 4).
fn bit_flip_mutate(gene: &mut Gene, mutation_rate: f64, rng: &mut impl Rng) {
    if rng.gen::<f64>() >= mutation_rate {
        return;
    }
    for bit in gene.iter_mut() {
        if rng.gen_bool(0.1) {
            *bit = !*bit;
        }
    }
}

/// Binary tournament: two uniformly chosen chromosomes, the one with the
/// better `(rank asc, crowding desc)` fitness tuple wins (spec.md §4.10
/// step 2).
fn tournament<'a>(population: &'a [Chromosome], rng: &mut impl Rng) -> &'a Chromosome {
    let a = &population[rng.gen_range(0..population.len())];
    let b = &population[rng.gen_range(0..population.len())];
    if is_better(a, b) {
        a
    } else {
        b
    }
}

fn is_better(a: &Chromosome, b: &Chromosome) -> bool {
    if a.rank != b.rank {
        a.rank < b.rank
    } else {
        a.crowding > b.crowding
    }
}

/// Fast non-dominated sort followed by crowding distance assignment,
/// applied to a population that has already been evaluated (used once,
/// on the initial population).
fn rank_and_crowd(population: &mut [Chromosome]) {
    let fronts = fast_non_dominated_sort(population);
    for front in &fronts {
        assign_crowding(population, front);
    }
}

/// Standard `O(N^2 * m)` non-dominated sort (spec.md §4.10 step 6).
/// Iteration is in chromosome-index order throughout, so ties resolve
/// deterministically by index (spec.md §4.10, "deterministic tie
/// handling by chromosome index").
fn fast_non_dominated_sort(union: &mut [Chromosome]) -> Vec<Vec<usize>> {
    let n = union.len();
    let mut domination_count = vec![0usize; n];
    let mut dominated: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut fronts: Vec<Vec<usize>> = vec![Vec::new()];

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let obj_i = union[i].obj.as_ref().expect("chromosome must be evaluated before sorting");
            let obj_j = union[j].obj.as_ref().expect("chromosome must be evaluated before sorting");
            if dominates(obj_i, obj_j) {
                dominated[i].push(j);
            } else if dominates(obj_j, obj_i) {
                domination_count[i] += 1;
            }
        }
        if domination_count[i] == 0 {
            union[i].rank = 0;
            fronts[0].push(i);
        }
    }

    let mut level = 0;
    while !fronts[level].is_empty() {
        let mut next_front = Vec::new();
        for &i in &fronts[level] {
            for &j in &dominated[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    union[j].rank = (level + 1) as u32;
                    next_front.push(j);
                }
            }
        }
        level += 1;
        fronts.push(next_front);
    }
    fronts.pop();
    fronts
}

/// Crowding distance within one front (spec.md §4.10): per objective,
/// sort the front, give the boundary elements `+inf`, and add each
/// interior element's normalized neighbor gap.
fn assign_crowding(union: &mut [Chromosome], front: &[usize]) {
    if front.is_empty() {
        return;
    }
    for &i in front {
        union[i].crowding = 0.0;
    }
    let num_objectives = union[front[0]].obj.as_ref().unwrap().len();
    for obj_idx in 0..num_objectives {
        let mut ordered = front.to_vec();
        ordered.sort_by(|&a, &b| {
            let va = union[a].obj.as_ref().unwrap()[obj_idx];
            let vb = union[b].obj.as_ref().unwrap()[obj_idx];
            va.partial_cmp(&vb).unwrap().then(a.cmp(&b))
        });
        union[ordered[0]].crowding = f64::INFINITY;
        union[*ordered.last().unwrap()].crowding = f64::INFINITY;
        let min = union[ordered[0]].obj.as_ref().unwrap()[obj_idx];
        let max = union[*ordered.last().unwrap()].obj.as_ref().unwrap()[obj_idx];
        let range = max - min;
        for (prev_idx, cur_idx, next_idx) in ordered.iter().copied().tuple_windows() {
            let prev = union[prev_idx].obj.as_ref().unwrap()[obj_idx];
            let next = union[next_idx].obj.as_ref().unwrap()[obj_idx];
            let contribution = if range > 0.0 { (next - prev) / range } else { 0.0 };
            union[cur_idx].crowding += contribution;
        }
    }
}

/// Build generation `t+1`: whole fronts are added while they fit, the
/// first front that doesn't is truncated by descending crowding distance
/// (spec.md §4.10 step 7). Population size is preserved exactly.
fn next_generation(union: Vec<Chromosome>, target: usize) -> Vec<Chromosome> {
    let mut union = union;
    let fronts = fast_non_dominated_sort(&mut union);
    for front in &fronts {
        assign_crowding(&mut union, front);
    }

    let mut selected = Vec::with_capacity(target);
    for front in &fronts {
        if selected.len() + front.len() <= target {
            selected.extend(front.iter().copied());
        } else {
            let mut remainder = front.clone();
            remainder.sort_by(|&a, &b| {
                union[b]
                    .crowding
                    .partial_cmp(&union[a].crowding)
                    .unwrap()
                    .then(a.cmp(&b))
            });
            selected.extend(remainder.into_iter().take(target - selected.len()));
            break;
        }
    }

    let mut slots: Vec<Option<Chromosome>> = union.into_iter().map(Some).collect();
    selected.into_iter().map(|i| slots[i].take().unwrap()).collect()
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn chromosome(rank: u32, crowding: f64, obj: Vec<f64>) -> Chromosome {
        Chromosome {
            generation: 0,
            gene: vec![true],
            obj: Some(obj),
            rank,
            crowding,
        }
    }

    #[test]
    fn tournament_prefers_lower_rank() {
        let population = vec![
            chromosome(1, 0.0, vec![1.0, 1.0]),
            chromosome(0, 0.0, vec![2.0, 2.0]),
        ];
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..20 {
            let winner = tournament(&population, &mut rng);
            assert_eq!(winner.rank, 0);
        }
    }

    #[test]
    fn tournament_breaks_rank_ties_by_crowding() {
        let population = vec![chromosome(0, 0.5, vec![1.0, 1.0]), chromosome(0, 5.0, vec![2.0, 2.0])];
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..20 {
            let winner = tournament(&population, &mut rng);
            assert_eq!(winner.crowding, 5.0);
        }
    }

    #[test]
    fn cut_point_crossover_splits_at_k() {
        let mut a: Gene = vec![true, true, true, true, true];
        let mut b: Gene = vec![false, false, false, false, false];
        let a_before = a.clone();
        let b_before = b.clone();
        let k = 2;
        cut_point_crossover(&mut a, &mut b, k);
        assert_eq!(a[..k], a_before[..k]);
        assert_eq!(a[k..], b_before[k..]);
        assert_eq!(b[..k], b_before[..k]);
        assert_eq!(b[k..], a_before[k..]);
    }

    #[test]
    fn cut_point_is_thirty_percent_of_length_floored() {
        assert_eq!(cut_point(10), 3);
        assert_eq!(cut_point(4), 1);
        assert_eq!(cut_point(1), 0);
    }

    #[test]
    fn non_dominated_sort_assigns_rank_zero_to_the_front() {
        let mut population = vec![
            chromosome(99, 0.0, vec![1.0, 1.0]),
            chromosome(99, 0.0, vec![2.0, 2.0]),
            chromosome(99, 0.0, vec![0.0, 5.0]),
        ];
        let fronts = fast_non_dominated_sort(&mut population);
        assert_eq!(fronts[0].len(), 2);
        assert_eq!(population[0].rank, 0);
        assert_eq!(population[1].rank, 1);
        assert_eq!(population[2].rank, 0);
    }

    #[test]
    fn boundary_crowding_is_infinite() {
        let mut population = vec![
            chromosome(0, 0.0, vec![0.0, 2.0]),
            chromosome(0, 0.0, vec![1.0, 1.0]),
            chromosome(0, 0.0, vec![2.0, 0.0]),
        ];
        let front = vec![0, 1, 2];
        assign_crowding(&mut population, &front);
        assert_eq!(population[0].crowding, f64::INFINITY);
        assert_eq!(population[2].crowding, f64::INFINITY);
        assert!(population[1].crowding.is_finite());
    }

    #[test]
    fn next_generation_preserves_population_size() {
        let union: Vec<Chromosome> = (0..8)
            .map(|i| chromosome(0, 0.0, vec![i as f64, (8 - i) as f64]))
            .collect();
        let next = next_generation(union, 4);
        assert_eq!(next.len(), 4);
    }
}

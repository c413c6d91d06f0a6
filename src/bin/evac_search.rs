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

//! Thin CLI wrapper: reads an experiment file, drives one of the three
//! commands, writes a result file (spec.md §6). Config-file loading beyond
//! "read this JSON path" and argument parsing beyond picking a subcommand
//! are deliberately this binary's entire job (spec.md §1 Non-goals).

use std::fs::{read_to_string, remove_file, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use evac_search::config::{ExperimentConfig, NsgaConfig, ParetoRecord};
use evac_search::error::SearchError;
use evac_search::factory::{Factory, Instance};
use evac_search::gene::{num_doors, Chromosome};
use evac_search::{brute_force::BruteForceEngine, nsga2::NsgaEngine};

/// Evaluate or optimize door placements for an evacuation scenario.
#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the simulation once with every candidate door open and report
    /// its objectives.
    Simulate {
        /// Path to the experiment JSON file.
        experiment: PathBuf,
        /// Where to write the result JSON.
        output: PathBuf,
    },
    /// Search door placements with the NSGA-II engine.
    OptimizeNsga {
        /// Path to the experiment JSON file.
        experiment: PathBuf,
        /// Path to the NSGA-II run parameters JSON file.
        nsga_config: PathBuf,
        /// Driver-level RNG seed for population/selection/variation.
        #[clap(short, long, default_value = "0")]
        seed: u64,
        /// Where to write the result JSON (one record per Pareto member).
        output: PathBuf,
    },
    /// Enumerate every door subset and report the exact Pareto front.
    OptimizeBrute {
        /// Path to the experiment JSON file.
        experiment: PathBuf,
        /// Where to write the result JSON (one record per Pareto member).
        output: PathBuf,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("brute force refused: {0} candidate doors exceeds the cap")]
    TooLarge(usize),
    #[error("{0}")]
    Other(String),
}

impl From<SearchError> for CliError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidConfig(msg) => Self::InvalidInput(msg),
            SearchError::Sim(inner) => Self::InvalidInput(inner.to_string()),
            SearchError::TooLarge(n) => Self::TooLarge(n),
            SearchError::Cancelled => Self::Other("search cancelled".into()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

fn main() {
    pretty_env_logger::init_timed();
    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(CliError::InvalidInput(msg)) => {
            eprintln!("invalid input: {msg}");
            2
        }
        Err(CliError::TooLarge(n)) => {
            eprintln!("too many candidate doors for brute force: {n}");
            3
        }
        Err(CliError::Other(msg)) => {
            eprintln!("error: {msg}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Simulate { experiment, output } => simulate(experiment, output),
        Command::OptimizeNsga {
            experiment,
            nsga_config,
            seed,
            output,
        } => optimize_nsga(experiment, nsga_config, seed, output),
        Command::OptimizeBrute { experiment, output } => optimize_brute(experiment, output),
    }
}

fn load_experiment(path: &Path) -> Result<ExperimentConfig, CliError> {
    let text = read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn write_json(path: &Path, value: &impl serde::Serialize) -> Result<(), CliError> {
    if path.exists() {
        remove_file(path)?;
    }
    let mut file = OpenOptions::new().create_new(true).write(true).open(path)?;
    write!(file, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn simulate(experiment: PathBuf, output: PathBuf) -> Result<(), CliError> {
    let config = load_experiment(&experiment)?;
    let factory = Factory::new(Instance::build(&config)?);
    let gene = vec![true; factory.num_candidate_doors()];
    let (doors, iterations, distance) = factory.evaluate(&gene)?;
    let record = ParetoRecord {
        gene: gene.clone(),
        door_positions_grouped: factory.slots().to_vec(),
        objectives: if config.use_three_objectives {
            vec![doors as f64, iterations, distance]
        } else {
            vec![doors as f64, distance]
        },
        num_doors: doors,
        iterations,
        distance,
        generation: 0,
        algorithm: "simulate".into(),
    };
    write_json(&output, &vec![record])
}

fn optimize_nsga(experiment: PathBuf, nsga_config: PathBuf, seed: u64, output: PathBuf) -> Result<(), CliError> {
    let experiment_config = load_experiment(&experiment)?;
    let nsga_text = read_to_string(nsga_config)?;
    let nsga_cfg: NsgaConfig = serde_json::from_str(&nsga_text)?;
    nsga_cfg.validate()?;

    let factory = Factory::new(Instance::build(&experiment_config)?);
    let front = NsgaEngine.run(&factory, &nsga_cfg, seed, None)?;
    let records: Vec<ParetoRecord> = front
        .iter()
        .map(|chromosome| to_pareto_record(&factory, chromosome, nsga_cfg.algorithm_tag()))
        .collect();
    write_json(&output, &records)
}

fn optimize_brute(experiment: PathBuf, output: PathBuf) -> Result<(), CliError> {
    let experiment_config = load_experiment(&experiment)?;
    let factory = Factory::new(Instance::build(&experiment_config)?);
    let front = BruteForceEngine.run(&factory, experiment_config.use_three_objectives, None)?;
    let records: Vec<ParetoRecord> = front
        .iter()
        .map(|chromosome| to_pareto_record(&factory, chromosome, "brute-force"))
        .collect();
    write_json(&output, &records)
}

fn to_pareto_record(factory: &Factory, chromosome: &Chromosome, algorithm: &str) -> ParetoRecord {
    let slots = factory.slots();
    let door_positions_grouped = chromosome
        .gene
        .iter()
        .zip(slots)
        .filter(|(&on, _)| on)
        .map(|(_, slot)| *slot)
        .collect();
    // a cache hit: every chromosome here was already evaluated by its
    // driver, this just re-reads `(iterations, distance)` alongside `obj`.
    let (_, iterations, distance) = factory
        .evaluate(&chromosome.gene)
        .expect("chromosome gene was already validated against this factory");
    ParetoRecord {
        gene: chromosome.gene.clone(),
        door_positions_grouped,
        objectives: chromosome.obj.clone().unwrap_or_default(),
        num_doors: num_doors(&chromosome.gene),
        iterations,
        distance,
        generation: chromosome.generation,
        algorithm: algorithm.to_string(),
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use log::{error, info};
use ptc::core::error::Result;
use ptc::core::ptc::Ptc;
use ptc::core::save_state::SaveState;
use ptc::core::scenario::Scenario;
use std::path::PathBuf;
use std::process::ExitCode;

/// PTC timer/counter peripheral model
#[derive(Parser)]
#[command(name = "ptc")]
#[command(about = "Run register-level scenarios against the PTC model", long_about = None)]
struct Args {
    /// Path to scenario file (.toml)
    scenario: PathBuf,

    /// Print the report as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Restore peripheral state from this file before running
    #[arg(short = 'l', long)]
    load_state: Option<PathBuf>,

    /// Write peripheral state to this file after running
    #[arg(short = 's', long)]
    save_state: Option<PathBuf>,
}

fn main() -> ExitCode {
    // .env is optional; it only carries RUST_LOG and similar settings
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<bool> {
    info!("ptc v{}", env!("CARGO_PKG_VERSION"));
    info!("Loading scenario from: {}", args.scenario.display());

    let scenario = Scenario::load(&args.scenario)?;
    let mut ptc = Ptc::new();

    if let Some(path) = &args.load_state {
        info!("Restoring state from: {}", path.display());
        SaveState::load_from_file(path)?.apply_to(&mut ptc);
    }

    let report = scenario.run(&mut ptc)?;

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        for read in &report.reads {
            match &read.label {
                Some(label) => info!("{} ({}) = {}", read.register, label, read.value),
                None => info!("{} = {}", read.register, read.value),
            }
        }
        for failure in &report.failures {
            error!(
                "step {}: {}: expected {}, got {}",
                failure.step, failure.description, failure.expected, failure.actual
            );
        }
        info!("Total cycles: {}", report.cycles);
    }

    if let Some(path) = &args.save_state {
        SaveState::from_ptc(&ptc, scenario.name.as_str()).save_to_file(path)?;
    }

    Ok(report.passed())
}

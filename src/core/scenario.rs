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

//! Register-level stimulus scenarios
//!
//! A scenario is a TOML file listing bus accesses and clock activity to
//! apply to a [`Ptc`]. Running it produces a [`ScenarioReport`] with every
//! read value and every failed check.
//!
//! # Format
//!
//! ```toml
//! name = "eclk"
//!
//! [bus]
//! access_cycles = 4     # native cycles consumed by each bus access
//!
//! [[step]]
//! op = "write"
//! target = "ctrl"       # register name or byte address (e.g. 0x0C)
//! value = 0x01          # EN
//!
//! [[step]]
//! op = "cycles"         # native clock edges with a constant external level
//! count = 6
//! ext_level = false
//!
//! [[step]]
//! op = "read"
//! target = "cntr"
//! label = "l1"
//! expect = 10           # 6 cycles + one bus access
//!
//! [[step]]
//! op = "write"
//! target = 0x0C
//! value = 0x80          # CNTRRST
//!
//! [[step]]
//! op = "write"
//! target = "ctrl"
//! value = 0x03          # EN | ECLK
//!
//! [[step]]
//! op = "pulses"         # external clock pulses, in native cycles
//! count = 1489
//! high = 1
//! low = 1
//!
//! [[step]]
//! op = "read"
//! target = "cntr"
//! label = "l2"
//! expect = 1489
//!
//! [[step]]
//! op = "assert_delta"   # wrapping difference of two labelled reads
//! from = "l1"
//! to = "l2"
//! equals = 1479
//!
//! [[step]]
//! op = "reset"          # whole-peripheral reset
//! ```

use super::error::{PtcError, Result};
use super::ptc::{Ptc, Register};
use super::save_state::PtcState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Register addressed by name or raw byte address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Target {
    Name(Register),
    Address(u32),
}

impl Target {
    pub fn address(self) -> u32 {
        match self {
            Target::Name(reg) => reg.address(),
            Target::Address(address) => address,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Name(reg) => write!(f, "{}", reg),
            Target::Address(address) => match Register::from_address(*address) {
                Some(reg) => write!(f, "{}", reg),
                None => write!(f, "0x{:02X}", address),
            },
        }
    }
}

/// Bus transaction timing
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct BusTiming {
    /// Native clock cycles that elapse before each access lands
    #[serde(default)]
    pub access_cycles: u32,
}

/// One scenario step
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Write {
        target: Target,
        value: u32,
    },
    Read {
        target: Target,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        expect: Option<u32>,
    },
    Cycles {
        count: u32,
        #[serde(default)]
        ext_level: bool,
    },
    Pulses {
        count: u32,
        high: u32,
        low: u32,
    },
    AssertDelta {
        from: String,
        to: String,
        equals: u32,
    },
    Reset,
}

/// A parsed scenario
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,

    #[serde(default)]
    pub bus: BusTiming,

    #[serde(rename = "step", default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Parse a scenario from TOML text
    ///
    /// # Example
    ///
    /// ```
    /// use ptc::core::scenario::Scenario;
    ///
    /// let scenario = Scenario::from_toml_str(r#"
    ///     name = "smoke"
    ///
    ///     [[step]]
    ///     op = "write"
    ///     target = "ctrl"
    ///     value = 1
    /// "#).unwrap();
    /// assert_eq!(scenario.steps.len(), 1);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a scenario file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let scenario = Self::from_toml_str(&text)?;
        log::debug!(
            "Loaded scenario '{}' ({} steps) from {}",
            scenario.name,
            scenario.steps.len(),
            path.as_ref().display()
        );
        Ok(scenario)
    }

    /// Run the scenario against a peripheral
    ///
    /// # Errors
    ///
    /// Returns [`PtcError::Scenario`] for malformed steps (zero pulse width,
    /// unknown label). Check mismatches are not errors; they are collected
    /// in [`ScenarioReport::failures`].
    pub fn run(&self, ptc: &mut Ptc) -> Result<ScenarioReport> {
        ScenarioRunner::new(ptc, self.bus).run(self)
    }
}

/// A value read during a scenario
#[derive(Debug, Clone, Serialize)]
pub struct ReadRecord {
    pub step: usize,
    pub register: String,
    pub address: u32,
    pub value: u32,
    pub label: Option<String>,
}

/// A failed `expect` or `assert_delta` check
#[derive(Debug, Clone, Serialize)]
pub struct CheckFailure {
    pub step: usize,
    pub description: String,
    pub expected: u32,
    pub actual: u32,
}

/// Outcome of a scenario run
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub reads: Vec<ReadRecord>,
    pub failures: Vec<CheckFailure>,
    pub final_state: PtcState,
    pub cycles: u64,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Value of a labelled read
    pub fn labelled(&self, label: &str) -> Option<u32> {
        self.reads
            .iter()
            .rev()
            .find(|r| r.label.as_deref() == Some(label))
            .map(|r| r.value)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Drives a peripheral through scenario steps
///
/// Keeps the external clock level between steps: it stays at whatever the
/// last `cycles` or `pulses` step left it at.
pub struct ScenarioRunner<'a> {
    ptc: &'a mut Ptc,
    timing: BusTiming,
    ext_level: bool,
    labels: HashMap<String, u32>,
    reads: Vec<ReadRecord>,
    failures: Vec<CheckFailure>,
}

impl<'a> ScenarioRunner<'a> {
    pub fn new(ptc: &'a mut Ptc, timing: BusTiming) -> Self {
        Self {
            ptc,
            timing,
            ext_level: false,
            labels: HashMap::new(),
            reads: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn run(mut self, scenario: &Scenario) -> Result<ScenarioReport> {
        log::info!(
            "Running scenario '{}' ({} steps)",
            scenario.name,
            scenario.steps.len()
        );

        for (index, step) in scenario.steps.iter().enumerate() {
            self.step(index, step)?;
        }

        let report = ScenarioReport {
            name: scenario.name.clone(),
            reads: self.reads,
            failures: self.failures,
            final_state: self.ptc.snapshot(),
            cycles: self.ptc.cycles(),
        };

        if report.passed() {
            log::info!("Scenario '{}' passed", report.name);
        } else {
            log::warn!(
                "Scenario '{}' failed {} check(s)",
                report.name,
                report.failures.len()
            );
        }

        Ok(report)
    }

    fn step(&mut self, index: usize, step: &Step) -> Result<()> {
        log::debug!("step {}: {:?}", index, step);

        match step {
            Step::Write { target, value } => {
                self.bus_delay();
                self.ptc.write(target.address(), *value);
            }
            Step::Read {
                target,
                label,
                expect,
            } => {
                self.bus_delay();
                let value = self.ptc.read(target.address());
                log::info!("{} = 0x{:08X} ({})", target, value, value);

                if let Some(expected) = expect {
                    self.check(index, format!("{} == {}", target, expected), *expected, value);
                }
                if let Some(label) = label {
                    self.labels.insert(label.clone(), value);
                }

                self.reads.push(ReadRecord {
                    step: index,
                    register: target.to_string(),
                    address: target.address(),
                    value,
                    label: label.clone(),
                });
            }
            Step::Cycles { count, ext_level } => {
                self.ext_level = *ext_level;
                self.ptc.run(*count, self.ext_level);
            }
            Step::Pulses { count, high, low } => {
                if *high == 0 || *low == 0 {
                    return Err(PtcError::Scenario(format!(
                        "step {}: pulse phases must be at least one cycle (high={}, low={})",
                        index, high, low
                    )));
                }
                for _ in 0..*count {
                    self.ptc.run(*high, true);
                    self.ptc.run(*low, false);
                }
                self.ext_level = false;
            }
            Step::AssertDelta { from, to, equals } => {
                let first = self.label(index, from)?;
                let second = self.label(index, to)?;
                let delta = second.wrapping_sub(first);
                self.check(index, format!("{} - {} == {}", to, from, equals), *equals, delta);
            }
            Step::Reset => {
                self.ptc.reset();
                self.ext_level = false;
            }
        }

        Ok(())
    }

    fn bus_delay(&mut self) {
        if self.timing.access_cycles > 0 {
            self.ptc.run(self.timing.access_cycles, self.ext_level);
        }
    }

    fn label(&self, index: usize, name: &str) -> Result<u32> {
        self.labels.get(name).copied().ok_or_else(|| {
            PtcError::Scenario(format!("step {}: unknown read label '{}'", index, name))
        })
    }

    fn check(&mut self, step: usize, description: String, expected: u32, actual: u32) {
        if expected != actual {
            log::error!(
                "step {}: check failed: {} (got {})",
                step,
                description,
                actual
            );
            self.failures.push(CheckFailure {
                step,
                description,
                expected,
                actual,
            });
        }
    }
}

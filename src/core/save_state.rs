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

//! Save state serialization for the PTC model
//!
//! A save state captures the complete peripheral state so a long simulation
//! can be checkpointed and resumed bit-exactly.
//!
//! # Save State Format
//!
//! Save states are serialized using bincode. The state includes:
//! - Metadata (timestamp, free-form label)
//! - Register file (CNTR, HRC, LRC, CTRL)
//! - Edge detector history and cycle count
//!
//! # Version Compatibility
//!
//! Save states include a version number. Loading a save state with a
//! different version fails with [`PtcError::IncompatibleSaveState`].
//!
//! # Example
//!
//! ```no_run
//! use ptc::core::ptc::Ptc;
//! use ptc::core::save_state::SaveState;
//!
//! let mut ptc = Ptc::new();
//! // ... run simulation ...
//!
//! let state = SaveState::from_ptc(&ptc, "checkpoint");
//! state.save_to_file("ptc.state").unwrap();
//!
//! let loaded = SaveState::load_from_file("ptc.state").unwrap();
//! loaded.apply_to(&mut ptc);
//! ```

use super::error::{PtcError, Result};
use super::ptc::Ptc;
use bincode::{config, Decode, Encode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Save state version for compatibility checking
pub const SAVE_STATE_VERSION: u32 = 2;

/// Complete PTC save state
#[derive(Debug, Serialize, Deserialize, Encode, Decode)]
pub struct SaveState {
    /// Version number for compatibility checking
    pub version: u32,

    /// Save state metadata
    pub metadata: SaveStateMetadata,

    /// Peripheral state
    pub ptc: PtcState,
}

/// Save state metadata
#[derive(Debug, Serialize, Deserialize, Encode, Decode)]
#[bincode(encode_bounds = "", decode_bounds = "")]
pub struct SaveStateMetadata {
    /// Timestamp when the save state was created
    #[bincode(with_serde)]
    pub timestamp: DateTime<Utc>,

    /// Free-form label (e.g. scenario name)
    pub label: String,
}

/// Peripheral register snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Encode, Decode)]
pub struct PtcState {
    /// Counter (CNTR)
    pub cntr: u32,

    /// High reference (HRC)
    pub hrc: u32,

    /// Low reference (LRC)
    pub lrc: u32,

    /// Control register (CTRL), reserved bits clear
    pub ctrl: u32,

    /// External clock level seen on the last evaluation
    pub ext_level: bool,

    /// Counter reset latched by a CTRL write, not yet evaluated
    pub reset_pending: bool,

    /// Native clock edges evaluated since peripheral reset
    pub cycles: u64,
}

impl SaveState {
    /// Capture a save state from a running peripheral
    pub fn from_ptc(ptc: &Ptc, label: impl Into<String>) -> Self {
        Self {
            version: SAVE_STATE_VERSION,
            metadata: SaveStateMetadata {
                timestamp: Utc::now(),
                label: label.into(),
            },
            ptc: ptc.snapshot(),
        }
    }

    /// Restore the captured state into a peripheral
    pub fn apply_to(&self, ptc: &mut Ptc) {
        ptc.restore(&self.ptc);
    }

    /// Encode to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::encode_to_vec(self, config::standard())?)
    }

    /// Decode from bytes and verify version compatibility
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (state, _): (SaveState, usize) =
            bincode::decode_from_slice(bytes, config::standard())?;

        if state.version != SAVE_STATE_VERSION {
            return Err(PtcError::IncompatibleSaveState {
                expected: SAVE_STATE_VERSION,
                got: state.version,
            });
        }

        Ok(state)
    }

    /// Save state to file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created or written, or if
    /// encoding fails.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let encoded = self.to_bytes()?;
        let mut file = File::create(path.as_ref())?;
        file.write_all(&encoded)?;
        log::info!(
            "Saved PTC state '{}' to {}",
            self.metadata.label,
            path.as_ref().display()
        );
        Ok(())
    }

    /// Load state from file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, decoding fails, or the
    /// version is incompatible.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path.as_ref())?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;
        Self::from_bytes(&buffer)
    }
}

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

/// Error types for the PTC model and its tooling
///
/// The peripheral itself never fails; these cover scenario loading,
/// save states and other I/O around it.
use thiserror::Error;

/// Result type for PTC operations
pub type Result<T> = std::result::Result<T, PtcError>;

/// Main error type
#[derive(Error, Debug)]
pub enum PtcError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scenario parse error: {0}")]
    ScenarioParse(#[from] toml::de::Error),

    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Save state encode error: {0}")]
    SaveStateEncode(#[from] bincode::error::EncodeError),

    #[error("Save state decode error: {0}")]
    SaveStateDecode(#[from] bincode::error::DecodeError),

    #[error("Incompatible save state version: {got} (expected {expected})")]
    IncompatibleSaveState { expected: u32, got: u32 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

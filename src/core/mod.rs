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

//! Core model components
//!
//! - PTC peripheral (register file, clock source selector, counter engine)
//! - Register device trait
//! - Save states
//! - Stimulus scenarios

pub mod device;
pub mod error;
pub mod ptc;
pub mod save_state;
pub mod scenario;

// Re-export commonly used types
pub use device::RegisterDevice;
pub use error::{PtcError, Result};
pub use ptc::{ControlFlags, Ptc, Register};
pub use save_state::SaveState;
pub use scenario::Scenario;

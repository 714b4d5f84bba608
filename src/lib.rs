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

//! PTC timer/counter peripheral model
//!
//! This library provides a cycle-level behavioral model of a small
//! register-mapped periodic timer/counter, together with save states and a
//! scenario runner for driving it through its register interface.
//!
//! # Example
//!
//! ```
//! use ptc::core::ptc::{ControlFlags, Ptc, Register};
//!
//! let mut ptc = Ptc::new();
//!
//! // Count external clock edges
//! ptc.write(Register::Ctrl.address(), (ControlFlags::EN | ControlFlags::ECLK).bits());
//! for _ in 0..3 {
//!     ptc.clock(true);
//!     ptc.clock(false);
//! }
//! assert_eq!(ptc.read(Register::Cntr.address()), 3);
//! ```

pub mod core;

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

//! Counter engine
//!
//! ```text
//!            EN set
//!   HELD  ----------->  COUNTING
//!         <-----------
//!            EN clear
//! ```
//!
//! `CNTRRST` is orthogonal to both states: while it is set the counter is
//! forced to zero on every evaluation, and a tick in the same evaluation is
//! dropped. Writing it also clears the counter at once (see [`CounterEngine::clear`]).

use super::control::ControlFlags;

/// Counter engine state, derived from `CTRL[EN]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterState {
    /// Not counting, value frozen
    Held,
    /// Advancing on every tick
    Counting,
}

impl CounterState {
    pub fn from_flags(flags: ControlFlags) -> Self {
        if flags.enabled() {
            CounterState::Counting
        } else {
            CounterState::Held
        }
    }
}

/// Free-running 32-bit counter
#[derive(Debug, Clone, Default)]
pub struct CounterEngine {
    value: u32,
}

impl CounterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Evaluate one evaluation point
    ///
    /// # Arguments
    ///
    /// * `flags` - Current control flags
    /// * `tick` - Whether the selected clock source produced a tick
    ///
    /// # Returns
    ///
    /// `true` if the counter advanced
    #[inline(always)]
    pub fn evaluate(&mut self, flags: ControlFlags, tick: bool) -> bool {
        if flags.counter_reset() {
            self.value = 0;
            return false;
        }

        if tick && CounterState::from_flags(flags) == CounterState::Counting {
            self.value = self.value.wrapping_add(1);
            return true;
        }

        false
    }

    /// Force the counter to zero outside an evaluation point
    pub(crate) fn clear(&mut self) {
        self.value = 0;
    }

    pub(crate) fn restore(&mut self, value: u32) {
        self.value = value;
    }
}

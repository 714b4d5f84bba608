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

//! Clock source selection
//!
//! The counter advances on ticks. With `ECLK` clear every native clock edge is
//! a tick; with `ECLK` set a tick is a rising edge of the external clock input,
//! found by comparing the level sampled on this native edge with the level
//! sampled on the previous one.

use super::control::ControlFlags;
use std::fmt;

/// Tick source selected by `CTRL[ECLK]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSource {
    /// Peripheral's own operating clock
    Native,
    /// Rising edges of the external clock input
    External,
}

impl ClockSource {
    pub fn from_flags(flags: ControlFlags) -> Self {
        if flags.external_clock() {
            ClockSource::External
        } else {
            ClockSource::Native
        }
    }
}

impl fmt::Display for ClockSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockSource::Native => f.write_str("native"),
            ClockSource::External => f.write_str("external"),
        }
    }
}

/// Rising-edge detector on a sampled level
///
/// A level that stays high across any number of samples produces exactly one
/// edge; a pulse shorter than the sampling period may be missed entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    last_level: bool,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the input level
    ///
    /// # Returns
    ///
    /// `true` if the level went low -> high since the previous sample
    #[inline(always)]
    pub fn sample(&mut self, level: bool) -> bool {
        let rising_edge = !self.last_level && level;
        self.last_level = level;
        rising_edge
    }

    /// Level seen on the most recent sample
    #[inline(always)]
    pub fn last_level(&self) -> bool {
        self.last_level
    }

    pub(crate) fn restore(&mut self, level: bool) {
        self.last_level = level;
    }
}

/// Produces one tick per active edge of the selected source
#[derive(Debug, Clone, Default)]
pub struct ClockSelector {
    external: EdgeDetector,
}

impl ClockSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate one native clock edge
    ///
    /// The external input is sampled whether or not it is selected, so a
    /// switch to `ECLK` never sees a stale previous level.
    ///
    /// # Arguments
    ///
    /// * `flags` - Current control flags
    /// * `ext_level` - External clock input level on this edge
    ///
    /// # Returns
    ///
    /// `true` if this evaluation is a tick
    #[inline(always)]
    pub fn evaluate(&mut self, flags: ControlFlags, ext_level: bool) -> bool {
        let ext_edge = self.external.sample(ext_level);

        match ClockSource::from_flags(flags) {
            ClockSource::Native => true,
            ClockSource::External => ext_edge,
        }
    }

    pub fn detector(&self) -> &EdgeDetector {
        &self.external
    }

    pub(crate) fn detector_mut(&mut self) -> &mut EdgeDetector {
        &mut self.external
    }
}

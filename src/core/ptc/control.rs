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

//! CTRL register bit layout
//!
//! ```text
//! 31-8: Reserved (read as 0)
//! 7:    CNTRRST - force counter to zero, overrides advance
//! 6-2:  Reserved (read as 0)
//! 1:    ECLK    - tick source: 0=native clock, 1=external clock edges
//! 0:    EN      - 1=counter advances on ticks, 0=held
//! ```

use bitflags::bitflags;

bitflags! {
    /// Control register (CTRL) flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ControlFlags: u32 {
        /// Counter enable (bit 0)
        const EN = 1 << 0;
        /// External clock select (bit 1)
        const ECLK = 1 << 1;
        /// Counter reset (bit 7)
        const CNTRRST = 1 << 7;
    }
}

impl ControlFlags {
    /// Decode a raw CTRL write
    ///
    /// Reserved bits are dropped, so they can never reach the counter logic
    /// and read back as zero.
    #[inline(always)]
    pub fn from_register(value: u32) -> Self {
        Self::from_bits_truncate(value)
    }

    #[inline(always)]
    pub fn enabled(self) -> bool {
        self.contains(Self::EN)
    }

    #[inline(always)]
    pub fn external_clock(self) -> bool {
        self.contains(Self::ECLK)
    }

    #[inline(always)]
    pub fn counter_reset(self) -> bool {
        self.contains(Self::CNTRRST)
    }
}

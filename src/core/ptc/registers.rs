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

//! PTC register map
//!
//! ```text
//! Index | Offset | Name | Access
//! ------|--------|------|-------
//! 0     | 0x00   | CNTR | R
//! 1     | 0x04   | HRC  | R/W
//! 2     | 0x08   | LRC  | R/W
//! 3     | 0x0C   | CTRL | R/W
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of mapped registers
pub const REGISTER_COUNT: usize = 4;

/// Addressable PTC register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Register {
    /// Counter (read-only)
    Cntr = 0,
    /// High reference
    Hrc = 1,
    /// Low reference
    Lrc = 2,
    /// Control
    Ctrl = 3,
}

impl Register {
    pub const ALL: [Register; REGISTER_COUNT] =
        [Register::Cntr, Register::Hrc, Register::Lrc, Register::Ctrl];

    /// Decode a word index
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Register::Cntr),
            1 => Some(Register::Hrc),
            2 => Some(Register::Lrc),
            3 => Some(Register::Ctrl),
            _ => None,
        }
    }

    /// Decode a byte address
    ///
    /// The low two bits are ignored. Addresses beyond the register file do
    /// not alias onto it.
    ///
    /// # Example
    ///
    /// ```
    /// use ptc::core::ptc::Register;
    ///
    /// assert_eq!(Register::from_address(0x0C), Some(Register::Ctrl));
    /// assert_eq!(Register::from_address(0x06), Some(Register::Hrc));
    /// assert_eq!(Register::from_address(0x10), None);
    /// ```
    #[inline(always)]
    pub fn from_address(address: u32) -> Option<Self> {
        Self::from_index(address >> 2)
    }

    #[inline(always)]
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Byte address of the register (`index * 4`)
    #[inline(always)]
    pub fn address(self) -> u32 {
        self.index() << 2
    }

    /// Whether the bus may write this register
    #[inline(always)]
    pub fn is_writable(self) -> bool {
        !matches!(self, Register::Cntr)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Register::Cntr => "CNTR",
            Register::Hrc => "HRC",
            Register::Lrc => "LRC",
            Register::Ctrl => "CTRL",
        };
        f.write_str(name)
    }
}

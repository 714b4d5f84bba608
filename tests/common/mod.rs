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

//! Register-level testbench helpers for integration tests

use ptc::core::ptc::{ControlFlags, Ptc, Register};

pub const EN: u32 = ControlFlags::EN.bits();
pub const ECLK: u32 = ControlFlags::ECLK.bits();
pub const CNTRRST: u32 = ControlFlags::CNTRRST.bits();

/// Drives a PTC through its bus the way a register-level testbench does
///
/// Every bus access first lets `access_cycles` native clock edges elapse,
/// modelling a serial register bus during which the counter keeps running.
pub struct Testbench {
    pub ptc: Ptc,
    pub access_cycles: u32,
}

#[allow(dead_code)]
impl Testbench {
    pub fn new(access_cycles: u32) -> Self {
        Self {
            ptc: Ptc::new(),
            access_cycles,
        }
    }

    pub fn wr(&mut self, address: u32, value: u32) {
        self.ptc.run(self.access_cycles, false);
        self.ptc.write(address, value);
    }

    pub fn rd(&mut self, address: u32) -> u32 {
        self.ptc.run(self.access_cycles, false);
        self.ptc.read(address)
    }

    pub fn setctrl(&mut self, value: u32) {
        self.wr(Register::Ctrl.address(), value);
    }

    pub fn sethrc(&mut self, value: u32) {
        self.wr(Register::Hrc.address(), value);
    }

    pub fn setlrc(&mut self, value: u32) {
        self.wr(Register::Lrc.address(), value);
    }

    pub fn getcntr(&mut self) -> u32 {
        self.rd(Register::Cntr.address())
    }

    /// Let native clock edges elapse with the external input low
    pub fn wait(&mut self, cycles: u32) {
        self.ptc.run(cycles, false);
    }

    /// Drive `count` external clock pulses of `high` + `low` native cycles
    pub fn ext_clock(&mut self, count: u32, high: u32, low: u32) {
        for _ in 0..count {
            self.ptc.run(high, true);
            self.ptc.run(low, false);
        }
    }
}

/// Assert a register holds the expected value
#[allow(dead_code)]
pub fn assert_register(ptc: &Ptc, reg: Register, expected: u32) {
    let actual = ptc.read(reg.address());
    assert_eq!(
        actual, expected,
        "{} mismatch: expected 0x{:08X}, got 0x{:08X}",
        reg, expected, actual
    );
}

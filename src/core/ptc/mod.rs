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

//! PTC Timer/Counter Implementation
//!
//! The PTC is a register-mapped periodic timer/counter. A free-running 32-bit
//! counter advances once per tick while enabled; ticks come either from the
//! native clock or from rising edges of an external clock input.
//!
//! ## Register Layout
//!
//! Four word registers at byte offsets `index * 4`:
//! - `0x00`: CNTR - counter value (R)
//! - `0x04`: HRC  - high reference (R/W)
//! - `0x08`: LRC  - low reference (R/W)
//! - `0x0C`: CTRL - control (R/W)
//!
//! ## Control Register Format
//!
//! ```text
//! 31-8: Reserved (read as 0)
//! 7:    CNTRRST - force counter to zero
//! 6-2:  Reserved (read as 0)
//! 1:    ECLK    - 0=native clock, 1=external clock edges
//! 0:    EN      - counter enable
//! ```
//!
//! ## Timing
//!
//! Bus writes land in the register file immediately. Their effect on CNTR
//! is applied at the next evaluation point, i.e. the next call to
//! [`Ptc::clock`], with one exception: a CTRL write with `CNTRRST` set
//! clears CNTR at the write and latches a reset that the next evaluation
//! consumes, even if `CNTRRST` was cleared again before it. A reset pulse
//! written between two evaluations is therefore never lost.
//! Reads never have side effects.

mod clock;
mod control;
mod counter;
mod registers;

pub use clock::{ClockSelector, ClockSource, EdgeDetector};
pub use control::ControlFlags;
pub use counter::{CounterEngine, CounterState};
pub use registers::{Register, REGISTER_COUNT};

use super::device::RegisterDevice;
use super::save_state::PtcState;

/// PTC peripheral
pub struct Ptc {
    /// Counter engine (CNTR)
    counter: CounterEngine,

    /// High reference (HRC)
    hrc: u32,

    /// Low reference (LRC)
    lrc: u32,

    /// Control register (CTRL)
    ctrl: ControlFlags,

    /// Tick source selector and external edge detector
    clock: ClockSelector,

    /// `CNTRRST` was written since the last evaluation
    reset_pending: bool,

    /// Native clock edges evaluated since peripheral reset
    cycles: u64,
}

impl Ptc {
    /// Create a new PTC in its reset state
    ///
    /// # Example
    ///
    /// ```
    /// use ptc::core::ptc::{Ptc, Register};
    ///
    /// let ptc = Ptc::new();
    /// assert_eq!(ptc.read(Register::Cntr.address()), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            counter: CounterEngine::new(),
            hrc: 0,
            lrc: 0,
            ctrl: ControlFlags::empty(),
            clock: ClockSelector::new(),
            reset_pending: false,
            cycles: 0,
        }
    }

    /// Whole-peripheral reset
    ///
    /// Distinct from `CTRL[CNTRRST]`: clears every register and the edge
    /// detector history.
    pub fn reset(&mut self) {
        *self = Self::new();
        log::debug!("PTC reset");
    }

    /// Read a register by byte address
    ///
    /// Unmapped addresses read as zero.
    pub fn read(&self, address: u32) -> u32 {
        match Register::from_address(address) {
            Some(reg) => self.read_reg(reg),
            None => {
                log::warn!("PTC read from unmapped address 0x{:02X}", address);
                0
            }
        }
    }

    /// Write a register by byte address
    ///
    /// Writes to unmapped addresses and to CNTR are dropped.
    pub fn write(&mut self, address: u32, value: u32) {
        match Register::from_address(address) {
            Some(reg) => self.write_reg(reg, value),
            None => {
                log::warn!(
                    "PTC write to unmapped address 0x{:02X} (value 0x{:08X}) ignored",
                    address,
                    value
                );
            }
        }
    }

    /// Read a register
    #[inline(always)]
    pub fn read_reg(&self, reg: Register) -> u32 {
        match reg {
            Register::Cntr => self.counter.value(),
            Register::Hrc => self.hrc,
            Register::Lrc => self.lrc,
            Register::Ctrl => self.ctrl.bits(),
        }
    }

    /// Write a register
    pub fn write_reg(&mut self, reg: Register, value: u32) {
        if !reg.is_writable() {
            log::debug!("PTC write to read-only {} (0x{:08X}) ignored", reg, value);
            return;
        }

        match reg {
            Register::Cntr => {}
            Register::Hrc => {
                self.hrc = value;
                log::trace!("PTC HRC = 0x{:08X}", value);
            }
            Register::Lrc => {
                self.lrc = value;
                log::trace!("PTC LRC = 0x{:08X}", value);
            }
            Register::Ctrl => self.write_control(value),
        }
    }

    fn write_control(&mut self, value: u32) {
        let flags = ControlFlags::from_register(value);
        if flags != self.ctrl {
            log::debug!(
                "PTC CTRL: {:?} source={} reset={}",
                CounterState::from_flags(flags),
                ClockSource::from_flags(flags),
                flags.counter_reset()
            );
        }
        if flags.counter_reset() {
            self.counter.clear();
            self.reset_pending = true;
        }
        self.ctrl = flags;
    }

    /// Evaluate one native clock rising edge
    ///
    /// Samples the external clock input, derives the tick from the selected
    /// source and runs the counter engine. The whole step is atomic.
    ///
    /// # Arguments
    ///
    /// * `ext_level` - External clock input level on this edge
    ///
    /// # Returns
    ///
    /// `true` if the counter advanced
    ///
    /// # Example
    ///
    /// ```
    /// use ptc::core::ptc::{ControlFlags, Ptc, Register};
    ///
    /// let mut ptc = Ptc::new();
    /// ptc.write_reg(Register::Ctrl, ControlFlags::EN.bits());
    /// ptc.run(10, false);
    /// assert_eq!(ptc.counter(), 10);
    /// ```
    #[inline]
    pub fn clock(&mut self, ext_level: bool) -> bool {
        let mut flags = self.ctrl;
        if self.reset_pending {
            flags |= ControlFlags::CNTRRST;
            self.reset_pending = false;
        }

        let tick = self.clock.evaluate(flags, ext_level);
        let advanced = self.counter.evaluate(flags, tick);
        self.cycles = self.cycles.wrapping_add(1);

        if advanced && self.counter.value() == 0 {
            log::trace!("PTC CNTR wrapped at cycle {}", self.cycles);
        }
        advanced
    }

    /// Evaluate `cycles` native clock edges with a constant external level
    ///
    /// # Returns
    ///
    /// Number of times the counter advanced
    pub fn run(&mut self, cycles: u32, ext_level: bool) -> u32 {
        let mut ticks = 0;
        for _ in 0..cycles {
            if self.clock(ext_level) {
                ticks += 1;
            }
        }
        ticks
    }

    #[inline(always)]
    pub fn counter(&self) -> u32 {
        self.counter.value()
    }

    #[inline(always)]
    pub fn high_reference(&self) -> u32 {
        self.hrc
    }

    #[inline(always)]
    pub fn low_reference(&self) -> u32 {
        self.lrc
    }

    #[inline(always)]
    pub fn control(&self) -> ControlFlags {
        self.ctrl
    }

    pub fn counter_state(&self) -> CounterState {
        CounterState::from_flags(self.ctrl)
    }

    pub fn clock_source(&self) -> ClockSource {
        ClockSource::from_flags(self.ctrl)
    }

    /// Native clock edges evaluated since peripheral reset
    #[inline(always)]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Capture the complete peripheral state
    pub fn snapshot(&self) -> PtcState {
        PtcState {
            cntr: self.counter.value(),
            hrc: self.hrc,
            lrc: self.lrc,
            ctrl: self.ctrl.bits(),
            ext_level: self.clock.detector().last_level(),
            reset_pending: self.reset_pending,
            cycles: self.cycles,
        }
    }

    /// Restore a state captured by [`Ptc::snapshot`]
    pub fn restore(&mut self, state: &PtcState) {
        self.counter.restore(state.cntr);
        self.hrc = state.hrc;
        self.lrc = state.lrc;
        self.ctrl = ControlFlags::from_register(state.ctrl);
        self.clock.detector_mut().restore(state.ext_level);
        self.reset_pending = state.reset_pending;
        self.cycles = state.cycles;
        log::debug!("PTC state restored at cycle {}", state.cycles);
    }
}

impl Default for Ptc {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterDevice for Ptc {
    fn read_register(&self, offset: u32) -> u32 {
        self.read(offset)
    }

    fn write_register(&mut self, offset: u32, value: u32) {
        self.write(offset, value);
    }

    fn name(&self) -> &str {
        "PTC"
    }
}

#[cfg(test)]
mod tests;

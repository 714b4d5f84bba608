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

//! Control register tests (enable gating, counter reset, reserved bits)

use super::super::*;

const EN: u32 = ControlFlags::EN.bits();
const ECLK: u32 = ControlFlags::ECLK.bits();
const CNTRRST: u32 = ControlFlags::CNTRRST.bits();

#[test]
fn test_enable_gating() {
    let mut ptc = Ptc::new();

    assert_eq!(ptc.run(1000, false), 0);
    assert_eq!(ptc.counter(), 0);

    ptc.write_reg(Register::Ctrl, EN);
    ptc.run(25, false);

    ptc.write_reg(Register::Ctrl, 0);
    assert_eq!(ptc.counter_state(), CounterState::Held);
    ptc.run(1000, false);
    assert_eq!(ptc.counter(), 25);
}

#[test]
fn test_enable_resumes_from_stored_value() {
    let mut ptc = Ptc::new();
    ptc.write_reg(Register::Ctrl, EN);
    ptc.run(10, false);
    ptc.write_reg(Register::Ctrl, 0);
    ptc.run(10, false);

    ptc.write_reg(Register::Ctrl, EN);
    assert_eq!(ptc.counter_state(), CounterState::Counting);
    ptc.run(5, false);
    assert_eq!(ptc.counter(), 15);
}

#[test]
fn test_counter_reset_then_disable() {
    let mut ptc = Ptc::new();
    ptc.write_reg(Register::Ctrl, EN);
    ptc.run(500, false);

    ptc.write_reg(Register::Ctrl, CNTRRST);
    ptc.clock(false);
    ptc.write_reg(Register::Ctrl, 0);
    ptc.run(10, false);

    assert_eq!(ptc.read(Register::Cntr.address()), 0);
}

#[test]
fn test_counter_reset_pulse_between_evaluations() {
    let mut ptc = Ptc::new();
    ptc.write_reg(Register::Ctrl, EN);
    ptc.run(500, false);

    // Set and cleared with no clock in between: the reset still lands
    ptc.write_reg(Register::Ctrl, CNTRRST);
    ptc.write_reg(Register::Ctrl, 0);
    assert_eq!(ptc.read_reg(Register::Ctrl), 0);
    assert_eq!(ptc.read(Register::Cntr.address()), 0);

    ptc.run(3, false);
    assert_eq!(ptc.read(Register::Cntr.address()), 0);
}

#[test]
fn test_counter_reset_pulse_then_enable() {
    let mut ptc = Ptc::new();
    ptc.write_reg(Register::Ctrl, EN);
    ptc.run(40, false);

    ptc.write_reg(Register::Ctrl, CNTRRST);
    ptc.write_reg(Register::Ctrl, EN);

    // First evaluation consumes the reset, the rest count
    assert!(!ptc.clock(false));
    assert_eq!(ptc.counter(), 0);
    ptc.run(5, false);
    assert_eq!(ptc.counter(), 5);
}

#[test]
fn test_counter_reset_consumed_once() {
    let mut ptc = Ptc::new();
    ptc.write_reg(Register::Ctrl, EN | CNTRRST);
    ptc.write_reg(Register::Ctrl, EN);
    ptc.run(20, false);

    assert_eq!(ptc.counter(), 19);
}

#[test]
fn test_counter_reset_applies_at_write() {
    let mut ptc = Ptc::new();
    ptc.write_reg(Register::Ctrl, EN);
    ptc.run(8, false);

    ptc.write_reg(Register::Ctrl, CNTRRST);
    assert_eq!(ptc.counter(), 0);
    assert!(ptc.snapshot().reset_pending);

    ptc.clock(false);
    assert_eq!(ptc.counter(), 0);
    assert!(!ptc.snapshot().reset_pending);
}

#[test]
fn test_counter_reset_applies_while_held() {
    let mut ptc = Ptc::new();
    ptc.write_reg(Register::Ctrl, EN);
    ptc.run(8, false);

    ptc.write_reg(Register::Ctrl, CNTRRST);
    assert_eq!(ptc.counter_state(), CounterState::Held);
    ptc.clock(false);
    assert_eq!(ptc.counter(), 0);
}

#[test]
fn test_reset_takes_precedence_over_enable() {
    let mut ptc = Ptc::new();
    ptc.write_reg(Register::Ctrl, EN);
    ptc.run(8, false);

    ptc.write_reg(Register::Ctrl, EN | CNTRRST);
    assert_eq!(ptc.run(100, false), 0);
    assert_eq!(ptc.counter(), 0);

    ptc.write_reg(Register::Ctrl, EN | ECLK | CNTRRST);
    for i in 0..100 {
        ptc.clock(i % 2 == 0);
    }
    assert_eq!(ptc.counter(), 0);
}

#[test]
fn test_counting_restarts_from_zero_after_reset() {
    let mut ptc = Ptc::new();
    ptc.write_reg(Register::Ctrl, EN);
    ptc.run(77, false);

    ptc.write_reg(Register::Ctrl, EN | CNTRRST);
    ptc.clock(false);
    ptc.write_reg(Register::Ctrl, EN);
    ptc.run(4, false);

    assert_eq!(ptc.counter(), 4);
}

#[test]
fn test_reserved_bits_read_as_zero() {
    let mut ptc = Ptc::new();

    ptc.write_reg(Register::Ctrl, 0xFFFF_FF7C);
    assert_eq!(ptc.read_reg(Register::Ctrl), 0);

    ptc.write_reg(Register::Ctrl, 0xFFFF_FFFF);
    assert_eq!(ptc.read_reg(Register::Ctrl), EN | ECLK | CNTRRST);
}

#[test]
fn test_reserved_bits_do_not_affect_counting() {
    let mut plain = Ptc::new();
    let mut noisy = Ptc::new();
    plain.write_reg(Register::Ctrl, EN);
    noisy.write_reg(Register::Ctrl, EN | 0xFFFF_FF7C);

    plain.run(50, false);
    noisy.run(50, false);
    assert_eq!(plain.counter(), noisy.counter());
}

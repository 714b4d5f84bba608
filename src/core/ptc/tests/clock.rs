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

//! Clock source tests (edge detection, external clock counting)

use super::super::*;

const EN: u32 = ControlFlags::EN.bits();
const ECLK: u32 = ControlFlags::ECLK.bits();
const CNTRRST: u32 = ControlFlags::CNTRRST.bits();

/// Drive `count` external pulses, each `high` native cycles high and `low` low
fn pulses(ptc: &mut Ptc, count: u32, high: u32, low: u32) {
    for _ in 0..count {
        ptc.run(high, true);
        ptc.run(low, false);
    }
}

#[test]
fn test_edge_detector_rising_only() {
    let mut det = EdgeDetector::new();

    assert!(!det.sample(false));
    assert!(det.sample(true));
    assert!(!det.sample(true));
    assert!(!det.sample(true));
    assert!(!det.sample(false));
    assert!(!det.sample(false));
    assert!(det.sample(true));
    assert!(det.last_level());
}

#[test]
fn test_edge_detector_initial_high_is_edge() {
    let mut det = EdgeDetector::new();
    assert!(det.sample(true));
}

#[test]
fn test_selector_native_ticks_every_cycle() {
    let mut sel = ClockSelector::new();
    let flags = ControlFlags::EN;

    assert!(sel.evaluate(flags, false));
    assert!(sel.evaluate(flags, true));
    assert!(sel.evaluate(flags, true));
}

#[test]
fn test_selector_tracks_input_while_native() {
    let mut sel = ClockSelector::new();

    // Input rises while native is selected
    sel.evaluate(ControlFlags::EN, true);
    assert!(sel.detector().last_level());

    // Switching to external must not see that old rise as a new edge
    assert!(!sel.evaluate(ControlFlags::EN | ControlFlags::ECLK, true));
    assert!(!sel.evaluate(ControlFlags::EN | ControlFlags::ECLK, false));
    assert!(sel.evaluate(ControlFlags::EN | ControlFlags::ECLK, true));
}

#[test]
fn test_external_clock_exact_count() {
    let mut ptc = Ptc::new();
    ptc.write_reg(Register::Ctrl, CNTRRST);
    ptc.clock(false);
    ptc.write_reg(Register::Ctrl, EN | ECLK);
    assert_eq!(ptc.clock_source(), ClockSource::External);

    pulses(&mut ptc, 1489, 1, 1);
    assert_eq!(ptc.counter(), 1489);
}

#[test]
fn test_wide_pulses_count_once() {
    let mut ptc = Ptc::new();
    ptc.write_reg(Register::Ctrl, EN | ECLK);

    pulses(&mut ptc, 100, 7, 3);
    assert_eq!(ptc.counter(), 100);
    assert_eq!(ptc.cycles(), 1000);
}

#[test]
fn test_held_external_level_is_one_edge() {
    let mut ptc = Ptc::new();
    ptc.write_reg(Register::Ctrl, EN | ECLK);

    ptc.run(500, true);
    assert_eq!(ptc.counter(), 1);

    ptc.run(500, false);
    assert_eq!(ptc.counter(), 1);
}

#[test]
fn test_external_edges_ignored_when_disabled() {
    let mut ptc = Ptc::new();
    ptc.write_reg(Register::Ctrl, ECLK);

    pulses(&mut ptc, 50, 1, 1);
    assert_eq!(ptc.counter(), 0);
}

#[test]
fn test_switch_native_to_external() {
    let mut ptc = Ptc::new();
    ptc.write_reg(Register::Ctrl, EN);
    ptc.run(10, true);
    assert_eq!(ptc.counter(), 10);

    // Input already high: no edge owed for the switch
    ptc.write_reg(Register::Ctrl, EN | ECLK);
    ptc.run(10, true);
    assert_eq!(ptc.counter(), 10);

    pulses(&mut ptc, 5, 2, 2);
    // Input is already high when the first pulse begins, so it adds no edge
    assert_eq!(ptc.counter(), 14);
}

#[test]
fn test_switch_external_to_native() {
    let mut ptc = Ptc::new();
    ptc.write_reg(Register::Ctrl, EN | ECLK);
    pulses(&mut ptc, 3, 1, 1);
    assert_eq!(ptc.counter(), 3);

    ptc.write_reg(Register::Ctrl, EN);
    assert_eq!(ptc.clock_source(), ClockSource::Native);
    ptc.run(7, false);
    assert_eq!(ptc.counter(), 10);
}

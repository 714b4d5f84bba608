// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Register Device Trait
//!
//! This module defines a trait-based abstraction for word-addressed register
//! devices. A device only implements 32-bit register access; 16-bit and 8-bit
//! access are derived from it by lane extraction and read-modify-write.
//!
//! # Address Translation
//!
//! Offsets passed to the trait are byte offsets from the device base. The
//! register index of a word access is `offset >> 2`:
//!
//! ```text
//! offset 0x00 -> register 0
//! offset 0x04 -> register 1
//! offset 0x0C -> register 3
//! ```
//!
//! # Example
//!
//! ```
//! use ptc::core::device::RegisterDevice;
//!
//! struct Scratch {
//!     registers: [u32; 4],
//! }
//!
//! impl RegisterDevice for Scratch {
//!     fn read_register(&self, offset: u32) -> u32 {
//!         let index = (offset >> 2) as usize;
//!         self.registers.get(index).copied().unwrap_or(0)
//!     }
//!
//!     fn write_register(&mut self, offset: u32, value: u32) {
//!         let index = (offset >> 2) as usize;
//!         if let Some(reg) = self.registers.get_mut(index) {
//!             *reg = value;
//!         }
//!     }
//! }
//!
//! let mut dev = Scratch { registers: [0; 4] };
//! dev.write_register8(0x05, 0xAB);
//! assert_eq!(dev.read_register(0x04), 0x0000_AB00);
//! ```

/// Trait for word-addressed register devices
///
/// Register access never fails: a device decides for itself what an
/// unmapped offset reads as and whether a write to it is dropped.
pub trait RegisterDevice {
    /// Read a 32-bit value from a device register
    ///
    /// The low two offset bits are ignored.
    fn read_register(&self, offset: u32) -> u32;

    /// Write a 32-bit value to a device register
    ///
    /// The low two offset bits are ignored.
    fn write_register(&mut self, offset: u32, value: u32);

    /// Read a 16-bit value from a device register
    ///
    /// Default implementation reads the containing word and extracts the
    /// addressed half.
    fn read_register16(&self, offset: u32) -> u16 {
        let value = self.read_register(offset & !0x03);
        let shift = (offset & 0x02) * 8;
        ((value >> shift) & 0xFFFF) as u16
    }

    /// Write a 16-bit value to a device register
    ///
    /// Default implementation performs read-modify-write on the aligned word,
    /// updating only the targeted half.
    fn write_register16(&mut self, offset: u32, value: u16) {
        let aligned = offset & !0x03;
        let shift = (offset & 0x02) * 8;
        let mask = !(0xFFFFu32 << shift);
        let current = self.read_register(aligned);
        self.write_register(aligned, (current & mask) | ((value as u32) << shift));
    }

    /// Read an 8-bit value from a device register
    fn read_register8(&self, offset: u32) -> u8 {
        let value = self.read_register(offset & !0x03);
        let shift = (offset & 0x03) * 8;
        ((value >> shift) & 0xFF) as u8
    }

    /// Write an 8-bit value to a device register
    ///
    /// Default implementation performs read-modify-write on the aligned word,
    /// updating only the targeted byte.
    fn write_register8(&mut self, offset: u32, value: u8) {
        let aligned = offset & !0x03;
        let shift = (offset & 0x03) * 8;
        let mask = !(0xFFu32 << shift);
        let current = self.read_register(aligned);
        self.write_register(aligned, (current & mask) | ((value as u32) << shift));
    }

    /// Device name for logging
    fn name(&self) -> &str {
        "Unknown Device"
    }
}

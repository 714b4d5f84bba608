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

//! PTC test modules
//!
//! - `basic`: initialization, peripheral reset, native-clock counting
//! - `bus`: register decode, read-only CNTR, unmapped addresses, sub-word access
//! - `control`: enable gating, counter reset precedence, reserved bits
//! - `clock`: edge detection and external clock source
//! - `properties`: proptest properties over arbitrary values and control words

mod clock;
mod control;

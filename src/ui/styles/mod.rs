// SPDX-License-Identifier: MPL-2.0
//! Styles for the button strip.

pub mod button;
pub mod tooltip;

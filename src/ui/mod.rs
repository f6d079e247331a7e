// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down, messages up" pattern.
//!
//! - [`button_strip`] - Row of action buttons overlaid on the viewer
//! - [`styles`] - Button and tooltip styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod button_strip;
pub mod design_tokens;
pub mod styles;

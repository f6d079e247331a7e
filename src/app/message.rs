// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo viewer.

use crate::buttons::ButtonsStrategy;
use crate::ui::button_strip;
use iced::keyboard::{Key, Modifiers};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Strip(button_strip::Message),
    /// Key press not captured by a focused widget.
    KeyPressed { key: Key, modifiers: Modifiers },
}

/// Runtime flags passed from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional language override (e.g. "fr").
    pub lang: Option<String>,
    /// Optional strategy override (`--strategy full`).
    pub strategy: Option<ButtonsStrategy>,
    /// External URL attached to the demo images, enabling the navigate button.
    pub ext_url: Option<String>,
}

// SPDX-License-Identifier: MPL-2.0
//! Classification of raw input into button activations.
//!
//! The dispatcher asks an [`InteractionClassifier`] whether an input should
//! activate a button. [`AccessibleClassifier`] accepts what a keyboard or
//! mouse user expects to press a button: a primary click, Enter or Space.

use super::is_space;
use iced::keyboard::{key::Named, Key};
use iced::mouse;

/// Raw interaction on a button.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Mouse(mouse::Button),
    Keyboard(Key),
}

/// Verdict of a classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Suppress,
}

pub trait InteractionClassifier {
    fn classify(&self, event: &InputEvent) -> Decision;
}

/// Accepts a primary click, Enter and Space. Everything else, Tab included,
/// is suppressed.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessibleClassifier;

impl InteractionClassifier for AccessibleClassifier {
    fn classify(&self, event: &InputEvent) -> Decision {
        let activates = match event {
            InputEvent::Mouse(button) => *button == mouse::Button::Left,
            InputEvent::Keyboard(key) => *key == Key::Named(Named::Enter) || is_space(key),
        };
        if activates {
            Decision::Proceed
        } else {
            Decision::Suppress
        }
    }
}

impl<F> InteractionClassifier for F
where
    F: Fn(&InputEvent) -> Decision,
{
    fn classify(&self, event: &InputEvent) -> Decision {
        self(event)
    }
}

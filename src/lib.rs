// SPDX-License-Identifier: MPL-2.0
//! `lens_buttons` provides the action-button strip of a media viewer built
//! with the Iced GUI framework.
//!
//! A declarative [`buttons::ButtonsConfig`] is resolved once into an ordered
//! list of buttons, and pointer or keyboard interaction on those buttons is
//! routed to one of six typed output channels ([`buttons::Event`]).
//!
//! ```
//! use lens_buttons::buttons::{resolve, Action, ButtonsConfig, ButtonsStrategy, Dispatcher, Event, InputEvent};
//!
//! let resolved = resolve(Some(&ButtonsConfig::with_strategy(ButtonsStrategy::Advanced))).unwrap();
//! let click = InputEvent::Mouse(iced::mouse::Button::Left);
//! let event = Dispatcher::default()
//!     .dispatch(&resolved.buttons[1], 1, Some(&click), None, Action::Click)
//!     .unwrap();
//! assert!(matches!(event, Some(Event::Download(_))));
//! ```

pub mod app;
pub mod buttons;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;

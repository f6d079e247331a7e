// SPDX-License-Identifier: MPL-2.0
//! Button model shared by the resolver, the dispatcher and the strip widget.
//!
//! A [`ButtonsConfig`] is what the user writes (all fields optional). The
//! [`resolver`] turns it into an ordered, id-stamped list of
//! [`ButtonDescriptor`]s once per activation, and the [`dispatch`] module
//! turns interactions on those buttons into [`dispatch::Event`]s.

pub mod classifier;
pub mod defaults;
pub mod dispatch;
pub mod resolver;

pub use classifier::{AccessibleClassifier, Decision, InputEvent, InteractionClassifier};
pub use dispatch::{Dispatcher, Event};
pub use resolver::{resolve, ResolvedButtons};

use crate::error::Error;
use iced::keyboard::{key::Named, Key};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ButtonType
// =============================================================================

/// Kind of a button, which decides the output channel it feeds.
///
/// Values read from settings that match none of the known kinds are kept as
/// [`ButtonType::Other`] so that resolution can reject them with a readable
/// message instead of failing inside the TOML parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ButtonType {
    Close,
    Download,
    ExtUrl,
    Refresh,
    Delete,
    Custom,
    Other(String),
}

impl ButtonType {
    /// Whether this kind may appear in a `custom` strategy list.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(
            self,
            ButtonType::Close
                | ButtonType::Download
                | ButtonType::ExtUrl
                | ButtonType::Refresh
                | ButtonType::Delete
                | ButtonType::Custom
        )
    }

    /// Settings name of this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ButtonType::Close => "close",
            ButtonType::Download => "download",
            ButtonType::ExtUrl => "ext-url",
            ButtonType::Refresh => "refresh",
            ButtonType::Delete => "delete",
            ButtonType::Custom => "custom",
            ButtonType::Other(raw) => raw,
        }
    }
}

impl From<String> for ButtonType {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().replace('_', "-").as_str() {
            "close" => ButtonType::Close,
            "download" => ButtonType::Download,
            "ext-url" | "exturl" => ButtonType::ExtUrl,
            "refresh" => ButtonType::Refresh,
            "delete" => ButtonType::Delete,
            "custom" => ButtonType::Custom,
            _ => ButtonType::Other(raw),
        }
    }
}

impl From<ButtonType> for String {
    fn from(kind: ButtonType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ButtonSize / ButtonDescriptor
// =============================================================================

/// CSS-like size pair. Values are either `auto` or a pixel length (`30px`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSize {
    #[serde(default = "default_height")]
    pub height: String,
    #[serde(default = "default_width")]
    pub width: String,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self {
            height: default_height(),
            width: default_width(),
        }
    }
}

fn default_height() -> String {
    defaults::BUTTON_HEIGHT.to_string()
}

fn default_width() -> String {
    defaults::BUTTON_WIDTH.to_string()
}

/// One button of the strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonDescriptor {
    #[serde(rename = "type")]
    pub kind: ButtonType,
    /// Display hook, also used to pick the button glyph for custom buttons.
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub size: ButtonSize,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub aria_label: String,
    /// Position in the resolved list. Assigned by the resolver; any value
    /// present in settings is overwritten.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<usize>,
}

impl ButtonDescriptor {
    /// Creates a descriptor of the given kind with empty texts and default size.
    #[must_use]
    pub fn new(kind: ButtonType) -> Self {
        Self {
            kind,
            class_name: String::new(),
            size: ButtonSize::default(),
            title: String::new(),
            aria_label: String::new(),
            id: None,
        }
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = aria_label.into();
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }
}

// =============================================================================
// Strategy / Config
// =============================================================================

/// Which button set to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ButtonsStrategy {
    #[default]
    Default,
    Simple,
    Advanced,
    Full,
    Custom,
}

impl ButtonsStrategy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonsStrategy::Default => "default",
            ButtonsStrategy::Simple => "simple",
            ButtonsStrategy::Advanced => "advanced",
            ButtonsStrategy::Full => "full",
            ButtonsStrategy::Custom => "custom",
        }
    }
}

impl std::str::FromStr for ButtonsStrategy {
    type Err = Error;

    /// Case-insensitive strategy name.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "default" => Ok(ButtonsStrategy::Default),
            "simple" => Ok(ButtonsStrategy::Simple),
            "advanced" => Ok(ButtonsStrategy::Advanced),
            "full" => Ok(ButtonsStrategy::Full),
            "custom" => Ok(ButtonsStrategy::Custom),
            _ => Err(Error::Config(format!(
                "unknown buttons strategy `{}`; expected default, simple, advanced, full or custom",
                raw.trim()
            ))),
        }
    }
}

impl From<String> for ButtonsStrategy {
    /// Lenient form used when reading settings: unrecognized names become
    /// `Default`.
    fn from(raw: String) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl From<ButtonsStrategy> for String {
    fn from(strategy: ButtonsStrategy) -> Self {
        strategy.as_str().to_string()
    }
}

/// User-facing buttons configuration. Every field is optional; missing ones
/// take their default during resolution.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ButtonsConfig {
    /// Whether the strip is shown (default: true).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    /// Button set to use (default: `default`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<ButtonsStrategy>,

    /// Buttons for the `custom` strategy. Ignored by the other strategies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<ButtonDescriptor>>,
}

impl ButtonsConfig {
    /// Shorthand for a config that only picks a strategy.
    #[must_use]
    pub fn with_strategy(strategy: ButtonsStrategy) -> Self {
        Self {
            strategy: Some(strategy),
            ..Self::default()
        }
    }

    /// Shorthand for a `custom` strategy config.
    #[must_use]
    pub fn custom(buttons: Vec<ButtonDescriptor>) -> Self {
        Self {
            visible: None,
            strategy: Some(ButtonsStrategy::Custom),
            buttons: Some(buttons),
        }
    }
}

// =============================================================================
// Outbound payload
// =============================================================================

/// How a button was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Click,
    KeyboardEnter,
    KeyboardSpace,
}

impl Action {
    /// Derives the action from the input that triggered it. Anything that is
    /// not Enter or Space counts as a click.
    #[must_use]
    pub fn from_input(event: &InputEvent) -> Self {
        match event {
            InputEvent::Keyboard(Key::Named(Named::Enter)) => Action::KeyboardEnter,
            InputEvent::Keyboard(key) if is_space(key) => Action::KeyboardSpace,
            _ => Action::Click,
        }
    }
}

pub(crate) fn is_space(key: &Key) -> bool {
    match key {
        Key::Named(Named::Space) => true,
        Key::Character(c) => c.as_str() == " ",
        _ => false,
    }
}

/// Image currently displayed by the viewer, as far as the strip cares.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageRef {
    pub id: usize,
    pub ext_url: Option<String>,
}

impl ImageRef {
    #[must_use]
    pub fn new(id: usize) -> Self {
        Self { id, ext_url: None }
    }

    #[must_use]
    pub fn with_ext_url(mut self, url: impl Into<String>) -> Self {
        self.ext_url = Some(url.into());
        self
    }

    /// External URL to navigate to, if one is set and non-blank.
    #[must_use]
    pub fn navigable_url(&self) -> Option<&str> {
        self.ext_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Payload carried by every output channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonEvent {
    pub button_index: usize,
    pub button: ButtonDescriptor,
    /// Always `None` when emitted by the dispatcher; the parent fills it in
    /// with [`ButtonEvent::with_image`] before handling the event.
    pub image: Option<ImageRef>,
    pub action: Action,
}

impl ButtonEvent {
    #[must_use]
    pub fn with_image(mut self, image: Option<ImageRef>) -> Self {
        self.image = image;
        self
    }
}

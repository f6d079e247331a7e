// SPDX-License-Identifier: MPL-2.0
//! Row of action buttons overlaid on the viewer.
//!
//! The strip resolves its configuration once, when it is created, and keeps
//! the result for its whole lifetime. Interactions come in as [`Message`]s and
//! leave as at most one [`Event`] per message, which the parent handles the
//! same way it handles navbar events.

use crate::buttons::{
    defaults, resolve, Action, ButtonDescriptor, ButtonType, ButtonsConfig, ButtonsStrategy,
    Dispatcher, Event, ImageRef, InputEvent, InteractionClassifier, ResolvedButtons,
};
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::keyboard::Key;
use iced::widget::{button, Row, Text};
use iced::{alignment::Vertical, mouse, Element, Length};

/// Messages handled by the strip.
#[derive(Debug, Clone)]
pub enum Message {
    /// Primary click on the button at this index.
    Pressed(usize),
    /// Any raw input aimed at the button at this index.
    Input { index: usize, event: InputEvent },
    /// Key press aimed at the focused button.
    KeyPressed(Key),
    FocusNext,
    FocusPrevious,
    ClearFocus,
}

#[derive(Debug)]
pub struct ButtonStrip {
    resolved: ResolvedButtons,
    current_image: Option<ImageRef>,
    focused: Option<usize>,
    dispatcher: Dispatcher,
}

impl ButtonStrip {
    /// Resolves `config` and localizes the built-in button texts.
    ///
    /// # Errors
    ///
    /// Returns the configuration error raised by [`resolve`].
    pub fn new(config: Option<&ButtonsConfig>, i18n: &I18n) -> Result<Self> {
        Self::with_dispatcher(config, i18n, Dispatcher::default())
    }

    /// Same as [`ButtonStrip::new`] with a custom interaction classifier.
    ///
    /// # Errors
    ///
    /// Returns the configuration error raised by [`resolve`].
    pub fn with_classifier(
        config: Option<&ButtonsConfig>,
        i18n: &I18n,
        classifier: impl InteractionClassifier + 'static,
    ) -> Result<Self> {
        Self::with_dispatcher(config, i18n, Dispatcher::new(classifier))
    }

    fn with_dispatcher(
        config: Option<&ButtonsConfig>,
        i18n: &I18n,
        dispatcher: Dispatcher,
    ) -> Result<Self> {
        let resolved = resolve(config)?;
        Ok(Self::from_resolved(resolved, i18n, dispatcher))
    }

    /// Strip with the `default` strategy, for when the configured one is
    /// rejected.
    pub fn fallback(i18n: &I18n) -> Self {
        Self::from_resolved(ResolvedButtons::default(), i18n, Dispatcher::default())
    }

    fn from_resolved(mut resolved: ResolvedButtons, i18n: &I18n, dispatcher: Dispatcher) -> Self {
        localize(&mut resolved.buttons, i18n);
        tracing::debug!(
            strategy = resolved.strategy.as_str(),
            count = resolved.buttons.len(),
            visible = resolved.visible,
            "button strip resolved"
        );
        Self {
            resolved,
            current_image: None,
            focused: None,
            dispatcher,
        }
    }

    pub fn buttons(&self) -> &[ButtonDescriptor] {
        &self.resolved.buttons
    }

    pub fn is_visible(&self) -> bool {
        self.resolved.visible
    }

    pub fn strategy(&self) -> ButtonsStrategy {
        self.resolved.strategy
    }

    pub fn current_image(&self) -> Option<&ImageRef> {
        self.current_image.as_ref()
    }

    /// Replaces the image the `ext-url` button checks before navigating.
    pub fn set_current_image(&mut self, image: Option<ImageRef>) {
        self.current_image = image;
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Processes a message and returns the event to propagate, if any.
    ///
    /// A hidden strip ignores every message: it cannot take focus and none of
    /// its buttons can be activated.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::UnknownButtonType`] if the targeted
    /// descriptor has an unknown type.
    pub fn update(&mut self, message: Message) -> Result<Option<Event>> {
        if !self.resolved.visible {
            tracing::debug!(?message, "button strip hidden, message ignored");
            return Ok(None);
        }
        match message {
            Message::Pressed(index) => {
                self.interact(index, InputEvent::Mouse(mouse::Button::Left))
            }
            Message::Input { index, event } => self.interact(index, event),
            Message::KeyPressed(key) => match self.focused {
                Some(index) => self.interact(index, InputEvent::Keyboard(key)),
                None => Ok(None),
            },
            Message::FocusNext => {
                self.focused = step_focus(self.focused, self.buttons().len(), true);
                Ok(None)
            }
            Message::FocusPrevious => {
                self.focused = step_focus(self.focused, self.buttons().len(), false);
                Ok(None)
            }
            Message::ClearFocus => {
                self.focused = None;
                Ok(None)
            }
        }
    }

    fn interact(&self, index: usize, event: InputEvent) -> Result<Option<Event>> {
        let Some(button) = self.resolved.buttons.get(index) else {
            tracing::debug!(index, "interaction on a button outside the strip");
            return Ok(None);
        };
        let action = Action::from_input(&event);
        self.dispatcher.dispatch(
            button,
            index,
            Some(&event),
            self.current_image.as_ref(),
            action,
        )
    }

    /// Render the strip. Hidden strips render as an empty row.
    pub fn view(&self) -> Element<'_, Message> {
        let mut row = Row::new().spacing(spacing::XXS).align_y(Vertical::Center);
        if !self.resolved.visible {
            return row.into();
        }

        for (index, descriptor) in self.resolved.buttons.iter().enumerate() {
            let label = Text::new(glyph(descriptor))
                .size(typography::GLYPH)
                .center();
            let control = button(label)
                .on_press(Message::Pressed(index))
                .padding(spacing::XXS)
                .width(parse_length(&descriptor.size.width))
                .height(match parse_length(&descriptor.size.height) {
                    Length::Shrink => Length::Fixed(sizing::BUTTON_HEIGHT),
                    other => other,
                })
                .style(styles::button::strip(self.focused == Some(index)));

            let tip = if descriptor.title.is_empty() {
                &descriptor.aria_label
            } else {
                &descriptor.title
            };
            row = if tip.is_empty() {
                row.push(control)
            } else {
                row.push(styles::tooltip::styled(
                    control,
                    tip.clone(),
                    styles::tooltip::Position::Bottom,
                ))
            };
        }

        row.into()
    }
}

fn step_focus(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
    })
}

fn title_key(kind: &ButtonType) -> Option<&'static str> {
    match kind {
        ButtonType::Close => Some("button-close-title"),
        ButtonType::Download => Some("button-download-title"),
        ButtonType::ExtUrl => Some("button-ext-url-title"),
        ButtonType::Refresh => Some("button-refresh-title"),
        ButtonType::Delete => Some("button-delete-title"),
        ButtonType::Custom | ButtonType::Other(_) => None,
    }
}

/// Swaps the English default texts of built-in buttons for translated ones.
/// Texts set by the user are left alone.
fn localize(buttons: &mut [ButtonDescriptor], i18n: &I18n) {
    for button in buttons {
        let (Some(default), Some(key)) = (defaults::title_for(&button.kind), title_key(&button.kind))
        else {
            continue;
        };
        if !i18n.has_message(key) {
            continue;
        }
        let translated = i18n.tr(key);
        if button.title == default {
            button.title = translated.clone();
        }
        if button.aria_label == default {
            button.aria_label = translated;
        }
    }
}

fn glyph(descriptor: &ButtonDescriptor) -> String {
    let builtin = match descriptor.kind {
        ButtonType::Close => "✕",
        ButtonType::Download => "↓",
        ButtonType::ExtUrl => "↗",
        ButtonType::Refresh => "↻",
        ButtonType::Delete => "⌦",
        ButtonType::Custom | ButtonType::Other(_) => {
            return descriptor
                .title
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_else(|| "•".to_string());
        }
    };
    builtin.to_string()
}

/// Converts a CSS-like size (`auto`, `30px`, `30`, `100%`) to an Iced length.
fn parse_length(raw: &str) -> Length {
    let raw = raw.trim();
    if raw.ends_with('%') {
        return Length::Fill;
    }
    raw.strip_suffix("px")
        .unwrap_or(raw)
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
        .map_or(Length::Shrink, Length::Fixed)
}

// SPDX-License-Identifier: MPL-2.0
//! Routes button interactions to the output channel of their button type.

use super::classifier::{AccessibleClassifier, Decision, InputEvent, InteractionClassifier};
use super::{Action, ButtonDescriptor, ButtonEvent, ButtonType, ImageRef};
use crate::error::{Error, Result};

/// Output channels of the button strip. At most one fires per interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Refresh(ButtonEvent),
    Delete(ButtonEvent),
    Navigate(ButtonEvent),
    Download(ButtonEvent),
    Close(ButtonEvent),
    CustomEmit(ButtonEvent),
}

impl Event {
    #[must_use]
    pub fn payload(&self) -> &ButtonEvent {
        match self {
            Event::Refresh(e)
            | Event::Delete(e)
            | Event::Navigate(e)
            | Event::Download(e)
            | Event::Close(e)
            | Event::CustomEmit(e) => e,
        }
    }

    #[must_use]
    pub fn into_payload(self) -> ButtonEvent {
        match self {
            Event::Refresh(e)
            | Event::Delete(e)
            | Event::Navigate(e)
            | Event::Download(e)
            | Event::Close(e)
            | Event::CustomEmit(e) => e,
        }
    }

    /// Same event with the payload's image filled in by the parent.
    #[must_use]
    pub fn with_image(self, image: Option<ImageRef>) -> Self {
        match self {
            Event::Refresh(e) => Event::Refresh(e.with_image(image)),
            Event::Delete(e) => Event::Delete(e.with_image(image)),
            Event::Navigate(e) => Event::Navigate(e.with_image(image)),
            Event::Download(e) => Event::Download(e.with_image(image)),
            Event::Close(e) => Event::Close(e.with_image(image)),
            Event::CustomEmit(e) => Event::CustomEmit(e.with_image(image)),
        }
    }

    /// Channel name, for logs.
    #[must_use]
    pub fn channel(&self) -> &'static str {
        match self {
            Event::Refresh(_) => "refresh",
            Event::Delete(_) => "delete",
            Event::Navigate(_) => "navigate",
            Event::Download(_) => "download",
            Event::Close(_) => "close",
            Event::CustomEmit(_) => "custom",
        }
    }
}

/// Stateless router from interactions to [`Event`]s.
pub struct Dispatcher {
    classifier: Box<dyn InteractionClassifier>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(AccessibleClassifier)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

impl Dispatcher {
    pub fn new(classifier: impl InteractionClassifier + 'static) -> Self {
        Self {
            classifier: Box::new(classifier),
        }
    }

    /// Decides which channel, if any, an interaction on `button` feeds.
    ///
    /// Returns `Ok(None)` when there is nothing to do: no raw event, an
    /// `ext-url` button without a navigable image, or an input the classifier
    /// suppresses. The payload's `image` is always `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownButtonType`] for a descriptor whose type is not
    /// one of the known kinds, whatever the input.
    pub fn dispatch(
        &self,
        button: &ButtonDescriptor,
        index: usize,
        raw: Option<&InputEvent>,
        current_image: Option<&ImageRef>,
        action: Action,
    ) -> Result<Option<Event>> {
        let Some(raw) = raw else {
            return Ok(None);
        };

        let channel: fn(ButtonEvent) -> Event = match &button.kind {
            ButtonType::Refresh => Event::Refresh,
            ButtonType::Delete => Event::Delete,
            ButtonType::ExtUrl => {
                if current_image.and_then(ImageRef::navigable_url).is_none() {
                    tracing::debug!(index, "navigate ignored: current image has no external url");
                    return Ok(None);
                }
                Event::Navigate
            }
            ButtonType::Download => Event::Download,
            ButtonType::Close => Event::Close,
            ButtonType::Custom => Event::CustomEmit,
            ButtonType::Other(kind) => return Err(Error::UnknownButtonType(kind.clone())),
        };

        if self.classifier.classify(raw) == Decision::Suppress {
            tracing::debug!(index, ?raw, "interaction suppressed");
            return Ok(None);
        }

        let event = channel(ButtonEvent {
            button_index: index,
            button: button.clone(),
            image: None,
            action,
        });
        tracing::info!(index, channel = event.channel(), ?action, "button activated");
        Ok(Some(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buttons::{resolve, ButtonsConfig, ButtonsStrategy};
    use iced::keyboard::{key::Named, Key};
    use iced::mouse;

    const ALL_KINDS: [ButtonType; 6] = [
        ButtonType::Close,
        ButtonType::Download,
        ButtonType::ExtUrl,
        ButtonType::Refresh,
        ButtonType::Delete,
        ButtonType::Custom,
    ];

    fn click() -> InputEvent {
        InputEvent::Mouse(mouse::Button::Left)
    }

    fn image_with_url() -> ImageRef {
        ImageRef::new(7).with_ext_url("https://example.org/photo")
    }

    fn button(kind: ButtonType, id: usize) -> ButtonDescriptor {
        let mut descriptor = ButtonDescriptor::new(kind);
        descriptor.id = Some(id);
        descriptor
    }

    #[test]
    fn close_click_emits_one_close_event() {
        let dispatcher = Dispatcher::default();
        let close = button(ButtonType::Close, 3);
        let event = dispatcher
            .dispatch(&close, 3, Some(&click()), None, Action::Click)
            .expect("dispatch succeeds")
            .expect("event emitted");
        match event {
            Event::Close(payload) => {
                assert_eq!(payload.button_index, 3);
                assert_eq!(payload.button, close);
                assert_eq!(payload.image, None);
                assert_eq!(payload.action, Action::Click);
            }
            other => panic!("expected Close, got {other:?}"),
        }
    }

    #[test]
    fn each_kind_routes_to_its_channel() {
        let dispatcher = Dispatcher::default();
        let image = image_with_url();
        let expected = ["close", "download", "navigate", "refresh", "delete", "custom"];
        for (kind, channel) in ALL_KINDS.into_iter().zip(expected) {
            let event = dispatcher
                .dispatch(&button(kind, 0), 0, Some(&click()), Some(&image), Action::Click)
                .expect("dispatch succeeds")
                .expect("event emitted");
            assert_eq!(event.channel(), channel);
            assert_eq!(event.payload().image, None);
        }
    }

    #[test]
    fn ext_url_without_url_emits_nothing() {
        let proceed = Dispatcher::new(|_: &InputEvent| Decision::Proceed);
        let suppress = Dispatcher::new(|_: &InputEvent| Decision::Suppress);
        let ext_url = button(ButtonType::ExtUrl, 0);
        let no_url = ImageRef::new(1);
        let blank_url = ImageRef::new(1).with_ext_url("");
        for dispatcher in [&proceed, &suppress] {
            for image in [None, Some(&no_url), Some(&blank_url)] {
                let result = dispatcher
                    .dispatch(&ext_url, 0, Some(&click()), image, Action::Click)
                    .expect("no error");
                assert!(result.is_none());
            }
        }
    }

    #[test]
    fn missing_raw_event_is_a_no_op_for_every_kind() {
        let dispatcher = Dispatcher::default();
        let image = image_with_url();
        for kind in ALL_KINDS {
            let result = dispatcher
                .dispatch(&button(kind, 0), 0, None, Some(&image), Action::Click)
                .expect("no error");
            assert!(result.is_none());
        }
        let unknown = button(ButtonType::Other("share".into()), 0);
        assert_eq!(
            dispatcher.dispatch(&unknown, 0, None, None, Action::Click),
            Ok(None)
        );
    }

    #[test]
    fn suppressed_input_emits_nothing_for_every_kind_and_action() {
        let dispatcher = Dispatcher::new(|_: &InputEvent| Decision::Suppress);
        let image = image_with_url();
        for kind in ALL_KINDS {
            for action in [Action::Click, Action::KeyboardEnter, Action::KeyboardSpace] {
                let result = dispatcher
                    .dispatch(&button(kind.clone(), 0), 0, Some(&click()), Some(&image), action)
                    .expect("no error");
                assert!(result.is_none(), "{kind} / {action:?}");
            }
        }
    }

    #[test]
    fn tab_does_not_activate_but_enter_does() {
        let dispatcher = Dispatcher::default();
        let download = button(ButtonType::Download, 0);
        let tab = InputEvent::Keyboard(Key::Named(Named::Tab));
        let enter = InputEvent::Keyboard(Key::Named(Named::Enter));

        assert_eq!(
            dispatcher.dispatch(&download, 0, Some(&tab), None, Action::from_input(&tab)),
            Ok(None)
        );
        let event = dispatcher
            .dispatch(&download, 0, Some(&enter), None, Action::from_input(&enter))
            .expect("dispatch succeeds")
            .expect("event emitted");
        assert_eq!(event.payload().action, Action::KeyboardEnter);
    }

    #[test]
    fn unknown_type_is_an_error_even_when_suppressed() {
        let unknown = button(ButtonType::Other("share".into()), 0);
        for dispatcher in [
            Dispatcher::default(),
            Dispatcher::new(|_: &InputEvent| Decision::Suppress),
        ] {
            assert_eq!(
                dispatcher.dispatch(&unknown, 0, Some(&click()), None, Action::Click),
                Err(Error::UnknownButtonType("share".into()))
            );
        }
    }

    #[test]
    fn advanced_download_example() {
        let resolved = resolve(Some(&ButtonsConfig::with_strategy(
            ButtonsStrategy::Advanced,
        )))
        .expect("resolves");
        let dispatcher = Dispatcher::default();
        let event = dispatcher
            .dispatch(&resolved.buttons[1], 1, Some(&click()), None, Action::Click)
            .expect("dispatch succeeds")
            .expect("event emitted");

        let Event::Download(payload) = event else {
            panic!("expected Download event");
        };
        assert_eq!(payload.button_index, 1);
        assert_eq!(payload.button.kind, ButtonType::Download);
        assert_eq!(payload.button.id, Some(1));
        assert_eq!(payload.image, None);
        assert_eq!(payload.action, Action::Click);
    }
}

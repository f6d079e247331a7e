// SPDX-License-Identifier: MPL-2.0
//! Demo viewer hosting a [`ButtonStrip`] over a placeholder image.
//!
//! The `App` owns the list of demo images and reacts to the strip's events:
//! delete removes the current image, refresh restores the list, custom
//! buttons advance to the next image and close exits.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::buttons::{Event, ImageRef};
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::button_strip::{self, ButtonStrip};
use crate::ui::design_tokens::{spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::keyboard::{key::Named, Key};
use iced::widget::{container, stack, Column, Text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;

const DEMO_IMAGE_COUNT: usize = 3;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;

pub struct App {
    pub i18n: I18n,
    strip: ButtonStrip,
    images: Vec<ImageRef>,
    current: usize,
    ext_url: Option<String>,
    /// Last event emitted by the strip, with its image filled in.
    last_event: Option<Event>,
    /// i18n key of a startup warning.
    warning: Option<String>,
    theme: Theme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("strategy", &self.strip.strategy())
            .field("images", &self.images.len())
            .field("current", &self.current)
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot function; flags are only consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        (App::new(flags), Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

/// Follows the OS preference; dark when it cannot be detected.
fn system_theme() -> Theme {
    match dark_light::detect() {
        Ok(dark_light::Mode::Light) => Theme::Light,
        _ => Theme::Dark,
    }
}

fn demo_images(ext_url: Option<&str>) -> Vec<ImageRef> {
    (0..DEMO_IMAGE_COUNT)
        .map(|id| {
            let image = ImageRef::new(id);
            // Odd images have no link, so the navigate button does nothing on them
            match ext_url {
                Some(url) if id % 2 == 0 => image.with_ext_url(url),
                _ => image,
            }
        })
        .collect()
}

impl App {
    pub fn new(flags: Flags) -> Self {
        let (mut config, mut warning) = config::load();
        if let Some(strategy) = flags.strategy {
            config.buttons.strategy = Some(strategy);
        }

        let i18n = I18n::new(flags.lang, &config);
        let strip = match ButtonStrip::new(Some(&config.buttons), &i18n) {
            Ok(strip) => strip,
            Err(err) => {
                tracing::error!(error = %err, "invalid button configuration, showing default buttons");
                warning = Some("notification-config-buttons-error".to_string());
                ButtonStrip::fallback(&i18n)
            }
        };

        let mut app = Self {
            i18n,
            strip,
            images: demo_images(flags.ext_url.as_deref()),
            current: 0,
            ext_url: flags.ext_url,
            last_event: None,
            warning,
            theme: system_theme(),
        };
        app.sync_current_image();
        app
    }

    fn current_image(&self) -> Option<&ImageRef> {
        self.images.get(self.current)
    }

    fn sync_current_image(&mut self) {
        let image = self.current_image().cloned();
        self.strip.set_current_image(image);
    }

    fn step_image(&mut self, forward: bool) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        self.current = if forward {
            (self.current + 1) % len
        } else {
            (self.current + len - 1) % len
        };
        self.sync_current_image();
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Strip(strip_message) => self.handle_strip_message(strip_message),
            Message::KeyPressed { key, modifiers } => {
                let strip_message = match key {
                    Key::Named(Named::Tab) if modifiers.shift() => {
                        button_strip::Message::FocusPrevious
                    }
                    Key::Named(Named::Tab) => button_strip::Message::FocusNext,
                    Key::Named(Named::Escape) => button_strip::Message::ClearFocus,
                    Key::Named(Named::ArrowRight) => {
                        self.step_image(true);
                        return Task::none();
                    }
                    Key::Named(Named::ArrowLeft) => {
                        self.step_image(false);
                        return Task::none();
                    }
                    other => button_strip::Message::KeyPressed(other),
                };
                self.handle_strip_message(strip_message)
            }
        }
    }

    fn handle_strip_message(&mut self, message: button_strip::Message) -> Task<Message> {
        match self.strip.update(message) {
            Ok(Some(event)) => self.handle_strip_event(event),
            Ok(None) => Task::none(),
            Err(err) => {
                tracing::error!(error = %err, "button dispatch failed");
                Task::none()
            }
        }
    }

    fn handle_strip_event(&mut self, event: Event) -> Task<Message> {
        let image = self.current_image().cloned();
        let task = match &event {
            Event::Close(_) => iced::exit(),
            Event::Download(_) => {
                tracing::info!(image = ?image.as_ref().map(|i| i.id), "download requested");
                Task::none()
            }
            Event::Navigate(_) => {
                let url = image.as_ref().and_then(ImageRef::navigable_url);
                tracing::info!(url = ?url, "navigation requested");
                Task::none()
            }
            Event::Delete(_) => {
                if self.current < self.images.len() {
                    self.images.remove(self.current);
                    self.current = self.current.min(self.images.len().saturating_sub(1));
                    self.sync_current_image();
                }
                Task::none()
            }
            Event::Refresh(_) => {
                self.images = demo_images(self.ext_url.as_deref());
                self.current = 0;
                self.sync_current_image();
                Task::none()
            }
            Event::CustomEmit(_) => {
                self.step_image(true);
                Task::none()
            }
        };
        self.last_event = Some(event.with_image(image));
        task
    }

    fn view(&self) -> Element<'_, Message> {
        let image_label = match self.current_image() {
            Some(image) => self
                .i18n
                .tr_with_args("demo-image-label", &[("id", image.id.to_string().as_str())]),
            None => self.i18n.tr("demo-placeholder"),
        };
        let image_area = container(Text::new(image_label).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center);

        let overlay = container(self.strip.view().map(Message::Strip))
            .width(Length::Fill)
            .align_x(Horizontal::Right)
            .padding(spacing::XS);

        let status = match &self.last_event {
            Some(event) => self.i18n.tr_with_args(
                "demo-last-event",
                &[
                    ("channel", event.channel()),
                    ("index", event.payload().button_index.to_string().as_str()),
                ],
            ),
            None => self.i18n.tr("demo-no-event"),
        };

        let mut footer = Column::new()
            .spacing(spacing::XXS)
            .padding(spacing::XS)
            .push(Text::new(status).size(typography::BODY_SM))
            .push(Text::new(self.i18n.tr("demo-focus-hint")).size(typography::BODY_SM));
        if let Some(key) = &self.warning {
            footer = footer.push(Text::new(self.i18n.tr(key)).size(typography::BODY_SM));
        }

        Column::new()
            .push(stack![image_area, overlay])
            .push(footer)
            .into()
    }
}

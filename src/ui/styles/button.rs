// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Translucent overlay button laid over the displayed image.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Strip button style. The keyboard-focused button gets a brand-colored ring.
pub fn strip(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    let base = overlay(WHITE, opacity::OVERLAY_MEDIUM, opacity::OVERLAY_HOVER);
    move |theme: &Theme, status: button::Status| {
        let style = base(theme, status);
        if !focused {
            return style;
        }
        button::Style {
            border: Border {
                color: palette::PRIMARY_400,
                width: 2.0,
                radius: radius::SM.into(),
            },
            ..style
        }
    }
}

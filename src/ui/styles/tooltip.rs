// SPDX-License-Identifier: MPL-2.0
//! Tooltips showing a button's title.
//!
//! Tips float over the displayed image next to the strip, so they share the
//! strip's dark translucent look instead of following the window theme.

use crate::ui::design_tokens::{
    opacity,
    palette::{GRAY_700, GRAY_900, WHITE},
    radius, shadow, spacing, typography,
};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

pub use iced::widget::tooltip::Position;

/// Dark tip with a hairline border, readable on light and dark images alike.
pub fn strip_tip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_PRESSED,
            ..GRAY_900
        })),
        border: Border {
            color: GRAY_700,
            width: 1.0,
            radius: radius::SM.into(),
        },
        text_color: Some(WHITE),
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::XS])
        .style(strip_tip);

    tooltip(content, tip_container, position).gap(spacing::XXS)
}

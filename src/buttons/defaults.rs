// SPDX-License-Identifier: MPL-2.0
//! Built-in button descriptors and the strategy button sets.
//!
//! Every function here returns freshly built values, so two activations never
//! share a default list.

use super::{ButtonDescriptor, ButtonType, ButtonsStrategy};

/// Default button height.
pub const BUTTON_HEIGHT: &str = "auto";

/// Default button width.
pub const BUTTON_WIDTH: &str = "30px";

/// English title of a built-in button kind. Also used as its aria label.
#[must_use]
pub fn title_for(kind: &ButtonType) -> Option<&'static str> {
    match kind {
        ButtonType::Close => Some("Close this modal image gallery"),
        ButtonType::Download => Some("Download the current image"),
        ButtonType::ExtUrl => Some("Navigate the current image"),
        ButtonType::Refresh => Some("Refresh all"),
        ButtonType::Delete => Some("Delete the current image"),
        ButtonType::Custom | ButtonType::Other(_) => None,
    }
}

fn class_name_for(kind: &ButtonType) -> &'static str {
    match kind {
        ButtonType::Close => "close-image",
        ButtonType::Download => "download-image",
        ButtonType::ExtUrl => "ext-url-image",
        ButtonType::Refresh => "refresh-image",
        ButtonType::Delete => "delete-image",
        ButtonType::Custom | ButtonType::Other(_) => "",
    }
}

/// Descriptor of a built-in button.
#[must_use]
pub fn builtin(kind: ButtonType) -> ButtonDescriptor {
    let text = title_for(&kind).unwrap_or_default();
    let class_name = class_name_for(&kind);
    ButtonDescriptor::new(kind)
        .with_class_name(class_name)
        .with_title(text)
        .with_aria_label(text)
}

/// Button set of a built-in strategy, in display order.
///
/// Returns `None` for [`ButtonsStrategy::Custom`], whose list comes from the
/// caller.
#[must_use]
pub fn buttons_for(strategy: ButtonsStrategy) -> Option<Vec<ButtonDescriptor>> {
    use ButtonType::*;
    let kinds = match strategy {
        ButtonsStrategy::Default => vec![Close],
        ButtonsStrategy::Simple => vec![Download, Close],
        ButtonsStrategy::Advanced => vec![ExtUrl, Download, Close],
        ButtonsStrategy::Full => vec![Refresh, Delete, ExtUrl, Download, Close],
        ButtonsStrategy::Custom => return None,
    };
    Some(kinds.into_iter().map(builtin).collect())
}

// SPDX-License-Identifier: MPL-2.0
//! Turns a [`ButtonsConfig`] into the list of buttons to display.

use super::{defaults, ButtonDescriptor, ButtonsConfig, ButtonsStrategy};
use crate::error::{Error, Result};

/// Outcome of resolving a configuration for one activation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedButtons {
    pub visible: bool,
    pub strategy: ButtonsStrategy,
    /// Buttons in display order, `id` set to their position.
    pub buttons: Vec<ButtonDescriptor>,
}

impl Default for ResolvedButtons {
    /// What an absent configuration resolves to: a visible close button.
    fn default() -> Self {
        Self {
            visible: true,
            strategy: ButtonsStrategy::Default,
            buttons: stamp_ids(defaults::buttons_for(ButtonsStrategy::Default).unwrap_or_default()),
        }
    }
}

/// Resolves the buttons to display.
///
/// Missing fields fall back to `visible = true` and the `default` strategy.
/// Built-in strategies ignore `buttons`; the `custom` strategy takes it as is
/// (an absent list yields no buttons) after checking every entry against the
/// allow-list. The returned descriptors are copies, never the caller's.
///
/// # Errors
///
/// Returns [`Error::Config`] for the first custom entry whose type is not
/// allowed.
pub fn resolve(raw: Option<&ButtonsConfig>) -> Result<ResolvedButtons> {
    let visible = raw.and_then(|config| config.visible).unwrap_or(true);
    let strategy = raw
        .and_then(|config| config.strategy)
        .unwrap_or_default();

    let source = match defaults::buttons_for(strategy) {
        Some(builtin) => builtin,
        None => {
            let custom = raw
                .and_then(|config| config.buttons.as_deref())
                .unwrap_or_default();
            validate_custom(custom)?;
            custom.to_vec()
        }
    };

    Ok(ResolvedButtons {
        visible,
        strategy,
        buttons: stamp_ids(source),
    })
}

fn validate_custom(buttons: &[ButtonDescriptor]) -> Result<()> {
    match buttons
        .iter()
        .enumerate()
        .find(|(_, button)| !button.kind.is_allowed())
    {
        Some((index, button)) => Err(Error::invalid_custom_button(index, &button.kind)),
        None => Ok(()),
    }
}

fn stamp_ids(buttons: Vec<ButtonDescriptor>) -> Vec<ButtonDescriptor> {
    buttons
        .into_iter()
        .enumerate()
        .map(|(position, button)| ButtonDescriptor {
            id: Some(position),
            ..button
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buttons::ButtonType;

    fn kinds_and_ids(resolved: &ResolvedButtons) -> Vec<(ButtonType, Option<usize>)> {
        resolved
            .buttons
            .iter()
            .map(|b| (b.kind.clone(), b.id))
            .collect()
    }

    #[test]
    fn no_config_resolves_to_default_close_button() {
        let resolved = resolve(None).expect("default config resolves");
        assert!(resolved.visible);
        assert_eq!(resolved.strategy, ButtonsStrategy::Default);
        assert_eq!(
            kinds_and_ids(&resolved),
            vec![(ButtonType::Close, Some(0))]
        );
    }

    #[test]
    fn default_resolution_matches_absent_config() {
        assert_eq!(resolve(None).expect("resolves"), ResolvedButtons::default());
    }

    #[test]
    fn builtin_strategies_stamp_ids_in_display_order() {
        let cases = [
            (ButtonsStrategy::Default, 1),
            (ButtonsStrategy::Simple, 2),
            (ButtonsStrategy::Advanced, 3),
            (ButtonsStrategy::Full, 5),
        ];
        for (strategy, expected_len) in cases {
            let resolved =
                resolve(Some(&ButtonsConfig::with_strategy(strategy))).expect("resolves");
            assert_eq!(resolved.buttons.len(), expected_len, "{strategy:?}");
            for (position, button) in resolved.buttons.iter().enumerate() {
                assert_eq!(button.id, Some(position));
            }
        }
    }

    #[test]
    fn advanced_strategy_matches_documented_order() {
        let resolved = resolve(Some(&ButtonsConfig::with_strategy(
            ButtonsStrategy::Advanced,
        )))
        .expect("resolves");
        assert_eq!(
            kinds_and_ids(&resolved),
            vec![
                (ButtonType::ExtUrl, Some(0)),
                (ButtonType::Download, Some(1)),
                (ButtonType::Close, Some(2)),
            ]
        );
    }

    #[test]
    fn builtin_strategy_ignores_supplied_buttons() {
        let config = ButtonsConfig {
            strategy: Some(ButtonsStrategy::Simple),
            buttons: Some(vec![ButtonDescriptor::new(ButtonType::Custom)]),
            ..ButtonsConfig::default()
        };
        let resolved = resolve(Some(&config)).expect("resolves");
        assert_eq!(
            kinds_and_ids(&resolved),
            vec![(ButtonType::Download, Some(0)), (ButtonType::Close, Some(1))]
        );
    }

    #[test]
    fn visible_flag_is_carried_over() {
        let config = ButtonsConfig {
            visible: Some(false),
            ..ButtonsConfig::default()
        };
        let resolved = resolve(Some(&config)).expect("resolves");
        assert!(!resolved.visible);
        assert_eq!(resolved.strategy, ButtonsStrategy::Default);
    }

    #[test]
    fn custom_strategy_preserves_order_and_duplicates() {
        let config = ButtonsConfig::custom(vec![
            ButtonDescriptor::new(ButtonType::Custom).with_title("Share"),
            ButtonDescriptor::new(ButtonType::Close),
            ButtonDescriptor::new(ButtonType::Custom).with_title("Share"),
        ]);
        let resolved = resolve(Some(&config)).expect("resolves");
        assert_eq!(
            kinds_and_ids(&resolved),
            vec![
                (ButtonType::Custom, Some(0)),
                (ButtonType::Close, Some(1)),
                (ButtonType::Custom, Some(2)),
            ]
        );
        assert_eq!(resolved.buttons[0].title, "Share");
    }

    #[test]
    fn custom_strategy_overwrites_preset_ids() {
        let mut preset = ButtonDescriptor::new(ButtonType::Download);
        preset.id = Some(42);
        let resolved = resolve(Some(&ButtonsConfig::custom(vec![preset]))).expect("resolves");
        assert_eq!(resolved.buttons[0].id, Some(0));
    }

    #[test]
    fn custom_strategy_without_list_is_empty() {
        let resolved = resolve(Some(&ButtonsConfig::with_strategy(ButtonsStrategy::Custom)))
            .expect("resolves");
        assert!(resolved.buttons.is_empty());
    }

    #[test]
    fn custom_strategy_rejects_unknown_type() {
        let config = ButtonsConfig::custom(vec![
            ButtonDescriptor::new(ButtonType::Close),
            ButtonDescriptor::new(ButtonType::Other("share".into())),
            ButtonDescriptor::new(ButtonType::Other("print".into())),
        ]);
        match resolve(Some(&config)) {
            Err(Error::Config(message)) => {
                assert!(message.contains("#1"));
                assert!(message.contains("share"));
                assert!(!message.contains("print"));
            }
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn resolution_does_not_touch_the_input() {
        let config = ButtonsConfig::custom(vec![ButtonDescriptor::new(ButtonType::Delete)]);
        let before = config.clone();
        let _ = resolve(Some(&config)).expect("resolves");
        assert_eq!(config, before);
        assert_eq!(config.buttons.as_ref().map(|b| b[0].id), Some(None));
    }

    #[test]
    fn repeated_resolution_yields_equal_independent_lists() {
        let config = ButtonsConfig::with_strategy(ButtonsStrategy::Full);
        let first = resolve(Some(&config)).expect("resolves");
        let mut second = resolve(Some(&config)).expect("resolves");
        assert_eq!(first, second);
        assert_ne!(first.buttons.as_ptr(), second.buttons.as_ptr());

        second.buttons[0].title.push_str(" (edited)");
        assert_ne!(first.buttons[0].title, second.buttons[0].title);
        assert_eq!(first.buttons[0].id, Some(0));
    }
}

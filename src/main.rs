// SPDX-License-Identifier: MPL-2.0
use lens_buttons::app::{self, Flags};
use lens_buttons::config;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
lens_buttons - media viewer action buttons demo

USAGE:
  lens_buttons [OPTIONS] [EXT_URL]

OPTIONS:
  --lang <LANG>           UI language (e.g. en-US, fr)
  --strategy <STRATEGY>   default, simple, advanced, full or custom
  --config-dir <DIR>      Directory holding settings.toml
  -h, --help              Print this help

ARGS:
  [EXT_URL]               External link attached to the demo images
";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = opt_value::<String>(&mut args, "--lang");
    let strategy = opt_value(&mut args, "--strategy");
    if let Some(dir) = opt_value::<PathBuf>(&mut args, "--config-dir") {
        if !config::set_config_dir(dir) {
            tracing::warn!("config dir already set, ignoring --config-dir");
        }
    }

    let flags = Flags {
        lang,
        strategy,
        ext_url: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}

/// Parses an optional `key value` pair. Invalid values are logged and dropped.
fn opt_value<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(option = key, error = %err, "ignoring invalid command-line option");
        None
    })
}

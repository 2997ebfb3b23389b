// SPDX-License-Identifier: MPL-2.0
use iced_turntable::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "info";

const HELP: &str = "\
iced_turntable - 360° product configurator

USAGE:
  iced_turntable [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --assets <DIR>         Asset root with one frame directory per variant
  --log-level <FILTER>   Log filter when RUST_LOG is unset (default: info)
  -h, --help             Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        eprintln!("ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            eprintln!("ignoring --config-dir: {err}");
            None
        });
    let assets: Option<String> = args.opt_value_from_str("--assets").unwrap_or_else(|err| {
        eprintln!("ignoring --assets: {err}");
        None
    });
    let log_level: Option<String> =
        args.opt_value_from_str("--log-level").unwrap_or_else(|err| {
            eprintln!("ignoring --log-level: {err}");
            None
        });

    let filter = log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unknown arguments");
    }

    // Must precede the first settings lookup in `app::run`.
    paths::init_cli_overrides(config_dir);

    app::run(Flags { lang, assets })
}

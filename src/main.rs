// SPDX-License-Identifier: MPL-2.0
use iced_shelf::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_shelf: infinite-scroll product list

USAGE:
  iced_shelf [OPTIONS]

OPTIONS:
  --lang <LOCALE>         UI language (e.g. en-US, ko)
  --config-dir <PATH>     Directory holding settings.toml
  --page-size <N>         Products per page
  --pages <N>             Number of pages before the end of data
  --latency-ms <MS>       Simulated latency per page
  --fail-page <N>         Fail the first fetch of page N (1-based)
  -h, --help              Print this help

ENVIRONMENT:
  ICED_SHELF_CONFIG_DIR   Config directory when --config-dir is absent
  RUST_LOG                Log filter (default: warn)
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        page_size: args.opt_value_from_str("--page-size")?,
        pages: args.opt_value_from_str("--pages")?,
        latency_ms: args.opt_value_from_str("--latency-ms")?,
        fail_page: args.opt_value_from_str("--fail-page")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Target};
use iced_folio::app::{self, paths, Flags};
use log::LevelFilter;

const HELP: &str = "\
Usage: iced_folio [OPTIONS]

Options:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --i18n-dir <DIR>       Directory with extra or replacement .ftl files
  -h, --help             Print this help
";

fn init_logger() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        Builder::new()
            .target(Target::Stderr)
            .filter_level(LevelFilter::Warn)
            .filter_module("iced_folio", LevelFilter::Info)
            .init();
    }
}

fn main() -> iced::Result {
    init_logger();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: option_arg(&mut args, "--lang"),
        config_dir: option_arg(&mut args, "--config-dir"),
        i18n_dir: option_arg(&mut args, "--i18n-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {:?}", remaining);
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn option_arg(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        log::warn!("Invalid value for {}: {}", key, err);
        None
    })
}

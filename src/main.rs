// SPDX-License-Identifier: MPL-2.0
use iced_alert::app::{self, Flags};
use iced_alert::ui::alert::AlertCategory;
use std::process::ExitCode;

const HELP: &str = "\
iced-alert: present a modal alert in a window

USAGE:
  iced-alert [OPTIONS]

OPTIONS:
  --category <error|warning|success|notification>
  --actions <0..3>          Number of action buttons
  --title <text>            Title label
  --message <text>          Message label
  --config-dir <dir>        Directory holding settings.toml
  -h, --help                Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let defaults = Flags::default();
    let flags = Flags {
        category: args
            .opt_value_from_str::<_, AlertCategory>("--category")?
            .unwrap_or(defaults.category),
        actions: args
            .opt_value_from_str("--actions")?
            .unwrap_or(defaults.actions),
        title: args.opt_value_from_str("--title")?.or(defaults.title),
        message: args.opt_value_from_str("--message")?.or(defaults.message),
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn main() -> ExitCode {
    env_logger::init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("iced-alert: {err}");
            eprint!("{HELP}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Application error: {err}");
            ExitCode::FAILURE
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
use iced_reel::app::{self, Flags};
use iced_reel::config::paths;

const HELP: &str = "\
Usage: iced_reel [OPTIONS] [SOURCE]

Arguments:
  [SOURCE]              Video file path or URL (overrides [player] source)

Options:
  --config-dir <PATH>   Read settings.toml from PATH
  -h, --help            Print this help
";

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir = match args.opt_value_from_str::<_, String>("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            log::warn!("Ignoring --config-dir: {err}");
            None
        }
    };

    let flags = Flags {
        source: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
        config_dir,
    };

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

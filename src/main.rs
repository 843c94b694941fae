// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        profile_path: args.opt_value_from_str("--profile").unwrap(),
        assets_dir: args.opt_value_from_str("--assets-dir").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
    };

    app::run(flags)
}

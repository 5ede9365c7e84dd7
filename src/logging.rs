use std::io::Write as _;

use log::{Level, LevelFilter};
use pretty_env_logger::env_logger;

/// Level used when `RUST_LOG` is not set, from the number of `-v` flags.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the stderr logger. `RUST_LOG` takes precedence over `verbosity`.
pub fn init(verbosity: u8) {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(level_for(verbosity));
    builder.parse_default_env();

    builder.format(|buf, record| {
        let mut level_style = buf.style();
        level_style.set_color(match record.level() {
            Level::Error => env_logger::fmt::Color::Red,
            Level::Warn => env_logger::fmt::Color::Yellow,
            Level::Info => env_logger::fmt::Color::Green,
            Level::Debug => env_logger::fmt::Color::Blue,
            Level::Trace => env_logger::fmt::Color::Magenta,
        });
        level_style.set_bold(true);

        writeln!(
            buf,
            "{} {} {} > {}",
            buf.timestamp(),
            level_style.value(format!("{:<5}", record.level())),
            record.target(),
            record.args()
        )
    });

    if builder.try_init().is_err() {
        log::debug!("logger already initialized");
    }
}

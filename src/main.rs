use std::io;

use anyhow::Context;
use clap::Parser;
use log::info;

use word_frequency::config::{Cli, Settings};
use word_frequency::{logging, Controller, Info};

fn main() -> anyhow::Result<()> {
    let settings = Settings::from(Cli::parse());
    // --info output goes through the logger, so it needs at least info level.
    logging::init(settings.verbosity.max(u8::from(settings.show_info)));

    let controller = Controller::from_path(&settings.input, &settings.stop_words)
        .context("failed to set up word frequency pipeline")?;

    if settings.show_info {
        info!("{}", controller.info());
        for line in controller.components_info() {
            info!("{}", line);
        }
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    controller.run(&mut out)?;

    Ok(())
}

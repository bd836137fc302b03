//! logging stuff
use {
    crate::{
        config::options::{LoggingFormat, Settings},
        utils::string_to_log_level,
    },
    color_eyre::{Result, eyre::Context},
    tracing::{info, subscriber},
    tracing_subscriber::FmtSubscriber,
};

/// setup logging from the `logging` settings
pub fn setup(settings: &Settings) -> Result<()> {
    let level = getopt!(settings, logging.level);
    if !getopt!(settings, logging.enable) || level.eq_ignore_ascii_case("off") {
        return Ok(());
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(string_to_log_level(&level))
        .with_ansi(getopt!(settings, logging.ansi))
        .with_line_number(getopt!(settings, logging.line_numbers))
        .with_target(getopt!(settings, logging.event_targets))
        .with_writer(std::io::stderr);

    match getopt!(settings, logging.format) {
        LoggingFormat::Pretty => subscriber::set_global_default(subscriber.pretty().finish()),
        LoggingFormat::Compact => subscriber::set_global_default(subscriber.compact().finish()),
    }
    .wrap_err("Failed to install the log subscriber")?;

    info!("Logging setup successfully");
    Ok(())
}

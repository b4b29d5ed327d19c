//! Logging initialization
//!
//! Wires the `log` facade to a `fern` dispatcher according to the
//! [`LoggingConfig`](crate::config::LoggingConfig) section of the
//! configuration file.

use crate::config::LoggingConfig;

/// Initialize logging from configuration
///
/// A disabled config is a no-op so library consumers that bring their own
/// logger are not disturbed.
pub fn init(config: &LoggingConfig) -> Result<(), fern::InitError> {
    if !config.enabled {
        return Ok(());
    }

    let level = config
        .level
        .parse::<log::LevelFilter>()
        .unwrap_or(log::LevelFilter::Info);

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()?;

    Ok(())
}

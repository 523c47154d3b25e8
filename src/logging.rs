use std::fs::File;

use env_logger::{Env, Target};

use crate::{
    config::Config,
    error::{PongError, Result},
};

/// Route `log` output to the configured file. The terminal itself is the
/// game screen, so nothing may be written to stdout or stderr while playing.
pub fn init(config: &Config) -> Result<()> {
    if config.no_log {
        return Ok(());
    }

    let file = File::create(&config.log_file).map_err(|source| PongError::LogFile {
        path: config.log_file.clone(),
        source,
    })?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;

    log::info!("logging to {}", config.log_file.display());
    Ok(())
}

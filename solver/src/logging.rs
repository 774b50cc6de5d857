//! Logger set-up.

use std::error::Error;
use std::path::Path;

/// Install the global logger.
///
/// The terminal UI owns stdout and stderr, so in that mode records only go
/// to `log_file`, and nothing is installed without one. Headless runs log
/// to stderr as well.
pub fn init(
    level: log::LevelFilter,
    log_file: Option<&Path>,
    headless: bool,
) -> Result<(), Box<dyn Error>> {
    if log_file.is_none() && !headless {
        return Ok(());
    }

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level);

    if let Some(path) = log_file {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }
    if headless {
        dispatch = dispatch.chain(std::io::stderr());
    }
    dispatch.apply()?;
    Ok(())
}

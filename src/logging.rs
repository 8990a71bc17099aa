use crate::Result;
use flexi_logger::{opt_format, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use std::path::Path;

/// Starts the global logger.
///
/// The level comes from `RUST_LOG`, or `default_level` when unset. Logs go to stderr,
/// or to rotated files in `directory` when given. Keep the returned handle alive for
/// as long as logging is needed.
pub fn setup_logging(default_level: &str, directory: Option<&Path>) -> Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str(default_level)?.format(opt_format);

    let logger = match directory {
        Some(directory) => logger
            .log_to_file(FileSpec::default().directory(directory))
            .rotate(
                Criterion::Size(10 * 1024 * 1024), // Rotate logs after they reach 10 MB
                Naming::Numbers,
                Cleanup::KeepLogFiles(7),
            ),
        None => logger,
    };

    Ok(logger.start()?)
}

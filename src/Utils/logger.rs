use log::info;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

/// maps a loglevel string to a filter, `None` means logging is switched off
pub fn level_from_str(level: Option<&str>) -> Option<LevelFilter> {
    match level {
        None => Some(LevelFilter::Info),
        Some("off") | Some("none") => None,
        Some("debug") => Some(LevelFilter::Debug),
        Some("info") => Some(LevelFilter::Info),
        Some("warn") => Some(LevelFilter::Warn),
        Some("error") => Some(LevelFilter::Error),
        Some(_) => Some(LevelFilter::Info),
    }
}

/// installs a terminal logger with the given level ("debug", "info", "warn", "error", "off"/"none").
/// Returns false when logging is off or a logger was already installed; a second
/// initialisation is ignored.
pub fn init_logger(level: Option<&str>) -> bool {
    let Some(log_option) = level_from_str(level) else {
        return false;
    };
    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
    match logger_instance {
        Ok(()) => {
            info!("logger started with loglevel: {}", log_option);
            true
        }
        Err(_) => false,
    }
}

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub enum LogOutput {
    Stdout,
    Stderr,
}

/// `log` backend writing coloured lines to a std stream and, optionally, plain lines to a file
pub struct Logger {
    pub write_to_std: Option<LogOutput>,
    pub severity: Level,
    pub file: Option<Arc<Mutex<File>>>,
    pub enable_colors: bool,
}

impl Logger {
    pub fn new(
        file_path: Option<PathBuf>,
        severity: Option<Level>,
        write_to_std: Option<LogOutput>,
        enable_colors: bool,
    ) -> Self {
        let file = file_path.and_then(|path| {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .ok()
                .map(|f| Arc::new(Mutex::new(f)))
        });

        Logger {
            write_to_std,
            severity: severity.unwrap_or(Level::Info),
            file,
            enable_colors,
        }
    }

    fn timestamp() -> String {
        OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "-".to_string())
    }

    fn color(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1b[31m",
            Level::Warn => "\x1b[33m",
            Level::Info => "\x1b[36m",
            Level::Debug => "\x1b[35m",
            Level::Trace => "\x1b[37m",
        }
    }

    fn default_log_path() -> PathBuf {
        #[cfg(target_os = "macos")]
        let path = "/Library/Logs/cochi/cochi.log";
        #[cfg(target_os = "windows")]
        let path = "C:\\ProgramData\\cochi\\cochi.log";
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let path = "/var/log/cochi/cochi.log";
        PathBuf::from(path)
    }

    /// Install the logger, configured from `COCHI_LOG`/`RUST_LOG`, `COCHI_LOG_FILE` and `NO_COLOR`.
    ///
    /// `COCHI_LOG_FILE` may name a path; an empty value selects the platform default.
    pub fn init() -> Result<(), log::SetLoggerError> {
        let severity = std::env::var("COCHI_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string())
            .parse::<Level>()
            .unwrap_or(Level::Info);

        let file_path = std::env::var("COCHI_LOG_FILE").ok().map(|value| {
            if value.trim().is_empty() {
                Self::default_log_path()
            } else {
                PathBuf::from(value)
            }
        });
        let enable_colors = std::env::var("NO_COLOR").is_err();

        let logger = Logger::new(file_path, Some(severity), Some(LogOutput::Stderr), enable_colors);
        log::set_max_level(LevelFilter::Trace);
        log::set_logger(Box::leak(Box::new(logger)))?;
        Ok(())
    }

    fn format_line(&self, record: &Record, colored: bool) -> String {
        let timestamp = Self::timestamp();
        let level = record.level();
        if colored {
            format!("{}[{}] {:<5}\x1b[0m {}: {}", Self::color(level), timestamp, level, record.target(), record.args())
        } else {
            format!("[{}] {:<5} {}: {}", timestamp, level, record.target(), record.args())
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.severity
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if let Some(output) = &self.write_to_std {
            let line = self.format_line(record, self.enable_colors);
            let _ = match output {
                LogOutput::Stdout => writeln!(std::io::stdout(), "{}", line),
                LogOutput::Stderr => writeln!(std::io::stderr(), "{}", line),
            };
        }

        if let Some(file) = &self.file {
            if let Ok(mut guard) = file.lock() {
                let _ = writeln!(guard, "{}", self.format_line(record, false));
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
        if let Some(file) = &self.file {
            if let Ok(mut guard) = file.lock() {
                let _ = guard.flush();
            }
        }
    }
}

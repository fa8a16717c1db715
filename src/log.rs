use std::fmt::Display;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_ansi(self) -> &'static str {
        match self {
            LogLevel::Debug => "\x1b[38;5;8m",
            LogLevel::Info => "\x1b[39m",
            LogLevel::Warn => "\x1b[38;5;3m",
            LogLevel::Error => "\x1b[38;5;1m",
        }
    }

    fn as_pre(self) -> &'static str {
        match self {
            LogLevel::Debug => "[DBG] ",
            LogLevel::Info => "[INF] ",
            LogLevel::Warn => "[WRN] ",
            LogLevel::Error => "[ERR] ",
        }
    }
}

/// line-oriented console logger for the demo binary
///
/// messages below the minimum level are dropped, info and below go to stdout,
/// warnings and above to stderr
#[derive(Debug, Copy, Clone)]
pub struct Logger {
    use_ansi_color: bool,
    minimum_level: LogLevel,
}

impl Logger {
    pub fn new(use_ansi_color: bool, minimum_level: LogLevel) -> Self {
        Self {
            use_ansi_color,
            minimum_level,
        }
    }

    pub fn log<T: Display>(self, level: LogLevel, message: T) {
        if self.minimum_level > level {
            return;
        }

        let (color, reset) = if self.use_ansi_color {
            (level.as_ansi(), "\x1b[0m")
        } else {
            ("", "")
        };

        match level {
            LogLevel::Debug | LogLevel::Info => {
                println!("{color}{}{message}{reset}", level.as_pre())
            }
            LogLevel::Warn | LogLevel::Error => {
                eprintln!("{color}{}{message}{reset}", level.as_pre())
            }
        }
    }

    pub fn debug<T: Display>(self, message: T) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info<T: Display>(self, message: T) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn<T: Display>(self, message: T) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error<T: Display>(self, message: T) {
        self.log(LogLevel::Error, message);
    }
}

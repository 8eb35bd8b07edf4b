use chrono::Local;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn log(&self, file: &str, line: u32, text: &str) {
        println!("{}", self.format_line(file, line, text));
    }

    fn format_line(&self, file: &str, line: u32, text: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => {
                format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, text)
            }
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, text),
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(file: &str, line: u32, text: &str) {
    match LOGGER.get() {
        Some(logger) => logger.log(file, line, text),
        None => eprintln!("Logger not initialized! Call init_logger() first."),
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None);

        let line = logger.format_line("src/game/state.rs", 42, "hello");

        assert!(line.ends_with("[state.rs:42] hello"));
    }

    #[test]
    fn test_format_line_with_prefix() {
        let logger = Logger::new(Some("TicTacToe".to_string()));

        let line = logger.format_line("state.rs", 7, "hello");

        assert!(line.contains("[TicTacToe][state.rs:7] hello"));
    }

    #[test]
    fn test_format_line_handles_windows_separators() {
        let logger = Logger::new(None);

        let line = logger.format_line("src\\game\\bot.rs", 1, "x");

        assert!(line.ends_with("[bot.rs:1] x"));
    }
}

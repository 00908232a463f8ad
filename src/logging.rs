//! ロギングシステム
//!
//! `log` ファサードの出力先となる開発者向けロガーを提供

use crate::options::{ensure_parent_dir, SorterOptions};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn tag(self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    /// 設定文字列から変換
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warning),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => LogLevel::Trace,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Info,
            log::Level::Warn => LogLevel::Warning,
            log::Level::Error => LogLevel::Error,
        }
    }
}

/// ロガー
///
/// * 開発者向け詳細ログをstderrへ出力
/// * ファイル出力が設定されていれば追記する
#[derive(Debug, Clone)]
pub struct Logger {
    level: LogLevel,
    output_stderr: bool,
    output_file: Option<PathBuf>,
}

impl Logger {
    /// デフォルト構築
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            output_stderr: true,
            output_file: None,
        }
    }

    /// ログレベルを取得
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// ログレベルを変更
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// ファイル出力を設定
    pub fn with_file_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// 標準エラー出力を無効化
    pub fn without_stderr(mut self) -> Self {
        self.output_stderr = false;
        self
    }

    fn should_log(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    fn write_line(&self, message: &str) {
        if self.output_stderr {
            eprintln!("{}", message);
        }

        if let Some(path) = &self.output_file {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
            {
                let _ = writeln!(file, "{}", message);
            }
        }
    }

    fn format_record(record: &log::Record<'_>) -> String {
        let level = LogLevel::from(record.level());
        format!("{}: {} in {}", level.tag(), record.args(), record.target())
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.should_log(LogLevel::from(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            self.write_line(&Self::format_record(record));
        }
    }

    fn flush(&self) {}
}

/// オプションに従ってグローバルロガーを設定
///
/// 二重初期化は無視する（テストから複数回呼ばれるため）
pub fn init(options: &SorterOptions) -> std::io::Result<()> {
    let mut logger = Logger::new(options.log_level());
    if let Some(path) = options.resolve_log_path() {
        ensure_parent_dir(&path)?;
        logger = logger.with_file_output(path);
    }

    let filter = logger.level().to_filter();
    if log::set_logger(Box::leak(Box::new(logger))).is_ok() {
        log::set_max_level(filter);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn logger_respects_log_level() {
        let logger = Logger::new(LogLevel::Debug).without_stderr();
        assert!(logger.should_log(LogLevel::Debug));
        assert!(!logger.should_log(LogLevel::Trace));

        let warn_logger = Logger::new(LogLevel::Debug)
            .with_level(LogLevel::Warning)
            .without_stderr();
        assert!(!warn_logger.should_log(LogLevel::Info));
        assert!(warn_logger.should_log(LogLevel::Error));
    }

    #[test]
    fn logger_appends_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debug.log");
        let logger = Logger::new(LogLevel::Info)
            .without_stderr()
            .with_file_output(&path);

        logger.log(
            &log::Record::builder()
                .args(format_args!("sorted run"))
                .level(log::Level::Info)
                .target("list_sorter::list")
                .build(),
        );
        logger.log(
            &log::Record::builder()
                .args(format_args!("hidden"))
                .level(log::Level::Debug)
                .target("list_sorter::list")
                .build(),
        );

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "INFO: sorted run in list_sorter::list\n");
    }

    #[test]
    fn init_prepares_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("debug.log");
        let options = SorterOptions {
            log_path: Some(path.clone()),
            ..SorterOptions::default()
        };

        init(&options).unwrap();
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn log_level_parse() {
        assert_eq!(LogLevel::parse("WARN"), Some(LogLevel::Warning));
        assert_eq!(LogLevel::parse("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("loud"), None);
    }
}

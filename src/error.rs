//! エラーハンドリングシステム
//!
//! リストソート全体で使用される統一されたエラー型を定義
//! ホスト（バッファ）側の失敗はそのまま呼び出し元へ伝播する

use thiserror::Error;

/// クレート全体のエラー型
#[derive(Error, Debug, Clone)]
pub enum SorterError {
    /// バッファ操作エラー
    #[error("Buffer operation failed")]
    Buffer(#[from] BufferError),

    /// コマンド処理エラー
    #[error("Command processing failed")]
    Command(#[from] CommandError),

    /// 設定エラー
    #[error("Configuration error")]
    Config(#[from] ConfigError),

    /// 入出力エラー
    #[error("IO error: {message}")]
    Io { message: String },
}

/// バッファ操作固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("Line {index} is out of range (line count: {line_count})")]
    LineOutOfRange { index: usize, line_count: usize },

    #[error("Invalid position: line {line}, column {column}")]
    InvalidPosition { line: usize, column: usize },

    #[error("Range start is after range end")]
    InvertedRange,
}

/// コマンド処理固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Command not found: {command}")]
    NotFound { command: String },

    #[error("Command already registered: {command}")]
    AlreadyRegistered { command: String },
}

/// 設定固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Path expansion failed: {message}")]
    PathExpansion { message: String },
}

impl SorterError {
    /// ユーザー向けメッセージ
    pub fn user_message(&self) -> String {
        match self {
            SorterError::Buffer(BufferError::LineOutOfRange { index, line_count }) => {
                format!("行番号が範囲外です: {} (行数 {})", index, line_count)
            }
            SorterError::Buffer(BufferError::InvalidPosition { line, column }) => {
                format!("無効なカーソル位置です: {}:{}", line, column)
            }
            SorterError::Command(CommandError::NotFound { command }) => {
                format!("コマンドが見つかりません: {}", command)
            }
            SorterError::Config(ConfigError::InvalidValue { key, value }) => {
                format!("設定値が不正です: {} = {}", key, value)
            }
            other => format!("エラーが発生しました: {}", other),
        }
    }
}

// std::io::Error から SorterError への変換
impl From<std::io::Error> for SorterError {
    fn from(error: std::io::Error) -> Self {
        SorterError::Io { message: error.to_string() }
    }
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, SorterError>;

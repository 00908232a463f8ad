//! 実行オプション
//!
//! ログ出力先や改行コードの上書きなど、永続化しない実行時設定を扱う

use crate::buffer::LineEnding;
use crate::error::{ConfigError, Result};
use crate::logging::LogLevel;
use std::path::{Path, PathBuf};

/// リストソートの実行オプション
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SorterOptions {
    /// ログレベル（未指定時は Warning）
    pub log_level: Option<LogLevel>,
    /// デバッグログ出力先（未指定時は `~/.list-sorter/debug.log`）
    pub log_path: Option<PathBuf>,
    /// ファイルへのログ出力を有効化
    pub file_logging: bool,
    /// 改行コードの上書き（未指定時はバッファから検出）
    pub line_ending: Option<LineEnding>,
}

impl SorterOptions {
    pub fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or(LogLevel::Warning)
    }

    pub fn resolve_log_path(&self) -> Option<PathBuf> {
        match &self.log_path {
            Some(path) => Some(path.clone()),
            None if self.file_logging => default_log_path(),
            None => None,
        }
    }

    pub fn merged_with(&self, overrides: &SorterOptions) -> SorterOptions {
        SorterOptions {
            log_level: overrides.log_level.or(self.log_level),
            log_path: overrides
                .log_path
                .clone()
                .or_else(|| self.log_path.clone()),
            file_logging: overrides.file_logging || self.file_logging,
            line_ending: overrides.line_ending.or(self.line_ending),
        }
    }
}

fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".list-sorter").join("debug.log"))
}

/// `~` と環境変数を展開
pub fn expand_path(path: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(path).map_err(|e| ConfigError::PathExpansion {
        message: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// ヘルパー：親ディレクトリを作成
pub(crate) fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

//! カーソル位置管理
//!
//! 行・列で表現するバッファ内の位置

use serde::Serialize;

/// バッファ内の位置（行・列ともに0ベース、列は文字単位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    /// 行番号
    pub line: usize,
    /// 列番号
    pub column: usize,
}

impl Position {
    /// 原点を作成
    pub fn new() -> Self {
        Self { line: 0, column: 0 }
    }

    /// 指定された位置を作成
    pub fn at(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// 行のみ差し替えた位置（列はそのまま保持）
    pub fn with_line(self, line: usize) -> Self {
        Self { line, ..self }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

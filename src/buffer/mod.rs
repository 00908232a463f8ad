//! バッファ管理モジュール
//!
//! ソート処理が利用するホスト（エディタ）側のバッファ・カーソル契約と、
//! そのメモリ上の実装を提供

pub mod cursor;
pub mod line_buffer;

// 公開API
pub use cursor::Position;
pub use line_buffer::LineBuffer;

use crate::error::Result;

/// 改行コード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// 改行文字列
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// テキストから改行コードを推定（CRLF が一つでもあれば CRLF）
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    /// 設定文字列から変換
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "lf" | "unix" => Some(LineEnding::Lf),
            "crlf" | "dos" | "windows" => Some(LineEnding::CrLf),
            _ => None,
        }
    }
}

/// ホストエディタのバッファ・カーソル操作インターフェース
///
/// ソート処理は呼び出しごとにこのトレイトを受け取り、状態を保持しない。
/// 読み書きの失敗はそのまま呼び出し元へ返す。
pub trait EditorHost {
    /// 指定行の内容（改行を含まない）
    fn line(&self, index: usize) -> Result<String>;

    /// 行数（排他的上限）
    fn line_count(&self) -> usize;

    /// 現在のカーソル位置
    fn cursor(&self) -> Position;

    /// カーソルを移動
    fn set_cursor(&mut self, position: Position) -> Result<()>;

    /// `from` から `to`（排他的）までを `text` で置換
    ///
    /// `to == (line_count, 0)` は最終行の改行まで含めた末尾を意味する。
    fn replace_range(&mut self, text: &str, from: Position, to: Position) -> Result<()>;

    /// 書き込むテキストに使う改行コード
    fn line_ending(&self) -> LineEnding {
        LineEnding::Lf
    }
}

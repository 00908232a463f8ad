//! 行単位のメモリ上バッファ
//!
//! `EditorHost` の参照実装。テスト、ベンチマーク、CLI から利用する。

use super::{EditorHost, LineEnding, Position};
use crate::error::{BufferError, Result};

/// 行の配列として保持するテキストバッファ
///
/// 末尾の改行は最後の空行として表現する（`"a\n"` は `["a", ""]`）。
/// 改行コードは行ごとに保持し、書き換えていない行はそのまま出力する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    /// `lines[i]` の直後の改行（最終行以外）
    terminators: Vec<LineEnding>,
    /// 挿入テキストに使う改行コード
    line_ending: LineEnding,
    cursor: Position,
    modified: bool,
}

impl LineBuffer {
    /// 新しい空のバッファを作成
    pub fn new() -> Self {
        Self::from_lines(vec![String::new()])
    }

    /// テキストからバッファを作成（改行コードは自動検出）
    pub fn from_text(text: &str) -> Self {
        let (lines, terminators) = split_lines(text);
        Self {
            lines,
            terminators,
            line_ending: LineEnding::detect(text),
            cursor: Position::new(),
            modified: false,
        }
    }

    /// 行の配列からバッファを作成
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let terminators = vec![LineEnding::Lf; lines.len().saturating_sub(1)];
        Self {
            lines,
            terminators,
            line_ending: LineEnding::Lf,
            cursor: Position::new(),
            modified: false,
        }
    }

    /// カーソル位置を指定
    pub fn with_cursor(mut self, line: usize, column: usize) -> Self {
        self.cursor = Position::at(line, column);
        self
    }

    /// 挿入テキストの改行コードを上書き（既存行の改行は変えない）
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// 全行への参照
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// バッファ全体のテキスト
    pub fn text(&self) -> String {
        let mut text = String::new();
        for (index, line) in self.lines.iter().enumerate() {
            text.push_str(line);
            if let Some(terminator) = self.terminators.get(index) {
                text.push_str(terminator.as_str());
            }
        }
        text
    }

    /// バッファが変更されているかを確認
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    fn line_len(&self, index: usize) -> usize {
        self.lines[index].chars().count()
    }

    fn check_position(&self, position: Position) -> Result<()> {
        if position.line >= self.lines.len() || position.column > self.line_len(position.line) {
            return Err(BufferError::InvalidPosition {
                line: position.line,
                column: position.column,
            }
            .into());
        }
        Ok(())
    }

    fn is_end_marker(&self, position: Position) -> bool {
        position.line == self.lines.len() && position.column == 0
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorHost for LineBuffer {
    fn line(&self, index: usize) -> Result<String> {
        self.lines.get(index).cloned().ok_or_else(|| {
            BufferError::LineOutOfRange {
                index,
                line_count: self.lines.len(),
            }
            .into()
        })
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    /// 列は行長を超える場合に行末へ丸める
    fn set_cursor(&mut self, position: Position) -> Result<()> {
        if position.line >= self.lines.len() {
            return Err(BufferError::LineOutOfRange {
                index: position.line,
                line_count: self.lines.len(),
            }
            .into());
        }
        let column = position.column.min(self.line_len(position.line));
        self.cursor = Position::at(position.line, column);
        Ok(())
    }

    fn replace_range(&mut self, text: &str, from: Position, to: Position) -> Result<()> {
        if from > to {
            return Err(BufferError::InvertedRange.into());
        }
        self.check_position(from)?;

        let (suffix, last_replaced) = if self.is_end_marker(to) {
            (String::new(), self.lines.len() - 1)
        } else {
            self.check_position(to)?;
            let line = &self.lines[to.line];
            (line[byte_offset(line, to.column)..].to_string(), to.line)
        };

        let head = &self.lines[from.line];
        let mut joined = head[..byte_offset(head, from.column)].to_string();
        joined.push_str(text);
        joined.push_str(&suffix);

        // 置換範囲の後ろに続く改行（last_replaced の直後）は保持する
        let (lines, terminators) = split_lines(&joined);
        self.lines.splice(from.line..=last_replaced, lines);
        self.terminators
            .splice(from.line..last_replaced, terminators);
        self.modified = true;
        Ok(())
    }

    fn line_ending(&self) -> LineEnding {
        self.line_ending
    }
}

/// 行と各行の改行コードに分割
///
/// `\r` は直後に `\n` が続く場合のみ改行として扱う。
fn split_lines(text: &str) -> (Vec<String>, Vec<LineEnding>) {
    let mut lines = Vec::new();
    let mut terminators = Vec::new();
    let mut rest = text;

    while let Some(pos) = rest.find('\n') {
        let line = &rest[..pos];
        match line.strip_suffix('\r') {
            Some(stripped) => {
                lines.push(stripped.to_string());
                terminators.push(LineEnding::CrLf);
            }
            None => {
                lines.push(line.to_string());
                terminators.push(LineEnding::Lf);
            }
        }
        rest = &rest[pos + 1..];
    }
    lines.push(rest.to_string());

    (lines, terminators)
}

fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}

//! リスト行の検出
//!
//! 箇条書き記号（`-` `*` `+`）で始まる行を判定し、カーソル行を含む連続範囲を求める

use super::types::{LineRecord, RunRange};
use regex::Regex;
use std::sync::OnceLock;

const LIST_LINE_PATTERN: &str = r"^\s*[-*+].*$";

fn list_line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(LIST_LINE_PATTERN).expect("list line pattern is valid"))
}

/// 箇条書きの行か判定（番号付きリストは対象外）
pub fn is_list_line(text: &str) -> bool {
    list_line_regex().is_match(text)
}

/// `pivot` 行を含む連続したリスト行の範囲を求める
///
/// `pivot` がリスト行でなければ `None`。
pub fn locate_run<S: AsRef<str>>(lines: &[S], pivot: usize) -> Option<RunRange> {
    let is_list_at = |index: usize| is_list_line(lines[index].as_ref());

    if pivot >= lines.len() || !is_list_at(pivot) {
        return None;
    }

    let mut first = pivot;
    while first > 0 && is_list_at(first - 1) {
        first -= 1;
    }

    let mut last = pivot;
    while last + 1 < lines.len() && is_list_at(last + 1) {
        last += 1;
    }

    Some(RunRange::new(first, last))
}

/// 範囲内の行をレコード化し、カーソル行に印を付ける
pub fn collect_records<S: AsRef<str>>(
    lines: &[S],
    run: RunRange,
    cursor_line: usize,
) -> Vec<LineRecord> {
    (run.first..=run.last)
        .map(|index| LineRecord {
            content: lines[index].as_ref().to_string(),
            is_cursor_line: index == cursor_line,
            source_index: index,
        })
        .collect()
}

//! ソート済みの木をテキストへ戻す

use super::types::{Node, ANCHOR_SENTINEL};
use crate::buffer::LineEnding;

/// 前順で各ノードの行を連結（末尾に改行は付けない）
pub fn render(nodes: &[Node], line_ending: LineEnding) -> String {
    let mut lines = Vec::new();
    collect_lines(nodes, &mut lines);
    lines.join(line_ending.as_str())
}

fn collect_lines<'a>(nodes: &'a [Node], out: &mut Vec<&'a str>) {
    for node in nodes {
        out.push(&node.content);
        collect_lines(&node.children, out);
    }
}

/// 先頭行がアンカーならその行と改行を取り除く
pub fn strip_anchor_line(text: &str, line_ending: LineEnding) -> Option<String> {
    let rest = text.strip_prefix(ANCHOR_SENTINEL)?;
    if rest.is_empty() {
        return Some(String::new());
    }
    rest.strip_prefix(line_ending.as_str()).map(str::to_string)
}

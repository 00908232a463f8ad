//! 兄弟グループのソート
//!
//! 各兄弟グループを大文字小文字を区別しない辞書順で安定ソートする。
//! 異なる階層のグループを混ぜて比較することはない。

use super::types::{AnchorState, Direction, ListTree, Node};
use std::cmp::Ordering;

/// 大文字小文字を区別しない比較（降順では符号を反転）
pub fn compare_content(a: &str, b: &str, direction: Direction) -> Ordering {
    let ordering = a.to_lowercase().cmp(&b.to_lowercase());
    if direction.sign() < 0 {
        ordering.reverse()
    } else {
        ordering
    }
}

/// 木全体を再帰的にソート
///
/// 合成アンカーはどちらの方向でもルートグループの先頭に留まる。
pub fn sort_tree(tree: &mut ListTree, direction: Direction) {
    sort_group(&mut tree.roots, direction);
}

fn sort_group(group: &mut [Node], direction: Direction) {
    let pinned = group.iter().take_while(|node| node.is_anchor()).count();
    group[pinned..].sort_by(|a, b| compare_content(&a.content, &b.content, direction));

    for node in group.iter_mut() {
        sort_group(&mut node.children, direction);
    }
}

/// 降順ソート時のアンカー補正
///
/// アンカーがあれば除去対象の印を付け、追跡中のカーソル行を1つ戻す。
pub fn mark_anchor_for_removal(
    tree: &mut ListTree,
    direction: Direction,
    tracked_cursor_line: usize,
) -> usize {
    if direction == Direction::Descending && tree.anchor == AnchorState::Present {
        tree.anchor = AnchorState::MarkedForRemoval;
        return tracked_cursor_line.saturating_sub(1);
    }
    tracked_cursor_line
}

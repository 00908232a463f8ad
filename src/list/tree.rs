//! リスト木の構築
//!
//! 平坦な行レコードを字下げ量に基づいて入れ子の木へ変換する。
//! 字下げは相対比較のみで、固定幅の倍数である必要はない。

use super::types::{AnchorState, LineRecord, ListTree, Node};
use std::iter::Peekable;

/// 行レコードから木を構築
///
/// 先頭行が字下げされている場合はレベル0の合成アンカーを先頭に置き、
/// 字下げされた行をその子として扱う。
pub fn build_tree(records: Vec<LineRecord>) -> ListTree {
    let mut nodes = records.into_iter().map(Node::from_record).peekable();

    let needs_anchor = nodes.peek().is_some_and(|first| first.indent_level > 0);
    let anchor = needs_anchor.then(Node::anchor);

    let mut queue = anchor.into_iter().chain(nodes).peekable();
    let roots = build_group(&mut queue, 0);

    ListTree {
        roots,
        anchor: if needs_anchor {
            AnchorState::Present
        } else {
            AnchorState::Absent
        },
    }
}

/// `threshold` 以上の字下げを持つ行を兄弟グループとして消費する
///
/// `threshold` 未満の行に達したら、その行は祖先の兄弟なので呼び出し元へ戻る。
fn build_group<I>(queue: &mut Peekable<I>, threshold: usize) -> Vec<Node>
where
    I: Iterator<Item = Node>,
{
    let mut group = Vec::new();

    while let Some(mut node) = queue.next_if(|next| next.indent_level >= threshold) {
        let child_level = queue
            .peek()
            .map(|next| next.indent_level)
            .filter(|&level| level > node.indent_level);

        if let Some(level) = child_level {
            node.children = build_group(queue, level);
        }
        group.push(node);
    }

    group
}

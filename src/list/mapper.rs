//! ソート後の行番号割り当て

use super::types::Node;

/// 前順走査で行番号を割り当て、次に使う番号を返す
pub fn assign_destinations(nodes: &mut [Node], start: usize) -> usize {
    let mut next = start;
    for node in nodes.iter_mut() {
        node.destination = Some(next);
        next = assign_destinations(&mut node.children, next + 1);
    }
    next
}

/// カーソル行ノードの割り当て先を前順で探す
pub fn find_cursor_destination(nodes: &[Node]) -> Option<usize> {
    nodes.iter().find_map(|node| {
        if node.is_cursor_line {
            node.destination
        } else {
            find_cursor_destination(&node.children)
        }
    })
}

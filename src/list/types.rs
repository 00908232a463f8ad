//! リストソートの型定義

use crate::buffer::Position;
use serde::Serialize;
use std::fmt;

/// 合成アンカーが描画される際の内容
pub const ANCHOR_SENTINEL: &str = "'";

/// ソート方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// 比較結果に掛ける符号
    pub fn sign(self) -> i32 {
        match self {
            Direction::Ascending => 1,
            Direction::Descending => -1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Ascending => "ascending",
            Direction::Descending => "descending",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 連続したリスト行の範囲（両端を含む）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunRange {
    pub first: usize,
    pub last: usize,
}

impl RunRange {
    pub fn new(first: usize, last: usize) -> Self {
        debug_assert!(first <= last);
        Self { first, last }
    }

    /// 範囲内の行数
    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }
}

/// バッファから読み取った1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// 行の内容
    pub content: String,
    /// カーソルがこの行にあるか
    pub is_cursor_line: bool,
    /// バッファ上の元の行番号
    pub source_index: usize,
}

/// ノードの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// バッファ上の実在する行
    Item { source_index: usize },
    /// 親を持たずに始まる字下げ済みリストのための合成ルート
    Anchor,
}

/// リスト木のノード
///
/// 子ノードを排他的に所有する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub content: String,
    pub is_cursor_line: bool,
    /// 先頭スペース数
    pub indent_level: usize,
    pub children: Vec<Node>,
    /// ソート後の行番号（未割り当ては None）
    pub destination: Option<usize>,
}

impl Node {
    /// 行レコードからノードを作成
    pub fn from_record(record: LineRecord) -> Self {
        let indent_level = indent_level(&record.content);
        Self {
            kind: NodeKind::Item { source_index: record.source_index },
            content: record.content,
            is_cursor_line: record.is_cursor_line,
            indent_level,
            children: Vec::new(),
            destination: None,
        }
    }

    /// 合成アンカーを作成
    pub fn anchor() -> Self {
        Self {
            kind: NodeKind::Anchor,
            content: ANCHOR_SENTINEL.to_string(),
            is_cursor_line: false,
            indent_level: 0,
            children: Vec::new(),
            destination: None,
        }
    }

    pub fn is_anchor(&self) -> bool {
        matches!(self.kind, NodeKind::Anchor)
    }

    /// 自身を含む部分木のノード数
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }
}

/// 行頭のスペース数（タブは数えない）
pub fn indent_level(text: &str) -> usize {
    text.chars().take_while(|&ch| ch == ' ').count()
}

/// 合成アンカーの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorState {
    Absent,
    Present,
    /// 降順ソートで出力から除去する印が付いた状態
    MarkedForRemoval,
}

/// レベル0ノードの並び
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTree {
    pub roots: Vec<Node>,
    pub anchor: AnchorState,
}

impl ListTree {
    pub fn has_anchor(&self) -> bool {
        self.anchor != AnchorState::Absent
    }

    /// 木全体のノード数（アンカーを含む）
    pub fn len(&self) -> usize {
        self.roots.iter().map(Node::subtree_len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// 適用したソートの結果報告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOutcome {
    pub run: RunRange,
    pub direction: Direction,
    pub cursor_before: Position,
    pub cursor_after: Position,
    /// 字下げから始まる範囲のために合成アンカーを使用したか
    pub anchored: bool,
}

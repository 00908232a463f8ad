//! リストソートモジュール
//!
//! カーソル位置の箇条書きを検出し、階層を保ったまま兄弟ごとにソートして
//! バッファへ書き戻す。カーソルは元の内容の行へ追従する。

pub mod detector;
pub mod mapper;
pub mod renderer;
pub mod sorter;
pub mod tree;
pub mod types;

// 公開API
pub use detector::{collect_records, is_list_line, locate_run};
pub use mapper::{assign_destinations, find_cursor_destination};
pub use renderer::{render, strip_anchor_line};
pub use sorter::{compare_content, mark_anchor_for_removal, sort_tree};
pub use tree::build_tree;
pub use types::{
    AnchorState, Direction, LineRecord, ListTree, Node, NodeKind, RunRange, SortOutcome,
    ANCHOR_SENTINEL,
};

use crate::buffer::{EditorHost, LineEnding, Position};
use crate::error::Result;

/// バッファへ適用する前の計算結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortPlan {
    /// 置換する行範囲
    pub run: RunRange,
    /// 置換後のテキスト（末尾改行なし）
    pub text: String,
    /// 移動後のカーソル行
    pub cursor_line: usize,
    pub anchored: bool,
}

/// 行の配列とカーソル行からソート結果を計算する
///
/// カーソル行がリストでなければ `None`。
pub fn plan_sort<S: AsRef<str>>(
    lines: &[S],
    cursor_line: usize,
    direction: Direction,
    line_ending: LineEnding,
) -> Option<SortPlan> {
    let run = locate_run(lines, cursor_line)?;
    log::debug!(
        "sorting {} list lines {}..={} {} (cursor line {})",
        run.len(),
        run.first,
        run.last,
        direction,
        cursor_line
    );

    let mut tree = build_tree(collect_records(lines, run, cursor_line));
    let anchored = tree.has_anchor();
    let tracked_cursor_line = mark_anchor_for_removal(&mut tree, direction, cursor_line);

    sort_tree(&mut tree, direction);
    assign_destinations(&mut tree.roots, run.first);
    let mut destination = find_cursor_destination(&tree.roots);

    let mut text = render(&tree.roots, line_ending);
    if anchored {
        if let Some(stripped) = strip_anchor_line(&text, line_ending) {
            text = stripped;
            destination = destination.map(|line| line.saturating_sub(1));
        } else if tree.anchor == AnchorState::MarkedForRemoval {
            log::warn!("anchor marked for removal was not rendered first");
        }
    }
    log::trace!("rendered run:\n{}", text);

    Some(SortPlan {
        run,
        text,
        cursor_line: destination.unwrap_or(tracked_cursor_line),
        anchored,
    })
}

/// カーソル位置のリストをソートしてバッファへ書き戻す
///
/// リストが見つからなければ何もせず `Ok(None)` を返す。
pub fn sort_list_at_cursor<H>(host: &mut H, direction: Direction) -> Result<Option<SortOutcome>>
where
    H: EditorHost + ?Sized,
{
    let cursor_before = host.cursor();
    let lines = (0..host.line_count())
        .map(|index| host.line(index))
        .collect::<Result<Vec<_>>>()?;

    let Some(plan) = plan_sort(&lines, cursor_before.line, direction, host.line_ending()) else {
        log::debug!("no list at line {}, nothing to sort", cursor_before.line);
        return Ok(None);
    };

    let last_len = lines[plan.run.last].chars().count();
    host.replace_range(
        &plan.text,
        Position::at(plan.run.first, 0),
        Position::at(plan.run.last, last_len),
    )?;

    let cursor_after = cursor_before.with_line(plan.cursor_line);
    host.set_cursor(cursor_after)?;

    Ok(Some(SortOutcome {
        run: plan.run,
        direction,
        cursor_before,
        cursor_after,
        anchored: plan.anchored,
    }))
}

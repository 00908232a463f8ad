//! List sorting property tests
//!
//! Generated nested lists are embedded between plain text lines and sorted
//! through the public buffer API.

use list_sorter::buffer::{EditorHost, LineBuffer};
use list_sorter::list::{build_tree, compare_content, sort_list_at_cursor, Direction, LineRecord, Node};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use std::cmp::Ordering;

const WORDS: [&str; 8] = ["apple", "Apple", "banana", "Cherry", "cherry", "date", "Elder", "fig"];
const MARKERS: [&str; 3] = ["-", "*", "+"];

/// Well-formed list lines: each line is at most one level deeper than the previous.
fn list_lines() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec((0usize..3, 0..WORDS.len(), 0..MARKERS.len()), 1..24).prop_map(
        |items| {
            let mut previous: Option<usize> = None;
            items
                .into_iter()
                .map(|(step, word, marker)| {
                    let depth = match previous {
                        None => 0,
                        Some(prev) => step.min(prev + 1),
                    };
                    previous = Some(depth);
                    format!("{}{} {}", "  ".repeat(depth), MARKERS[marker], WORDS[word])
                })
                .collect()
        },
    )
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Ascending), Just(Direction::Descending)]
}

fn document(list: &[String]) -> Vec<String> {
    let mut lines = vec!["intro".to_string()];
    lines.extend(list.iter().cloned());
    lines.push("outro".to_string());
    lines
}

fn sorted_buffer(lines: &[String], cursor_line: usize, direction: Direction) -> LineBuffer {
    let mut buffer = LineBuffer::from_lines(lines.iter().cloned()).with_cursor(cursor_line, 0);
    sort_list_at_cursor(&mut buffer, direction).unwrap();
    buffer
}

fn tree_of(lines: &[String]) -> Vec<Node> {
    let records = lines
        .iter()
        .enumerate()
        .map(|(index, line)| LineRecord {
            content: line.clone(),
            is_cursor_line: false,
            source_index: index,
        })
        .collect();
    build_tree(records).roots
}

fn parent_pairs(nodes: &[Node], parent: &str, out: &mut Vec<(String, String)>) {
    for node in nodes {
        if !node.is_anchor() {
            out.push((parent.to_string(), node.content.clone()));
        }
        let next_parent = if node.is_anchor() { "" } else { node.content.as_str() };
        parent_pairs(&node.children, next_parent, out);
    }
}

fn hierarchy(lines: &[String]) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    parent_pairs(&tree_of(lines), "", &mut pairs);
    pairs.sort();
    pairs
}

fn groups_ordered(nodes: &[Node], direction: Direction) -> bool {
    let items: Vec<&Node> = nodes.iter().filter(|node| !node.is_anchor()).collect();
    let ordered = items
        .windows(2)
        .all(|pair| compare_content(&pair[0].content, &pair[1].content, direction) != Ordering::Greater);
    ordered && nodes.iter().all(|node| groups_ordered(&node.children, direction))
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn sorting_permutes_run_and_keeps_surroundings(
        list in list_lines(),
        pick in any::<usize>(),
        direction in direction_strategy(),
    ) {
        let lines = document(&list);
        let cursor_line = 1 + pick % list.len();
        let buffer = sorted_buffer(&lines, cursor_line, direction);

        prop_assert_eq!(buffer.line_count(), lines.len());
        prop_assert_eq!(buffer.line(0).unwrap(), "intro");
        prop_assert_eq!(buffer.line(lines.len() - 1).unwrap(), "outro");

        let mut before = list.clone();
        let mut after = buffer.lines()[1..=list.len()].to_vec();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn ascending_sort_is_idempotent(list in list_lines(), pick in any::<usize>()) {
        let lines = document(&list);
        let cursor_line = 1 + pick % list.len();
        let once = sorted_buffer(&lines, cursor_line, Direction::Ascending);
        let twice = sorted_buffer(once.lines(), once.cursor().line, Direction::Ascending);

        prop_assert_eq!(once.lines(), twice.lines());
        prop_assert_eq!(once.cursor(), twice.cursor());
    }

    #[test]
    fn sibling_groups_are_ordered(
        list in list_lines(),
        pick in any::<usize>(),
        direction in direction_strategy(),
    ) {
        let lines = document(&list);
        let buffer = sorted_buffer(&lines, 1 + pick % list.len(), direction);
        let run = buffer.lines()[1..=list.len()].to_vec();
        prop_assert!(groups_ordered(&tree_of(&run), direction));
    }

    #[test]
    fn hierarchy_is_preserved(
        start_depth in 0usize..3,
        pick in any::<usize>(),
        direction in direction_strategy(),
        list in list_lines(),
    ) {
        // Indent the whole list so runs without a top-level parent are covered too.
        let indent = "  ".repeat(start_depth);
        let list: Vec<String> = list.iter().map(|line| format!("{}{}", indent, line)).collect();
        let lines = document(&list);
        let buffer = sorted_buffer(&lines, 1 + pick % list.len(), direction);
        let run = buffer.lines()[1..=list.len()].to_vec();
        prop_assert_eq!(hierarchy(&list), hierarchy(&run));
    }

    #[test]
    fn cursor_follows_its_line(
        start_depth in 0usize..3,
        list in list_lines(),
        pick in any::<usize>(),
        column in 0usize..4,
        direction in direction_strategy(),
    ) {
        let indent = "  ".repeat(start_depth);
        let list: Vec<String> = list.iter().map(|line| format!("{}{}", indent, line)).collect();
        let lines = document(&list);
        let cursor_line = 1 + pick % list.len();
        let mut buffer = LineBuffer::from_lines(lines.iter().cloned()).with_cursor(cursor_line, column);
        let outcome = sort_list_at_cursor(&mut buffer, direction).unwrap().unwrap();

        prop_assert_eq!(outcome.cursor_after.column, column);
        prop_assert_eq!(buffer.line(outcome.cursor_after.line).unwrap(), lines[cursor_line].clone());
    }
}

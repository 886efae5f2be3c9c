use serde::Serialize;

use crate::engine::{EditOp, EditScript, Op};

/// One side of a split-view row: a 1-based line number in that side's text,
/// the raw token, and what happened to it. Plain data; escaping and markup
/// belong to whatever consumes these rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell<'a> {
    pub number: usize,
    pub text: &'a str,
    pub op: Op,
}

/// A two-column row: original on the left, modified on the right. Inside a
/// replacement block the k-th removed and k-th added line share a row;
/// surplus lines get a one-sided row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplitRow<'a> {
    pub left: Option<Cell<'a>>,
    pub right: Option<Cell<'a>>,
}

/// A single-column row with numbers for whichever sides the token exists in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnifiedRow<'a> {
    pub op: Op,
    pub old_number: Option<usize>,
    pub new_number: Option<usize>,
    pub text: &'a str,
}

/// Render a script as unified-diff-style text: a `--- Original` /
/// `+++ Modified` header followed by one ` `/`-`/`+` prefixed line per op.
///
/// ```
/// use lcs_diff_rs::{render, LcsDiff};
///
/// let script = LcsDiff::new().compare_lines("a\nb", "a\nc");
/// assert_eq!(
///     render::unified_text(&script),
///     "--- Original\n+++ Modified\n a\n-b\n+c\n"
/// );
/// ```
pub fn unified_text(script: &EditScript<'_>) -> String {
    let mut out = String::from("--- Original\n+++ Modified\n");

    for op in script {
        let prefix = match op.op() {
            Op::Equal => ' ',
            Op::Removed => '-',
            Op::Added => '+',
        };

        out.push(prefix);
        out.push_str(op.value());
        out.push('\n');
    }

    out
}

/// Build the two-column view of a script.
pub fn split_rows<'a>(script: &EditScript<'a>) -> Vec<SplitRow<'a>> {
    let mut rows = Vec::new();

    // one-sided cells of the replacement block being accumulated
    let mut removed = Vec::new();
    let mut added = Vec::new();

    for op in script {
        match *op {
            EditOp::Removed { value, old_index } => removed.push(Cell {
                number: old_index + 1,
                text: value,
                op: Op::Removed,
            }),
            EditOp::Added { value, new_index } => added.push(Cell {
                number: new_index + 1,
                text: value,
                op: Op::Added,
            }),
            EditOp::Equal {
                value,
                old_index,
                new_index,
            } => {
                flush_block(&mut rows, &mut removed, &mut added);
                rows.push(SplitRow {
                    left: Some(Cell {
                        number: old_index + 1,
                        text: value,
                        op: Op::Equal,
                    }),
                    right: Some(Cell {
                        number: new_index + 1,
                        text: value,
                        op: Op::Equal,
                    }),
                });
            }
        }
    }

    flush_block(&mut rows, &mut removed, &mut added);

    rows
}

fn flush_block<'a>(
    rows: &mut Vec<SplitRow<'a>>,
    removed: &mut Vec<Cell<'a>>,
    added: &mut Vec<Cell<'a>>,
) {
    let height = removed.len().max(added.len());

    let mut left = removed.drain(..);
    let mut right = added.drain(..);

    for _ in 0..height {
        rows.push(SplitRow {
            left: left.next(),
            right: right.next(),
        });
    }
}

/// Build the single-column view of a script.
pub fn unified_rows<'a>(script: &EditScript<'a>) -> Vec<UnifiedRow<'a>> {
    script
        .iter()
        .map(|op| match *op {
            EditOp::Equal {
                value,
                old_index,
                new_index,
            } => UnifiedRow {
                op: Op::Equal,
                old_number: Some(old_index + 1),
                new_number: Some(new_index + 1),
                text: value,
            },
            EditOp::Removed { value, old_index } => UnifiedRow {
                op: Op::Removed,
                old_number: Some(old_index + 1),
                new_number: None,
                text: value,
            },
            EditOp::Added { value, new_index } => UnifiedRow {
                op: Op::Added,
                old_number: None,
                new_number: Some(new_index + 1),
                text: value,
            },
        })
        .collect()
}

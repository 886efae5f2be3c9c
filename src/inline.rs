use serde::Serialize;

use crate::engine::{EditOp, EditScript, LcsDiff};

/// One piece of a line in a word-refined change: the raw text of a single
/// word or whitespace token and whether it differs from the paired line.
/// Adjacent segments may share the same flag; merging is left to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub changed: bool,
}

/// Word-level detail for one removed/added line pair of a line script.
/// `old_index`/`new_index` identify the lines the segments belong to, so a
/// renderer can join these back onto its rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineChange<'a> {
    pub old_index: usize,
    pub new_index: usize,
    pub removed: Vec<Segment<'a>>,
    pub added: Vec<Segment<'a>>,
}

/// Word-compare one removed line against one added line with the same
/// engine (and therefore the same normalization and tie-break), returning
/// the per-token segments of each side in order.
pub fn refine_pair<'a>(
    engine: &LcsDiff,
    removed: &'a str,
    added: &'a str,
) -> (Vec<Segment<'a>>, Vec<Segment<'a>>) {
    let script = engine.compare_words(removed, added);

    let mut left = Vec::new();
    let mut right = Vec::new();

    for op in &script {
        match *op {
            EditOp::Equal { value, .. } => {
                left.push(Segment {
                    text: value,
                    changed: false,
                });
                right.push(Segment {
                    text: value,
                    changed: false,
                });
            }
            EditOp::Removed { value, .. } => left.push(Segment {
                text: value,
                changed: true,
            }),
            EditOp::Added { value, .. } => right.push(Segment {
                text: value,
                changed: true,
            }),
        }
    }

    (left, right)
}

/// Walk a line-level script and word-refine its replacement blocks: inside
/// each maximal run of removals followed by additions, the k-th removed
/// line is paired with the k-th added line and re-compared at word
/// granularity. Surplus lines on either side produce no entry, and the line
/// script itself is never altered.
pub fn refine_script<'a>(engine: &LcsDiff, script: &EditScript<'a>) -> Vec<InlineChange<'a>> {
    let mut changes = Vec::new();

    // pending lines of the replacement block being accumulated
    let mut removed: Vec<(usize, &'a str)> = Vec::new();
    let mut added: Vec<(usize, &'a str)> = Vec::new();

    for op in script {
        match *op {
            EditOp::Removed { value, old_index } => removed.push((old_index, value)),
            EditOp::Added { value, new_index } => added.push((new_index, value)),
            EditOp::Equal { .. } => {
                // An equality closes the block; refine what accumulated.
                flush_block(engine, &mut changes, &mut removed, &mut added);
            }
        }
    }

    flush_block(engine, &mut changes, &mut removed, &mut added);

    changes
}

fn flush_block<'a>(
    engine: &LcsDiff,
    out: &mut Vec<InlineChange<'a>>,
    removed: &mut Vec<(usize, &'a str)>,
    added: &mut Vec<(usize, &'a str)>,
) {
    for ((old_index, old_line), (new_index, new_line)) in
        removed.drain(..).zip(added.drain(..))
    {
        let (removed, added) = refine_pair(engine, old_line, new_line);
        out.push(InlineChange {
            old_index,
            new_index,
            removed,
            added,
        });
    }
}

use std::{
    borrow::Cow,
    collections::HashMap,
    fmt::{self, Display},
};

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::{
    errors::Error,
    tokenizer::{Granularity, Lines, Tokenize, Words},
};

/// Enum representing the different ops of an edit script
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Op {
    Removed = -1,
    Added,
    Equal,
}

/// A single step of an edit script.
///
/// `(Equal, "World")` means `World` is present in both texts, `(Removed,
/// "Hello")` means `Hello` exists only in the original, `(Added, "Goodbye")`
/// means `Goodbye` exists only in the modified text. The carried `value` is
/// always a slice of the raw input, never a normalized form; indices are
/// zero-based positions in the token sequence of the side the token came
/// from. `Equal` draws its `value` from the original side, which matters
/// when a normalization option made two differently-spelled tokens compare
/// equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp<'a> {
    Equal {
        value: &'a str,
        old_index: usize,
        new_index: usize,
    },
    Removed {
        value: &'a str,
        old_index: usize,
    },
    Added {
        value: &'a str,
        new_index: usize,
    },
}

impl Display for EditOp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {})", self.op(), self.value())
    }
}

impl<'a> EditOp<'a> {
    /// helper functions to create ops
    pub fn equal(value: &'a str, old_index: usize, new_index: usize) -> Self {
        Self::Equal {
            value,
            old_index,
            new_index,
        }
    }

    pub fn removed(value: &'a str, old_index: usize) -> Self {
        Self::Removed { value, old_index }
    }

    pub fn added(value: &'a str, new_index: usize) -> Self {
        Self::Added { value, new_index }
    }

    // returns the operation of the current step
    pub fn op(&self) -> Op {
        match self {
            Self::Equal { .. } => Op::Equal,
            Self::Removed { .. } => Op::Removed,
            Self::Added { .. } => Op::Added,
        }
    }

    // returns the raw token this step carries
    pub fn value(&self) -> &'a str {
        match *self {
            Self::Equal { value, .. }
            | Self::Removed { value, .. }
            | Self::Added { value, .. } => value,
        }
    }
}

/// The ordered list of [`EditOp`]s produced by one comparison, together with
/// the granularity it was computed at. Never mutated after construction; a
/// new comparison produces a new script.
///
/// Joining the `value`s of all `Equal` + `Removed` steps with the
/// granularity's joiner reproduces the original text, and `Equal` + `Added`
/// reproduce the modified text (exactly, unless a normalization option
/// folded differently-spelled tokens together; `Equal` values carry the
/// original side's spelling).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditScript<'a> {
    granularity: Granularity,
    ops: Vec<EditOp<'a>>,
}

impl<'a> EditScript<'a> {
    pub fn ops(&self) -> &[EditOp<'a>] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EditOp<'a>> {
        self.ops.iter()
    }

    // the granularity this script was computed at
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Derive the read-only counters for this script.
    ///
    /// ```
    /// use lcs_diff_rs::LcsDiff;
    ///
    /// let script = LcsDiff::new().compare_lines("a\nb", "a\nc");
    /// let stats = script.stats();
    /// assert_eq!((stats.additions, stats.deletions, stats.changes), (1, 1, 1));
    /// ```
    pub fn stats(&self) -> DiffStats {
        let mut additions = 0;
        let mut deletions = 0;

        self.ops.iter().for_each(|op| match op {
            EditOp::Added { .. } => additions += 1,
            EditOp::Removed { .. } => deletions += 1,
            EditOp::Equal { .. } => {}
        });

        DiffStats {
            additions,
            deletions,
            changes: additions.min(deletions),
        }
    }

    /// Reconstruct the original text from all equalities and removals.
    pub fn original_text(&self) -> String {
        let tokens = self
            .ops
            .iter()
            .filter(|op| !matches!(op, EditOp::Added { .. }))
            .map(EditOp::value)
            .collect::<Vec<_>>();

        tokens.join(self.granularity.joiner())
    }

    /// Reconstruct the modified text from all equalities and additions.
    ///
    /// Exact under default options; with `ignore_case`/`ignore_whitespace`
    /// the equalities carry the original side's spelling.
    pub fn modified_text(&self) -> String {
        let tokens = self
            .ops
            .iter()
            .filter(|op| !matches!(op, EditOp::Removed { .. }))
            .map(EditOp::value)
            .collect::<Vec<_>>();

        tokens.join(self.granularity.joiner())
    }
}

impl<'a> IntoIterator for EditScript<'a> {
    type Item = EditOp<'a>;
    type IntoIter = std::vec::IntoIter<EditOp<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b EditScript<'a> {
    type Item = &'b EditOp<'a>;
    type IntoIter = std::slice::Iter<'b, EditOp<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

/// Read-only counts derived from an [`EditScript`].
///
/// `changes` is `min(additions, deletions)`, a display approximation of
/// "paired modifications" that does not attempt to match which removed line
/// corresponds to which added line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
    pub changes: usize,
}

/// The comparison engine: a caller-owned bag of options and the `compare`
/// family of entry points. Holds no state across calls; every comparison
/// allocates its own table and result list, so a single value can be shared
/// freely between threads.
pub struct LcsDiff {
    /// When true, tokens are folded to lowercase for comparison only;
    /// rendered values keep their original casing.
    ignore_case: bool,
    /// When true, tokens are trimmed and internal whitespace runs collapsed
    /// to a single space for comparison only.
    ignore_whitespace: bool,
    /// Ceiling on `m * n` table cells accepted by [`LcsDiff::compare_checked`].
    /// `None` disables the guard.
    max_cost: Option<usize>,
}

impl Default for LcsDiff {
    fn default() -> Self {
        Self {
            ignore_case: false,
            ignore_whitespace: false,
            max_cost: Some(25_000_000),
        }
    }
}

impl LcsDiff {
    fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Fold both sides to lowercase before comparison. Rendered values are
    /// never lowercased.
    ///
    /// Defaults to `false`
    pub fn set_ignore_case(&mut self, ignore_case: bool) {
        self.ignore_case = ignore_case;
    }

    fn ignore_whitespace(&self) -> bool {
        self.ignore_whitespace
    }

    /// Trim tokens and collapse internal whitespace runs to a single space
    /// before comparison. Rendered values keep their original whitespace.
    ///
    /// Defaults to `false`
    pub fn set_ignore_whitespace(&mut self, ignore_whitespace: bool) {
        self.ignore_whitespace = ignore_whitespace;
    }

    fn max_cost(&self) -> Option<usize> {
        self.max_cost
    }

    /// Ceiling on the `m * n` token product that [`LcsDiff::compare_checked`]
    /// will accept. The table is quadratic in tokens, so unguarded huge
    /// inputs exhaust time and memory.
    ///
    /// Defaults to `25_000_000` cells (e.g. 5000 x 5000 lines), `None`
    /// disables the check.
    pub fn set_max_cost(&mut self, max_cost: Option<usize>) {
        self.max_cost = max_cost;
    }
}

// Comparison internals
impl LcsDiff {
    // Comparison-only view of a token. Borrows when no option is set.
    fn normalize<'a>(&self, token: &'a str) -> Cow<'a, str> {
        let mut norm = Cow::Borrowed(token);

        if self.ignore_whitespace() {
            norm = Cow::Owned(norm.split_whitespace().collect::<Vec<_>>().join(" "));
        }

        if self.ignore_case() {
            norm = Cow::Owned(norm.to_lowercase());
        }

        norm
    }

    // Maps each token to the dense id of its normalized form, shared across
    // both sides so the table walk compares integers instead of strings.
    fn intern_side<'a>(
        &self,
        tokens: &[&'a str],
        table: &mut HashMap<Cow<'a, str>, u32>,
    ) -> Vec<u32> {
        tokens
            .iter()
            .map(|&token| {
                let next = table.len() as u32;
                *table.entry(self.normalize(token)).or_insert(next)
            })
            .collect()
    }

    // dp[i][j] = length of the LCS of old[0..i) and new[0..j), flattened
    // row-major with stride n + 1.
    fn lcs_table(old: &[u32], new: &[u32]) -> Vec<u32> {
        let (m, n) = (old.len(), new.len());
        let width = n + 1;
        let mut dp = vec![0u32; (m + 1) * width];

        for i in 1..=m {
            for j in 1..=n {
                dp[i * width + j] = if old[i - 1] == new[j - 1] {
                    dp[(i - 1) * width + (j - 1)] + 1
                } else {
                    dp[(i - 1) * width + j].max(dp[i * width + (j - 1)])
                };
            }
        }

        dp
    }

    // Walks the table from (m, n) back to (0, 0). Ops come out back-to-front
    // and are reversed once at the end.
    fn backtrack<'a>(
        old: &[&'a str],
        new: &[&'a str],
        old_ids: &[u32],
        new_ids: &[u32],
        dp: &[u32],
    ) -> Vec<EditOp<'a>> {
        let (mut i, mut j) = (old.len(), new.len());
        let width = new.len() + 1;

        let mut ops = Vec::with_capacity(old.len() + new.len());

        while i > 0 && j > 0 {
            if old_ids[i - 1] == new_ids[j - 1] {
                // Equalities render the original side's token
                ops.push(EditOp::equal(old[i - 1], i - 1, j - 1));
                i -= 1;
                j -= 1;
            } else if dp[(i - 1) * width + j] > dp[i * width + (j - 1)] {
                ops.push(EditOp::removed(old[i - 1], i - 1));
                i -= 1;
            } else {
                // Ties emit Added here, which puts removals before additions
                // in forward order once the list is reversed.
                ops.push(EditOp::added(new[j - 1], j - 1));
                j -= 1;
            }
        }

        while i > 0 {
            ops.push(EditOp::removed(old[i - 1], i - 1));
            i -= 1;
        }

        while j > 0 {
            ops.push(EditOp::added(new[j - 1], j - 1));
            j -= 1;
        }

        ops.reverse();
        ops
    }

    fn compare_tokens<'a>(
        &self,
        granularity: Granularity,
        old: &[&'a str],
        new: &[&'a str],
    ) -> EditScript<'a> {
        let mut table = HashMap::new();
        let old_ids = self.intern_side(old, &mut table);
        let new_ids = self.intern_side(new, &mut table);

        let dp = Self::lcs_table(&old_ids, &new_ids);
        let ops = Self::backtrack(old, new, &old_ids, &new_ids, &dp);

        EditScript { granularity, ops }
    }
}

// Public APIs
impl LcsDiff {
    /// Create a new instance of the engine with default settings
    /// # Example
    /// ```
    /// use lcs_diff_rs::LcsDiff;
    ///
    /// let mut ld = LcsDiff::new();
    /// // change some settings, e.g. treat `Hello` and `hello` as the same line
    /// ld.set_ignore_case(true);
    /// // do the diffing
    /// let script = ld.compare_lines("Hello\nWorld", "hello\nplanet");
    /// assert_eq!(script.stats().additions, 1);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the differences between two texts (original and modified) at the
    /// granularity selected by the tokenizer type parameter.
    ///
    /// Total over all inputs (empty strings included) and deterministic:
    /// identical inputs and options always produce an identical script. The
    /// script holds at most `m + n` ops for `m` original and `n` modified
    /// tokens. When two alignments score equally the removal is kept before
    /// the addition, so a single-line substitution reads as one remove/add
    /// pair.
    ///
    /// # Example
    /// ```
    /// use lcs_diff_rs::{tokenizer::Lines, LcsDiff, Op};
    ///
    /// let ld = LcsDiff::new();
    /// let script = ld.compare::<Lines>("a\nb\nc", "a\nx\nc");
    /// let ops = script.iter().map(|op| op.op()).collect::<Vec<_>>();
    /// assert_eq!(ops, [Op::Equal, Op::Removed, Op::Added, Op::Equal]);
    /// ```
    pub fn compare<'a, T: Tokenize>(&self, original: &'a str, modified: &'a str) -> EditScript<'a> {
        let old = T::tokenize(original);
        let new = T::tokenize(modified);

        self.compare_tokens(T::GRANULARITY, &old, &new)
    }

    /// [`LcsDiff::compare`] at line granularity.
    pub fn compare_lines<'a>(&self, original: &'a str, modified: &'a str) -> EditScript<'a> {
        self.compare::<Lines>(original, modified)
    }

    /// [`LcsDiff::compare`] at word granularity. Whitespace runs are tokens
    /// of their own, so scripts reassemble the exact input.
    pub fn compare_words<'a>(&self, original: &'a str, modified: &'a str) -> EditScript<'a> {
        self.compare::<Words>(original, modified)
    }

    /// [`LcsDiff::compare`] with the granularity picked at runtime.
    pub fn compare_at<'a>(
        &self,
        granularity: Granularity,
        original: &'a str,
        modified: &'a str,
    ) -> EditScript<'a> {
        match granularity {
            Granularity::Line => self.compare::<Lines>(original, modified),
            Granularity::Word => self.compare::<Words>(original, modified),
        }
    }

    /// Size-guarded [`LcsDiff::compare`]: measures token counts up front and
    /// refuses to build the quadratic table once `m * n` exceeds the
    /// configured ceiling, instead of hanging on pathological input.
    ///
    /// # Example
    /// ```
    /// use lcs_diff_rs::{tokenizer::Lines, Error, LcsDiff};
    ///
    /// let mut ld = LcsDiff::new();
    /// ld.set_max_cost(Some(4));
    /// let err = ld.compare_checked::<Lines>("a\nb\nc", "x\ny\nz").unwrap_err();
    /// assert_eq!(err, Error::InputTooLarge { cost: 9, limit: 4 });
    /// ```
    pub fn compare_checked<'a, T: Tokenize>(
        &self,
        original: &'a str,
        modified: &'a str,
    ) -> Result<EditScript<'a>, Error> {
        let old = T::tokenize(original);
        let new = T::tokenize(modified);

        if let Some(limit) = self.max_cost() {
            let cost = old.len().saturating_mul(new.len());
            if cost > limit {
                return Err(Error::InputTooLarge { cost, limit });
            }
        }

        Ok(self.compare_tokens(T::GRANULARITY, &old, &new))
    }
}

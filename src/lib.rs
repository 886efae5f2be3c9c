pub mod engine;
pub mod errors;
pub mod fuzz;
pub mod inline;
pub mod render;
pub mod tokenizer;

pub use engine::{DiffStats, EditOp, EditScript, LcsDiff, Op};
pub use errors::Error;
pub use inline::{InlineChange, Segment};
pub use render::{Cell, SplitRow, UnifiedRow};
pub use tokenizer::{Granularity, Lines, Tokenize, Words};

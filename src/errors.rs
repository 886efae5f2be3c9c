use thiserror::Error;

/// Errors surfaced by the size-guarded entry points. The unguarded
/// comparisons are total over all string inputs and never construct one of
/// these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The comparison table would need `cost` cells, over the configured
    /// ceiling. Quadratic time and space make unbounded inputs a hang, not
    /// a crash, so the guard refuses up front.
    #[error("input too large to diff: {cost} table cells over the {limit} ceiling")]
    InputTooLarge { cost: usize, limit: usize },
}

//! Subsequence automata with default transitions (SAD).
//!
//! For a fixed reference string S, a subsequence automaton decides whether an
//! arbitrary query string is a subsequence of S (its characters appear in S
//! in order, not necessarily contiguously). This crate builds three variants
//! of that machine, trading table size against per-character query delay:
//!
//! - [`general`] -- fully explicit table, no defaults: O(n·σ) edges, delay 1
//! - [`leveled`] -- level/default scheme with base k: O(n·log_k σ) edges,
//!   delay O(log_k σ)
//! - [`alphabet_aware`] -- base-2 levels with a span-based dense/sparse
//!   decision per state: O(n·log σ) edges, delay O(log σ)
//!
//! Supporting modules:
//!
//! - [`alphabet`] -- the symbol set Σ
//! - [`level`] -- per-state level assignment and the `Lmax` cap
//! - [`table`] -- transition-table representation and the shared backward
//!   construction pass
//! - [`eval`] -- the default-transition-following acceptance procedure
//! - [`stats`] -- size/shape statistics over a built table
//!
//! States are `0..=n` where state `s` means "matched a subsequence ending at
//! or before position s" (positions are 1-indexed). Every table is built once
//! from `(alphabet, string[, k])` and is immutable afterwards, so `&self`
//! queries are safe from any number of threads.

pub mod alphabet;
pub mod alphabet_aware;
pub mod eval;
pub mod general;
pub mod level;
pub mod leveled;
pub mod stats;
pub mod table;

pub use alphabet::Alphabet;
pub use alphabet_aware::AlphabetAwareAutomaton;
pub use general::GeneralAutomaton;
pub use leveled::LevelAutomaton;
pub use stats::AutomatonStats;
pub use table::{StateEntry, TransitionTable};

/// Error type for automaton construction.
///
/// Raised only while building; queries and statistics never fail. An invalid
/// parameter is fatal to that construction attempt and not retried (all
/// operations are deterministic, so retrying with the same input is
/// meaningless).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// The level base k must be at least 2; k = 0 or 1 would make the level
    /// exponents degenerate.
    #[error("level base must be at least 2, got {k}")]
    InvalidBase { k: usize },
    /// The alphabet has no symbols.
    #[error("alphabet is empty")]
    EmptyAlphabet,
}

/// Common interface of the automaton family.
///
/// Each variant owns its alphabet and built transition table; `accepts` and
/// `stats` are provided methods so every variant shares one evaluator and one
/// canonical statistics computation.
pub trait SubsequenceAutomaton {
    /// The built transition table (index = state id, `0..=n`).
    fn table(&self) -> &TransitionTable;

    /// The alphabet Σ the automaton was built over.
    fn alphabet(&self) -> &Alphabet;

    /// Decide whether `query` is accepted.
    ///
    /// A symbol outside Σ rejects immediately; the empty query is always
    /// accepted. Each query symbol follows at most `Lmax + 1` transitions
    /// (explicit or default) before matching or rejecting.
    fn accepts(&self, query: &str) -> bool {
        eval::accepts(self.table(), self.alphabet(), query)
    }

    /// Derive size/shape statistics for the built table.
    fn stats(&self) -> AutomatonStats {
        AutomatonStats::from_table(self.table(), self.alphabet().len())
    }
}

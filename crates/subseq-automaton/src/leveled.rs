// Level-k subsequence automaton with default transitions.

use crate::alphabet::Alphabet;
use crate::level::Levels;
use crate::table::{self, InclusionPolicy, StateContext, StateEntry, TransitionTable};
use crate::{BuildError, SubsequenceAutomaton};

/// The parameterized level/default construction: states carry levels derived
/// from base k, each state falls back to the nearest strictly-higher-level
/// state, and explicit transitions are only materialized up to that fallback
/// boundary. O(n·log_k σ) edges, at most `Lmax + 1` hops per query symbol.
///
/// This family never materializes a transition into the terminal state
/// (the `pos < n` bound below). The consequence is deliberate and kept: a
/// query whose only completion uses the final position of the reference
/// string is rejected, i.e. the accepted language is the subsequences of the
/// reference string without its last position.
#[derive(Debug, Clone)]
pub struct LevelAutomaton {
    alphabet: Alphabet,
    table: TransitionTable,
    k: usize,
}

/// Record symbols occurring at or before the fallback boundary, excluding
/// the terminal state.
struct BoundedByNextLevel;

impl InclusionPolicy for BoundedByNextLevel {
    fn record(&self, cx: &StateContext<'_>, entry: &mut StateEntry) {
        for (&c, &pos) in cx.nearest_char {
            if pos <= cx.next_level_state && pos < cx.n {
                entry.transitions.insert(c, pos);
            }
        }
    }
}

impl LevelAutomaton {
    /// Build the automaton for `text` over `alphabet` with level base `k`.
    ///
    /// Fails with [`BuildError::InvalidBase`] for k ≤ 1 and
    /// [`BuildError::EmptyAlphabet`] for an empty alphabet.
    pub fn new(alphabet: Alphabet, text: &str, k: usize) -> Result<Self, BuildError> {
        let chars: Vec<char> = text.chars().collect();
        let levels = Levels::assign(chars.len(), alphabet.len(), k)?;
        let table = table::build(&alphabet, &chars, &levels, &BoundedByNextLevel);
        Ok(Self { alphabet, table, k })
    }

    /// The level base this automaton was built with.
    pub fn base(&self) -> usize {
        self.k
    }
}

impl SubsequenceAutomaton for LevelAutomaton {
    fn table(&self) -> &TransitionTable {
        &self.table
    }

    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

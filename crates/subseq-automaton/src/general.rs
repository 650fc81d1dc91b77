// General subsequence automaton: the size/delay baseline.

use crate::alphabet::Alphabet;
use crate::level::Levels;
use crate::table::{self, InclusionPolicy, StateContext, StateEntry, TransitionTable};
use crate::{BuildError, SubsequenceAutomaton};

/// The classic subsequence automaton: for every state s and symbol c, an
/// explicit transition to the nearest occurrence of c after s. No levels, no
/// defaults: O(n·σ) edges, exactly one transition per query symbol.
///
/// Equivalent to the leveled construction with all-zero levels and an
/// "always include" policy; the terminal state is a sink.
#[derive(Debug, Clone)]
pub struct GeneralAutomaton {
    alphabet: Alphabet,
    table: TransitionTable,
}

/// Record every symbol with a known occurrence.
struct IncludeAll;

impl InclusionPolicy for IncludeAll {
    fn record(&self, cx: &StateContext<'_>, entry: &mut StateEntry) {
        for (&c, &pos) in cx.nearest_char {
            entry.transitions.insert(c, pos);
        }
    }
}

impl GeneralAutomaton {
    /// Build the automaton for `text` over `alphabet`.
    pub fn new(alphabet: Alphabet, text: &str) -> Result<Self, BuildError> {
        if alphabet.is_empty() {
            return Err(BuildError::EmptyAlphabet);
        }
        let chars: Vec<char> = text.chars().collect();
        let levels = Levels::zero(chars.len());
        let table = table::build(&alphabet, &chars, &levels, &IncludeAll);
        Ok(Self { alphabet, table })
    }
}

impl SubsequenceAutomaton for GeneralAutomaton {
    fn table(&self) -> &TransitionTable {
        &self.table
    }

    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

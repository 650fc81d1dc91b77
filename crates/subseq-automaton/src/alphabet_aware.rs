// Alphabet-aware level automaton: base-2 levels with a span-based
// dense/sparse decision per state.

use crate::alphabet::Alphabet;
use crate::level::Levels;
use crate::table::{self, InclusionPolicy, StateContext, StateEntry, TransitionTable};
use crate::{BuildError, SubsequenceAutomaton};

/// The alphabet-aware construction: levels are fixed to base 2, and each
/// state chooses its transition representation by the span to its fallback
/// state. When the span is at least σ, the fallback is far enough away that
/// materializing a transition for every alphabet symbol is cheaper than
/// funneling queries through the default chain (dense); otherwise only the
/// symbols with a recorded occurrence are considered (sparse). The table
/// never exceeds O(n·log σ) edges and delay stays O(log σ).
///
/// Unlike [`LevelAutomaton`](crate::LevelAutomaton), this family does
/// materialize transitions into the terminal state.
#[derive(Debug, Clone)]
pub struct AlphabetAwareAutomaton {
    alphabet: Alphabet,
    table: TransitionTable,
}

/// Dense (whole-alphabet) or sparse (recorded occurrences) recording,
/// decided by the span to the fallback state.
struct SpanAdaptive;

impl InclusionPolicy for SpanAdaptive {
    fn record(&self, cx: &StateContext<'_>, entry: &mut StateEntry) {
        let span = cx.next_level_state - cx.state;
        if span >= cx.alphabet.len() {
            for c in cx.alphabet.iter() {
                if let Some(&pos) = cx.nearest_char.get(&c) {
                    if pos <= cx.next_level_state {
                        entry.transitions.insert(c, pos);
                    }
                }
            }
        } else {
            for (&c, &pos) in cx.nearest_char {
                if pos <= cx.next_level_state {
                    entry.transitions.insert(c, pos);
                }
            }
        }
    }
}

impl AlphabetAwareAutomaton {
    /// Build the automaton for `text` over `alphabet` (level base fixed
    /// at 2).
    pub fn new(alphabet: Alphabet, text: &str) -> Result<Self, BuildError> {
        let chars: Vec<char> = text.chars().collect();
        let levels = Levels::assign(chars.len(), alphabet.len(), 2)?;
        let table = table::build(&alphabet, &chars, &levels, &SpanAdaptive);
        Ok(Self { alphabet, table })
    }
}

impl SubsequenceAutomaton for AlphabetAwareAutomaton {
    fn table(&self) -> &TransitionTable {
        &self.table
    }

    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

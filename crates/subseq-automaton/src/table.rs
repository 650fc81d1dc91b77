// Transition table representation and the shared backward construction pass.
//
// All three automaton variants are built by the same pass over states n..=0;
// they differ only in which explicit character transitions they record. That
// choice is factored out into the `InclusionPolicy` trait so the backward
// scan, the default-transition placement and the nearest-occurrence trackers
// exist exactly once.

use hashbrown::HashMap;

use crate::alphabet::Alphabet;
use crate::level::Levels;

/// One state's outgoing transitions.
///
/// Explicit transitions map a symbol to a strictly greater destination state.
/// The optional default transition points to the nearest state of strictly
/// higher level; following it repeatedly is how the sparse variants recover
/// transitions they chose not to materialize.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateEntry {
    pub(crate) transitions: HashMap<char, usize>,
    pub(crate) default: Option<usize>,
}

impl StateEntry {
    /// The explicit destination for `c`, if one was materialized.
    pub fn transition(&self, c: char) -> Option<usize> {
        self.transitions.get(&c).copied()
    }

    /// The default-transition target, if this state has one.
    pub fn default_target(&self) -> Option<usize> {
        self.default
    }

    /// Iterate the explicit transitions in arbitrary order.
    pub fn transitions(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.transitions.iter().map(|(&c, &t)| (c, t))
    }

    /// Total entries at this state: explicit transitions plus the default
    /// (if present).
    pub fn len(&self) -> usize {
        self.transitions.len() + usize::from(self.default.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A built transition table: one [`StateEntry`] per state, index = state id.
///
/// Immutable after construction; shared read-only access needs no
/// synchronization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionTable {
    states: Vec<StateEntry>,
}

impl TransitionTable {
    /// Number of states (n + 1 for a reference string of length n).
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// The entry for state `s`.
    ///
    /// # Panics
    /// Panics if `s` is out of range.
    pub fn state(&self, s: usize) -> &StateEntry {
        &self.states[s]
    }

    /// Iterate all state entries in state order.
    pub fn iter(&self) -> impl Iterator<Item = &StateEntry> {
        self.states.iter()
    }
}

/// Construction-time view of the state currently being processed, handed to
/// the inclusion policy.
pub(crate) struct StateContext<'a> {
    /// The state index being processed.
    pub state: usize,
    /// Smallest state > `state` with strictly higher level; `n + 1` = none.
    pub next_level_state: usize,
    /// Length of the reference string (terminal state id).
    pub n: usize,
    /// The alphabet Σ.
    pub alphabet: &'a Alphabet,
    /// Nearest occurrence of each symbol strictly after `state`, as a state
    /// index in `1..=n`. Symbols with no remaining occurrence are absent.
    pub nearest_char: &'a HashMap<char, usize>,
}

/// Decides, per state, which explicit character transitions to record.
pub(crate) trait InclusionPolicy {
    fn record(&self, cx: &StateContext<'_>, entry: &mut StateEntry);
}

/// The shared backward pass.
///
/// For `s` from n down to 0: find the nearest higher-level state, record the
/// default transition if one exists, let the policy record explicit
/// transitions, then fold state `s` into the nearest-occurrence trackers for
/// the next (lower) state. The trackers are working state only and are
/// dropped when the pass finishes.
pub(crate) fn build<P: InclusionPolicy>(
    alphabet: &Alphabet,
    text: &[char],
    levels: &Levels,
    policy: &P,
) -> TransitionTable {
    let n = text.len();
    let lmax = levels.max();

    // nearest_level[l] = smallest state > s with level l; n + 1 = none yet.
    let mut nearest_level = vec![n + 1; lmax + 1];
    let mut nearest_char: HashMap<char, usize> = HashMap::new();

    let mut states = Vec::with_capacity(n + 1);
    for s in (0..=n).rev() {
        let lvl = levels.get(s);

        let mut next_level_state = n + 1;
        for l in (lvl + 1)..=lmax {
            if nearest_level[l] < next_level_state {
                next_level_state = nearest_level[l];
            }
        }

        let mut entry = StateEntry::default();
        if next_level_state <= n {
            entry.default = Some(next_level_state);
        }

        policy.record(
            &StateContext {
                state: s,
                next_level_state,
                n,
                alphabet,
                nearest_char: &nearest_char,
            },
            &mut entry,
        );
        states.push(entry);

        nearest_level[lvl] = s;
        if s > 0 {
            // State s carries the symbol at (1-indexed) position s.
            nearest_char.insert(text[s - 1], s);
        }
    }

    // The pass ran n..=0; flip so that index = state id.
    states.reverse();
    TransitionTable { states }
}

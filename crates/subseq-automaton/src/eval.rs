// Default-transition-following acceptance.
//
// Shared by every variant: the table shape differs, the procedure does not.

use crate::alphabet::Alphabet;
use crate::table::TransitionTable;

/// Run `query` against a built table.
///
/// Per query symbol: reject immediately if the symbol is outside Σ; otherwise
/// take the explicit transition if one is materialized, else follow the
/// default transition and retry the same symbol, else reject. Accept once all
/// symbols are consumed (the empty query is always accepted).
///
/// The inner loop terminates: every default hop strictly increases the
/// current state's level, and levels are capped at Lmax, so a single symbol
/// follows at most Lmax + 1 transitions.
pub fn accepts(table: &TransitionTable, alphabet: &Alphabet, query: &str) -> bool {
    let mut state = 0usize;

    for c in query.chars() {
        if !alphabet.contains(c) {
            return false;
        }

        loop {
            let entry = table.state(state);
            if let Some(next) = entry.transition(c) {
                state = next;
                break;
            }
            match entry.default_target() {
                Some(next) => state = next,
                None => return false,
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SubsequenceAutomaton;
    use crate::general::GeneralAutomaton;
    use crate::leveled::LevelAutomaton;

    #[test]
    fn empty_query_is_always_accepted() {
        let a = GeneralAutomaton::new(Alphabet::from_text("abc"), "abc").unwrap();
        assert!(a.accepts(""));
    }

    #[test]
    fn out_of_alphabet_symbol_rejects() {
        let a = GeneralAutomaton::new(Alphabet::from_text("abc"), "abc").unwrap();
        assert!(!a.accepts("z"));
        assert!(!a.accepts("az"));
    }

    #[test]
    fn general_scenario_from_aba() {
        let a = GeneralAutomaton::new(Alphabet::from_text("aba"), "aba").unwrap();
        assert!(a.accepts("ab"));
        assert!(a.accepts("aa"));
        assert!(a.accepts("ba"));
        assert!(!a.accepts("bb"));
    }

    #[test]
    fn defaults_are_followed_until_a_match() {
        // S = "abab", k = 2: state 0 has no explicit 'b' in the leveled
        // table for some shapes; acceptance must still find it through the
        // default chain when the occurrence is below the terminal state.
        let a = LevelAutomaton::new(Alphabet::from_text("ababa"), "ababa", 2).unwrap();
        assert!(a.accepts("b"));
        assert!(a.accepts("ab"));
        assert!(a.accepts("ba"));
        assert!(!a.accepts("bbb"));
    }

    #[test]
    fn dead_end_without_default_rejects() {
        // In the general table the terminal state is a sink: anything beyond
        // a full match rejects.
        let a = GeneralAutomaton::new(Alphabet::from_text("ab"), "ab").unwrap();
        assert!(a.accepts("ab"));
        assert!(!a.accepts("aba"));
    }
}

// Alphabet: the symbol set Σ an automaton is built over.

use hashbrown::HashSet;

/// The alphabet Σ.
///
/// Usually derived from the reference string itself ([`Alphabet::from_text`]),
/// but a larger explicit set is allowed: symbols without any occurrence in the
/// string simply never gain a transition and reject at query time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    symbols: HashSet<char>,
}

impl Alphabet {
    /// Build an alphabet from an explicit set of symbols.
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    /// Derive the alphabet as the set of distinct characters of `text`.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.chars())
    }

    /// σ = |Σ|.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// Iterate the symbols in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self::new(iter)
    }
}

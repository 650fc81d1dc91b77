// Size/shape statistics over a built transition table.

use std::fmt;

use crate::table::TransitionTable;

/// Read-only statistics snapshot for a built automaton.
///
/// Derived once from the table; identical computation for every variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutomatonStats {
    /// Number of states.
    pub vertex_count: usize,
    /// Number of transitions, default and explicit counted together.
    pub edge_count: usize,
    /// Number of default transitions (at most one per state).
    pub default_transitions: usize,
    /// Number of explicit (per-symbol) transitions.
    pub explicit_transitions: usize,
    /// `default_transitions / edge_count`; defined as 0.0 when the table has
    /// no edges.
    pub default_ratio: f64,
    /// `explicit_transitions / edge_count`; defined as 0.0 when the table
    /// has no edges.
    pub explicit_ratio: f64,
    /// Fraction of transitions saved relative to the fully explicit
    /// automaton over the same states, `1 - edge_count / (vertex_count · σ)`;
    /// defined as 0.0 when σ = 0 or the table has no states.
    pub saved_against_full: f64,
}

impl AutomatonStats {
    /// Derive statistics from a built table and the alphabet size σ.
    pub fn from_table(table: &TransitionTable, sigma: usize) -> Self {
        let vertex_count = table.state_count();
        let mut edge_count = 0;
        let mut default_transitions = 0;

        for entry in table.iter() {
            edge_count += entry.len();
            if entry.default_target().is_some() {
                default_transitions += 1;
            }
        }
        let explicit_transitions = edge_count - default_transitions;

        let (default_ratio, explicit_ratio) = if edge_count == 0 {
            (0.0, 0.0)
        } else {
            (
                default_transitions as f64 / edge_count as f64,
                explicit_transitions as f64 / edge_count as f64,
            )
        };

        let full = vertex_count * sigma;
        let saved_against_full = if full == 0 {
            0.0
        } else {
            1.0 - edge_count as f64 / full as f64
        };

        Self {
            vertex_count,
            edge_count,
            default_transitions,
            explicit_transitions,
            default_ratio,
            explicit_ratio,
            saved_against_full,
        }
    }
}

/// Group an integer by thousands with a space separator: 1234567 -> "1 234 567".
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Format a ratio as a percentage with at most 4 decimal places, trimming
/// trailing zeros and a dangling decimal point: 0.375 -> "37.5%".
fn percent(ratio: f64) -> String {
    let s = format!("{:.4}", ratio * 100.0);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    format!("{s}%")
}

impl fmt::Display for AutomatonStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Vertex count (no. of states):       {}",
            group_thousands(self.vertex_count)
        )?;
        writeln!(
            f,
            "Edge count (no. of transitions):    {}",
            group_thousands(self.edge_count)
        )?;
        writeln!(
            f,
            "Default transitions:                {}",
            group_thousands(self.default_transitions)
        )?;
        writeln!(
            f,
            "Explicit transitions:               {}",
            group_thousands(self.explicit_transitions)
        )?;
        writeln!(f, "Default ratio:                      {}", percent(self.default_ratio))?;
        writeln!(f, "Explicit ratio:                     {}", percent(self.explicit_ratio))?;
        write!(
            f,
            "Saved against full automaton:       {}",
            percent(self.saved_against_full)
        )
    }
}

// subseq-cli: shared utilities for the CLI tools.
//
// Covers the collaborators around the automaton core: loading the reference
// text, sampling guaranteed-valid and guaranteed-invalid queries for
// demonstration, and the usual flag-parsing helpers.

use std::process;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use subseq_automaton::Alphabet;

/// Length of generated invalid queries.
const INVALID_QUERY_LEN: usize = 5;

/// Read an entire UTF-8 text file, trimming surrounding whitespace.
pub fn read_text_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .map_err(|e| format!("failed to read {path}: {e}"))
}

/// Seedable sampler for demonstration queries.
///
/// The randomness source is injected (a fixed seed reproduces the exact same
/// samples); nothing here touches process-global random state.
pub struct QuerySampler {
    rng: StdRng,
}

impl QuerySampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A guaranteed-valid query: up to `max_len` distinct positions of
    /// `text`, chosen uniformly and concatenated in increasing order, which
    /// is a subsequence by construction.
    pub fn valid_query(&mut self, text: &str, max_len: usize) -> String {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return String::new();
        }
        let amount = max_len.min(chars.len());
        let mut indices = rand::seq::index::sample(&mut self.rng, chars.len(), amount).into_vec();
        indices.sort_unstable();
        indices.into_iter().map(|i| chars[i]).collect()
    }

    /// A guaranteed-invalid query.
    ///
    /// Prefers lowercase ASCII letters outside Σ (rejected by the alphabet
    /// check); if Σ covers all of them, repeats one in-alphabet symbol more
    /// times than it occurs in `text` (an impossible repetition).
    pub fn invalid_query(&mut self, text: &str, alphabet: &Alphabet) -> String {
        let missing: Vec<char> = ('a'..='z').filter(|&c| !alphabet.contains(c)).collect();
        if !missing.is_empty() {
            return (0..INVALID_QUERY_LEN)
                .map(|_| missing[self.rng.gen_range(0..missing.len())])
                .collect();
        }

        let symbols: Vec<char> = alphabet.iter().collect();
        let c = symbols[self.rng.gen_range(0..symbols.len())];
        let occurrences = text.chars().filter(|&t| t == c).count();
        std::iter::repeat_n(c, occurrences + 3).collect()
    }
}

/// Extract a `--flag VALUE` / `--flag=VALUE` / short-form argument pair.
///
/// Returns `(value, remaining_args)`.
pub fn parse_value_flag(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let prefixed = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(v) = arg.strip_prefix(&prefixed) {
            value = Some(v.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two-pointer subsequence check, for validating the sampler.
    fn is_subsequence(query: &str, text: &str) -> bool {
        let mut text_chars = text.chars();
        query.chars().all(|q| text_chars.by_ref().any(|t| t == q))
    }

    #[test]
    fn valid_queries_are_subsequences() {
        let text = "the rain in spain stays mainly in the plain";
        let mut sampler = QuerySampler::new(7);
        for _ in 0..50 {
            let q = sampler.valid_query(text, 10);
            assert!(is_subsequence(&q, text), "{q:?}");
            assert!(q.chars().count() <= 10);
        }
    }

    #[test]
    fn valid_query_caps_at_text_length() {
        let mut sampler = QuerySampler::new(1);
        let q = sampler.valid_query("abc", 100);
        assert_eq!(q, "abc");
    }

    #[test]
    fn valid_query_of_empty_text_is_empty() {
        let mut sampler = QuerySampler::new(1);
        assert_eq!(sampler.valid_query("", 5), "");
    }

    #[test]
    fn invalid_queries_are_never_subsequences() {
        let text = "abracadabra";
        let alphabet = Alphabet::from_text(text);
        let mut sampler = QuerySampler::new(99);
        for _ in 0..50 {
            let q = sampler.invalid_query(text, &alphabet);
            assert!(!is_subsequence(&q, text), "{q:?}");
        }
    }

    #[test]
    fn invalid_query_uses_out_of_alphabet_letters_when_available() {
        let alphabet = Alphabet::from_text("ab");
        let mut sampler = QuerySampler::new(3);
        let q = sampler.invalid_query("ab", &alphabet);
        assert_eq!(q.chars().count(), INVALID_QUERY_LEN);
        assert!(q.chars().all(|c| !alphabet.contains(c)));
    }

    #[test]
    fn invalid_query_falls_back_to_impossible_repetition() {
        let text: String = ('a'..='z').collect();
        let alphabet = Alphabet::from_text(&text);
        let mut sampler = QuerySampler::new(11);
        let q = sampler.invalid_query(&text, &alphabet);
        // Every letter occurs once; the repetition asks for four.
        assert_eq!(q.chars().count(), 4);
        let first = q.chars().next().unwrap();
        assert!(q.chars().all(|c| c == first));
    }

    #[test]
    fn sampler_is_reproducible() {
        let text = "deterministic sampling";
        let a = QuerySampler::new(42).valid_query(text, 8);
        let b = QuerySampler::new(42).valid_query(text, 8);
        assert_eq!(a, b);
    }

    #[test]
    fn parse_value_flag_forms() {
        let args: Vec<String> = ["--seed=9", "file.txt"].iter().map(|s| s.to_string()).collect();
        let (v, rest) = parse_value_flag(&args, "--seed", "-s");
        assert_eq!(v.as_deref(), Some("9"));
        assert_eq!(rest, vec!["file.txt".to_string()]);

        let args: Vec<String> = ["-s", "9", "file.txt"].iter().map(|s| s.to_string()).collect();
        let (v, rest) = parse_value_flag(&args, "--seed", "-s");
        assert_eq!(v.as_deref(), Some("9"));
        assert_eq!(rest, vec!["file.txt".to_string()]);

        let args: Vec<String> = vec!["file.txt".to_string()];
        let (v, rest) = parse_value_flag(&args, "--seed", "-s");
        assert_eq!(v, None);
        assert_eq!(rest, vec!["file.txt".to_string()]);
    }
}

// subseq-report: build the subsequence automaton family over a text file
// and report size statistics and sample acceptance results.
//
// Usage:
//   subseq-report [OPTIONS] <input.txt>
//
// Options:
//   --seed N     Sampler seed (default: fixed, runs are reproducible)
//   --length N   Maximum valid-sample length (default: n/3, at least 1)
//   -h, --help   Print help

use subseq_automaton::{
    Alphabet, AlphabetAwareAutomaton, GeneralAutomaton, LevelAutomaton, SubsequenceAutomaton,
};

const DEFAULT_SEED: u64 = 0x5EED;
const SEPARATOR: &str = "===================================================";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if subseq_cli::wants_help(&args) {
        println!("subseq-report: build subsequence automata over a text file.");
        println!();
        println!("Usage: subseq-report [OPTIONS] <input.txt>");
        println!();
        println!("Reads the file as the reference string, builds the general,");
        println!("level-k (k = 2, 3, 5, 50) and alphabet-aware automata, then");
        println!("prints size statistics and acceptance of one sampled valid");
        println!("and one sampled invalid query.");
        println!();
        println!("Options:");
        println!("  --seed N     Sampler seed (default: {DEFAULT_SEED})");
        println!("  --length N   Maximum valid-sample length (default: n/3)");
        println!("  -h, --help   Print this help");
        return;
    }

    let (seed, args) = subseq_cli::parse_value_flag(&args, "--seed", "-s");
    let (length, args) = subseq_cli::parse_value_flag(&args, "--length", "-l");

    let seed: u64 = match seed {
        Some(s) => s
            .parse()
            .unwrap_or_else(|_| subseq_cli::fatal(&format!("invalid seed: {s}"))),
        None => DEFAULT_SEED,
    };
    let length: Option<usize> = length.map(|s| {
        s.parse()
            .unwrap_or_else(|_| subseq_cli::fatal(&format!("invalid length: {s}")))
    });

    let [path] = args.as_slice() else {
        eprintln!("Usage: subseq-report [OPTIONS] <input.txt>");
        std::process::exit(1);
    };

    let text = subseq_cli::read_text_file(path).unwrap_or_else(|e| subseq_cli::fatal(&e));
    if text.is_empty() {
        subseq_cli::fatal("input file is empty");
    }

    let n = text.chars().count();
    let alphabet = Alphabet::from_text(&text);
    let max_len = length.unwrap_or_else(|| (n / 3).max(1));

    let mut sampler = subseq_cli::QuerySampler::new(seed);
    let valid = sampler.valid_query(&text, max_len);
    let invalid = sampler.invalid_query(&text, &alphabet);

    println!("{SEPARATOR}");
    println!("Loaded text statistics");
    println!("---------------------------------------------------");
    println!("Original string length: {n}");
    println!("Alphabet size: {}", alphabet.len());
    println!("Valid subsequence   : {valid}");
    println!("Invalid subsequence : {invalid}");
    println!("{SEPARATOR}");
    println!();

    let automata: Vec<(&str, Box<dyn SubsequenceAutomaton>)> = vec![
        ("General Automaton (SA)", build(GeneralAutomaton::new(alphabet.clone(), &text))),
        ("Level Automaton (k=2)", build(LevelAutomaton::new(alphabet.clone(), &text, 2))),
        ("Level Automaton (k=3)", build(LevelAutomaton::new(alphabet.clone(), &text, 3))),
        ("Level Automaton (k=5)", build(LevelAutomaton::new(alphabet.clone(), &text, 5))),
        ("Level Automaton (k=50)", build(LevelAutomaton::new(alphabet.clone(), &text, 50))),
        (
            "Alphabet-Aware Level Automaton",
            build(AlphabetAwareAutomaton::new(alphabet.clone(), &text)),
        ),
    ];

    for (name, automaton) in &automata {
        println!("{name}");
        println!("{}", automaton.stats());
        println!("Valid subsequence accepted?    {}", automaton.accepts(&valid));
        println!("Invalid subsequence accepted?  {}", automaton.accepts(&invalid));
        println!("{SEPARATOR}");
        println!();
    }
}

/// Unwrap a construction result into a trait object, aborting on error.
fn build<A>(result: Result<A, subseq_automaton::BuildError>) -> Box<dyn SubsequenceAutomaton>
where
    A: SubsequenceAutomaton + 'static,
{
    match result {
        Ok(a) => Box::new(a),
        Err(e) => subseq_cli::fatal(&e.to_string()),
    }
}

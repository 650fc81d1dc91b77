// Quick walkthrough: build the three variants over a short string and
// compare their table shapes and verdicts.

use subseq_automaton::{
    Alphabet, AlphabetAwareAutomaton, GeneralAutomaton, LevelAutomaton, SubsequenceAutomaton,
};

fn main() {
    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "mississippi".to_string());
    let alphabet = Alphabet::from_text(&text);
    println!("reference: {:?} (sigma = {})\n", text, alphabet.len());

    let automata: Vec<(&str, Box<dyn SubsequenceAutomaton>)> = vec![
        (
            "general",
            Box::new(GeneralAutomaton::new(alphabet.clone(), &text).expect("general")),
        ),
        (
            "level k=2",
            Box::new(LevelAutomaton::new(alphabet.clone(), &text, 2).expect("level k=2")),
        ),
        (
            "alphabet-aware",
            Box::new(AlphabetAwareAutomaton::new(alphabet.clone(), &text).expect("alphabet-aware")),
        ),
    ];

    let queries = ["", "miss", "sip", "psi", "pip", "xyz"];

    for (name, automaton) in &automata {
        println!("== {name}");
        println!("{}", automaton.stats());
        for q in &queries {
            println!("accepts({q:?}) = {}", automaton.accepts(q));
        }
        println!();
    }
}

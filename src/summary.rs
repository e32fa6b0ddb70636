//! Fallback step summaries.
//!
//! Best-effort sentence built from a step heading when no
//! DOC_STEP_SUMMARY was written. Only the leading verb is conjugated,
//! from a fixed table; anything else reads "This step covers ...".

/// Imperative verb → third person singular.
const VERBS: &[(&str, &str)] = &[
    ("add", "adds"),
    ("build", "builds"),
    ("calculate", "calculates"),
    ("call", "calls"),
    ("check", "checks"),
    ("compute", "computes"),
    ("configure", "configures"),
    ("create", "creates"),
    ("define", "defines"),
    ("display", "displays"),
    ("fetch", "fetches"),
    ("filter", "filters"),
    ("generate", "generates"),
    ("get", "gets"),
    ("handle", "handles"),
    ("import", "imports"),
    ("initialize", "initializes"),
    ("load", "loads"),
    ("parse", "parses"),
    ("print", "prints"),
    ("process", "processes"),
    ("read", "reads"),
    ("return", "returns"),
    ("run", "runs"),
    ("save", "saves"),
    ("send", "sends"),
    ("set", "sets"),
    ("show", "shows"),
    ("square", "squares"),
    ("transform", "transforms"),
    ("use", "uses"),
    ("write", "writes"),
];

fn conjugate(word: &str) -> Option<&'static str> {
    VERBS
        .iter()
        .find(|(verb, _)| *verb == word)
        .map(|(_, third)| *third)
}

/// One-sentence description of a step from its cleaned heading.
pub fn fallback_summary(heading: &str) -> String {
    let phrase = heading
        .trim()
        .trim_end_matches(['.', ':', ';', '!'])
        .to_lowercase();
    let mut words = phrase.split_whitespace();

    let Some(first) = words.next() else {
        return "This step.".to_string();
    };
    let rest: Vec<&str> = words.collect();

    match conjugate(first) {
        Some(verb) if rest.is_empty() => format!("This step {verb}."),
        Some(verb) => format!("This step {verb} {}.", rest.join(" ")),
        None => {
            let all: Vec<&str> = std::iter::once(first).chain(rest).collect();
            format!("This step covers {}.", all.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_table() {
        let cases = [
            ("Define Fibonacci Function", "This step defines fibonacci function."),
            ("Print First 10 Fibonacci Numbers", "This step prints first 10 fibonacci numbers."),
            ("Filter Even Numbers", "This step filters even numbers."),
            ("Square the Even Numbers", "This step squares the even numbers."),
            ("Process records", "This step processes records."),
            ("fetch the page", "This step fetches the page."),
            ("IMPORT LIBRARIES", "This step imports libraries."),
            ("Run", "This step runs."),
        ];
        for (heading, expected) in cases {
            assert_eq!(fallback_summary(heading), expected, "heading: {heading}");
        }
    }

    #[test]
    fn non_verb_headings() {
        let cases = [
            ("Input Data", "This step covers input data."),
            ("Results", "This step covers results."),
            ("Setup:", "This step covers setup."),
        ];
        for (heading, expected) in cases {
            assert_eq!(fallback_summary(heading), expected, "heading: {heading}");
        }
    }

    #[test]
    fn collapses_whitespace_and_trailing_punctuation() {
        assert_eq!(
            fallback_summary("  Load   the  file. "),
            "This step loads the file."
        );
    }

    #[test]
    fn empty_heading() {
        assert_eq!(fallback_summary("   "), "This step.");
    }
}

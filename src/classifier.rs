//! Keyword-table subject inference for flashcard questions.
//!
//! [`classify`] maps free question text onto a closed set of subject labels. The
//! function is pure and total: the same text always yields the same label, and
//! every input — including empty or whitespace-only strings — yields *some*
//! label.
//!
//! Matching is whole-token: the question is lowercased and split on every
//! non-alphanumeric character, so `"Newton's"` produces the tokens `newton` and
//! `s`, and a subject scores one point for each input token that equals one of
//! its keywords exactly. Substrings never match (`ion` does not hit `motion`).
//! The subject with the strictly highest score wins. Ties at the highest
//! nonzero score resolve to the subject declared earliest in [`SUBJECT_TABLE`],
//! keeping results reproducible across runs. A zero score falls back to
//! `"General"`.

/// Label returned when no subject keyword matches the question text.
const FALLBACK_LABEL: &str = "General";

/// Subjects in tie-break priority order, each with its keyword set.
const SUBJECT_TABLE: &[(&str, &[&str])] = &[
    (
        "Physics",
        &[
            "newton",
            "motion",
            "force",
            "velocity",
            "energy",
            "gravity",
            "acceleration",
            "momentum",
            "friction",
        ],
    ),
    (
        "Math",
        &[
            "equation",
            "integral",
            "derivative",
            "algebra",
            "geometry",
            "theorem",
            "fraction",
            "polynomial",
            "solve",
        ],
    ),
    (
        "Chemistry",
        &[
            "molecule",
            "reaction",
            "acid",
            "compound",
            "element",
            "electron",
            "bond",
            "periodic",
        ],
    ),
    (
        "Biology",
        &[
            "cell",
            "organism",
            "gene",
            "enzyme",
            "mitosis",
            "photosynthesis",
            "dna",
            "species",
        ],
    ),
    (
        "History",
        &[
            "war",
            "century",
            "empire",
            "revolution",
            "dynasty",
            "treaty",
            "civilization",
            "monarchy",
        ],
    ),
];

/// Infer a subject label for the given question text.
pub fn classify(text: &str) -> &'static str {
    let tokens = tokenize(text);
    let mut best = FALLBACK_LABEL;
    let mut best_score = 0;

    for (label, keywords) in SUBJECT_TABLE.iter().copied() {
        let score = tokens
            .iter()
            .filter(|token| keywords.contains(&token.as_str()))
            .count();
        // Strict comparison: on a tie the earlier-declared subject stands.
        if score > best_score {
            best = label;
            best_score = score;
        }
    }

    best
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

use serde::{Deserialize, Serialize};

/// Runtime tag for the token unit a script was computed at.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Line,
    Word,
}

impl Granularity {
    /// The separator that reassembles a token sequence into the text it was
    /// split from. Line tokens drop their `\n`, word tokens keep whitespace
    /// as tokens of their own.
    pub fn joiner(&self) -> &'static str {
        match self {
            Self::Line => "\n",
            Self::Word => "",
        }
    }
}

/// A compile-time comparison mode: how input text becomes the token
/// sequence the engine aligns. Implemented by the zero-sized [`Lines`] and
/// [`Words`] markers.
pub trait Tokenize {
    /// The runtime tag recorded on scripts produced in this mode.
    const GRANULARITY: Granularity;

    /// Split `text` into tokens. Tokens borrow from `text`; an empty input
    /// produces an empty sequence, not a single empty token.
    fn tokenize(text: &str) -> Vec<&str>;
}

/// Line tokens: split on `\n` bit-exactly, so a trailing newline yields a
/// trailing empty-string token.
///
/// ```
/// use lcs_diff_rs::tokenizer::{Lines, Tokenize};
///
/// assert_eq!(Lines::tokenize("a\nb"), ["a", "b"]);
/// assert_eq!(Lines::tokenize("a\n"), ["a", ""]);
/// assert!(Lines::tokenize("").is_empty());
/// ```
pub struct Lines;

impl Tokenize for Lines {
    const GRANULARITY: Granularity = Granularity::Line;

    fn tokenize(text: &str) -> Vec<&str> {
        if text.is_empty() {
            return Vec::new();
        }

        text.split('\n').collect()
    }
}

/// Word tokens: alternating maximal runs of non-whitespace and whitespace.
/// Whitespace runs are tokens too, so concatenating the sequence reproduces
/// the input byte-for-byte.
///
/// ```
/// use lcs_diff_rs::tokenizer::{Tokenize, Words};
///
/// assert_eq!(Words::tokenize("fn main() {}"), ["fn", " ", "main()", " ", "{}"]);
/// assert_eq!(Words::tokenize("a  b").concat(), "a  b");
/// ```
pub struct Words;

impl Tokenize for Words {
    const GRANULARITY: Granularity = Granularity::Word;

    fn tokenize(text: &str) -> Vec<&str> {
        let mut tokens = Vec::new();

        let mut start = 0;
        let mut in_whitespace = None;

        for (idx, ch) in text.char_indices() {
            let ws = ch.is_whitespace();
            match in_whitespace {
                Some(prev) if prev != ws => {
                    tokens.push(&text[start..idx]);
                    start = idx;
                    in_whitespace = Some(ws);
                }
                Some(_) => {}
                None => in_whitespace = Some(ws),
            }
        }

        if !text.is_empty() {
            tokens.push(&text[start..]);
        }

        tokens
    }
}

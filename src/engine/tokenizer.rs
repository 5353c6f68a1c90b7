//! Word-level segmentation used by the text normalizer.
//!
//! Splits on word boundaries rather than whitespace: punctuation and symbols
//! become their own tokens and English contractions are split into a stem and
//! a clitic (`don't` → `do` + `n't`).

/// Coarse class of a segmented token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of letters (possibly mixed with digits).
    Word,
    /// Run of digits, optionally with `.`/`,` between digits.
    Number,
    /// Contraction suffix split off a word (`n't`, `'s`, `'ll`, ...).
    Clitic,
    /// A single punctuation character.
    Punct,
    /// Any other single non-space character (currency, math, emoji, ...).
    Symbol,
}

/// A segmented token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// True for tokens that carry lexical content.
    pub fn is_lexical(&self) -> bool {
        matches!(self.kind, TokenKind::Word | TokenKind::Number)
    }
}

/// Contraction suffixes, checked longest first.
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'m", "'d"];

/// Stems whose surface form changes when `n't` is split off.
const IRREGULAR_NEGATIONS: &[(&str, &str)] = &[("wo", "will"), ("ca", "can"), ("sha", "shall")];

/// Deterministic, allocation-light segmenter.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Segment `text` into tokens. Case is preserved; callers lowercase first.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c.is_whitespace() {
                i += 1;
                continue;
            }

            if c.is_alphanumeric() {
                let start = i;
                while i < chars.len() && continue_word(&chars, i) {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                push_word(&mut tokens, &word);
                continue;
            }

            let kind = if is_punctuation(c) {
                TokenKind::Punct
            } else {
                TokenKind::Symbol
            };
            tokens.push(Token::new(c.to_string(), kind));
            i += 1;
        }

        tokens
    }
}

/// Whether the character at `i` extends the word run that contains `i - 1`.
fn continue_word(chars: &[char], i: usize) -> bool {
    let c = chars[i];
    if c.is_alphanumeric() {
        return true;
    }
    let prev = i.checked_sub(1).map(|p| chars[p]);
    let next = chars.get(i + 1).copied();
    match (prev, next) {
        // apostrophe between letters: contraction or possessive
        (Some(p), Some(n)) if is_apostrophe(c) => p.is_alphanumeric() && n.is_alphabetic(),
        // decimal point / thousands separator between digits
        (Some(p), Some(n)) if c == '.' || c == ',' => p.is_ascii_digit() && n.is_ascii_digit(),
        _ => false,
    }
}

/// Split a word run on contractions and push the resulting tokens.
fn push_word(tokens: &mut Vec<Token>, word: &str) {
    let normalized: String = word
        .chars()
        .map(|c| if is_apostrophe(c) { '\'' } else { c })
        .collect();

    if !normalized.contains('\'') {
        tokens.push(Token::new(normalized.clone(), classify(&normalized)));
        return;
    }

    for clitic in CLITICS {
        if let Some(stem) = normalized.strip_suffix(clitic) {
            if !stem.is_empty() && !stem.contains('\'') {
                let stem = if *clitic == "n't" {
                    IRREGULAR_NEGATIONS
                        .iter()
                        .find(|(short, _)| *short == stem)
                        .map(|(_, full)| *full)
                        .unwrap_or(stem)
                } else {
                    stem
                };
                tokens.push(Token::new(stem, classify(stem)));
                tokens.push(Token::new(*clitic, TokenKind::Clitic));
                return;
            }
        }
    }

    // Not a known contraction (o'clock, rock'n'roll): apostrophes separate words.
    for (n, part) in normalized.split('\'').enumerate() {
        if n > 0 {
            tokens.push(Token::new("'", TokenKind::Punct));
        }
        if !part.is_empty() {
            tokens.push(Token::new(part, classify(part)));
        }
    }
}

fn classify(word: &str) -> TokenKind {
    if word
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
    {
        TokenKind::Number
    } else {
        TokenKind::Word
    }
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

fn is_punctuation(c: char) -> bool {
    matches!(
        c,
        '!' | '"'
            | '#'
            | '%'
            | '&'
            | '\''
            | '('
            | ')'
            | '*'
            | ','
            | '-'
            | '.'
            | '/'
            | ':'
            | ';'
            | '?'
            | '@'
            | '['
            | '\\'
            | ']'
            | '_'
            | '{'
            | '}'
    ) || ('\u{2010}'..='\u{2027}').contains(&c)
        || ('\u{3000}'..='\u{303F}').contains(&c)
        || c == '\u{00A1}'
        || c == '\u{00BF}'
        || c == '\u{00AB}'
        || c == '\u{00BB}'
}

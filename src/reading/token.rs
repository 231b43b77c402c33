/// One word-like unit of the reading sequence.
///
/// Text is kept verbatim, including any attached punctuation, and never
/// contains whitespace.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The mark that decides the pause after this word.
    pub fn trailing_char(&self) -> Option<char> {
        self.text.chars().last()
    }
}

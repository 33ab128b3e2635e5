//! Lexer for Command Lines
//!
//! Splits a single (already expanded) line into words using POSIX shell
//! quoting rules:
//! - Space, tab, CR and LF separate words
//! - Single quotes preserve everything literally
//! - Double quotes preserve everything except `\"` and `\\`
//! - Outside quotes a backslash makes the next character literal

use thiserror::Error;

/// Tokenizer failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unterminated {quote} quote starting at column {column}")]
    UnterminatedQuote { quote: char, column: usize },

    #[error("no character to escape at column {column}")]
    TrailingBackslash { column: usize },
}

pub struct Lexer {
    input: Vec<char>,
    pos: usize,
    words: Vec<String>,
    current: String,
    /// True once the current word has content or an opening quote,
    /// so that `""` still yields an (empty) word.
    in_word: bool,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
            words: Vec::new(),
            current: String::new(),
            in_word: false,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<String>, ParseError> {
        while let Some(c) = self.advance() {
            match c {
                ' ' | '\t' | '\r' | '\n' => self.finish_word(),
                '\'' => self.read_single_quoted()?,
                '"' => self.read_double_quoted()?,
                '\\' => {
                    let column = self.pos;
                    let escaped = self
                        .advance()
                        .ok_or(ParseError::TrailingBackslash { column })?;
                    self.push(escaped);
                }
                c => self.push(c),
            }
        }
        self.finish_word();
        Ok(self.words)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn push(&mut self, c: char) {
        self.current.push(c);
        self.in_word = true;
    }

    fn finish_word(&mut self) {
        if self.in_word {
            self.words.push(std::mem::take(&mut self.current));
            self.in_word = false;
        }
    }

    fn read_single_quoted(&mut self) -> Result<(), ParseError> {
        let column = self.pos;
        self.in_word = true;
        loop {
            match self.advance() {
                Some('\'') => return Ok(()),
                Some(c) => self.current.push(c),
                None => return Err(ParseError::UnterminatedQuote { quote: '\'', column }),
            }
        }
    }

    fn read_double_quoted(&mut self) -> Result<(), ParseError> {
        let column = self.pos;
        self.in_word = true;
        loop {
            match self.advance() {
                Some('"') => return Ok(()),
                Some('\\') => match self.peek() {
                    Some(next @ ('"' | '\\')) => {
                        self.pos += 1;
                        self.current.push(next);
                    }
                    _ => self.current.push('\\'),
                },
                Some(c) => self.current.push(c),
                None => return Err(ParseError::UnterminatedQuote { quote: '"', column }),
            }
        }
    }
}

/// Split a line into words.
pub fn tokenize(input: &str) -> Result<Vec<String>, ParseError> {
    Lexer::new(input).tokenize()
}

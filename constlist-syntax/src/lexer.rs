//! Lexer for Go source.
//!
//! Converts source text into a stream of [`Token`]s. Semicolons are inserted
//! at line ends following the rules of the Go specification, so the parser
//! only ever sees explicit statement terminators.

use std::fmt;

use constlist_core::{is_ident_continue, is_ident_start};

use crate::{
    span::Span,
    token::{Keyword, Token, TokenKind},
};

/// Operators and punctuation, longest first so that prefix matching picks
/// the longest spelling.
const OPERATORS: &[&str] = &[
    "<<=", ">>=", "&^=", "...", "&&", "||", "<-", "++", "--", "==", "!=", "<=", ">=", ":=", "+=",
    "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "&^", "+", "-", "*", "/", "%", "&", "|",
    "^", "<", ">", "=", "!", "(", ")", "[", "]", "{", "}", ",", ";", ".", ":", "~",
];

/// Errors that can occur while lexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    pub span: Span,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {})", self.message, self.span.location())
    }
}

impl std::error::Error for LexError {}

/// Convenient alias for lexer results.
pub type LexResult<T> = Result<T, LexError>;

/// Pull-based lexer producing tokens from a source string.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
    /// Whether a line end at the current position terminates a statement.
    insert_semicolon: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    ///
    /// A leading byte order mark is skipped.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let position = if source.starts_with('\u{feff}') {
            '\u{feff}'.len_utf8()
        } else {
            0
        };
        Self {
            source,
            position,
            line: 1,
            column: 1,
            insert_semicolon: false,
        }
    }

    /// Tokenize the whole source. The last token is always [`TokenKind::Eof`].
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> LexResult<Token> {
        if let Some(semicolon) = self.skip_trivia()? {
            return Ok(semicolon);
        }

        let (start, line, column) = self.mark();

        let Some(c) = self.peek_char() else {
            let span = Span::new(start, start, line, column);
            if self.insert_semicolon {
                self.insert_semicolon = false;
                return Ok(Token::new(TokenKind::Semicolon { inserted: true }, span));
            }
            return Ok(Token::new(TokenKind::Eof, span));
        };

        let kind = match c {
            c if is_ident_start(c) => self.scan_word(start),
            c if c.is_ascii_digit() => self.scan_number(start, line, column)?,
            '.' if self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.scan_number(start, line, column)?
            }
            '"' => self.scan_string(start, line, column)?,
            '`' => self.scan_raw_string(start, line, column)?,
            '\'' => self.scan_rune(start, line, column)?,
            _ => self.scan_operator(start, line, column)?,
        };

        self.insert_semicolon = kind.ends_statement();
        Ok(Token::new(kind, Span::new(start, self.position, line, column)))
    }

    /// Skip whitespace and comments.
    ///
    /// Returns an inserted semicolon when a line end is crossed right after a
    /// statement-ending token.
    fn skip_trivia(&mut self) -> LexResult<Option<Token>> {
        loop {
            match self.peek_char() {
                Some('\n') => {
                    let (start, line, column) = self.mark();
                    self.advance();
                    if self.insert_semicolon {
                        self.insert_semicolon = false;
                        let span = Span::new(start, self.position, line, column);
                        return Ok(Some(Token::new(
                            TokenKind::Semicolon { inserted: true },
                            span,
                        )));
                    }
                }
                Some(' ' | '\t' | '\r') => {
                    self.advance();
                }
                Some('/') if self.peek_nth(1) == Some('/') => {
                    // The terminating newline is left for the next iteration.
                    while self.peek_char().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                }
                Some('/') if self.peek_nth(1) == Some('*') => {
                    let (start, line, column) = self.mark();
                    self.advance();
                    self.advance();

                    let mut spans_lines = false;
                    loop {
                        match self.peek_char() {
                            None => {
                                return Err(self.error("comment not terminated", start, line, column));
                            }
                            Some('*') if self.peek_nth(1) == Some('/') => {
                                self.advance();
                                self.advance();
                                break;
                            }
                            Some(c) => {
                                spans_lines |= c == '\n';
                                self.advance();
                            }
                        }
                    }

                    // A general comment containing a newline acts like one.
                    if spans_lines && self.insert_semicolon {
                        self.insert_semicolon = false;
                        let span = Span::new(start, self.position, line, column);
                        return Ok(Some(Token::new(
                            TokenKind::Semicolon { inserted: true },
                            span,
                        )));
                    }
                }
                _ => return Ok(None),
            }
        }
    }

    fn scan_word(&mut self, start: usize) -> TokenKind {
        while self.peek_char().is_some_and(is_ident_continue) {
            self.advance();
        }
        match Keyword::from_word(&self.source[start..self.position]) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Ident,
        }
    }

    fn scan_number(&mut self, start: usize, line: u32, column: u32) -> LexResult<TokenKind> {
        let mut kind = TokenKind::Int;

        let radix = match (self.peek_char(), self.peek_nth(1)) {
            (Some('0'), Some('x' | 'X')) => 16,
            (Some('0'), Some('b' | 'B')) => 2,
            (Some('0'), Some('o' | 'O')) => 8,
            _ => 10,
        };

        if radix == 10 {
            self.eat_digits(10);
            if self.peek_char() == Some('.') {
                self.advance();
                kind = TokenKind::Float;
                self.eat_digits(10);
            }
            if matches!(self.peek_char(), Some('e' | 'E')) {
                kind = TokenKind::Float;
                self.scan_exponent(start, line, column)?;
            }
        } else {
            self.advance();
            self.advance();
            let mut digits = self.eat_digits(radix);
            if radix == 16 {
                if self.peek_char() == Some('.') {
                    self.advance();
                    kind = TokenKind::Float;
                    digits += self.eat_digits(16);
                }
                if matches!(self.peek_char(), Some('p' | 'P')) {
                    kind = TokenKind::Float;
                    self.scan_exponent(start, line, column)?;
                }
            }
            if digits == 0 {
                let name = match radix {
                    16 => "hexadecimal",
                    8 => "octal",
                    _ => "binary",
                };
                return Err(self.error(
                    format!("{} literal has no digits", name),
                    start,
                    line,
                    column,
                ));
            }
        }

        if self.peek_char() == Some('i') {
            self.advance();
            kind = TokenKind::Imag;
        }

        Ok(kind)
    }

    /// Consume an `e`/`p` exponent marker, an optional sign, and its digits.
    fn scan_exponent(&mut self, start: usize, line: u32, column: u32) -> LexResult<()> {
        self.advance();
        if matches!(self.peek_char(), Some('+' | '-')) {
            self.advance();
        }
        if self.eat_digits(10) == 0 {
            return Err(self.error("exponent has no digits", start, line, column));
        }
        Ok(())
    }

    /// Consume digits of `radix` (and `_` separators); returns the digit count.
    fn eat_digits(&mut self, radix: u32) -> usize {
        let mut count = 0;
        while let Some(c) = self.peek_char() {
            if c.is_digit(radix) {
                count += 1;
            } else if c != '_' {
                break;
            }
            self.advance();
        }
        count
    }

    fn scan_string(&mut self, start: usize, line: u32, column: u32) -> LexResult<TokenKind> {
        self.advance();
        loop {
            match self.peek_char() {
                None | Some('\n') => {
                    return Err(self.error("string literal not terminated", start, line, column));
                }
                Some('\\') => {
                    self.advance();
                    if matches!(self.peek_char(), None | Some('\n')) {
                        return Err(self.error(
                            "string literal not terminated",
                            start,
                            line,
                            column,
                        ));
                    }
                    self.advance();
                }
                Some('"') => {
                    self.advance();
                    return Ok(TokenKind::String);
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    fn scan_raw_string(&mut self, start: usize, line: u32, column: u32) -> LexResult<TokenKind> {
        self.advance();
        loop {
            match self.peek_char() {
                None => {
                    return Err(self.error(
                        "raw string literal not terminated",
                        start,
                        line,
                        column,
                    ));
                }
                Some('`') => {
                    self.advance();
                    return Ok(TokenKind::String);
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    fn scan_rune(&mut self, start: usize, line: u32, column: u32) -> LexResult<TokenKind> {
        self.advance();
        if self.peek_char() == Some('\'') {
            self.advance();
            return Err(self.error(
                "empty rune literal or unescaped ' in rune literal",
                start,
                line,
                column,
            ));
        }
        loop {
            match self.peek_char() {
                None | Some('\n') => {
                    return Err(self.error("rune literal not terminated", start, line, column));
                }
                Some('\\') => {
                    self.advance();
                    if matches!(self.peek_char(), None | Some('\n')) {
                        return Err(self.error(
                            "rune literal not terminated",
                            start,
                            line,
                            column,
                        ));
                    }
                    self.advance();
                }
                Some('\'') => {
                    self.advance();
                    return Ok(TokenKind::Char);
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    fn scan_operator(&mut self, start: usize, line: u32, column: u32) -> LexResult<TokenKind> {
        let rest = &self.source[self.position..];
        let Some(op) = OPERATORS.iter().find(|op| rest.starts_with(*op)) else {
            let c = self.peek_char().unwrap_or_default();
            self.advance();
            return Err(self.error(
                format!("illegal character U+{:04X} '{}'", c as u32, c),
                start,
                line,
                column,
            ));
        };

        // Operators are ASCII, one byte per char.
        for _ in 0..op.len() {
            self.advance();
        }

        Ok(match *op {
            "(" => TokenKind::LParen,
            ")" => TokenKind::RParen,
            "[" => TokenKind::LBracket,
            "]" => TokenKind::RBracket,
            "{" => TokenKind::LBrace,
            "}" => TokenKind::RBrace,
            "," => TokenKind::Comma,
            "." => TokenKind::Dot,
            "=" => TokenKind::Assign,
            ";" => TokenKind::Semicolon { inserted: false },
            "++" => TokenKind::Inc,
            "--" => TokenKind::Dec,
            _ => TokenKind::Operator,
        })
    }

    fn mark(&self) -> (usize, u32, u32) {
        (self.position, self.line, self.column)
    }

    fn error(&self, message: impl Into<String>, start: usize, line: u32, column: u32) -> LexError {
        LexError {
            message: message.into(),
            span: Span::new(start, self.position, line, column),
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.source[self.position..].chars().nth(n)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}

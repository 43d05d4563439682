use crate::error::{LexError, Position};

#[derive(Debug, Clone, PartialEq)]
pub enum TokenType {
    LParen,
    RParen,
    Symbol,
    Keyword,
    String,
    Number,
    Nil,
    Eof,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub typ: TokenType,
    pub lexeme: String,
    pub pos: Position,
}

impl Token {
    fn new(typ: TokenType, lexeme: impl Into<String>, pos: Position) -> Self {
        Self { typ, lexeme: lexeme.into(), pos }
    }
}

/// Punctuation allowed inside symbols besides letters, digits and `_`
const SYMBOL_PUNCT: &[char] = &['-', '+', '*', '/', '=', '<', '>', '!', '?', '&', '.', '@'];

pub struct Lexer {
    input: Vec<char>,
    current: usize,
    offset: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self { input: input.chars().collect(), current: 0, offset: 0, line: 1, column: 1 }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_trivia();
            let pos = self.position();

            let Some(ch) = self.peek() else {
                tokens.push(Token::new(TokenType::Eof, "", pos));
                return Ok(tokens);
            };

            let token = match ch {
                '(' => {
                    self.bump();
                    Token::new(TokenType::LParen, "(", pos)
                }
                ')' => {
                    self.bump();
                    Token::new(TokenType::RParen, ")", pos)
                }
                '"' => self.string(pos)?,
                ':' => {
                    self.bump();
                    let name = self.take_while(is_symbol_char);
                    Token::new(TokenType::Keyword, name, pos)
                }
                c if c.is_ascii_digit() || (c == '-' && self.peek_next_is_digit()) => {
                    let mut lexeme = String::new();
                    if c == '-' {
                        self.bump();
                        lexeme.push('-');
                    }
                    lexeme.push_str(&self.take_while(|c| c.is_ascii_digit()));
                    Token::new(TokenType::Number, lexeme, pos)
                }
                c if is_symbol_char(c) && !c.is_ascii_digit() => {
                    let lexeme = self.take_while(is_symbol_char);
                    let typ = if lexeme == "nil" { TokenType::Nil } else { TokenType::Symbol };
                    Token::new(typ, lexeme, pos)
                }
                c => return Err(LexError::UnexpectedChar { ch: c, pos }),
            };
            tokens.push(token);
        }
    }

    fn string(&mut self, pos: Position) -> Result<Token, LexError> {
        self.bump(); // Opening '"'
        let mut value = String::new();

        loop {
            match self.bump() {
                None => return Err(LexError::UnterminatedString { pos }),
                Some('"') => break,
                Some('\\') => {
                    let escape_pos = self.position();
                    let escaped = match self.bump() {
                        None => return Err(LexError::UnterminatedString { pos }),
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('r') => '\r',
                        Some('\\') => '\\',
                        Some('"') => '"',
                        Some(ch) => return Err(LexError::InvalidEscape { ch, pos: escape_pos }),
                    };
                    value.push(escaped);
                }
                Some(ch) => value.push(ch),
            }
        }

        Ok(Token::new(TokenType::String, value, pos))
    }

    /// Whitespace and `;` line comments
    fn skip_trivia(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == ';' {
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                }
            } else if ch.is_whitespace() {
                self.bump();
            } else {
                break;
            }
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut out = String::new();
        while let Some(ch) = self.peek().filter(|c| pred(*c)) {
            out.push(ch);
            self.bump();
        }
        out
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.current).copied()
    }

    fn peek_next_is_digit(&self) -> bool {
        self.input.get(self.current + 1).is_some_and(|c| c.is_ascii_digit())
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += 1;
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn position(&self) -> Position {
        Position::new(self.offset, self.line, self.column)
    }
}

fn is_symbol_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '\'' || SYMBOL_PUNCT.contains(&ch)
}

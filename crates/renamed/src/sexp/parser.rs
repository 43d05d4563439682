use crate::error::{ParseError, Result};
use crate::sexp::lexer::{Lexer, Token, TokenType};
use crate::sexp::types::*;

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parse exactly the first form of `input`
    pub fn parse_str(input: &str) -> Result<SExp> {
        let tokens = Lexer::new(input).tokenize()?;
        Parser::new(tokens).parse()
    }

    /// Parse every top-level form of `input`
    pub fn parse_all_str(input: &str) -> Result<Vec<SExp>> {
        let tokens = Lexer::new(input).tokenize()?;
        Parser::new(tokens).parse_all()
    }

    pub fn parse(&mut self) -> Result<SExp> {
        if self.is_at_end() {
            return Err(ParseError::EmptyInput);
        }
        self.parse_sexp()
    }

    pub fn parse_all(&mut self) -> Result<Vec<SExp>> {
        let mut forms = Vec::new();
        while !self.is_at_end() {
            forms.push(self.parse_sexp()?);
        }
        Ok(forms)
    }

    fn parse_sexp(&mut self) -> Result<SExp> {
        let token = self.advance()?;
        let pos = token.pos;

        let sexp = match token.typ {
            TokenType::LParen => return self.parse_list_from(pos),
            TokenType::RParen => return Err(ParseError::UnexpectedCloseParen { pos }),
            TokenType::Eof => return Err(ParseError::EmptyInput),
            TokenType::Symbol => SExp::Symbol(Symbol::new(token.lexeme, pos)),
            TokenType::Keyword => SExp::Keyword(Keyword::new(token.lexeme, pos)),
            TokenType::String => SExp::String(StringLit::new(token.lexeme, pos)),
            TokenType::Number => SExp::Number(Number::new(token.lexeme, pos)),
            TokenType::Nil => SExp::Nil(Nil::new(pos)),
        };
        Ok(sexp)
    }

    /// Elements up to the matching ')'; the '(' at `pos` is already consumed
    fn parse_list_from(&mut self, pos: crate::error::Position) -> Result<SExp> {
        let mut elements = Vec::new();

        loop {
            if self.is_at_end() {
                return Err(ParseError::UnterminatedList { pos });
            }
            if self.peek_type() == Some(&TokenType::RParen) {
                self.current += 1;
                return Ok(SExp::List(List::new(elements, pos)));
            }
            elements.push(self.parse_sexp()?);
        }
    }

    fn advance(&mut self) -> Result<Token> {
        let token = self.tokens.get(self.current).cloned().ok_or(ParseError::EmptyInput)?;
        self.current += 1;
        Ok(token)
    }

    fn peek_type(&self) -> Option<&TokenType> {
        self.tokens.get(self.current).map(|token| &token.typ)
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek_type(), None | Some(TokenType::Eof))
    }
}

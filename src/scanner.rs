use crate::ast::Literal;
use crate::error::ScannerError;
use crate::token::{Token, TokenType};

pub struct Scanner {
    source: Vec<char>,
    tokens: Vec<Token>,
    errors: Vec<ScannerError>,
    start: usize,
    current: usize,
    line: usize,
}

impl Scanner {
    pub fn new(source: String) -> Self {
        Self {
            source: source.chars().collect(),
            tokens: vec![],
            errors: vec![],
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans the whole source. Lexical errors don't stop the scan: every one of
    /// them is returned, and the token list always ends with an `Eof` token.
    pub fn scan_tokens(mut self) -> (Vec<Token>, Vec<ScannerError>) {
        while !self.is_at_end() {
            // we are at the beginning of the next lexeme
            self.start = self.current;
            self.scan_token();
        }
        self.tokens.push(Token::eof(self.line));
        (self.tokens, self.errors)
    }

    fn scan_token(&mut self) {
        let c: char = self.advance();
        match c {
            '(' => self.add_token(TokenType::LeftParen),
            ')' => self.add_token(TokenType::RightParen),
            '{' => self.add_token(TokenType::LeftBrace),
            '}' => self.add_token(TokenType::RightBrace),
            ',' => self.add_token(TokenType::Comma),
            '.' => self.add_token(TokenType::Dot),
            '-' => self.add_token(TokenType::Minus),
            '+' => self.add_token(TokenType::Plus),
            ';' => self.add_token(TokenType::Semicolon),
            '*' => self.add_token(TokenType::Star),
            '!' => {
                let token_type = if self.current_match('=') {
                    TokenType::BangEqual
                } else {
                    TokenType::Bang
                };
                self.add_token(token_type);
            }
            '=' => {
                let token_type = if self.current_match('=') {
                    TokenType::EqualEqual
                } else {
                    TokenType::Equal
                };
                self.add_token(token_type);
            }
            '>' => {
                let token_type = if self.current_match('=') {
                    TokenType::GreaterEqual
                } else {
                    TokenType::Greater
                };
                self.add_token(token_type);
            }
            '<' => {
                let token_type = if self.current_match('=') {
                    TokenType::LessEqual
                } else {
                    TokenType::Less
                };
                self.add_token(token_type);
            }
            '/' => {
                // handling comments
                if self.current_match('/') {
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenType::Slash);
                }
            }
            '"' => self.string(),
            ' ' | '\t' | '\r' => (),
            '\n' => self.increment_line(),
            _ => {
                if c.is_ascii_digit() {
                    self.number();
                } else if is_alpha(c) {
                    self.identifier();
                } else {
                    self.add_error(format!("Unexpected character: {}.", c))
                }
            }
        }
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn add_token(&mut self, typ: TokenType) {
        let token = Token::new(typ, &self.lexeme(), self.line);
        self.tokens.push(token);
    }

    fn add_literal_token(&mut self, typ: TokenType, literal: Literal) {
        let token = Token::new(typ, &self.lexeme(), self.line);
        self.tokens.push(token.with_literal(literal));
    }

    fn peek(&self) -> char {
        self.source.get(self.current).copied().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        self.source.get(self.current + 1).copied().unwrap_or('\0')
    }

    fn advance(&mut self) -> char {
        let c = self.peek();
        self.current += 1;
        c
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn add_error(&mut self, message: String) {
        self.errors.push(ScannerError {
            message,
            line: self.line,
        });
    }

    fn increment_line(&mut self) {
        self.line += 1;
    }

    /// Consumes the next character only if it is `expected`.
    fn current_match(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.current += 1;
        true
    }

    fn string(&mut self) {
        let mut nb_lines = 0;
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                nb_lines += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            for _ in 0..nb_lines {
                self.increment_line();
            }
            self.add_error(String::from("Unterminated string."));
            return;
        }
        // closing quote
        self.advance();

        let string_literal: String = self.source[self.start + 1..self.current - 1]
            .iter()
            .collect();
        self.add_literal_token(TokenType::Str, Literal::Str(string_literal));
        // multi line string: the token is recorded with the line where the string started,
        // so the lines are only counted once it has been added.
        for _ in 0..nb_lines {
            self.increment_line();
        }
    }

    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }
        // if there is a dot followed by a digit, then we have a float
        // else it's an int followed by a dot.
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }
        let string_number = self.lexeme();
        match string_number.parse::<f64>() {
            Ok(value) => self.add_literal_token(TokenType::Number, Literal::Number(value)),
            Err(_) => self.add_error(format!("Could not parse number: {}.", string_number)),
        }
    }

    fn identifier(&mut self) {
        while is_alpha_numeric(self.peek()) {
            self.advance();
        }
        let keyword = TokenType::keyword(&self.lexeme());
        self.add_token(keyword.unwrap_or(TokenType::Identifier));
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}

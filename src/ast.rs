use std::fmt;

use crate::token::{Token, TokenType, TokenType::*};

#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    Literal(Literal),
    Unary(Unary),
    Binary(Binary),
    Grouping(Grouping),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Nil,
    Bool(bool),
    Number(f64),
    Str(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Nil => write!(f, "nil"),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Str(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Grouping {
    pub expression: Box<Expr>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Unary {
    pub operator: Token,
    pub right: Box<Expr>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Binary {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

impl Expr {
    pub fn literal(literal: Literal) -> Expr {
        Expr::Literal(literal)
    }

    pub fn grouping(expression: Expr) -> Expr {
        Expr::Grouping(Grouping {
            expression: Box::new(expression),
        })
    }

    pub fn unary(operator: Token, right: Expr) -> Expr {
        Expr::Unary(Unary {
            operator,
            right: Box::new(right),
        })
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Expr {
        Expr::Binary(Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", printer::pretty_print(self))
    }
}

/// Renders a tree in fully parenthesized prefix form, e.g. `(* (- 123) (group 45.67))`.
pub mod printer {
    use super::*;

    pub fn pretty_print(expr: &Expr) -> String {
        match expr {
            Expr::Literal(lit) => pretty_print_litteral(lit),
            Expr::Grouping(group) => pretty_print_grouping(group),
            Expr::Unary(unary) => pretty_print_unary(unary),
            Expr::Binary(binary) => pretty_print_binary(binary),
        }
    }

    fn pretty_print_litteral(literal: &Literal) -> String {
        literal.to_string()
    }

    fn pretty_print_grouping(group: &Grouping) -> String {
        format!("(group {})", pretty_print(&group.expression))
    }

    fn pretty_print_unary(unary: &Unary) -> String {
        format!("({} {})", unary.operator.lexeme, pretty_print(&unary.right))
    }

    fn pretty_print_binary(binary: &Binary) -> String {
        format!(
            "({} {} {})",
            binary.operator.lexeme,
            pretty_print(&binary.left),
            pretty_print(&binary.right)
        )
    }
}

#[test]
fn test_pretty_printer() {
    let minus_op = Token::new(TokenType::Minus, "-", 1);
    let star_op = Token::new(TokenType::Star, "*", 1);
    let expression = Expr::binary(
        Expr::unary(minus_op, Expr::literal(Literal::Number(123.0))),
        star_op,
        Expr::grouping(Expr::literal(Literal::Number(45.67))),
    );
    let result = printer::pretty_print(&expression);
    assert_eq!(result, "(* (- 123) (group 45.67))");
}

#[test]
fn test_pretty_print_literals() {
    assert_eq!(printer::pretty_print(&Expr::literal(Literal::Nil)), "nil");
    assert_eq!(
        printer::pretty_print(&Expr::literal(Literal::Bool(true))),
        "true"
    );
    assert_eq!(
        printer::pretty_print(&Expr::literal(Literal::Bool(false))),
        "false"
    );
    assert_eq!(
        printer::pretty_print(&Expr::literal(Literal::Number(2.5))),
        "2.5"
    );
    let text = Expr::literal(Literal::Str(String::from("hi there")));
    assert_eq!(text.to_string(), "hi there");
}

pub mod parser {
    use super::*;
    use crate::error::ParseError;

    /*
    expression     → equality ;
    equality       → comparison ( ( "!=" | "==" ) comparison )* ;
    comparison     → term ( ( ">" | ">=" | "<" | "<=" ) term )* ;
    term           → factor ( ( "-" | "+" ) factor )* ;
    factor         → unary ( ( "/" | "*" ) unary )* ;
    unary          → ( "!" | "-" ) unary | primary ;
    primary        → NUMBER | STRING | "true" | "false" | "nil"
                   | "(" expression ")" ;
    */

    /// Deepest chain of groupings and unary operators the parser recurses into.
    pub const MAX_NESTING: usize = 128;

    pub struct Parser {
        tokens: Vec<Token>,
        current: usize,
        depth: usize,
    }

    impl Parser {
        pub fn new(mut tokens: Vec<Token>) -> Self {
            // every peek relies on the Eof sentinel being there
            if tokens.last().map(|token| token.typ) != Some(Eof) {
                let line = tokens.last().map_or(1, |token| token.line);
                tokens.push(Token::eof(line));
            }
            Self {
                tokens,
                current: 0,
                depth: 0,
            }
        }

        /// Parses the whole token stream as a single expression.
        ///
        /// On failure the cursor is moved to the next plausible statement
        /// boundary before the error is returned.
        pub fn parse(&mut self) -> Result<Expr, ParseError> {
            let result = self.expression().and_then(|expr| {
                if self.is_at_end() {
                    Ok(expr)
                } else {
                    Err(self.error("Expect end of expression."))
                }
            });
            if result.is_err() {
                self.synchronize();
            }
            result
        }

        pub fn is_at_end(&self) -> bool {
            self.peek().typ == Eof
        }

        fn peek(&self) -> &Token {
            &self.tokens[self.current]
        }

        fn check(&self, typ: TokenType) -> bool {
            if self.is_at_end() {
                return false;
            }
            self.peek().typ == typ
        }

        fn advance(&mut self) -> Token {
            let token = self.peek().clone();
            if !self.is_at_end() {
                self.current += 1;
            }
            token
        }

        fn matches(&mut self, types: &[TokenType]) -> bool {
            for typ in types {
                if self.check(*typ) {
                    self.advance();
                    return true;
                }
            }
            false
        }

        fn previous(&self) -> Token {
            self.tokens[self.current.saturating_sub(1)].clone()
        }

        fn error(&self, message: &str) -> ParseError {
            ParseError {
                token: self.peek().clone(),
                message: message.to_string(),
            }
        }

        fn consume(&mut self, typ: TokenType, message: &str) -> Result<Token, ParseError> {
            if self.check(typ) {
                return Ok(self.advance());
            }
            Err(self.error(message))
        }

        /// Skips tokens until a statement boundary: right after a `;`, or
        /// right before a keyword that starts a statement.
        pub fn synchronize(&mut self) {
            self.advance();
            while !self.is_at_end() {
                if self.previous().typ == Semicolon {
                    return;
                }
                match self.peek().typ {
                    Class | Fun | Var | For | If | While | Print | Return => return,
                    _ => {
                        self.advance();
                    }
                }
            }
        }

        fn expression(&mut self) -> Result<Expr, ParseError> {
            self.equality()
        }

        fn nested(
            &mut self,
            rule: &dyn Fn(&mut Self) -> Result<Expr, ParseError>,
        ) -> Result<Expr, ParseError> {
            if self.depth >= MAX_NESTING {
                return Err(self.error("Too much nesting."));
            }
            self.depth += 1;
            let result = rule(self);
            self.depth -= 1;
            result
        }

        /*
         * Parse something of the form `<rule>((<operators>)<rule>)*`
         */
        fn parse_left_associative_binary_op(
            &mut self,
            rule: &dyn Fn(&mut Self) -> Result<Expr, ParseError>,
            operators: &[TokenType],
        ) -> Result<Expr, ParseError> {
            let mut expr = rule(self)?;
            while self.matches(operators) {
                let operator = self.previous();
                let right = rule(self)?;
                expr = Expr::binary(expr, operator, right);
            }
            Ok(expr)
        }

        fn equality(&mut self) -> Result<Expr, ParseError> {
            self.parse_left_associative_binary_op(&Parser::comparison, &[BangEqual, EqualEqual])
        }

        fn comparison(&mut self) -> Result<Expr, ParseError> {
            self.parse_left_associative_binary_op(
                &Parser::term,
                &[Greater, GreaterEqual, Less, LessEqual],
            )
        }

        fn term(&mut self) -> Result<Expr, ParseError> {
            self.parse_left_associative_binary_op(&Parser::factor, &[Minus, Plus])
        }

        fn factor(&mut self) -> Result<Expr, ParseError> {
            self.parse_left_associative_binary_op(&Parser::unary, &[Slash, Star])
        }

        fn unary(&mut self) -> Result<Expr, ParseError> {
            if self.matches(&[Bang, Minus]) {
                let operator = self.previous();
                let right = self.nested(&Parser::unary)?;
                return Ok(Expr::unary(operator, right));
            }
            self.primary()
        }

        fn primary(&mut self) -> Result<Expr, ParseError> {
            let typ = self.peek().typ;
            let literal = match typ {
                True => Literal::Bool(true),
                False => Literal::Bool(false),
                Nil => Literal::Nil,
                Number | Str => match &self.peek().literal {
                    Some(literal) => literal.clone(),
                    None => return Err(self.error("Expect literal value.")),
                },
                LeftParen => {
                    self.advance(); // discard left paren
                    let expr = self.nested(&Parser::expression)?;
                    self.consume(RightParen, "Expect ')' after expression.")?;
                    return Ok(Expr::grouping(expr));
                }
                _ => return Err(self.error("Expect expression.")),
            };
            self.advance();
            Ok(Expr::literal(literal))
        }
    }

}

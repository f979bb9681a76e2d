//! Parser for computable form.
//!
//! Supports:
//! - Numbers (integers, decimals, `inf`, `NaN`)
//! - Arithmetic operators (+, -, *, /, **)
//! - Unary minus and plus
//! - Parentheses for grouping
//! - Built-in functions (sqrt, abs)

use super::error::SyntaxError;
use std::iter::Peekable;
use std::str::Chars;

/// Expression AST node
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal
    Number(f64),
    /// Binary operation
    BinaryOp {
        op: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Unary operation
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expr>,
    },
    /// Function call
    FnCall {
        function: Function,
        arg: Box<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOperator {
    Neg,
    Plus,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Function {
    Sqrt,
    Abs,
}

impl Function {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "sqrt" => Some(Self::Sqrt),
            "abs" => Some(Self::Abs),
            _ => None,
        }
    }
}

/// Token types
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Identifier(String),
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    LParen,
    RParen,
    Eof,
}

impl Token {
    fn fragment(&self) -> String {
        match self {
            Token::Number(n) => n.to_string(),
            Token::Identifier(name) => name.clone(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::StarStar => "**".to_string(),
            Token::Slash => "/".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::Eof => String::new(),
        }
    }
}

/// Tokenizer
struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    position: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            position: 0,
        }
    }

    /// Next token and its starting position
    fn next_token(&mut self) -> Result<(Token, usize), SyntaxError> {
        self.skip_whitespace();

        let pos = self.position;

        let token = match self.chars.peek() {
            None => Token::Eof,
            Some(&c) => match c {
                '+' => {
                    self.advance();
                    Token::Plus
                }
                '-' => {
                    self.advance();
                    Token::Minus
                }
                '*' => {
                    self.advance();
                    if self.chars.peek() == Some(&'*') {
                        self.advance();
                        Token::StarStar
                    } else {
                        Token::Star
                    }
                }
                '/' => {
                    self.advance();
                    Token::Slash
                }
                '(' => {
                    self.advance();
                    Token::LParen
                }
                ')' => {
                    self.advance();
                    Token::RParen
                }
                c if c.is_ascii_digit() || c == '.' => self.read_number()?,
                c if c.is_ascii_alphabetic() => Token::Identifier(self.read_identifier()),
                _ => {
                    return Err(SyntaxError::new(
                        format!("Unexpected character: '{}'", c),
                        pos,
                        c.to_string(),
                    ))
                }
            },
        };

        Ok((token, pos))
    }

    fn advance(&mut self) -> Option<char> {
        self.position += 1;
        self.chars.next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> Result<Token, SyntaxError> {
        let pos = self.position;
        let mut num_str = String::new();
        let mut has_dot = false;

        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_digit() {
                num_str.push(c);
                self.advance();
            } else if c == '.' && !has_dot {
                has_dot = true;
                num_str.push(c);
                self.advance();
            } else {
                break;
            }
        }

        // Scientific notation (e.g., 1e10, 1.5e-3)
        if let Some(&c) = self.chars.peek() {
            if c == 'e' || c == 'E' {
                num_str.push(c);
                self.advance();
                if let Some(&sign) = self.chars.peek() {
                    if sign == '+' || sign == '-' {
                        num_str.push(sign);
                        self.advance();
                    }
                }
                while let Some(&c) = self.chars.peek() {
                    if c.is_ascii_digit() {
                        num_str.push(c);
                        self.advance();
                    } else {
                        break;
                    }
                }
            }
        }

        num_str.parse::<f64>().map(Token::Number).map_err(|_| {
            SyntaxError::new(format!("Invalid number: '{}'", num_str), pos, num_str.clone())
        })
    }

    fn read_identifier(&mut self) -> String {
        let mut name = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                name.push(c);
                self.advance();
            } else {
                break;
            }
        }
        name
    }
}

/// Parser for computable form
struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    current_pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Result<Self, SyntaxError> {
        let mut lexer = Lexer::new(input);
        let (current, current_pos) = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            current_pos,
        })
    }

    fn advance(&mut self) -> Result<(), SyntaxError> {
        let (token, pos) = self.lexer.next_token()?;
        self.current = token;
        self.current_pos = pos;
        Ok(())
    }

    fn error(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(message, self.current_pos, self.current.fragment())
    }

    fn parse(&mut self) -> Result<Expr, SyntaxError> {
        let expr = self.parse_additive()?;
        if self.current != Token::Eof {
            return Err(self.error("Unexpected token after expression"));
        }
        Ok(expr)
    }

    // Additive: term (('+' | '-') term)*
    fn parse_additive(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match &self.current {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Sub,
                _ => break,
            };
            self.advance()?;
            let right = self.parse_multiplicative()?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    // Multiplicative: power (('*' | '/') power)*
    fn parse_multiplicative(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_power()?;

        loop {
            let op = match &self.current {
                Token::Star => BinaryOperator::Mul,
                Token::Slash => BinaryOperator::Div,
                _ => break,
            };
            self.advance()?;
            let right = self.parse_power()?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    // Power: unary ('**' power)?  (right associative)
    fn parse_power(&mut self) -> Result<Expr, SyntaxError> {
        let base = self.parse_unary()?;

        if self.current == Token::StarStar {
            self.advance()?;
            let exp = self.parse_power()?;
            Ok(Expr::BinaryOp {
                op: BinaryOperator::Pow,
                left: Box::new(base),
                right: Box::new(exp),
            })
        } else {
            Ok(base)
        }
    }

    // Unary: ('-' | '+') unary | primary
    fn parse_unary(&mut self) -> Result<Expr, SyntaxError> {
        let op = match self.current {
            Token::Minus => UnaryOperator::Neg,
            Token::Plus => UnaryOperator::Plus,
            _ => return self.parse_primary(),
        };
        self.advance()?;
        let operand = self.parse_unary()?;
        Ok(Expr::UnaryOp {
            op,
            operand: Box::new(operand),
        })
    }

    // Primary: number | function_call | '(' expr ')'
    fn parse_primary(&mut self) -> Result<Expr, SyntaxError> {
        match &self.current {
            Token::Number(n) => {
                let val = *n;
                self.advance()?;
                Ok(Expr::Number(val))
            }
            Token::Identifier(name) => {
                let name = name.clone();
                let name_pos = self.current_pos;

                match name.as_str() {
                    "inf" => {
                        self.advance()?;
                        Ok(Expr::Number(f64::INFINITY))
                    }
                    "NaN" => {
                        self.advance()?;
                        Ok(Expr::Number(f64::NAN))
                    }
                    _ => {
                        let function = Function::from_name(&name).ok_or_else(|| {
                            SyntaxError::new(format!("Unknown identifier: '{}'", name), name_pos, name.clone())
                        })?;
                        self.advance()?;
                        if self.current != Token::LParen {
                            return Err(self.error(format!("Expected '(' after '{}'", name)));
                        }
                        self.advance()?;
                        let arg = self.parse_additive()?;
                        if self.current != Token::RParen {
                            return Err(self.error("Expected ')' after function argument"));
                        }
                        self.advance()?;
                        Ok(Expr::FnCall {
                            function,
                            arg: Box::new(arg),
                        })
                    }
                }
            }
            Token::LParen => {
                self.advance()?;
                let expr = self.parse_additive()?;
                if self.current != Token::RParen {
                    return Err(self.error("Expected ')'"));
                }
                self.advance()?;
                Ok(expr)
            }
            Token::Eof => Err(self.error("Unexpected end of expression")),
            _ => Err(self.error("Unexpected token")),
        }
    }
}

/// Parse computable form into an AST
pub fn parse_computable(input: &str) -> Result<Expr, SyntaxError> {
    if input.trim().is_empty() {
        return Err(SyntaxError::new("Empty expression", 0, ""));
    }
    let mut parser = Parser::new(input)?;
    parser.parse()
}

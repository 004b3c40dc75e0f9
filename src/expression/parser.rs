use std::fmt;

use log::debug;

use crate::expression::ast::Expression;
use crate::expression::constants::{MAX_NESTING_DEPTH, MAX_TOKENS};
use crate::expression::errors::ExpressionError;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LeftParen,
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// A token together with its character offset in the source text
#[derive(Debug, Clone, Copy)]
struct Spanned {
    token: Token,
    position: usize,
}

impl Spanned {
    fn unexpected(self) -> ExpressionError {
        ExpressionError::UnexpectedToken {
            token: self.token.to_string(),
            position: self.position,
        }
    }
}

/// Returns the end offset of the number literal starting at `start`.
fn scan_number(chars: &[char], start: usize) -> usize {
    let mut end = start;
    while chars
        .get(end)
        .is_some_and(|c| c.is_ascii_digit() || *c == '.')
    {
        end += 1;
    }

    if matches!(chars.get(end), Some('e' | 'E')) {
        let mut exponent = end + 1;
        if matches!(chars.get(exponent), Some('+' | '-')) {
            exponent += 1;
        }
        if chars.get(exponent).is_some_and(|c| c.is_ascii_digit()) {
            end = exponent;
            while chars.get(end).is_some_and(|c| c.is_ascii_digit()) {
                end += 1;
            }
        }
    }

    end
}

fn tokenize(input: &str) -> Result<Vec<Spanned>, ExpressionError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut position = 0;

    while let Some(&c) = chars.get(position) {
        let token = match c {
            c if c.is_whitespace() => {
                position += 1;
                continue;
            }
            '+' => Token::Plus,
            '-' | '\u{2212}' => Token::Minus,
            '*' | '×' => Token::Star,
            '/' | '÷' => Token::Slash,
            '^' => Token::Caret,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            c if c.is_ascii_digit() || c == '.' => {
                let end = scan_number(&chars, position);
                let literal: String = chars.get(position..end).unwrap_or_default().iter().collect();
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| ExpressionError::InvalidNumber(literal.clone()))?;
                tokens.push(Spanned {
                    token: Token::Number(value),
                    position,
                });
                position = end;
                continue;
            }
            other => {
                debug!("Unexpected character '{}' at {}", other, position);
                return Err(ExpressionError::UnexpectedCharacter {
                    character: other,
                    position,
                });
            }
        };

        tokens.push(Spanned { token, position });
        position += 1;
    }

    Ok(tokens)
}

/// Recursive-descent parser over the token stream.
///
/// Grammar, lowest precedence first:
///
/// ```text
/// sum     := product (('+' | '-') product)*
/// product := unary (('*' | '/') unary)*
/// unary   := ('-' | '+') unary | power
/// power   := primary ('^' unary)?
/// primary := number | '(' sum ')'
/// ```
struct Parser {
    tokens: Vec<Spanned>,
    cursor: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<Spanned> {
        self.tokens.get(self.cursor).copied()
    }

    fn advance(&mut self) -> Option<Spanned> {
        let next = self.peek();
        if next.is_some() {
            self.cursor += 1;
        }
        next
    }

    fn parse_sum(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.parse_product()?;
        while let Some(next) = self.peek() {
            let combine: fn(Box<Expression>, Box<Expression>) -> Expression = match next.token {
                Token::Plus => Expression::Add,
                Token::Minus => Expression::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_product()?;
            left = combine(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_product(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.parse_unary()?;
        while let Some(next) = self.peek() {
            let combine: fn(Box<Expression>, Box<Expression>) -> Expression = match next.token {
                Token::Star => Expression::Mul,
                Token::Slash => Expression::Div,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = combine(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    /// Every level of parentheses, unary sign or exponent passes through
    /// here, so this is where recursion depth is counted.
    fn parse_unary(&mut self) -> Result<Expression, ExpressionError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            debug!("Expression nests deeper than {}", MAX_NESTING_DEPTH);
            return Err(ExpressionError::TooDeep(MAX_NESTING_DEPTH));
        }
        let result = self.parse_signed();
        self.depth -= 1;
        result
    }

    fn parse_signed(&mut self) -> Result<Expression, ExpressionError> {
        match self.peek().map(|s| s.token) {
            Some(Token::Minus) => {
                self.advance();
                Ok(Expression::Neg(Box::new(self.parse_unary()?)))
            }
            Some(Token::Plus) => {
                self.advance();
                self.parse_unary()
            }
            _ => self.parse_power(),
        }
    }

    fn parse_power(&mut self) -> Result<Expression, ExpressionError> {
        let base = self.parse_primary()?;
        if self.peek().is_some_and(|s| s.token == Token::Caret) {
            self.advance();
            let exponent = self.parse_unary()?;
            return Ok(Expression::Pow(Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn parse_primary(&mut self) -> Result<Expression, ExpressionError> {
        let next = self.advance().ok_or(ExpressionError::UnexpectedEnd)?;
        match next.token {
            Token::Number(n) => Ok(Expression::Number(n)),
            Token::LeftParen => {
                let inner = self.parse_sum()?;
                match self.advance() {
                    Some(Spanned {
                        token: Token::RightParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(other.unexpected()),
                    None => Err(ExpressionError::UnexpectedEnd),
                }
            }
            _ => Err(next.unexpected()),
        }
    }
}

/// # Errors
///
/// Returns an error if the text is empty, contains characters outside the
/// arithmetic grammar, has malformed number literals, or is not a complete
/// well-formed expression.
pub fn parse(input: &str) -> Result<Expression, ExpressionError> {
    debug!("Parsing expression: '{}'", input);

    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ExpressionError::Empty);
    }

    if tokens.len() > MAX_TOKENS {
        debug!("Expression has {} tokens", tokens.len());
        return Err(ExpressionError::TooLong(MAX_TOKENS));
    }

    let mut parser = Parser {
        tokens,
        cursor: 0,
        depth: 0,
    };
    let expression = parser.parse_sum()?;

    if let Some(trailing) = parser.peek() {
        debug!("Trailing input after complete expression: {}", trailing.token);
        return Err(trailing.unexpected());
    }

    debug!("Parsed expression: {}", expression);
    Ok(expression)
}

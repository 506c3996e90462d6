//! Bundled arithmetic evaluator
//!
//! Numbers, `+ - * / % ^`, unary signs, parentheses, the constants `pi`
//! and `e`, and a handful of numeric functions. Errors are reported in
//! the `SyntaxError: ... (char N)` shape common to expression libraries,
//! with 1-based character positions.

use std::fmt;

use super::FormulaValue;

/// Errors that can occur while parsing or evaluating an expression
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaError {
    Syntax { message: String, position: usize },
    UndefinedSymbol(String),
    UndefinedFunction(String),
    Arity {
        function: String,
        expected: usize,
        provided: usize,
    },
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaError::Syntax { message, position } => {
                write!(f, "SyntaxError: {} (char {})", message, position)
            }
            FormulaError::UndefinedSymbol(name) => write!(f, "Error: Undefined symbol {}", name),
            FormulaError::UndefinedFunction(name) => {
                write!(f, "Error: Undefined function {}", name)
            }
            FormulaError::Arity {
                function,
                expected,
                provided,
            } => write!(
                f,
                "TypeError: Wrong number of arguments in function {} ({} expected, {} provided)",
                function, expected, provided
            ),
        }
    }
}

impl std::error::Error for FormulaError {}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Op(char),
    LParen,
    RParen,
    Comma,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Ident(s) => f.write_str(s),
            Token::Op(c) => write!(f, "{}", c),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::Comma => f.write_str(","),
        }
    }
}

/// Token plus its 1-based position
type Spanned = (Token, usize);

/// Deepest nesting of parentheses, signs and exponents the parser follows
const MAX_DEPTH: usize = 256;

fn syntax(message: impl Into<String>, position: usize) -> FormulaError {
    FormulaError::Syntax {
        message: message.into(),
        position,
    }
}

fn tokenize(input: &str) -> Result<Vec<Spanned>, FormulaError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while let Some(&ch) = chars.get(i) {
        let position = i + 1;
        if ch.is_whitespace() {
            i += 1;
        } else if ch.is_ascii_digit() || ch == '.' {
            let start = i;
            while chars.get(i).is_some_and(|c| c.is_ascii_digit() || *c == '.') {
                i += 1;
            }
            if chars.get(i).is_some_and(|c| *c == 'e' || *c == 'E') {
                let mut j = i + 1;
                if chars.get(j).is_some_and(|c| *c == '+' || *c == '-') {
                    j += 1;
                }
                if chars.get(j).is_some_and(|c| c.is_ascii_digit()) {
                    i = j;
                    while chars.get(i).is_some_and(|c| c.is_ascii_digit()) {
                        i += 1;
                    }
                }
            }
            let literal: String = chars.get(start..i).unwrap_or_default().iter().collect();
            let value = literal
                .parse::<f64>()
                .map_err(|_| syntax(format!("Invalid number {}", literal), position))?;
            tokens.push((Token::Number(value), position));
        } else if ch.is_alphabetic() || ch == '_' || ch == '$' {
            let start = i;
            while chars
                .get(i)
                .is_some_and(|c| c.is_alphanumeric() || *c == '_' || *c == '$')
            {
                i += 1;
            }
            let ident: String = chars.get(start..i).unwrap_or_default().iter().collect();
            tokens.push((Token::Ident(ident), position));
        } else {
            let token = match ch {
                '+' | '-' | '*' | '/' | '%' | '^' => Token::Op(ch),
                '(' => Token::LParen,
                ')' => Token::RParen,
                ',' => Token::Comma,
                _ => return Err(syntax(format!("Syntax error in part \"{}\"", ch), position)),
            };
            tokens.push((token, position));
            i += 1;
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    end: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn position(&self) -> usize {
        self.tokens.get(self.pos).map(|(_, p)| *p).unwrap_or(self.end)
    }

    fn next(&mut self) -> Option<Spanned> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Run one level deeper, failing instead of exhausting the stack
    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, FormulaError>,
    ) -> Result<T, FormulaError> {
        if self.depth >= MAX_DEPTH {
            return Err(syntax("Maximum nesting depth exceeded", self.position()));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn expect_value(&self) -> FormulaError {
        match self.peek() {
            None => syntax("Unexpected end of expression", self.end),
            Some(Token::Op(op)) => syntax(format!("Unexpected operator {}", op), self.position()),
            Some(_) => syntax("Value expected", self.position()),
        }
    }

    fn expression(&mut self) -> Result<f64, FormulaError> {
        let mut value = self.term()?;
        while let Some(Token::Op(op @ ('+' | '-'))) = self.peek().cloned() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == '+' { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, FormulaError> {
        let mut value = self.unary()?;
        while let Some(Token::Op(op @ ('*' | '/' | '%'))) = self.peek().cloned() {
            self.pos += 1;
            let rhs = self.unary()?;
            value = match op {
                '*' => value * rhs,
                '/' => value / rhs,
                _ => value % rhs,
            };
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, FormulaError> {
        match self.peek() {
            Some(Token::Op('-')) => {
                self.pos += 1;
                Ok(-self.nested(Self::unary)?)
            }
            Some(Token::Op('+')) => {
                self.pos += 1;
                self.nested(Self::unary)
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<f64, FormulaError> {
        let base = self.primary()?;
        if let Some(Token::Op('^')) = self.peek() {
            self.pos += 1;
            // Right-associative, binds tighter than a unary sign on the left
            let exponent = self.nested(Self::unary)?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<f64, FormulaError> {
        let Some((token, position)) = self.next() else {
            return Err(self.expect_value());
        };
        match token {
            Token::Number(n) => Ok(n),
            Token::LParen => {
                let value = self.nested(Self::expression)?;
                match self.next() {
                    Some((Token::RParen, _)) => Ok(value),
                    Some((_, p)) => Err(syntax("Parenthesis ) expected", p)),
                    None => Err(syntax("Parenthesis ) expected", self.end)),
                }
            }
            Token::Ident(name) => {
                if let Some(Token::LParen) = self.peek() {
                    self.pos += 1;
                    let args = self.nested(Self::arguments)?;
                    return call(&name, &args);
                }
                constant(&name).ok_or(FormulaError::UndefinedSymbol(name))
            }
            Token::Op(op) => Err(syntax(format!("Unexpected operator {}", op), position)),
            Token::RParen | Token::Comma => Err(syntax("Value expected", position)),
        }
    }

    fn arguments(&mut self) -> Result<Vec<f64>, FormulaError> {
        let mut args = Vec::new();
        if let Some(Token::RParen) = self.peek() {
            self.pos += 1;
            return Ok(args);
        }
        loop {
            args.push(self.expression()?);
            match self.next() {
                Some((Token::Comma, _)) => continue,
                Some((Token::RParen, _)) => return Ok(args),
                Some((_, p)) => return Err(syntax("Parenthesis ) expected", p)),
                None => return Err(syntax("Parenthesis ) expected", self.end)),
            }
        }
    }
}

fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" | "PI" => Some(std::f64::consts::PI),
        "e" | "E" => Some(std::f64::consts::E),
        "true" => Some(1.0),
        "false" => Some(0.0),
        _ => None,
    }
}

fn arity(name: &str, args: &[f64], expected: usize) -> Result<(), FormulaError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(FormulaError::Arity {
            function: name.to_string(),
            expected,
            provided: args.len(),
        })
    }
}

fn call(name: &str, args: &[f64]) -> Result<f64, FormulaError> {
    let unary = |f: fn(f64) -> f64| -> Result<f64, FormulaError> {
        arity(name, args, 1)?;
        Ok(args.first().copied().map(f).unwrap_or(f64::NAN))
    };
    match name {
        "abs" => unary(f64::abs),
        "sqrt" => unary(f64::sqrt),
        "floor" => unary(f64::floor),
        "ceil" => unary(f64::ceil),
        "round" => match args {
            [x] => Ok(x.round()),
            [x, digits] => {
                let factor = 10f64.powi(*digits as i32);
                Ok((x * factor).round() / factor)
            }
            _ => Err(FormulaError::Arity {
                function: name.to_string(),
                expected: 2,
                provided: args.len(),
            }),
        },
        "min" | "max" if args.is_empty() => Err(FormulaError::Arity {
            function: name.to_string(),
            expected: 1,
            provided: 0,
        }),
        "min" => Ok(args.iter().copied().fold(f64::INFINITY, f64::min)),
        "max" => Ok(args.iter().copied().fold(f64::NEG_INFINITY, f64::max)),
        _ => Err(FormulaError::UndefinedFunction(name.to_string())),
    }
}

/// Default [`FormulaEvaluator`](super::FormulaEvaluator)
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticEvaluator;

impl ArithmeticEvaluator {
    pub fn eval(&self, expression: &str) -> Result<FormulaValue, FormulaError> {
        let tokens = tokenize(expression)?;
        let end = expression.chars().count() + 1;
        let mut parser = Parser {
            tokens,
            pos: 0,
            end,
            depth: 0,
        };
        let value = parser.expression()?;
        if let Some((token, position)) = parser.next() {
            return Err(syntax(format!("Unexpected token {}", token), position));
        }
        Ok(FormulaValue::Number(value))
    }
}

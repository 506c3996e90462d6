//! Formula cells
//!
//! A formula cell stores an expression that refers to other columns of
//! its row by name. Rendering substitutes the row's values into the
//! expression and hands the result to a [`FormulaEvaluator`]. Any
//! failure, including a panicking evaluator, is shown as text in the
//! cell instead of reaching the caller.

mod arith;
mod substitute;

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

pub use arith::{ArithmeticEvaluator, FormulaError};
pub use substitute::substitute;

use crate::model::{format_number, Row};

/// Result of evaluating an expression
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaValue {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl fmt::Display for FormulaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaValue::Number(n) if n.is_nan() => f.write_str("NaN"),
            FormulaValue::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            FormulaValue::Number(n) => f.write_str(&format_number(*n)),
            FormulaValue::Text(s) => f.write_str(s),
            FormulaValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// External expression evaluator: input string, output value or error
pub trait FormulaEvaluator {
    fn evaluate(&self, expression: &str) -> anyhow::Result<FormulaValue>;
}

impl FormulaEvaluator for ArithmeticEvaluator {
    fn evaluate(&self, expression: &str) -> anyhow::Result<FormulaValue> {
        Ok(self.eval(expression)?)
    }
}

impl<F> FormulaEvaluator for F
where
    F: Fn(&str) -> anyhow::Result<FormulaValue>,
{
    fn evaluate(&self, expression: &str) -> anyhow::Result<FormulaValue> {
        self(expression)
    }
}

/// What a formula cell displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaDisplay {
    pub text: String,
    /// True when `text` is an error message
    pub is_error: bool,
}

impl FormulaDisplay {
    fn value(text: String) -> Self {
        Self {
            text,
            is_error: false,
        }
    }

    fn error(text: String) -> Self {
        Self {
            text,
            is_error: true,
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Evaluate an expression for display; never fails
pub fn display_expression(evaluator: &dyn FormulaEvaluator, expression: &str) -> FormulaDisplay {
    if expression.trim().is_empty() {
        return FormulaDisplay::value(String::new());
    }
    match catch_unwind(AssertUnwindSafe(|| evaluator.evaluate(expression))) {
        Ok(Ok(value)) => FormulaDisplay::value(value.to_string()),
        Ok(Err(err)) => {
            tracing::debug!("Formula {:?} failed: {}", expression, err);
            FormulaDisplay::error(err.to_string())
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::warn!("Formula evaluator panicked on {:?}: {}", expression, message);
            FormulaDisplay::error(format!("Error: {}", message))
        }
    }
}

/// Substitute the row's values into the stored formula of
/// `own_column`, then evaluate for display
pub fn display_formula(
    evaluator: &dyn FormulaEvaluator,
    row: &Row,
    own_column: &str,
) -> FormulaDisplay {
    let stored = row.display(own_column);
    let expression = substitute(&stored, row, own_column);
    display_expression(evaluator, &expression)
}

//! Single search predicates.
//!
//! A [`Criterion`] binds a field accessor to an operator, a comparison
//! [`Operand`], and an inverse flag. Evaluation is strictly typed:
//! magnitude operators demand numbers, the wildcard operator demands
//! text, and nothing is coerced.

use std::fmt;

use regex::Regex;

use crate::error::{CompareError, CriterionError};
use crate::op::Operator;
use crate::value::{Number, Value};

/// Extracts a field's observed value from an item.
pub type Accessor<T> = for<'a> fn(&'a T) -> Value<'a>;

/// Owned comparison value stored in a criterion.
///
/// Unlike [`Value`], which borrows from the item under evaluation, an
/// `Operand` owns its data so criteria can outlive any particular item.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Text value. Lowercased when the criterion is constructed.
    Text(String),
    /// Numeric value.
    Number(Number),
    /// List value, compared element-wise.
    List(Vec<String>),
}

impl Operand {
    /// Returns the operand's kind name (used in error messages).
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Text(_) => "text",
            Operand::Number(_) => "number",
            Operand::List(_) => "list",
        }
    }

    fn lowercased(self) -> Operand {
        match self {
            Operand::Text(s) => Operand::Text(s.to_lowercase()),
            other => other,
        }
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Text(s.to_string())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Text(s)
    }
}

impl From<Number> for Operand {
    fn from(n: Number) -> Self {
        Operand::Number(n)
    }
}

impl From<Vec<String>> for Operand {
    fn from(items: Vec<String>) -> Self {
        Operand::List(items)
    }
}

macro_rules! operand_from_number {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Operand {
            fn from(n: $ty) -> Self {
                Operand::Number(Number::from(n))
            }
        })*
    };
}

operand_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// One search predicate: accessor, operator, operand, inverse flag.
///
/// Field name and text operand are lowercased once, at construction; the
/// wildcard pattern, if any, is compiled here too. Evaluate with
/// [`matches`](Criterion::matches).
pub struct Criterion<T> {
    field: String,
    accessor: Accessor<T>,
    op: Operator,
    operand: Operand,
    inverse: bool,
    pattern: Option<Regex>,
}

impl<T> Criterion<T> {
    /// Builds a criterion from its parts.
    ///
    /// Fails only when the operand is a wildcard pattern that does not
    /// compile. Operator/operand validation against a field's declared
    /// class happens in [`FieldTable::criterion`](crate::FieldTable::criterion);
    /// use that instead when a registry is available.
    pub fn new(
        field: impl Into<String>,
        accessor: Accessor<T>,
        op: Operator,
        operand: Operand,
    ) -> Result<Self, CriterionError> {
        let field = field.into().to_lowercase();
        let operand = operand.lowercased();
        let pattern = match (&op, &operand) {
            (Operator::Like, Operand::Text(text)) => Some(compile_glob(text)?),
            _ => None,
        };
        Ok(Criterion {
            field,
            accessor,
            op,
            operand,
            inverse: false,
            pattern,
        })
    }

    /// Flips the inverse flag: a matching item stops matching and vice
    /// versa.
    pub fn negated(mut self) -> Self {
        self.inverse = !self.inverse;
        self
    }

    /// The lowercased field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The criterion's operator.
    pub fn operator(&self) -> Operator {
        self.op
    }

    /// The criterion's comparison operand.
    pub fn operand(&self) -> &Operand {
        &self.operand
    }

    /// Returns `true` if the criterion is inverted.
    pub fn is_inverse(&self) -> bool {
        self.inverse
    }

    /// Evaluates the criterion against an item.
    ///
    /// The accessor's observed value is compared under the operator, then
    /// the inverse flag is applied. An accessor returning [`Value::None`]
    /// fails with [`CompareError::MissingField`].
    pub fn matches(&self, item: &T) -> Result<bool, CompareError> {
        let observed = (self.accessor)(item);
        if observed.is_none() {
            return Err(CompareError::MissingField {
                field: self.field.clone(),
            });
        }
        let hit = self.compare(&observed)?;
        Ok(self.inverse != hit)
    }

    fn compare(&self, observed: &Value<'_>) -> Result<bool, CompareError> {
        match self.op {
            Operator::Eq => Ok(self.loose_eq(observed)),
            Operator::Ne => Ok(!self.loose_eq(observed)),
            Operator::StrictEq => Ok(self.strict_eq(observed)),
            Operator::StrictNe => Ok(!self.strict_eq(observed)),
            Operator::Gt | Operator::Gte | Operator::Lt | Operator::Lte => {
                self.magnitude(observed)
            }
            Operator::Like => self.glob(observed),
            Operator::Custom(token) => Err(CompareError::UnsupportedOperator { token }),
        }
    }

    /// Loose equality: case-insensitive for text, variant-insensitive for
    /// numbers, element-wise for lists. Mismatched kinds never match.
    fn loose_eq(&self, observed: &Value<'_>) -> bool {
        match (observed, &self.operand) {
            (Value::Text(s), Operand::Text(t)) => s.to_lowercase() == *t,
            (Value::Number(n), Operand::Number(m)) => {
                n.compare(*m) == Some(std::cmp::Ordering::Equal)
            }
            (Value::List(xs), Operand::List(ys)) => {
                xs.len() == ys.len()
                    && xs
                        .iter()
                        .zip(ys)
                        .all(|(x, y)| x.to_lowercase() == y.to_lowercase())
            }
            _ => false,
        }
    }

    /// Strict equality: same kind, exact representation.
    fn strict_eq(&self, observed: &Value<'_>) -> bool {
        match (observed, &self.operand) {
            (Value::Text(s), Operand::Text(t)) => *s == t.as_str(),
            (Value::Number(n), Operand::Number(m)) => n.strict_eq(*m),
            (Value::List(xs), Operand::List(ys)) => {
                xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| x == y)
            }
            _ => false,
        }
    }

    fn magnitude(&self, observed: &Value<'_>) -> Result<bool, CompareError> {
        let (Value::Number(n), Operand::Number(m)) = (observed, &self.operand) else {
            return Err(CompareError::InvalidOperand {
                op: self.op.token(),
                expected: "numeric",
            });
        };
        Ok(match n.compare(*m) {
            Some(ordering) => self.op.eval_ordering(ordering),
            None => false, // NaN never matches
        })
    }

    fn glob(&self, observed: &Value<'_>) -> Result<bool, CompareError> {
        let (Value::Text(s), Some(pattern)) = (observed, &self.pattern) else {
            return Err(CompareError::InvalidOperand {
                op: self.op.token(),
                expected: "text",
            });
        };
        Ok(pattern.is_match(&s.to_lowercase()))
    }
}

impl<T> Clone for Criterion<T> {
    fn clone(&self) -> Self {
        Criterion {
            field: self.field.clone(),
            accessor: self.accessor,
            op: self.op,
            operand: self.operand.clone(),
            inverse: self.inverse,
            pattern: self.pattern.clone(),
        }
    }
}

impl<T> fmt::Debug for Criterion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Criterion")
            .field("field", &self.field)
            .field("op", &self.op)
            .field("operand", &self.operand)
            .field("inverse", &self.inverse)
            .finish_non_exhaustive()
    }
}

/// Compiles a shell-glob token to an anchored, pre-lowercased regex.
///
/// A token with no glob metacharacter is wrapped as `*token*` first, so
/// bare operands get substring semantics.
fn compile_glob(token: &str) -> Result<Regex, regex::Error> {
    let token = if token.contains(['?', '*', '[']) {
        token.to_string()
    } else {
        format!("*{token}*")
    };

    let mut pattern = String::with_capacity(token.len() + 2);
    pattern.push('^');
    let mut chars = token.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            '[' => {
                pattern.push('[');
                if chars.peek() == Some(&'!') {
                    chars.next();
                    pattern.push('^');
                }
                // Copy the class body verbatim; an unterminated class is
                // caught by the regex compiler.
                for c in chars.by_ref() {
                    pattern.push(c);
                    if c == ']' {
                        break;
                    }
                }
            }
            _ => pattern.push_str(&regex::escape(&c.to_string())),
        }
    }
    pattern.push('$');
    Regex::new(&pattern)
}

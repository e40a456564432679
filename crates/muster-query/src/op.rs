//! Comparison operators for search criteria.
//!
//! The [`Operator`] enum defines the supported comparison operators,
//! organized by the operand kinds they apply to. Not all operators are
//! valid for all fields; the field's
//! [`OperatorClass`](crate::OperatorClass) decides.

use std::cmp::Ordering;

/// Comparison operator for a search criterion.
///
/// Operators are grouped by the kinds they support:
/// - **Loose equality**: `Eq` (`=` / `==`), `Ne` (`!=`) - case-insensitive
///   for text, variant-insensitive for numbers
/// - **Strict equality**: `StrictEq` (`===`), `StrictNe` (`!==`) - same
///   kind, exact representation
/// - **Magnitude**: `Gt`, `Gte`, `Lt`, `Lte` - numeric only
/// - **Wildcard**: `Like` (`*=`) - shell-glob match on text
/// - **Custom**: a manager-declared token, evaluated by the manager's own
///   comparison hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Loose equality (`=` / `==`).
    Eq,
    /// Strict equality (`===`).
    StrictEq,
    /// Loose inequality (`!=`).
    Ne,
    /// Strict inequality (`!==`).
    StrictNe,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// Shell-glob wildcard match (`*=`).
    Like,
    /// Manager-declared operator token.
    Custom(&'static str),
}

impl Operator {
    /// Parses a standard operator token.
    ///
    /// Custom tokens are not parsed here; they are declared alongside a
    /// field's [`OperatorClass`](crate::OperatorClass) and constructed
    /// directly as [`Operator::Custom`].
    pub fn parse(token: &str) -> Option<Operator> {
        match token {
            "=" | "==" => Some(Operator::Eq),
            "===" => Some(Operator::StrictEq),
            "!=" => Some(Operator::Ne),
            "!==" => Some(Operator::StrictNe),
            ">" => Some(Operator::Gt),
            ">=" => Some(Operator::Gte),
            "<" => Some(Operator::Lt),
            "<=" => Some(Operator::Lte),
            "*=" => Some(Operator::Like),
            _ => None,
        }
    }

    /// Returns the operator's token.
    pub fn token(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::StrictEq => "===",
            Operator::Ne => "!=",
            Operator::StrictNe => "!==",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Like => "*=",
            Operator::Custom(token) => token,
        }
    }

    /// Returns `true` if this operator is valid for text fields.
    pub fn is_text_op(self) -> bool {
        matches!(
            self,
            Operator::Eq
                | Operator::StrictEq
                | Operator::Ne
                | Operator::StrictNe
                | Operator::Like
        )
    }

    /// Returns `true` if this operator is valid for numeric fields.
    pub fn is_numeric_op(self) -> bool {
        matches!(
            self,
            Operator::Eq
                | Operator::StrictEq
                | Operator::Ne
                | Operator::StrictNe
                | Operator::Gt
                | Operator::Gte
                | Operator::Lt
                | Operator::Lte
        )
    }

    /// Returns `true` if this operator is valid for set fields.
    pub fn is_set_op(self) -> bool {
        matches!(self, Operator::Eq | Operator::Ne)
    }

    /// Returns `true` if this is a manager-declared custom operator.
    pub fn is_custom(self) -> bool {
        matches!(self, Operator::Custom(_))
    }

    /// Evaluates a comparison given an ordering result.
    ///
    /// Used for numeric magnitude comparisons. Operators without ordering
    /// semantics return `false`.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Operator::Eq => ordering == Ordering::Equal,
            Operator::Ne => ordering != Ordering::Equal,
            Operator::Gt => ordering == Ordering::Greater,
            Operator::Gte => ordering != Ordering::Less,
            Operator::Lt => ordering == Ordering::Less,
            Operator::Lte => ordering != Ordering::Greater,
            _ => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_standard_tokens() {
        assert_eq!(Operator::parse("="), Some(Operator::Eq));
        assert_eq!(Operator::parse("=="), Some(Operator::Eq));
        assert_eq!(Operator::parse("==="), Some(Operator::StrictEq));
        assert_eq!(Operator::parse("!="), Some(Operator::Ne));
        assert_eq!(Operator::parse("!=="), Some(Operator::StrictNe));
        assert_eq!(Operator::parse(">"), Some(Operator::Gt));
        assert_eq!(Operator::parse(">="), Some(Operator::Gte));
        assert_eq!(Operator::parse("<"), Some(Operator::Lt));
        assert_eq!(Operator::parse("<="), Some(Operator::Lte));
        assert_eq!(Operator::parse("*="), Some(Operator::Like));
        assert_eq!(Operator::parse("~"), None);
    }

    #[test]
    fn token_round_trips() {
        for op in [
            Operator::Eq,
            Operator::StrictEq,
            Operator::Ne,
            Operator::StrictNe,
            Operator::Gt,
            Operator::Gte,
            Operator::Lt,
            Operator::Lte,
            Operator::Like,
        ] {
            assert_eq!(Operator::parse(op.token()), Some(op));
        }
    }

    #[test]
    fn op_type_checks() {
        assert!(Operator::Eq.is_text_op());
        assert!(Operator::Like.is_text_op());
        assert!(!Operator::Gt.is_text_op());

        assert!(Operator::Eq.is_numeric_op());
        assert!(Operator::Gt.is_numeric_op());
        assert!(!Operator::Like.is_numeric_op());

        assert!(Operator::Eq.is_set_op());
        assert!(Operator::Ne.is_set_op());
        assert!(!Operator::StrictEq.is_set_op());
        assert!(!Operator::Gt.is_set_op());

        assert!(Operator::Custom("~").is_custom());
        assert!(!Operator::Custom("~").is_text_op());
        assert!(!Operator::Custom("~").is_numeric_op());
    }

    #[test]
    fn op_eval_ordering() {
        assert!(Operator::Eq.eval_ordering(Ordering::Equal));
        assert!(!Operator::Eq.eval_ordering(Ordering::Less));

        assert!(Operator::Ne.eval_ordering(Ordering::Less));
        assert!(!Operator::Ne.eval_ordering(Ordering::Equal));

        assert!(Operator::Gt.eval_ordering(Ordering::Greater));
        assert!(!Operator::Gt.eval_ordering(Ordering::Equal));

        assert!(Operator::Gte.eval_ordering(Ordering::Greater));
        assert!(Operator::Gte.eval_ordering(Ordering::Equal));

        assert!(Operator::Lt.eval_ordering(Ordering::Less));
        assert!(!Operator::Lt.eval_ordering(Ordering::Equal));

        assert!(Operator::Lte.eval_ordering(Ordering::Less));
        assert!(Operator::Lte.eval_ordering(Ordering::Equal));

        assert!(!Operator::Like.eval_ordering(Ordering::Equal));
        assert!(!Operator::Custom("~").eval_ordering(Ordering::Equal));
    }

    #[test]
    fn custom_token_displays_itself() {
        assert_eq!(Operator::Custom("has-move").to_string(), "has-move");
        assert_eq!(Operator::Like.to_string(), "*=");
    }
}

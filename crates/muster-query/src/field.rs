//! Field registries: which fields a managed type exposes for search,
//! and what each field accepts.
//!
//! A [`FieldSpec`] names a field, binds its accessor, and assigns one of
//! the four [`OperatorClass`]es. A [`FieldTable`] holds a type's specs,
//! built once at registration, and is the validated path for
//! constructing criteria.

use std::fmt;

use crate::criterion::{Accessor, Criterion, Operand};
use crate::error::CriterionError;
use crate::op::Operator;

/// The operator-set class of a field.
///
/// The class fixes both the operators a field admits and the operand kind
/// criteria must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorClass {
    /// Equality and wildcard operators over a text operand.
    Text,
    /// Equality and magnitude operators over a numeric operand.
    Numeric,
    /// Loose equality over a list operand.
    Set,
    /// Manager-declared operator tokens; the operand is not constrained.
    Custom(&'static [&'static str]),
}

impl OperatorClass {
    /// Returns `true` if `op` is permitted for fields of this class.
    pub fn allows(&self, op: Operator) -> bool {
        match self {
            OperatorClass::Text => op.is_text_op(),
            OperatorClass::Numeric => op.is_numeric_op(),
            OperatorClass::Set => op.is_set_op(),
            OperatorClass::Custom(tokens) => {
                matches!(op, Operator::Custom(token) if tokens.contains(&token))
            }
        }
    }

    /// Returns `true` if `operand` is the kind this class compares.
    pub fn admits(&self, operand: &Operand) -> bool {
        match self {
            OperatorClass::Text => matches!(operand, Operand::Text(_)),
            OperatorClass::Numeric => matches!(operand, Operand::Number(_)),
            OperatorClass::Set => matches!(operand, Operand::List(_)),
            OperatorClass::Custom(_) => true,
        }
    }

    /// The operand kind this class expects (used in error messages).
    pub fn expected_kind(&self) -> &'static str {
        match self {
            OperatorClass::Text => "text",
            OperatorClass::Numeric => "number",
            OperatorClass::Set => "list",
            OperatorClass::Custom(_) => "any",
        }
    }
}

/// One searchable field of a managed type.
pub struct FieldSpec<T> {
    /// The field's name, matched case-insensitively.
    pub name: &'static str,
    /// Extracts the field's observed value from an item.
    pub accessor: Accessor<T>,
    /// The field's operator-set class.
    pub class: OperatorClass,
}

impl<T> Clone for FieldSpec<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldSpec<T> {}

impl<T> fmt::Debug for FieldSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("class", &self.class)
            .finish_non_exhaustive()
    }
}

/// The searchable fields of a managed type, built once at registration.
pub struct FieldTable<T> {
    specs: Vec<FieldSpec<T>>,
}

impl<T> FieldTable<T> {
    /// Builds a table from field specs.
    pub fn new(specs: impl IntoIterator<Item = FieldSpec<T>>) -> Self {
        FieldTable {
            specs: specs.into_iter().collect(),
        }
    }

    /// Looks up a field by name, case-insensitively.
    pub fn get(&self, field: &str) -> Option<&FieldSpec<T>> {
        self.specs
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(field))
    }

    /// Iterates the declared specs.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldSpec<T>> {
        self.specs.iter()
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns `true` if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Builds a validated criterion for `field`.
    ///
    /// Fails with [`CriterionError::UnknownField`] when the field is not
    /// declared, [`CriterionError::OperatorNotAllowed`] when the operator
    /// is outside the field's class, and
    /// [`CriterionError::OperandMismatch`] when the operand kind differs
    /// from what the class compares.
    pub fn criterion(
        &self,
        field: &str,
        op: Operator,
        operand: Operand,
    ) -> Result<Criterion<T>, CriterionError> {
        let spec = self.get(field).ok_or_else(|| CriterionError::UnknownField {
            field: field.to_lowercase(),
        })?;
        if !spec.class.allows(op) {
            return Err(CriterionError::OperatorNotAllowed {
                op: op.token(),
                field: spec.name,
            });
        }
        if !spec.class.admits(&operand) {
            return Err(CriterionError::OperandMismatch {
                field: spec.name,
                expected: spec.class.expected_kind(),
                actual: operand.kind(),
            });
        }
        Criterion::new(spec.name, spec.accessor, op, operand)
    }
}

impl<T> Clone for FieldTable<T> {
    fn clone(&self) -> Self {
        FieldTable {
            specs: self.specs.clone(),
        }
    }
}

impl<T> fmt::Debug for FieldTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.specs).finish()
    }
}

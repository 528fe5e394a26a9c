use bem_schema::DefaultValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One scalar cell of a flat record.
///
/// `Absent` is distinct from an explicitly empty string: an absent field was
/// never written, and reverse translation leaves the model default in force
/// for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Absent,
    Str(String),
    Real(f64),
    Int(i64),
    Choice(String),
    /// Target object's name. The flat format has no notion of in-memory
    /// identity, so references cross the boundary as names.
    Ref(String),
}

impl Value {
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Text content of a `Str`, `Choice`, or `Ref` cell.
    pub fn text(&self) -> Option<&str> {
        match self {
            Value::Str(s) | Value::Choice(s) | Value::Ref(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric content of a `Real` cell, widening `Int` the way the flat
    /// format reads numerics.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(v) => Some(*v),
            #[allow(clippy::cast_precision_loss)]
            Value::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Materialize a schema default literal as a value.
    pub fn from_default(default: DefaultValue) -> Value {
        match default {
            DefaultValue::Str(s) => Value::Str(s.to_owned()),
            DefaultValue::Real(v) => Value::Real(v),
            DefaultValue::Int(v) => Value::Int(v),
            DefaultValue::Choice(s) => Value::Choice(s.to_owned()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, ""),
            Value::Str(s) | Value::Choice(s) | Value::Ref(s) => write!(f, "{s}"),
            Value::Real(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

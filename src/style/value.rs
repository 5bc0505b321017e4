use std::fmt;

use serde::{Deserialize, Serialize};

/// A property value the compiler can carry through breakpoint ranges.
///
/// The compiler never looks inside a value except through [`as_number`],
/// which the boundary splitter uses to decide whether a value renders
/// differently on mobile and desktop.
///
/// [`as_number`]: StyleValue::as_number
pub trait StyleValue: Clone {
    fn as_number(&self) -> Option<f64>;
}

/// Default property value: a flag, a number, or a string (which also covers
/// keyword tokens such as `"auto"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }
}

impl StyleValue for Value {
    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

macro_rules! impl_number_value {
    ( $( $ty:ty ),+ ) => {
        $(
            impl From<$ty> for Value {
                fn from(number: $ty) -> Self {
                    Self::Number(number as f64)
                }
            }

            impl StyleValue for $ty {
                fn as_number(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )+
    };
}

impl_number_value!(f64, f32, i32, i64, u32, u64, usize);

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(flag) => serde_json::Value::Bool(flag),
            // Whole numbers stay integers so they render as `4`, not `4.0`.
            Value::Number(number) if number.fract() == 0.0 && number.abs() < i64::MAX as f64 => {
                serde_json::Value::from(number as i64)
            }
            Value::Number(number) => serde_json::Value::from(number),
            Value::Text(text) => serde_json::Value::String(text),
        }
    }
}

impl StyleValue for serde_json::Value {
    fn as_number(&self) -> Option<f64> {
        self.as_f64()
    }
}

impl StyleValue for bool {
    fn as_number(&self) -> Option<f64> {
        None
    }
}

impl StyleValue for String {
    fn as_number(&self) -> Option<f64> {
        None
    }
}

impl StyleValue for &str {
    fn as_number(&self) -> Option<f64> {
        None
    }
}

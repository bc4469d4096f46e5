//! Face values
//!
//! A die's faces are any totally ordered, hashable label type. Ordering is
//! needed to build canonical combo keys and stable face-count columns.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// A value that can label a die face
pub trait Face: Clone + Eq + Ord + Hash + Debug {
    /// Short name of the face's value type, kept as analyzer metadata.
    fn type_label(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl Face for String {
    fn type_label(&self) -> &'static str {
        "str"
    }
}

impl Face for &'static str {
    fn type_label(&self) -> &'static str {
        "str"
    }
}

impl Face for char {
    fn type_label(&self) -> &'static str {
        "char"
    }
}

macro_rules! integer_faces {
    ($($ty:ty),*) => {
        $(impl Face for $ty {
            fn type_label(&self) -> &'static str {
                "int"
            }
        })*
    };
}

integer_faces!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

/// Dynamically typed face used by config files and the Python bindings
///
/// Deserializes from either a JSON integer or a JSON string.
///
/// # Example
/// ```
/// use montecarlo_core_rs::FaceValue;
///
/// let faces: Vec<FaceValue> = serde_json::from_str(r#"[1, "two"]"#).unwrap();
/// assert_eq!(faces, vec![FaceValue::Int(1), FaceValue::Text("two".into())]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FaceValue {
    Int(i64),
    Text(String),
}

impl Face for FaceValue {
    fn type_label(&self) -> &'static str {
        match self {
            FaceValue::Int(_) => "int",
            FaceValue::Text(_) => "str",
        }
    }
}

impl Display for FaceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaceValue::Int(v) => write!(f, "{}", v),
            FaceValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for FaceValue {
    fn from(v: i64) -> Self {
        FaceValue::Int(v)
    }
}

impl From<&str> for FaceValue {
    fn from(s: &str) -> Self {
        FaceValue::Text(s.to_string())
    }
}

impl From<String> for FaceValue {
    fn from(s: String) -> Self {
        FaceValue::Text(s)
    }
}

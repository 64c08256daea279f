use std::fmt;

/// A domain value: what an accessor extracts from a record and what a
/// [`ColorScale`](crate::ColorScale) maps to a color.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Return the number held by `self`, if any.  Text that parses as
    /// a number counts as numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(x) => Some(*x),
            Value::Text(s) => s.trim().parse().ok(),
        }
    }

    /// The key under which discrete scales remember this value.
    /// `Number(1.)` and `Text("1")` share a key.
    pub fn key(&self) -> String { self.to_string() }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(x) => write!(f, "{x}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! from_number { ($($t: ty),*) => {
    $( impl From<$t> for Value {
        #[inline]
        fn from(x: $t) -> Self { Value::Number(x as f64) }
    } )*
}}
from_number!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::Text(s.to_string()) }
}

impl From<String> for Value {
    fn from(s: String) -> Self { Value::Text(s) }
}

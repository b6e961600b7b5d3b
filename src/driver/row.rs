//! Row type - named-column rows returned by the driver

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// A single cell value in a row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// NULL value
    Null,
    /// Boolean value
    Bool(bool),
    /// Signed integer value
    Int(i64),
    /// Unsigned integer value
    UInt(u64),
    /// Floating point value
    Float(f64),
    /// Text value
    Text(String),
    /// Binary data
    Bytes(Vec<u8>),
}

impl Value {
    /// Check if this value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Convert to i64, returns None if NULL or not convertible
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::UInt(u) => i64::try_from(*u).ok(),
            Value::Float(f) => Some(*f as i64),
            Value::Bool(b) => Some(if *b { 1 } else { 0 }),
            Value::Text(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Convert to u64, returns None if NULL, negative or not convertible
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::UInt(u) => Some(*u),
            Value::Int(i) => u64::try_from(*i).ok(),
            _ => None,
        }
    }

    /// Convert to string reference, returns None if not text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::UInt(u) => write!(f, "{}", u),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(s) => write!(f, "{}", s),
            Value::Bytes(b) => {
                write!(f, "0x")?;
                for byte in b {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}

/// A row of named values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    /// Column names, parallel to `values`
    columns: Vec<String>,
    /// The values in this row
    values: Vec<Value>,
}

impl Row {
    /// Create a new row from parallel column/value vectors
    pub fn new(columns: Vec<String>, values: Vec<Value>) -> Self {
        Row { columns, values }
    }

    /// Create a row from (name, value) pairs
    pub fn from_pairs(pairs: Vec<(&str, Value)>) -> Self {
        let (columns, values) = pairs
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .unzip();
        Row { columns, values }
    }

    /// Get the number of columns in this row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row has no columns
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a value by column index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Get a value by column name.
    ///
    /// Lookup ignores ASCII case and underscores, so `return_id` and
    /// `returnId` address the same column regardless of how the procedure
    /// aliased it.
    pub fn get_named(&self, name: &str) -> Option<&Value> {
        let wanted = normalize(name);
        self.columns
            .iter()
            .position(|c| normalize(c) == wanted)
            .and_then(|i| self.values.get(i))
    }

    /// Column names in declaration order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All values as a slice
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Iterate over (name, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_get() {
        let row = Row::from_pairs(vec![("id", Value::Int(42)), ("name", Value::Text("x".into()))]);
        assert_eq!(row.len(), 2);
        assert_eq!(row.get(0), Some(&Value::Int(42)));
        assert!(row.get(2).is_none());
    }

    #[test]
    fn test_row_get_named_ignores_case_and_underscores() {
        let row = Row::from_pairs(vec![("return_id", Value::Int(5))]);
        assert_eq!(row.get_named("return_id"), Some(&Value::Int(5)));
        assert_eq!(row.get_named("returnId"), Some(&Value::Int(5)));
        assert_eq!(row.get_named("RETURNID"), Some(&Value::Int(5)));
        assert!(row.get_named("message").is_none());
    }

    #[test]
    fn test_value_as_i64() {
        assert_eq!(Value::Int(-3).as_i64(), Some(-3));
        assert_eq!(Value::UInt(7).as_i64(), Some(7));
        assert_eq!(Value::Text("12".into()).as_i64(), Some(12));
        assert_eq!(Value::Null.as_i64(), None);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Bytes(vec![0xab, 0x01]).to_string(), "0xab01");
    }
}

//! Flat records produced by projection.

use std::fmt;

use rust_decimal::Decimal;

/// A single projected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Absent or JSON `null`.
    Null,
    /// Text value.
    Text(String),
    /// Whole number.
    Integer(i64),
    /// Exact decimal, used for money.
    Decimal(Decimal),
    /// Boolean flag.
    Bool(bool),
}

impl FieldValue {
    /// Returns true for [`FieldValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the text, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer, if this is an integer value.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the decimal, if this is a decimal value.
    #[must_use]
    pub const fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the flag, if this is a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// One row: column names mapped to values, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectedRecord {
    columns: Vec<(&'static str, FieldValue)>,
}

impl ProjectedRecord {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { columns: Vec::with_capacity(capacity) }
    }

    pub(crate) fn push(&mut self, name: &'static str, value: FieldValue) {
        self.columns.push((name, value));
    }

    /// Returns the value of column `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.columns.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Returns the text in column `name`, or `None` if it is null or not text.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    /// Returns the integer in column `name`.
    #[must_use]
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_integer)
    }

    /// Returns the decimal in column `name`.
    #[must_use]
    pub fn decimal(&self, name: &str) -> Option<Decimal> {
        self.get(name).and_then(FieldValue::as_decimal)
    }

    /// Returns true if column `name` exists and is null.
    #[must_use]
    pub fn is_null(&self, name: &str) -> bool {
        self.get(name).is_some_and(FieldValue::is_null)
    }

    /// Column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|(n, _)| *n)
    }

    /// `(name, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.columns.iter().map(|(n, v)| (*n, v))
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the record has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn sample() -> ProjectedRecord {
        let mut record = ProjectedRecord::with_capacity(4);
        record.push("orderId", FieldValue::Text("o-1".to_owned()));
        record.push("quantity", FieldValue::Integer(12));
        record.push("total", FieldValue::Decimal(Decimal::from_str("47.50").unwrap()));
        record.push("smallOrderFee", FieldValue::Null);
        record
    }

    #[test]
    fn test_record_accessors() {
        let record = sample();
        assert_eq!(record.len(), 4);
        assert_eq!(record.text("orderId"), Some("o-1"));
        assert_eq!(record.integer("quantity"), Some(12));
        assert_eq!(record.decimal("total"), Decimal::from_str("47.5").ok());
        assert!(record.is_null("smallOrderFee"));
        assert!(!record.is_null("missing"));
        assert!(record.get("missing").is_none());
    }

    #[test]
    fn test_record_keeps_column_order() {
        let names: Vec<_> = sample().column_names().collect();
        assert_eq!(names, vec!["orderId", "quantity", "total", "smallOrderFee"]);
    }

    #[test]
    fn test_wrong_kind_accessor_is_none() {
        let record = sample();
        assert!(record.text("quantity").is_none());
        assert!(record.decimal("orderId").is_none());
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Null.to_string(), "NULL");
        assert_eq!(FieldValue::Text("IL".to_owned()).to_string(), "IL");
        assert_eq!(FieldValue::Integer(-3).to_string(), "-3");
        assert_eq!(FieldValue::Decimal(Decimal::from_str("8.50").unwrap()).to_string(), "8.50");
        assert_eq!(FieldValue::Bool(true).to_string(), "true");
        assert_eq!(FieldValue::Bool(false).as_bool(), Some(false));
    }
}

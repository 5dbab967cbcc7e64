//! Dynamically typed cell values.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::table::schema::ColumnType;

/// A single cell value in a row.
///
/// # Ordering
/// Values are totally ordered so they can key ordered indices:
/// - `Null` sorts before every non-null value
/// - values of different types sort by type tag (Integer < Text < Real)
/// - values of the same type sort natively, with `Real` using
///   `f64::total_cmp` so even NaN has a defined position
///
/// Equality and hashing agree with this ordering (`Real` compares and
/// hashes by bit pattern), so `Value` can also key hash indices.
#[derive(Debug, Clone)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// 64-bit signed integer.
    Integer(i64),
    /// UTF-8 string.
    Text(String),
    /// 64-bit float.
    Real(f64),
}

impl Value {
    /// Check if this value is NULL.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The column type this value inhabits.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Value::Null => ColumnType::Null,
            Value::Integer(_) => ColumnType::Integer,
            Value::Text(_) => ColumnType::Text,
            Value::Real(_) => ColumnType::Real,
        }
    }

    /// Rank used to order values of mismatched non-null types.
    fn type_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Integer(_) => 1,
            Value::Text(_) => 2,
            Value::Real(_) => 3,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Null, _) => Ordering::Less,
            (_, Value::Null) => Ordering::Greater,
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Real(a), Value::Real(b)) => a.total_cmp(b),
            _ => self.type_rank().cmp(&other.type_rank()),
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_rank().hash(state);
        match self {
            Value::Null => {}
            Value::Integer(i) => i.hash(state),
            Value::Text(s) => s.hash(state),
            // Bit pattern, to agree with total_cmp equality.
            Value::Real(r) => r.to_bits().hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Text(s) => write!(f, "{}", s),
            Value::Real(r) => write!(f, "{}", r),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sorts_first() {
        assert!(Value::Null < Value::Integer(i64::MIN));
        assert!(Value::Null < Value::Text(String::new()));
        assert!(Value::Null < Value::Real(f64::NEG_INFINITY));
        assert_eq!(Value::Null, Value::Null);
    }

    #[test]
    fn test_same_type_native_order() {
        assert!(Value::Integer(1) < Value::Integer(2));
        assert!(Value::Text("a".into()) < Value::Text("b".into()));
        assert!(Value::Real(1.5) < Value::Real(2.5));
    }

    #[test]
    fn test_mismatched_types_order_by_tag() {
        assert!(Value::Integer(999) < Value::Text("a".into()));
        assert!(Value::Text("z".into()) < Value::Real(0.0));
    }

    #[test]
    fn test_real_total_order() {
        // total_cmp gives NaN a defined position.
        let nan = Value::Real(f64::NAN);
        assert_eq!(nan.cmp(&nan), Ordering::Equal);
        assert!(Value::Real(f64::INFINITY) < nan);
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of(v: &Value) -> u64 {
            let mut h = DefaultHasher::new();
            v.hash(&mut h);
            h.finish()
        }

        assert_eq!(hash_of(&Value::Integer(5)), hash_of(&Value::Integer(5)));
        assert_eq!(
            hash_of(&Value::Text("x".into())),
            hash_of(&Value::Text("x".into()))
        );
        assert_eq!(hash_of(&Value::Real(1.25)), hash_of(&Value::Real(1.25)));
    }

    #[test]
    fn test_column_type() {
        assert_eq!(Value::Null.column_type(), ColumnType::Null);
        assert_eq!(Value::Integer(1).column_type(), ColumnType::Integer);
        assert_eq!(Value::Text("t".into()).column_type(), ColumnType::Text);
        assert_eq!(Value::Real(0.5).column_type(), ColumnType::Real);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Value::Null), "NULL");
        assert_eq!(format!("{}", Value::Integer(-7)), "-7");
        assert_eq!(format!("{}", Value::Text("hi".into())), "hi");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(3i64), Value::Integer(3));
        assert_eq!(Value::from("s"), Value::Text("s".into()));
        assert_eq!(Value::from(2.5f64), Value::Real(2.5));
    }
}

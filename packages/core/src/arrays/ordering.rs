//! Sorting records by a numeric field

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TreeError;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" => Ok(Direction::Asc),
            "DESC" => Ok(Direction::Desc),
            other => Err(TreeError::InvalidDirection(other.to_string())),
        }
    }
}

/// Copy of `records` ordered by the numeric value of `key`
///
/// The sort is stable. Records whose field is absent or not a number are
/// placed after all numeric ones, in their original order, for both
/// directions.
#[must_use]
pub fn sort_by(records: &[Value], key: &str, direction: Direction) -> Vec<Value> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        compare(
            a.get(key).and_then(Value::as_f64),
            b.get(key).and_then(Value::as_f64),
            direction,
        )
    });
    sorted
}

fn compare(a: Option<f64>, b: Option<f64>, direction: Direction) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            Direction::Asc => a.total_cmp(&b),
            Direction::Desc => b.total_cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn people() -> Vec<Value> {
        json!([
            {"age": 44, "name": "Mary"},
            {"age": 22, "name": "John"},
            {"age": 31, "name": "Mark"}
        ])
        .as_array()
        .cloned()
        .unwrap_or_default()
    }

    fn names(records: &[Value]) -> Vec<&str> {
        records
            .iter()
            .filter_map(|r| r.get("name").and_then(Value::as_str))
            .collect()
    }

    #[test]
    fn descending() {
        let sorted = sort_by(&people(), "age", Direction::Desc);
        assert_eq!(names(&sorted), ["Mary", "Mark", "John"]);
    }

    #[test]
    fn ascending_leaves_input_alone() {
        let records = people();
        let sorted = sort_by(&records, "age", Direction::Asc);
        assert_eq!(names(&sorted), ["John", "Mark", "Mary"]);
        assert_eq!(names(&records), ["Mary", "John", "Mark"]);
    }

    #[test]
    fn non_numeric_last() {
        let mut records = people();
        records.insert(0, json!({"name": "Ghost"}));
        let sorted = sort_by(&records, "age", Direction::Desc);
        assert_eq!(names(&sorted), ["Mary", "Mark", "John", "Ghost"]);
    }

    #[test]
    fn parses_direction() {
        assert_eq!("ASC".parse::<Direction>().ok(), Some(Direction::Asc));
        assert_eq!("DESC".parse::<Direction>().ok(), Some(Direction::Desc));
        assert!(matches!(
            "up".parse::<Direction>(),
            Err(TreeError::InvalidDirection(ref s)) if s == "up"
        ));
        assert_eq!(Direction::Desc.to_string(), "DESC");
    }
}

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde_json::Value;

/// One named tabular result set from a stats API payload.
///
/// Every endpoint responds with `{"resultSets": [{"name", "headers",
/// "rowSet"}, ...]}`; this wraps one of those tables and resolves columns
/// by header name instead of position.
pub struct ResultSet {
    columns: HashMap<String, usize>,
    rows: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Extract the result set called `name` from a full response payload
    pub fn extract(payload: &Value, name: &str) -> Result<Self> {
        let sets = payload
            .get("resultSets")
            .and_then(Value::as_array)
            .context("Response has no resultSets array")?;

        let set = sets
            .iter()
            .find(|s| s.get("name").and_then(Value::as_str) == Some(name))
            .with_context(|| format!("Response has no result set named {name}"))?;

        let headers = set
            .get("headers")
            .and_then(Value::as_array)
            .with_context(|| format!("Result set {name} has no headers"))?;

        let columns = headers
            .iter()
            .enumerate()
            .filter_map(|(idx, h)| h.as_str().map(|s| (s.to_string(), idx)))
            .collect();

        let rows = set
            .get("rowSet")
            .and_then(Value::as_array)
            .with_context(|| format!("Result set {name} has no rowSet"))?
            .iter()
            .filter_map(|row| row.as_array().cloned())
            .collect();

        Ok(Self { columns, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|values| Row {
            columns: &self.columns,
            values,
        })
    }
}

/// A single row with header-addressed field access
pub struct Row<'a> {
    columns: &'a HashMap<String, usize>,
    values: &'a [Value],
}

impl Row<'_> {
    fn cell(&self, column: &str) -> Result<&Value> {
        let idx = self
            .columns
            .get(column)
            .with_context(|| format!("No column named {column}"))?;
        self.values
            .get(*idx)
            .with_context(|| format!("Row is missing column {column}"))
    }

    pub fn string(&self, column: &str) -> Result<String> {
        self.cell(column)?
            .as_str()
            .map(str::to_string)
            .with_context(|| format!("Column {column} is not a string"))
    }

    pub fn number(&self, column: &str) -> Result<f64> {
        self.cell(column)?
            .as_f64()
            .with_context(|| format!("Column {column} is not a number"))
    }

    pub fn integer(&self, column: &str) -> Result<i64> {
        self.cell(column)?
            .as_i64()
            .with_context(|| format!("Column {column} is not an integer"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> Value {
        json!({
            "resource": "playergamelog",
            "resultSets": [{
                "name": "PlayerGameLog",
                "headers": ["SEASON_ID", "Game_ID", "PTS"],
                "rowSet": [
                    ["22024", "0022400042", 31],
                    ["22024", "0022400017", 25.0]
                ]
            }]
        })
    }

    #[test]
    fn extracts_rows_by_header_name() {
        let set = ResultSet::extract(&payload(), "PlayerGameLog").unwrap();
        assert_eq!(set.len(), 2);

        let first = set.rows().next().unwrap();
        assert_eq!(first.string("Game_ID").unwrap(), "0022400042");
        assert_eq!(first.number("PTS").unwrap(), 31.0);
    }

    #[test]
    fn missing_result_set_is_an_error() {
        assert!(ResultSet::extract(&payload(), "CommonTeamRoster").is_err());
    }

    #[test]
    fn missing_column_is_an_error() {
        let set = ResultSet::extract(&payload(), "PlayerGameLog").unwrap();
        let row = set.rows().next().unwrap();
        assert!(row.number("REB").is_err());
    }
}

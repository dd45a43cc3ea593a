use common::NameKey;
use serde::{Deserialize, Serialize};

/// A bound query parameter.
///
/// Parameter values travel out-of-band from the query text; the text only
/// ever references them by placeholder name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParameter {
    /// Placeholder name, e.g. `@name_key`.
    pub name: String,

    /// The bound value.
    pub value: serde_json::Value,
}

/// Exact-match filter on one document field, referencing a bound parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    /// The document field to compare.
    pub field: String,

    /// Placeholder name of the parameter holding the expected value.
    pub parameter: String,
}

/// Parameterized query specification against one collection.
///
/// Filters pair a field with a bound parameter; caller-supplied values never
/// appear in the rendered query text. A key containing quotes or other
/// query-special characters therefore matches exactly the document whose
/// stored value equals it, regardless of how the query is transmitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySpec {
    filters: Vec<FieldFilter>,
    parameters: Vec<QueryParameter>,
    limit: Option<usize>,
}

impl QuerySpec {
    /// Creates a new empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the exact-match lookup by normalized name key.
    pub fn lookup_by_name_key(name_key: &NameKey) -> Self {
        Self::new().filter_eq("name_key", name_key.as_str()).limit(1)
    }

    /// Adds an exact-match filter on `field`, binding `value` as `@field`.
    pub fn filter_eq(
        mut self,
        field: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        let field = field.into();
        let parameter = format!("@{field}");
        self.parameters.push(QueryParameter {
            name: parameter.clone(),
            value: value.into(),
        });
        self.filters.push(FieldFilter { field, parameter });
        self
    }

    /// Limits the number of documents returned.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns the filters in declaration order.
    pub fn filters(&self) -> &[FieldFilter] {
        &self.filters
    }

    /// Returns the bound parameters in declaration order.
    pub fn parameters(&self) -> &[QueryParameter] {
        &self.parameters
    }

    /// Returns the result limit, if one was set.
    pub fn result_limit(&self) -> Option<usize> {
        self.limit
    }

    /// Renders the SQL-like query text with parameter placeholders only.
    pub fn text(&self) -> String {
        let mut text = String::from("SELECT ");
        if let Some(limit) = self.limit {
            text.push_str(&format!("TOP {limit} "));
        }
        text.push_str("* FROM c");
        for (i, filter) in self.filters.iter().enumerate() {
            text.push_str(if i == 0 { " WHERE " } else { " AND " });
            text.push_str(&format!("c.{} = {}", filter.field, filter.parameter));
        }
        text
    }
}

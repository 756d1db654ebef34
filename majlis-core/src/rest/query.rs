//! Request building for the hosted data API.
//!
//! The service speaks PostgREST conventions: filters as `column=eq.value`
//! pairs, ordering as `order=column.desc`, embedded joins inside `select`,
//! and exact counts reported through the `Content-Range` header.

/// One table read, built up and turned into query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    pub table: &'static str,
    select: String,
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<usize>,
}

impl TableQuery {
    #[must_use]
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            select: String::from("*"),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Column list, including embedded joins such as
    /// `*,author:profiles(*),game:games(*)`.
    #[must_use]
    pub fn select(mut self, columns: &str) -> Self {
        self.select = columns.to_string();
        self
    }

    /// Equality predicate on one column.
    #[must_use]
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_string(), format!("eq.{value}")));
        self
    }

    /// Order by one column, descending.
    #[must_use]
    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some(format!("{column}.desc"));
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query-string pairs in the order the service expects them.
    #[must_use]
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![(String::from("select"), self.select.clone())];
        params.extend(self.filters.iter().cloned());
        if let Some(order) = &self.order {
            params.push((String::from("order"), order.clone()));
        }
        if let Some(limit) = self.limit {
            params.push((String::from("limit"), limit.to_string()));
        }
        params
    }

    /// Filter pairs only, for mutations that scope by predicate.
    #[must_use]
    pub fn filter_params(&self) -> Vec<(String, String)> {
        self.filters.clone()
    }
}

/// Total row count from a `Content-Range` value such as `0-0/57` or `*/57`.
#[must_use]
pub fn parse_content_range(value: &str) -> Option<u64> {
    value.rsplit('/').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_compose_select_filters_order_and_limit() {
        let query = TableQuery::new("posts")
            .select("*,author:profiles(*),game:games(*)")
            .eq("game_id", "g1")
            .order_desc("created_at")
            .limit(3);
        assert_eq!(
            query.params(),
            vec![
                (
                    String::from("select"),
                    String::from("*,author:profiles(*),game:games(*)")
                ),
                (String::from("game_id"), String::from("eq.g1")),
                (String::from("order"), String::from("created_at.desc")),
                (String::from("limit"), String::from("3")),
            ]
        );
    }

    #[test]
    fn bare_query_selects_everything() {
        assert_eq!(
            TableQuery::new("games").params(),
            vec![(String::from("select"), String::from("*"))]
        );
    }

    #[test]
    fn filter_params_exclude_projection() {
        let query = TableQuery::new("user_roles").eq("user_id", "u1");
        assert_eq!(
            query.filter_params(),
            vec![(String::from("user_id"), String::from("eq.u1"))]
        );
    }

    #[test]
    fn content_range_totals_parse_from_both_shapes() {
        assert_eq!(parse_content_range("0-0/57"), Some(57));
        assert_eq!(parse_content_range("*/0"), Some(0));
        assert_eq!(parse_content_range("garbage"), None);
    }
}

//! Parameterized listing queries: optional substring filters plus a
//! whitelisted sort.
//!
//! Filter values are always bound parameters. Identifiers (columns for
//! `ILIKE`/`ORDER BY`) are `&'static str` supplied by per-endpoint sort-key
//! enums in the repository modules, so user input never reaches the SQL text.

/// Sort direction for ORDER BY clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    /// `DESC` only on a case-insensitive "desc"; anything else is `ASC`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

/// Incremental builder for a single SELECT statement with numbered
/// placeholders.
///
/// `prebound` is the count of parameters the caller binds ahead of the
/// builder's own (e.g. the requesting user's id in a JOIN condition).
#[derive(Debug)]
pub struct SqlBuilder {
    sql: String,
    params: Vec<String>,
    prebound: usize,
    has_where: bool,
}

impl SqlBuilder {
    pub fn new(base: impl Into<String>, prebound: usize) -> Self {
        Self { sql: base.into(), params: Vec::new(), prebound, has_where: false }
    }

    fn next_placeholder(&self) -> String {
        format!("${}", self.prebound + self.params.len() + 1)
    }

    fn connective(&mut self) -> &'static str {
        if self.has_where {
            " AND"
        } else {
            self.has_where = true;
            " WHERE"
        }
    }

    /// Case-insensitive "contains" filter. Empty or absent values add
    /// nothing.
    pub fn and_contains(&mut self, column: &'static str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            let placeholder = self.next_placeholder();
            let connective = self.connective();
            self.sql.push_str(&format!("{} {} ILIKE {}", connective, column, placeholder));
            self.params.push(format!("%{}%", value));
        }
    }

    /// Exact-match filter, also skipped for empty values.
    pub fn and_eq(&mut self, column: &'static str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            let placeholder = self.next_placeholder();
            let connective = self.connective();
            self.sql.push_str(&format!("{} {} = {}", connective, column, placeholder));
            self.params.push(value.to_string());
        }
    }

    /// Append a raw fragment (GROUP BY etc.). Callers pass literals only.
    pub fn push(&mut self, fragment: &'static str) {
        self.sql.push_str(fragment);
    }

    pub fn order_by(&mut self, column: &'static str, direction: SortDirection) {
        self.sql.push_str(&format!(" ORDER BY {} {}", column, direction.as_sql()));
    }

    pub fn finish(self) -> (String, Vec<String>) {
        (self.sql, self.params)
    }
}

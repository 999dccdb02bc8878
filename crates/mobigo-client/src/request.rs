//! Query-string options for list and search requests.
//!
//! Paging and filters render one parameter each; every sort criterion is its
//! own repeated `sort=<field>,<direction>` parameter.

use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
  Asc,
  Desc,
}

/// Options for `GET /api/<resource>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
  pub page:    Option<u32>,
  pub size:    Option<u32>,
  pub sort:    Vec<String>,
  /// Extra `key=value` pairs, sent in insertion order.
  pub filters: Vec<(String, String)>,
}

impl RequestOptions {
  pub fn new() -> Self { Self::default() }

  pub fn page(mut self, page: u32) -> Self {
    self.page = Some(page);
    self
  }

  pub fn size(mut self, size: u32) -> Self {
    self.size = Some(size);
    self
  }

  pub fn sort_by(mut self, field: &str, direction: Direction) -> Self {
    self.sort.push(format!("{field},{direction}"));
    self
  }

  pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.filters.push((key.into(), value.into()));
    self
  }

  pub fn to_query(&self) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    if let Some(page) = self.page {
      pairs.push(("page".to_string(), page.to_string()));
    }
    if let Some(size) = self.size {
      pairs.push(("size".to_string(), size.to_string()));
    }
    pairs.extend(self.filters.iter().cloned());
    pairs.extend(self.sort.iter().map(|s| ("sort".to_string(), s.clone())));
    pairs
  }
}

/// Options for `GET /api/<resource>/_search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Search {
  pub query:   String,
  pub options: RequestOptions,
}

impl Search {
  pub fn new(query: impl Into<String>) -> Self {
    Self {
      query:   query.into(),
      options: RequestOptions::default(),
    }
  }

  pub fn with_options(mut self, options: RequestOptions) -> Self {
    self.options = options;
    self
  }

  pub fn to_query(&self) -> Vec<(String, String)> {
    let mut pairs = vec![("query".to_string(), self.query.clone())];
    pairs.extend(self.options.to_query());
    pairs
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
  }

  #[test]
  fn empty_options_render_nothing() {
    assert!(RequestOptions::new().to_query().is_empty());
  }

  #[test]
  fn sort_criteria_are_repeated_parameters() {
    let options = RequestOptions::new()
      .page(2)
      .size(20)
      .filter("eagerload", "true")
      .sort_by("dateDepart", Direction::Desc)
      .sort_by("id", Direction::Asc);
    assert_eq!(
      options.to_query(),
      pairs(&[
        ("page", "2"),
        ("size", "20"),
        ("eagerload", "true"),
        ("sort", "dateDepart,desc"),
        ("sort", "id,asc"),
      ])
    );
  }

  #[test]
  fn search_puts_query_first() {
    let search = Search::new("douala").with_options(RequestOptions::new().size(5));
    assert_eq!(search.to_query(), pairs(&[("query", "douala"), ("size", "5")]));
  }
}

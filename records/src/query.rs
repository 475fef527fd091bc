//! List query: paging window and field filters for collection endpoints.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

pub const DEFAULT_LIMIT: u8 = 10;
pub const MAX_LIMIT: u8 = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    limit: u8,
    offset: u32,
    filters: Vec<(String, String)>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
            filters: Vec::new(),
        }
    }
}

impl ListQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size, clamped to `1..=MAX_LIMIT`.
    #[must_use]
    pub fn with_limit(mut self, limit: u8) -> Self {
        self.limit = limit.clamp(1, MAX_LIMIT);
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Add a filter; blank values are ignored and repeated keys replace.
    #[must_use]
    pub fn with_filter(mut self, key: &str, value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            return self;
        }
        self.filters.retain(|(k, _)| k != key);
        self.filters.push((key.to_owned(), value.to_owned()));
        self
    }

    #[must_use]
    pub fn limit(&self) -> u8 {
        self.limit
    }

    #[must_use]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[must_use]
    pub fn filters(&self) -> &[(String, String)] {
        &self.filters
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    #[must_use]
    pub fn next_page(&self) -> Self {
        let mut next = self.clone();
        next.offset = self.offset.saturating_add(u32::from(self.limit));
        next
    }

    #[must_use]
    pub fn previous_page(&self) -> Self {
        let mut prev = self.clone();
        prev.offset = self.offset.saturating_sub(u32::from(self.limit));
        prev
    }

    /// Encoded query string including the leading `?`, or `""` when empty.
    ///
    /// Paging parameters are only emitted when `paged` is set.
    #[must_use]
    pub fn to_query_string(&self, paged: bool) -> String {
        let mut parts = Vec::new();
        if paged {
            parts.push(format!("limit={}", self.limit));
            parts.push(format!("offset={}", self.offset));
        }
        for (key, value) in &self.filters {
            parts.push(format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            ));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }
}

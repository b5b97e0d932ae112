//! Search and pagination input for user listings.

use pagination::PageRequest;

/// Case-insensitive substring filter on full name.
///
/// The term is never spliced into SQL. Adapters bind [`UserSearch::like_pattern`]
/// as a parameter; LIKE metacharacters in the term are escaped so they match
/// literally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearch(Option<String>);

impl UserSearch {
    /// Build a filter from raw input.
    ///
    /// Surrounding whitespace is dropped; a blank term means "no filter".
    pub fn new(term: impl AsRef<str>) -> Self {
        match term.as_ref().trim() {
            "" => Self(None),
            trimmed => Self(Some(trimmed.to_owned())),
        }
    }

    /// Filter that matches every user.
    pub fn any() -> Self {
        Self(None)
    }

    /// Trimmed term, when filtering.
    pub fn term(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// `ILIKE` pattern matching the term anywhere in the name.
    ///
    /// `\`, `%` and `_` are escaped with a backslash, PostgreSQL's default
    /// `LIKE` escape character.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::UserSearch;
    ///
    /// let search = UserSearch::new("100%_off");
    /// assert_eq!(search.like_pattern().as_deref(), Some(r"%100\%\_off%"));
    /// assert_eq!(UserSearch::new("").like_pattern(), None);
    /// ```
    pub fn like_pattern(&self) -> Option<String> {
        self.term().map(|term| format!("%{}%", escape_like(term)))
    }
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Parameters of a user listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListRequest {
    search: UserSearch,
    page: PageRequest,
}

impl UserListRequest {
    /// Build a request from signed pagination values; negative or oversized
    /// values fall back to the defaults instead of failing.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::UserListRequest;
    ///
    /// let request = UserListRequest::new("", -1, -1);
    /// assert_eq!(request.page().limit(), 10);
    /// assert_eq!(request.page().offset(), 0);
    /// ```
    pub fn new(search: impl AsRef<str>, limit: i64, offset: i64) -> Self {
        Self::with_page(UserSearch::new(search), PageRequest::or_default(limit, offset))
    }

    /// Build a request from already normalised parts.
    pub fn with_page(search: UserSearch, page: PageRequest) -> Self {
        Self { search, page }
    }

    /// Name filter.
    pub fn search(&self) -> &UserSearch {
        &self.search
    }

    /// Result window.
    pub fn page(&self) -> PageRequest {
        self.page
    }
}

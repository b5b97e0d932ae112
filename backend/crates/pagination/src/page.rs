//! Limit/offset page window parsed from untrusted query input.

use thiserror::Error;

/// Page size used when the caller omits the limit or supplies an unusable one.
pub const DEFAULT_LIMIT: u32 = 10;

/// Offset used when the caller omits the offset or supplies an unusable one.
pub const DEFAULT_OFFSET: u32 = 0;

/// Reasons a single pagination field could not be used as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// The raw value is not a base-10 integer.
    #[error("{field} must be an integer, got {value:?}")]
    NotANumber {
        /// Name of the offending query parameter.
        field: &'static str,
        /// Raw value as received.
        value: String,
    },
    /// The value parsed but is below zero.
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Name of the offending query parameter.
        field: &'static str,
        /// Parsed value.
        value: i64,
    },
    /// The value does not fit the supported window size.
    #[error("{field} is too large, got {value}")]
    OutOfRange {
        /// Name of the offending query parameter.
        field: &'static str,
        /// Parsed value.
        value: i64,
    },
}

/// Non-negative limit/offset window over an ordered result set.
///
/// # Examples
///
/// ```
/// use pagination::PageRequest;
///
/// let page = PageRequest::from_query(Some("25"), Some("oops"));
/// assert_eq!(page.limit(), 25);
/// assert_eq!(page.offset(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    limit: u32,
    offset: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, DEFAULT_OFFSET)
    }
}

impl PageRequest {
    /// Build a page window from already validated values.
    #[must_use]
    pub const fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// Build a page window from signed values, replacing each unusable field
    /// with its default independently.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::{DEFAULT_LIMIT, PageRequest};
    ///
    /// let page = PageRequest::or_default(-1, 40);
    /// assert_eq!(page.limit(), DEFAULT_LIMIT);
    /// assert_eq!(page.offset(), 40);
    /// ```
    #[must_use]
    pub fn or_default(limit: i64, offset: i64) -> Self {
        Self::new(
            narrow("limit", limit).unwrap_or(DEFAULT_LIMIT),
            narrow("offset", offset).unwrap_or(DEFAULT_OFFSET),
        )
    }

    /// Build a page window from raw query-string values.
    ///
    /// Missing, non-numeric, negative, or oversized values fall back to the
    /// defaults; this never fails.
    #[must_use]
    pub fn from_query(limit: Option<&str>, offset: Option<&str>) -> Self {
        Self::new(
            limit
                .and_then(|raw| Self::parse_field("limit", raw).ok())
                .unwrap_or(DEFAULT_LIMIT),
            offset
                .and_then(|raw| Self::parse_field("offset", raw).ok())
                .unwrap_or(DEFAULT_OFFSET),
        )
    }

    /// Parse one raw pagination field strictly.
    ///
    /// # Errors
    ///
    /// Returns a [`PageRequestError`] describing why `raw` is unusable.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::{PageRequest, PageRequestError};
    ///
    /// assert_eq!(PageRequest::parse_field("limit", "5"), Ok(5));
    /// assert!(matches!(
    ///     PageRequest::parse_field("limit", "-5"),
    ///     Err(PageRequestError::Negative { .. })
    /// ));
    /// ```
    pub fn parse_field(field: &'static str, raw: &str) -> Result<u32, PageRequestError> {
        let value = raw
            .parse::<i64>()
            .map_err(|_| PageRequestError::NotANumber {
                field,
                value: raw.to_owned(),
            })?;
        narrow(field, value)
    }

    /// Maximum number of items in the page.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items skipped before the page starts.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Limit widened for SQL `LIMIT` binds.
    #[must_use]
    pub fn limit_i64(&self) -> i64 {
        i64::from(self.limit)
    }

    /// Offset widened for SQL `OFFSET` binds.
    #[must_use]
    pub fn offset_i64(&self) -> i64 {
        i64::from(self.offset)
    }
}

fn narrow(field: &'static str, value: i64) -> Result<u32, PageRequestError> {
    if value < 0 {
        return Err(PageRequestError::Negative { field, value });
    }
    u32::try_from(value).map_err(|_| PageRequestError::OutOfRange { field, value })
}

//! Response envelope carrying a payload and its `total_data` count.

use serde::Serialize;

/// Payload shape carried by an [`Envelope`].
///
/// The variant decides the `total_data` rule: collections report their
/// length, single items report zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload<T> {
    /// One item, serialised as-is.
    Single(T),
    /// A sequence of items, serialised as a JSON array.
    Collection(Vec<T>),
}

/// `{ "data": ..., "total_data": n }` wrapper returned by roster endpoints.
///
/// # Examples
///
/// ```
/// use pagination::Envelope;
///
/// let envelope = Envelope::collection(vec![1, 2, 3]);
/// assert_eq!(envelope.total_data(), 3);
///
/// let body = envelope.to_json_vec().expect("serialisable");
/// assert_eq!(body, br#"{"data":[1,2,3],"total_data":3}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<T> {
    data: Payload<T>,
    total_data: usize,
}

impl<T> Envelope<T> {
    /// Wrap a single item; `total_data` stays at zero.
    #[must_use]
    pub const fn single(item: T) -> Self {
        Self {
            data: Payload::Single(item),
            total_data: 0,
        }
    }

    /// Wrap a collection; `total_data` is the number of items.
    #[must_use]
    pub fn collection(items: Vec<T>) -> Self {
        let total_data = items.len();
        Self {
            data: Payload::Collection(items),
            total_data,
        }
    }

    /// Borrow the wrapped payload.
    #[must_use]
    pub const fn data(&self) -> &Payload<T> {
        &self.data
    }

    /// Count reported in the `total_data` field.
    #[must_use]
    pub const fn total_data(&self) -> usize {
        self.total_data
    }

    /// Unwrap the payload.
    #[must_use]
    pub fn into_payload(self) -> Payload<T> {
        self.data
    }
}

impl<T: Serialize> Envelope<T> {
    /// Serialise the envelope to a JSON byte buffer.
    ///
    /// # Errors
    ///
    /// Propagates [`serde_json::Error`] when the payload cannot be
    /// represented as JSON (for example a map with non-string keys).
    pub fn to_json_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

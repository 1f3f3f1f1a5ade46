use std::collections::VecDeque;

use crate::core::YqError;

/// One normalized provider response: optional side-channel metadata plus the
/// ordered items decoded out of the envelope.
///
/// Every query resolves to exactly one page. The provider does not paginate
/// any of the endpoints this crate consumes, so a "fetch more" step does not
/// exist; if it ever grows one, this is the seam where continuation state
/// would live.
#[derive(Debug)]
pub(crate) struct Page<T, M> {
    pub(crate) meta: Option<M>,
    pub(crate) items: Vec<T>,
}

/// A forward-only, single-pass cursor over one query's decoded results.
///
/// An `Iter` executes its query exactly once, at construction, and buffers
/// the decoded items in memory. Afterwards no I/O happens: [`advance`]
/// consumes the buffer from the front, one item per call, and
/// [`metadata`] / [`error`] expose the response's side channels.
///
/// The traversal protocol:
///
/// ```no_run
/// # async fn demo(client: yfinq::YqClient) {
/// let mut it = yfinq::quote::list(&client, ["AAPL", "MSFT"]).await;
/// while it.advance() {
///     let quote = it.current().unwrap();
///     println!("{}", quote.symbol);
/// }
/// if let Some(err) = it.error() {
///     eprintln!("query failed: {err}");
/// }
/// # }
/// ```
///
/// A terminal error, whether from a failed query or from parameters
/// rejected before any network call, makes every `advance` return `false`
/// for the rest of the cursor's life; inspect [`error`] once `advance` is
/// `false` to distinguish "done" from "failed". An empty-but-successful
/// result is not an error.
///
/// `Iter` is single-pass and cannot be rewound; re-querying means building a
/// new one. `advance` takes `&mut self`, so sharing a cursor across tasks
/// requires exclusive access.
///
/// [`advance`]: Iter::advance
/// [`metadata`]: Iter::metadata
/// [`error`]: Iter::error
#[derive(Debug)]
pub struct Iter<T, M = ()> {
    meta: Option<M>,
    cur: Option<T>,
    remaining: VecDeque<T>,
    err: Option<YqError>,
}

impl<T, M> Iter<T, M> {
    /// Awaits `query` once and captures its outcome into a new cursor.
    pub(crate) async fn run<F>(query: F) -> Self
    where
        F: Future<Output = Result<Page<T, M>, YqError>>,
    {
        match query.await {
            Ok(page) => Self {
                meta: page.meta,
                cur: None,
                remaining: VecDeque::from(page.items),
                err: None,
            },
            Err(err) => Self::failed(err),
        }
    }

    /// Builds a cursor that is already in its terminal error state.
    ///
    /// Used when parameter validation fails: the error is observable through
    /// the normal protocol without any request having been issued.
    pub(crate) fn failed(err: YqError) -> Self {
        Self {
            meta: None,
            cur: None,
            remaining: VecDeque::new(),
            err: Some(err),
        }
    }

    /// Moves the cursor to the next item.
    ///
    /// Returns `true` and makes the item available through [`current`] if one
    /// was buffered. Returns `false` when the cursor failed or the buffer is
    /// exhausted; in the latter case [`current`] keeps pointing at the last
    /// visited item and [`error`] stays `None`.
    ///
    /// [`current`]: Iter::current
    /// [`error`]: Iter::error
    pub fn advance(&mut self) -> bool {
        if self.err.is_some() {
            return false;
        }
        match self.remaining.pop_front() {
            Some(item) => {
                self.cur = Some(item);
                true
            }
            None => false,
        }
    }

    /// The item produced by the last `true`-returning [`advance`].
    ///
    /// `None` before the first advance.
    ///
    /// [`advance`]: Iter::advance
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.cur.as_ref()
    }

    /// The query's side-channel metadata (chart calendar, options expiration
    /// list, ...), available before any [`advance`] call.
    ///
    /// List queries carry no metadata.
    ///
    /// [`advance`]: Iter::advance
    #[must_use]
    pub fn metadata(&self) -> Option<&M> {
        self.meta.as_ref()
    }

    /// The terminal error, if the cursor is in a failed state.
    ///
    /// Meant to be inspected once [`advance`] has returned `false`; a `None`
    /// at that point means the results were simply exhausted.
    ///
    /// [`advance`]: Iter::advance
    #[must_use]
    pub fn error(&self) -> Option<&YqError> {
        self.err.as_ref()
    }

    /// Consumes the cursor and returns ownership of its terminal error.
    #[must_use]
    pub fn into_error(self) -> Option<YqError> {
        self.err
    }

    /// How many buffered items have not been visited yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }
}

/// Adapter onto the standard iterator protocol, cloning each item out of the
/// buffer.
///
/// Iterate by `&mut` reference to keep the cursor available for a final
/// [`Iter::error`] check:
///
/// ```no_run
/// # async fn demo(client: yfinq::YqClient) {
/// let mut it = yfinq::quote::list(&client, ["AAPL"]).await;
/// let symbols: Vec<String> = (&mut it).map(|q| q.symbol).collect();
/// assert!(it.error().is_none());
/// # }
/// ```
impl<T: Clone, M> Iterator for Iter<T, M> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.advance() {
            self.current().cloned()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.len(), Some(self.remaining.len()))
    }
}

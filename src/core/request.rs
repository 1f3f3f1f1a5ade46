use std::time::Duration;

/// A fully-constructed API request: endpoint path, ordered query pairs, and
/// an optional per-request deadline.
///
/// Built once by a façade from caller params, then moved into the query
/// future. Nothing mutates it after construction, so params can be cloned and
/// reused across queries without interference.
#[derive(Debug, Clone)]
pub(crate) struct ApiRequest {
    pub(crate) path: String,
    pub(crate) query: Vec<(&'static str, String)>,
    pub(crate) timeout: Option<Duration>,
}

impl ApiRequest {
    pub(crate) fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            timeout: None,
        }
    }

    /// Appends one query pair. Pairs keep their insertion order in the final
    /// URL.
    pub(crate) fn param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    pub(crate) fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Read-only view of the incoming request, used to resolve a fragment path
/// into a full URI.
pub trait RequestContext {
    /// Response format applied when the reference does not declare `_format`.
    fn request_format(&self) -> &str;

    /// Resolves a path plus query string against the current scheme, host
    /// and base path. The path and query must pass through byte-for-byte.
    fn uri_for_path(&self, path_and_query: &str) -> String;
}

/// Minimal request head for driving the generator outside a full HTTP stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHead {
    pub scheme: String,
    pub authority: String,
    pub base_path: String,
    pub format: String,
}

impl RequestHead {
    pub fn new(
        scheme: impl Into<String>,
        authority: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            authority: authority.into(),
            base_path: String::new(),
            format: format.into(),
        }
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }
}

impl RequestContext for RequestHead {
    fn request_format(&self) -> &str {
        &self.format
    }

    fn uri_for_path(&self, path_and_query: &str) -> String {
        format!(
            "{}://{}{}{}",
            self.scheme, self.authority, self.base_path, path_and_query
        )
    }
}

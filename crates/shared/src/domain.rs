use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A deferred handler invocation: which controller to call, the path-like
/// attributes to pass it, and the query parameters to attach.
///
/// Attribute and query values are scalars (string, number, boolean) carried
/// as `serde_json::Value`; composite values are representable but rejected
/// when the reference is turned into a fragment URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerReference {
    pub controller: String,
    #[serde(default)]
    pub attributes: IndexMap<String, Value>,
    #[serde(default)]
    pub query: IndexMap<String, Value>,
}

impl ControllerReference {
    pub fn new(controller: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            attributes: IndexMap::new(),
            query: IndexMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }
}

use indexmap::IndexMap;
use serde_json::Value;
use shared::{domain::ControllerReference, error::UnserializableAttributeError};
use tracing::warn;

pub mod codec;
pub mod request;

pub use request::{RequestContext, RequestHead};

/// Dispatch path recognized by the fragment listener when none is configured.
pub const DEFAULT_FRAGMENT_PATH: &str = "/_fragment";

const FORMAT_KEY: &str = "_format";
const CONTROLLER_KEY: &str = "_controller";
const PATH_KEY: &str = "_path";

/// Builds URIs that defer a controller invocation through the fragment
/// dispatch path. The listener watching that path decodes the `_path` query
/// parameter back into the sub-request.
#[derive(Debug, Clone)]
pub struct FragmentUriGenerator {
    fragment_path: String,
}

impl Default for FragmentUriGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentUriGenerator {
    pub fn new() -> Self {
        Self {
            fragment_path: DEFAULT_FRAGMENT_PATH.to_string(),
        }
    }

    /// Routes generated URIs through `path` instead of the default dispatch
    /// path. The path's shape is not validated.
    pub fn with_fragment_path(mut self, path: impl Into<String>) -> Self {
        self.fragment_path = path.into();
        self
    }

    /// Replaces the dispatch path. Exclusive access means reconfiguration
    /// cannot race an in-flight `generate`.
    pub fn set_fragment_path(&mut self, path: impl Into<String>) {
        self.fragment_path = path.into();
    }

    pub fn fragment_path(&self) -> &str {
        &self.fragment_path
    }

    /// Generates a URI carrying everything the listener needs to rebuild the
    /// sub-request described by `reference`.
    ///
    /// With `include_attributes` the reference attributes travel inside the
    /// `_path` token alongside the computed `_format`/`_controller` pair;
    /// without it only that identity pair is encoded. Fails when a value to
    /// be encoded is not a scalar.
    pub fn generate(
        &self,
        reference: &ControllerReference,
        context: &impl RequestContext,
        include_attributes: bool,
    ) -> Result<String, UnserializableAttributeError> {
        // a _format declared on the reference wins over the request default;
        // a null placeholder counts as absent
        let format = match reference.attributes.get(FORMAT_KEY) {
            Some(value) if !value.is_null() => value.clone(),
            _ => Value::String(context.request_format().to_string()),
        };

        let mut rendered_attributes: IndexMap<String, Value> = if include_attributes {
            reference.attributes.clone()
        } else {
            IndexMap::new()
        };
        rendered_attributes.insert(FORMAT_KEY.to_string(), format);
        rendered_attributes.insert(
            CONTROLLER_KEY.to_string(),
            Value::String(reference.controller.clone()),
        );

        let attribute_pairs = codec::canonical_pairs(&rendered_attributes)?;
        let serialized_attributes = codec::encode_pairs(&attribute_pairs);

        // anything the flat encoding lost between the map and its serialized
        // form would silently corrupt the sub-request on the listener side
        let decoded = codec::decode(&serialized_attributes);
        if let Some(key) = codec::first_lossy_key(&attribute_pairs, &decoded) {
            warn!(
                %key,
                controller = %reference.controller,
                "attribute did not survive query-string round trip"
            );
            return Err(UnserializableAttributeError::new(key));
        }

        let mut rendered_query = reference.query.clone();
        rendered_query.insert(PATH_KEY.to_string(), Value::String(serialized_attributes));

        let query_pairs = codec::canonical_pairs(&rendered_query)?;
        let query = codec::encode_pairs(&query_pairs);

        Ok(context.uri_for_path(&format!("{}?{}", self.fragment_path, query)))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

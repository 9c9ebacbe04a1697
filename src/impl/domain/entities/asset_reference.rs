/// Where a payslip document's bytes can be loaded from.
///
/// Deserializes untagged: a string is a URI, an unsigned integer is a module
/// handle, and a map with optional `uri` / `localUri` keys is an object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde_derive::Deserialize)]
#[serde(untagged)]
pub enum AssetReference {
    Uri(String),
    Module(u32),
    Object {
        #[serde(default)]
        uri: Option<String>,
        #[serde(default, rename = "localUri", alias = "local_uri")]
        local_uri: Option<String>,
    },
}

/// Result of materializing a module handle through an
/// [`AssetLoader`](super::handlers::AssetLoader).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedAsset {
    /// Location of the downloaded copy, if the loader produced one.
    pub local_uri: Option<String>,
    pub uri: String,
}

// Shorthand constructors.

impl AssetReference {
    pub fn uri(uri: impl Into<String>) -> Self {
        AssetReference::Uri(uri.into())
    }

    pub fn module(handle: u32) -> Self {
        AssetReference::Module(handle)
    }

    pub fn object(uri: Option<String>, local_uri: Option<String>) -> Self {
        AssetReference::Object { uri, local_uri }
    }
}

impl Default for AssetReference {
    fn default() -> Self {
        AssetReference::Uri("sample-payslip.pdf".to_string())
    }
}

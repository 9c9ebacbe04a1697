use fractic_server_error::ServerError;

use crate::{
    entities::{AssetLoader, AssetReference},
    errors::{AssetMaterializationFailed, EmptyAssetUri, InvalidAssetFormat},
};

/// Turns an [`AssetReference`] into a single URI suitable for I/O.
pub(crate) struct AssetResolver<'a, L: AssetLoader> {
    loader: &'a L,
}

impl<'a, L: AssetLoader> AssetResolver<'a, L> {
    pub(crate) fn new(loader: &'a L) -> Self {
        Self { loader }
    }

    pub(crate) async fn resolve(&self, asset: &AssetReference) -> Result<String, ServerError> {
        match asset {
            AssetReference::Uri(uri) if uri.is_empty() => Err(EmptyAssetUri::new()),
            AssetReference::Uri(uri) => Ok(uri.clone()),
            AssetReference::Object { uri, local_uri } => non_empty(uri)
                .or_else(|| non_empty(local_uri))
                .map(str::to_string)
                .ok_or_else(|| InvalidAssetFormat::new("object without 'uri' or 'localUri'")),
            AssetReference::Module(handle) => {
                let materialized = self
                    .loader
                    .materialize(*handle)
                    .await
                    .map_err(|e| AssetMaterializationFailed::with_debug(*handle, &e))?;
                Ok(non_empty(&materialized.local_uri)
                    .map(str::to_string)
                    .unwrap_or(materialized.uri))
            }
        }
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

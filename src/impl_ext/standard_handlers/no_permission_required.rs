use async_trait::async_trait;

use crate::entities::{PermissionHandler, PermissionStatus};

/// For platforms where writing to app storage needs no runtime permission.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPermissionRequired;

#[async_trait]
impl PermissionHandler for NoPermissionRequired {
    async fn check(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    async fn request(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }
}

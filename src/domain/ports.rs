use crate::domain::model::{PermissionMap, PermissionSet};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read access to the host's role storage.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Fails with `RoleNotFound` for an unknown id.
    async fn permissions(&self, role_id: &str) -> Result<PermissionSet>;
    async fn label(&self, role_id: &str) -> Result<String>;
    /// `(id, label)` pairs in display order.
    async fn list_roles(&self) -> Result<Vec<(String, String)>>;
}

#[async_trait]
pub trait PermissionRegistry: Send + Sync {
    async fn all(&self) -> Result<PermissionMap>;
}

pub trait ModuleNameResolver: Send + Sync {
    fn display_name(&self, module: &str) -> String;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

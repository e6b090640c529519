use crate::config::site_config::SiteConfig;
use crate::domain::model::{PermissionMap, PermissionSet};
use crate::domain::ports::{ModuleNameResolver, PermissionRegistry, RoleRepository};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Serves roles, permission metadata and module names from a parsed site
/// definition. Clones share the same underlying config.
#[derive(Debug, Clone)]
pub struct SiteDefinition {
    config: Arc<SiteConfig>,
}

impl SiteDefinition {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

#[async_trait]
impl RoleRepository for SiteDefinition {
    async fn permissions(&self, role_id: &str) -> Result<PermissionSet> {
        Ok(self.config.role(role_id)?.permissions)
    }

    async fn label(&self, role_id: &str) -> Result<String> {
        Ok(self.config.role(role_id)?.label)
    }

    async fn list_roles(&self) -> Result<Vec<(String, String)>> {
        Ok(self
            .config
            .ordered_roles()
            .into_iter()
            .map(|(id, role)| (id.clone(), role.label.clone()))
            .collect())
    }
}

#[async_trait]
impl PermissionRegistry for SiteDefinition {
    async fn all(&self) -> Result<PermissionMap> {
        Ok(self.config.permissions.clone())
    }
}

impl ModuleNameResolver for SiteDefinition {
    fn display_name(&self, module: &str) -> String {
        self.config
            .modules
            .get(module)
            .cloned()
            .unwrap_or_else(|| module.to_string())
    }
}

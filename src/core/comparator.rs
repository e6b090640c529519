use crate::core::diff::compare_with_names;
use crate::domain::model::{ComparisonResult, RoleColumn};
use crate::domain::ports::{ModuleNameResolver, PermissionRegistry, RoleRepository};
use crate::utils::error::Result;
use crate::utils::validation::validate_role_id;

/// Loads two roles through the repository ports and diffs their permissions.
pub struct RoleComparator<R, P, M>
where
    R: RoleRepository,
    P: PermissionRegistry,
    M: ModuleNameResolver,
{
    roles: R,
    registry: P,
    modules: M,
}

impl<R, P, M> RoleComparator<R, P, M>
where
    R: RoleRepository,
    P: PermissionRegistry,
    M: ModuleNameResolver,
{
    pub fn new(roles: R, registry: P, modules: M) -> Self {
        Self {
            roles,
            registry,
            modules,
        }
    }

    /// Options for the two role selectors.
    pub async fn role_options(&self) -> Result<Vec<(String, String)>> {
        self.roles.list_roles().await
    }

    pub async fn compare_roles(&self, role1_id: &str, role2_id: &str) -> Result<ComparisonResult> {
        validate_role_id("role1", role1_id)?;
        validate_role_id("role2", role2_id)?;

        tracing::debug!("Comparing roles '{}' and '{}'", role1_id, role2_id);

        let role1_permissions = self.roles.permissions(role1_id).await?;
        let role2_permissions = self.roles.permissions(role2_id).await?;
        let role1 = RoleColumn::new(role1_id, self.roles.label(role1_id).await?);
        let role2 = RoleColumn::new(role2_id, self.roles.label(role2_id).await?);

        tracing::debug!(
            "Loaded {} permissions for '{}', {} for '{}'",
            role1_permissions.len(),
            role1_id,
            role2_permissions.len(),
            role2_id
        );

        let registry = self.registry.all().await?;

        let result = compare_with_names(
            &role1_permissions,
            &role2_permissions,
            &registry,
            role1,
            role2,
            |module| self.modules.display_name(module),
        )?;

        match &result {
            ComparisonResult::Identical { .. } => {
                tracing::info!("Roles '{}' and '{}' grant the same permissions", role1_id, role2_id)
            }
            ComparisonResult::Differences(table) => tracing::info!(
                "Roles '{}' and '{}' differ in {} permissions",
                role1_id,
                role2_id,
                table.rows.len()
            ),
        }

        Ok(result)
    }
}

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Set of permission identifiers granted to a role.
pub type PermissionSet = BTreeSet<String>;

/// Permission id -> metadata, as exposed by the host's permission registry.
pub type PermissionMap = HashMap<String, PermissionMeta>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionMeta {
    /// Machine name of the module that defines the permission.
    pub provider: String,
    pub title: String,
}

impl PermissionMeta {
    pub fn new(provider: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub label: String,
    pub permissions: PermissionSet,
}

/// One side of the comparison, used for the column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleColumn {
    pub id: String,
    pub label: String,
}

impl RoleColumn {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRow {
    pub permission: String,
    pub module: String,
    pub module_name: String,
    pub title: String,
    pub role1_has: bool,
    pub role2_has: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub role1: RoleColumn,
    pub role2: RoleColumn,
    pub rows: Vec<DiffRow>,
}

/// Consecutive rows owned by the same module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGroup<'a> {
    pub module: &'a str,
    pub module_name: &'a str,
    pub rows: &'a [DiffRow],
}

impl ComparisonTable {
    /// Splits the (already sorted) rows into per-module groups, keeping the
    /// row order.
    pub fn groups(&self) -> Vec<ModuleGroup<'_>> {
        let mut groups = Vec::new();
        let mut start = 0;

        while start < self.rows.len() {
            let module = &self.rows[start].module;
            let len = self.rows[start..]
                .iter()
                .take_while(|row| &row.module == module)
                .count();

            groups.push(ModuleGroup {
                module,
                module_name: &self.rows[start].module_name,
                rows: &self.rows[start..start + len],
            });
            start += len;
        }

        groups
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ComparisonResult {
    /// Both roles grant exactly the same permissions.
    Identical { role1: RoleColumn, role2: RoleColumn },
    Differences(ComparisonTable),
}

impl ComparisonResult {
    pub fn is_identical(&self) -> bool {
        matches!(self, ComparisonResult::Identical { .. })
    }

    pub fn rows(&self) -> &[DiffRow] {
        match self {
            ComparisonResult::Identical { .. } => &[],
            ComparisonResult::Differences(table) => &table.rows,
        }
    }

    pub fn columns(&self) -> (&RoleColumn, &RoleColumn) {
        match self {
            ComparisonResult::Identical { role1, role2 } => (role1, role2),
            ComparisonResult::Differences(table) => (&table.role1, &table.role2),
        }
    }
}

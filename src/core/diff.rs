use crate::domain::model::{
    ComparisonResult, ComparisonTable, DiffRow, PermissionMap, PermissionSet, RoleColumn,
};
use crate::utils::error::{CompareError, Result};

/// Compares two permission sets, using the module id as the module's display
/// name.
pub fn compare(
    role1_permissions: &PermissionSet,
    role2_permissions: &PermissionSet,
    registry: &PermissionMap,
    role1: RoleColumn,
    role2: RoleColumn,
) -> Result<ComparisonResult> {
    compare_with_names(
        role1_permissions,
        role2_permissions,
        registry,
        role1,
        role2,
        |module| module.to_string(),
    )
}

/// Builds the comparison table for the permissions granted by exactly one of
/// the two roles.
///
/// Rows are sorted by module display name, then permission title; module id
/// and permission id break the remaining ties. Every differing permission
/// must be present in `registry`, otherwise the whole comparison fails with
/// [`CompareError::MissingMetadata`].
pub fn compare_with_names<F>(
    role1_permissions: &PermissionSet,
    role2_permissions: &PermissionSet,
    registry: &PermissionMap,
    role1: RoleColumn,
    role2: RoleColumn,
    resolve_module_name: F,
) -> Result<ComparisonResult>
where
    F: Fn(&str) -> String,
{
    let diff: Vec<&String> = role2_permissions
        .difference(role1_permissions)
        .chain(role1_permissions.difference(role2_permissions))
        .collect();

    if diff.is_empty() {
        return Ok(ComparisonResult::Identical { role1, role2 });
    }

    let mut rows = diff
        .into_iter()
        .map(|permission| -> Result<DiffRow> {
            let meta = registry
                .get(permission)
                .ok_or_else(|| CompareError::MissingMetadata {
                    permission: permission.clone(),
                })?;

            Ok(DiffRow {
                permission: permission.clone(),
                module: meta.provider.clone(),
                module_name: resolve_module_name(&meta.provider),
                title: meta.title.clone(),
                role1_has: role1_permissions.contains(permission),
                role2_has: role2_permissions.contains(permission),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    rows.sort_by(|a, b| {
        a.module_name
            .cmp(&b.module_name)
            .then_with(|| a.module.cmp(&b.module))
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.permission.cmp(&b.permission))
    });

    Ok(ComparisonResult::Differences(ComparisonTable {
        role1,
        role2,
        rows,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PermissionMeta;

    fn set(items: &[&str]) -> PermissionSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn registry() -> PermissionMap {
        let mut map = PermissionMap::new();
        map.insert(
            "access content".to_string(),
            PermissionMeta::new("node", "View published content"),
        );
        map.insert(
            "a".to_string(),
            PermissionMeta::new("system", "Permission A"),
        );
        map.insert(
            "b".to_string(),
            PermissionMeta::new("system", "Permission B"),
        );
        map.insert("x".to_string(), PermissionMeta::new("user", "Permission X"));
        map.insert(
            "y".to_string(),
            PermissionMeta::new("block", "Permission Y"),
        );
        map
    }

    fn columns() -> (RoleColumn, RoleColumn) {
        (
            RoleColumn::new("editor", "Editor"),
            RoleColumn::new("author", "Author"),
        )
    }

    #[test]
    fn test_single_permission_only_in_role1() {
        let (r1, r2) = columns();
        let result = compare(&set(&["access content"]), &set(&[]), &registry(), r1, r2).unwrap();

        let rows = result.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].permission, "access content");
        assert_eq!(rows[0].title, "View published content");
        assert!(rows[0].role1_has);
        assert!(!rows[0].role2_has);
    }

    #[test]
    fn test_same_permissions_are_identical() {
        let (r1, r2) = columns();
        let result = compare(&set(&["a", "b"]), &set(&["a", "b"]), &registry(), r1, r2).unwrap();
        assert!(result.is_identical());
    }

    #[test]
    fn test_both_empty_is_identical() {
        let (r1, r2) = columns();
        let result = compare(&set(&[]), &set(&[]), &PermissionMap::new(), r1, r2).unwrap();
        assert!(result.is_identical());
    }

    #[test]
    fn test_rows_sorted_by_module() {
        let (r1, r2) = columns();
        let result = compare(&set(&[]), &set(&["x", "y"]), &registry(), r1, r2).unwrap();

        let rows = result.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].module, "block");
        assert_eq!(rows[1].module, "user");
        assert!(rows.iter().all(|r| !r.role1_has && r.role2_has));
    }

    #[test]
    fn test_missing_metadata_fails_whole_comparison() {
        let (r1, r2) = columns();
        let err = compare(
            &set(&["a", "unregistered"]),
            &set(&[]),
            &registry(),
            r1,
            r2,
        )
        .unwrap_err();

        match err {
            CompareError::MissingMetadata { permission } => assert_eq!(permission, "unregistered"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_shared_permissions_without_metadata_are_ignored() {
        // Only differing permissions need metadata.
        let (r1, r2) = columns();
        let result = compare(
            &set(&["shared", "a"]),
            &set(&["shared"]),
            &registry(),
            r1,
            r2,
        )
        .unwrap();
        assert_eq!(result.rows().len(), 1);
    }

    #[test]
    fn test_display_names_drive_ordering() {
        let (r1, r2) = columns();
        // "user" displays as "Accounts", so it sorts before "block" -> "Block".
        let result = compare_with_names(
            &set(&[]),
            &set(&["x", "y"]),
            &registry(),
            r1,
            r2,
            |module| match module {
                "user" => "Accounts".to_string(),
                "block" => "Block".to_string(),
                other => other.to_string(),
            },
        )
        .unwrap();

        let names: Vec<&str> = result.rows().iter().map(|r| r.module_name.as_str()).collect();
        assert_eq!(names, vec!["Accounts", "Block"]);
    }

    #[test]
    fn test_titles_sorted_within_module() {
        let (r1, r2) = columns();
        let result = compare(&set(&["b"]), &set(&["a"]), &registry(), r1, r2).unwrap();

        let titles: Vec<&str> = result.rows().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Permission A", "Permission B"]);
        assert!(result.rows()[0].role2_has);
        assert!(result.rows()[1].role1_has);
    }
}

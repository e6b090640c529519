pub mod comparator;
pub mod diff;
pub mod render;

pub use crate::domain::model::{ComparisonResult, ComparisonTable, DiffRow, PermissionMeta};
pub use crate::domain::ports::{ModuleNameResolver, PermissionRegistry, RoleRepository, Storage};
pub use crate::utils::error::Result;

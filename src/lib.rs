pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{site::SiteDefinition, storage::LocalStorage};
pub use config::SiteConfig;
pub use core::comparator::RoleComparator;
pub use core::diff::{compare, compare_with_names};
pub use core::render::{render, OutputFormat};
pub use domain::model::{ComparisonResult, ComparisonTable, DiffRow, PermissionMeta, RoleColumn};
pub use utils::error::{CompareError, Result};

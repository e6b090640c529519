use crate::config::{CliConfig, SiteConfig};
use crate::core::Storage;
use crate::utils::error::{CompareError, ErrorSeverity, Result};
use crate::utils::validation::Validate;
use crate::{render, LocalStorage, RoleComparator, SiteDefinition};
use std::io::Write;

/// Process exit code for a failed run, by error severity.
pub fn exit_code(error: &CompareError) -> i32 {
    match error.severity() {
        ErrorSeverity::Medium => 2, // I/O 或序列化錯誤
        ErrorSeverity::High => 1, // 使用者或設定錯誤
        ErrorSeverity::Critical => 3, // 資料不一致
    }
}

/// Runs one CLI invocation, writing the role list or the report to `out`
/// (or to `--output`).
pub async fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    config.validate()?;

    tracing::info!("📁 Loading site definition from: {}", config.site);
    let site_config = SiteConfig::from_file(&config.site)?;
    site_config.validate()?;
    tracing::info!(
        "✅ Loaded '{}': {} roles, {} permissions",
        site_config.site_name(),
        site_config.roles.len(),
        site_config.permissions.len()
    );

    let site = SiteDefinition::new(site_config);
    let comparator = RoleComparator::new(site.clone(), site.clone(), site);

    if config.list_roles {
        for (id, label) in comparator.role_options().await? {
            writeln!(out, "{}\t{}", id, label)?;
        }
        return Ok(());
    }

    let (role1, role2) = config.roles();
    let result = comparator.compare_roles(role1, role2).await?;
    let report = render(&result, config.format)?;

    match &config.output {
        Some(path) => {
            let storage = LocalStorage::new(".".to_string());
            storage.write_file(path, report.as_bytes()).await?;
            tracing::info!("📁 Report saved to: {}", path);
            writeln!(out, "📁 Report saved to: {}", path)?;
        }
        None => write!(out, "{}", report)?,
    }

    Ok(())
}

use crate::core::render::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_role_id, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "compare-roles")]
#[command(about = "Show the permissions that differ between two user roles")]
pub struct CliConfig {
    /// Path to the TOML site definition
    #[arg(long, default_value = "roles.toml")]
    pub site: String,

    #[arg(long)]
    pub role1: Option<String>,

    #[arg(long)]
    pub role2: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    pub output: Option<String>,

    /// Print the available roles and exit
    #[arg(long)]
    pub list_roles: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// Both role ids; only meaningful after `validate` passed.
    pub fn roles(&self) -> (&str, &str) {
        (
            self.role1.as_deref().unwrap_or_default(),
            self.role2.as_deref().unwrap_or_default(),
        )
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("site", &self.site)?;

        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }

        if !self.list_roles {
            validate_role_id("--role1", self.role1.as_deref().unwrap_or_default())?;
            validate_role_id("--role2", self.role2.as_deref().unwrap_or_default())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let config = CliConfig::parse_from([
            "compare-roles",
            "--site",
            "site.toml",
            "--role1",
            "editor",
            "--role2",
            "viewer",
            "--format",
            "csv",
        ]);

        assert_eq!(config.site, "site.toml");
        assert_eq!(config.roles(), ("editor", "viewer"));
        assert_eq!(config.format, OutputFormat::Csv);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_roles_required_unless_listing() {
        let config = CliConfig::parse_from(["compare-roles", "--role1", "editor"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["compare-roles", "--list-roles"]);
        assert!(config.validate().is_ok());
    }
}

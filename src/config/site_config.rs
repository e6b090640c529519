use crate::domain::model::{PermissionMeta, PermissionSet, Role};
use crate::utils::error::{CompareError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: Option<SiteInfo>,
    /// 模組機器名稱 -> 顯示名稱
    #[serde(default)]
    pub modules: HashMap<String, String>,
    #[serde(default)]
    pub permissions: HashMap<String, PermissionMeta>,
    #[serde(default)]
    pub roles: BTreeMap<String, RoleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleConfig {
    pub label: String,
    pub weight: Option<i32>,
    #[serde(default)]
    pub permissions: PermissionSet,
}

impl SiteConfig {
    /// 從 TOML 檔案載入站台定義
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CompareError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析站台定義
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CompareError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SITE_NAME})，未設定的變數保持原樣。
    /// Values are escaped for a TOML basic string, so `${VAR}` belongs inside
    /// double quotes.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<regex::Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            regex::Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => escape_basic_string(&value),
                Err(_) => format!("${{{}}}", var_name),
            }
        })
        .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(site) = &self.site {
            validate_non_empty_string("site.name", &site.name)?;
        }

        for (id, name) in &self.modules {
            validate_non_empty_string(&format!("modules.{}", id), name)?;
        }

        for (id, meta) in &self.permissions {
            validate_non_empty_string(&format!("permissions.{}.provider", id), &meta.provider)?;
            validate_non_empty_string(&format!("permissions.{}.title", id), &meta.title)?;
        }

        for (id, role) in &self.roles {
            validate_non_empty_string("roles", id)?;
            validate_non_empty_string(&format!("roles.{}.label", id), &role.label)?;
        }

        Ok(())
    }

    pub fn site_name(&self) -> &str {
        self.site.as_ref().map(|s| s.name.as_str()).unwrap_or("unnamed site")
    }

    pub fn role(&self, role_id: &str) -> Result<Role> {
        let config = self
            .roles
            .get(role_id)
            .ok_or_else(|| CompareError::RoleNotFound {
                role_id: role_id.to_string(),
            })?;

        Ok(Role {
            id: role_id.to_string(),
            label: config.label.clone(),
            permissions: config.permissions.clone(),
        })
    }

    /// Roles ordered by weight, then id. Roles without a weight sort as 0.
    pub fn ordered_roles(&self) -> Vec<(&String, &RoleConfig)> {
        let mut roles: Vec<_> = self.roles.iter().collect();
        roles.sort_by_key(|(id, role)| (role.weight.unwrap_or(0), *id));
        roles
    }
}

fn escape_basic_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04X}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

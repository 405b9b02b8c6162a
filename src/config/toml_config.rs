use crate::core::holidays::AllowanceTable;
use crate::core::ConfigProvider;
use crate::domain::model::OutputFormat;
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub report: ReportMeta,
    pub io: Option<IoConfig>,
    pub allowances: Option<HashMap<String, i64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IoConfig {
    pub base_path: Option<String>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub output_formats: Option<Vec<String>>,
}

const VALID_FORMATS: [&str; 2] = ["json", "csv"];

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| ReportError::ConfigError {
                message: format!(
                    "cannot read config file '{}': {}",
                    path.as_ref().display(),
                    e
                ),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReportError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static pattern");

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("io.base_path", self.base_path())?;
        validation::validate_non_empty_string("io.input", self.input_file())?;
        validation::validate_non_empty_string("io.output", self.output_file())?;

        if let Some(io) = &self.io {
            if let Some(formats) = &io.output_formats {
                for format in formats {
                    if !VALID_FORMATS.contains(&format.as_str()) {
                        return Err(ReportError::InvalidConfigValueError {
                            field: "io.output_formats".to_string(),
                            value: format.clone(),
                            reason: format!(
                                "Unsupported format. Valid formats: {}",
                                VALID_FORMATS.join(", ")
                            ),
                        });
                    }
                }
            }
        }

        if let Some(allowances) = &self.allowances {
            for (id, days) in allowances {
                if id.parse::<i64>().is_err() {
                    return Err(ReportError::InvalidConfigValueError {
                        field: "allowances".to_string(),
                        value: id.clone(),
                        reason: "Allowance keys must be integer ids".to_string(),
                    });
                }
                validation::validate_non_negative(&format!("allowances.{}", id), *days)?;
            }
        }

        Ok(())
    }

    /// 取得假期配額表，未設定時退回預設政策
    pub fn allowance_table(&self) -> AllowanceTable {
        match &self.allowances {
            Some(allowances) => AllowanceTable::new(
                allowances
                    .iter()
                    .filter_map(|(id, days)| id.parse::<i64>().ok().map(|id| (id, *days)))
                    .collect(),
            ),
            None => AllowanceTable::default(),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn base_path(&self) -> &str {
        self.io
            .as_ref()
            .and_then(|io| io.base_path.as_deref())
            .unwrap_or(".")
    }

    fn input_file(&self) -> &str {
        self.io
            .as_ref()
            .and_then(|io| io.input.as_deref())
            .unwrap_or("data.json")
    }

    fn output_file(&self) -> &str {
        self.io
            .as_ref()
            .and_then(|io| io.output.as_deref())
            .unwrap_or("output.json")
    }

    fn output_formats(&self) -> Vec<OutputFormat> {
        match self.io.as_ref().and_then(|io| io.output_formats.as_ref()) {
            Some(formats) => formats
                .iter()
                .filter_map(|name| OutputFormat::from_name(name))
                .collect(),
            None => vec![OutputFormat::Json],
        }
    }

    fn allowances(&self) -> AllowanceTable {
        self.allowance_table()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

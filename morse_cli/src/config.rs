//! 配置：可选的 TOML 文件。
//!
//! 查找顺序（优先级从高到低）：
//! 1. `--config <path>`
//! 2. 环境变量 `MORSE_CONFIG`
//! 3. 当前目录下的 `morse.toml`
//! 4. 内置默认值
use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use morse_core::engine::DEFAULT_PLACEHOLDER;
use morse_core::table::CodeTable;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_PATH_ENV: &str = "MORSE_CONFIG";
const CONFIG_FILE_NAME: &str = "morse.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("配置文件不存在：{0}")]
    NotFound(PathBuf),

    #[error("读取配置文件 '{path}' 失败：{source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("解析配置失败：{0}")]
    Parse(#[from] toml::de::Error),

    #[error("配置项 '{key}' 无效：{message}")]
    Invalid { key: String, message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub keyboard: KeyboardConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// 未匹配时插入的占位字符（必须是单个非空白字符）
    pub placeholder: String,
    /// 叠加在标准表之上的 TSV 码表
    pub table: Option<PathBuf>,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            table: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `RUST_LOG` 未设置时使用的过滤级别
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// 按查找顺序加载；返回实际使用的配置文件路径（没有则为 None）。
    pub fn load(explicit: Option<&Path>) -> Result<(Option<PathBuf>, Self), ConfigError> {
        Self::load_with(
            explicit,
            env::var_os(CONFIG_PATH_ENV),
            PathBuf::from(CONFIG_FILE_NAME),
        )
    }

    /// `load` 的可测版本：环境变量的值和本地配置文件路径由调用方给出。
    fn load_with(
        explicit: Option<&Path>,
        from_env: Option<OsString>,
        local: PathBuf,
    ) -> Result<(Option<PathBuf>, Self), ConfigError> {
        match resolve_path(explicit, from_env, local) {
            Some(p) => {
                let config = Self::load_from(&p)?;
                Ok((Some(p), config))
            }
            None => Ok((None, Self::default())),
        }
    }

    /// 从指定文件加载；`keyboard.table` 的相对路径按配置文件所在目录解析。
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&s)?;
        let dir = path.parent().unwrap_or(Path::new(""));
        if let Some(table) = config.keyboard.table.as_mut() {
            if table.is_relative() {
                *table = dir.join(&*table);
            }
        }
        Ok(config)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut chars = self.keyboard.placeholder.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !ch.is_whitespace() => {}
            _ => {
                return Err(ConfigError::Invalid {
                    key: "keyboard.placeholder".to_string(),
                    message: format!(
                        "必须是单个非空白字符，实际为 {:?}",
                        self.keyboard.placeholder
                    ),
                });
            }
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "logging.level".to_string(),
                message: "不能为空".to_string(),
            });
        }
        Ok(())
    }

    /// 占位字符不能是码表里的字符：否则未匹配的输入和真实上屏的字符无法区分，
    /// 删除键也会把占位字符当成已上屏字符重新打开。
    pub fn check_table(&self, table: &dyn CodeTable) -> Result<(), ConfigError> {
        let placeholder = self.placeholder();
        if table.signals_for(placeholder).is_some() {
            return Err(ConfigError::Invalid {
                key: "keyboard.placeholder".to_string(),
                message: format!("{placeholder:?} 已在码表中有电码，请换一个占位字符"),
            });
        }
        Ok(())
    }

    /// 校验通过后 placeholder 一定是单字符。
    pub fn placeholder(&self) -> char {
        self.keyboard
            .placeholder
            .chars()
            .next()
            .unwrap_or(DEFAULT_PLACEHOLDER)
    }
}

/// 显式路径 > 环境变量 > 存在的本地文件；都没有时返回 None。
fn resolve_path(
    explicit: Option<&Path>,
    from_env: Option<OsString>,
    local: PathBuf,
) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    match from_env {
        Some(p) if !p.is_empty() => Some(PathBuf::from(p)),
        _ => local.is_file().then_some(local),
    }
}

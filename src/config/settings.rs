// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// 应用程序配置设置
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 抓取器定义配置
    pub scrapers: ScraperSettings,
    /// 脚本动作配置
    #[serde(default)]
    pub script: ScriptSettings,
}

/// 抓取器定义配置设置
#[derive(Debug, Deserialize)]
pub struct ScraperSettings {
    /// 定义文件所在目录
    pub path: String,
    /// 动作类型没有实现时是否在加载阶段报错
    pub strict_actions: bool,
}

/// 脚本动作配置设置
#[derive(Debug, Default, Deserialize)]
pub struct ScriptSettings {
    /// 脚本运行的工作目录，未设置时继承当前目录
    pub working_dir: Option<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次读取默认值、`config/default`、`config/{APP_ENVIRONMENT}` 与
    /// `SCRAPERKIT__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SCRAPERKIT").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 从指定文件加载配置，缺失的键使用默认值
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("scrapers.path", "./scrapers")?
            .set_default("scrapers.strict_actions", false)
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::definition::ScraperDefinition;
use crate::engines::resolver::ActionRegistry;
use crate::utils::errors::LoadError;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// 抓取器定义加载器
///
/// 严格解析单个定义（未知字段即失败），根据来源文件名推导 `id`，
/// 并在返回前为所有操作绑定处理器
#[derive(Clone)]
pub struct ScraperLoader {
    registry: Arc<ActionRegistry>,
    strict_actions: bool,
}

impl Default for ScraperLoader {
    fn default() -> Self {
        Self::new(Arc::new(ActionRegistry::with_defaults()))
    }
}

impl ScraperLoader {
    /// 创建新的加载器
    ///
    /// # 参数
    ///
    /// * `registry` - 动作解析器
    pub fn new(registry: Arc<ActionRegistry>) -> Self {
        Self {
            registry,
            strict_actions: false,
        }
    }

    /// 未注册实现的动作类型是否在加载时报错
    pub fn with_strict_actions(mut self, strict: bool) -> Self {
        self.strict_actions = strict;
        self
    }

    /// 从字节内容加载定义
    ///
    /// # 参数
    ///
    /// * `source_name` - 来源文件名，用于推导 `id`
    /// * `source` - 序列化的定义内容
    ///
    /// # 返回值
    ///
    /// * `Ok(ScraperDefinition)` - 已绑定处理器的定义
    /// * `Err(LoadError)` - 解码失败、无法推导标识或动作不受支持
    pub fn load(&self, source_name: &str, source: &[u8]) -> Result<ScraperDefinition, LoadError> {
        let mut definition: ScraperDefinition = serde_yaml::from_slice(source)?;
        definition.id = derive_id(source_name)?;

        self.registry
            .resolve_definition(&mut definition, self.strict_actions)?;

        debug!(
            "Loaded scraper definition {} ({})",
            definition.id, definition.name
        );
        Ok(definition)
    }

    /// 从文件加载定义
    pub fn load_path(&self, path: &Path) -> Result<ScraperDefinition, LoadError> {
        let source = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let source_name = path.to_string_lossy();
        let definition = self.load(&source_name, &source)?;
        info!("Loaded scraper {} from {}", definition.id(), path.display());
        Ok(definition)
    }
}

/// 由来源文件名推导定义标识
///
/// 取文件名中最后一个 `.` 之前的部分，没有扩展名或结果为空时返回配置错误
pub fn derive_id(source_name: &str) -> Result<String, LoadError> {
    let file_name = Path::new(source_name)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(source_name);

    match file_name.rfind('.') {
        Some(0) => Err(LoadError::Config(format!(
            "scraper source `{}` has an empty file stem",
            source_name
        ))),
        Some(idx) => Ok(file_name[..idx].to_string()),
        None => Err(LoadError::Config(format!(
            "cannot derive scraper id from `{}`: missing extension",
            source_name
        ))),
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::definition::{ActionKind, BoundHandler, Operation, ScraperDefinition};
use crate::engines::script_engine::ScriptEngine;
use crate::engines::traits::ScrapeAction;
use crate::utils::errors::LoadError;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// 动作解析器
///
/// 维护动作类型到具体抓取实现的映射，在加载后为每个操作配置绑定处理器。
/// 新增动作类型只需注册新的实现，调用方无需改动。
#[derive(Clone, Default)]
pub struct ActionRegistry {
    actions: HashMap<ActionKind, Arc<dyn ScrapeAction>>,
}

impl ActionRegistry {
    /// 创建空的解析器，所有操作都不会被绑定
    pub fn empty() -> Self {
        Self::default()
    }

    /// 创建注册了内置动作的解析器
    pub fn with_defaults() -> Self {
        Self::with_script_engine(ScriptEngine::default())
    }

    /// 使用指定的脚本引擎创建解析器
    pub fn with_script_engine(engine: ScriptEngine) -> Self {
        let mut registry = Self::empty();
        registry.register(ActionKind::Script, Arc::new(engine));
        registry
    }

    /// 注册（或替换）某一动作类型的实现
    pub fn register(&mut self, kind: ActionKind, action: Arc<dyn ScrapeAction>) -> &mut Self {
        self.actions.insert(kind, action);
        self
    }

    /// 该动作类型是否注册了实现
    pub fn supports(&self, kind: ActionKind) -> bool {
        self.actions.contains_key(&kind)
    }

    /// 解析单个操作配置对应的处理器
    ///
    /// 没有注册实现的动作类型返回 `None`，调度时视为“无结果”
    pub fn resolve(&self, operation: &dyn Operation) -> Option<BoundHandler> {
        self.actions
            .get(&operation.type_config().action)
            .cloned()
            .map(BoundHandler::new)
    }

    /// 为定义中所有已填充的操作绑定处理器
    ///
    /// `strict` 为真时，遇到未注册的动作类型直接返回错误
    pub fn resolve_definition(
        &self,
        definition: &mut ScraperDefinition,
        strict: bool,
    ) -> Result<(), LoadError> {
        let id = definition.id.clone();
        for operation in definition.operations_mut() {
            let kind = operation.type_config().action;
            if !self.supports(kind) {
                if strict {
                    return Err(LoadError::UnsupportedAction(kind));
                }
                debug!("Scraper {}: action `{}` has no implementation, leaving unbound", id, kind);
            }
            operation.bind(self.resolve(&*operation));
        }
        Ok(())
    }
}

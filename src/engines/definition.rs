// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::ScrapeAction;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::Arc;

/// 抓取动作类型
///
/// 目前只有 `script` 一种，未识别的标签在反序列化阶段即被拒绝
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// 外部脚本
    Script,
}

impl ActionKind {
    /// 获取动作名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Script => "script",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 抓取类型配置
///
/// 描述一次抓取如何执行：动作类型加上动作参数（脚本命令及其参数）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScraperTypeConfig {
    pub action: ActionKind,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub script: Vec<String>,
}

/// 显式的 `~` / `null` 列表与缺省等价，视为空列表
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// URL 规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRule {
    pub type_config: ScraperTypeConfig,
    pub urls: Vec<String>,
}

impl UrlRule {
    /// 候选 URL 包含任一配置片段即视为匹配（区分大小写，不锚定）
    pub fn matches_url(&self, url: &str) -> bool {
        self.urls.iter().any(|candidate| url.contains(candidate.as_str()))
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawUrlRule {
    action: ActionKind,
    #[serde(default, deserialize_with = "null_as_empty")]
    script: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    url: Vec<String>,
}

impl RawUrlRule {
    fn into_rule(self) -> UrlRule {
        UrlRule {
            type_config: ScraperTypeConfig {
                action: self.action,
                script: self.script,
            },
            urls: self.url,
        }
    }
}

/// 已绑定的抓取动作
#[derive(Clone)]
pub struct BoundHandler(Arc<dyn ScrapeAction>);

impl BoundHandler {
    pub fn new(action: Arc<dyn ScrapeAction>) -> Self {
        Self(action)
    }

    pub fn action(&self) -> &dyn ScrapeAction {
        self.0.as_ref()
    }
}

impl fmt::Debug for BoundHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoundHandler").field(&self.0.name()).finish()
    }
}

/// 操作配置的公共行为，供解析阶段统一绑定处理器
pub trait Operation {
    /// 声明的抓取类型配置
    fn type_config(&self) -> &ScraperTypeConfig;

    /// 绑定处理器，只在解析阶段调用一次
    fn bind(&mut self, handler: Option<BoundHandler>);

    /// 当前绑定的处理器
    fn handler(&self) -> Option<&dyn ScrapeAction>;
}

/// 按名称或按片段的操作配置
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "ScraperTypeConfig")]
pub struct OperationConfig {
    pub type_config: ScraperTypeConfig,
    handler: Option<BoundHandler>,
}

impl From<ScraperTypeConfig> for OperationConfig {
    fn from(type_config: ScraperTypeConfig) -> Self {
        Self {
            type_config,
            handler: None,
        }
    }
}

impl Operation for OperationConfig {
    fn type_config(&self) -> &ScraperTypeConfig {
        &self.type_config
    }

    fn bind(&mut self, handler: Option<BoundHandler>) {
        self.handler = handler;
    }

    fn handler(&self) -> Option<&dyn ScrapeAction> {
        self.handler.as_ref().map(BoundHandler::action)
    }
}

/// 按 URL 的操作配置
#[derive(Debug, Clone)]
pub struct UrlOperationConfig {
    pub rule: UrlRule,
    handler: Option<BoundHandler>,
}

impl<'de> Deserialize<'de> for UrlOperationConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawUrlRule::deserialize(deserializer)?;
        Ok(Self {
            rule: raw.into_rule(),
            handler: None,
        })
    }
}

impl UrlOperationConfig {
    pub fn matches_url(&self, url: &str) -> bool {
        self.rule.matches_url(url)
    }
}

impl Operation for UrlOperationConfig {
    fn type_config(&self) -> &ScraperTypeConfig {
        &self.rule.type_config
    }

    fn bind(&mut self, handler: Option<BoundHandler>) {
        self.handler = handler;
    }

    fn handler(&self) -> Option<&dyn ScrapeAction> {
        self.handler.as_ref().map(BoundHandler::action)
    }
}

/// 抓取器定义
///
/// 一个具名、带标识的抓取器，由五种操作中的任意子集组成。
/// `id` 由加载器根据来源文件名推导，源文件中出现的未知字段会导致加载失败。
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ScraperDefinition {
    #[serde(skip)]
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) performer_by_name: Option<OperationConfig>,
    #[serde(default)]
    pub(crate) performer_by_fragment: Option<OperationConfig>,
    #[serde(default, rename = "performerByURL", deserialize_with = "null_as_empty")]
    pub(crate) performer_by_url: Vec<UrlOperationConfig>,
    #[serde(default)]
    pub(crate) scene_by_fragment: Option<OperationConfig>,
    #[serde(default, rename = "sceneByURL", deserialize_with = "null_as_empty")]
    pub(crate) scene_by_url: Vec<UrlOperationConfig>,
}

impl ScraperDefinition {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn performer_by_name(&self) -> Option<&OperationConfig> {
        self.performer_by_name.as_ref()
    }

    pub fn performer_by_fragment(&self) -> Option<&OperationConfig> {
        self.performer_by_fragment.as_ref()
    }

    pub fn performer_by_url(&self) -> &[UrlOperationConfig] {
        &self.performer_by_url
    }

    pub fn scene_by_fragment(&self) -> Option<&OperationConfig> {
        self.scene_by_fragment.as_ref()
    }

    pub fn scene_by_url(&self) -> &[UrlOperationConfig] {
        &self.scene_by_url
    }

    /// 所有已填充的操作配置，按声明顺序排列
    pub(crate) fn operations_mut(&mut self) -> Vec<&mut dyn Operation> {
        let mut ops: Vec<&mut dyn Operation> = Vec::new();
        if let Some(op) = self.performer_by_name.as_mut() {
            ops.push(op);
        }
        if let Some(op) = self.performer_by_fragment.as_mut() {
            ops.push(op);
        }
        for op in self.performer_by_url.iter_mut() {
            ops.push(op);
        }
        if let Some(op) = self.scene_by_fragment.as_mut() {
            ops.push(op);
        }
        for op in self.scene_by_url.iter_mut() {
            ops.push(op);
        }
        ops
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{
    SceneUpdateInput, ScrapedPerformer, ScrapedPerformerInput, ScrapedScene,
};
use crate::engines::definition::ScraperTypeConfig;
use thiserror::Error;

/// 抓取错误类型
///
/// 由抓取动作产生，调度器原样向上传递，不重试也不吞掉
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// 脚本命令为空
    #[error("Script command is empty")]
    EmptyScript,
    /// 脚本以非零状态退出
    #[error("Script `{command}` failed with {status}: {stderr}")]
    ScriptFailed {
        command: String,
        status: String,
        stderr: String,
    },
    /// 进程 I/O 失败
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 输入编码或输出解码失败
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// 找不到指定 ID 的抓取器
    #[error("Scraper with ID {0} not found")]
    ScraperNotFound(String),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 抓取动作特质
///
/// 每种动作类型（如 `script`）对应一个实现，由解析阶段绑定到操作配置上。
/// 返回 `Ok(None)`（按名称搜索时为空列表）表示“没有匹配”，不是错误。
pub trait ScrapeAction: Send + Sync {
    /// 动作名称
    fn name(&self) -> &'static str;

    /// 按名称搜索演员
    fn scrape_performer_names(
        &self,
        config: &ScraperTypeConfig,
        name: &str,
    ) -> Result<Vec<ScrapedPerformer>, ScrapeError>;

    /// 按片段补全演员
    fn scrape_performer_fragment(
        &self,
        config: &ScraperTypeConfig,
        fragment: &ScrapedPerformerInput,
    ) -> Result<Option<ScrapedPerformer>, ScrapeError>;

    /// 按 URL 抓取演员
    fn scrape_performer_url(
        &self,
        config: &ScraperTypeConfig,
        url: &str,
    ) -> Result<Option<ScrapedPerformer>, ScrapeError>;

    /// 按片段补全场景
    fn scrape_scene_fragment(
        &self,
        config: &ScraperTypeConfig,
        scene: &SceneUpdateInput,
    ) -> Result<Option<ScrapedScene>, ScrapeError>;

    /// 按 URL 抓取场景
    fn scrape_scene_url(
        &self,
        config: &ScraperTypeConfig,
        url: &str,
    ) -> Result<Option<ScrapedScene>, ScrapeError>;
}

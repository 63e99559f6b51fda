// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{
    SceneUpdateInput, ScrapedPerformer, ScrapedPerformerInput, ScrapedScene,
};
use crate::engines::definition::{
    Operation, OperationConfig, ScraperDefinition, ScraperTypeConfig, UrlOperationConfig,
};
use crate::engines::traits::{ScrapeAction, ScrapeError};
use tracing::{debug, trace};

/// 判断规则列表中是否有规则匹配该 URL
///
/// 只做成员判断，与处理器是否绑定无关；空列表永远不匹配
pub fn matches_url(rules: &[UrlOperationConfig], url: &str) -> bool {
    rules.iter().any(|rule| rule.matches_url(url))
}

/// 按声明顺序尝试匹配的 URL 规则
///
/// 第一个返回结果的规则胜出；返回 `None` 时继续尝试下一条；
/// 出错时立即返回，不再尝试后续规则
fn scrape_by_url<T, F>(
    rules: &[UrlOperationConfig],
    url: &str,
    scrape: F,
) -> Result<Option<T>, ScrapeError>
where
    F: Fn(&dyn ScrapeAction, &ScraperTypeConfig, &str) -> Result<Option<T>, ScrapeError>,
{
    for (idx, rule) in rules.iter().enumerate() {
        if !rule.matches_url(url) {
            continue;
        }
        let Some(handler) = rule.handler() else {
            trace!("URL rule #{} matches {} but has no handler", idx, url);
            continue;
        };

        if let Some(result) = scrape(handler, rule.type_config(), url)? {
            debug!("URL rule #{} produced a result for {}", idx, url);
            return Ok(Some(result));
        }
    }

    Ok(None)
}

fn bound(operation: Option<&OperationConfig>) -> Option<(&dyn ScrapeAction, &ScraperTypeConfig)> {
    let operation = operation?;
    operation
        .handler()
        .map(|handler| (handler, operation.type_config()))
}

impl ScraperDefinition {
    /// 按名称搜索演员
    ///
    /// 未配置或未绑定时返回空列表
    pub fn scrape_performer_names(&self, name: &str) -> Result<Vec<ScrapedPerformer>, ScrapeError> {
        match bound(self.performer_by_name.as_ref()) {
            Some((handler, config)) => handler.scrape_performer_names(config, name),
            None => Ok(Vec::new()),
        }
    }

    /// 按片段补全演员
    pub fn scrape_performer(
        &self,
        fragment: &ScrapedPerformerInput,
    ) -> Result<Option<ScrapedPerformer>, ScrapeError> {
        match bound(self.performer_by_fragment.as_ref()) {
            Some((handler, config)) => handler.scrape_performer_fragment(config, fragment),
            None => Ok(None),
        }
    }

    /// 按 URL 抓取演员
    pub fn scrape_performer_url(&self, url: &str) -> Result<Option<ScrapedPerformer>, ScrapeError> {
        scrape_by_url(&self.performer_by_url, url, |handler, config, url| {
            handler.scrape_performer_url(config, url)
        })
    }

    pub fn matches_performer_url(&self, url: &str) -> bool {
        matches_url(&self.performer_by_url, url)
    }

    /// 按片段补全场景
    pub fn scrape_scene(&self, scene: &SceneUpdateInput) -> Result<Option<ScrapedScene>, ScrapeError> {
        match bound(self.scene_by_fragment.as_ref()) {
            Some((handler, config)) => handler.scrape_scene_fragment(config, scene),
            None => Ok(None),
        }
    }

    /// 按 URL 抓取场景
    pub fn scrape_scene_url(&self, url: &str) -> Result<Option<ScrapedScene>, ScrapeError> {
        scrape_by_url(&self.scene_by_url, url, |handler, config, url| {
            handler.scrape_scene_url(config, url)
        })
    }

    pub fn matches_scene_url(&self, url: &str) -> bool {
        matches_url(&self.scene_by_url, url)
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{
    SceneUpdateInput, ScrapedPerformer, ScrapedPerformerInput, ScrapedScene, Scraper,
};
use crate::engines::definition::ScraperDefinition;
use crate::engines::loader::ScraperLoader;
use crate::engines::traits::ScrapeError;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// 抓取器缓存
///
/// 持有一组已加载的抓取器定义，并在定义之间路由抓取请求。
/// 单个定义加载失败只会被记录并跳过，不影响其他定义。
#[derive(Debug, Default)]
pub struct ScraperCache {
    scrapers: Vec<ScraperDefinition>,
}

impl ScraperCache {
    /// 从已构建的定义创建缓存
    ///
    /// `id` 重复的定义保留第一个
    pub fn from_definitions(definitions: impl IntoIterator<Item = ScraperDefinition>) -> Self {
        let mut seen = HashSet::new();
        let mut scrapers = Vec::new();
        for definition in definitions {
            if !seen.insert(definition.id().to_string()) {
                warn!("Duplicate scraper id {}, skipping", definition.id());
                continue;
            }
            scrapers.push(definition);
        }
        Self { scrapers }
    }

    /// 加载目录（含子目录）下所有 `.yml` / `.yaml` 定义
    ///
    /// # 参数
    ///
    /// * `dir` - 定义所在目录
    /// * `loader` - 定义加载器
    ///
    /// # 返回值
    ///
    /// 目录不可读时返回错误；单个文件失败只记录警告
    pub fn load_dir(dir: &Path, loader: &ScraperLoader) -> std::io::Result<Self> {
        let paths = definition_files(dir)?;

        let mut definitions = Vec::new();
        for path in paths {
            match loader.load_path(&path) {
                Ok(definition) => definitions.push(definition),
                Err(e) => warn!("Failed to load scraper {}: {}", path.display(), e),
            }
        }

        let cache = Self::from_definitions(definitions);
        info!("Loaded {} scrapers from {}", cache.len(), dir.display());
        Ok(cache)
    }

    pub fn len(&self) -> usize {
        self.scrapers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scrapers.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ScraperDefinition> {
        self.scrapers.iter().find(|s| s.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScraperDefinition> {
        self.scrapers.iter()
    }

    /// 支持演员抓取的所有抓取器能力描述
    pub fn list_performer_scrapers(&self) -> Vec<Scraper> {
        self.scrapers
            .iter()
            .filter(|s| s.supports_performers())
            .map(ScraperDefinition::to_scraper)
            .collect()
    }

    /// 支持场景抓取的所有抓取器能力描述
    pub fn list_scene_scrapers(&self) -> Vec<Scraper> {
        self.scrapers
            .iter()
            .filter(|s| s.supports_scenes())
            .map(ScraperDefinition::to_scraper)
            .collect()
    }

    fn require(&self, id: &str) -> Result<&ScraperDefinition, ScrapeError> {
        self.get(id)
            .ok_or_else(|| ScrapeError::ScraperNotFound(id.to_string()))
    }

    pub fn scrape_performer_list(
        &self,
        scraper_id: &str,
        name: &str,
    ) -> Result<Vec<ScrapedPerformer>, ScrapeError> {
        self.require(scraper_id)?.scrape_performer_names(name)
    }

    pub fn scrape_performer(
        &self,
        scraper_id: &str,
        fragment: &ScrapedPerformerInput,
    ) -> Result<Option<ScrapedPerformer>, ScrapeError> {
        self.require(scraper_id)?.scrape_performer(fragment)
    }

    pub fn scrape_scene(
        &self,
        scraper_id: &str,
        scene: &SceneUpdateInput,
    ) -> Result<Option<ScrapedScene>, ScrapeError> {
        self.require(scraper_id)?.scrape_scene(scene)
    }

    /// 按 URL 抓取演员
    ///
    /// 依次尝试 URL 匹配的抓取器，第一个返回结果的胜出；无结果时尝试下一个，出错立即返回
    pub fn scrape_performer_url(&self, url: &str) -> Result<Option<ScrapedPerformer>, ScrapeError> {
        for scraper in self.scrapers.iter().filter(|s| s.matches_performer_url(url)) {
            debug!("Trying scraper {} for performer URL {}", scraper.id(), url);
            if let Some(performer) = scraper.scrape_performer_url(url)? {
                return Ok(Some(performer));
            }
        }
        Ok(None)
    }

    /// 按 URL 抓取场景
    pub fn scrape_scene_url(&self, url: &str) -> Result<Option<ScrapedScene>, ScrapeError> {
        for scraper in self.scrapers.iter().filter(|s| s.matches_scene_url(url)) {
            debug!("Trying scraper {} for scene URL {}", scraper.id(), url);
            if let Some(scene) = scraper.scrape_scene_url(url)? {
                return Ok(Some(scene));
            }
        }
        Ok(None)
    }
}

/// 递归列出目录下的定义文件，按文件名排序，不跟随符号链接
pub(crate) fn definition_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                warn!("Skipping unreadable scraper path: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_dir() && is_definition_file(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

fn is_definition_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yml") | Some("yaml")
    )
}

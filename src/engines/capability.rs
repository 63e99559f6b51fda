// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{ScrapeType, Scraper, ScraperSpec};
use crate::engines::definition::{ScraperDefinition, UrlOperationConfig};

/// 将抓取器定义投影为能力描述
pub fn project(definition: &ScraperDefinition) -> Scraper {
    definition.to_scraper()
}

impl ScraperDefinition {
    /// 生成能力描述
    ///
    /// 某一对象类型没有任何支持的抓取方式时，对应字段为 `None`
    pub fn to_scraper(&self) -> Scraper {
        let mut performer = ScraperSpec::default();
        if self.performer_by_name.is_some() {
            performer.supported_scrapes.push(ScrapeType::Name);
        }
        if self.performer_by_fragment.is_some() {
            performer.supported_scrapes.push(ScrapeType::Fragment);
        }
        push_url_rules(&mut performer, &self.performer_by_url);

        let mut scene = ScraperSpec::default();
        if self.scene_by_fragment.is_some() {
            scene.supported_scrapes.push(ScrapeType::Fragment);
        }
        push_url_rules(&mut scene, &self.scene_by_url);

        Scraper {
            id: self.id.clone(),
            name: self.name.clone(),
            performer: non_empty(performer),
            scene: non_empty(scene),
        }
    }

    pub fn supports_performers(&self) -> bool {
        self.performer_by_name.is_some()
            || self.performer_by_fragment.is_some()
            || !self.performer_by_url.is_empty()
    }

    pub fn supports_scenes(&self) -> bool {
        self.scene_by_fragment.is_some() || !self.scene_by_url.is_empty()
    }
}

fn push_url_rules(spec: &mut ScraperSpec, rules: &[UrlOperationConfig]) {
    if rules.is_empty() {
        return;
    }
    spec.supported_scrapes.push(ScrapeType::Url);
    for rule in rules {
        spec.urls.extend(rule.rule.urls.iter().cloned());
    }
}

fn non_empty(spec: ScraperSpec) -> Option<ScraperSpec> {
    if spec.supported_scrapes.is_empty() {
        None
    } else {
        Some(spec)
    }
}

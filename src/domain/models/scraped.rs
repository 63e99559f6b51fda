// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 抓取到的演员信息
///
/// 所有字段均为可选，抓取脚本只需返回能够获取到的部分
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapedPerformer {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub url: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub birthdate: Option<String>,
    pub ethnicity: Option<String>,
    pub country: Option<String>,
    pub eye_color: Option<String>,
    pub height: Option<String>,
    pub measurements: Option<String>,
    pub fake_tits: Option<String>,
    pub career_length: Option<String>,
    pub tattoos: Option<String>,
    pub piercings: Option<String>,
    pub aliases: Option<String>,
    pub image: Option<String>,
}

/// 演员抓取片段
///
/// 调用方已知的演员数据，交给抓取器补全
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapedPerformerInput {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub url: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub birthdate: Option<String>,
    pub ethnicity: Option<String>,
    pub country: Option<String>,
    pub eye_color: Option<String>,
    pub height: Option<String>,
    pub measurements: Option<String>,
    pub fake_tits: Option<String>,
    pub career_length: Option<String>,
    pub tattoos: Option<String>,
    pub piercings: Option<String>,
    pub aliases: Option<String>,
}

/// 场景中出现的工作室
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapedSceneStudio {
    /// 本地已匹配的工作室 ID
    pub id: Option<String>,
    pub name: String,
    pub url: Option<String>,
}

/// 场景中出现的演员
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapedScenePerformer {
    pub id: Option<String>,
    pub name: String,
    pub url: Option<String>,
    pub aliases: Option<String>,
}

/// 场景中出现的标签
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapedSceneTag {
    pub id: Option<String>,
    pub name: String,
}

/// 抓取到的场景信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapedScene {
    pub title: Option<String>,
    pub details: Option<String>,
    pub url: Option<String>,
    pub date: Option<String>,
    pub image: Option<String>,
    pub studio: Option<ScrapedSceneStudio>,
    pub performers: Vec<ScrapedScenePerformer>,
    pub tags: Vec<ScrapedSceneTag>,
}

/// 场景抓取片段
///
/// 与场景更新请求结构一致，`id` 为本地场景标识
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneUpdateInput {
    pub id: String,
    pub title: Option<String>,
    pub details: Option<String>,
    pub url: Option<String>,
    pub date: Option<String>,
    pub rating: Option<i32>,
    pub studio_id: Option<String>,
    pub performer_ids: Vec<String>,
    pub tag_ids: Vec<String>,
}

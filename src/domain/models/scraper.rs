// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 抓取方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScrapeType {
    /// 按名称搜索
    Name,
    /// 按已知片段补全
    Fragment,
    /// 按来源 URL 抓取
    Url,
}

/// 某一类对象（演员或场景）的抓取能力
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScraperSpec {
    /// 该抓取器声明能处理的 URL 片段
    pub urls: Vec<String>,
    /// 支持的抓取方式，按 Name、Fragment、Url 顺序排列
    pub supported_scrapes: Vec<ScrapeType>,
}

/// 抓取器能力描述
///
/// 由抓取器定义按需推导，不单独持久化。
/// 不支持的对象类型对应字段为 `None`，序列化时省略，
/// 以便调用方区分“不支持”与“支持但没有 URL”。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scraper {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performer: Option<ScraperSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<ScraperSpec>,
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 抓取结果、抓取片段与抓取器能力描述等值类型
pub mod domain;

/// 引擎模块
///
/// 抓取器定义的加载、动作解析、能力投影与请求调度
pub mod engines;

/// 工具模块
///
/// 提供错误类型与日志初始化
pub mod utils;

pub use engines::cache::ScraperCache;
pub use engines::definition::{ActionKind, ScraperDefinition, ScraperTypeConfig};
pub use engines::loader::ScraperLoader;
pub use engines::resolver::ActionRegistry;
pub use engines::traits::{ScrapeAction, ScrapeError};
pub use utils::errors::LoadError;

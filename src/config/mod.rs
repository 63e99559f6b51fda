// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理抓取器目录、动作解析策略与脚本运行环境等配置
pub mod settings;

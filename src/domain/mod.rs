// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型
///
/// 抓取结果、抓取输入片段以及抓取器能力描述
pub mod models;

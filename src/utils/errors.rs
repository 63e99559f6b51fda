// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::definition::ActionKind;
use std::path::PathBuf;
use thiserror::Error;

/// 抓取器定义加载错误
///
/// 只影响单个定义的加载，不影响同一批次中的其他定义
#[derive(Error, Debug)]
pub enum LoadError {
    /// 源内容格式错误或包含未知字段
    #[error("解码失败: {0}")]
    Decode(#[from] serde_yaml::Error),

    /// 无法推导标识等配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 声明的动作类型没有可用的实现
    #[error("不支持的动作类型: {0}")]
    UnsupportedAction(ActionKind),

    #[error("读取文件 {} 失败: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// 判断是否为解码错误
    pub fn is_decode(&self) -> bool {
        matches!(self, LoadError::Decode(_))
    }
}

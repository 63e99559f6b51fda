// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{
    SceneUpdateInput, ScrapedPerformer, ScrapedPerformerInput, ScrapedScene,
};
use crate::engines::definition::ScraperTypeConfig;
use crate::engines::traits::{ScrapeAction, ScrapeError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

#[derive(Serialize)]
struct NameInput<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct UrlInput<'a> {
    url: &'a str,
}

/// 脚本抓取引擎
///
/// 以 `script[0]` 为程序、`script[1..]` 为参数启动子进程，
/// 将输入以 JSON 写入标准输入，并把标准输出解析为 JSON 结果。
/// 输出为空或为 `null` 表示没有匹配。
#[derive(Debug, Clone, Default)]
pub struct ScriptEngine {
    working_dir: Option<PathBuf>,
}

impl ScriptEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定脚本运行的工作目录
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    fn run<I, O>(&self, config: &ScraperTypeConfig, input: &I) -> Result<Option<O>, ScrapeError>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        let (program, args) = config.script.split_first().ok_or(ScrapeError::EmptyScript)?;
        let payload = serde_json::to_vec(input)?;

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        debug!("Running scraper script: {}", config.script.join(" "));
        let mut child = command.spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            // The script may exit without reading its input.
            if let Err(e) = stdin.write_all(&payload) {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
        }

        let output = child.wait_with_output()?;
        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.lines().filter(|line| !line.trim().is_empty()) {
            debug!("[script {}] {}", program, line);
        }

        if !output.status.success() {
            warn!("Scraper script {} exited with {}", program, output.status);
            return Err(ScrapeError::ScriptFailed {
                command: config.script.join(" "),
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stdout = stdout.trim();
        if stdout.is_empty() {
            return Ok(None);
        }

        Ok(serde_json::from_str::<Option<O>>(stdout)?)
    }
}

impl ScrapeAction for ScriptEngine {
    fn name(&self) -> &'static str {
        "script"
    }

    fn scrape_performer_names(
        &self,
        config: &ScraperTypeConfig,
        name: &str,
    ) -> Result<Vec<ScrapedPerformer>, ScrapeError> {
        let performers: Option<Vec<ScrapedPerformer>> = self.run(config, &NameInput { name })?;
        Ok(performers.unwrap_or_default())
    }

    fn scrape_performer_fragment(
        &self,
        config: &ScraperTypeConfig,
        fragment: &ScrapedPerformerInput,
    ) -> Result<Option<ScrapedPerformer>, ScrapeError> {
        self.run(config, fragment)
    }

    fn scrape_performer_url(
        &self,
        config: &ScraperTypeConfig,
        url: &str,
    ) -> Result<Option<ScrapedPerformer>, ScrapeError> {
        self.run(config, &UrlInput { url })
    }

    fn scrape_scene_fragment(
        &self,
        config: &ScraperTypeConfig,
        scene: &SceneUpdateInput,
    ) -> Result<Option<ScrapedScene>, ScrapeError> {
        self.run(config, scene)
    }

    fn scrape_scene_url(
        &self,
        config: &ScraperTypeConfig,
        url: &str,
    ) -> Result<Option<ScrapedScene>, ScrapeError> {
        self.run(config, &UrlInput { url })
    }
}

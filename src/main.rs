// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraperkit::config::settings::Settings;
use scraperkit::engines::script_engine::ScriptEngine;
use scraperkit::utils::telemetry;
use scraperkit::{ActionRegistry, ScraperCache, ScraperLoader};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// 主函数
///
/// 加载配置目录下的所有抓取器定义，并以 JSON 输出其能力描述
fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();

    let settings = Settings::new()?;
    info!("Configuration loaded");

    let mut script_engine = ScriptEngine::new();
    if let Some(dir) = &settings.script.working_dir {
        script_engine = script_engine.with_working_dir(dir);
    }
    let registry = Arc::new(ActionRegistry::with_script_engine(script_engine));
    let loader = ScraperLoader::new(registry).with_strict_actions(settings.scrapers.strict_actions);

    let cache = ScraperCache::load_dir(Path::new(&settings.scrapers.path), &loader)?;

    let output = json!({
        "performer": cache.list_performer_scrapers(),
        "scene": cache.list_scene_scrapers(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod scraped;
pub mod scraper;

pub use scraped::{
    SceneUpdateInput, ScrapedPerformer, ScrapedPerformerInput, ScrapedScene,
    ScrapedScenePerformer, ScrapedSceneStudio, ScrapedSceneTag,
};
pub use scraper::{ScrapeType, Scraper, ScraperSpec};

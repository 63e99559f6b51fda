// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::unit::helpers::{fake_loader, load_fake};
use scraperkit::domain::models::{SceneUpdateInput, ScrapedPerformerInput};
use scraperkit::{ScrapeError, ScraperCache};
use std::fs;

#[test]
fn test_load_dir_isolates_broken_definitions() {
    // Given: 一个有效定义、一个包含未知字段的定义和一个子目录中的定义
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("good.yml"),
        "name: Good\nperformerByName:\n  action: script\n",
    )
    .unwrap();
    fs::write(dir.path().join("broken.yml"), "name: Broken\nunknown: 1\n").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(
        dir.path().join("nested").join("deep.yaml"),
        "name: Deep\nsceneByFragment:\n  action: script\n",
    )
    .unwrap();
    let (loader, _) = fake_loader();

    // When
    let cache = ScraperCache::load_dir(dir.path(), &loader).unwrap();

    // Then: 损坏的定义被跳过，其余正常加载
    assert_eq!(cache.len(), 2);
    assert!(cache.get("good").is_some());
    assert!(cache.get("deep").is_some());
    assert!(cache.get("broken").is_none());
}

#[test]
fn test_duplicate_ids_keep_first_definition() {
    let (first, _) = load_fake("dup.yml", "name: First\n");
    let (second, _) = load_fake("dup.yaml", "name: Second\n");

    let cache = ScraperCache::from_definitions(vec![first, second]);

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("dup").unwrap().name(), "First");
}

#[test]
fn test_list_scrapers_by_subject() {
    let (performers, _) = load_fake("p.yml", "performerByName:\n  action: script\n");
    let (scenes, _) = load_fake("s.yml", "sceneByFragment:\n  action: script\n");
    let (empty, _) = load_fake("e.yml", "name: Empty\n");
    let cache = ScraperCache::from_definitions(vec![performers, scenes, empty]);

    let performer_ids: Vec<_> = cache
        .list_performer_scrapers()
        .into_iter()
        .map(|s| s.id)
        .collect();
    let scene_ids: Vec<_> = cache
        .list_scene_scrapers()
        .into_iter()
        .map(|s| s.id)
        .collect();

    assert_eq!(performer_ids, vec!["p"]);
    assert_eq!(scene_ids, vec!["s"]);
}

#[test]
fn test_unknown_scraper_id_is_error() {
    let cache = ScraperCache::default();

    let err = cache.scrape_performer_list("missing", "Jane").unwrap_err();
    assert!(matches!(err, ScrapeError::ScraperNotFound(ref id) if id == "missing"));

    assert!(cache
        .scrape_performer("missing", &ScrapedPerformerInput::default())
        .is_err());
    assert!(cache
        .scrape_scene("missing", &SceneUpdateInput::default())
        .is_err());
}

#[test]
fn test_scrape_by_id_dispatches_to_definition() {
    let (definition, fake) = load_fake(
        "site.yml",
        "performerByName:\n  action: script\n  script: [\"found:site\"]\n",
    );
    let cache = ScraperCache::from_definitions(vec![definition]);

    let performers = cache.scrape_performer_list("site", "Jane").unwrap();

    assert_eq!(performers[0].name.as_deref(), Some("site/Jane"));
    assert_eq!(fake.calls(), vec!["names found:site"]);
}

#[test]
fn test_url_routing_falls_through_to_next_scraper() {
    // Given: 两个都声明了该 URL 的抓取器，第一个没有结果
    let (first, first_fake) = load_fake(
        "a.yml",
        "sceneByURL:\n  - action: script\n    script: [none]\n    url: [example.com]\n",
    );
    let (second, second_fake) = load_fake(
        "b.yml",
        "sceneByURL:\n  - action: script\n    script: [\"found:b\"]\n    url: [example.com/scene]\n",
    );
    let (unrelated, unrelated_fake) = load_fake(
        "c.yml",
        "sceneByURL:\n  - action: script\n    script: [\"found:c\"]\n    url: [other.org]\n",
    );
    let cache = ScraperCache::from_definitions(vec![first, second, unrelated]);

    let scene = cache
        .scrape_scene_url("https://example.com/scene/1")
        .unwrap()
        .unwrap();

    assert_eq!(scene.title.as_deref(), Some("b"));
    assert_eq!(first_fake.calls(), vec!["scene_url none"]);
    assert_eq!(second_fake.calls(), vec!["scene_url found:b"]);
    assert!(unrelated_fake.calls().is_empty());
}

#[test]
fn test_url_routing_error_aborts() {
    let (first, _) = load_fake(
        "a.yml",
        "performerByURL:\n  - action: script\n    script: [\"fail:broken\"]\n    url: [example.com]\n",
    );
    let (second, second_fake) = load_fake(
        "b.yml",
        "performerByURL:\n  - action: script\n    script: [\"found:b\"]\n    url: [example.com]\n",
    );
    let cache = ScraperCache::from_definitions(vec![first, second]);

    assert!(cache.scrape_performer_url("https://example.com/p/1").is_err());
    assert!(second_fake.calls().is_empty());
}

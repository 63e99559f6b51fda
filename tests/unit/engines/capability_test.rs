// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::unit::helpers::load_unbound;
use scraperkit::domain::models::ScrapeType;
use scraperkit::engines::capability::project;
use serde_json::json;

#[test]
fn test_full_definition_projection() {
    let definition = load_unbound(
        "full.yml",
        r#"
name: Full
performerByName:
  action: script
performerByFragment:
  action: script
performerByURL:
  - action: script
    url: [a.com/p, b.com/p]
  - action: script
    url: [c.com/p]
sceneByFragment:
  action: script
sceneByURL:
  - action: script
    url: [a.com/s]
"#,
    );

    let scraper = project(&definition);

    assert_eq!(scraper.id, "full");
    assert_eq!(scraper.name, "Full");

    let performer = scraper.performer.unwrap();
    assert_eq!(
        performer.supported_scrapes,
        vec![ScrapeType::Name, ScrapeType::Fragment, ScrapeType::Url]
    );
    assert_eq!(performer.urls, vec!["a.com/p", "b.com/p", "c.com/p"]);

    let scene = scraper.scene.unwrap();
    assert_eq!(
        scene.supported_scrapes,
        vec![ScrapeType::Fragment, ScrapeType::Url]
    );
    assert_eq!(scene.urls, vec!["a.com/s"]);
}

#[test]
fn test_by_name_only_has_no_scene_capabilities() {
    let definition = load_unbound("names.yml", "name: N\nperformerByName:\n  action: script\n");

    let scraper = definition.to_scraper();

    assert!(scraper.scene.is_none());
    let performer = scraper.performer.unwrap();
    assert_eq!(performer.supported_scrapes, vec![ScrapeType::Name]);
    assert!(performer.urls.is_empty());
    assert!(definition.supports_performers());
    assert!(!definition.supports_scenes());
}

#[test]
fn test_scene_only_has_no_performer_capabilities() {
    let definition = load_unbound("scenes.yml", "sceneByFragment:\n  action: script\n");

    let scraper = definition.to_scraper();

    assert!(scraper.performer.is_none());
    assert_eq!(
        scraper.scene.unwrap().supported_scrapes,
        vec![ScrapeType::Fragment]
    );
    assert!(!definition.supports_performers());
    assert!(definition.supports_scenes());
}

#[test]
fn test_empty_definition_advertises_nothing() {
    let definition = load_unbound("empty.yml", "name: Empty\n");

    let scraper = definition.to_scraper();

    assert!(scraper.performer.is_none());
    assert!(scraper.scene.is_none());
    assert!(!definition.supports_performers());
    assert!(!definition.supports_scenes());
}

#[test]
fn test_url_rule_without_urls_still_advertises_url_mode() {
    let definition = load_unbound("bare.yml", "performerByURL:\n  - action: script\n");

    let performer = definition.to_scraper().performer.unwrap();

    assert_eq!(performer.supported_scrapes, vec![ScrapeType::Url]);
    assert!(performer.urls.is_empty());
}

#[test]
fn test_projection_serializes_without_absent_groups() {
    let definition = load_unbound(
        "site.yml",
        "name: Site\nperformerByURL:\n  - action: script\n    url: [site.com]\n",
    );

    let value = serde_json::to_value(definition.to_scraper()).unwrap();

    assert_eq!(
        value,
        json!({
            "id": "site",
            "name": "Site",
            "performer": {
                "urls": ["site.com"],
                "supportedScrapes": ["URL"]
            }
        })
    );
}

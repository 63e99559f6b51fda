// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraperkit::config::settings::Settings;
use std::fs;

#[test]
fn test_settings_from_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scraperkit.toml");
    fs::write(
        &path,
        "[scrapers]\npath = \"/srv/scrapers\"\nstrict_actions = true\n\n[script]\nworking_dir = \"/srv\"\n",
    )
    .unwrap();

    let settings = Settings::from_file(&path).unwrap();

    assert_eq!(settings.scrapers.path, "/srv/scrapers");
    assert!(settings.scrapers.strict_actions);
    assert_eq!(settings.script.working_dir.as_deref(), Some("/srv"));
}

#[test]
fn test_settings_from_file_uses_defaults_for_missing_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scraperkit.yaml");
    fs::write(&path, "script:\n  working_dir: /tmp\n").unwrap();

    let settings = Settings::from_file(&path).unwrap();

    assert_eq!(settings.scrapers.path, "./scrapers");
    assert!(!settings.scrapers.strict_actions);
}

//! Loading settings and catalogs from files on disk.

use std::fs;
use std::path::PathBuf;

use ank_base::{Language, PairKey, build_grid, compatibility, evaluate_yogas};
use ank_config::{ConfigError, NumerologyConfig, builtin_catalog, load_catalog};
use ank_time::BirthDate;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ank_config_{name}_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn config_file_with_relative_catalog() {
    let dir = scratch_dir("relative");
    fs::write(
        dir.join("yogas.json"),
        r#"[{"name": "Only One", "numbers": [1]}]"#,
    )
    .unwrap();
    fs::write(
        dir.join("ank.toml"),
        "horizon_years = 60\nmin_repeat = 3\n\n[catalogs]\nyogas = \"yogas.json\"\n",
    )
    .unwrap();

    let config = NumerologyConfig::load(Some(&dir.join("ank.toml"))).unwrap();
    assert_eq!(config.horizon_years, 60);
    assert_eq!(config.recurrence_options().min_repeat, 3);
    assert_eq!(config.tiler_config().horizon_years, 60);

    let catalog = load_catalog(&config).unwrap();
    assert_eq!(catalog.yogas.len(), 1);
    // Tables without an override still come from the built-ins.
    assert_eq!(catalog.essences, builtin_catalog().unwrap().essences);

    fs::remove_dir_all(dir).ok();
}

#[test]
fn broken_catalog_file_names_the_path() {
    let dir = scratch_dir("broken");
    let path = dir.join("recurring.json");
    fs::write(&path, "[1, 2, 3]").unwrap();
    let mut config = NumerologyConfig::default();
    config.catalogs.recurring = Some(path.clone());

    match load_catalog(&config) {
        Err(ConfigError::Catalog(msg)) => assert!(msg.contains("recurring.json")),
        other => panic!("expected catalog error, got {other:?}"),
    }
    fs::remove_dir_all(dir).ok();
}

#[test]
fn missing_config_file_is_io_error() {
    let err = NumerologyConfig::load(Some(std::path::Path::new("/no/such/ank.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn builtin_yogas_on_a_real_chart() {
    let catalog = builtin_catalog().unwrap();
    let grid = build_grid(&BirthDate::new(22, 4, 1987), false);
    let names: Vec<String> = evaluate_yogas(&catalog.yogas, &grid.histogram, &grid.core, Language::English)
        .into_iter()
        .map(|y| y.name)
        .collect();
    // 1 and 2 present; 4, 9, 2 present; 8, 1, 6 present.
    assert!(names.contains(&"Raj Yoga".to_string()));
    assert!(names.contains(&"Plane of Thought".to_string()));
    assert!(names.contains(&"Plane of Action".to_string()));
    assert!(!names.contains(&"Vacant Mental Plane".to_string()));
}

#[test]
fn compatibility_file_override() {
    let dir = scratch_dir("compat");
    fs::write(
        dir.join("pairs.json"),
        r#"{"7-6": {"summary": {"en": "Override"}, "strengths": ["Patience"]}}"#,
    )
    .unwrap();
    fs::write(dir.join("ank.toml"), "[catalogs]\ncompatibility = \"pairs.json\"\n").unwrap();
    let config = NumerologyConfig::load(Some(&dir.join("ank.toml"))).unwrap();
    let catalog = load_catalog(&config).unwrap();
    assert_eq!(catalog.compatibility.len(), 1);
    assert_eq!(catalog.remedies, builtin_catalog().unwrap().remedies);

    // Destinies 6 and 7.
    let a = BirthDate::new(22, 4, 1987);
    let b = BirthDate::new(12, 1, 2001);
    let c = compatibility(&b, &a, &catalog.compatibility, Language::English);
    assert_eq!(c.key, PairKey::new(6, 7));
    assert_eq!(c.summary, "Override");
    assert_eq!(c.strengths, ["Patience"]);
    fs::remove_dir_all(dir).ok();
}

#[test]
fn builtin_compatibility_is_symmetric() {
    let table = builtin_catalog().unwrap().compatibility;
    for a in 1..=9u8 {
        for b in 1..=9u8 {
            let ab = ank_base::compatibility_for_numbers(a, b, &table, Language::Hindi);
            let ba = ank_base::compatibility_for_numbers(b, a, &table, Language::Hindi);
            assert_eq!(ab, ba, "{a}-{b}");
            assert!(!ab.summary.is_empty());
        }
    }
    assert!(ank_base::compatibility_for_numbers(6, 3, &table, Language::English).matched);
}

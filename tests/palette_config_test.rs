//! Loading palettes from files and the embedded default.

mod common;

use std::fs;

use common::capture_logs;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use swatchbook::assets::AssetLoader;
use swatchbook::{ConfigError, Draw, HueRange, PaletteConfig, PaletteError};

const YAML_PALETTE: &str = r##"
log: false
swatches:
  - id: ember
    title: Ember
    hex: "#e4572e"
  - id: navy
    title: Navy
    hex: "#29335c"
    contrast: true
"##;

#[test]
fn test_load_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palette.yaml");
    fs::write(&path, YAML_PALETTE).unwrap();

    let config = PaletteConfig::load(&path).unwrap();
    assert!(!config.log);

    let index = config.try_into_index().unwrap();
    assert_eq!(index.len(), 2);
    assert!(!index.logging());

    let navy = index.get("navy").unwrap();
    assert_eq!(navy.field("contrast"), Some(&serde_json::Value::Bool(true)));
    assert!(navy.hue() > 220.0 && navy.hue() < 235.0);
}

#[test]
fn test_load_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palette.json");
    fs::write(
        &path,
        r##"{"swatches": [{"id": "sky", "hex": "#669bbc"}, {"id": "fern", "hex": "#3f7d20"}]}"##,
    )
    .unwrap();

    let index = PaletteConfig::load(&path).unwrap().into_index();
    assert!(index.logging());

    let mut rng = StdRng::seed_from_u64(3);
    let green = index.by_hue(&mut rng, HueRange::new(90.0, 10.0), &Draw::default());
    assert_eq!(green.first().id(), "fern");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = PaletteConfig::load(&dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_load_malformed_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "swatches: [ {id: a, hex: ").unwrap();

    assert!(matches!(
        PaletteConfig::load(&path),
        Err(ConfigError::Yaml(_))
    ));
}

#[test]
fn test_strict_index_rejects_bad_color() {
    let config = PaletteConfig::from_yaml_str(
        "swatches:\n  - id: ok\n    hex: '#fff'\n  - id: bad\n    hex: '#ffff0'\n",
    )
    .unwrap();

    match config.clone().try_into_index() {
        Err(PaletteError::InvalidColor { id, .. }) => assert_eq!(id, "bad"),
        other => panic!("Expected InvalidColor, got {other:?}"),
    }

    // The lenient path keeps the swatch and warns about it
    let (index, logs) = capture_logs(|| config.into_index());
    assert_eq!(index.len(), 2);
    assert!(logs.contains("Swatch color could not be parsed"), "{logs}");
}

#[test]
fn test_embedded_palette_through_loader() {
    let loader = AssetLoader::new(None);
    let index = PaletteConfig::load_from_assets(&loader)
        .unwrap()
        .try_into_index()
        .unwrap();

    assert!(index.len() >= 10);
    for swatch in index.swatches() {
        assert!(swatch.field("title").is_some(), "{} has no title", swatch.id());
    }
}

//! Checked-in fixtures against the scenario catalog
//!
//! Runs without a JavaScript toolchain: it only looks at the directory tree, so a renamed fixture
//! or a catalog entry that silently turns into a skip shows up in a plain `cargo test`.

use std::collections::BTreeSet;
use std::fs;

use tsconform::config::HarnessConfig;
use tsconform::harness::Fixture;
use tsconform_core::Target;

fn config() -> HarnessConfig {
    HarnessConfig::default().with_root(env!("CARGO_MANIFEST_DIR"))
}

fn fixture(target: Target, id: &str) -> Fixture {
    Fixture::new(&config().fixtures_root(), target, id)
}

fn checked_in(target: Target) -> BTreeSet<String> {
    fs::read_dir(config().target_dir(target))
        .unwrap()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().unwrap().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect()
}

fn runnable(target: Target) -> usize {
    target
        .scenarios()
        .iter()
        .filter(|scenario| fixture(target, scenario.fixture).exists())
        .count()
}

fn present_groups(target: Target) -> BTreeSet<&'static str> {
    target
        .scenarios()
        .iter()
        .filter(|scenario| fixture(target, scenario.fixture).exists())
        .map(|scenario| scenario.group)
        .collect()
}

#[test]
fn every_fixture_directory_is_in_the_catalog() {
    for target in Target::ALL {
        let declared: BTreeSet<&str> = target.scenarios().iter().map(|s| s.fixture).collect();
        for id in checked_in(target) {
            assert!(declared.contains(id.as_str()), "{target}/{id} has no scenario");
        }
    }
}

#[test]
fn every_fixture_has_its_tool_configs() {
    for target in Target::ALL {
        for id in checked_in(target) {
            let fixture = fixture(target, &id);
            assert!(fixture.tsconfig().is_file(), "{target}/{id} has no tsconfig.json");
            if target == Target::Web {
                assert!(fixture.webpack_config().is_file(), "{target}/{id} has no webpack.config.js");
            }
        }
    }
}

#[test]
fn runnable_scenario_counts() {
    assert_eq!(runnable(Target::Node), 16);
    assert_eq!(runnable(Target::Web), 21);
}

#[test]
fn module_systems_are_covered_on_both_targets() {
    for target in Target::ALL {
        let groups = present_groups(target);
        assert!(groups.iter().any(|g| g.contains("CommonJS")), "{target}: no CommonJS fixture");
        assert!(groups.iter().any(|g| g.contains("ES Module")), "{target}: no ES module fixture");
        assert!(groups.iter().any(|g| g.contains("Include")), "{target}: no include fixture");
    }
}

#[test]
fn web_asset_fixtures_are_checked_in() {
    for id in [
        "asset-import-css",
        "asset-import-text-inline",
        "asset-import-text-resource",
        "asset-url-image-inline",
        "asset-url-image-resource",
        "asset-url-text-inline",
        "asset-url-text-resource",
        "entries-require",
        "entries-import-require",
        "include-custom-default",
    ] {
        assert!(fixture(Target::Web, id).exists(), "web/{id} missing");
    }
}

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use doorfacet_cli::args::{Cli, Command, RangeArg, Selection, SelectionArgs};
use doorfacet_cli::{load_schema, run};
use doorfacet_core::config::Config;
use doorfacet_core::Error;
use doorfacet_filter::{FacetSchema, RangeBound};

fn repo_catalog() -> PathBuf {
    // apps/doorfacet-cli -> apps -> repo root
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).ancestors().nth(2).expect("repo root").join("data/in_stock.json")
}

fn selection(select: &[(&str, &str)], range: &[(&str, f64, f64)]) -> SelectionArgs {
    SelectionArgs {
        select: select.iter().map(|(k, v)| Selection { key: (*k).to_string(), value: (*v).to_string() }).collect(),
        range: range.iter().map(|(k, low, high)| RangeArg { key: (*k).to_string(), low: *low, high: *high }).collect(),
    }
}

#[test]
fn range_flags_are_clamped_and_ordered() {
    let schema = FacetSchema::base();
    let state = selection(&[], &[("width", 95.0, 50.0)]).to_state(&schema).expect("state");
    assert_eq!(state.range("width"), Some(RangeBound::new(50.0, 80.0)));
}

#[test]
fn repeated_select_flag_is_idempotent() {
    let schema = FacetSchema::base();
    let state = selection(&[("styles", "Modern"), ("styles", "Modern")], &[]).to_state(&schema).expect("state");
    assert_eq!(state.selected("styles"), ["Modern"]);
}

#[test]
fn unknown_option_and_facet_are_rejected() {
    let schema = FacetSchema::base();
    let err = selection(&[("styles", "Rustic")], &[]).to_state(&schema).expect_err("bad option");
    assert!(matches!(err, Error::UnknownOption { .. }));

    let err = selection(&[], &[("depth", 1.0, 2.0)]).to_state(&schema).expect_err("bad facet");
    assert!(matches!(err, Error::UnknownFacet(k) if k == "depth"));
}

#[test]
fn configured_facets_replace_base_schema() {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("doorfacet.toml");
    fs::write(
        &path,
        r#"
[catalog]
path = "doors.json"

[[facets]]
type = "multi-select"
key = "styles"
label = "Style"
field = "style"
options = ["Modern", "Traditional"]

[[facets]]
type = "range"
key = "width"
label = "Width (in)"
field = "width"
min = 24
max = 96
"#,
    )
    .expect("write");

    let config = Config::load_file(&path).expect("config");
    let schema = load_schema(&config).expect("schema");
    assert_eq!(schema.facets().len(), 2);
    assert_eq!(schema.range_facet("width").map(|f| f.bounds()), Some(RangeBound::new(24.0, 96.0)));
    assert_eq!(config.catalog_path().expect("path"), tmp.path().join("doors.json"));
}

#[test]
fn missing_facets_fall_back_to_base() {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("doorfacet.toml");
    fs::write(&path, "[listing]\npage_size = 4\n").expect("write");
    let config = Config::load_file(&path).expect("config");
    assert_eq!(load_schema(&config).expect("schema"), FacetSchema::base());
}

#[test]
fn run_lists_and_counts_against_fixture_catalog() {
    let tmp = TempDir::new().expect("tempdir");
    let config = tmp.path().join("doorfacet.toml");
    fs::write(&config, format!("[catalog]\npath = {:?}\n", repo_catalog().display().to_string())).expect("write");
    let config = config.display().to_string();

    let list = Cli::try_parse_from(["doorfacet", "--config", config.as_str(), "list", "-s", "doorTypes=Wine doors", "--json"])
        .expect("parse list");
    assert!(matches!(list.command, Command::List(_)));
    run(&list).expect("list");

    let counts = Cli::try_parse_from(["doorfacet", "--config", config.as_str(), "counts", "-r", "height=80:84"])
        .expect("parse counts");
    run(&counts).expect("counts");

    let bad = Cli::try_parse_from(["doorfacet", "--config", config.as_str(), "list", "-s", "glass=Frosted"]).expect("parse");
    assert!(run(&bad).is_err());
}

use std::error::Error;
use std::path::Path;

use serde_json::json;
use tss_config::config::{ConfigFormat, Namespace, Node, load_raw};
use tss_config::errors::ConfigError;
use tss_config::fs::RealFileSystem;
use tss_config::fs::mock::MockFileSystem;
use tss_config::process_config_with;
use tss_config_test_utils::builders::{ConfigDocBuilder, ConfigWorkspace};
use tss_config_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn detects_only_json_and_yaml_extensions() {
    assert_eq!(
        ConfigFormat::from_path(Path::new("cfg/model.json")).ok(),
        Some(ConfigFormat::Json)
    );
    assert_eq!(
        ConfigFormat::from_path(Path::new("cfg/model.yaml")).ok(),
        Some(ConfigFormat::Yaml)
    );

    for rejected in ["model.ini", "model.yml", "model.JSON", "model.toml", "model"] {
        match ConfigFormat::from_path(Path::new(rejected)) {
            Err(ConfigError::UnsupportedFormat { .. }) => {}
            other => panic!("{rejected}: expected UnsupportedFormat, got {other:?}"),
        }
    }
}

#[test]
fn unsupported_extension_is_reported_before_reading_the_file() {
    init_tracing();

    // The file does not exist; the extension check must win every time.
    let fs = MockFileSystem::new();
    for _ in 0..2 {
        match load_raw(&fs, "/configs/missing.ini") {
            Err(ConfigError::UnsupportedFormat { path, extension }) => {
                assert_eq!(path, Path::new("/configs/missing.ini"));
                assert_eq!(extension, ".ini");
            }
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }
}

#[test]
fn json_document_parses_into_nested_mapping() -> TestResult {
    init_tracing();

    let ws = ConfigWorkspace::new()?;
    let path = ws.write(
        "model.json",
        r#"{
            "camera_name": "front",
            "data": {"dataset": "kitti", "batch_size": 4, "shuffle": true},
            "classes": ["car", {"name": "person", "id": 2}]
        }"#,
    )?;

    let ns = Namespace::from(load_raw(&RealFileSystem, &path)?);
    assert_eq!(ns.lookup("camera_name").and_then(Node::as_str), Some("front"));
    assert_eq!(ns.lookup("data.batch_size").and_then(Node::as_i64), Some(4));
    let classes = ns.get("classes").and_then(Node::as_seq).expect("classes");
    assert_eq!(classes[0].as_str(), Some("car"));
    assert_eq!(
        classes[1].as_namespace().and_then(|c| c.get("id")).and_then(Node::as_i64),
        Some(2)
    );
    Ok(())
}

#[test]
fn yaml_document_matches_equivalent_json() -> TestResult {
    init_tracing();

    let ws = ConfigWorkspace::new()?;
    let doc = ConfigDocBuilder::pipeline("kitti", "front")
        .field("model", json!({"name": "yolov5", "layers": [1, 2, 3]}))
        .field("verbose", json!(false))
        .build();

    let json_path = ws.write_doc("model", ConfigFormat::Json, &doc)?;
    let yaml_path = ws.write_doc("model", ConfigFormat::Yaml, &doc)?;

    let from_json = Namespace::from(load_raw(&RealFileSystem, &json_path)?);
    let from_yaml = Namespace::from(load_raw(&RealFileSystem, &yaml_path)?);
    assert_eq!(from_json, from_yaml);
    Ok(())
}

#[test]
fn yaml_resolves_standard_tags() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file(
        "/configs/tags.yaml",
        "camera_name: !!str 42\nquoted: \"7\"\nplain: 7\nflag: true\nnothing: ~\n",
    );

    let ns = Namespace::from(load_raw(&fs, "/configs/tags.yaml")?);
    assert_eq!(ns.get("camera_name").and_then(Node::as_str), Some("42"));
    assert_eq!(ns.get("quoted").and_then(Node::as_str), Some("7"));
    assert_eq!(ns.get("plain").and_then(Node::as_i64), Some(7));
    assert_eq!(ns.get("flag").and_then(Node::as_bool), Some(true));
    assert!(ns.get("nothing").is_some_and(Node::is_null));
    Ok(())
}

#[test]
fn missing_file_is_file_not_found() {
    let fs = MockFileSystem::new();
    match load_raw(&fs, "/configs/absent.json") {
        Err(ConfigError::FileNotFound(path)) => {
            assert_eq!(path, Path::new("/configs/absent.json"));
        }
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn missing_file_on_disk_is_file_not_found() -> TestResult {
    let ws = ConfigWorkspace::new()?;
    let result = load_raw(&RealFileSystem, ws.root().join("nope.yaml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    Ok(())
}

#[test]
fn malformed_content_is_a_parse_error_for_each_format() {
    let fs = MockFileSystem::new();
    fs.add_file("/configs/bad.json", r#"{"camera_name": "front",,}"#);
    fs.add_file("/configs/bad.yaml", "data:\n  dataset: [kitti\n");

    for (path, expected) in [
        ("/configs/bad.json", ConfigFormat::Json),
        ("/configs/bad.yaml", ConfigFormat::Yaml),
    ] {
        match load_raw(&fs, path) {
            Err(ConfigError::Parse { format, .. }) => assert_eq!(format, expected),
            other => panic!("{path}: expected Parse, got {other:?}"),
        }
    }
}

#[test]
fn top_level_must_be_a_mapping() {
    let fs = MockFileSystem::new();
    fs.add_file("/configs/list.json", "[1, 2, 3]");
    fs.add_file("/configs/scalar.yaml", "just a string\n");
    fs.add_file("/configs/empty.yaml", "");

    for path in ["/configs/list.json", "/configs/scalar.yaml", "/configs/empty.yaml"] {
        assert!(
            matches!(load_raw(&fs, path), Err(ConfigError::Parse { .. })),
            "{path} should be rejected"
        );
    }
}

#[test]
fn directory_in_place_of_file_is_an_io_error() {
    let fs = MockFileSystem::new();
    fs.add_file("/configs/model.json/inner.txt", "x");

    match load_raw(&fs, "/configs/model.json") {
        Err(ConfigError::Io { path, .. }) => assert_eq!(path, Path::new("/configs/model.json")),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn parsed_values_keep_their_scalar_kinds() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file(
        "/configs/kinds.json",
        r#"{"i": -3, "f": 0.5, "s": "x", "b": false, "n": null}"#,
    );

    let ns = Namespace::from(load_raw(&fs, "/configs/kinds.json")?);
    assert_eq!(ns.get("i").and_then(Node::as_i64), Some(-3));
    assert_eq!(ns.get("f").and_then(Node::as_f64), Some(0.5));
    assert_eq!(ns.get("s").and_then(Node::as_str), Some("x"));
    assert_eq!(ns.get("b").and_then(Node::as_bool), Some(false));
    assert!(ns.get("n").is_some_and(Node::is_null));
    Ok(())
}

#[test]
fn yaml_merge_keys_are_applied() -> TestResult {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_file(
        "/configs/merged.yaml",
        "base: &base\n  dataset: kitti\n  split: train\n\
         data:\n  <<: *base\n  split: val\n\
         camera_name: front\n",
    );

    let ns = Namespace::from(load_raw(&fs, "/configs/merged.yaml")?);
    let data = ns.section("data").expect("data section");
    assert!(!data.contains_key("<<"));
    assert_eq!(data.get("dataset").and_then(Node::as_str), Some("kitti"));
    // Keys written next to the merge key win over merged ones.
    assert_eq!(data.get("split").and_then(Node::as_str), Some("val"));

    let cfg = process_config_with(&fs, "/configs/merged.yaml", "/data")?;
    assert_eq!(cfg.dataset(), "kitti");
    Ok(())
}

#[test]
fn merging_a_scalar_is_a_parse_error() {
    let fs = MockFileSystem::new();
    fs.add_file("/configs/bad_merge.yaml", "data:\n  <<: 5\n");

    assert!(matches!(
        load_raw(&fs, "/configs/bad_merge.yaml"),
        Err(ConfigError::Parse {
            format: ConfigFormat::Yaml,
            ..
        })
    ));
}

#[test]
fn non_finite_yaml_floats_are_kept() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file(
        "/configs/floats.yaml",
        "lr: .inf\nfloor: -.inf\nthr: .nan\nmomentum: 0.9\n",
    );

    let ns = Namespace::from(load_raw(&fs, "/configs/floats.yaml")?);
    assert_eq!(ns.get("lr").and_then(Node::as_f64), Some(f64::INFINITY));
    assert_eq!(ns.get("floor").and_then(Node::as_f64), Some(f64::NEG_INFINITY));
    assert!(ns.get("thr").and_then(Node::as_f64).is_some_and(f64::is_nan));
    assert_eq!(ns.get("momentum").and_then(Node::as_f64), Some(0.9));
    Ok(())
}

/// Scalars resolve with the YAML 1.2 core schema: 1.1 boolean words stay
/// strings and `!!binary` keeps its base64 text.
#[test]
fn yaml_uses_the_core_schema() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file(
        "/configs/schema.yaml",
        "flag: yes\nswitch: off\nreal: true\nblob: !!binary aGVsbG8=\n",
    );

    let ns = Namespace::from(load_raw(&fs, "/configs/schema.yaml")?);
    assert_eq!(ns.get("flag").and_then(Node::as_str), Some("yes"));
    assert_eq!(ns.get("switch").and_then(Node::as_str), Some("off"));
    assert_eq!(ns.get("real").and_then(Node::as_bool), Some(true));
    assert_eq!(ns.get("blob").and_then(Node::as_str), Some("aGVsbG8="));
    Ok(())
}

#[test]
fn scalar_keys_become_field_names() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file("/configs/keys.yaml", "classes:\n  1: car\n  2: person\n");

    let ns = Namespace::from(load_raw(&fs, "/configs/keys.yaml")?);
    assert_eq!(ns.lookup("classes.1").and_then(Node::as_str), Some("car"));
    assert_eq!(ns.lookup("classes.2").and_then(Node::as_str), Some("person"));
    Ok(())
}

#[test]
fn collection_keys_are_a_parse_error() {
    let fs = MockFileSystem::new();
    fs.add_file("/configs/complex.yaml", "? [a, b]\n: value\n");

    assert!(matches!(
        load_raw(&fs, "/configs/complex.yaml"),
        Err(ConfigError::Parse { .. })
    ));
}

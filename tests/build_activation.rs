//! Build activation through the public plugin API

mod common;

use common::Project;
use regex::Regex;
use system_version::host::{Compiler, HtmlEmitData};
use system_version::plugin::api::{increment, Plugin, PluginOptions, SystemVersionPlugin};

#[test]
fn test_increment_properties() {
    assert_eq!(increment(None), "1.0.0");
    assert_eq!(increment(Some("")), "1.0.0");
    assert_eq!(increment(Some("1.2.3")), "1.2.4");
    assert_eq!(increment(Some("1.2.99")), "1.3.0");
    assert_eq!(increment(Some("1.99.99")), "2.0.0");
    assert_eq!(increment(Some("99.99.99")), "100.0.0");
}

#[tokio::test]
async fn test_manifest_round_trip() {
    let project = Project::with_manifest(r#"{"version":"1.0.0","name":"x"}"#);
    let mut plugin = SystemVersionPlugin::new(PluginOptions::new(project.manifest_path()));

    plugin.apply(&mut Compiler::new()).unwrap();
    plugin.settle().await.unwrap();

    let manifest = project.manifest();
    assert_eq!(manifest["version"], "1.0.1");
    assert_eq!(manifest["name"], "x");
}

#[tokio::test]
async fn test_consecutive_builds_keep_counting() {
    let project = Project::with_manifest(r#"{"version":"1.0.98"}"#);

    for expected in ["1.0.99", "1.1.0", "1.1.1"] {
        let mut plugin = SystemVersionPlugin::new(PluginOptions::new(project.manifest_path()));
        plugin.apply(&mut Compiler::new()).unwrap();
        plugin.settle().await.unwrap();
        assert_eq!(project.manifest()["version"], expected);
    }
}

#[tokio::test]
async fn test_emitted_markup_carries_display_version() {
    let project = Project::with_manifest(r#"{"version":"0.9.9"}"#);
    let mut plugin = SystemVersionPlugin::new(PluginOptions::new(project.manifest_path()));
    let mut compiler = Compiler::new();
    plugin.apply(&mut compiler).unwrap();

    let emitted = compiler.run(vec![
        HtmlEmitData::new("index.html", "<head><body></body>"),
        HtmlEmitData::new("plain.html", "<body></body>"),
    ]);

    let pattern = Regex::new(
        r#"^<head><meta name="version" content="0\.9\.10 build-\d\.\d{5}"><body></body>$"#,
    )
    .unwrap();
    assert!(pattern.is_match(&emitted[0].html), "got: {}", emitted[0].html);
    assert_eq!(emitted[1].html, "<body></body>");

    plugin.settle().await.unwrap();
}

#[tokio::test]
async fn test_callback_fires_before_write_is_awaited() {
    let project = Project::with_manifest(r#"{"version":"1.0.0"}"#);
    let (tx, rx) = std::sync::mpsc::channel();
    let options = PluginOptions::new(project.manifest_path()).with_callback(move || {
        let _ = tx.send(());
    });
    let mut plugin = SystemVersionPlugin::new(options);

    plugin.apply(&mut Compiler::new()).unwrap();
    assert!(rx.try_recv().is_ok());
    assert!(plugin.has_pending_write());

    plugin.settle().await.unwrap();
    assert_eq!(project.manifest()["version"], "1.0.1");
}

//! Whole CLI host runs against temporary projects

use crate::common::Project;
use system_version::app::cli::args::Args;
use system_version::app::cli::config::Settings;
use system_version::app::startup::run;
use system_version::plugin::api::PluginError;

use clap::Parser;

fn settings(project: &Project, argv: &[&str]) -> Settings {
    let mut full = vec!["system-version"];
    full.extend_from_slice(argv);
    let args = Args::try_parse_from(full).unwrap();
    Settings::resolve(&args, None, project.dir.path()).unwrap()
}

#[tokio::test]
async fn test_default_manifest_in_working_dir() {
    let project = Project::with_manifest(r#"{"name":"site","version":"3.4.5"}"#);
    let index = project.write_html("index.html", "<!doctype html><head></head>");

    let display = run(&settings(&project, &["--html", "index.html"])).await.unwrap();

    assert!(display.starts_with("3.4.6 build-"));
    assert_eq!(project.manifest()["version"], "3.4.6");
    assert_eq!(project.manifest()["name"], "site");
    let html = std::fs::read_to_string(index).unwrap();
    assert!(html.contains(&format!("<head><meta name=\"version\" content=\"{}\">", display)));
}

#[tokio::test]
async fn test_pretty_manifest_output() {
    let project = Project::with_manifest(r#"{"version":"1.0.0"}"#);

    run(&settings(&project, &["--pretty"])).await.unwrap();

    let contents = std::fs::read_to_string(project.manifest_path()).unwrap();
    assert_eq!(contents, "{\n  \"version\": \"1.0.1\"\n}");
}

#[tokio::test]
async fn test_missing_manifest_is_fatal() {
    let project = Project::with_manifest("{}");
    std::fs::remove_file(project.manifest_path()).unwrap();

    let result = run(&settings(&project, &[])).await;
    assert!(matches!(result, Err(PluginError::ManifestUnavailable { .. })));
}

#[tokio::test]
async fn test_html_without_head_is_left_alone() {
    let project = Project::with_manifest(r#"{"version":"1.0.0"}"#);
    let fragment = project.write_html("fragment.html", "<div>partial</div>");

    run(&settings(&project, &["--html", "fragment.html"])).await.unwrap();

    assert_eq!(std::fs::read_to_string(fragment).unwrap(), "<div>partial</div>");
    assert_eq!(project.manifest()["version"], "1.0.1");
}

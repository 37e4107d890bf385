//! Integration tests for the option store and report
//!
//! Drives the public API the way a deploy would: resolve phase files for an
//! app, mutate them, then read the report back.

use docker_options_core::apps::FsAppRegistry;
use docker_options_core::paths::PathResolver;
use docker_options_core::phase::parse_phase_list;
use docker_options_core::report::{ReportItem, Reporter};
use docker_options_core::{store, Phase};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_option_lifecycle_across_phases() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("web")).unwrap();
    let resolver = PathResolver::new(temp_dir.path());
    let registry = FsAppRegistry::new(temp_dir.path());

    for phase in parse_phase_list("build,deploy,bogus") {
        let path = resolver.resolve_checked(&registry, "web", phase).unwrap();
        store::append(&path, "--add-host=docker:x.x.x.1").unwrap();
    }
    let deploy = resolver.resolve("web", Phase::Deploy);
    store::append(&deploy, "--restart=always").unwrap();
    store::remove(&deploy, "--add-host=docker:x.x.x.1").unwrap();

    let reporter = Reporter::new(&resolver, &registry);
    let items = reporter.report_all(Some("web"), None).unwrap();
    let ReportItem::Full(report) = &items[0] else {
        panic!("expected a full report, got {:?}", items[0]);
    };
    assert_eq!(report.flags["--docker-options-build"], "--add-host=docker:x.x.x.1");
    assert_eq!(report.flags["--docker-options-deploy"], "--restart=always");
    assert_eq!(report.flags["--docker-options-run"], "");

    assert!(!resolver.resolve("web", Phase::Run).exists());
    assert_eq!(
        fs::read_to_string(&deploy).unwrap(),
        "--restart=always\n"
    );
}

#[test]
fn test_files_written_by_hand_are_read_back() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("api")).unwrap();
    let resolver = PathResolver::new(temp_dir.path());
    let path = resolver.resolve("api", Phase::Run);

    // Blank lines from manual edits are dropped
    fs::write(&path, "--rm\n\n--init\n").unwrap();
    assert_eq!(store::read_all(&path).unwrap(), vec!["--rm", "--init"]);
    assert_eq!(store::render_flat(&path).unwrap(), "--rm--init");

    store::remove(&path, "--rm").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "--init\n");
}

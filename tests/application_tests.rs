//! Application layer tests
//!
//! Batch runs, directory scans and the progress they publish, driven by a
//! mock oracle over real temporary files.

mod common;

use checkfile::application::{
    CheckFileUseCase, ProgressState, RunBatchUseCase, RunPhase, ScanDirectoryUseCase,
};
use checkfile::domain::entities::{FileCandidate, Verdict};
use common::{assert_invariant, dir_with_files, write_list, MockOracle, RecordingReporter};
use rstest::*;
use std::fs;
use std::sync::Arc;

// ============================================================================
// Single file
// ============================================================================

#[rstest]
fn test_single_file_reports_without_summary() {
    let dir = dir_with_files(&[("cat.png", b"data")]);
    let checker = CheckFileUseCase::new(MockOracle::new().with("cat.png", "image/png"));
    let mut reporter = RecordingReporter::default();

    let verdict = checker.execute(&dir.path().join("cat.png"), &mut reporter);

    assert!(verdict.is_ok());
    assert_eq!(reporter.lines.len(), 1);
    assert!(reporter.lines[0].starts_with("[OK] '"));
    assert!(reporter.summaries.is_empty());
}

#[rstest]
fn test_missing_file_never_reaches_oracle() {
    let dir = dir_with_files(&[]);
    let oracle = MockOracle::new();
    let checker = CheckFileUseCase::new(oracle);
    let mut reporter = RecordingReporter::default();
    let path = dir.path().join("ghost.png");

    let verdict = checker.execute(&path, &mut reporter);

    assert!(matches!(verdict, Verdict::Error(_)));
    assert!(checker.oracle().calls.borrow().is_empty());
    assert_eq!(
        reporter.lines[0],
        format!(
            "[ERROR] cannot open file '{}' -- No such file or directory",
            path.display()
        )
    );
}

#[rstest]
fn test_directory_candidate_is_irregular() {
    let dir = dir_with_files(&[]);
    let checker = CheckFileUseCase::new(MockOracle::new());
    let mut reporter = RecordingReporter::default();

    checker.execute(dir.path(), &mut reporter);

    assert!(reporter.lines[0].ends_with("irregular files are not supported by checkFile"));
    assert!(checker.oracle().calls.borrow().is_empty());
}

// ============================================================================
// Batch runs
// ============================================================================

#[rstest]
fn test_batch_skips_blank_lines() {
    let dir = dir_with_files(&[("a.png", b"x"), ("b.gif", b"x")]);
    let lines = vec![
        dir.path().join("a.png").display().to_string(),
        String::new(),
        dir.path().join("b.gif").display().to_string(),
    ];
    let list = write_list(dir.path(), &lines);
    let checker = CheckFileUseCase::new(
        MockOracle::new()
            .with("a.png", "image/png")
            .with("b.gif", "image/gif"),
    );
    let progress = ProgressState::new();
    let mut reporter = RecordingReporter::default();

    let stats = RunBatchUseCase::new(&checker, &progress).execute(&list, &mut reporter);

    assert_eq!(stats.analyzed(), 2);
    assert_eq!(stats.ok(), 2);
    assert_invariant(&stats);
    assert_eq!(
        reporter.summaries,
        vec!["[SUMMARY] files analyzed: 2; files OK: 2; files mismatch: 0; errors: 0"]
    );
}

#[rstest]
fn test_batch_mixed_outcomes() {
    let dir = dir_with_files(&[
        ("ok.jpg", b"x"),
        ("wrong.png", b"x"),
        ("notes.txt", b"x"),
        ("empty.pdf", b""),
        ("broken.zip", b"x"),
    ]);
    let mut lines: Vec<String> = ["ok.jpg", "wrong.png", "notes.txt", "empty.pdf", "missing.gif"]
        .iter()
        .map(|n| dir.path().join(n).display().to_string())
        .collect();
    lines.push(dir.path().join("broken.zip").display().to_string());
    lines.push(dir.path().display().to_string());
    let list = write_list(dir.path(), &lines);

    let checker = CheckFileUseCase::new(
        MockOracle::new()
            .with("ok.jpg", "image/jpeg")
            .with("wrong.png", "image/gif")
            .with("notes.txt", "text/plain")
            .with("empty.pdf", "inode/x-empty")
            .failing_on("broken.zip"),
    );
    let progress = ProgressState::new();
    let mut reporter = RecordingReporter::default();

    let stats = RunBatchUseCase::new(&checker, &progress).execute(&list, &mut reporter);

    assert_eq!(stats.analyzed(), 7);
    assert_eq!(stats.ok(), 1);
    assert_eq!(stats.mismatch(), 1);
    assert_eq!(stats.errors(), 5);
    assert_invariant(&stats);

    assert!(reporter.lines[0].starts_with("[OK]"));
    assert!(reporter.lines[1].starts_with("[MISMATCH]"));
    assert!(reporter.lines[1].ends_with("extension is 'png', file type is 'gif'"));
    assert!(reporter.lines[2].ends_with("type 'text/plain' is not supported by checkFile"));
    assert!(reporter.lines[3].ends_with("is an empty file"));
    assert!(reporter.lines[4].starts_with("[ERROR] cannot open file"));
    assert!(reporter.lines[5].contains("cannot determine file type"));
    assert!(reporter.lines[6].ends_with("irregular files are not supported by checkFile"));
}

#[rstest]
fn test_batch_with_missing_list() {
    let dir = dir_with_files(&[]);
    let checker = CheckFileUseCase::new(MockOracle::new());
    let progress = ProgressState::new();
    let mut reporter = RecordingReporter::default();
    let list = dir.path().join("absent.txt");

    let stats = RunBatchUseCase::new(&checker, &progress).execute(&list, &mut reporter);

    assert_eq!(stats.analyzed(), 0);
    assert_eq!(
        reporter.run_errors,
        vec![format!(
            "[ERROR] cannot open file '{}' -- No such file or directory",
            list.display()
        )]
    );
    assert_eq!(reporter.summaries.len(), 1);
    assert_eq!(progress.phase(), RunPhase::Finished);
}

#[rstest]
fn test_batch_list_that_is_a_directory() {
    let dir = dir_with_files(&[]);
    let checker = CheckFileUseCase::new(MockOracle::new());
    let progress = ProgressState::new();
    let mut reporter = RecordingReporter::default();

    let stats = RunBatchUseCase::new(&checker, &progress).execute(dir.path(), &mut reporter);

    assert_eq!(stats.analyzed(), 0);
    assert_eq!(reporter.run_errors.len(), 1);
    assert!(reporter.run_errors[0].starts_with("[ERROR] cannot read file"));
}

#[rstest]
fn test_probe_reports_candidate_being_checked() {
    let dir = dir_with_files(&[("one.png", b"x"), ("two.gif", b"x"), ("three.pdf", b"x")]);
    let names = ["one.png", "two.gif", "three.pdf"];
    let lines: Vec<String> = names
        .iter()
        .map(|n| dir.path().join(n).display().to_string())
        .collect();
    let list = write_list(dir.path(), &lines);

    let progress = Arc::new(ProgressState::new());
    let checker = CheckFileUseCase::new(MockOracle::new().observing(Arc::clone(&progress)));
    let mut reporter = RecordingReporter::default();

    assert_eq!(progress.query(), "no batch run in progress");
    RunBatchUseCase::new(&checker, &progress).execute(&list, &mut reporter);

    let observed = checker.oracle().observed.borrow();
    assert_eq!(observed.len(), 3);
    for (i, snapshot) in observed.iter().enumerate() {
        let snapshot = snapshot.as_ref().expect("progress during run");
        assert_eq!(snapshot.index, i + 1);
        assert_eq!(snapshot.path, lines[i]);
    }
    assert_eq!(progress.phase(), RunPhase::Finished);
    assert_eq!(progress.query(), "no batch run in progress");
}

// ============================================================================
// Directory scans
// ============================================================================

#[rstest]
fn test_empty_directory_scan() {
    let dir = dir_with_files(&[]);
    let checker = CheckFileUseCase::new(MockOracle::new());
    let progress = ProgressState::new();
    let mut reporter = RecordingReporter::default();

    let stats = ScanDirectoryUseCase::new(&checker, &progress).execute(dir.path(), &mut reporter);

    assert_eq!(stats.analyzed(), 0);
    assert!(reporter.lines.is_empty());
    assert_eq!(
        reporter.summaries,
        vec!["[SUMMARY] files analyzed: 0; files OK: 0; files mismatch: 0; errors: 0"]
    );
}

#[rstest]
fn test_directory_scan_is_flat() {
    let dir = dir_with_files(&[("a.png", b"x"), ("b.html", b"x")]);
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("deep.png"), b"x").unwrap();

    let checker = CheckFileUseCase::new(
        MockOracle::new()
            .with("a.png", "image/png")
            .with("b.html", "text/html"),
    );
    let progress = ProgressState::new();
    let mut reporter = RecordingReporter::default();

    let stats = ScanDirectoryUseCase::new(&checker, &progress).execute(dir.path(), &mut reporter);

    assert_eq!(stats.analyzed(), 3);
    assert_eq!(stats.ok(), 2);
    assert_eq!(stats.errors(), 1);
    assert_invariant(&stats);

    let prefix = format!("{}/", dir.path().display());
    assert_eq!(
        reporter.lines,
        vec![
            format!("[OK] '{prefix}a.png': extension 'png' matches file type 'png'"),
            format!("[OK] '{prefix}b.html': extension 'html' matches file type 'html'"),
            format!("[ERROR] '{prefix}nested': irregular files are not supported by checkFile"),
        ]
    );
    assert_eq!(checker.oracle().calls.borrow().len(), 2);
}

#[rstest]
fn test_directory_with_trailing_separator() {
    let dir = dir_with_files(&[("a.zip", b"x")]);
    let checker = CheckFileUseCase::new(MockOracle::new().with("a.zip", "application/zip"));
    let progress = ProgressState::new();
    let mut reporter = RecordingReporter::default();
    let with_slash = format!("{}/", dir.path().display());

    ScanDirectoryUseCase::new(&checker, &progress)
        .execute(std::path::Path::new(&with_slash), &mut reporter);

    assert_eq!(
        reporter.lines,
        vec![format!(
            "[OK] '{with_slash}a.zip': extension 'zip' matches file type 'zip'"
        )]
    );
}

#[rstest]
fn test_missing_directory() {
    let dir = dir_with_files(&[]);
    let missing = dir.path().join("nope");
    let checker = CheckFileUseCase::new(MockOracle::new());
    let progress = ProgressState::new();
    let mut reporter = RecordingReporter::default();

    let stats = ScanDirectoryUseCase::new(&checker, &progress).execute(&missing, &mut reporter);

    assert_eq!(stats.analyzed(), 0);
    assert_eq!(
        reporter.run_errors,
        vec![format!(
            "[ERROR] cannot open dir '{}/' -- No such file or directory",
            missing.display()
        )]
    );
    assert_eq!(reporter.summaries.len(), 1);
}

#[rstest]
fn test_detection_failure_does_not_stop_directory_scan() {
    let dir = dir_with_files(&[("a.png", b"x"), ("b.png", b"x"), ("c.png", b"x")]);
    let checker = CheckFileUseCase::new(
        MockOracle::new()
            .with("a.png", "image/png")
            .failing_on("b.png")
            .with("c.png", "image/png"),
    );
    let progress = ProgressState::new();
    let mut reporter = RecordingReporter::default();

    let stats = ScanDirectoryUseCase::new(&checker, &progress).execute(dir.path(), &mut reporter);

    assert_eq!(stats.analyzed(), 3);
    assert_eq!(stats.ok(), 2);
    assert_eq!(stats.errors(), 1);
    assert!(reporter.lines[1].contains("cannot determine file type -- I/O error: oracle crashed"));
    assert!(reporter.lines[2].starts_with("[OK]"));
    assert!(matches!(
        checker.check(&FileCandidate::new(1, dir.path().join("b.png"))),
        Verdict::Error(_)
    ));
}

#[rstest]
fn test_jpg_alias_in_directory() {
    let dir = dir_with_files(&[("photo.JPG", b"x")]);
    let checker = CheckFileUseCase::new(MockOracle::new().with("photo.JPG", "image/jpeg"));
    let progress = ProgressState::new();
    let mut reporter = RecordingReporter::default();

    let stats = ScanDirectoryUseCase::new(&checker, &progress).execute(dir.path(), &mut reporter);

    assert_eq!(stats.ok(), 1);
    assert!(reporter.lines[0].ends_with("extension 'jpg' matches file type 'jpeg'"));
}

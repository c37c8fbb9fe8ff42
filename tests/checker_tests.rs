mod common;

use anyhow::Result;
use check_license_headers::processor::{Checker, CheckerConfig};
use check_license_headers::report::{CheckSummary, EXIT_INVALID, EXIT_OK, EXIT_SKIPPED, FileStatus, HeaderProblem};
use check_license_headers::templates::HeaderTemplate;
use common::{OWNER, setup_fixtures, write_fixture};
use tempfile::tempdir;

fn default_checker() -> Result<Checker> {
  let pattern = HeaderTemplate::default().compile(Some(OWNER))?;
  Checker::new(CheckerConfig::new(pattern))
}

#[test]
fn test_check_file_statuses() -> Result<()> {
  let temp_dir = tempdir()?;
  setup_fixtures(temp_dir.path())?;
  let checker = default_checker()?;

  let report = checker.check_file(&temp_dir.path().join("missing_header.py"));
  assert_eq!(report.status, FileStatus::Invalid(HeaderProblem::Missing));

  let report = checker.check_file(&temp_dir.path().join("valid_1.py"));
  assert_eq!(report.status, FileStatus::Valid);

  let report = checker.check_file(&temp_dir.path().join("binary.dat"));
  assert!(matches!(&report.status, FileStatus::Ignored(reason) if reason == "not a text file"));

  Ok(())
}

#[test]
fn test_check_all_keeps_input_order() -> Result<()> {
  let temp_dir = tempdir()?;
  setup_fixtures(temp_dir.path())?;

  let paths = ["missing_header.py", "valid_1.py", "binary.dat", "invalid_short.py", "valid_2.py"]
    .map(|name| temp_dir.path().join(name));
  let summary = default_checker()?.check_all(&paths);

  assert_eq!(summary.valid, vec![paths[1].clone(), paths[4].clone()]);
  assert_eq!(summary.invalid, vec![paths[0].clone(), paths[3].clone()]);
  assert!(summary.skipped.is_empty());
  assert_eq!(summary.exit_code(), EXIT_INVALID);

  Ok(())
}

#[test]
fn test_non_utf8_text_file_is_skipped() -> Result<()> {
  let temp_dir = tempdir()?;
  let mut content = b"# Copyright (c) 2021 ".to_vec();
  content.extend_from_slice(&[0xff, 0xfe, b'\n']);
  let path = write_fixture(temp_dir.path(), "latin1.py", content)?;

  let report = default_checker()?.check_file(&path);

  assert!(matches!(report.status, FileStatus::Skipped(_)));
  assert_eq!(CheckSummary::from_reports([report]).exit_code(), EXIT_SKIPPED);

  Ok(())
}

#[test]
fn test_shebang_detects_extensionless_script() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = write_fixture(temp_dir.path(), "release", "#!/usr/bin/env python3\nimport sys\n")?;

  let report = default_checker()?.check_file(&path);

  assert_eq!(report.status, FileStatus::Invalid(HeaderProblem::Missing));

  Ok(())
}

#[test]
fn test_custom_file_types_and_excludes() -> Result<()> {
  let temp_dir = tempdir()?;
  setup_fixtures(temp_dir.path())?;

  let pattern = HeaderTemplate::default().compile(Some(OWNER))?;
  let checker = Checker::new(CheckerConfig {
    file_types: vec!["python".to_string()],
    exclude_patterns: vec!["*missing*".to_string()],
    ..CheckerConfig::new(pattern)
  })?;

  let report = checker.check_file(&temp_dir.path().join("valid_2.py"));
  assert_eq!(report.status, FileStatus::Valid);

  let report = checker.check_file(&temp_dir.path().join("missing_header.py"));
  assert!(matches!(&report.status, FileStatus::Ignored(reason) if reason.contains("exclude")));

  let report = checker.check_file(&temp_dir.path().join("tokenize_fail.yaml"));
  assert!(matches!(&report.status, FileStatus::Ignored(reason) if reason.starts_with("wrong file type")));

  let summary = checker.check_all(&[temp_dir.path().join("missing_header.py"), temp_dir.path().join("valid_2.py")]);
  assert_eq!(summary.valid.len(), 1);
  assert_eq!(summary.exit_code(), EXIT_OK);

  Ok(())
}

#[test]
fn test_invalid_exclude_pattern_fails_construction() -> Result<()> {
  let pattern = HeaderTemplate::default().compile(Some(OWNER))?;
  let result = Checker::new(CheckerConfig {
    exclude_patterns: vec!["[".to_string()],
    ..CheckerConfig::new(pattern)
  });

  assert!(result.is_err());

  Ok(())
}

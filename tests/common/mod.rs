#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use assert_cmd::prelude::*;

/// Owner used by the fixtures.
pub const OWNER: &str = "AFakeCompany Ltd";

/// Arguments shared by most CLI tests.
pub const BASE_ARGS: &[&str] = &["--debug", "--owner=AFakeCompany Ltd", "--summary", "--colors=never", "--no-config"];

/// The default BSD-3-Clause header for `OWNER`, as `#` comments.
pub fn default_header(years: &str) -> String {
  format!(
    "# Copyright (c) {years} {OWNER}\n\
     # Use of this source code is governed by a BSD-3-clause license that can\n\
     # be found in the LICENSE file or at https://opensource.org/licenses/BSD-3-Clause\n"
  )
}

/// Writes a file below `dir`, creating parent directories.
pub fn write_fixture(dir: &Path, name: &str, content: impl AsRef<[u8]>) -> Result<PathBuf> {
  let path = dir.join(name);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
  Ok(path)
}

/// Writes the standard set of fixtures and returns the directory they live in.
pub fn setup_fixtures(dir: &Path) -> Result<()> {
  write_fixture(
    dir,
    "valid_1.py",
    format!("{}\n\"\"\"A module.\"\"\"\n\n\ndef main():\n    return 0\n", default_header("2021")),
  )?;

  write_fixture(
    dir,
    "valid_2.py",
    format!(
      "#!/usr/bin/env python3\n##\n{}##\n\nimport sys\n\nsys.exit(0)\n",
      default_header("2019-2020, 2021")
    ),
  )?;

  write_fixture(
    dir,
    "invalid_owner.txt",
    "# Copyright (c) 2021 SomeOtherCompany Inc\n\
     # Use of this source code is governed by a BSD-3-clause license that can\n\
     # be found in the LICENSE file or at https://opensource.org/licenses/BSD-3-Clause\n\
     \n\
     This file's header names the wrong owner.\n",
  )?;

  write_fixture(dir, "missing_header.py", "import os\n\nprint(os.getcwd())\n")?;

  write_fixture(
    dir,
    "tokenize_fail.yaml",
    format!("{}\nitems: [one, two\nother: three\n", default_header("2021")),
  )?;

  write_fixture(
    dir,
    "invalid_short.py",
    "# Copyright 2021 Nobody\n\nprint('hello')\n",
  )?;

  write_fixture(
    dir,
    "invalid_long.sh",
    "#!/bin/bash\n\
     # This script does a thing.\n\
     # It was written a long time ago.\n\
     # Nobody remembers who wrote it.\n\
     # It has no license header.\n\
     # It does, however, have many comments.\n\
     # Far too many, in fact.\n\
     # Seven of them.\n\
     echo done\n",
  )?;

  write_fixture(dir, "binary.dat", [0u8, 159, 146, 150, 0, 1, 2, 3])?;

  Ok(())
}

/// A command running the binary from `dir` without any config from the
/// environment.
pub fn command(dir: &Path) -> Result<Command> {
  let mut cmd = Command::cargo_bin("check-license-headers")?;
  cmd.current_dir(dir).env_remove("CHECK_LICENSE_HEADERS_CONFIG").env_remove("RUST_LOG");
  Ok(cmd)
}

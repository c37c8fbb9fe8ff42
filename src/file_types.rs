//! # File Types Module
//!
//! This module assigns type tags to files, e.g. `{"text", "python"}` for
//! `setup.py` or `{"text", "shell", "bash"}` for a script starting with
//! `#!/bin/bash`.
//!
//! Tags come from three static tables, consulted in order:
//! - exact file names (`Makefile`, `Dockerfile`, ...)
//! - file extensions (case-insensitive)
//! - the interpreter named on the shebang line, for files whose name says
//!   nothing about their type
//!
//! Every tagged type is a text type. Files that match no table are sniffed:
//! they are `text` when the first kilobyte contains only text bytes and
//! `binary` otherwise.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::processor::{FileIO, TEXT_SNIFF_LIMIT};

/// Tag carried by every text file.
pub const TEXT: &str = "text";

/// Tag carried by files that are not text.
pub const BINARY: &str = "binary";

/// Types checked when no `--file-type` is given.
pub const DEFAULT_FILE_TYPES: &[&str] = &[
  "cython",
  "dockerfile",
  "graphql",
  "ini",
  "jupyter",
  "markdown",
  "makefile",
  "perl",
  "plain-text",
  "puppet",
  "python",
  "r",
  "shell",
  "toml",
  "yaml",
];

const EXTENSIONS: &[(&str, &[&str])] = &[
  ("adoc", &["asciidoc"]),
  ("asciidoc", &["asciidoc"]),
  ("bash", &["shell", "bash"]),
  ("bat", &["batch"]),
  ("bib", &["bib"]),
  ("bzl", &["bazel", "starlark"]),
  ("c", &["c"]),
  ("cc", &["c++"]),
  ("cfg", &["ini"]),
  ("cjs", &["javascript"]),
  ("clj", &["clojure"]),
  ("cmake", &["cmake"]),
  ("cpp", &["c++"]),
  ("cs", &["c#"]),
  ("css", &["css"]),
  ("csv", &["csv"]),
  ("cxx", &["c++"]),
  ("dart", &["dart"]),
  ("dockerfile", &["dockerfile"]),
  ("el", &["lisp"]),
  ("erl", &["erlang"]),
  ("ex", &["elixir"]),
  ("exs", &["elixir"]),
  ("fish", &["fish"]),
  ("go", &["go"]),
  ("gql", &["graphql"]),
  ("graphql", &["graphql"]),
  ("groovy", &["groovy"]),
  ("h", &["header", "c", "c++"]),
  ("hcl", &["hcl"]),
  ("hpp", &["header", "c++"]),
  ("hs", &["haskell"]),
  ("htm", &["html"]),
  ("html", &["html"]),
  ("ini", &["ini"]),
  ("ipynb", &["jupyter", "json"]),
  ("java", &["java"]),
  ("jl", &["julia"]),
  ("js", &["javascript"]),
  ("json", &["json"]),
  ("jsx", &["jsx"]),
  ("kt", &["kotlin"]),
  ("ksh", &["shell", "ksh"]),
  ("less", &["less"]),
  ("lua", &["lua"]),
  ("markdown", &["markdown"]),
  ("md", &["markdown"]),
  ("mjs", &["javascript"]),
  ("mk", &["makefile"]),
  ("ml", &["ocaml"]),
  ("nix", &["nix"]),
  ("php", &["php"]),
  ("pl", &["perl"]),
  ("pm", &["perl"]),
  ("pp", &["puppet"]),
  ("proto", &["proto"]),
  ("ps1", &["powershell"]),
  ("pxd", &["cython"]),
  ("pxi", &["cython"]),
  ("py", &["python"]),
  ("pyi", &["pyi"]),
  ("pyw", &["python"]),
  ("pyx", &["cython"]),
  ("r", &["r"]),
  ("rb", &["ruby"]),
  ("rs", &["rust"]),
  ("rst", &["rst"]),
  ("sass", &["sass"]),
  ("scala", &["scala"]),
  ("scss", &["scss"]),
  ("sh", &["shell"]),
  ("sql", &["sql"]),
  ("svg", &["svg", "xml"]),
  ("swift", &["swift"]),
  ("tcl", &["tcl"]),
  ("tex", &["tex"]),
  ("tf", &["terraform"]),
  ("toml", &["toml"]),
  ("ts", &["ts"]),
  ("tsx", &["tsx"]),
  ("txt", &["plain-text"]),
  ("vue", &["vue"]),
  ("xml", &["xml"]),
  ("yaml", &["yaml"]),
  ("yml", &["yaml"]),
  ("zsh", &["shell", "zsh"]),
];

const NAMES: &[(&str, &[&str])] = &[
  (".bash_profile", &["shell", "bash"]),
  (".bashrc", &["shell", "bash"]),
  (".dockerignore", &["dockerignore"]),
  (".editorconfig", &["editorconfig"]),
  (".gitattributes", &["gitattributes"]),
  (".gitignore", &["gitignore"]),
  (".pylintrc", &["ini", "pylintrc"]),
  (".zshrc", &["shell", "zsh"]),
  ("BUILD", &["bazel"]),
  ("CMakeLists.txt", &["cmake"]),
  ("Containerfile", &["dockerfile"]),
  ("Dockerfile", &["dockerfile"]),
  ("GNUmakefile", &["makefile"]),
  ("Gemfile", &["ruby"]),
  ("Jenkinsfile", &["groovy"]),
  ("LICENSE", &["plain-text"]),
  ("Makefile", &["makefile"]),
  ("Pipfile", &["toml"]),
  ("README", &["plain-text"]),
  ("Rakefile", &["ruby"]),
  ("Vagrantfile", &["ruby"]),
  ("WORKSPACE", &["bazel"]),
  ("makefile", &["makefile"]),
  ("pylintrc", &["ini", "pylintrc"]),
  ("setup.cfg", &["ini"]),
];

const INTERPRETERS: &[(&str, &[&str])] = &[
  ("ash", &["shell", "ash"]),
  ("bash", &["shell", "bash"]),
  ("dash", &["shell", "dash"]),
  ("fish", &["fish"]),
  ("ksh", &["shell", "ksh"]),
  ("node", &["javascript"]),
  ("perl", &["perl"]),
  ("python", &["python"]),
  ("python2", &["python", "python2"]),
  ("python3", &["python", "python3"]),
  ("ruby", &["ruby"]),
  ("sh", &["shell", "sh"]),
  ("tcsh", &["shell", "tcsh"]),
  ("zsh", &["shell", "zsh"]),
];

/// Every text type a file can be tagged with, sorted.
pub fn all_text_file_types() -> Vec<&'static str> {
  EXTENSIONS
    .iter()
    .chain(NAMES)
    .chain(INTERPRETERS)
    .flat_map(|(_, tags)| tags.iter().copied())
    .collect::<BTreeSet<_>>()
    .into_iter()
    .collect()
}

fn lookup(table: &[(&str, &'static [&'static str])], key: &str) -> Option<&'static [&'static str]> {
  table.iter().find(|(k, _)| *k == key).map(|(_, tags)| *tags)
}

/// Tags for a file name alone, without touching the file system.
pub fn tags_from_filename(file_name: &str) -> BTreeSet<&'static str> {
  let mut tags = BTreeSet::new();

  if let Some(found) = lookup(NAMES, file_name) {
    tags.extend(found);
  }

  if let Some((_, ext)) = file_name.rsplit_once('.')
    && let Some(found) = lookup(EXTENSIONS, &ext.to_lowercase())
  {
    tags.extend(found);
  }

  if !tags.is_empty() {
    tags.insert(TEXT);
  }
  tags
}

/// Tags for a shebang interpreter such as `/usr/bin/python3.11`.
///
/// Version suffixes are dropped one dot at a time until a known interpreter
/// is found.
pub fn tags_from_interpreter(interpreter: &str) -> BTreeSet<&'static str> {
  let mut name = interpreter.rsplit('/').next().unwrap_or(interpreter);

  while !name.is_empty() {
    if let Some(found) = lookup(INTERPRETERS, name) {
      let mut tags: BTreeSet<_> = found.iter().copied().collect();
      tags.insert(TEXT);
      return tags;
    }
    name = match name.rsplit_once('.') {
      Some((head, _)) => head,
      None => break,
    };
  }

  BTreeSet::new()
}

/// Extracts the interpreter from a `#!` line, looking through `env`.
pub fn parse_shebang(first_line: &str) -> Option<&str> {
  let command = first_line.strip_prefix("#!")?.trim();
  let mut words = command.split_whitespace();
  let program = words.next()?;

  if program.rsplit('/').next() == Some("env") {
    // Skip flags such as `env -S`.
    return words.find(|w| !w.starts_with('-'));
  }
  Some(program)
}

/// Returns `true` if every byte is a printable or common control character.
pub fn is_text(bytes: &[u8]) -> bool {
  bytes
    .iter()
    .all(|&b| matches!(b, 7..=13 | 27 | 0x20..=0x7e | 0x80..=0xff))
}

/// Classifies files into type tags.
pub trait FileClassifier: Send + Sync {
  /// Returns the tags for an existing regular file.
  fn tags(&self, path: &Path) -> Result<BTreeSet<&'static str>>;
}

/// Default classifier backed by the built-in tables.
#[derive(Debug, Default)]
pub struct TagClassifier;

impl FileClassifier for TagClassifier {
  fn tags(&self, path: &Path) -> Result<BTreeSet<&'static str>> {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();

    let tags = tags_from_filename(file_name);
    if !tags.is_empty() {
      return Ok(tags);
    }

    let prefix =
      FileIO::read_prefix(path, TEXT_SNIFF_LIMIT).with_context(|| format!("Failed to read {}", path.display()))?;

    if prefix.starts_with(b"#!") {
      let first_line = prefix.split(|&b| b == b'\n').next().unwrap_or_default();
      if let Some(interpreter) = std::str::from_utf8(first_line).ok().and_then(parse_shebang) {
        let tags = tags_from_interpreter(interpreter);
        if !tags.is_empty() {
          return Ok(tags);
        }
      }
    }

    let kind = if is_text(&prefix) { TEXT } else { BINARY };
    Ok(BTreeSet::from([kind]))
  }
}

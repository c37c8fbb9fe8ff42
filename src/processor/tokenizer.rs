//! # Tokenizer Module
//!
//! A small line lexer for `#`-comment languages (Python, shell, YAML, TOML,
//! Makefiles, ...). It only knows enough about strings and brackets to tell
//! comments apart from code and to notice files that end in the middle of a
//! multi-line construct.
//!
//! The header of a file is the run of comments at its very top, before the
//! first code token. Blank lines may separate the comments.

use std::sync::LazyLock;

use regex::Regex;

/// Matches an interpreter line such as `#!/usr/bin/env python3`.
static SHEBANG_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^#!/.{1,30}\s*$").expect("shebang regex must compile"));

/// A lexical token. Code tokens carry no text since only their position
/// matters for header extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
  /// A leading byte order mark.
  Encoding,
  /// A comment, from `#` to the end of the line.
  Comment(String),
  /// End of a logical or blank line.
  Newline,
  /// Anything else.
  Code,
}

/// The file ended inside a construct that spans lines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
  #[error("EOF in multi-line string starting on line {line}")]
  UnterminatedString { line: usize },

  #[error("EOF in multi-line statement: '{bracket}' opened on line {line} is never closed")]
  UnclosedBracket { bracket: char, line: usize },

  #[error("EOF after line continuation on line {line}")]
  TrailingContinuation { line: usize },
}

struct Lexer<'a> {
  chars: std::iter::Peekable<std::str::Chars<'a>>,
  line: usize,
  /// Open brackets with the line they were opened on.
  brackets: Vec<(char, usize)>,
  tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
  fn new(source: &'a str) -> Self {
    Self {
      chars: source.chars().peekable(),
      line: 1,
      brackets: Vec::new(),
      tokens: Vec::new(),
    }
  }

  fn run(mut self) -> Result<Vec<Token>, TokenizeError> {
    if self.chars.next_if_eq(&'\u{feff}').is_some() {
      self.tokens.push(Token::Encoding);
    }

    while let Some(c) = self.chars.next() {
      match c {
        '#' => self.comment(),
        '\n' => {
          // Newlines inside brackets do not end the statement.
          if self.brackets.is_empty() {
            self.tokens.push(Token::Newline);
          }
          self.line += 1;
        }
        ' ' | '\t' | '\r' | '\x0c' => {}
        '\\' => self.continuation()?,
        '"' | '\'' => self.string(c)?,
        '(' | '[' | '{' => {
          self.brackets.push((c, self.line));
          self.push_code();
        }
        ')' | ']' | '}' => {
          self.brackets.pop();
          self.push_code();
        }
        _ => self.push_code(),
      }
    }

    if let Some(&(bracket, line)) = self.brackets.first() {
      return Err(TokenizeError::UnclosedBracket { bracket, line });
    }

    Ok(self.tokens)
  }

  fn push_code(&mut self) {
    if self.tokens.last() != Some(&Token::Code) {
      self.tokens.push(Token::Code);
    }
  }

  fn comment(&mut self) {
    let mut text = String::from("#");
    while let Some(c) = self.chars.next_if(|&c| c != '\n') {
      text.push(c);
    }
    self.tokens.push(Token::Comment(text));
  }

  fn continuation(&mut self) -> Result<(), TokenizeError> {
    let _ = self.chars.next_if_eq(&'\r');

    if self.chars.next_if_eq(&'\n').is_none() {
      if self.chars.peek().is_none() {
        return Err(TokenizeError::TrailingContinuation { line: self.line });
      }
      // Stray backslash; the next character is lexed normally.
      self.push_code();
      return Ok(());
    }

    self.line += 1;
    // A continuation on the last line has nothing to continue into.
    if self.chars.peek().is_none() {
      return Err(TokenizeError::TrailingContinuation { line: self.line - 1 });
    }
    Ok(())
  }

  fn string(&mut self, quote: char) -> Result<(), TokenizeError> {
    self.push_code();
    let start = self.line;

    if self.chars.next_if_eq(&quote).is_some() {
      if self.chars.next_if_eq(&quote).is_some() {
        return self.triple_quoted(quote, start);
      }
      // Empty string.
      return Ok(());
    }

    // A single-quoted string that runs into the end of the line is treated as
    // a stray quote, like an apostrophe in prose.
    let mut lookahead = self.chars.clone();
    let mut lines = 0;
    while let Some(c) = lookahead.next() {
      match c {
        '\\' => {
          if lookahead.next() == Some('\n') {
            lines += 1;
          }
        }
        '\n' => return Ok(()),
        c if c == quote => {
          self.chars = lookahead;
          self.line += lines;
          return Ok(());
        }
        _ => {}
      }
    }
    Ok(())
  }

  fn triple_quoted(&mut self, quote: char, start: usize) -> Result<(), TokenizeError> {
    let mut run = 0;
    while let Some(c) = self.chars.next() {
      match c {
        '\\' => {
          run = 0;
          if self.chars.next() == Some('\n') {
            self.line += 1;
          }
        }
        '\n' => {
          run = 0;
          self.line += 1;
        }
        c if c == quote => {
          run += 1;
          if run == 3 {
            return Ok(());
          }
        }
        _ => run = 0,
      }
    }
    Err(TokenizeError::UnterminatedString { line: start })
  }
}

/// Tokenizes a whole source file.
///
/// # Errors
///
/// Returns a [`TokenizeError`] when the file ends inside a triple-quoted
/// string, an open bracket, or right after a line continuation.
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
  Lexer::new(source).run()
}

/// Extracts the content lines of a file's leading comment block.
///
/// The whole file is tokenized first, so a tokenization error anywhere in the
/// file is reported even though only the top of the file is inspected. The
/// shebang line is skipped, every `#` is removed from the remaining comments,
/// and comments that are empty after trimming are dropped.
pub fn extract_header(source: &str) -> Result<Vec<String>, TokenizeError> {
  let tokens = tokenize(source)?;
  let mut lines = Vec::new();

  for token in tokens {
    let text = match token {
      Token::Encoding | Token::Newline => continue,
      Token::Code => break,
      Token::Comment(text) => text,
    };

    let text = text.trim();
    if SHEBANG_REGEX.is_match(text) {
      continue;
    }

    let content = text.replace('#', "");
    let content = content.trim();
    if !content.is_empty() {
      lines.push(content.to_string());
    }
  }

  Ok(lines)
}

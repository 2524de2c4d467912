//! Randomized checks that applying a notice twice is the same as applying it
//! once, for every builtin comment style.

use copyrighter::detection::KeywordDetector;
use copyrighter::languages::{CommentStyle, style_for};
use copyrighter::scanner::detect_first_comment;
use copyrighter::writer::{can_express, rewrite_source};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

const EXTENSIONS: &[&str] = &[
  ".go", ".js", ".ts", ".cs", ".java", ".c", ".cpp", ".php", ".py", ".css", ".xml", ".html", ".yaml", ".yml",
  ".ps1", ".sh", ".sql",
];

const WORDS: &[&str] = &[
  "Licensed", "under", "the", "Apache", "License", "Version", "2.0", "(c)", "Example", "Corp", "all", "rights",
  "reserved.", "MIT", "See", "LICENSE", "for", "details", "http://example.com",
];

const CODE_LINES: &[&str] = &[
  "value = 42",
  "call(argument)",
  "",
  "    indented()",
  "end",
  "x := y * 2",
  "\tlet z = 3",
];

fn random_line(rng: &mut ChaCha8Rng) -> String {
  let count = rng.random_range(1..6);
  (0..count)
    .map(|_| WORDS[rng.random_range(0..WORDS.len())])
    .collect::<Vec<_>>()
    .join(" ")
}

fn random_notice(rng: &mut ChaCha8Rng) -> String {
  let mut lines = vec![format!("Copyright {} {}", rng.random_range(1990..2100), random_line(rng))];
  for _ in 0..rng.random_range(0..5) {
    if rng.random_bool(0.2) {
      lines.push(String::new());
    } else {
      lines.push(random_line(rng));
    }
  }
  lines.join("\n")
}

fn comment(style: &CommentStyle, text: &str, rng: &mut ChaCha8Rng) -> String {
  if style.supports_block() && (!style.supports_line() || rng.random_bool(0.5)) {
    format!("{}\n{}\n{}\n", style.block_start, text, style.block_end)
  } else {
    text
      .split('\n')
      .map(|line| format!("{} {}\n", style.line_prefix, line))
      .collect()
  }
}

fn random_source(style: &CommentStyle, rng: &mut ChaCha8Rng) -> String {
  let mut source = String::new();
  match rng.random_range(0..4) {
    0 => source.push_str(&comment(style, "Copyright 1999 Old Owner", rng)),
    1 => source.push_str(&comment(style, "Describes the module", rng)),
    2 => source.push('\n'),
    _ => {}
  }
  for _ in 0..rng.random_range(0..8) {
    source.push_str(CODE_LINES[rng.random_range(0..CODE_LINES.len())]);
    source.push('\n');
  }
  if rng.random_bool(0.3) {
    source = source.replace('\n', "\r\n");
  }
  source
}

#[test]
fn test_rewrite_is_idempotent_for_every_style() {
  let mut rng = ChaCha8Rng::seed_from_u64(0x00c0_ffee);
  let detector = KeywordDetector::new();

  for _ in 0..500 {
    let extension = EXTENSIONS[rng.random_range(0..EXTENSIONS.len())];
    let style = style_for(extension).expect("builtin style");
    let notice = random_notice(&mut rng);
    let source = random_source(&style, &mut rng);

    let once = match rewrite_source(&source, &style, &notice, &detector) {
      Some(rewrite) => rewrite.content,
      None => source.clone(),
    };

    let rescanned = detect_first_comment(&once, &style);
    assert!(rescanned.found, "no comment after rewrite ({extension}): {once:?}");
    assert_eq!(rescanned.text, notice, "notice did not survive a rescan ({extension}): {once:?}");

    assert!(
      rewrite_source(&once, &style, &notice, &detector).is_none(),
      "second pass changed the file ({extension}): {once:?}"
    );
  }
}

#[test]
fn test_rewrite_preserves_everything_after_the_header() {
  let mut rng = ChaCha8Rng::seed_from_u64(7);
  let detector = KeywordDetector::new();

  for _ in 0..200 {
    let extension = EXTENSIONS[rng.random_range(0..EXTENSIONS.len())];
    let style = style_for(extension).expect("builtin style");
    let notice = random_notice(&mut rng);

    let mut body = String::new();
    for _ in 0..rng.random_range(1..8) {
      body.push_str(CODE_LINES[rng.random_range(0..CODE_LINES.len())]);
      body.push('\n');
    }
    let source = format!("{}{}", comment(&style, "Copyright 1999 Old Owner", &mut rng), body);

    let rewrite = rewrite_source(&source, &style, &notice, &detector).expect("old notice differs");
    assert!(rewrite.content.ends_with(&body), "body changed ({extension}): {:?}", rewrite.content);
  }
}

#[test]
fn test_notice_with_trailing_tab_settles_in_every_style() {
  let notice_style = style_for(".go").expect("builtin style");
  let notice = detect_first_comment("/*\nCopyright 2025 X\t\n*/\n", &notice_style).text;
  assert_eq!(notice, "Copyright 2025 X\t");
  let detector = KeywordDetector::new();

  for extension in EXTENSIONS {
    let style = style_for(extension).expect("builtin style");
    let once = rewrite_source("import os\n", &style, &notice, &detector).expect("first pass inserts");
    assert_eq!(detect_first_comment(&once.content, &style).text, notice, "{extension}");
    assert!(
      rewrite_source(&once.content, &style, &notice, &detector).is_none(),
      "second pass changed the file ({extension}): {:?}",
      once.content
    );
  }
}

#[test]
fn test_notice_containing_block_end_never_grows_the_file() {
  let detector = KeywordDetector::new();

  for extension in EXTENSIONS {
    let style = style_for(extension).expect("builtin style");
    for end in ["*/", "-->", "#>"] {
      let notice = format!("Copyright 2025 X\n{end}\ntail");
      if !can_express(&notice, &style) {
        continue;
      }
      let source = format!("{}body\n", comment_for(&style, "Copyright 1999 Old"));

      let once = rewrite_source(&source, &style, &notice, &detector).expect("old notice differs");
      assert_eq!(detect_first_comment(&once.content, &style).text, notice, "{extension} {end}");
      assert!(once.content.ends_with("body\n"));
      assert!(
        rewrite_source(&once.content, &style, &notice, &detector).is_none(),
        "second pass changed the file ({extension}, {end}): {:?}",
        once.content
      );
    }
  }
}

fn comment_for(style: &CommentStyle, text: &str) -> String {
  if style.supports_block() {
    format!("{}\n{}\n{}\n", style.block_start, text, style.block_end)
  } else {
    format!("{} {}\n", style.line_prefix, text)
  }
}

//! Color output through the library API, without any process-wide setup

use git_alias::{print_aliases, AliasFormatter, DisplayOptions};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_color_option_alone_enables_ansi() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("gitconfig");
    fs::write(&file, "[alias]\nst = status\n").unwrap();

    let formatter = AliasFormatter::new(DisplayOptions {
        color: true,
        ..Default::default()
    });
    let mut out = Vec::new();
    print_aliases(&formatter, &mut out, &file).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("\x1b["));
    assert!(out.contains("\x1b[1;4;34malias\x1b[0m"));
    assert!(out.contains(" \x1b[1;31mst\x1b[0m  →  status"));
    assert!(!out.contains("==="));
    assert!(!out.contains("+ st"));
}

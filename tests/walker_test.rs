use git_alias::{print_aliases, AliasFormatter, DisplayOptions};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn report(path: &Path, options: DisplayOptions) -> String {
    let formatter = AliasFormatter::new(options);
    let mut out = Vec::new();
    print_aliases(&formatter, &mut out, path).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_nested_includes_keep_order() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();

    fs::write(
        dir.path().join("main.conf"),
        "[alias]\na = add\n[include]\npath = sub/one.conf\n",
    )
    .unwrap();
    // relative to sub/, not to the top-level file
    fs::write(sub.join("one.conf"), "[alias]\nb = branch\n[include]\npath = two.conf\n").unwrap();
    fs::write(sub.join("two.conf"), "[alias]\nc = commit\n").unwrap();

    let out = report(&dir.path().join("main.conf"), DisplayOptions::default());
    let a = out.find("+ a").unwrap();
    let b = out.find("+ b").unwrap();
    let c = out.find("+ c").unwrap();
    assert!(a < b && b < c);
    assert_eq!(out.matches("@include:").count(), 2);
    assert_eq!(out.matches("@end:").count(), 2);
}

#[test]
fn test_include_does_not_leak_comments() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("main.conf"),
        "[alias]\n; belongs to st\n[include]\npath = other.conf\n[alias]\nst = status\n",
    )
    .unwrap();
    fs::write(dir.path().join("other.conf"), "[alias]\nco = checkout\n").unwrap();

    let out = report(&dir.path().join("main.conf"), DisplayOptions::default());
    assert!(out.contains(" + co  →  checkout\n@end"));
    assert!(out.contains(" + st  →  status\n    belongs to st\n"));
}

#[test]
fn test_report_is_deterministic() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("gitconfig");
    fs::write(
        &file,
        "[alias]\n; !: pretty\nsync = \"!git fetch --all && git rebase origin/main | tee /tmp/log\"\n",
    )
    .unwrap();

    let options = DisplayOptions {
        verbose: 2,
        ..Default::default()
    };
    let first = report(&file, options);
    assert_eq!(first, report(&file, options));
    assert!(first.contains("&&\n    ↳  git rebase"));
    assert!(first.contains("|\n    ↳  tee"));
}

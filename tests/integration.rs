use mergecat::{merge, MergeBuilder};
use std::fs;
use tempfile::tempdir;
#[test]
fn integration_full_flow() {
    let code = tempdir().unwrap();
    fs::write(code.path().join("main.rs"), "fn main() {}\n").unwrap();
    fs::create_dir(code.path().join("src")).unwrap();
    fs::write(code.path().join("src/lib.rs"), "pub fn test() {}\n").unwrap();
    let docs = tempdir().unwrap();
    fs::write(docs.path().join("README.md"), "# readme\n").unwrap();

    let out = tempdir().unwrap();
    let output = out.path().join("merged.txt");
    let options = MergeBuilder::new([code.path(), docs.path()]).build();
    let report = merge(options, &output).unwrap();
    assert_eq!(report.files, 3);
    assert_eq!(report.read_errors, 0);
    assert_eq!(report.skipped_roots, 0);

    let merged = fs::read_to_string(&output).unwrap();
    for (root, rel, content) in [
        (code.path(), "main.rs", "fn main() {}\n"),
        (code.path(), "src/lib.rs", "pub fn test() {}\n"),
        (docs.path(), "README.md", "# readme\n"),
    ] {
        let record = format!("// {}/{}\n{}\n\n", root.display(), rel, content);
        assert!(merged.contains(&record), "missing record for {}", rel);
    }

    // All of the first root's records precede the second root's.
    assert!(merged.find("main.rs").unwrap() < merged.find("README.md").unwrap());
    assert!(merged.find("src/lib.rs").unwrap() < merged.find("README.md").unwrap());
}
#[test]
fn integration_idempotent_reruns() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("a.txt"), "alpha\n").unwrap();
    fs::write(dir.path().join("sub/b.txt"), "beta").unwrap();

    let out = tempdir().unwrap();
    let first = out.path().join("first.txt");
    let second = out.path().join("second.txt");
    merge(MergeBuilder::new([dir.path()]).build(), &first).unwrap();
    merge(MergeBuilder::new([dir.path()]).build(), &second).unwrap();
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}
#[test]
fn integration_rerun_truncates_previous_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    let out = tempdir().unwrap();
    let output = out.path().join("merged.txt");
    fs::write(&output, "stale content that should disappear").unwrap();
    merge(MergeBuilder::new([dir.path()]).build(), &output).unwrap();
    let merged = fs::read_to_string(&output).unwrap();
    assert!(!merged.contains("stale content"));
    assert!(merged.starts_with("// "));
}

use autodoc_core::error::AutodocError;
use autodoc_core::project::scanner::Scanner;
use autodoc_core::render::DocRenderer;
use autodoc_core::writer::write_doc;
use autodoc_go::GoPlugin;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_scan_groups_files_by_package() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "mathx/b.go",
        "package mathx\n\n// Sub subtracts.\nfunc Sub() {}\n",
    );
    write(
        dir.path(),
        "mathx/a.go",
        "package mathx\n\nconst Pi = 3\n\n// Add adds.\nfunc Add() {}\n",
    );
    write(dir.path(), "app/main.go", "package app\n\nfunc Run() {}\nfunc helper() {}\n");
    write(dir.path(), "README.md", "# not go\n");

    let plugin = GoPlugin::new().unwrap();
    let docs = Scanner::scan(dir.path(), &plugin).unwrap();

    let packages: Vec<_> = docs.iter().map(|d| d.package.as_str()).collect();
    assert_eq!(packages, ["app", "mathx"]);

    assert_eq!(docs[0].symbols.function_names().collect::<Vec<_>>(), ["Run"]);

    // a.go sorts before b.go, so Add comes first.
    let mathx = &docs[1].symbols;
    assert_eq!(mathx.function_names().collect::<Vec<_>>(), ["Add", "Sub"]);
    assert_eq!(mathx.constants, ["Pi"]);
    assert_eq!(mathx.functions[0].comments, ["// Add adds."]);
}

#[test]
fn test_scan_single_file() {
    let dir = tempdir().unwrap();
    write(dir.path(), "lib.go", "package lib\n\nvar Version = \"1\"\n");

    let plugin = GoPlugin::new().unwrap();
    let docs = Scanner::scan(&dir.path().join("lib.go"), &plugin).unwrap();

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].package, "lib");
    assert_eq!(docs[0].symbols.variables, ["Version"]);
}

#[test]
fn test_scan_falls_back_to_directory_name() {
    let dir = tempdir().unwrap();
    write(dir.path(), "tools/gen.go", "func Generate() {}\n");

    let plugin = GoPlugin::new().unwrap();
    let docs = Scanner::scan(dir.path(), &plugin).unwrap();

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].package, "tools");
}

#[test]
fn test_scan_missing_root() {
    let dir = tempdir().unwrap();
    let plugin = GoPlugin::new().unwrap();
    let err = Scanner::scan(&dir.path().join("nope"), &plugin).unwrap_err();
    assert!(matches!(err, AutodocError::Io(_)));
}

#[test]
fn test_scan_render_and_write() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    write(
        src.path(),
        "mathx/add.go",
        "package mathx\n\n// Add adds two integers.\nfunc Add(a, b int) int { return a + b }\n",
    );

    let plugin = GoPlugin::new().unwrap();
    let renderer = DocRenderer::default();
    for doc in Scanner::scan(src.path(), &plugin).unwrap() {
        write_doc(out.path(), &doc.package, &renderer.render_package(&doc)).unwrap();
    }

    let written = fs::read_to_string(out.path().join("mathx").join("doc.md")).unwrap();
    assert_eq!(
        written,
        "# Package mathx\n\n## Functions\n\n### Add\n\nAdd adds two integers.\n\n```go\nAdd\n```\n"
    );
}

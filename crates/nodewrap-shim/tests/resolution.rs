use nodewrap_shim::config::CONFIG_FILENAME;
use nodewrap_shim::{
    CommandLine, ConfigResolver, DefaultResolver, PairResolver, ResolvedPaths, Source, resolve_with,
};
use serde_json::json;
use std::path::Path;
use tempfile::tempdir;

fn resolve_file(path: &Path) -> ResolvedPaths {
    resolve_with(&PairResolver::new(ConfigResolver::new(path), DefaultResolver))
}

#[test]
fn test_config_with_both_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILENAME);
    std::fs::write(
        &path,
        r#"{"nodePath":"C:\\rt\\node.exe","cliPath":"C:\\rt\\cli.js"}"#,
    )
    .unwrap();

    let paths = resolve_file(&path);
    assert_eq!(paths.source, Source::Config);
    assert_eq!(paths.interpreter, r"C:\rt\node.exe");
    assert_eq!(paths.script, r"C:\rt\cli.js");

    let line = CommandLine::compose(&paths, r#"--flag "a b" c"#).unwrap();
    assert_eq!(line.as_str(), r#""C:\rt\node.exe" "C:\rt\cli.js" --flag "a b" c"#);
}

#[test]
fn test_absent_config_uses_defaults() {
    let dir = tempdir().unwrap();
    let paths = resolve_file(&dir.path().join(CONFIG_FILENAME));
    assert_eq!(paths, ResolvedPaths::defaults());

    let line = CommandLine::compose(&paths, r#"--flag "a b" c"#).unwrap();
    assert!(line.as_str().ends_with(r#"" --flag "a b" c"#));
}

#[test]
fn test_missing_either_key_uses_both_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILENAME);

    for doc in [
        json!({ "nodePath": "/opt/node/bin/node" }),
        json!({ "cliPath": "/opt/cli/cli.js" }),
        json!({ "nodePath": "/opt/node/bin/node", "cliPath": 7 }),
        json!({ "nodePath": "", "cliPath": "/opt/cli/cli.js" }),
        json!({}),
    ] {
        std::fs::write(&path, doc.to_string()).unwrap();
        let paths = resolve_file(&path);
        assert_eq!(paths, ResolvedPaths::defaults(), "config: {doc}");
    }
}

#[test]
fn test_malformed_config_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILENAME);
    std::fs::write(&path, r#"{"nodePath": "/opt/node", "cliPath": "/opt/cli"#).unwrap();
    assert_eq!(resolve_file(&path), ResolvedPaths::defaults());
}

#[test]
fn test_serialized_escapes_decode() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILENAME);
    let node = "C:\\Program Files\\node \"lts\"\\node.exe";
    let cli = "/opt/cli\twith tab/cli.js";
    let doc = json!({ "extra": { "nested": true }, "cliPath": cli, "nodePath": node });
    std::fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();

    let paths = resolve_file(&path);
    assert_eq!(paths.source, Source::Config);
    assert_eq!(paths.interpreter, node);
    assert_eq!(paths.script, cli);
}


use fixtures::{p, run_dirsnap, FixtureBuilder};

#[test]
fn test_json_secrets_masked_in_document() {
    let (_tmp, root) = FixtureBuilder::new()
        .file(
            "config.json",
            r#"{"api_key": "abc123", "name": "ok", "reddit": {"client_secret": "shh", "username": "bot"}}"#,
        )
        .build();

    let (output, _, success) = run_dirsnap([p(&root)]);
    assert!(success);

    assert!(output.contains(r#""api_key": "XXXXXX""#));
    assert!(output.contains(r#""client_secret": "XXX""#));
    assert!(output.contains(r#""name": "ok""#));
    assert!(output.contains(r#""username": "bot""#));
    assert!(!output.contains("abc123"));
    assert!(!output.contains("shh"));
}

#[test]
fn test_no_obfuscate_flag_embeds_raw_json() {
    let (_tmp, root) = FixtureBuilder::new()
        .file("config.json", r#"{"api_key": "abc123"}"#)
        .build();

    let (output, _, success) = run_dirsnap([p(&root), "--no-obfuscate".into()]);
    assert!(success);

    assert!(output.contains("abc123"));
}

#[test]
fn test_config_can_disable_obfuscation() {
    let (_tmp, root) = FixtureBuilder::new()
        .file("creds.json", r#"{"password": "hunter2"}"#)
        .build();
    let config_path = root.join("snapshot-config");
    std::fs::write(
        &config_path,
        r#"{"obfuscate_sensitive_data": false, "ignore_patterns": ["snapshot-config"]}"#,
    )
    .unwrap();

    let (output, _, success) = run_dirsnap([p(&root), "-c".into(), p(&config_path)]);
    assert!(success);

    assert!(output.contains("hunter2"));
}

#[test]
fn test_masking_only_touches_json_files() {
    let (_tmp, root) = FixtureBuilder::new()
        .file("notes.txt", "password: hunter2")
        .build();

    let (output, _, success) = run_dirsnap([p(&root)]);
    assert!(success);

    // Only parsed JSON objects are masked; plain text passes through.
    assert!(output.contains("password: hunter2"));
}

#[test]
fn test_json_array_top_level_is_untouched() {
    let (_tmp, root) = FixtureBuilder::new()
        .file("list.json", r#"[{"password": "visible"}]"#)
        .build();

    let (output, _, success) = run_dirsnap([p(&root)]);
    assert!(success);

    assert!(output.contains("visible"));
}

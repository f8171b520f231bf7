use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["ignores"], serde_json::json!(["**/node_modules/**"]));
    assert_eq!(parsed["outputFile"], "strings.po");
    assert_eq!(parsed["includeReference"], false);
    assert_eq!(parsed["ignoreTestFiles"], true);

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "\u{2713} Created .gettextrc.json\n"
    );

    assert!(test.root().join(".gettextrc.json").exists());
    assert_config_content(&test.read_file(".gettextrc.json")?)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".gettextrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Error: .gettextrc.json already exists\n"
    );
    assert_eq!(test.read_file(".gettextrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("src/app.js", "_('Hello World!');")?;

    let output = test.extract_command().output()?;
    assert!(
        output.status.success(),
        "Extract should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.read_file("strings.po")?.contains("msgid \"Hello World!\""));

    Ok(())
}

#[test]
fn test_init_with_source_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["init", "--source-root", "web"]).output()?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "\u{2713} Created web/.gettextrc.json\n"
    );
    assert_config_content(&test.read_file("web/.gettextrc.json")?)?;

    test.write_file("web/app.js", "_('Nested');")?;
    let output = test
        .extract_command()
        .args(["--source-root", "web"])
        .output()?;
    assert!(output.status.success());
    assert!(test.read_file("web/strings.po")?.contains("msgid \"Nested\""));

    Ok(())
}

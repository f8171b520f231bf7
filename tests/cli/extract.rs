use anyhow::Result;
use insta::assert_snapshot;
use serde_json::Value;

use crate::CliTest;

const APP: &str = r#"
import React from 'react';

export function Inbox({ count, name }) {
    const title = _('Inbox');
    const summary = _n('You have one message', 'You have {count} messages', count);
    return (
        <div title={title}>
            <LocalizedString id="Hello, {name}!" comment="Greeting in the header" name={name} />
            <LocalizedString i18n={_c('Archive', 'verb')} />
            {summary}
        </div>
    );
}
"#;

#[test]
fn test_extract_writes_po_file() -> Result<()> {
    let test = CliTest::with_file("src/inbox.jsx", APP)?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "\u{2713} Extracted 4 strings from 1 source file into strings.po\n"
    );

    let po = test.read_file("strings.po")?;
    assert!(po.contains("Language: en_US"));
    assert!(po.contains("Plural-Forms: nplurals=2; plural=(n!=1);"));
    assert!(po.contains("msgid \"Inbox\""));
    assert!(po.contains("msgid_plural \"You have {count} messages\""));
    assert!(po.contains("#. Greeting in the header"));
    assert!(po.contains("msgctxt \"verb\""));

    Ok(())
}

#[test]
fn test_extract_failure() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "const a = 1;\nconst b = _(label);\n")?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_snapshot!(String::from_utf8_lossy(&output.stderr), @r"
    error: Function _ must have a String Literal or Binary Expression for argument #1, found Identifier instead!
     --> ./src/app.js:2:11
      |
    2 | const b = _(label);
      |           ^

    ✘ Extraction failed, no catalog was written
    ");
    assert!(!test.root().join("strings.po").exists());

    Ok(())
}

#[test]
fn test_extract_missing_identifier() -> Result<()> {
    let test = CliTest::with_file("view.jsx", r#"<LocalizedString comment="orphan" />;"#)?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .starts_with("error: LocalizedString component must have a prop 'id' or 'i18n'!")
    );

    Ok(())
}

#[test]
fn test_extract_json() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.js", "_('Flag'); _c('Flag', 'Physical ' + 'Object');")?;
    test.write_file("src/b.js", "_n('Flag', 'Flags', 2);")?;

    let output = test.extract_command().arg("--json").output()?;
    assert!(output.status.success());
    assert!(!test.root().join("strings.po").exists());

    let catalog: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(catalog["charset"], "UTF-8");
    assert_eq!(
        catalog["translations"][""]["Flag"],
        serde_json::json!({
            "msgid": "Flag",
            "msgid_plural": "Flags",
            "msgstr": ["", ""],
            "comments": {}
        })
    );
    assert_eq!(
        catalog["translations"]["Physical Object"]["Flag"]["msgstr"],
        serde_json::json!([""])
    );

    Ok(())
}

#[test]
fn test_extract_with_references() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.js", "_('Shared');")?;
    test.write_file("src/b.js", "_('Shared');")?;

    let project_name = test
        .root()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let output = test
        .extract_command()
        .args(["--include-reference", "--base-dir", &project_name, "--json"])
        .output()?;
    assert!(output.status.success());

    let catalog: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        catalog["translations"][""]["Shared"]["comments"]["reference"],
        "src/a.js\nsrc/b.js"
    );

    Ok(())
}

#[test]
fn test_extract_with_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".gettextrc.json",
        r#"{
        "outputDir": "locale",
        "outputFile": "app.po",
        "includes": ["src"],
        "headers": { "language": "de_DE", "X-Generator": "gettext-extract" },
        "function": [
            { "type": "SINGULAR", "name": "gettext" },
            { "type": "PLURAL_CONTEXT", "name": "npgettext", "context": 0, "singular": 1, "plural": 2 },
            { "type": "SINGULAR", "name": "t", "ignoreError": true }
        ],
        "component": { "name": "Trans", "singular": "message" }
    }"#,
    )?;
    test.write_file(
        "src/app.jsx",
        r#"
        gettext('Save');
        npgettext('menu', 'File', 'Files', n);
        t(dynamicKey);
        _('Not configured');
        <Trans message="Welcome" />;
        "#,
    )?;
    test.write_file("scripts/build.js", "gettext('Outside includes');")?;

    let output = test.extract_command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("warning: header 'X-Generator' is not a PO header field and was skipped")
    );

    let po = test.read_file("locale/app.po")?;
    assert!(po.contains("Language: de_DE"));
    assert!(po.contains("msgid \"Save\""));
    assert!(po.contains("msgctxt \"menu\""));
    assert!(po.contains("msgid_plural \"Files\""));
    assert!(po.contains("msgid \"Welcome\""));
    assert!(!po.contains("Not configured"));
    assert!(!po.contains("Outside includes"));

    Ok(())
}

#[test]
fn test_extract_output_flag() -> Result<()> {
    let test = CliTest::with_file("app.js", "_('Hi');")?;

    let output = test
        .extract_command()
        .args(["-o", "po/messages.pot"])
        .output()?;
    assert!(output.status.success());
    assert!(test.read_file("po/messages.pot")?.contains("msgid \"Hi\""));

    Ok(())
}

#[test]
fn test_extract_skips_unparsable_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/broken.js", "const = ;")?;
    test.write_file("src/ok.js", "_('Fine');")?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("warning: 1 file(s) could not be parsed (use -v for details)")
    );
    assert!(test.read_file("strings.po")?.contains("msgid \"Fine\""));

    Ok(())
}

#[test]
fn test_duplicate_function_names_are_rejected() -> Result<()> {
    let test = CliTest::with_file(
        ".gettextrc.json",
        r#"{ "function": [
            { "type": "SINGULAR", "name": "t" },
            { "type": "SINGULAR_CONTEXT", "name": "t", "context": 1 }
        ] }"#,
    )?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: Function 't'"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("extract"));

    Ok(())
}

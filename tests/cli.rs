// Exercises the nav-export binary end to end: export shapes, document checks,
// and single-link lookup.
mod support;

use anyhow::Result;
use serde_json::{Value, json};
use std::fs;
use support::{nav_export, run_command, schema_path, stdout_json};
use tempfile::TempDir;

#[test]
fn export_defaults_to_full_document() -> Result<()> {
    let mut cmd = nav_export();
    cmd.arg("export");
    let output = run_command(cmd)?;
    let value = stdout_json(&output)?;
    assert!(value.get("qiskitElements").is_some());
    assert!(value.get("communitySubLinks").is_some());
    assert_eq!(
        value
            .get("footerElements")
            .and_then(Value::as_array)
            .map(Vec::len),
        Some(3)
    );
    Ok(())
}

#[test]
fn export_single_collection() -> Result<()> {
    let mut cmd = nav_export();
    cmd.args(["export", "--collection", "qiskit-elements"]);
    let value = stdout_json(&run_command(cmd)?)?;
    let urls: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|link| link["url"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(urls, ["/terra", "/aer", "/aqua", "/ignis", "/ibmqaccount"]);
    Ok(())
}

#[test]
fn verbose_logging_stays_off_stdout() -> Result<()> {
    let mut cmd = nav_export();
    cmd.args(["-vv", "export", "--collection", "social-media"]);
    let output = run_command(cmd)?;
    let value = stdout_json(&output)?;
    assert_eq!(value.as_array().map(Vec::len), Some(6));
    assert!(String::from_utf8_lossy(&output.stderr).contains("exporting collection social-media"));

    let mut cmd = nav_export();
    cmd.args(["export", "--collection", "footer"]).env("NAV_LOG", "trace");
    let value = stdout_json(&run_command(cmd)?)?;
    assert_eq!(value.as_array().map(Vec::len), Some(3));
    Ok(())
}

#[test]
fn export_writes_output_file_that_checks_clean() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("nav.json");

    let mut cmd = nav_export();
    cmd.args(["export", "--pretty", "--output"]).arg(&path);
    let output = run_command(cmd)?;
    assert!(output.stdout.is_empty());

    let written: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(written["footerElements"][2][0]["title"], "Social Media");

    let mut check = nav_export();
    check.args(["check", "--file"]).arg(&path);
    check.arg("--schema").arg(schema_path());
    let output = run_command(check)?;
    assert!(String::from_utf8_lossy(&output.stdout).ends_with(": ok\n"));
    Ok(())
}

#[test]
fn check_bundled_data_succeeds() -> Result<()> {
    let mut cmd = nav_export();
    cmd.arg("check");
    let output = run_command(cmd)?;
    assert_eq!(String::from_utf8_lossy(&output.stdout), "bundled navigation: ok\n");
    Ok(())
}

#[test]
fn check_reports_rule_violations() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("broken.json");
    let document = json!({
        "qiskitElements": [
            {"label": "GitHub", "url": "https://github.com/Qiskit", "linkType": "aLink"}
        ],
        "communitySubLinks": [],
        "footerElements": [[{"title": "Social Media", "elements": []}]]
    });
    fs::write(&path, document.to_string())?;

    let mut cmd = nav_export();
    cmd.args(["check", "--file"]).arg(&path);
    let output = cmd.output()?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("qiskitElements[0]: external link"), "{stderr}");
    assert!(stderr.contains("subsection has no links"), "{stderr}");
    assert!(stderr.contains("3 navigation rule violation(s)"), "{stderr}");
    Ok(())
}

#[test]
fn check_rejects_schema_violations() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("bad_type.json");
    let document = json!({
        "qiskitElements": [{"label": "Terra", "url": "/terra", "linkType": "routerLink"}],
        "communitySubLinks": [],
        "footerElements": []
    });
    fs::write(&path, document.to_string())?;

    let mut cmd = nav_export();
    cmd.args(["check", "--file"]).arg(&path);
    let output = cmd.output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed schema validation"));
    Ok(())
}

#[test]
fn allowed_rel_tokens_come_from_env() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("sponsored.json");
    let document = json!({
        "qiskitElements": [],
        "communitySubLinks": [{
            "label": "Partner",
            "url": "https://example.com",
            "target": "_blank",
            "rel": "noopener sponsored",
            "linkType": "aLink"
        }],
        "footerElements": [[{
            "title": "Partners",
            "elements": [{"label": "Terra", "url": "/terra", "linkType": "nuxtLink"}]
        }]]
    });
    fs::write(&path, document.to_string())?;

    let mut rejected = nav_export();
    rejected.args(["check", "--file"]).arg(&path);
    let output = rejected.output()?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("communitySubLinks[0]: unknown rel token 'sponsored'"),
        "{stderr}"
    );
    assert!(stderr.contains("1 navigation rule violation(s)"), "{stderr}");

    let mut accepted = nav_export();
    accepted.args(["check", "--file"]).arg(&path);
    accepted.env("NAV_ALLOWED_REL_TOKENS", "sponsored");
    let output = run_command(accepted)?;
    assert!(String::from_utf8_lossy(&output.stdout).ends_with(": ok\n"));
    Ok(())
}

#[test]
fn lookup_prints_one_link() -> Result<()> {
    let mut cmd = nav_export();
    cmd.args(["lookup", "social-media", "github"]);
    let value = stdout_json(&run_command(cmd)?)?;
    assert_eq!(
        value,
        json!({
            "label": "GitHub",
            "url": "https://github.com/Qiskit",
            "target": "_blank",
            "rel": "noopener",
            "linkType": "aLink"
        })
    );
    Ok(())
}

#[test]
fn lookup_unknown_key_lists_available_keys() -> Result<()> {
    let mut cmd = nav_export();
    cmd.args(["lookup", "qiskit-elements", "qasm"]);
    let output = cmd.output()?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("terra, aer, aqua, ignis, ibmQAccount"), "{stderr}");

    let mut cmd = nav_export();
    cmd.args(["lookup", "partners", "github"]);
    let output = cmd.output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown group 'partners'"));
    Ok(())
}

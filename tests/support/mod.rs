#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::path::PathBuf;
use std::process::{Command, Output};

pub fn nav_export() -> Command {
    let mut cmd = Command::new(nav_export_binary());
    cmd.env_remove("NAV_LOG");
    cmd.env_remove("NAV_ALLOWED_REL_TOKENS");
    cmd
}

pub fn nav_export_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_nav-export"))
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn stdout_json(output: &Output) -> Result<Value> {
    serde_json::from_slice(&output.stdout).context("stdout is not valid JSON")
}

pub fn schema_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("schema")
        .join("nav_links.schema.json")
}

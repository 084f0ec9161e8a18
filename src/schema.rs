//! JSON Schema for the navigation export.
//!
//! The schema under `schema/nav_links.schema.json` is embedded at build time so
//! the binary validates without a checkout. A schema on disk can be loaded
//! instead; it must expose the same `definitions` (`linkList`,
//! `footerStructure`) so list and footer fragments can be checked on their own.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::{Draft, JSONSchema};
use serde_json::{Value, json};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Schema shipped with the crate.
pub const BUNDLED_SCHEMA: &str = include_str!("../schema/nav_links.schema.json");
/// File name of the schema inside the `schema/` directory.
pub const SCHEMA_FILE_NAME: &str = "nav_links.schema.json";

const LINK_LIST_DEFINITION: &str = "linkList";
const FOOTER_DEFINITION: &str = "footerStructure";

/// Compiled validators for a whole export and its fragments.
pub struct NavSchema {
    document: JSONSchema,
    link_list: JSONSchema,
    footer: JSONSchema,
}

impl NavSchema {
    /// Compile the embedded schema.
    pub fn bundled() -> Result<Self> {
        let value: Value =
            serde_json::from_str(BUNDLED_SCHEMA).context("parsing bundled navigation schema")?;
        Self::from_value(&value, "bundled navigation schema")
    }

    /// Parse and compile a schema from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let value: Value = serde_json::from_reader(
            File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
        )
        .with_context(|| format!("parsing schema {}", path.display()))?;
        Self::from_value(&value, &format!("schema {}", path.display()))
    }

    fn from_value(schema: &Value, origin: &str) -> Result<Self> {
        Ok(Self {
            document: compile(schema, origin)?,
            link_list: compile(&definition_wrapper(schema, LINK_LIST_DEFINITION, origin)?, origin)?,
            footer: compile(&definition_wrapper(schema, FOOTER_DEFINITION, origin)?, origin)?,
        })
    }

    /// Validate an instance against the root schema, i.e. a full export
    /// document (`qiskitElements`, `communitySubLinks`, `footerElements`).
    pub fn validate(&self, instance: &Value) -> Result<()> {
        check(&self.document, instance, "navigation document")
    }

    pub fn validate_link_list(&self, instance: &Value) -> Result<()> {
        check(&self.link_list, instance, "link list")
    }

    pub fn validate_footer(&self, instance: &Value) -> Result<()> {
        check(&self.footer, instance, "footer structure")
    }
}

/// On-disk location of the bundled schema, when the source tree is around.
pub fn default_schema_path() -> Option<PathBuf> {
    let dir = option_env!("NAV_SCHEMA_DIR_HINT")?;
    let candidate = Path::new(dir).join(SCHEMA_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

fn compile(schema: &Value, origin: &str) -> Result<JSONSchema> {
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema)
        .map_err(|err| anyhow!("compiling {origin}: {err}"))
}

// Fragment validators carry the root definitions so `#/definitions/...` refs resolve.
fn definition_wrapper(schema: &Value, name: &str, origin: &str) -> Result<Value> {
    let definitions = schema
        .get("definitions")
        .ok_or_else(|| anyhow!("{origin} has no definitions block"))?;
    if definitions.get(name).is_none() {
        bail!("{origin} is missing definitions/{name}");
    }
    Ok(json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "definitions": definitions,
        "allOf": [{ "$ref": format!("#/definitions/{name}") }]
    }))
}

fn check(compiled: &JSONSchema, instance: &Value, what: &str) -> Result<()> {
    if let Err(errors) = compiled.validate(instance) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!("{what} failed schema validation:\n{details}");
    }
    Ok(())
}

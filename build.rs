use std::env;
use std::path::PathBuf;

fn main() {
    // The bundled schema is embedded with include_str!; rebuild when it moves.
    println!("cargo:rerun-if-changed=schema/nav_links.schema.json");
    println!("cargo:rerun-if-env-changed=NAV_SCHEMA_DIR_HINT");

    let hint = env::var("NAV_SCHEMA_DIR_HINT")
        .ok()
        .or_else(|| env::var("CARGO_MANIFEST_DIR").ok().map(|dir| format!("{dir}/schema")));

    if let Some(raw_hint) = hint {
        let candidate = PathBuf::from(raw_hint);
        let canonical = candidate.canonicalize().unwrap_or(candidate);

        println!("cargo:rustc-env=NAV_SCHEMA_DIR_HINT={}", canonical.display());
    }
}

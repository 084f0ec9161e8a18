//! Export and check the site's navigation data.
//!
//! `nav-export export` prints the JSON the menu/footer components consume,
//! `nav-export check` validates the bundled data (or an exported document on
//! disk) against the schema and the content rules, and `nav-export lookup`
//! prints a single link by group and key.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use qiskit_nav::nav::BUNDLED_GROUP_NAMES;
use qiskit_nav::{
    Collection, LinkRepository, LinkRules, NavSchema, SiteNavigation, parse_document, render,
    validate_footer, validate_links, validate_site,
};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const ENV_LOG_LEVEL: &str = "NAV_LOG";

#[derive(Parser)]
#[command(name = "nav-export", about = "Export and check the Qiskit site navigation links")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a collection as JSON
    Export {
        #[arg(short, long, value_enum, default_value_t)]
        collection: Collection,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate the bundled data or an exported document
    Check {
        /// Exported document to check instead of the bundled data
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Schema to validate against instead of the embedded one
        #[arg(long)]
        schema: Option<PathBuf>,
    },
    /// Print one link from a keyed group
    Lookup {
        group: String,
        key: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Export {
            collection,
            pretty,
            output,
        } => export(collection, pretty, output.as_deref()),
        Command::Check { file, schema } => check(file.as_deref(), schema.as_deref()),
        Command::Lookup { group, key } => lookup(&group, &key),
    }
}

fn export(collection: Collection, pretty: bool, output: Option<&Path>) -> Result<()> {
    log::info!("exporting collection {}", collection.as_str());
    let text = render(collection, pretty)?;
    match output {
        Some(path) => fs::write(path, format!("{text}\n"))
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{text}"),
    }
    Ok(())
}

fn check(file: Option<&Path>, schema_path: Option<&Path>) -> Result<()> {
    let schema = match schema_path {
        Some(path) => NavSchema::load(path)?,
        None => NavSchema::bundled()?,
    };
    let rules = LinkRules::from_env();

    let (label, errors) = match file {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let value: serde_json::Value = serde_json::from_str(&raw)
                .with_context(|| format!("parsing {}", path.display()))?;
            schema.validate(&value)?;
            let document = parse_document(&raw)?;
            (path.display().to_string(), document_errors(&document, &rules))
        }
        None => {
            let document = SiteNavigation::bundled();
            schema.validate(&serde_json::to_value(&document)?)?;
            ("bundled navigation".to_string(), validate_site(&rules))
        }
    };

    if !errors.is_empty() {
        for error in &errors {
            eprintln!("{error}");
        }
        bail!("{label}: {} navigation rule violation(s)", errors.len());
    }
    println!("{label}: ok");
    Ok(())
}

fn document_errors(document: &SiteNavigation, rules: &LinkRules) -> Vec<String> {
    let mut errors = validate_links("qiskitElements", &document.qiskit_elements, rules);
    errors.extend(validate_links(
        "communitySubLinks",
        &document.community_sub_links,
        rules,
    ));
    errors.extend(validate_footer(&document.footer_elements, rules));
    errors
}

fn lookup(group: &str, key: &str) -> Result<()> {
    let repo = LinkRepository::bundled();
    let Some(links) = repo.get(group) else {
        bail!(
            "unknown group '{group}' (expected one of: {})",
            BUNDLED_GROUP_NAMES.join(", ")
        );
    };
    let Some(link) = links.get(key) else {
        let keys: Vec<_> = links.keys().map(|k| k.as_str()).collect();
        bail!("group '{group}' has no link '{key}' (keys: {})", keys.join(", "));
    };
    println!("{}", serde_json::to_string(link)?);
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => env::var(ENV_LOG_LEVEL)
            .ok()
            .and_then(|raw| raw.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();

    // stdout carries the JSON output; logs always go to stderr.
    if TermLogger::init(level, config.clone(), TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        if let Err(err) = WriteLogger::init(level, config, std::io::stderr()) {
            eprintln!("nav-export: logging disabled: {err}");
        }
    }
}

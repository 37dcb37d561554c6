//! # Resource Schema Docs
//!
//! A command-line utility that prints reference documentation for the
//! built-in administrative resource schemas.
//!
//! ## Usage
//!
//! ### Print Every Resource
//!
//! ```bash
//! cargo run --bin schema-docs
//! ```
//!
//! ### Print One Resource
//!
//! ```bash
//! cargo run --bin schema-docs user
//! ```
//!
//! ### Summaries or Raw Declarations
//!
//! ```bash
//! cargo run --bin schema-docs -- --summary
//! cargo run --bin schema-docs -- --json group_member
//! ```
//!
//! ## Output Examples
//!
//! ### Summary
//!
//! ```text
//! Schema Summary: group_member
//!   Description: Group membership.
//!   Attributes: 9
//!   Required attributes: group_id
//!   Read-only attributes: 4
//!   Rules: 3
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: Documentation printed
//! - `1`: Unknown resource type, bad arguments, or a schema failed to load

use admin_schema::docs::render_markdown;
use admin_schema::schema::{Presence, ResourceSchema, SchemaRegistry};
use std::env;
use std::process;

enum Format {
    Markdown,
    Summary,
    Json,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("schema-docs");

    let mut format = Format::Markdown;
    let mut resource_type = None;
    for arg in &args[1.min(args.len())..] {
        match arg.as_str() {
            "--summary" => format = Format::Summary,
            "--json" => format = Format::Json,
            "-h" | "--help" => {
                print_usage(program);
                return;
            }
            other if other.starts_with('-') || resource_type.is_some() => {
                print_usage(program);
                process::exit(1);
            }
            other => resource_type = Some(other.to_string()),
        }
    }

    let registry = match SchemaRegistry::new() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("❌ Failed to load schema registry: {}", e);
            process::exit(1);
        }
    };

    let schemas: Vec<&ResourceSchema> = match &resource_type {
        Some(type_name) => match registry.get_schema(type_name) {
            Some(schema) => vec![schema],
            None => {
                eprintln!("Error: unknown resource type '{}'", type_name);
                eprintln!("Known resource types: {}", registry.resource_types().join(", "));
                process::exit(1);
            }
        },
        None => registry.schemas().collect(),
    };

    for (i, schema) in schemas.iter().enumerate() {
        if i > 0 {
            println!();
        }
        match format {
            Format::Markdown => print!("{}", render_markdown(schema)),
            Format::Summary => print_schema_summary(schema),
            Format::Json => match serde_json::to_string_pretty(schema) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("❌ Failed to serialize {}: {}", schema.type_name, e);
                    process::exit(1);
                }
            },
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [--summary | --json] [resource-type]", program);
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {}", program);
    eprintln!("  {} user", program);
    eprintln!("  {} --summary", program);
}

fn print_schema_summary(schema: &ResourceSchema) {
    println!("Schema Summary: {}", schema.type_name);
    println!("  Description: {}", schema.description);
    println!("  Attributes: {}", schema.root.attributes.len());

    let required: Vec<&str> = schema
        .root
        .attributes
        .iter()
        .filter(|attr| attr.presence.is_required())
        .map(|attr| attr.name.as_str())
        .collect();
    let read_only = schema
        .root
        .attributes
        .iter()
        .filter(|attr| attr.presence == Presence::Computed)
        .count();
    let rules = schema.root.validators.len()
        + schema
            .root
            .attributes
            .iter()
            .map(|attr| attr.validators.len())
            .sum::<usize>();

    if !required.is_empty() {
        println!("  Required attributes: {}", required.join(", "));
    }
    println!("  Read-only attributes: {}", read_only);
    println!("  Rules: {}", rules);
}

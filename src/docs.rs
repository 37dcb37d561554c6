//! Markdown reference documentation for resource schemas.
//!
//! Attributes are grouped into Required, Optional and Read-Only sections,
//! sorted by name within a section. Every nested record gets its own section
//! after the top-level one, linked from the attribute that holds it.

use crate::schema::types::{AttributeDefinition, AttributeType, ObjectDefinition, Presence, ResourceSchema};
use std::fmt::{self, Write};

/// Render the reference page for one resource.
pub fn render_markdown(schema: &ResourceSchema) -> String {
    let mut out = String::new();
    // Writing into a String never fails.
    let _ = write_page(&mut out, schema);
    out
}

fn write_page(out: &mut String, schema: &ResourceSchema) -> fmt::Result {
    writeln!(out, "# {} (Resource)\n", schema.type_name)?;
    if !schema.description.is_empty() {
        writeln!(out, "{}\n", schema.description)?;
    }
    out.push_str("## Schema\n");

    let mut nested = Vec::new();
    render_object(out, &schema.root, "", &mut nested)?;

    // Nested records are queued while rendering their parent, so a parent's
    // section always precedes its children's.
    let mut next = 0;
    while next < nested.len() {
        let (path, object): (String, &ObjectDefinition) = nested[next].clone();
        writeln!(out, "\n<a id=\"{}\"></a>", anchor(&path))?;
        writeln!(out, "### Nested Schema for `{path}`")?;
        render_object(out, object, &path, &mut nested)?;
        next += 1;
    }
    Ok(())
}

fn render_object<'a>(
    out: &mut String,
    object: &'a ObjectDefinition,
    path: &str,
    nested: &mut Vec<(String, &'a ObjectDefinition)>,
) -> fmt::Result {
    let sections: [(&str, fn(&Presence) -> bool); 3] = [
        ("Required", |p| matches!(p, Presence::Required)),
        ("Optional", |p| matches!(p, Presence::Optional | Presence::OptionalComputed)),
        ("Read-Only", |p| matches!(p, Presence::Computed)),
    ];

    for (title, belongs) in sections {
        let mut attributes: Vec<&AttributeDefinition> = object
            .attributes
            .iter()
            .filter(|attr| belongs(&attr.presence))
            .collect();
        if attributes.is_empty() {
            continue;
        }
        attributes.sort_by(|a, b| a.name.cmp(&b.name));

        writeln!(out, "\n### {title}\n")?;
        for attr in attributes {
            let attr_path = if path.is_empty() {
                attr.name.clone()
            } else {
                format!("{path}.{}", attr.name)
            };
            render_attribute(out, attr, &attr_path)?;
            if let Some(child) = attr.attribute_type.nested_object() {
                nested.push((attr_path, child));
            }
        }
    }

    if !object.validators.is_empty() {
        out.push_str("\nConstraints:\n\n");
        for validator in &object.validators {
            writeln!(out, "- {}", validator.markdown_description())?;
        }
    }
    Ok(())
}

fn render_attribute(out: &mut String, attr: &AttributeDefinition, path: &str) -> fmt::Result {
    write!(out, "- `{}` ({}", attr.name, type_label(&attr.attribute_type))?;
    if attr.sensitive {
        out.push_str(", Sensitive");
    }
    out.push(')');

    if !attr.description.is_empty() {
        write!(out, " {}", attr.description)?;
    }
    for validator in &attr.validators {
        write!(out, " Validation: {}.", validator.markdown_description())?;
    }
    if attr.attribute_type.nested_object().is_some() {
        write!(out, " (see [below for nested schema](#{}))", anchor(path))?;
    }
    out.push('\n');
    Ok(())
}

fn type_label(attribute_type: &AttributeType) -> String {
    match attribute_type {
        AttributeType::String => "String".to_string(),
        AttributeType::Bool => "Boolean".to_string(),
        AttributeType::Int64 => "Number".to_string(),
        AttributeType::Float64 => "Float".to_string(),
        AttributeType::Object(_) => "Block".to_string(),
        AttributeType::List(element) if element.nested_object().is_some() => "Block List".to_string(),
        AttributeType::Set(element) if element.nested_object().is_some() => "Block Set".to_string(),
        AttributeType::Map(element) if element.nested_object().is_some() => "Block Map".to_string(),
        AttributeType::List(element) => format!("List of {}", type_label(element)),
        AttributeType::Set(element) => format!("Set of {}", type_label(element)),
        AttributeType::Map(element) => format!("Map of {}", type_label(element)),
    }
}

fn anchor(path: &str) -> String {
    format!("nestedblock--{}", path.replace('.', "--"))
}

//! Build script for daybreak_icons
//!
//! Reads the Lucide SVG files under `assets/lucide` and emits one
//! `pub const` per glyph into `$OUT_DIR/icons.rs`.

use roxmltree::Document;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=assets/lucide");

    let icons_dir = Path::new("assets/lucide");
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let out_path = out_dir.join("icons.rs");

    let mut glyphs: Vec<(String, String)> = walkdir::WalkDir::new(icons_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "svg"))
        .filter_map(|entry| {
            let stem = entry.path().file_stem()?.to_str()?.to_string();
            let content = match fs::read_to_string(entry.path()) {
                Ok(c) => c,
                Err(e) => {
                    println!("cargo:warning=failed to read {}: {}", entry.path().display(), e);
                    return None;
                }
            };
            parse_svg(&content, &stem)
        })
        .collect();

    glyphs.sort_by(|a, b| a.0.cmp(&b.0));

    let mut output = String::new();
    for (const_name, body) in &glyphs {
        output.push_str(&format!(
            "/// Lucide `{}`\npub const {}: &str = r#\"{}\"#;\n\n",
            const_name.to_lowercase().replace('_', "-"),
            const_name,
            body
        ));
    }

    output.push_str("/// Every generated glyph keyed by its Lucide name\npub const ALL: &[(&str, &str)] = &[\n");
    for (const_name, _) in &glyphs {
        output.push_str(&format!(
            "    (\"{}\", {}),\n",
            const_name.to_lowercase().replace('_', "-"),
            const_name
        ));
    }
    output.push_str("];\n");

    fs::write(&out_path, output).expect("failed to write icons.rs");
}

/// Flatten the drawable children of an SVG into a single inner-markup string
fn parse_svg(content: &str, file_name: &str) -> Option<(String, String)> {
    let doc = match Document::parse(content.trim_start()) {
        Ok(d) => d,
        Err(e) => {
            println!("cargo:warning=failed to parse {}.svg: {}", file_name, e);
            return None;
        }
    };

    let mut elements = Vec::new();
    for node in doc.root_element().children().filter(|n| n.is_element()) {
        let attr = |name: &str| node.attribute(name).unwrap_or("0");
        match node.tag_name().name() {
            "path" => {
                if let Some(d) = node.attribute("d") {
                    elements.push(format!(r#"<path d="{}"/>"#, d));
                }
            }
            "circle" => elements.push(format!(
                r#"<circle cx="{}" cy="{}" r="{}"/>"#,
                attr("cx"),
                attr("cy"),
                attr("r")
            )),
            "line" => elements.push(format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                attr("x1"),
                attr("y1"),
                attr("x2"),
                attr("y2")
            )),
            _ => {}
        }
    }

    if elements.is_empty() {
        println!("cargo:warning=no drawable elements in {}.svg", file_name);
        return None;
    }

    let const_name = file_name.to_uppercase().replace(['-', '.'], "_");
    Some((const_name, elements.concat()))
}

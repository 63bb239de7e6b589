use crate::ast::{Const, Function, Item};
use crate::SourceFile;

const INDENT: &str = "    ";

/// Render a source file. Sections are separated by one blank line and the
/// output always ends with a single newline.
pub fn render_file(file: &SourceFile) -> String {
    let mut sections: Vec<String> = Vec::new();

    if !file.header.is_empty() {
        sections.push(
            file.header
                .iter()
                .flat_map(|text| comment_block("//", text))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    let mut inner: Vec<String> = file
        .inner_docs
        .iter()
        .flat_map(|text| comment_block("//!", text))
        .collect();
    inner.extend(file.inner_attrs.iter().map(|attr| format!("#![{}]", attr)));
    if !inner.is_empty() {
        sections.push(inner.join("\n"));
    }

    if !file.uses.is_empty() {
        sections.push(
            file.uses
                .iter()
                .map(|path| format!("use {};", path))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    for item in &file.items {
        sections.push(render_item(item));
    }

    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}

pub fn render_item(item: &Item) -> String {
    match item {
        Item::Const(c) => render_const(c),
        Item::Function(f) => render_function(f),
    }
}

fn render_const(c: &Const) -> String {
    let mut out = render_doc(c.doc.as_deref());
    if c.public {
        out.push_str("pub ");
    }
    out.push_str(&format!("const {}: {} = {};", c.name, c.ty, c.value.to_source()));
    out
}

fn render_function(f: &Function) -> String {
    let mut out = render_doc(f.doc.as_deref());
    if f.public {
        out.push_str("pub ");
    }
    let params = f
        .params
        .iter()
        .map(|(name, ty)| format!("{}: {}", name, ty))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!("fn {}({})", f.name, params));
    if let Some(ret) = &f.ret {
        out.push_str(" -> ");
        out.push_str(ret);
    }
    out.push_str(" {\n");
    for stmt in &f.body {
        for line in stmt.lines() {
            if !line.is_empty() {
                out.push_str(INDENT);
                out.push_str(line);
            }
            out.push('\n');
        }
    }
    out.push('}');
    out
}

fn render_doc(doc: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(doc) = doc {
        for line in doc.lines() {
            out.push_str(&comment_line("///", line));
            out.push('\n');
        }
    }
    out
}

/// One comment line per line of `text`, so embedded newlines never end the
/// comment early.
fn comment_block(marker: &str, text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![marker.to_string()];
    }
    text.lines().map(|line| comment_line(marker, line)).collect()
}

fn comment_line(marker: &str, text: &str) -> String {
    // A lone carriage return is a line break for some readers.
    let text = text.replace('\r', " ");
    if text.is_empty() {
        marker.to_string()
    } else {
        format!("{} {}", marker, text)
    }
}

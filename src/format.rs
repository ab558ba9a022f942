//! Format listings and trees as text.

use crate::tree::Node;
use crate::types::{Entry, NodeKind};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

fn display_name(entry_name: &str, kind: NodeKind, color: bool) -> String {
    match kind {
        NodeKind::Directory if color => format!("{}", format!("{}/", entry_name).bold().blue()),
        NodeKind::Directory => format!("{}/", entry_name),
        NodeKind::File => entry_name.to_string(),
    }
}

/// Short listing: names separated by two spaces, directories suffixed `/`.
pub fn format_listing(entries: &[Entry], color: bool) -> String {
    entries
        .iter()
        .map(|e| display_name(&e.name, e.kind, color))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Long listing as a table of name, kind and size.
pub fn format_long_listing(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "Directory is empty.\n".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Name", "Kind", "Size"]);
    for entry in entries {
        let size = match entry.kind {
            NodeKind::File => format!("{} B", entry.size),
            NodeKind::Directory => format!("{} items", entry.size),
        };
        table.add_row(vec![entry.name.clone(), entry.kind.to_string(), size]);
    }
    format!("{}\n", table)
}

/// Indented tree drawing rooted at `node`.
pub fn format_tree(node: &Node, color: bool) -> String {
    let mut out = display_name(node.name(), node.kind(), color);
    out.push('\n');
    if let Some(dir) = node.as_dir() {
        push_children(&mut out, dir.children().collect(), "", color);
    }
    out
}

fn push_children(out: &mut String, children: Vec<&Node>, prefix: &str, color: bool) {
    let last_index = children.len().saturating_sub(1);
    for (i, child) in children.into_iter().enumerate() {
        let last = i == last_index;
        out.push_str(prefix);
        out.push_str(if last { "└── " } else { "├── " });
        out.push_str(&display_name(child.name(), child.kind(), color));
        out.push('\n');
        if let Some(dir) = child.as_dir() {
            let child_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
            push_children(out, dir.children().collect(), &child_prefix, color);
        }
    }
}

//! Seed data
//!
//! The tree a fresh desktop session starts with, plus loading and exporting
//! seed trees as JSON, TOML or YAML.

use crate::error::ApiError;
use crate::tree::{DirectoryNode, Node};
use crate::types::ROOT_ALIAS;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

const ABOUT_ME: &str = "\
GUEST USER - FULL-STACK DEVELOPER

Welcome to this desktop. Everything you see lives in memory: open files in
the editor, browse folders in the file manager, or poke around from the
terminal with ls, cd and cat.

TECHNICAL INTERESTS:
   * Web applications and API design
   * Interactive interfaces and animation
   * Databases and performance tuning
";

const RESUME: &str = "\
GUEST USER
Full-Stack Developer

SUMMARY:
 Builds end-to-end web applications, from database schema to responsive UI.

EXPERIENCE:
 Example Studio | Full-Stack Developer
 Designed REST APIs, server-side rendered front ends and CI pipelines.

EDUCATION:
 Bachelor of Computer Science
";

const CONTACT: &str = "\
You can reach me through the following channels:

- **Email**: guest@example.com
- **GitHub**: github.com/example
";

const ECOMMERCE: &str = "\
# Project: E-commerce Platform

- **Description**: A full-stack store with product catalog, cart and checkout.
- **Tech Stack**: Next.js, TypeScript, PostgreSQL, Tailwind CSS.
";

const CHAT_APP: &str = "\
# Project: Real-time Chat App

- **Description**: Real-time messaging with authentication and multiple rooms.
- **Tech Stack**: React, WebSockets, Framer Motion.
";

const TRACKS: [(&str, &str); 3] = [
    (
        "lofi-study.mp3",
        "https://cdn.pixabay.com/download/audio/2022/05/27/audio_181d739ac0.mp3",
    ),
    (
        "cinematic-hip-hop.mp3",
        "https://cdn.pixabay.com/download/audio/2024/04/23/audio_defcc0486c.mp3",
    ),
    (
        "tropical-summer.mp3",
        "https://cdn.pixabay.com/download/audio/2024/05/13/audio_a99a89796e.mp3",
    ),
];

/// The tree every new session starts from.
pub fn default_seed() -> Node {
    let projects = DirectoryNode::with_children(
        "Projects",
        vec![
            Node::file("e-commerce-platform.md", ECOMMERCE),
            Node::file("real-time-chat-app.md", CHAT_APP),
        ],
    );
    let documents = DirectoryNode::with_children(
        "Documents",
        vec![Node::file("README.md", "This directory is for your documents.")],
    );
    let music = DirectoryNode::with_children(
        "Music",
        TRACKS.iter().map(|(name, url)| Node::file(*name, *url)),
    );

    let home = DirectoryNode::with_children(
        "Home",
        vec![
            Node::file("about-me.txt", ABOUT_ME),
            Node::file("resume.pdf", RESUME),
            Node::file("contact.txt", CONTACT),
            projects.into(),
            documents.into(),
            Node::directory("Pictures"),
            music.into(),
            Node::directory("Downloads"),
        ],
    );

    DirectoryNode::with_children(ROOT_ALIAS, vec![Node::from(home)]).into()
}

/// On-disk seed formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedFormat {
    Json,
    Toml,
    Yaml,
}

impl SeedFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ApiError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(SeedFormat::Json),
            Some("toml") => Ok(SeedFormat::Toml),
            Some("yaml") | Some("yml") => Ok(SeedFormat::Yaml),
            _ => Err(ApiError::SeedError(format!(
                "Unsupported seed file extension: {} (expected .json, .toml, .yaml or .yml)",
                path.display()
            ))),
        }
    }

    pub fn parse(name: &str) -> Result<Self, ApiError> {
        match name {
            "json" => Ok(SeedFormat::Json),
            "toml" => Ok(SeedFormat::Toml),
            "yaml" | "yml" => Ok(SeedFormat::Yaml),
            _ => Err(ApiError::SeedError(format!(
                "Invalid seed format: {} (must be 'json', 'toml' or 'yaml')",
                name
            ))),
        }
    }
}

/// Parse a seed tree from text.
pub fn parse_seed(text: &str, format: SeedFormat) -> Result<Node, ApiError> {
    let root: Node = match format {
        SeedFormat::Json => serde_json::from_str(text)
            .map_err(|e| ApiError::SeedError(format!("Invalid JSON seed: {}", e)))?,
        SeedFormat::Toml => toml::from_str(text)
            .map_err(|e| ApiError::SeedError(format!("Invalid TOML seed: {}", e)))?,
        SeedFormat::Yaml => serde_yaml::from_str(text)
            .map_err(|e| ApiError::SeedError(format!("Invalid YAML seed: {}", e)))?,
    };
    if !root.is_dir() {
        return Err(ApiError::SeedError(
            "Seed root must be a directory".to_string(),
        ));
    }
    root.validate()
        .map_err(|e| ApiError::SeedError(e.to_string()))?;
    Ok(root)
}

/// Load a seed tree from a file, choosing the format by extension.
pub fn load_seed(path: &Path) -> Result<Node, ApiError> {
    let format = SeedFormat::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|e| {
        ApiError::SeedError(format!("Failed to read seed file {}: {}", path.display(), e))
    })?;
    let root = parse_seed(&text, format)?;
    info!(path = %path.display(), nodes = root.count(), "Loaded seed tree");
    Ok(root)
}

/// Serialize a tree in the given format.
pub fn export_seed(root: &Node, format: SeedFormat) -> Result<String, ApiError> {
    match format {
        SeedFormat::Json => serde_json::to_string_pretty(root)
            .map_err(|e| ApiError::SeedError(format!("Failed to encode JSON: {}", e))),
        SeedFormat::Toml => toml::to_string_pretty(root)
            .map_err(|e| ApiError::SeedError(format!("Failed to encode TOML: {}", e))),
        SeedFormat::Yaml => serde_yaml::to_string(root)
            .map_err(|e| ApiError::SeedError(format!("Failed to encode YAML: {}", e))),
    }
}

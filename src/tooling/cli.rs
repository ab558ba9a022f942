//! CLI Tooling
//!
//! Command-line interface over one in-memory desktop session. The tree is
//! seeded at startup and lives only as long as the process.

use crate::concurrency::SharedFs;
use crate::config::{ConfigLoader, DeskConfig};
use crate::error::{ApiError, FsError};
use crate::format::{format_listing, format_long_listing, format_tree};
use crate::seed::{default_seed, export_seed, load_seed, SeedFormat};
use crate::shell::{Shell, ShellOutput};
use crate::types::PathEntry;
use crate::vfs::VirtualFs;
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use parking_lot::Mutex;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;

/// deskfs CLI - In-memory virtual filesystem for a simulated desktop
#[derive(Parser)]
#[command(name = "deskfs")]
#[command(about = "In-memory virtual filesystem for a simulated desktop")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Seed file for the initial tree (.json, .toml, .yaml); default is the built-in desktop
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List a directory
    Ls {
        /// Directory path (~, ~/Home, Home/Projects)
        #[arg(default_value = "~")]
        path: String,
        /// Show a table with kind and size
        #[arg(long, short = 'l')]
        long: bool,
    },
    /// Print a file's content
    Cat {
        /// File path
        path: String,
    },
    /// Show a directory tree
    Tree {
        /// Directory path
        #[arg(default_value = "~")]
        path: String,
    },
    /// Show the items placed on the desktop (children of ~/Home)
    Desktop {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List music tracks and their source URLs
    Music {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the whole tree as a seed document
    Export {
        /// Output format (json, toml or yaml)
        #[arg(long, default_value = "json")]
        format: String,
    },
    /// Run terminal command lines in one session and print their output
    Exec {
        /// Command lines, e.g. "cd Home" "touch notes" "ls"
        #[arg(required = true, num_args = 1..)]
        commands: Vec<String>,
    },
    /// Start an interactive terminal session on stdin/stdout
    Shell,
}

/// CLI context: one filesystem session plus its terminal state.
pub struct CliContext {
    fs: SharedFs,
    shell: Mutex<Shell>,
    config: DeskConfig,
}

impl CliContext {
    /// Create a new CLI context
    ///
    /// `seed` overrides the seed path from configuration.
    pub fn new(seed: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = ConfigLoader::load_or_default(config_path.as_deref())?;
        Self::from_config(seed, config)
    }

    /// Create a CLI context from already-loaded configuration.
    pub fn from_config(seed: Option<PathBuf>, config: DeskConfig) -> Result<Self, ApiError> {
        let seed_path = seed.or_else(|| config.seed.path.clone());
        let root = match &seed_path {
            Some(path) => load_seed(path)?,
            None => default_seed(),
        };
        let fs = VirtualFs::from_root(root)?;
        info!(
            seed = ?seed_path,
            nodes = fs.root().count(),
            "Initialized desktop filesystem"
        );
        Ok(Self::with_fs(fs, config))
    }

    /// Create a context around an existing filesystem.
    pub fn with_fs(fs: VirtualFs, config: DeskConfig) -> Self {
        let shell = Shell::new(&config.shell);
        Self {
            fs: SharedFs::new(fs),
            shell: Mutex::new(shell),
            config,
        }
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    /// Shared handle to the session's filesystem.
    pub fn fs(&self) -> SharedFs {
        self.fs.clone()
    }

    pub fn set_color(&mut self, color: bool) {
        self.config.shell.color = color;
        self.shell.get_mut().set_color(color);
    }

    fn color(&self) -> bool {
        self.config.shell.color
    }

    /// Execute a command, returning its textual output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Ls { path, long } => {
                let entries = self.fs.read(|fs| fs.list(path))?;
                if *long {
                    Ok(format_long_listing(&entries))
                } else {
                    Ok(format_listing(&entries, self.color()))
                }
            }
            Commands::Cat { path } => Ok(self.fs.read(|fs| fs.read_file(path).map(str::to_string))?),
            Commands::Tree { path } => {
                let color = self.color();
                self.fs.read(|fs| {
                    fs.resolve(path)
                        .map(|node| format_tree(node, color))
                        .ok_or_else(|| ApiError::from(FsError::NotFound(path.clone())))
                })
            }
            Commands::Desktop { format } => {
                let items = self.fs.read(|fs| fs.desktop_items());
                format_path_entries(&items, format, "Desktop is empty.")
            }
            Commands::Music { format } => {
                let tracks = self.fs.read(|fs| {
                    fs.music_tracks()
                        .into_iter()
                        .map(|track| {
                            let url = fs.read_file(&track.path).unwrap_or_default().to_string();
                            (track, url)
                        })
                        .collect::<Vec<_>>()
                });
                format_tracks(&tracks, format)
            }
            Commands::Export { format } => {
                let format = SeedFormat::parse(format)?;
                self.fs.read(|fs| export_seed(fs.root(), format))
            }
            Commands::Exec { commands } => {
                let outputs: Vec<String> = commands
                    .iter()
                    .map(|line| self.run_line(line).text)
                    .filter(|text| !text.is_empty())
                    .collect();
                Ok(outputs.join("\n"))
            }
            Commands::Shell => {
                let stdin = std::io::stdin();
                self.run_shell(stdin.lock(), std::io::stdout())?;
                Ok(String::new())
            }
        }
    }

    /// Run one terminal command line against the session.
    pub fn run_line(&self, line: &str) -> ShellOutput {
        let mut shell = self.shell.lock();
        self.fs.write(|fs| shell.execute(line, fs))
    }

    /// Interactive loop: prompt, read a line, run it, until EOF or `exit`.
    pub fn run_shell<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<(), ApiError> {
        write!(output, "{}", self.shell.lock().prompt())?;
        output.flush()?;
        for line in input.lines() {
            let line = line?;
            if line.trim() == "exit" {
                break;
            }
            let result = self.run_line(&line);
            if result.clear {
                write!(output, "\x1b[2J\x1b[H")?;
            } else if !result.text.is_empty() {
                writeln!(output, "{}", result.text.trim_end_matches('\n'))?;
            }
            write!(output, "{}", self.shell.lock().prompt())?;
            output.flush()?;
        }
        writeln!(output)?;
        Ok(())
    }
}

fn check_output_format(format: &str) -> Result<(), ApiError> {
    if format == "text" || format == "json" {
        Ok(())
    } else {
        Err(ApiError::ConfigError(format!(
            "Invalid output format: {} (must be 'text' or 'json')",
            format
        )))
    }
}

fn format_path_entries(items: &[PathEntry], format: &str, empty: &str) -> Result<String, ApiError> {
    check_output_format(format)?;
    if format == "json" {
        return serde_json::to_string_pretty(items)
            .map_err(|e| ApiError::ConfigError(format!("Failed to encode JSON: {}", e)));
    }
    if items.is_empty() {
        return Ok(empty.to_string());
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Name", "Kind", "Path"]);
    for item in items {
        table.add_row(vec![
            item.entry.name.clone(),
            item.entry.kind.to_string(),
            item.path.clone(),
        ]);
    }
    Ok(table.to_string())
}

fn format_tracks(tracks: &[(PathEntry, String)], format: &str) -> Result<String, ApiError> {
    check_output_format(format)?;
    if format == "json" {
        let rows: Vec<serde_json::Value> = tracks
            .iter()
            .map(|(track, url)| {
                serde_json::json!({
                    "name": track.entry.name,
                    "path": track.path,
                    "url": url,
                })
            })
            .collect();
        return serde_json::to_string_pretty(&rows)
            .map_err(|e| ApiError::ConfigError(format!("Failed to encode JSON: {}", e)));
    }
    if tracks.is_empty() {
        return Ok("No tracks found.".to_string());
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Track", "Source"]);
    for (track, url) in tracks {
        table.add_row(vec![track.entry.name.clone(), url.clone()]);
    }
    Ok(table.to_string())
}

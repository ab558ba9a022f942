//! Terminal session
//!
//! Interprets terminal command lines against a [`VirtualFs`], tracking the
//! working directory between calls. Navigation commands (`ls`, `cd`, `cat`,
//! `pwd`) read the tree; `touch`, `mkdir`, `rm` and `mv` go through the same
//! create/delete/rename operations the file manager uses.

use crate::config::ShellConfig;
use crate::error::FsError;
use crate::format::{format_listing, format_tree};
use crate::tree::{display_path, join_path, Node};
use crate::types::{NodeKind, ROOT_ALIAS};
use crate::vfs::{VirtualFs, HOME_PATH};
use owo_colors::OwoColorize;
use tracing::debug;

const HELP_TEXT: &str = "\
Available commands:

  help              Show this help message
  ls [path]         List directory contents
  cd [dir]          Change directory (no argument returns to ~)
  cat <file>        Display file content
  pwd               Print the working directory
  whoami            Print the current user
  fastfetch         Show session information (alias: neofetch)
  tree [path]       Show a directory tree
  touch [name]      Create a file (Untitled.txt unless named)
  mkdir [name]      Create a folder (New Folder unless named)
  rm <path>         Delete a file or folder
  mv <path> <name>  Rename an item in place
  clear             Clear the terminal screen

Quote names containing spaces: cd \"New Folder\"
";

/// Result of one command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellOutput {
    pub text: String,
    /// The terminal should wipe its screen.
    pub clear: bool,
}

impl ShellOutput {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            clear: false,
        }
    }
}

/// Terminal session state
#[derive(Debug, Clone)]
pub struct Shell {
    cwd: Vec<String>,
    user: String,
    color: bool,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(&ShellConfig::default())
    }
}

impl Shell {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            cwd: Vec::new(),
            user: config.user.clone(),
            color: config.color,
        }
    }

    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    /// Working directory as segments; empty at the root.
    pub fn cwd(&self) -> &[String] {
        &self.cwd
    }

    /// Working directory as a `~/…` path.
    pub fn cwd_path(&self) -> String {
        display_path(&self.cwd)
    }

    pub fn prompt(&self) -> String {
        format!("{} $ ", self.cwd_path())
    }

    /// Run one command line.
    pub fn execute(&mut self, line: &str, fs: &mut VirtualFs) -> ShellOutput {
        let tokens = tokenize(line);
        let Some((command, args)) = tokens.split_first() else {
            return ShellOutput::default();
        };
        debug!(command = %command, args = ?args, cwd = %self.cwd_path(), "Executing shell command");

        match command.as_str() {
            "help" => ShellOutput::text(HELP_TEXT),
            "clear" => ShellOutput {
                text: String::new(),
                clear: true,
            },
            "whoami" => ShellOutput::text(self.user.clone()),
            "fastfetch" | "neofetch" => ShellOutput::text(self.cmd_fetch(fs)),
            "pwd" => ShellOutput::text(format!("/{}", self.cwd.join("/"))),
            "ls" => ShellOutput::text(self.cmd_ls(args, fs)),
            "cd" => ShellOutput::text(self.cmd_cd(args, fs)),
            "cat" => ShellOutput::text(self.cmd_cat(args, fs)),
            "tree" => ShellOutput::text(self.cmd_tree(args, fs)),
            "touch" => ShellOutput::text(self.cmd_create("touch", NodeKind::File, args, fs)),
            "mkdir" => ShellOutput::text(self.cmd_create("mkdir", NodeKind::Directory, args, fs)),
            "rm" => ShellOutput::text(self.cmd_rm(args, fs)),
            "mv" => ShellOutput::text(self.cmd_mv(args, fs)),
            _ => ShellOutput::text(format!("deskfs: command not found: {}", command)),
        }
    }

    /// Resolve a command argument to segments.
    ///
    /// `/…` is absolute, `~` and `~/…` are root-relative, anything else is
    /// relative to the working directory. `..` climbs (never above the root)
    /// and `.` is ignored. `~` is not a valid name, so a `~` segment past the
    /// leading root alias names nothing and yields `None`.
    fn target(&self, arg: &str) -> Option<Vec<String>> {
        let (mut segments, rest) = if let Some(rest) = arg.strip_prefix('/') {
            (Vec::new(), rest)
        } else if arg == "~" {
            (Vec::new(), "")
        } else if let Some(rest) = arg.strip_prefix("~/") {
            (Vec::new(), rest)
        } else {
            (self.cwd.clone(), arg)
        };

        for part in rest.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                ROOT_ALIAS => return None,
                name => segments.push(name.to_string()),
            }
        }
        Some(segments)
    }

    fn resolve_target<'a>(&self, arg: &str, fs: &'a VirtualFs) -> Option<&'a Node> {
        self.target(arg).and_then(|t| fs.resolve_segments(&t))
    }

    fn cmd_ls(&self, args: &[String], fs: &VirtualFs) -> String {
        let arg = args.first().map(String::as_str).unwrap_or(".");
        match self.resolve_target(arg, fs).and_then(Node::as_dir) {
            Some(dir) => format_listing(&dir.entries(), self.color),
            None => format!("ls: cannot access '{}': No such file or directory", arg),
        }
    }

    fn cmd_cd(&mut self, args: &[String], fs: &VirtualFs) -> String {
        let Some(arg) = args.first() else {
            self.cwd.clear();
            return String::new();
        };
        match self.target(arg) {
            Some(target) if fs.resolve_segments(&target).is_some_and(Node::is_dir) => {
                self.cwd = target;
                String::new()
            }
            _ => format!("cd: no such file or directory: {}", arg),
        }
    }

    fn cmd_cat(&self, args: &[String], fs: &VirtualFs) -> String {
        let Some(arg) = args.first() else {
            return "cat: missing operand".to_string();
        };
        match self.resolve_target(arg, fs).and_then(Node::as_file) {
            Some(file) => file.content.clone(),
            None => format!("cat: {}: No such file or directory", arg),
        }
    }

    fn cmd_tree(&self, args: &[String], fs: &VirtualFs) -> String {
        let arg = args.first().map(String::as_str).unwrap_or(".");
        match self.resolve_target(arg, fs) {
            Some(node) => format_tree(node, self.color),
            None => format!("tree: {}: No such file or directory", arg),
        }
    }

    fn cmd_fetch(&self, fs: &VirtualFs) -> String {
        let root = fs.root();
        let (files, dirs) = tally(root);
        let home = fs
            .resolve(HOME_PATH)
            .map(|node| node.count().saturating_sub(1))
            .unwrap_or(0);
        let rows = [
            ("OS", "deskfs in-memory desktop".to_string()),
            ("Version", env!("CARGO_PKG_VERSION").to_string()),
            ("Shell", "deskfs-sh".to_string()),
            ("Cwd", self.cwd_path()),
            ("Files", files.to_string()),
            ("Folders", dirs.to_string()),
            ("Home items", home.to_string()),
        ];

        let title = format!("{}@deskfs", self.user);
        let mut out = if self.color {
            format!("{}\n", title.bold().cyan())
        } else {
            format!("{}\n", title)
        };
        out.push_str(&"-".repeat(title.chars().count()));
        for (label, value) in rows {
            out.push('\n');
            if self.color {
                out.push_str(&format!("{}: {}", label.bold().cyan(), value));
            } else {
                out.push_str(&format!("{}: {}", label, value));
            }
        }
        out
    }

    fn cmd_create(
        &self,
        command: &str,
        kind: NodeKind,
        args: &[String],
        fs: &mut VirtualFs,
    ) -> String {
        let parent = self.cwd_path();
        let created = match fs.create(&parent, kind) {
            Ok(name) => name,
            Err(e) => return format!("{}: {}", command, e),
        };
        let Some(requested) = args.first() else {
            return created;
        };

        let created_path = join_path(&parent, &created);
        match fs.rename(&created_path, requested) {
            Ok(name) => name,
            Err(e) => {
                // Roll back so a failed named create leaves no stray item.
                let _ = fs.delete(&created_path);
                format!("{}: {}", command, e)
            }
        }
    }

    fn cmd_rm(&mut self, args: &[String], fs: &mut VirtualFs) -> String {
        let Some(arg) = args.first() else {
            return "rm: missing operand".to_string();
        };
        let not_found = format!("rm: cannot remove '{}': No such file or directory", arg);
        let Some(target) = self.target(arg) else {
            return not_found;
        };
        match fs.delete(&display_path(&target)) {
            Ok(_) => {
                if !target.is_empty() && self.cwd.starts_with(&target) {
                    self.cwd.truncate(target.len() - 1);
                }
                String::new()
            }
            Err(_) => not_found,
        }
    }

    fn cmd_mv(&mut self, args: &[String], fs: &mut VirtualFs) -> String {
        let (Some(arg), Some(new_name)) = (args.first(), args.get(1)) else {
            return "mv: usage: mv <path> <new_name>".to_string();
        };
        let Some(target) = self.target(arg) else {
            return format!("mv: {}", FsError::NotFound(arg.clone()));
        };
        match fs.rename(&display_path(&target), new_name) {
            Ok(name) => {
                if !target.is_empty() && self.cwd.starts_with(&target) {
                    self.cwd[target.len() - 1] = name.clone();
                }
                name
            }
            Err(FsError::Conflict(_)) => "mv: An item with this name already exists".to_string(),
            Err(e) => format!("mv: {}", e),
        }
    }
}

/// Count of files and directories below `node`, excluding `node` itself.
fn tally(node: &Node) -> (usize, usize) {
    let Some(dir) = node.as_dir() else {
        return (0, 0);
    };
    dir.children().fold((0, 0), |(files, dirs), child| {
        let (f, d) = tally(child);
        if child.is_dir() {
            (files + f, dirs + d + 1)
        } else {
            (files + f + 1, dirs + d)
        }
    })
}

/// Split a command line on whitespace, honoring single and double quotes and
/// backslash escapes.
fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"') | (None, '\'') => {
                quote = Some(c);
                in_token = true;
            }
            (None, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
                in_token = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        tokens.push(current);
    }
    tokens
}

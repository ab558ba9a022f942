use clap::Parser;
use deskfs::config::DeskConfig;
use deskfs::tooling::cli::{Cli, CliContext, Commands};
use deskfs::VirtualFs;

fn context() -> CliContext {
    let mut ctx = CliContext::with_fs(VirtualFs::with_default_seed(), DeskConfig::default());
    ctx.set_color(false);
    ctx
}

#[test]
fn parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "deskfs",
        "ls",
        "~/Home",
        "--long",
        "--no-color",
        "--log-level",
        "debug",
    ])
    .unwrap();
    assert!(cli.no_color);
    assert_eq!(cli.log_level.as_deref(), Some("debug"));
    match cli.command {
        Commands::Ls { path, long } => {
            assert_eq!(path, "~/Home");
            assert!(long);
        }
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn parse_defaults() {
    let cli = Cli::try_parse_from(["deskfs", "export"]).unwrap();
    assert!(matches!(cli.command, Commands::Export { ref format } if format == "json"));
    assert!(cli.seed.is_none());
    assert!(cli.config.is_none());

    let cli = Cli::try_parse_from(["deskfs", "tree"]).unwrap();
    assert!(matches!(cli.command, Commands::Tree { ref path } if path == "~"));
}

#[test]
fn parse_rejects_missing_operands() {
    assert!(Cli::try_parse_from(["deskfs", "cat"]).is_err());
    assert!(Cli::try_parse_from(["deskfs", "exec"]).is_err());
    assert!(Cli::try_parse_from(["deskfs", "frobnicate"]).is_err());
}

#[test]
fn desktop_json_contract_has_required_fields() {
    let output = context()
        .execute(&Commands::Desktop {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 8);
    for item in items {
        assert!(item.get("path").and_then(|v| v.as_str()).is_some());
        assert!(item.get("name").and_then(|v| v.as_str()).is_some());
        assert!(item.get("kind").and_then(|v| v.as_str()).is_some());
        assert!(item.get("size").and_then(|v| v.as_u64()).is_some());
    }
    assert!(items
        .iter()
        .any(|i| i["path"] == "~/Home/Music" && i["kind"] == "directory"));
}

#[test]
fn long_listing_is_a_table() {
    let output = context()
        .execute(&Commands::Ls {
            path: "~/Home/Music".to_string(),
            long: true,
        })
        .unwrap();
    assert!(output.contains("Name"));
    assert!(output.contains("lofi-study.mp3"));
    assert!(output.contains("file"));
}

#[test]
fn export_yaml_and_toml_are_accepted() {
    let ctx = context();
    for format in ["yaml", "toml"] {
        let output = ctx
            .execute(&Commands::Export {
                format: format.to_string(),
            })
            .unwrap();
        assert!(output.contains("about-me.txt"), "{format}");
    }
    assert!(ctx
        .execute(&Commands::Export {
            format: "xml".to_string()
        })
        .is_err());
}

#[test]
fn exec_mutations_visible_to_later_commands() {
    let ctx = context();
    ctx.execute(&Commands::Exec {
        commands: vec!["rm ~/Home/Music".to_string()],
    })
    .unwrap();
    let output = ctx
        .execute(&Commands::Music {
            format: "text".to_string(),
        })
        .unwrap();
    assert_eq!(output, "No tracks found.");
}

use deskfs::config::DeskConfig;
use deskfs::seed::{default_seed, export_seed, load_seed, SeedFormat};
use deskfs::tooling::cli::{CliContext, Commands};
use deskfs::ApiError;
use std::fs;
use tempfile::TempDir;

#[test]
fn every_format_exports_and_loads_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let root = default_seed();

    for (format, file_name) in [
        (SeedFormat::Json, "seed.json"),
        (SeedFormat::Toml, "seed.toml"),
        (SeedFormat::Yaml, "seed.yaml"),
    ] {
        let path = temp_dir.path().join(file_name);
        fs::write(&path, export_seed(&root, format).unwrap()).unwrap();
        assert_eq!(load_seed(&path).unwrap(), root, "{file_name}");
    }
}

#[test]
fn load_seed_rejects_unknown_extension_and_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let ini = temp_dir.path().join("seed.ini");
    fs::write(&ini, "x").unwrap();
    assert!(matches!(load_seed(&ini), Err(ApiError::SeedError(_))));
    assert!(load_seed(&temp_dir.path().join("absent.json")).is_err());
}

#[test]
fn load_seed_rejects_mismatched_child_key() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("seed.json");
    fs::write(
        &path,
        r#"{"type":"directory","name":"~","children":{
            "a.txt":{"type":"file","name":"b.txt","content":""}}}"#,
    )
    .unwrap();
    assert!(load_seed(&path).is_err());
}

#[test]
fn cli_context_starts_from_seed_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("seed.json");
    fs::write(
        &path,
        r#"{"type":"directory","name":"~","children":{
            "Home":{"type":"directory","name":"Home","children":{
                "todo.txt":{"type":"file","name":"todo.txt","content":"buy milk"}}}}}"#,
    )
    .unwrap();

    let cli = CliContext::from_config(Some(path), DeskConfig::default()).unwrap();
    let output = cli
        .execute(&Commands::Cat {
            path: "~/Home/todo.txt".to_string(),
        })
        .unwrap();
    assert_eq!(output, "buy milk");
    assert!(cli.fs().read(|fs| !fs.exists("~/Home/Music")));
}

#[test]
fn seed_path_from_config_file_is_used() {
    let temp_dir = TempDir::new().unwrap();
    let seed_path = temp_dir.path().join("seed.yaml");
    fs::write(
        &seed_path,
        "type: directory\nname: \"~\"\nchildren:\n  Home:\n    type: directory\n    name: Home\n    children: {}\n",
    )
    .unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!("[seed]\npath = {:?}\n", seed_path.to_string_lossy()),
    )
    .unwrap();

    let cli = CliContext::new(None, Some(config_path)).unwrap();
    let output = cli
        .execute(&Commands::Desktop {
            format: "text".to_string(),
        })
        .unwrap();
    assert_eq!(output, "Desktop is empty.");
}

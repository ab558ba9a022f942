use deskfs::{DirectoryNode, FsError, Node, NodeKind, VirtualFs};

/// root -> Home -> Projects (empty)
fn projects_fs() -> VirtualFs {
    let home = DirectoryNode::with_children("Home", vec![Node::directory("Projects")]);
    let root = DirectoryNode::with_children("~", vec![Node::from(home)]);
    VirtualFs::from_root(root.into()).unwrap()
}

#[test]
fn create_twice_in_projects_numbers_the_second_file() {
    let mut fs = projects_fs();
    assert_eq!(fs.create("~/Home/Projects", NodeKind::File).unwrap(), "Untitled.txt");
    assert_eq!(
        fs.create("~/Home/Projects", NodeKind::File).unwrap(),
        "Untitled (1).txt"
    );
    assert_eq!(
        fs.create("~/Home/Projects", NodeKind::Directory).unwrap(),
        "New Folder"
    );
    assert_eq!(
        fs.create("~/Home/Projects", NodeKind::Directory).unwrap(),
        "New Folder (1)"
    );
}

#[test]
fn created_node_resolves_empty_with_requested_kind() {
    let mut fs = projects_fs();
    for kind in [NodeKind::File, NodeKind::Directory] {
        let name = fs.create("~/Home", kind).unwrap();
        let node = fs.resolve(&format!("~/Home/{}", name)).unwrap();
        assert_eq!(node.kind(), kind);
        assert!(node.is_empty());
        assert_eq!(node.name(), name);
    }
}

#[test]
fn resolve_is_referentially_consistent() {
    let fs = VirtualFs::with_default_seed();
    for path in ["~", "~/Home", "~/Home/Music/lofi-study.mp3", "Home/Projects"] {
        let first = fs.resolve(path).cloned();
        let second = fs.resolve(path).cloned();
        assert!(first.is_some(), "{path}");
        assert_eq!(first, second);
    }
}

#[test]
fn resolve_accepts_pre_split_segments() {
    let fs = VirtualFs::with_default_seed();
    let node = fs.resolve_segments(&["~", "Home", "", "Music"]).unwrap();
    assert_eq!(node.name(), "Music");
    assert_eq!(fs.resolve_segments::<&str>(&[]).unwrap().name(), "~");
    assert!(fs.resolve_segments(&["Home", "music"]).is_none());
}

#[test]
fn rename_moves_entry_and_old_path_disappears() {
    let mut fs = VirtualFs::with_default_seed();
    let name = fs.rename("~/Home/contact.txt", "reach-me").unwrap();
    assert_eq!(name, "reach-me.txt");

    let node = fs.resolve("~/Home/reach-me.txt").unwrap();
    assert_eq!(node.name(), "reach-me.txt");
    assert!(fs.resolve("~/Home/contact.txt").is_none());
    assert_eq!(
        fs.read_file("~/Home/contact.txt"),
        Err(FsError::NotFound("~/Home/contact.txt".to_string()))
    );
}

#[test]
fn rename_notes_without_extension_keeps_txt() {
    let mut fs = projects_fs();
    let created = fs.create("~/Home", NodeKind::File).unwrap();
    fs.rename(&format!("~/Home/{}", created), "notes").unwrap();
    assert_eq!(fs.rename("~/Home/notes.txt", "notes2").unwrap(), "notes2.txt");
    assert!(fs.exists("~/Home/notes2.txt"));
}

#[test]
fn rename_conflict_keeps_old_entry() {
    let mut fs = VirtualFs::with_default_seed();
    let before = fs.clone();
    let err = fs.rename("~/Home/Pictures", "Music").unwrap_err();
    assert_eq!(err, FsError::Conflict("Music".to_string()));
    assert!(fs.exists("~/Home/Pictures"));
    assert_eq!(fs, before);
}

#[test]
fn rename_directory_keeps_descendants() {
    let mut fs = VirtualFs::with_default_seed();
    fs.rename("~/Home/Projects", "Work").unwrap();
    assert!(fs.exists("~/Home/Work/e-commerce-platform.md"));
    assert!(!fs.exists("~/Home/Projects/e-commerce-platform.md"));
}

#[test]
fn delete_removes_whole_subtree() {
    let mut fs = VirtualFs::with_default_seed();
    let removed = fs.delete("~/Home/Music").unwrap();
    assert_eq!(removed.name(), "Music");
    for path in [
        "~/Home/Music",
        "~/Home/Music/lofi-study.mp3",
        "~/Home/Music/tropical-summer.mp3",
    ] {
        assert!(fs.resolve(path).is_none(), "{path}");
    }
    assert!(fs.music_tracks().is_empty());
}

#[test]
fn delete_missing_reports_not_found_without_change() {
    let mut fs = VirtualFs::with_default_seed();
    let before = fs.clone();
    assert!(matches!(fs.delete("~/Home/ghost.txt"), Err(FsError::NotFound(_))));
    assert!(matches!(fs.delete("~/Nope/ghost.txt"), Err(FsError::NotFound(_))));
    assert!(matches!(fs.delete("~"), Err(FsError::NotFound(_))));
    assert_eq!(fs, before);
}

#[test]
fn save_replaces_content_wholesale() {
    let mut fs = VirtualFs::with_default_seed();
    fs.write_file("~/Home/about-me.txt", "short").unwrap();
    assert_eq!(fs.read_file("~/Home/about-me.txt").unwrap(), "short");
    assert_eq!(
        fs.write_file("~/Home/Music", "x"),
        Err(FsError::IsADirectory("~/Home/Music".to_string()))
    );
}

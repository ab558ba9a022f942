use deskfs::tree::{resolve, split_path, unique_name};
use deskfs::{DirectoryNode, Node, NodeKind, VirtualFs};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 _-]{1,8}(\\.(txt|md|mp3))?"
}

proptest! {
    #[test]
    fn unique_name_is_always_free(
        existing in prop::collection::btree_set(
            prop_oneof![
                Just("Untitled.txt".to_string()),
                (1u32..6).prop_map(|n| format!("Untitled ({}).txt", n)),
                name_strategy(),
            ],
            0..12,
        ),
        base in prop_oneof![Just("Untitled".to_string()), Just("Untitled.txt".to_string()), name_strategy()],
        is_file in any::<bool>(),
    ) {
        let kind = if is_file { NodeKind::File } else { NodeKind::Directory };
        let dir = DirectoryNode::with_children("d", existing.iter().map(|n| Node::file(n.clone(), "")));
        let name = unique_name(&dir, &base, kind);
        prop_assert!(!dir.contains(&name));
        if is_file {
            prop_assert!(name.ends_with(".txt"));
        }
    }

    #[test]
    fn rename_then_resolve_new_name(new_name in "[A-Za-z0-9_-]{1,10}") {
        let mut fs = VirtualFs::with_default_seed();
        match fs.rename("~/Home/Documents/README.md", &new_name) {
            Ok(final_name) => {
                prop_assert_eq!(&final_name, &format!("{}.md", new_name));
                let node = fs.resolve(&format!("~/Home/Documents/{}", final_name)).unwrap();
                prop_assert_eq!(node.name(), final_name.as_str());
                prop_assert!(final_name == "README.md" || fs.resolve("~/Home/Documents/README.md").is_none());
            }
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }

    #[test]
    fn delete_then_resolve_fails(index in 0usize..16) {
        let mut fs = VirtualFs::with_default_seed();
        let mut paths = Vec::new();
        collect_paths(fs.root(), "~", &mut paths);
        let path = paths[index % paths.len()].clone();

        fs.delete(&path).unwrap();
        prop_assert!(fs.resolve(&path).is_none());
        prop_assert!(resolve(&split_path(&path), fs.root()).is_none());
    }
}

fn collect_paths(node: &Node, path: &str, out: &mut Vec<String>) {
    if let Some(dir) = node.as_dir() {
        for child in dir.children() {
            let child_path = format!("{}/{}", path, child.name());
            out.push(child_path.clone());
            collect_paths(child, &child_path, out);
        }
    }
}

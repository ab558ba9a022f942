use deskfs::config::ShellConfig;
use deskfs::shell::Shell;
use deskfs::VirtualFs;

fn session() -> (Shell, VirtualFs) {
    let config = ShellConfig {
        user: "visitor".to_string(),
        color: false,
    };
    (Shell::new(&config), VirtualFs::with_default_seed())
}

fn run(shell: &mut Shell, fs: &mut VirtualFs, line: &str) -> String {
    shell.execute(line, fs).text
}

#[test]
fn navigation_round_trip() {
    let (mut shell, mut fs) = session();
    assert_eq!(run(&mut shell, &mut fs, "pwd"), "/");
    assert_eq!(run(&mut shell, &mut fs, "ls"), "Home/");
    assert_eq!(run(&mut shell, &mut fs, "cd Home"), "");
    assert_eq!(shell.prompt(), "~/Home $ ");
    assert_eq!(
        run(&mut shell, &mut fs, "ls"),
        "Documents/  Downloads/  Music/  Pictures/  Projects/  about-me.txt  contact.txt  resume.pdf"
    );
    assert_eq!(run(&mut shell, &mut fs, "cd Projects"), "");
    assert_eq!(run(&mut shell, &mut fs, "pwd"), "/Home/Projects");
    assert_eq!(run(&mut shell, &mut fs, "cd .."), "");
    assert_eq!(run(&mut shell, &mut fs, "pwd"), "/Home");
    assert_eq!(run(&mut shell, &mut fs, "cd"), "");
    assert_eq!(run(&mut shell, &mut fs, "pwd"), "/");
    assert_eq!(run(&mut shell, &mut fs, "whoami"), "visitor");
}

#[test]
fn cat_reads_relative_and_absolute_paths() {
    let (mut shell, mut fs) = session();
    run(&mut shell, &mut fs, "cd Home/Documents");
    assert_eq!(
        run(&mut shell, &mut fs, "cat README.md"),
        "This directory is for your documents."
    );
    assert_eq!(
        run(&mut shell, &mut fs, "cat ../Music/lofi-study.mp3"),
        run(&mut shell, &mut fs, "cat /Home/Music/lofi-study.mp3")
    );
    assert_eq!(
        run(&mut shell, &mut fs, "cat ghost.txt"),
        "cat: ghost.txt: No such file or directory"
    );
    assert_eq!(
        run(&mut shell, &mut fs, "cat ~/Home"),
        "cat: ~/Home: No such file or directory"
    );
    assert_eq!(run(&mut shell, &mut fs, "cat"), "cat: missing operand");
}

#[test]
fn errors_leave_cwd_unchanged() {
    let (mut shell, mut fs) = session();
    run(&mut shell, &mut fs, "cd Home");
    assert_eq!(
        run(&mut shell, &mut fs, "cd Nowhere"),
        "cd: no such file or directory: Nowhere"
    );
    assert_eq!(
        run(&mut shell, &mut fs, "ls Nowhere"),
        "ls: cannot access 'Nowhere': No such file or directory"
    );
    assert_eq!(shell.cwd_path(), "~/Home");
}

#[test]
fn create_rename_delete_through_terminal() {
    let (mut shell, mut fs) = session();
    run(&mut shell, &mut fs, "cd Home/Downloads");
    assert_eq!(run(&mut shell, &mut fs, "touch"), "Untitled.txt");
    assert_eq!(run(&mut shell, &mut fs, "touch"), "Untitled (1).txt");
    assert_eq!(run(&mut shell, &mut fs, "mkdir \"Saved Pages\""), "Saved Pages");
    assert_eq!(run(&mut shell, &mut fs, "touch notes"), "notes.txt");
    assert_eq!(run(&mut shell, &mut fs, "mv notes.txt todo"), "todo.txt");
    assert_eq!(
        run(&mut shell, &mut fs, "mv todo.txt \"Untitled (1).txt\""),
        "mv: An item with this name already exists"
    );
    assert_eq!(run(&mut shell, &mut fs, "rm Untitled.txt"), "");
    assert_eq!(
        run(&mut shell, &mut fs, "ls"),
        "Saved Pages/  Untitled (1).txt  todo.txt"
    );
    assert_eq!(
        run(&mut shell, &mut fs, "rm Untitled.txt"),
        "rm: cannot remove 'Untitled.txt': No such file or directory"
    );
    assert!(fs.exists("~/Home/Downloads/Saved Pages"));
}

#[test]
fn tree_and_help() {
    let (mut shell, mut fs) = session();
    let tree = run(&mut shell, &mut fs, "tree ~/Home/Projects");
    assert_eq!(
        tree,
        "Projects/\n├── e-commerce-platform.md\n└── real-time-chat-app.md\n"
    );
    let help = run(&mut shell, &mut fs, "help");
    for command in ["ls", "cd", "cat", "pwd", "touch", "mkdir", "rm", "mv", "clear"] {
        assert!(help.contains(command), "{command}");
    }
}

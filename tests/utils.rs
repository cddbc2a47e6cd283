#![allow(dead_code)]

use git2::{IndexAddOption, Repository, RepositoryInitOptions, Signature};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;
use walkdir::WalkDir;

/// Whether a `git` executable is on the PATH. Tests driving the real
/// executable return early without it.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// A repository on disk that tests can clone from.
pub struct FixtureRepo {
    repo: Repository,
    pub path: PathBuf,
    _dir: TempDir,
}

impl FixtureRepo {
    /// Creates a repository on branch `main` whose first commit holds `files`.
    pub fn new(files: &[(&str, &str)]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("templates");
        let mut options = RepositoryInitOptions::new();
        options.initial_head("main");
        let repo = Repository::init_opts(&path, &options).unwrap();

        let fixture = Self { repo, path, _dir: dir };
        fixture.commit(files, "initial");
        fixture
    }

    /// Writes `files` and commits them on the current branch.
    pub fn commit(&self, files: &[(&str, &str)], message: &str) {
        for (relative, content) in files {
            let file = self.path.join(relative);
            fs::create_dir_all(file.parent().unwrap()).unwrap();
            fs::write(file, content).unwrap();
        }

        let mut index = self.repo.index().unwrap();
        index.add_all(["*"], IndexAddOption::DEFAULT, None).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();

        let signature = signature();
        let parent = self.repo.head().ok().and_then(|head| head.peel_to_commit().ok());
        let parents = parent.iter().collect::<Vec<_>>();
        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .unwrap();
    }

    /// Tags the current commit; annotated tags also appear peeled (`^{}`) in `ls-remote`.
    pub fn tag(&self, name: &str, annotated: bool) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        if annotated {
            self.repo.tag(name, head.as_object(), &signature(), name, false).unwrap();
        } else {
            self.repo.tag_lightweight(name, head.as_object(), false).unwrap();
        }
    }

    pub fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn signature() -> Signature<'static> {
    Signature::now("tigr81 tests", "tests@example.com").unwrap()
}

fn relative_files(dir: &Path) -> HashSet<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect()
}

/// Prints the files present in only one of the two directories.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let actual_files = relative_files(actual);
    let expected_files = relative_files(expected);

    println!("\n=== Directory Comparison ===");
    for file in actual_files.difference(&expected_files) {
        println!("  + {file:?}");
    }
    for file in expected_files.difference(&actual_files) {
        println!("  - {file:?}");
    }
    for file in actual_files.intersection(&expected_files) {
        if fs::read(actual.join(file)).unwrap() != fs::read(expected.join(file)).unwrap() {
            println!("  ~ {file:?}");
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts two trees hold the same files with the same content.
pub fn assert_dirs_equal(actual: &Path, expected: &Path) {
    if dir_diff::is_different(actual, expected).unwrap() {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}

/// Builds a directory tree from `(path, content)` pairs.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let file = root.join(relative);
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(file, content).unwrap();
    }
}

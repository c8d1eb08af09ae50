use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{OutputSet, WritePolicy};

/// One filesystem action, reported to the user once the run is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteEvent {
    DirectoryCreated(PathBuf),
    DirectoryExists(PathBuf),
    FileWritten(PathBuf),
    FileKept(PathBuf),
}

/// Materializes `output` under `root`.
///
/// Directories that already exist are left alone. Files are overwritten
/// unless their policy is [`WritePolicy::KeepExisting`] and they are
/// already present. Any I/O error aborts the run.
pub fn write_output(root: &Path, output: &OutputSet) -> Result<Vec<WriteEvent>> {
    let mut events = Vec::with_capacity(output.directories.len() + output.files.len());

    for dir in &output.directories {
        let target = root.join(dir);
        if target.is_dir() {
            events.push(WriteEvent::DirectoryExists(dir.clone()));
            continue;
        }
        fs::create_dir_all(&target)
            .with_context(|| format!("failed to create directory {}", target.display()))?;
        events.push(WriteEvent::DirectoryCreated(dir.clone()));
    }

    for file in &output.files {
        let target = root.join(&file.path);
        if file.policy == WritePolicy::KeepExisting && target.exists() {
            events.push(WriteEvent::FileKept(file.path.clone()));
            continue;
        }
        fs::write(&target, &file.contents)
            .with_context(|| format!("failed to write {}", target.display()))?;
        events.push(WriteEvent::FileWritten(file.path.clone()));
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answers;
    use crate::templates::{render, TemplateContext};
    use tempfile::TempDir;

    fn ctx() -> TemplateContext {
        TemplateContext {
            year: 2026,
            directory_name: "demo".to_string(),
        }
    }

    #[test]
    fn test_classic_scenario_on_disk() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let output = render(&Answers::classic("app"), &ctx());

        write_output(root, &output).unwrap();

        for sub in ["include", "src", "lib", "tests"] {
            assert!(root.join(sub).is_dir(), "{sub} should exist");
        }
        let makefile = fs::read_to_string(root.join("Makefile")).unwrap();
        assert!(makefile.contains("NAME = app"));
        let main = fs::read_to_string(root.join("main.c")).unwrap();
        assert!(main.contains("Hello, World!"));
        for file in [".gitignore", "tests/Makefile", "include/demo.h", "include/lib.h", ".clang-format", ".clang-tidy"] {
            assert!(root.join(file).is_file(), "{file} should exist");
        }
    }

    #[test]
    fn test_custom_scenario_without_features() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let output = render(&Answers::custom("x", false, false, false), &ctx());

        write_output(root, &output).unwrap();

        assert!(root.join("include").is_dir());
        assert!(root.join("src").is_dir());
        assert!(!root.join("lib").exists());
        assert!(!root.join("tests").exists());
        assert!(!root.join(".clang-format").exists());

        let makefile = fs::read_to_string(root.join("Makefile")).unwrap();
        assert!(!makefile.contains("lib/*.c"));
        assert!(!makefile.contains("make -C tests"));
    }

    #[test]
    fn test_running_twice_is_fine() {
        let dir = TempDir::new().unwrap();
        let output = render(&Answers::classic("app"), &ctx());

        let first = write_output(dir.path(), &output).unwrap();
        let second = write_output(dir.path(), &output).unwrap();

        assert!(first.contains(&WriteEvent::DirectoryCreated(PathBuf::from("lib"))));
        assert!(second.contains(&WriteEvent::DirectoryExists(PathBuf::from("lib"))));
        assert!(second.contains(&WriteEvent::FileKept(PathBuf::from("main.c"))));
        assert!(second.contains(&WriteEvent::FileWritten(PathBuf::from("Makefile"))));
    }

    #[test]
    fn test_existing_main_is_preserved() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("main.c"), "int main(void) { return 42; }\n").unwrap();

        write_output(root, &render(&Answers::classic("app"), &ctx())).unwrap();

        assert_eq!(
            fs::read_to_string(root.join("main.c")).unwrap(),
            "int main(void) { return 42; }\n"
        );
    }

    #[test]
    fn test_other_files_are_overwritten() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("Makefile"), "stale").unwrap();
        fs::write(root.join(".gitignore"), "stale").unwrap();

        write_output(root, &render(&Answers::classic("fresh"), &ctx())).unwrap();

        assert!(fs::read_to_string(root.join("Makefile")).unwrap().contains("NAME = fresh"));
        assert!(fs::read_to_string(root.join(".gitignore")).unwrap().ends_with("fresh"));
    }

    #[test]
    fn test_existing_directory_contents_survive() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("src")).unwrap();
        fs::write(root.join("src/game.c"), "void game(void) {}\n").unwrap();

        write_output(root, &render(&Answers::custom("x", false, false, false), &ctx())).unwrap();

        assert!(root.join("src/game.c").is_file());
    }

    #[test]
    fn test_io_errors_propagate() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        // A regular file where a directory is expected.
        fs::write(root.join("include"), "not a directory").unwrap();

        let err = write_output(root, &render(&Answers::classic("app"), &ctx())).unwrap_err();
        assert!(err.to_string().contains("include"));
    }
}

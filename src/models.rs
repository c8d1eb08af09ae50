use std::path::PathBuf;

/// Which prompt path the user picked after naming the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// Every optional feature on, plus the clang linter configs.
    Classic,
    /// Each optional feature toggled on its own.
    Custom,
}

/// Everything collected from the prompt sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    /// Name of the produced executable, never blank.
    pub binary_name: String,
    pub mode: InitMode,
    /// Whether generated files start with the Epitech banner.
    pub epitech_header: bool,
    /// Whether a `tests/` directory with its own Makefile is generated.
    pub unit_tests: bool,
    /// Whether a `lib/` directory and `include/lib.h` are generated.
    pub lib: bool,
}

impl Answers {
    pub fn classic(binary_name: impl Into<String>) -> Self {
        Self {
            binary_name: binary_name.into(),
            mode: InitMode::Classic,
            epitech_header: true,
            unit_tests: true,
            lib: true,
        }
    }

    pub fn custom(binary_name: impl Into<String>, epitech_header: bool, unit_tests: bool, lib: bool) -> Self {
        Self {
            binary_name: binary_name.into(),
            mode: InitMode::Custom,
            epitech_header,
            unit_tests,
            lib,
        }
    }
}

/// How a file is treated when it is already on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    Overwrite,
    KeepExisting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub contents: String,
    pub policy: WritePolicy,
}

/// Directories and files a run produces, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSet {
    pub directories: Vec<PathBuf>,
    pub files: Vec<OutputFile>,
}

#[cfg(test)]
impl OutputSet {
    pub fn file(&self, path: &str) -> Option<&OutputFile> {
        self.files.iter().find(|f| f.path == PathBuf::from(path))
    }
}

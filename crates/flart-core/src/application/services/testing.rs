//! In-crate fakes for service unit tests.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::{
    application::{
        ApplicationError,
        ports::{ConfirmationPrompt, DirEntry, Filesystem, PackageManifest, Toolchain},
    },
    domain::{CodegenMode, Dependency},
    error::FlartResult,
};

#[derive(Debug, Default)]
struct FsState {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    fail_on: Option<PathBuf>,
}

/// Shared-state filesystem; clones observe the same tree.
#[derive(Debug, Clone, Default)]
pub struct FakeFs(Arc<Mutex<FsState>>);

impl FakeFs {
    pub fn with_file(self, path: &str, content: &str) -> Self {
        {
            let mut state = self.0.lock().unwrap();
            let path = PathBuf::from(path);
            let mut dir = path.parent().map(Path::to_path_buf);
            while let Some(d) = dir {
                state.dirs.insert(d.clone());
                dir = d.parent().map(Path::to_path_buf);
            }
            state.files.insert(path, content.to_string());
        }
        self
    }

    pub fn failing_on(self, path: &str) -> Self {
        self.0.lock().unwrap().fail_on = Some(PathBuf::from(path));
        self
    }

    pub fn read(&self, path: &str) -> Option<String> {
        self.0.lock().unwrap().files.get(Path::new(path)).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.0.lock().unwrap().files.len()
    }
}

impl Filesystem for FakeFs {
    fn create_dir_all(&self, path: &Path) -> FlartResult<()> {
        let mut state = self.0.lock().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            state.dirs.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> FlartResult<()> {
        let mut state = self.0.lock().unwrap();
        if state.fail_on.as_deref() == Some(path) {
            return Err(ApplicationError::filesystem("write", path, "injected failure").into());
        }
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn append_file(&self, path: &Path, content: &str) -> FlartResult<()> {
        let mut state = self.0.lock().unwrap();
        match state.files.get_mut(path) {
            Some(existing) => {
                existing.push_str(content);
                Ok(())
            }
            None => Err(ApplicationError::filesystem("append to", path, "not found").into()),
        }
    }

    fn read_to_string(&self, path: &Path) -> FlartResult<String> {
        self.read(path.to_str().unwrap_or_default())
            .ok_or_else(|| ApplicationError::filesystem("read", path, "not found").into())
    }

    fn list_dir(&self, path: &Path) -> FlartResult<Vec<DirEntry>> {
        let state = self.0.lock().unwrap();
        let files = state
            .files
            .keys()
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name()?.to_str().map(DirEntry::file));
        let dirs = state
            .dirs
            .iter()
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name()?.to_str().map(DirEntry::dir));
        Ok(files.chain(dirs).collect())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.0.lock().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path)
    }
}

/// Records every tool invocation as a command line.
#[derive(Debug, Clone, Default)]
pub struct FakeToolchain {
    calls: Arc<Mutex<Vec<String>>>,
    fail_format: bool,
}

impl FakeToolchain {
    /// Every `dart format` call fails after being recorded.
    pub fn failing_format() -> Self {
        Self {
            fail_format: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Toolchain for FakeToolchain {
    fn add_dependency(&self, dependency: &Dependency) -> FlartResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("flutter pub add {dependency}"));
        Ok(())
    }

    fn run_code_generation(&self, mode: CodegenMode) -> FlartResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("dart run build_runner {mode}"));
        Ok(())
    }

    fn format_file(&self, path: &Path) -> FlartResult<()> {
        let command = format!("dart format {}", path.display());
        self.calls.lock().unwrap().push(command.clone());
        if self.fail_format {
            return Err(ApplicationError::external_tool(command, "exit status 65").into());
        }
        Ok(())
    }
}

/// Manifest declaring a fixed package name and dependency list.
#[derive(Debug, Clone, Default)]
pub struct FakeManifest {
    pub name: Option<String>,
    pub declared: Vec<Dependency>,
}

impl PackageManifest for FakeManifest {
    fn package_name(&self) -> Option<String> {
        self.name.clone()
    }

    fn declares(&self, dependency: &Dependency) -> FlartResult<bool> {
        Ok(self.declared.contains(dependency))
    }
}

/// Prompt with a canned answer that counts how often it was asked.
#[derive(Debug, Clone, Default)]
pub struct FakePrompt {
    pub answer: bool,
    pub asked: Arc<Mutex<usize>>,
}

impl FakePrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Arc::default(),
        }
    }

    pub fn times_asked(&self) -> usize {
        *self.asked.lock().unwrap()
    }
}

impl ConfirmationPrompt for FakePrompt {
    fn confirm_overwrite(&self, _existing: &[PathBuf]) -> FlartResult<bool> {
        *self.asked.lock().unwrap() += 1;
        Ok(self.answer)
    }
}

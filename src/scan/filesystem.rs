use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

pub const REQUIREMENTS_FILE: &str = "requirements.txt";

const VCS_DIRS: [&str; 3] = [".git", ".hg", ".svn"];

/// Python sources under `root`, skipping VCS metadata and any ignored path component.
pub fn list_python_files(root: &Path, ignored: &[String]) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_ignored(entry, ignored))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "py"))
        .map(|entry| entry.path().to_path_buf())
        .collect()
}

fn is_ignored(entry: &DirEntry, ignored: &[String]) -> bool {
    let name = entry.file_name().to_string_lossy();
    VCS_DIRS.contains(&name.as_ref()) || ignored.iter().any(|skip| skip == name.as_ref())
}

/// True iff `requirements.txt` is a direct child of `dirpath`.
pub fn dir_contains_requirements(dirpath: &Path) -> std::io::Result<bool> {
    for entry in std::fs::read_dir(dirpath)? {
        if entry?.file_name() == REQUIREMENTS_FILE {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_directory_has_no_requirements() {
        let dir = TempDir::new().expect("temp dir should be created");
        assert!(!dir_contains_requirements(dir.path()).expect("dir should be readable"));
    }

    #[test]
    fn direct_child_requirements_is_detected() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join(REQUIREMENTS_FILE), "requests\n").expect("write requirements");
        assert!(dir_contains_requirements(dir.path()).expect("dir should be readable"));
    }

    #[test]
    fn nested_requirements_is_not_detected() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("app")).expect("nested dir should create");
        fs::write(dir.path().join("app").join(REQUIREMENTS_FILE), "flask\n")
            .expect("write nested requirements");
        fs::write(dir.path().join("requirements-dev.txt"), "pytest\n").expect("write dev file");
        assert!(!dir_contains_requirements(dir.path()).expect("dir should be readable"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        assert!(dir_contains_requirements(&dir.path().join("gone")).is_err());
    }

    #[test]
    fn python_listing_skips_vcs_and_ignored_components() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join(".git/hooks")).expect("git dir should create");
        fs::create_dir_all(dir.path().join("pkg")).expect("pkg dir should create");
        fs::create_dir_all(dir.path().join("docs")).expect("docs dir should create");
        fs::write(dir.path().join(".git/hooks/hook.py"), "import os").expect("hook write");
        fs::write(dir.path().join("pkg/core.py"), "import os").expect("core write");
        fs::write(dir.path().join("pkg/notes.txt"), "import os").expect("notes write");
        fs::write(dir.path().join("docs/conf.py"), "import sphinx").expect("conf write");

        let files = list_python_files(dir.path(), &["docs".to_string()]);
        assert_eq!(files, vec![dir.path().join("pkg/core.py")]);
    }
}

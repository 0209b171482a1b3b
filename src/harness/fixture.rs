//! Fixture directories and their transient output
//!
//! A fixture's `out/` (and for web fixtures `dist/`) directory is emptied before every scenario so
//! nothing from a previous run can mask a failure, e.g. a `data.json` copied by an earlier scenario
//! hiding a "module not found" error.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tsconform_core::Target;

use super::error::HarnessError;

/// One fixture project on disk.
#[derive(Debug, Clone)]
pub struct Fixture {
    target: Target,
    id: String,
    dir: PathBuf,
}

impl Fixture {
    pub fn new(fixtures_root: &Path, target: Target, id: &str) -> Self {
        Self {
            target,
            id: id.to_string(),
            dir: fixtures_root.join(target.as_str()).join(id),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }

    pub fn tsconfig(&self) -> PathBuf {
        self.dir.join("tsconfig.json")
    }

    pub fn webpack_config(&self) -> PathBuf {
        self.dir.join("webpack.config.js")
    }

    /// Directory webpack writes to and the static server serves.
    pub fn bundle_dir(&self) -> PathBuf {
        self.dir.join("dist")
    }

    /// Resolve a fixture-relative path.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.join(relative)
    }

    /// Empty every output directory of this fixture, creating missing ones.
    pub async fn reset(&self) -> Result<(), HarnessError> {
        for name in self.target.output_dirs() {
            empty_dir(&self.dir.join(name)).await?;
        }
        tracing::debug!(fixture = %self.id, target = %self.target, "reset output directories");
        Ok(())
    }

    /// Copy a side-car file within the fixture, creating parent directories of `to`.
    pub async fn copy(&self, from: &str, to: &str) -> Result<(), HarnessError> {
        let source = self.path(from);
        let dest = self.path(to);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(HarnessError::io("create", parent))?;
        }
        fs::copy(&source, &dest).await.map_err(HarnessError::io("copy", &source))?;
        tracing::debug!(fixture = %self.id, from, to, "copied side-car file");
        Ok(())
    }
}

/// Make `path` an existing, empty directory without removing the directory itself.
pub async fn empty_dir(path: &Path) -> Result<(), HarnessError> {
    let mut entries = match fs::read_dir(path).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return fs::create_dir_all(path).await.map_err(HarnessError::io("create", path));
        }
        Err(e) => return Err(HarnessError::io("read", path)(e)),
    };

    while let Some(entry) = entries.next_entry().await.map_err(HarnessError::io("read", path))? {
        let entry_path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .map_err(HarnessError::io("inspect", &entry_path))?;
        let removed = if file_type.is_dir() {
            fs::remove_dir_all(&entry_path).await
        } else {
            fs::remove_file(&entry_path).await
        };
        removed.map_err(HarnessError::io("remove", &entry_path))?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn is_empty_dir(path: &Path) -> bool {
        path.is_dir() && std::fs::read_dir(path).unwrap().next().is_none()
    }

    #[test]
    fn test_paths() {
        let fixture = Fixture::new(Path::new("fixtures"), Target::Web, "preact-h");
        assert_eq!(fixture.dir(), Path::new("fixtures/web/preact-h"));
        assert_eq!(fixture.tsconfig(), PathBuf::from("fixtures/web/preact-h/tsconfig.json"));
        assert_eq!(fixture.webpack_config(), PathBuf::from("fixtures/web/preact-h/webpack.config.js"));
        assert_eq!(fixture.bundle_dir(), PathBuf::from("fixtures/web/preact-h/dist"));
    }

    #[tokio::test]
    async fn test_reset_creates_missing_dirs() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("web/app")).unwrap();
        let fixture = Fixture::new(root.path(), Target::Web, "app");

        fixture.reset().await.unwrap();

        assert!(is_empty_dir(&fixture.path("out")));
        assert!(is_empty_dir(&fixture.path("dist")));
    }

    #[tokio::test]
    async fn test_reset_clears_files_and_subdirs_twice() {
        let root = tempfile::tempdir().unwrap();
        let fixture = Fixture::new(root.path(), Target::Node, "json-array-require");
        std::fs::create_dir_all(fixture.path("out/mymodule")).unwrap();
        std::fs::write(fixture.path("out/data.json"), "[]").unwrap();
        std::fs::write(fixture.path("out/mymodule/index.js"), "").unwrap();
        std::fs::create_dir_all(fixture.path("src")).unwrap();
        std::fs::write(fixture.path("src/main.ts"), "").unwrap();

        fixture.reset().await.unwrap();
        assert!(is_empty_dir(&fixture.path("out")));

        fixture.reset().await.unwrap();
        assert!(is_empty_dir(&fixture.path("out")));

        // sources are untouched and node fixtures have no bundle dir
        assert!(fixture.path("src/main.ts").exists());
        assert!(!fixture.path("dist").exists());
    }

    #[tokio::test]
    async fn test_copy_creates_parents() {
        let root = tempfile::tempdir().unwrap();
        let fixture = Fixture::new(root.path(), Target::Node, "commonjs-typed-named-require");
        std::fs::create_dir_all(fixture.path("src/mymodule")).unwrap();
        std::fs::write(fixture.path("src/mymodule/package.json"), r#"{"main":"mymodule.js"}"#).unwrap();

        fixture
            .copy("src/mymodule/package.json", "out/mymodule/package.json")
            .await
            .unwrap();

        let copied = std::fs::read_to_string(fixture.path("out/mymodule/package.json")).unwrap();
        assert_eq!(copied, r#"{"main":"mymodule.js"}"#);
    }

    #[tokio::test]
    async fn test_copy_missing_source_is_io_error() {
        let root = tempfile::tempdir().unwrap();
        let fixture = Fixture::new(root.path(), Target::Node, "missing");
        let err = fixture.copy("src/data.json", "out/data.json").await.unwrap_err();
        assert!(matches!(err, HarnessError::Io { action: "copy", .. }));
    }
}

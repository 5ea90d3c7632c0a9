use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::{Catalog, RenderParams};
use crate::error::MaterializeError;
use crate::fs::Filesystem;
use crate::tree::{ensure_relative, TreeSpec};

/// What a successful materialization created, in write order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Materialized {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Writes a [`TreeSpec`] rendered through a [`Catalog`] beneath a project root.
pub struct Materializer<'a> {
    catalog: &'a Catalog,
    spec: &'a TreeSpec,
}

impl<'a> Materializer<'a> {
    pub fn new(catalog: &'a Catalog, spec: &'a TreeSpec) -> Self {
        Self { catalog, spec }
    }

    /// Creates `root`, every declared directory, then every declared file.
    ///
    /// Stops at the first failure and leaves whatever was already written in
    /// place. An existing `root` is reused and existing files are overwritten.
    ///
    /// # Errors
    ///
    /// [`MaterializeError::Filesystem`] when a directory or file operation
    /// fails, [`MaterializeError::UnknownTemplate`] when an entry references a
    /// template missing from the catalog, [`MaterializeError::InvalidPath`]
    /// when an entry would escape `root`.
    pub fn materialize<F>(
        &self,
        fs: &F,
        root: &Path,
        params: &RenderParams,
    ) -> Result<Materialized, MaterializeError>
    where
        F: Filesystem + ?Sized,
    {
        info!(
            root = %root.display(),
            directories = self.spec.directories().len(),
            files = self.spec.files().len(),
            "materializing project tree"
        );

        create_dir(fs, root)?;

        let mut report = Materialized::default();
        for dir in self.spec.directories() {
            ensure_relative(dir)?;
            let path = root.join(dir);
            debug!(path = %path.display(), "creating directory");
            create_dir(fs, &path)?;
            report.directories.push(path);
        }

        for entry in self.spec.files() {
            ensure_relative(&entry.path)?;
            let contents = self.catalog.render(entry.template, params)?;
            let path = root.join(&entry.path);
            debug!(path = %path.display(), template = %entry.template, "writing file");
            fs.write(&path, &contents)
                .map_err(|source| MaterializeError::Filesystem {
                    path: path.clone(),
                    source,
                })?;
            report.files.push(path);
        }

        info!(files = report.files.len(), "project tree written");
        Ok(report)
    }
}

fn create_dir<F>(fs: &F, path: &Path) -> Result<(), MaterializeError>
where
    F: Filesystem + ?Sized,
{
    fs.create_dir_all(path)
        .map_err(|source| MaterializeError::Filesystem {
            path: path.to_path_buf(),
            source,
        })
}

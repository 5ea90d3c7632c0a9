//! Ordered directory and file layout of each project skeleton.

use std::collections::HashSet;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{ids, Catalog, TemplateId};
use crate::error::MaterializeError;

/// Skeleton variant driven through the materializer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Minimal,
    Full,
}

impl Variant {
    pub fn catalog(self) -> Catalog {
        match self {
            Variant::Minimal => Catalog::minimal(),
            Variant::Full => Catalog::full(),
        }
    }

    pub fn tree(self) -> TreeSpec {
        match self {
            Variant::Minimal => TreeSpec::minimal(),
            Variant::Full => TreeSpec::full(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Minimal => write!(f, "minimal"),
            Variant::Full => write!(f, "full"),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimal" => Ok(Variant::Minimal),
            "full" => Ok(Variant::Full),
            _ => Err(format!("Unknown variant: {s} (expected minimal or full)")),
        }
    }
}

const COMMON_DIRECTORIES: &[&str] = &[
    "apps",
    "apps/frontend",
    "apps/frontend/src",
    "apps/frontend/src/utils",
    "apps/backend",
    "apps/backend/src",
    "apps/backend/src/controllers",
    "apps/backend/src/models",
    "apps/backend/src/routes",
    "apps/backend/src/middleware",
    "packages",
    "packages/types",
];

const COMMON_FILES: &[(&str, TemplateId)] = &[
    ("package.json", ids::ROOT_PACKAGE_JSON),
    ("tsconfig.json", ids::ROOT_TSCONFIG),
    (".env", ids::ENV_FILE),
    (".gitignore", ids::GITIGNORE),
    ("turbo.json", ids::TURBO_CONFIG),
    ("apps/frontend/package.json", ids::FRONTEND_PACKAGE_JSON),
    ("apps/frontend/astro.config.mjs", ids::ASTRO_CONFIG),
    ("apps/frontend/src/utils/cn.ts", ids::CN_UTILITY),
    ("apps/backend/package.json", ids::BACKEND_PACKAGE_JSON),
    ("apps/backend/tsconfig.json", ids::BACKEND_TSCONFIG),
    ("apps/backend/src/index.ts", ids::EXPRESS_SERVER),
    ("apps/backend/src/errors.ts", ids::ERRORS),
    ("apps/backend/src/middleware/errorHandler.ts", ids::ERROR_HANDLER),
    ("apps/backend/src/routes/index.ts", ids::ROUTES_INDEX),
    (
        "apps/backend/src/controllers/exampleController.ts",
        ids::EXAMPLE_CONTROLLER,
    ),
    ("apps/backend/src/models/example.ts", ids::EXAMPLE_MODEL),
    ("packages/types/package.json", ids::TYPES_PACKAGE_JSON),
    ("packages/types/index.ts", ids::TYPES_INDEX),
];

const FULL_DIRECTORIES: &[&str] = &[
    "apps/frontend/src/styles",
    "apps/frontend/src/layouts",
    "apps/frontend/src/components",
    "apps/frontend/src/pages",
];

const FULL_FILES: &[(&str, TemplateId)] = &[
    ("apps/frontend/src/styles/global.css", ids::GLOBAL_STYLES),
    ("apps/frontend/src/layouts/Layout.astro", ids::BASE_LAYOUT),
    ("apps/frontend/src/components/Header.tsx", ids::HEADER_COMPONENT),
    ("apps/frontend/src/pages/index.astro", ids::INDEX_PAGE),
];

/// A file to render: where it goes and which template fills it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pub path: PathBuf,
    pub template: TemplateId,
}

impl PathEntry {
    pub fn new(path: impl Into<PathBuf>, template: TemplateId) -> Self {
        Self {
            path: path.into(),
            template,
        }
    }
}

/// Directories to create and files to write, both in declared order.
///
/// The project root is an implicit zero-th directory. Every parent of a file
/// must be listed in `directories` ahead of materialization; nothing is
/// inferred from file paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeSpec {
    directories: Vec<PathBuf>,
    files: Vec<PathEntry>,
}

impl TreeSpec {
    pub fn new(directories: Vec<PathBuf>, files: Vec<PathEntry>) -> Self {
        Self { directories, files }
    }

    pub fn minimal() -> Self {
        Self::from_tables(&[COMMON_DIRECTORIES], &[COMMON_FILES])
    }

    pub fn full() -> Self {
        Self::from_tables(
            &[COMMON_DIRECTORIES, FULL_DIRECTORIES],
            &[COMMON_FILES, FULL_FILES],
        )
    }

    fn from_tables(directories: &[&[&str]], files: &[&[(&str, TemplateId)]]) -> Self {
        let directories = directories
            .iter()
            .flat_map(|table| table.iter())
            .map(PathBuf::from)
            .collect();
        let files = files
            .iter()
            .flat_map(|table| table.iter())
            .map(|(path, template)| PathEntry::new(*path, *template))
            .collect();
        Self { directories, files }
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    pub fn files(&self) -> &[PathEntry] {
        &self.files
    }

    /// Drops a declared directory, leaving the file entries untouched.
    pub fn without_directory(mut self, dir: impl AsRef<Path>) -> Self {
        self.directories.retain(|d| d.as_path() != dir.as_ref());
        self
    }

    /// Checks the specification against `catalog`.
    ///
    /// # Errors
    ///
    /// Returns the first escaping path, dangling template reference, or file
    /// whose parent directory is not declared.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), MaterializeError> {
        let mut declared: HashSet<&Path> = HashSet::new();
        declared.insert(Path::new(""));
        for dir in &self.directories {
            ensure_relative(dir)?;
            declared.insert(dir.as_path());
        }

        for entry in &self.files {
            ensure_relative(&entry.path)?;
            if !catalog.contains(entry.template) {
                return Err(MaterializeError::UnknownTemplate(entry.template.to_string()));
            }
            let parent = entry.path.parent().unwrap_or(Path::new(""));
            if !declared.contains(parent) {
                return Err(MaterializeError::UndeclaredDirectory {
                    file: entry.path.clone(),
                    parent: parent.to_path_buf(),
                });
            }
        }
        Ok(())
    }
}

/// Rejects paths that could leave the project root.
pub(crate) fn ensure_relative(path: &Path) -> Result<(), MaterializeError> {
    let escapes = path.as_os_str().is_empty()
        || path
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(MaterializeError::InvalidPath(path.to_path_buf()));
    }
    Ok(())
}

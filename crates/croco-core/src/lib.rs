//! croco-core: template catalog, project tree specification and materializer
//! shared by the `croco` binary.
//!
//! A run renders every entry of a [`TreeSpec`] through a [`Catalog`] and
//! writes the results beneath a project root via a [`Filesystem`] port, then
//! hands the populated root to the post-steps driven by [`ScaffoldRun`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod fs;
pub mod materialize;
pub mod process;
pub mod progress;
pub mod run;
pub mod tree;

pub use catalog::{Catalog, RenderParams, Template, TemplateId};
pub use config::{load_config, CrocoConfig, DEFAULT_CONFIG_FILE};
pub use error::{ConfigError, MaterializeError, RunError};
pub use fs::{Filesystem, LocalFilesystem};
pub use materialize::{Materialized, Materializer};
pub use process::{CommandLine, CommandRunner, ProcessRunner};
pub use progress::ProgressEvent;
pub use run::{parse_confirmation, project_root, Prompt, RunArgs, RunReport, ScaffoldRun};
pub use tree::{PathEntry, TreeSpec, Variant};

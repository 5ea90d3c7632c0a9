//! Registry of named template render functions.
//!
//! Every template is a pure `fn(&RenderParams) -> String`. The tables are
//! static; a [`Catalog`] indexes them once and is then queried by id.

mod backend;
mod frontend;
mod root;
mod shared;

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{MaterializeError, RunError};

/// Opaque key of one render function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemplateId(&'static str);

impl TemplateId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Template ids known to the catalogs.
pub mod ids {
    use super::TemplateId;

    pub const ROOT_PACKAGE_JSON: TemplateId = TemplateId::new("root-package-json");
    pub const ROOT_TSCONFIG: TemplateId = TemplateId::new("root-tsconfig");
    pub const ENV_FILE: TemplateId = TemplateId::new("env-file");
    pub const GITIGNORE: TemplateId = TemplateId::new("gitignore");
    pub const TURBO_CONFIG: TemplateId = TemplateId::new("turbo-config");

    pub const FRONTEND_PACKAGE_JSON: TemplateId = TemplateId::new("frontend-package-json");
    pub const ASTRO_CONFIG: TemplateId = TemplateId::new("astro-config");
    pub const CN_UTILITY: TemplateId = TemplateId::new("cn-utility");
    pub const GLOBAL_STYLES: TemplateId = TemplateId::new("global-styles");
    pub const BASE_LAYOUT: TemplateId = TemplateId::new("base-layout");
    pub const INDEX_PAGE: TemplateId = TemplateId::new("index-page");
    pub const HEADER_COMPONENT: TemplateId = TemplateId::new("header-component");

    pub const BACKEND_PACKAGE_JSON: TemplateId = TemplateId::new("backend-package-json");
    pub const BACKEND_TSCONFIG: TemplateId = TemplateId::new("backend-tsconfig");
    pub const EXPRESS_SERVER: TemplateId = TemplateId::new("express-server");
    pub const ERRORS: TemplateId = TemplateId::new("errors");
    pub const ERROR_HANDLER: TemplateId = TemplateId::new("error-handler");
    pub const ROUTES_INDEX: TemplateId = TemplateId::new("routes-index");
    pub const EXAMPLE_CONTROLLER: TemplateId = TemplateId::new("example-controller");
    pub const EXAMPLE_MODEL: TemplateId = TemplateId::new("example-model");

    pub const TYPES_PACKAGE_JSON: TemplateId = TemplateId::new("types-package-json");
    pub const TYPES_INDEX: TemplateId = TemplateId::new("types-index");
}

/// Input threaded into every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderParams {
    project_name: String,
}

impl RenderParams {
    /// # Errors
    ///
    /// Returns [`RunError::EmptyProjectName`] when `project_name` is empty.
    pub fn new(project_name: impl Into<String>) -> Result<Self, RunError> {
        let project_name = project_name.into();
        if project_name.is_empty() {
            return Err(RunError::EmptyProjectName);
        }
        Ok(Self { project_name })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }
}

pub type RenderFn = fn(&RenderParams) -> String;

/// One catalog entry.
#[derive(Clone, Copy)]
pub struct Template {
    id: TemplateId,
    consumes_params: bool,
    render: RenderFn,
}

impl Template {
    /// A template whose text never depends on the run parameters.
    pub const fn fixed(id: TemplateId, render: RenderFn) -> Self {
        Self {
            id,
            consumes_params: false,
            render,
        }
    }

    /// A template that interpolates the run parameters.
    pub const fn parameterized(id: TemplateId, render: RenderFn) -> Self {
        Self {
            id,
            consumes_params: true,
            render,
        }
    }

    pub fn id(&self) -> TemplateId {
        self.id
    }

    pub fn consumes_params(&self) -> bool {
        self.consumes_params
    }

    pub fn render(&self, params: &RenderParams) -> String {
        (self.render)(params)
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("id", &self.id)
            .field("consumes_params", &self.consumes_params)
            .finish_non_exhaustive()
    }
}

/// Immutable id -> template mapping.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: BTreeMap<TemplateId, Template>,
}

impl Catalog {
    /// Templates of the minimal skeleton.
    pub fn minimal() -> Self {
        Self::from_tables(&[
            root::TEMPLATES,
            frontend::TEMPLATES,
            backend::TEMPLATES,
            shared::TEMPLATES,
        ])
    }

    /// The minimal catalog plus pages, layouts, components and stylesheets.
    pub fn full() -> Self {
        Self::from_tables(&[
            root::TEMPLATES,
            frontend::TEMPLATES,
            frontend::FULL_TEMPLATES,
            backend::TEMPLATES,
            shared::TEMPLATES,
        ])
    }

    pub fn from_tables(tables: &[&[Template]]) -> Self {
        let templates = tables
            .iter()
            .flat_map(|table| table.iter())
            .map(|template| (template.id, *template))
            .collect();
        Self { templates }
    }

    pub fn get(&self, id: TemplateId) -> Option<&Template> {
        self.templates.get(&id)
    }

    pub fn contains(&self, id: TemplateId) -> bool {
        self.templates.contains_key(&id)
    }

    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Renders `id` with `params`.
    ///
    /// # Errors
    ///
    /// Returns [`MaterializeError::UnknownTemplate`] if `id` is not registered.
    pub fn render(&self, id: TemplateId, params: &RenderParams) -> Result<String, MaterializeError> {
        self.get(id)
            .map(|template| template.render(params))
            .ok_or_else(|| MaterializeError::UnknownTemplate(id.to_string()))
    }
}

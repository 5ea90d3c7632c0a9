//! End-to-end scaffolding run: answers, materialization, post-steps.

mod port;

pub use port::Prompt;

use std::path::{Component, Path, PathBuf};

use tracing::{info, warn};

use crate::catalog::RenderParams;
use crate::config::CrocoConfig;
use crate::error::RunError;
use crate::fs::Filesystem;
use crate::materialize::{Materialized, Materializer};
use crate::process::CommandRunner;
use crate::progress::{ProgressCallback, ProgressEvent};
use crate::tree::Variant;

const TOTAL_STEPS: usize = 3;

/// Answers supplied up front; `None` means ask the prompt.
#[derive(Debug, Clone)]
pub struct RunArgs {
    pub name: Option<String>,
    pub install: Option<bool>,
    /// Directory the project folder is created in.
    pub base_dir: PathBuf,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub project_name: String,
    pub root: PathBuf,
    pub variant: Variant,
    pub installed: bool,
    pub materialized: Materialized,
}

/// `y` / `yes` in any case is affirmative; every other answer, including one
/// with surrounding whitespace, is not.
pub fn parse_confirmation(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Joins `name` under `base`, dropping any root or drive prefix so an
/// absolute name still lands inside `base`.
pub fn project_root(base: &Path, name: &str) -> PathBuf {
    let relative: PathBuf = Path::new(name)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();
    base.join(relative)
}

pub struct ScaffoldRun<P: Prompt, F: Filesystem, R: CommandRunner> {
    prompt: P,
    fs: F,
    runner: R,
    config: CrocoConfig,
    progress: Option<ProgressCallback>,
}

impl<P: Prompt, F: Filesystem, R: CommandRunner> ScaffoldRun<P, F, R> {
    pub fn new(prompt: P, fs: F, runner: R, config: CrocoConfig) -> Self {
        Self {
            prompt,
            fs,
            runner,
            config,
            progress: None,
        }
    }

    pub fn with_progress(mut self, callback: impl Fn(&ProgressEvent) + 'static) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Runs once: collect answers, write the tree, initialize version control,
    /// then install dependencies if requested.
    ///
    /// # Errors
    ///
    /// The first failure of any step ends the run. Files already written stay
    /// on disk.
    pub fn execute(&self, args: RunArgs) -> Result<RunReport, RunError> {
        let project_name = match args.name {
            Some(name) => name,
            None => self.prompt.project_name().map_err(RunError::Prompt)?,
        };
        let params = RenderParams::new(project_name)?;

        let install = match args.install {
            Some(install) => install,
            None => parse_confirmation(&self.prompt.install_answer().map_err(RunError::Prompt)?),
        };

        let root = project_root(&args.base_dir, params.project_name());
        let variant = self.config.variant;
        info!(
            project = params.project_name(),
            root = %root.display(),
            %variant,
            install,
            "starting scaffold run"
        );

        self.started(1, "Creating project files");
        if self.fs.exists(&root) {
            warn!(root = %root.display(), "project directory already exists; files will be overwritten");
            self.emit(ProgressEvent::Warning {
                message: format!("{} already exists; files will be overwritten", root.display()),
            });
        }
        let catalog = variant.catalog();
        let spec = variant.tree();
        let materialized = Materializer::new(&catalog, &spec).materialize(&self.fs, &root, &params)?;
        self.completed(1, "Project files created");

        self.started(2, "Setting up git repository");
        self.runner.run(&self.config.vcs_command, &root)?;
        self.completed(2, "Repository initialized");

        if install {
            self.started(3, "Installing dependencies");
            self.runner.run(&self.config.install_command, &root)?;
            self.completed(3, "Dependencies installed");
        } else {
            self.emit(ProgressEvent::StepSkipped {
                step: 3,
                total: TOTAL_STEPS,
                message: "Dependency installation skipped".to_string(),
            });
        }

        Ok(RunReport {
            project_name: params.project_name().to_string(),
            root,
            variant,
            installed: install,
            materialized,
        })
    }

    fn started(&self, step: usize, message: &str) {
        self.emit(ProgressEvent::StepStarted {
            step,
            total: TOTAL_STEPS,
            message: message.to_string(),
        });
    }

    fn completed(&self, step: usize, message: &str) {
        self.emit(ProgressEvent::StepCompleted {
            step,
            total: TOTAL_STEPS,
            message: message.to_string(),
        });
    }

    fn emit(&self, event: ProgressEvent) {
        if let Some(callback) = &self.progress {
            callback(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::LocalFilesystem;
    use crate::process::CommandLine;
    use std::cell::RefCell;
    use std::io;
    use std::path::Path;
    use std::rc::Rc;
    use tempfile::TempDir;

    struct MockPrompt {
        name: String,
        install: String,
        calls: RefCell<Vec<String>>,
    }

    impl MockPrompt {
        fn new(name: &str, install: &str) -> Self {
            Self {
                name: name.to_string(),
                install: install.to_string(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Prompt for MockPrompt {
        fn project_name(&self) -> io::Result<String> {
            self.calls.borrow_mut().push("project_name".to_string());
            Ok(self.name.clone())
        }

        fn install_answer(&self) -> io::Result<String> {
            self.calls.borrow_mut().push("install_answer".to_string());
            Ok(self.install.clone())
        }
    }

    struct FailingPrompt;

    impl Prompt for FailingPrompt {
        fn project_name(&self) -> io::Result<String> {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"))
        }

        fn install_answer(&self) -> io::Result<String> {
            Ok(String::new())
        }
    }

    #[derive(Default)]
    struct RecordingRunner {
        calls: RefCell<Vec<(String, PathBuf)>>,
        fail_on: Option<String>,
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, command: &CommandLine, cwd: &Path) -> Result<(), RunError> {
            self.calls
                .borrow_mut()
                .push((command.to_string(), cwd.to_path_buf()));
            if self.fail_on.as_deref() == Some(command.program()) {
                return Err(RunError::ExternalCommand {
                    command: command.to_string(),
                    code: Some(1),
                });
            }
            Ok(())
        }
    }

    fn run_with(
        prompt: MockPrompt,
        runner: RecordingRunner,
    ) -> ScaffoldRun<MockPrompt, LocalFilesystem, RecordingRunner> {
        ScaffoldRun::new(prompt, LocalFilesystem, runner, CrocoConfig::default())
    }

    fn args(base: &Path) -> RunArgs {
        RunArgs {
            name: None,
            install: None,
            base_dir: base.to_path_buf(),
        }
    }

    #[test]
    fn test_parse_confirmation() {
        for yes in ["y", "Y", "yes", "YES", "Yes"] {
            assert!(parse_confirmation(yes), "{yes:?}");
        }
        for no in ["", "n", "no", "yeah", "ye", "sure", "1", "true", " y", "yes\n"] {
            assert!(!parse_confirmation(no), "{no:?}");
        }
    }

    #[test]
    fn test_project_root_stays_under_base() {
        let base = Path::new("/work");
        assert_eq!(project_root(base, "acme-app"), Path::new("/work/acme-app"));
        assert_eq!(project_root(base, "/tmp/acme-app"), Path::new("/work/tmp/acme-app"));
        assert_eq!(project_root(base, "nested/acme-app"), Path::new("/work/nested/acme-app"));
    }

    #[test]
    fn test_absolute_name_is_created_inside_base_dir() {
        let tmp = TempDir::new().unwrap();
        let outside = tmp.path().join("outside");
        let base = tmp.path().join("base");
        std::fs::create_dir_all(&base).unwrap();
        let name = outside.to_string_lossy().into_owned();
        let use_case = run_with(MockPrompt::new(&name, "n"), RecordingRunner::default());

        let report = use_case.execute(args(&base)).unwrap();

        assert!(report.root.starts_with(&base), "{}", report.root.display());
        assert!(report.root.join("package.json").is_file());
        assert!(!outside.exists());
        assert_eq!(use_case.runner.calls.borrow()[0].1, report.root);
    }

    #[test]
    fn test_interactive_run_with_install() {
        let tmp = TempDir::new().unwrap();
        let use_case = run_with(MockPrompt::new("acme-app", "yes"), RecordingRunner::default());

        let report = use_case.execute(args(tmp.path())).unwrap();

        let root = tmp.path().join("acme-app");
        assert_eq!(report.root, root);
        assert!(report.installed);
        assert!(root.join("package.json").is_file());

        let calls = use_case.runner.calls.borrow();
        assert_eq!(
            *calls,
            vec![
                ("git init".to_string(), root.clone()),
                ("npm install".to_string(), root.clone()),
            ]
        );
        assert_eq!(
            *use_case.prompt.calls.borrow(),
            vec!["project_name".to_string(), "install_answer".to_string()]
        );
    }

    #[test]
    fn test_install_skipped_on_negative_answer() {
        let tmp = TempDir::new().unwrap();
        let use_case = run_with(MockPrompt::new("acme-app", "n"), RecordingRunner::default());

        let report = use_case.execute(args(tmp.path())).unwrap();

        assert!(!report.installed);
        let calls = use_case.runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "git init");
    }

    #[test]
    fn test_provided_args_skip_prompts() {
        let tmp = TempDir::new().unwrap();
        let use_case = run_with(MockPrompt::new("fallback", "y"), RecordingRunner::default());

        let report = use_case
            .execute(RunArgs {
                name: Some("given".to_string()),
                install: Some(false),
                base_dir: tmp.path().to_path_buf(),
            })
            .unwrap();

        assert_eq!(report.project_name, "given");
        assert!(use_case.prompt.calls.borrow().is_empty());
        assert!(!tmp.path().join("fallback").exists());
    }

    #[test]
    fn test_empty_name_is_rejected_before_writing() {
        let tmp = TempDir::new().unwrap();
        let use_case = run_with(MockPrompt::new("", "y"), RecordingRunner::default());

        let err = use_case.execute(args(tmp.path())).unwrap_err();

        assert!(matches!(err, RunError::EmptyProjectName));
        assert!(use_case.runner.calls.borrow().is_empty());
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_prompt_failure_is_reported() {
        let tmp = TempDir::new().unwrap();
        let use_case = ScaffoldRun::new(
            FailingPrompt,
            LocalFilesystem,
            RecordingRunner::default(),
            CrocoConfig::default(),
        );
        let err = use_case.execute(args(tmp.path())).unwrap_err();
        assert!(matches!(err, RunError::Prompt(_)));
    }

    #[test]
    fn test_vcs_failure_stops_before_install() {
        let tmp = TempDir::new().unwrap();
        let runner = RecordingRunner {
            fail_on: Some("git".to_string()),
            ..Default::default()
        };
        let use_case = run_with(MockPrompt::new("acme-app", "y"), runner);

        let err = use_case.execute(args(tmp.path())).unwrap_err();

        assert!(matches!(err, RunError::ExternalCommand { .. }));
        assert_eq!(use_case.runner.calls.borrow().len(), 1);
        // files written before the failing step remain
        assert!(tmp.path().join("acme-app/package.json").is_file());
    }

    #[test]
    fn test_install_failure_is_propagated() {
        let tmp = TempDir::new().unwrap();
        let runner = RecordingRunner {
            fail_on: Some("npm".to_string()),
            ..Default::default()
        };
        let use_case = run_with(MockPrompt::new("acme-app", "y"), runner);

        let err = use_case.execute(args(tmp.path())).unwrap_err();
        assert!(err.to_string().contains("npm install"));
    }

    #[test]
    fn test_full_variant_from_config() {
        let tmp = TempDir::new().unwrap();
        let config = CrocoConfig {
            variant: Variant::Full,
            ..CrocoConfig::default()
        };
        let use_case = ScaffoldRun::new(
            MockPrompt::new("acme-app", "n"),
            LocalFilesystem,
            RecordingRunner::default(),
            config,
        );

        let report = use_case.execute(args(tmp.path())).unwrap();

        assert_eq!(report.variant, Variant::Full);
        assert!(tmp
            .path()
            .join("acme-app/apps/frontend/src/pages/index.astro")
            .is_file());
    }

    #[test]
    fn test_progress_events_in_order() {
        let tmp = TempDir::new().unwrap();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let use_case = run_with(MockPrompt::new("acme-app", "n"), RecordingRunner::default())
            .with_progress(move |event| sink.borrow_mut().push(event.clone()));

        use_case.execute(args(tmp.path())).unwrap();

        let events = events.borrow();
        let steps: Vec<(usize, &str)> = events
            .iter()
            .map(|e| match e {
                ProgressEvent::StepStarted { step, .. } => (*step, "started"),
                ProgressEvent::StepCompleted { step, .. } => (*step, "completed"),
                ProgressEvent::StepSkipped { step, .. } => (*step, "skipped"),
                ProgressEvent::Warning { .. } => (0, "warning"),
            })
            .collect();
        assert_eq!(
            steps,
            vec![
                (1, "started"),
                (1, "completed"),
                (2, "started"),
                (2, "completed"),
                (3, "skipped"),
            ]
        );
    }

    #[test]
    fn test_existing_root_emits_warning() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("acme-app")).unwrap();
        let warnings = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&warnings);
        let use_case = run_with(MockPrompt::new("acme-app", "n"), RecordingRunner::default())
            .with_progress(move |event| {
                if matches!(event, ProgressEvent::Warning { .. }) {
                    *sink.borrow_mut() += 1;
                }
            });

        use_case.execute(args(tmp.path())).unwrap();
        assert_eq!(*warnings.borrow(), 1);
    }
}

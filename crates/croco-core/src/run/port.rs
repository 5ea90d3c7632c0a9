use std::io;

/// Source of the two interactive answers of a run.
pub trait Prompt {
    fn project_name(&self) -> io::Result<String>;

    /// Free-text answer to "install dependencies?".
    fn install_answer(&self) -> io::Result<String>;
}

/// Progress of one scaffolding run, reported step by step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    StepStarted {
        step: usize,
        total: usize,
        message: String,
    },
    StepCompleted {
        step: usize,
        total: usize,
        message: String,
    },
    StepSkipped {
        step: usize,
        total: usize,
        message: String,
    },
    Warning {
        message: String,
    },
}

pub type ProgressCallback = Box<dyn Fn(&ProgressEvent)>;

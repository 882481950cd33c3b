//! Workflow orchestration errors.

/// Workflow-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum WorkflowErrorKind {
    /// Another request is already in flight for this collection
    #[display("The {} collection is busy ({})", collection, status)]
    Busy {
        /// Collection name
        collection: String,
        /// Current status of the collection
        status: String,
    },
    /// No entity with this id exists in the collection
    #[display("No entity with id '{}'", _0)]
    NotFound(String),
}

/// Workflow error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Workflow Error: {} at line {} in {}", kind, line, file)]
pub struct WorkflowError {
    /// The kind of error that occurred
    pub kind: WorkflowErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl WorkflowError {
    /// Create a new WorkflowError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: WorkflowErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

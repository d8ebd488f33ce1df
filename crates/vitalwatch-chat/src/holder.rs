use vitalwatch_core::models::evaluation::EvaluationResult;

/// The latest evaluation the chat answers from.
///
/// Empty until the first submission, then replaced wholesale on each one.
#[derive(Debug, Clone, Default)]
pub struct CurrentEvaluation {
    latest: Option<EvaluationResult>,
}

impl CurrentEvaluation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new result, returning the one it replaces.
    pub fn replace(&mut self, result: EvaluationResult) -> Option<EvaluationResult> {
        self.latest.replace(result)
    }

    pub fn get(&self) -> Option<&EvaluationResult> {
        self.latest.as_ref()
    }

    pub fn clear(&mut self) {
        self.latest = None;
    }

    pub fn is_set(&self) -> bool {
        self.latest.is_some()
    }
}

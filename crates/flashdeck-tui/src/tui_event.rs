use flashdeck_core::Concept;

/// Commands sent from the TUI to the backend task.
pub enum BackendCommand {
    /// Submit a link to the analyzer.
    Analyze { link: String },
}

/// Events flowing from the backend task to the TUI.
///
/// Every `Analyze` command produces exactly one of these, so the loading
/// flag is cleared on every exit path.
#[derive(Debug, Clone)]
pub enum BackendEvent {
    /// Analysis succeeded — the response passed the schema check.
    AnalysisComplete { concepts: Vec<Concept> },
    /// Analysis failed (transport error or malformed response).
    AnalysisFailed { error: String },
}

use super::App;
use crate::tui_event::BackendEvent;

impl App {
    /// Apply a backend event to the model.
    ///
    /// Exactly one event arrives per submitted request, so both arms clear
    /// the loading flag — this is the unconditional step of the submit path.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::AnalysisComplete { concepts } => {
                tracing::info!(count = concepts.len(), "analysis complete");
                self.session.replace_concepts(concepts);
                self.session.loading = false;
                self.scroll_offset = 0;
            }
            BackendEvent::AnalysisFailed { error } => {
                // Transport and malformed-response failures are handled
                // identically: diagnostic + empty list. The user sees no
                // error beyond "no flashcards appeared".
                tracing::error!(%error, "analysis failed");
                self.session.clear_concepts();
                self.session.loading = false;
                self.scroll_offset = 0;
            }
        }
    }
}

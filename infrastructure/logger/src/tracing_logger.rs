use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing`, tagged with the component that
/// emitted them.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("recipe_picker")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "recipe_picker", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "recipe_picker", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "recipe_picker", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "recipe_picker", component = self.component, "{}", message);
    }
}

use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "recipe_web", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "recipe_web", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "recipe_web", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "recipe_web", "{}", message);
    }
}

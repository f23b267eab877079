use crate::library::logger::interface::Logger;
use log::Level;
use std::sync::Arc;

const ROOT_TARGET: &str = "campus_navigator";

/// Forwards to the `log` facade, using the namespace as the record target.
#[derive(Debug, Clone, Default)]
pub struct LoggerConsole {
    namespace: Option<String>,
}

impl LoggerConsole {
    pub fn new() -> Self {
        Self { namespace: None }
    }

    fn log(&self, level: Level, message: &str) {
        let target = self.namespace.as_deref().unwrap_or(ROOT_TARGET);
        log::log!(target: target, level, "{}", message);
    }
}

impl Logger for LoggerConsole {
    fn debug(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.log(Level::Debug, message);
        Ok(())
    }

    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.log(Level::Info, message);
        Ok(())
    }

    fn error(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.log(Level::Error, message);
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        let new_namespace = match &self.namespace {
            Some(current) => format!("{}:{}", current, namespace),
            None => namespace.to_string(),
        };

        Arc::new(LoggerConsole {
            namespace: Some(new_namespace),
        })
    }
}

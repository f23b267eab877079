use crate::library::logger::interface::Logger;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: &'static str,
    pub namespace: Option<String>,
    pub message: String,
}

/// Keeps every line in memory so tests can assert on what was logged.
#[derive(Debug, Clone, Default)]
pub struct LoggerFake {
    namespace: Option<String>,
    lines: Arc<Mutex<Vec<LogLine>>>,
}

impl LoggerFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<LogLine> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.level == "error")
            .map(|line| line.message)
            .collect()
    }

    fn push(
        &self,
        level: &'static str,
        message: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut lines = self
            .lines
            .lock()
            .map_err(|e| e.to_string())?;
        lines.push(LogLine {
            level,
            namespace: self.namespace.clone(),
            message: message.to_string(),
        });
        Ok(())
    }
}

impl Logger for LoggerFake {
    fn debug(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.push("debug", message)
    }

    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.push("info", message)
    }

    fn error(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.push("error", message)
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        let new_namespace = match &self.namespace {
            Some(current) => format!("{}:{}", current, namespace),
            None => namespace.to_string(),
        };

        Arc::new(LoggerFake {
            namespace: Some(new_namespace),
            lines: Arc::clone(&self.lines),
        })
    }
}

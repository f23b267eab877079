use crate::device_alert::interface::DeviceAlert;
use crate::library::logger::interface::Logger;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct DeviceAlertFake {
    shown: Arc<Mutex<Vec<String>>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceAlertFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            shown: Arc::new(Mutex::new(Vec::new())),
            logger: logger.with_namespace("alert").with_namespace("fake"),
        }
    }

    pub fn shown(&self) -> Vec<String> {
        self.shown.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl DeviceAlert for DeviceAlertFake {
    fn show(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!("DeviceAlertFake::show({})", message))?;
        self.shown
            .lock()
            .map_err(|e| e.to_string())?
            .push(message.to_string());
        Ok(())
    }
}

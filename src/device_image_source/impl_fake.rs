use crate::device_image_source::interface::{
    DeviceImageSource, ImageSourceKind, LaunchOptions, LaunchOutcome, Permission,
};
use crate::library::logger::interface::Logger;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Calls {
    permission_requests: usize,
    launches: Vec<LaunchOptions>,
}

/// Scripted source: always answers with the same permission and outcome.
#[derive(Clone)]
pub struct DeviceImageSourceFake {
    kind: ImageSourceKind,
    permission: Permission,
    outcome: Result<LaunchOutcome, String>,
    calls: Arc<Mutex<Calls>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceImageSourceFake {
    pub fn new(
        kind: ImageSourceKind,
        permission: Permission,
        outcome: LaunchOutcome,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            kind,
            permission,
            outcome: Ok(outcome),
            calls: Arc::new(Mutex::new(Calls::default())),
            logger: logger.with_namespace(&kind.to_string()).with_namespace("fake"),
        }
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.outcome = Err(message.to_string());
        self
    }

    pub fn permission_requests(&self) -> usize {
        self.calls.lock().map(|c| c.permission_requests).unwrap_or(0)
    }

    pub fn launches(&self) -> Vec<LaunchOptions> {
        self.calls
            .lock()
            .map(|c| c.launches.clone())
            .unwrap_or_default()
    }
}

impl DeviceImageSource for DeviceImageSourceFake {
    fn kind(&self) -> ImageSourceKind {
        self.kind
    }

    fn request_permission(&self) -> Result<Permission, Box<dyn std::error::Error + Send + Sync>> {
        self.calls
            .lock()
            .map_err(|e| e.to_string())?
            .permission_requests += 1;
        self.logger
            .info(&format!("Permission requested: {:?}", self.permission))?;
        Ok(self.permission)
    }

    fn launch(
        &self,
        options: &LaunchOptions,
    ) -> Result<LaunchOutcome, Box<dyn std::error::Error + Send + Sync>> {
        self.calls
            .lock()
            .map_err(|e| e.to_string())?
            .launches
            .push(*options);
        self.logger.info(&format!("Launched: {:?}", self.outcome))?;
        self.outcome.clone().map_err(|message| message.into())
    }
}

use crate::device_alert::interface::DeviceAlert;
use crate::device_image_source::interface::{DeviceImageSource, ImageSourceKind};
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::PredictionClient;
use crate::screen::acquire::{capture_from_camera, pick_from_library};
use crate::screen::core::{Effect, Event};
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Called after every event an effect sends, so the UI can redraw.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct Devices {
    pub camera: Arc<dyn DeviceImageSource + Send + Sync>,
    pub library: Arc<dyn DeviceImageSource + Send + Sync>,
    pub prediction_client: Arc<dyn PredictionClient + Send + Sync>,
    pub alert: Arc<dyn DeviceAlert + Send + Sync>,
}

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    devices: Devices,
    event_sender: Sender<Event>,
    waker: Waker,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        devices: Devices,
        event_sender: Sender<Event>,
        waker: Waker,
    ) -> Self {
        Self {
            logger: logger.with_namespace("effect"),
            devices,
            event_sender,
            waker,
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.debug(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::AcquireImage { source } => {
                let result = match source {
                    ImageSourceKind::Camera => capture_from_camera(self.devices.camera.as_ref()),
                    ImageSourceKind::Library => pick_from_library(self.devices.library.as_ref()),
                };
                self.send(Event::AcquireDone { source, result });
            }
            Effect::Predict { request_id, image } => {
                let result = self.devices.prediction_client.predict(&image);
                self.send(Event::PredictDone { request_id, result });
            }
            Effect::ShowAlert { message } => {
                if let Err(e) = self.devices.alert.show(&message) {
                    let _ = self
                        .logger
                        .error(&format!("Failed to show alert {:?}: {}", message, e));
                }
                self.send(Event::AlertDismissed);
            }
        }
    }

    fn send(&self, event: Event) {
        if let Err(e) = self.event_sender.send(event) {
            let _ = self
                .logger
                .error(&format!("Screen is gone, dropping {:?}", e.0));
            return;
        }
        (self.waker)();
    }
}

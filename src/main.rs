use config::Config;
use device_alert::impl_dialog::DeviceAlertDialog;
use device_image_source::impl_camera_command::DeviceImageSourceCameraCommand;
use device_image_source::impl_file_dialog::DeviceImageSourceFileDialog;
use library::logger::{impl_console::LoggerConsole, interface::Logger, setup};
use prediction_client::impl_demo::PredictionClientDemo;
use prediction_client::impl_http::PredictionClientHttp;
use prediction_client::interface::PredictionClient;
use screen::main::Screen;
use screen::run_effect::Devices;
use std::sync::Arc;
use std::time::Duration;

mod config;
mod device_alert;
mod device_image_source;
mod library;
mod prediction_client;
mod screen;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    setup::init(config.logger_timezone)?;

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new());

    let prediction_logger = logger.with_namespace("prediction_client");
    let prediction_client: Arc<dyn PredictionClient + Send + Sync> = if config.demo_mode {
        let _ = logger.info("Demo mode, predictions are made up");
        Arc::new(PredictionClientDemo::new(
            Duration::from_millis(800),
            prediction_logger,
        ))
    } else {
        let _ = logger.info(&format!("Predicting with {}", config.predict_url));
        Arc::new(PredictionClientHttp::new(
            &config.predict_url,
            prediction_logger,
        )?)
    };

    let devices = Devices {
        camera: Arc::new(DeviceImageSourceCameraCommand::new(
            &config.camera_command,
            config.prompt_for_permissions,
            logger.clone(),
        )),
        library: Arc::new(DeviceImageSourceFileDialog::new(
            config.prompt_for_permissions,
            logger.clone(),
        )),
        prediction_client,
        alert: Arc::new(DeviceAlertDialog::new("Campus Navigator")),
    };

    screen::gui::run(move |waker| Screen::new(logger, devices, waker))?;

    Ok(())
}

use crate::device_image_source::interface::{
    CapturedImage, DeviceImageSource, ImageSourceKind, LaunchOptions, LaunchOutcome, Permission,
};
use crate::device_image_source::permission::PermissionPrompt;
use crate::library::logger::interface::Logger;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};

const OUTPUT_PLACEHOLDER: &str = "{output}";

/// Captures through an external program such as `fswebcam` or
/// `libcamera-still`. The program writes a single JPEG to `{output}`.
///
/// Only the latest capture is kept on disk. It is removed when the next
/// capture replaces it, or when the camera is dropped.
pub struct DeviceImageSourceCameraCommand {
    command: String,
    output_dir: PathBuf,
    permission: PermissionPrompt,
    last_capture: Mutex<Option<PathBuf>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceImageSourceCameraCommand {
    pub fn new(
        command: &str,
        prompt_for_permission: bool,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            command: command.to_string(),
            output_dir: std::env::temp_dir(),
            permission: PermissionPrompt::new(
                prompt_for_permission,
                "Camera access",
                "Campus Navigator would like to use the camera to photograph landmarks.",
            ),
            last_capture: Mutex::new(None),
            logger: logger.with_namespace("camera_command"),
        }
    }

    #[cfg(test)]
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    fn output_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("campus-navigator-{}.jpg", uuid::Uuid::new_v4().simple()))
    }

    fn replace_last_capture(
        &self,
        capture: PathBuf,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let previous = self
            .last_capture
            .lock()
            .map_err(|e| e.to_string())?
            .replace(capture);

        if let Some(previous) = previous {
            if let Err(e) = std::fs::remove_file(&previous) {
                self.logger.error(&format!(
                    "Failed to remove {}: {}",
                    previous.display(),
                    e
                ))?;
            }
        }
        Ok(())
    }
}

impl Drop for DeviceImageSourceCameraCommand {
    fn drop(&mut self) {
        if let Ok(last_capture) = self.last_capture.get_mut() {
            if let Some(path) = last_capture.take() {
                let _ = std::fs::remove_file(path);
            }
        }
    }
}

/// Splits on whitespace and substitutes the output placeholder in every argument.
fn build_command(
    template: &str,
    output: &Path,
) -> Result<Command, Box<dyn std::error::Error + Send + Sync>> {
    let output = output.to_string_lossy();
    let mut parts = template
        .split_whitespace()
        .map(|part| part.replace(OUTPUT_PLACEHOLDER, &output));

    let program = parts.next().ok_or("camera command is empty")?;
    let mut command = Command::new(program);
    command.args(parts);
    Ok(command)
}

impl DeviceImageSource for DeviceImageSourceCameraCommand {
    fn kind(&self) -> ImageSourceKind {
        ImageSourceKind::Camera
    }

    fn request_permission(&self) -> Result<Permission, Box<dyn std::error::Error + Send + Sync>> {
        self.permission.request()
    }

    fn launch(
        &self,
        options: &LaunchOptions,
    ) -> Result<LaunchOutcome, Box<dyn std::error::Error + Send + Sync>> {
        let output = self.output_path();
        let mut command = build_command(&self.command, &output)?;

        self.logger.info(&format!(
            "Capturing to {} (editing: {}, quality: {})",
            output.display(),
            options.allows_editing,
            options.quality
        ))?;

        let status = command.status()?;
        if !status.success() {
            return Err(format!("camera command exited with {}", status).into());
        }

        if output.is_file() {
            let image = CapturedImage::from_path(&output);
            self.replace_last_capture(output)?;
            Ok(LaunchOutcome::Picked(image))
        } else {
            self.logger.info("Camera command wrote no image")?;
            Ok(LaunchOutcome::Cancelled)
        }
    }
}

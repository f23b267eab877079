use crate::device_image_source::interface::{
    CapturedImage, DeviceImageSource, ImageSourceKind, LaunchOptions, LaunchOutcome, Permission,
};
use crate::device_image_source::permission::PermissionPrompt;
use crate::library::logger::interface::Logger;
use rfd::FileDialog;
use std::sync::Arc;

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "heic"];

/// Photo library backed by the native file picker.
pub struct DeviceImageSourceFileDialog {
    permission: PermissionPrompt,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceImageSourceFileDialog {
    pub fn new(prompt_for_permission: bool, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            permission: PermissionPrompt::new(
                prompt_for_permission,
                "Photo library access",
                "Campus Navigator would like to read photos from your library.",
            ),
            logger: logger.with_namespace("file_dialog"),
        }
    }
}

impl DeviceImageSource for DeviceImageSourceFileDialog {
    fn kind(&self) -> ImageSourceKind {
        ImageSourceKind::Library
    }

    fn request_permission(&self) -> Result<Permission, Box<dyn std::error::Error + Send + Sync>> {
        self.permission.request()
    }

    fn launch(
        &self,
        options: &LaunchOptions,
    ) -> Result<LaunchOutcome, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.debug(&format!("Opening file dialog with {:?}", options))?;

        let mut dialog = FileDialog::new()
            .set_title("Select a photo")
            .add_filter("Images", &IMAGE_EXTENSIONS);
        if let Some(pictures) = dirs::picture_dir() {
            dialog = dialog.set_directory(pictures);
        }

        match dialog.pick_file() {
            Some(path) => {
                self.logger.info(&format!("Selected {}", path.display()))?;
                Ok(LaunchOutcome::Picked(CapturedImage::from_path(&path)))
            }
            None => Ok(LaunchOutcome::Cancelled),
        }
    }
}

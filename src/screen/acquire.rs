use crate::device_image_source::interface::{
    CapturedImage, DeviceImageSource, ImageSourceKind, LaunchOptions, LaunchOutcome, Permission,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AcquireError {
    #[error("{0} permission denied")]
    PermissionDenied(ImageSourceKind),
    #[error("cancelled by user")]
    Cancelled,
    #[error("{0}")]
    Device(String),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for AcquireError {
    fn from(e: Box<dyn std::error::Error + Send + Sync>) -> Self {
        AcquireError::Device(e.to_string())
    }
}

/// Permission, then picker. A denial launches nothing.
pub fn acquire(
    source: &dyn DeviceImageSource,
    options: &LaunchOptions,
) -> Result<CapturedImage, AcquireError> {
    if source.request_permission()? == Permission::Denied {
        return Err(AcquireError::PermissionDenied(source.kind()));
    }

    match source.launch(options)? {
        LaunchOutcome::Picked(image) => Ok(image),
        LaunchOutcome::Cancelled => Err(AcquireError::Cancelled),
    }
}

pub fn capture_from_camera(camera: &dyn DeviceImageSource) -> Result<CapturedImage, AcquireError> {
    acquire(camera, &LaunchOptions::default())
}

pub fn pick_from_library(library: &dyn DeviceImageSource) -> Result<CapturedImage, AcquireError> {
    acquire(library, &LaunchOptions::default())
}

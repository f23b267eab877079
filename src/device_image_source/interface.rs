use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSourceKind {
    Camera,
    Library,
}

impl fmt::Display for ImageSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSourceKind::Camera => write!(f, "camera"),
            ImageSourceKind::Library => write!(f, "library"),
        }
    }
}

/// Local reference to a captured or selected photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub uri: String,
}

impl CapturedImage {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    pub fn from_path(path: &Path) -> Self {
        match reqwest::Url::from_file_path(path) {
            Ok(url) => Self::new(url.to_string()),
            Err(()) => Self::new(path.to_string_lossy()),
        }
    }

    /// Resolves `file://` URIs and bare paths. Other schemes have no local file.
    pub fn local_path(&self) -> Option<PathBuf> {
        match reqwest::Url::parse(&self.uri) {
            Ok(url) if url.scheme() == "file" => url.to_file_path().ok(),
            // Windows drive letters parse as a one-letter scheme.
            Ok(url) if url.scheme().len() > 1 => None,
            _ => Some(PathBuf::from(&self.uri)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchOptions {
    pub allows_editing: bool,
    /// 0.0 to 1.0, where 1.0 keeps the original quality.
    pub quality: f32,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            allows_editing: true,
            quality: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Cancelled,
    Picked(CapturedImage),
}

pub trait DeviceImageSource: Send + Sync {
    fn kind(&self) -> ImageSourceKind;

    /// May prompt the user. Implementations ask at most once per session.
    fn request_permission(&self) -> Result<Permission, Box<dyn std::error::Error + Send + Sync>>;

    /// Blocks until the user picks an image or backs out.
    fn launch(
        &self,
        options: &LaunchOptions,
    ) -> Result<LaunchOutcome, Box<dyn std::error::Error + Send + Sync>>;
}

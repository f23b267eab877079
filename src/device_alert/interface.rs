pub trait DeviceAlert: Send + Sync {
    /// Blocks until the user dismisses the alert.
    fn show(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

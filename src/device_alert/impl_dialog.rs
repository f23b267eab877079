use crate::device_alert::interface::DeviceAlert;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

pub struct DeviceAlertDialog {
    title: String,
}

impl DeviceAlertDialog {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

impl DeviceAlert for DeviceAlertDialog {
    fn show(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(&self.title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
        Ok(())
    }
}

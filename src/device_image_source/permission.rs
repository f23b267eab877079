use crate::device_image_source::interface::Permission;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::sync::Mutex;

/// Remembers the first answer for the rest of the session, the way the OS
/// caches a permission grant or denial.
#[derive(Debug, Default)]
pub struct PermissionCache {
    answer: Mutex<Option<Permission>>,
}

impl PermissionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_ask<F>(&self, ask: F) -> Result<Permission, Box<dyn std::error::Error + Send + Sync>>
    where
        F: FnOnce() -> Permission,
    {
        let mut answer = self.answer.lock().map_err(|e| e.to_string())?;
        if let Some(permission) = *answer {
            return Ok(permission);
        }
        let permission = ask();
        *answer = Some(permission);
        Ok(permission)
    }
}

/// Yes/no prompt. With `enabled == false` every request is granted silently.
#[derive(Debug)]
pub struct PermissionPrompt {
    enabled: bool,
    title: String,
    description: String,
    cache: PermissionCache,
}

impl PermissionPrompt {
    pub fn new(enabled: bool, title: &str, description: &str) -> Self {
        Self {
            enabled,
            title: title.to_string(),
            description: description.to_string(),
            cache: PermissionCache::new(),
        }
    }

    pub fn request(&self) -> Result<Permission, Box<dyn std::error::Error + Send + Sync>> {
        if !self.enabled {
            return Ok(Permission::Granted);
        }

        self.cache.get_or_ask(|| {
            let result = MessageDialog::new()
                .set_level(MessageLevel::Info)
                .set_title(&self.title)
                .set_description(&self.description)
                .set_buttons(MessageButtons::YesNo)
                .show();

            match result {
                MessageDialogResult::Yes | MessageDialogResult::Ok => Permission::Granted,
                _ => Permission::Denied,
            }
        })
    }
}

//! Desktop notification support
//! Implemented for macOS (osascript) and Linux (notify-send)

use crate::domain::Task;
#[cfg(any(target_os = "macos", target_os = "linux"))]
use std::process::Command;
use tracing::debug;

/// Whether the user allowed notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Permission {
    /// Not decided yet
    #[default]
    Default,
    Granted,
    Denied,
}

impl Permission {
    /// Map the config flag (`null` / `true` / `false`) to a permission
    pub fn from_setting(setting: Option<bool>) -> Self {
        match setting {
            None => Self::Default,
            Some(true) => Self::Granted,
            Some(false) => Self::Denied,
        }
    }
}

/// A notification ready to be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    /// Identifies the task, so repeated dispatches replace instead of stack
    pub tag: String,
}

impl Notification {
    /// "Due soon" reminder for a task
    pub fn due_soon(task: &Task) -> Self {
        Self {
            title: "Task Due Soon! ⏰".to_string(),
            body: format!("\"{}\" is due in less than 1 hour!", task.name),
            tag: format!("task-{}", task.id),
        }
    }
}

/// Host capability for asking permission and showing notifications
pub trait NotificationHost {
    fn permission(&self) -> Permission;

    /// Resolve a `Default` permission. Decided permissions are left alone.
    fn request_permission(&mut self) -> Permission;

    /// Show a notification. Only called while permission is granted.
    fn dispatch(&mut self, notification: &Notification);
}

/// Show a notification if the host allows it. Returns whether it was sent.
pub fn notify(host: &mut dyn NotificationHost, notification: &Notification) -> bool {
    if host.permission() != Permission::Granted {
        debug!(tag = %notification.tag, "notification suppressed, permission not granted");
        return false;
    }
    host.dispatch(notification);
    true
}

/// Notifications through the operating system
#[derive(Debug)]
pub struct DesktopNotifier {
    permission: Permission,
}

impl DesktopNotifier {
    pub fn new(permission: Permission) -> Self {
        Self { permission }
    }

    /// Whether this platform has a notification backend at all
    pub fn is_supported() -> bool {
        cfg!(any(target_os = "macos", target_os = "linux"))
    }
}

impl NotificationHost for DesktopNotifier {
    fn permission(&self) -> Permission {
        if Self::is_supported() {
            self.permission
        } else {
            Permission::Denied
        }
    }

    fn request_permission(&mut self) -> Permission {
        if self.permission == Permission::Default {
            self.permission = if Self::is_supported() {
                Permission::Granted
            } else {
                Permission::Denied
            };
            debug!(permission = ?self.permission, "notification permission resolved");
        }
        self.permission
    }

    fn dispatch(&mut self, notification: &Notification) {
        if let Err(e) = send_desktop(notification) {
            debug!(error = %e, tag = %notification.tag, "desktop notification failed");
        }
    }
}

#[cfg(target_os = "macos")]
fn send_desktop(notification: &Notification) -> std::io::Result<()> {
    let script = format!(
        r#"display notification "{}" with title "{}""#,
        notification.body.replace('"', "\\\""),
        notification.title.replace('"', "\\\"")
    );

    Command::new("osascript").arg("-e").arg(&script).output()?;
    Ok(())
}

#[cfg(target_os = "linux")]
fn send_desktop(notification: &Notification) -> std::io::Result<()> {
    Command::new("notify-send")
        .arg("--app-name=doit")
        .arg(format!("--hint=string:x-canonical-private-synchronous:{}", notification.tag))
        .arg(&notification.title)
        .arg(&notification.body)
        .output()?;
    Ok(())
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn send_desktop(notification: &Notification) -> std::io::Result<()> {
    // No-op on other platforms
    let _ = notification;
    Ok(())
}

/// Host that keeps dispatched notifications in memory
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub permission: Permission,
    pub sent: Vec<Notification>,
    pub requests: usize,
}

#[cfg(test)]
impl RecordingHost {
    pub fn granted() -> Self {
        Self {
            permission: Permission::Granted,
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl NotificationHost for RecordingHost {
    fn permission(&self) -> Permission {
        self.permission
    }

    fn request_permission(&mut self) -> Permission {
        self.requests += 1;
        if self.permission == Permission::Default {
            self.permission = Permission::Granted;
        }
        self.permission
    }

    fn dispatch(&mut self, notification: &Notification) {
        self.sent.push(notification.clone());
    }
}

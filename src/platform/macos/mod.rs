//! macOS implementation using Quartz event services.
//!
//! ## Permissions
//!
//! Posting events requires the Accessibility permission (System Settings >
//! Privacy & Security > Accessibility) for the host application. Without it
//! every operation fails with
//! [`Error::PermissionDenied`](crate::Error::PermissionDenied).

mod keycodes;
mod simulate;

pub use simulate::MacBackend;

/// The backend used by default on macOS.
pub type NativeBackend = MacBackend;

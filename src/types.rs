//! Base types used throughout [`lwm-randr`]

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export
pub use x11rb::protocol::{
    randr::{Crtc, Output},
    xproto::{Timestamp, Window},
};

/// Type alias used for syntax compatibility
pub type Xid = u32;

/// The `None` resource in the X protocol. An [`Output`] without a [`Crtc`] has
/// this as its `crtc`
pub const NONE: Xid = x11rb::NONE;

/// Name given to a screen before its output has been queried
pub const MISSING_VALUE: &str = "N/A";

/// Window manager's name
#[macro_export]
macro_rules! WM_NAME (
    () => { "lwm-randr" };
);

// ============================= Screen Id ============================
// ====================================================================

/// Stable handle of a [`Screen`](crate::screen::Screen) in the
/// [`Screens`](crate::screen::Screens) arena. Handles are never reused
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ScreenId(pub(crate) u32);

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Screen({})", self.0)
    }
}

// =========================== Screen Edges ===========================
// ====================================================================

bitflags! {
    /// The edges of a screen that border another screen
    #[derive(Default)]
    pub struct Edges: u8 {
        /// The left edge
        const LEFT   = 0b0001;
        /// The right edge
        const RIGHT  = 0b0010;
        /// The top edge
        const TOP    = 0b0100;
        /// The bottom edge
        const BOTTOM = 0b1000;
    }
}

//! The requests the screen tracking layer makes to the X-Server
//!
//! Every reply is an owned value. Nothing obtained from the server outlives
//! the call that asked for it

use crate::{
    error::Error,
    geometry::Rectangle,
    types::{Crtc, Output, Timestamp},
    x::event::Rotation,
};

/// Reply to `RRGetScreenResourcesCurrent`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenResources {
    /// Every output known to the server, active or not
    pub outputs:          Vec<Output>,
    /// Timestamp the following `output_info`/`crtc_info` requests are made at
    pub config_timestamp: Timestamp,
}

/// Reply to `RRGetOutputInfo`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputInfo {
    /// The [`Crtc`] driving the output, [`NONE`](crate::types::NONE) when the
    /// output is inactive
    pub crtc: Crtc,
    /// Name of the output (e.g., `DP-1`)
    pub name: String,
}

/// Reply to `RRGetCrtcInfo`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrtcInfo {
    /// Area of the root window scanned out by the CRTC
    pub rectangle: Rectangle,
    /// Current rotation of the CRTC
    pub rotation:  Rotation,
}

/// Blocking `randr` requests against a display server
///
/// Implemented by [`XConnection`](crate::x::xconnection::XConnection) for a
/// live server
pub trait RandrBackend {
    /// The first event number of the `randr` extension, or `None` when the
    /// server does not have the extension
    fn extension_event_base(&self) -> Result<Option<u8>, Error>;

    /// Announce the client's version, returning the server's `(major, minor)`
    fn query_version(&self, major: u32, minor: u32) -> Result<(u32, u32), Error>;

    /// Subscribe the root window to CRTC and output change notifications
    fn select_input(&self) -> Result<(), Error>;

    /// Snapshot of the current screen resources
    fn screen_resources(&self) -> Result<ScreenResources, Error>;

    /// Information about a single output
    fn output_info(&self, res: &ScreenResources, output: Output) -> Result<OutputInfo, Error>;

    /// Information about a single CRTC
    fn crtc_info(&self, res: &ScreenResources, crtc: Crtc) -> Result<CrtcInfo, Error>;

    /// The output the server considers primary, [`NONE`](crate::types::NONE)
    /// if there is none
    fn output_primary(&self) -> Result<Output, Error>;
}

//! A simulated `randr` server for tests

use crate::{
    error::Error,
    geometry::Rectangle,
    types::{Crtc, Output, NONE},
    x::{
        backend::{CrtcInfo, OutputInfo, RandrBackend, ScreenResources},
        event::{CrtcChange, NotifyData, OutputChange, RandrNotify, Rotation, XEvent},
    },
};
use indexmap::IndexMap;
use std::{cell::Cell, collections::HashMap};
use x11rb::{errors::ConnectionError, protocol::randr};

/// An output plugged into the [`FakeServer`]
#[derive(Debug, Clone)]
struct FakeOutput {
    name:     String,
    crtc:     Crtc,
    /// Queries for the output fail, as if it disappeared mid-request
    vanished: bool,
}

/// In-memory display server answering [`RandrBackend`] requests
#[derive(Debug)]
pub(crate) struct FakeServer {
    /// First event of the extension, `None` when `randr` is missing
    pub(crate) event_base: Option<u8>,
    /// Version the server reports, `None` to make the query fail
    pub(crate) version:    Option<(u32, u32)>,
    /// Whether a client selected `randr` input
    pub(crate) subscribed: Cell<bool>,
    outputs:               IndexMap<Output, FakeOutput>,
    crtcs:                 HashMap<Crtc, CrtcInfo>,
    primary:               Output,
    timestamp:             u32,
}

/// Error returned by any failing request
fn failure() -> Error {
    Error::Request(ConnectionError::UnknownError)
}

impl FakeServer {
    /// A server with `randr` 1.6 and nothing plugged in
    pub(crate) fn new() -> Self {
        Self {
            event_base: Some(89),
            version:    Some((1, 6)),
            subscribed: Cell::new(false),
            outputs:    IndexMap::new(),
            crtcs:      HashMap::new(),
            primary:    NONE,
            timestamp:  1,
        }
    }

    /// Plug in `output`, driven by `crtc` at `rect`. A `crtc` of
    /// [`NONE`] leaves the output connected, but inactive
    pub(crate) fn plug(&mut self, output: Output, name: &str, crtc: Crtc, rect: Rectangle) {
        self.outputs.insert(output, FakeOutput {
            name: name.to_owned(),
            crtc,
            vanished: false,
        });
        if crtc != NONE {
            self.crtcs.insert(crtc, CrtcInfo {
                rectangle: rect,
                rotation:  Rotation::Normal,
            });
        }
        self.timestamp += 1;
    }

    /// Turn `output` off, releasing its CRTC
    pub(crate) fn disable(&mut self, output: Output) {
        if let Some(out) = self.outputs.get_mut(&output) {
            self.crtcs.remove(&out.crtc);
            out.crtc = NONE;
        }
        self.timestamp += 1;
    }

    /// Make every request about `output` fail
    pub(crate) fn vanish(&mut self, output: Output) {
        if let Some(out) = self.outputs.get_mut(&output) {
            out.vanished = true;
        }
    }

    /// Move and resize `crtc`
    pub(crate) fn configure(&mut self, crtc: Crtc, rect: Rectangle) {
        if let Some(info) = self.crtcs.get_mut(&crtc) {
            info.rectangle = rect;
        }
        self.timestamp += 1;
    }

    /// Designate `output` as primary
    pub(crate) fn set_primary(&mut self, output: Output) {
        self.primary = output;
    }

    /// The `RRNotify` event type of this server
    fn notify_type(&self) -> u8 {
        self.event_base.unwrap_or_default() + randr::NOTIFY_EVENT
    }

    /// An output change notification for `output`
    pub(crate) fn output_change(&self, output: Output) -> XEvent {
        let crtc = self.outputs.get(&output).map_or(NONE, |o| o.crtc);
        XEvent::RandrNotify(RandrNotify {
            response_type: self.notify_type(),
            data:          NotifyData::OutputChange(OutputChange { output, crtc }),
        })
    }

    /// A CRTC change notification
    pub(crate) fn crtc_change(
        &self,
        crtc: Crtc,
        rect: Rectangle,
        rotation: Rotation,
    ) -> XEvent {
        XEvent::RandrNotify(RandrNotify {
            response_type: self.notify_type(),
            data:          NotifyData::CrtcChange(CrtcChange {
                crtc,
                x: rect.point.x as i16,
                y: rect.point.y as i16,
                width: rect.dimension.width as u16,
                height: rect.dimension.height as u16,
                rotation,
            }),
        })
    }

    /// A notification of an arbitrary subtype
    pub(crate) fn notify(&self, data: NotifyData) -> XEvent {
        XEvent::RandrNotify(RandrNotify {
            response_type: self.notify_type(),
            data,
        })
    }
}

impl RandrBackend for FakeServer {
    fn extension_event_base(&self) -> Result<Option<u8>, Error> {
        Ok(self.event_base)
    }

    fn query_version(&self, _major: u32, _minor: u32) -> Result<(u32, u32), Error> {
        self.version.ok_or_else(failure)
    }

    fn select_input(&self) -> Result<(), Error> {
        self.subscribed.set(true);
        Ok(())
    }

    fn screen_resources(&self) -> Result<ScreenResources, Error> {
        Ok(ScreenResources {
            outputs:          self.outputs.keys().copied().collect(),
            config_timestamp: self.timestamp,
        })
    }

    fn output_info(&self, _res: &ScreenResources, output: Output) -> Result<OutputInfo, Error> {
        match self.outputs.get(&output) {
            Some(out) if !out.vanished => Ok(OutputInfo {
                crtc: out.crtc,
                name: out.name.clone(),
            }),
            _ => Err(failure()),
        }
    }

    fn crtc_info(&self, _res: &ScreenResources, crtc: Crtc) -> Result<CrtcInfo, Error> {
        self.crtcs.get(&crtc).copied().ok_or_else(failure)
    }

    fn output_primary(&self) -> Result<Output, Error> {
        Ok(self.primary)
    }
}

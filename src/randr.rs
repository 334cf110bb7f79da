//! Keeping the [`Screens`] in sync with the outputs reported by `randr`
//!
//! Event payloads are never trusted on their own. A CRTC change and an output
//! change can both arrive for the same physical change, in either order, so
//! every handler asks the server for the current state before acting on it

use crate::{
    error::Error,
    geometry::{Dimension, Point, Rectangle},
    hooks::ScreenHooks,
    screen::{Screen, Screens},
    types::{Output, ScreenId, NONE},
    x::{
        backend::{OutputInfo, RandrBackend, ScreenResources},
        event::{CrtcChange, NotifyData, XEvent},
    },
};
use x11rb::protocol::randr;

/// Major version of `randr` that is supported
pub const RANDR_MAJOR: u32 = 1;
/// Lowest minor version of `randr` that is supported
pub const RANDR_MINOR: u32 = 3;

/// What was negotiated with the server at startup
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether `randr` is usable. Never reset once set
    pub supported:  bool,
    /// First event number of the extension
    pub event_base: u8,
}

/// The screen tracking context
#[derive(Debug)]
pub struct Randr<B> {
    /// Connection used for every query
    backend: B,
    /// Result of the negotiation
    caps:    Capabilities,
}

impl<B: RandrBackend> Randr<B> {
    /// Negotiate `randr` support and subscribe to change notifications
    ///
    /// A server without a usable `randr` is not an error: the returned context
    /// is inert, ignores every event and considers no screen primary
    pub fn initialize(backend: B) -> Self {
        let caps = match Self::negotiate(&backend) {
            Ok(event_base) => {
                log::debug!("`randr` is supported, events start at {}", event_base);
                Capabilities {
                    supported: true,
                    event_base,
                }
            },
            Err(e @ Error::UnsupportedVersion { .. }) => {
                log::warn!("{}", e);
                Capabilities::default()
            },
            Err(e @ Error::ExtensionMissing(_)) => {
                log::info!("not tracking screens with `randr`: {}", e);
                Capabilities::default()
            },
            Err(e) => {
                log::error!("failed to negotiate `randr`: {}", e);
                Capabilities::default()
            },
        };

        Self { backend, caps }
    }

    /// Check the extension and its version, then select input. Returns the
    /// extension's event base
    fn negotiate(backend: &B) -> Result<u8, Error> {
        let event_base = backend
            .extension_event_base()?
            .ok_or(Error::ExtensionMissing(randr::X11_EXTENSION_NAME))?;

        let (major, minor) = backend.query_version(RANDR_MAJOR, RANDR_MINOR)?;
        if major != RANDR_MAJOR || minor < RANDR_MINOR {
            return Err(Error::UnsupportedVersion { major, minor });
        }

        backend.select_input()?;
        Ok(event_base)
    }

    // ========================= Accessor ========================= [[[

    /// Return what was negotiated
    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    /// Whether `randr` is usable
    pub fn supported(&self) -> bool {
        self.caps.supported
    }

    /// Return the connection to the server
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Return the connection to the server, mutably
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Whether `screen` is on the primary output
    pub fn is_primary(&self, screen: &Screen) -> bool {
        self.caps.supported && screen.randr.primary
    }

    // ]]] === Accessor ===

    // ========================== Queries ========================= [[[

    /// Fetch the current screen resources and the information of `output`
    fn current_output(&self, output: Output) -> Result<(ScreenResources, OutputInfo), Error> {
        let res = self.backend.screen_resources()?;
        let info = self.backend.output_info(&res, output)?;
        Ok((res, info))
    }

    /// Every output currently driven by a CRTC
    pub fn active_outputs(&self) -> Result<Vec<Output>, Error> {
        let res = self.backend.screen_resources()?;

        Ok(res
            .outputs
            .iter()
            .copied()
            .filter(|&output| match self.backend.output_info(&res, output) {
                Ok(info) => info.crtc != NONE,
                Err(e) => {
                    log::debug!("skipping Output({:#0x}): {}", output, e);
                    false
                },
            })
            .collect())
    }

    /// Query the server for the geometry, name and primary status of `output`
    /// and store them in `screen`
    ///
    /// When the output has no CRTC, or any query fails, `screen` is left
    /// untouched and `false` is returned
    pub fn refresh_geometry(&self, output: Output, screen: &mut Screen) -> bool {
        let (res, info) = match self.current_output(output) {
            Ok((res, info)) if info.crtc != NONE => (res, info),
            Ok(_) => {
                log::debug!("Output({:#0x}) has no crtc", output);
                return false;
            },
            Err(e) => {
                log::debug!("failed to get info of Output({:#0x}): {}", output, e);
                return false;
            },
        };

        let crtc = match self.backend.crtc_info(&res, info.crtc) {
            Ok(crtc) => crtc,
            Err(e) => {
                log::debug!("failed to get info of Crtc({:#0x}): {}", info.crtc, e);
                return false;
            },
        };

        log::trace!("Crtc({:#0x}) is at {}, {}", info.crtc, crtc.rectangle, crtc.rotation);

        let primary = self.backend.output_primary().unwrap_or_else(|e| {
            log::debug!("failed to get primary output: {}", e);
            NONE
        });

        screen.randr.primary = output == primary;
        screen.randr.name = info.name;
        screen.randr.output = output;
        screen.randr.crtc = info.crtc;
        screen.rectangle = crtc.rectangle;

        true
    }

    // ]]] === Queries ===

    // ========================== Screens ========================= [[[

    /// Track `output` and fill in its screen. If the output lost its CRTC in
    /// the meantime the screen is dropped again
    fn add_screen(&self, output: Output, screens: &mut Screens) -> Option<ScreenId> {
        let id = screens.add(output);
        let bound = screens
            .get_mut(id)
            .map_or(false, |screen| self.refresh_geometry(output, screen));

        if bound {
            Some(id)
        } else {
            log::debug!("Output({:#0x}) went away while being added", output);
            screens.del(id);
            None
        }
    }

    /// Add a screen for every active output that is not tracked yet. Used at
    /// startup, before any event is handled
    pub fn populate<H: ScreenHooks>(
        &self,
        screens: &mut Screens,
        hooks: &mut H,
    ) -> Result<(), Error> {
        for output in self.active_outputs()? {
            if screens.find_by_output(output).is_none() {
                self.add_screen(output, screens);
            }
        }

        screens.sort();
        screens.mark_edges();

        for screen in screens.iter_mut() {
            hooks.update_workarea(screen);
            hooks.update_frames(screen);
        }

        Ok(())
    }

    /// Track a single screen covering the whole root window. Used when
    /// `randr` is unsupported and outputs cannot be told apart
    pub fn populate_root<H: ScreenHooks>(
        &self,
        screens: &mut Screens,
        root: Dimension,
        hooks: &mut H,
    ) -> ScreenId {
        let id = screens.add(NONE);
        if let Some(screen) = screens.update(id, Rectangle {
            point:     Point::default(),
            dimension: root,
        }) {
            hooks.update_workarea(screen);
            hooks.update_frames(screen);
        }

        id
    }

    // ]]] === Screens ===

    // ========================== Events ========================== [[[

    /// Handle a notification that `output` was added, removed or changed
    ///
    /// Every screen is refreshed afterwards, not only the one that changed.
    /// Removing a monitor can shift the coordinates of all the others
    pub fn handle_output_change<H: ScreenHooks>(
        &self,
        output: Output,
        screens: &mut Screens,
        hooks: &mut H,
    ) {
        let info = self
            .current_output(output)
            .map(|(_, info)| info)
            .map_err(|e| log::debug!("failed to get info of Output({:#0x}): {}", output, e))
            .ok();
        let crtc = info.as_ref().map_or(NONE, |info| info.crtc);

        let tracked = screens.find_by_output(output);

        // The bar might move if the primary screen changed
        for screen in screens.iter() {
            hooks.hide_bar(screen);
        }
        screens.mark_edges();

        match tracked {
            None if crtc != NONE =>
                if let Some(id) = self.add_screen(output, screens) {
                    screens.sort();
                    log::debug!("added {} with Crtc({:#0x})", id, crtc);
                },
            Some(id) if crtc == NONE => {
                if let Some(screen) = screens.del(id) {
                    log::debug!("removed {} ({})", id, screen.randr.name);
                }
            },
            _ => {},
        }

        for screen in screens.iter_mut() {
            let output = screen.output();
            self.refresh_geometry(output, screen);
            hooks.update_workarea(screen);
            hooks.update_frames(screen);
        }

        // Geometry may have moved since the edges were marked
        screens.mark_edges();

        hooks.redraw_sticky_bar_text();
    }

    /// Handle a notification that a CRTC was moved, resized or rotated
    ///
    /// Only the screen bound to the CRTC is touched. A CRTC that is not
    /// tracked is either not added yet or already removed by an output change,
    /// and is ignored
    pub fn handle_crtc_change<H: ScreenHooks>(
        &self,
        change: &CrtcChange,
        screens: &mut Screens,
        hooks: &mut H,
    ) {
        if change.crtc == NONE || change.width == 0 || change.height == 0 {
            return;
        }

        let id = screens.find_by_crtc(change.crtc);

        log::debug!(
            "Crtc({:#0x}) {}, rotation {} x {}, y {}, width {}, height {}",
            change.crtc,
            if id.is_some() { "found" } else { "not found" },
            change.rotation,
            change.x,
            change.y,
            change.width,
            change.height
        );

        if let Some(screen) = id.and_then(|id| screens.update(id, change.rectangle())) {
            hooks.update_screen(screen);
        }
    }

    /// Route an event to the handler for its `randr` subtype
    ///
    /// Returns whether the event was a `randr` notification. Events of other
    /// extensions, and every event when `randr` is unsupported, are ignored
    pub fn dispatch<H: ScreenHooks>(
        &self,
        event: &XEvent,
        screens: &mut Screens,
        hooks: &mut H,
    ) -> bool {
        let notify = match event {
            XEvent::RandrNotify(notify) if self.caps.supported => notify,
            _ => return false,
        };

        if notify.event_type() != self.caps.event_base.wrapping_add(randr::NOTIFY_EVENT) {
            return false;
        }

        log::debug!("--- Handling RRNotify ---");

        match notify.data {
            NotifyData::OutputChange(ref oc) => {
                log::debug!(
                    "---          OutputChange Output({:#0x}) Crtc({:#0x}) ---",
                    oc.output,
                    oc.crtc
                );
                self.handle_output_change(oc.output, screens, hooks);
            },
            NotifyData::CrtcChange(ref cc) => {
                log::debug!("---          CrtcChange ---");
                self.handle_crtc_change(cc, screens, hooks);
            },
            NotifyData::OutputProperty(output) => {
                log::debug!("---          OutputProperty Output({:#0x}) ---", output);
            },
            NotifyData::Other(subtype) => {
                log::debug!("---          Unknown subtype {} ---", subtype);
            },
        }

        true
    }

    // ]]] === Events ===
}

//! The connection to the X-Server

use crate::{
    error::Error,
    geometry::{Dimension, Rectangle},
    types::{Crtc, Output, Window},
    x::{
        backend::{CrtcInfo, OutputInfo, RandrBackend, ScreenResources},
        event::{Rotation, XEvent},
    },
};
use x11rb::{
    connection::{Connection, RequestConnection},
    protocol::randr::{self, ConnectionExt as _},
    rust_connection::RustConnection,
};

/// The main connection to the X-Server
pub struct XConnection {
    /// Connection to the X-Server
    conn:   RustConnection,
    /// Screen number the connection is attached to
    screen: usize,
}

impl XConnection {
    /// Setup the X11 [`Connection`](RustConnection) to the server in `$DISPLAY`
    pub fn connect() -> Result<Self, Error> {
        let (conn, screen) = RustConnection::connect(None)?;
        log::debug!("connected to the X-Server on screen {}", screen);
        Ok(Self { conn, screen })
    }

    // ========================= Accessor ========================= [[[

    /// Return the connection to the X-Server
    pub fn aux(&self) -> &RustConnection {
        &self.conn
    }

    /// Return the `root` window
    pub fn root(&self) -> Window {
        self.aux().setup().roots[self.screen].root
    }

    /// Return the size of the `root` window
    pub fn root_size(&self) -> Dimension {
        let screen = &self.aux().setup().roots[self.screen];
        Dimension::new(screen.width_in_pixels.into(), screen.height_in_pixels.into())
    }

    // ]]] === Accessor ===

    // ========================== Events ========================== [[[

    /// Block until the next event arrives
    pub fn next_event(&self) -> Result<XEvent, Error> {
        let raw = self.aux().wait_for_raw_event()?;
        let response_type = raw.first().copied().unwrap_or_default();
        let event = self.aux().parse_event(&raw)?;

        log::trace!("received event of type {}", response_type);
        Ok(XEvent::new(response_type, &event))
    }

    // ]]] === Events ===
}

impl RandrBackend for XConnection {
    fn extension_event_base(&self) -> Result<Option<u8>, Error> {
        log::debug!("checking that `{}` is installed", randr::X11_EXTENSION_NAME);
        Ok(self
            .aux()
            .extension_information(randr::X11_EXTENSION_NAME)?
            .map(|info| info.first_event))
    }

    fn query_version(&self, major: u32, minor: u32) -> Result<(u32, u32), Error> {
        let reply = self.aux().randr_query_version(major, minor)?.reply()?;
        Ok((reply.major_version, reply.minor_version))
    }

    fn select_input(&self) -> Result<(), Error> {
        log::debug!("selecting randr input on Window({:#0x})", self.root());
        self.aux()
            .randr_select_input(
                self.root(),
                randr::NotifyMask::CRTC_CHANGE | randr::NotifyMask::OUTPUT_CHANGE,
            )?
            .check()?;

        Ok(())
    }

    fn screen_resources(&self) -> Result<ScreenResources, Error> {
        let reply = self
            .aux()
            .randr_get_screen_resources_current(self.root())?
            .reply()?;

        Ok(ScreenResources {
            outputs:          reply.outputs,
            config_timestamp: reply.config_timestamp,
        })
    }

    fn output_info(&self, res: &ScreenResources, output: Output) -> Result<OutputInfo, Error> {
        let reply = self
            .aux()
            .randr_get_output_info(output, res.config_timestamp)?
            .reply()?;

        Ok(OutputInfo {
            crtc: reply.crtc,
            name: String::from_utf8_lossy(&reply.name).into_owned(),
        })
    }

    fn crtc_info(&self, res: &ScreenResources, crtc: Crtc) -> Result<CrtcInfo, Error> {
        let reply = self
            .aux()
            .randr_get_crtc_info(crtc, res.config_timestamp)?
            .reply()?;

        Ok(CrtcInfo {
            rectangle: Rectangle::new(
                reply.x.into(),
                reply.y.into(),
                reply.width.into(),
                reply.height.into(),
            ),
            rotation:  Rotation::from(u16::from(reply.rotation)),
        })
    }

    fn output_primary(&self) -> Result<Output, Error> {
        Ok(self.aux().randr_get_output_primary(self.root())?.reply()?.output)
    }
}

// vim: ft=rust:et:sw=4:ts=2:sts=4:tw=99:fdm=marker:fmr=[[[,]]]:

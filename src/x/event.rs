//! X11 Events

use crate::{
    geometry::Rectangle,
    types::{Crtc, Output},
};
use std::fmt;
use x11rb::protocol::{randr, Event};

// ============================== XEvent ==============================

/// Low-level wrapper around X-server events
///
/// Only what the screen tracking layer needs is decoded, the rest is kept as
/// its response type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XEvent {
    /// Received a randr notification
    RandrNotify(RandrNotify),
    /// Unknown event type, used as a catchall for events not tracked here
    Unknown(u8),
}

impl XEvent {
    /// Wrap an event parsed by `x11rb`. `response_type` is the first byte of
    /// the raw event
    pub fn new(response_type: u8, event: &Event) -> Self {
        match event {
            Event::RandrNotify(ev) => Self::RandrNotify(RandrNotify::from(ev)),
            _ => Self::Unknown(response_type),
        }
    }
}

// =========================== RandrNotify ============================

/// A `RRNotify` event with its subtype specific data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandrNotify {
    /// The raw event type, including the `SendEvent` bit
    pub response_type: u8,
    /// The decoded payload, selected by the event's subtype
    pub data:          NotifyData,
}

impl RandrNotify {
    /// The event type with the `SendEvent` bit masked off
    pub const fn event_type(&self) -> u8 {
        self.response_type & 0x7f
    }
}

/// Data carried by an `RRNotify` event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyData {
    /// A CRTC changed its geometry, mode or rotation
    CrtcChange(CrtcChange),
    /// An output was connected, disconnected or reconfigured
    OutputChange(OutputChange),
    /// A property of an output changed
    OutputProperty(Output),
    /// Any other subtype (providers, leases, resources)
    Other(u8),
}

/// Data associated with a CRTC change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrtcChange {
    /// The CRTC that changed
    pub crtc:     Crtc,
    /// X coordinate of the CRTC
    pub x:        i16,
    /// Y coordinate of the CRTC
    pub y:        i16,
    /// Width of the CRTC, before rotation
    pub width:    u16,
    /// Height of the CRTC, before rotation
    pub height:   u16,
    /// Rotation applied to the CRTC
    pub rotation: Rotation,
}

impl CrtcChange {
    /// The area covered by the CRTC on the root window, with `width` and
    /// `height` swapped for quarter turns
    pub fn rectangle(&self) -> Rectangle {
        let rect = Rectangle::new(
            self.x.into(),
            self.y.into(),
            self.width.into(),
            self.height.into(),
        );

        if self.rotation.is_quarter_turn() {
            Rectangle {
                dimension: rect.dimension.transposed(),
                ..rect
            }
        } else {
            rect
        }
    }
}

/// Data associated with an output change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputChange {
    /// The output that changed
    pub output: Output,
    /// The CRTC the event claims is bound. Not trusted, the server is queried
    /// again when handling the event
    pub crtc:   Crtc,
}

impl From<&randr::NotifyEvent> for RandrNotify {
    fn from(ev: &randr::NotifyEvent) -> Self {
        let sub_code = u8::from(ev.sub_code);

        let data = if sub_code == u8::from(randr::Notify::CRTC_CHANGE) {
            let cc = ev.u.as_cc();
            NotifyData::CrtcChange(CrtcChange {
                crtc:     cc.crtc,
                x:        cc.x,
                y:        cc.y,
                width:    cc.width,
                height:   cc.height,
                rotation: Rotation::from(u16::from(cc.rotation)),
            })
        } else if sub_code == u8::from(randr::Notify::OUTPUT_CHANGE) {
            let oc = ev.u.as_oc();
            NotifyData::OutputChange(OutputChange {
                output: oc.output,
                crtc:   oc.crtc,
            })
        } else if sub_code == u8::from(randr::Notify::OUTPUT_PROPERTY) {
            NotifyData::OutputProperty(ev.u.as_op().output)
        } else {
            NotifyData::Other(sub_code)
        };

        Self {
            response_type: ev.response_type,
            data,
        }
    }
}

// ============================= Rotation =============================

/// Rotation of a CRTC, as reported in a CRTC change event. Values are the
/// `RR_Rotate_*` bits of the protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// `RR_Rotate_0`
    Normal,
    /// `RR_Rotate_90`
    Left,
    /// `RR_Rotate_180`
    Inverted,
    /// `RR_Rotate_270`
    Right,
    /// Anything that is not exactly one of the rotations above
    Unknown(u16),
}

impl Rotation {
    /// Does the rotation turn the raster on its side?
    pub const fn is_quarter_turn(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl From<u16> for Rotation {
    fn from(value: u16) -> Self {
        match value {
            1 => Self::Normal,
            2 => Self::Left,
            4 => Self::Inverted,
            8 => Self::Right,
            v => Self::Unknown(v),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "RR_Rotate_0"),
            Self::Left => write!(f, "RR_Rotate_90"),
            Self::Inverted => write!(f, "RR_Rotate_180"),
            Self::Right => write!(f, "RR_Rotate_270"),
            Self::Unknown(v) => write!(f, "Unknown rotation {}", v),
        }
    }
}

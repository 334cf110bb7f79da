//! Logical screens and the list that tracks them

use crate::{
    geometry::Rectangle,
    types::{Crtc, Edges, Output, ScreenId, MISSING_VALUE, NONE},
};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

// ============================== Screen ============================== [[[

/// What binds a [`Screen`] to the hardware
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RandrInfo {
    /// The output the screen represents
    pub output:  Output,
    /// The CRTC driving the output
    pub crtc:    Crtc,
    /// Name of the output (e.g., `HDMI-1`)
    pub name:    String,
    /// Whether the server designates the output as primary
    pub primary: bool,
}

/// Represents a monitor region tracked by the window manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    /// Handle of the screen in [`Screens`]
    id:            ScreenId,
    /// Area of the root window covered by the screen
    pub rectangle: Rectangle,
    /// Area left for windows once the bar and padding are taken out
    pub workarea:  Rectangle,
    /// Hardware binding
    pub randr:     RandrInfo,
    /// Sides of the screen that border another screen
    #[serde(skip)]
    pub edges:     Edges,
}

impl Screen {
    /// Create a new [`Screen`] for `output`. It has no geometry until it is
    /// refreshed from the server
    fn new(id: ScreenId, output: Output) -> Self {
        Self {
            id,
            rectangle: Rectangle::default(),
            workarea: Rectangle::default(),
            randr: RandrInfo {
                output,
                crtc: NONE,
                name: MISSING_VALUE.to_owned(),
                primary: false,
            },
            edges: Edges::empty(),
        }
    }

    /// Return the screen's handle
    pub const fn id(&self) -> ScreenId {
        self.id
    }

    /// Return the output the screen represents
    pub const fn output(&self) -> Output {
        self.randr.output
    }

    /// Return the CRTC bound to the screen
    pub const fn crtc(&self) -> Crtc {
        self.randr.crtc
    }

    /// Return the name of the screen's output
    pub fn name(&self) -> &str {
        &self.randr.name
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} output: {:#0x} crtc: {:#0x} {}{}",
            self.id,
            self.randr.name,
            self.randr.output,
            self.randr.crtc,
            self.rectangle,
            if self.randr.primary { " primary" } else { "" }
        )
    }
}

// ]]] === Screen ===

// ============================== Screens ============================= [[[

/// The ordered list of every tracked [`Screen`]
///
/// Lookups scan the list. There is one entry per active monitor, so the list
/// is never long
#[derive(Debug, Default, Clone)]
pub struct Screens {
    /// Screens in display order
    screens: IndexMap<ScreenId, Screen>,
    /// Handle given to the next screen that is added
    next_id: u32,
}

impl Screens {
    /// Create an empty [`Screens`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked screens
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Whether no screen is tracked
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Return the [`Screen`] with the given handle
    pub fn get(&self, id: ScreenId) -> Option<&Screen> {
        self.screens.get(&id)
    }

    /// Return the [`Screen`] with the given handle, mutably
    pub fn get_mut(&mut self, id: ScreenId) -> Option<&mut Screen> {
        self.screens.get_mut(&id)
    }

    /// Iterate over the screens in display order
    pub fn iter(&self) -> impl Iterator<Item = &Screen> {
        self.screens.values()
    }

    /// Iterate mutably over the screens in display order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Screen> {
        self.screens.values_mut()
    }

    // ========================== Lookup ========================== [[[

    /// Find the screen that represents `output`
    pub fn find_by_output(&self, output: Output) -> Option<ScreenId> {
        self.iter().find(|s| s.randr.output == output).map(Screen::id)
    }

    /// Find the screen that is driven by `crtc`
    pub fn find_by_crtc(&self, crtc: Crtc) -> Option<ScreenId> {
        self.iter().find(|s| s.randr.crtc == crtc).map(Screen::id)
    }

    // ]]] === Lookup ===

    // ======================== Modification ====================== [[[

    /// Start tracking `output`, returning the new screen's handle. An output
    /// is only ever tracked once, so adding it again returns the existing
    /// handle
    pub fn add(&mut self, output: Output) -> ScreenId {
        if let Some(id) = self.find_by_output(output) {
            log::warn!("Output({:#0x}) is already tracked by {}", output, id);
            return id;
        }

        let id = ScreenId(self.next_id);
        self.next_id += 1;

        log::debug!("adding {} for Output({:#0x})", id, output);
        self.screens.insert(id, Screen::new(id, output));
        id
    }

    /// Stop tracking a screen, returning it
    pub fn del(&mut self, id: ScreenId) -> Option<Screen> {
        let screen = self.screens.shift_remove(&id);
        if let Some(ref s) = screen {
            log::debug!("removing {} ({})", id, s.randr.name);
        }
        screen
    }

    /// Replace the geometry of a screen
    pub fn update(&mut self, id: ScreenId, rectangle: Rectangle) -> Option<&mut Screen> {
        let screen = self.screens.get_mut(&id)?;
        log::debug!("{}: {} => {}", id, screen.rectangle, rectangle);
        screen.rectangle = rectangle;
        Some(screen)
    }

    /// Order the screens left to right, then top to bottom
    pub fn sort(&mut self) {
        self.screens.sort_by(|_, a, _, b| {
            (a.rectangle.point.x, a.rectangle.point.y)
                .cmp(&(b.rectangle.point.x, b.rectangle.point.y))
        });
    }

    /// Recompute which edges of every screen border another screen
    pub fn mark_edges(&mut self) {
        let rects = self
            .iter()
            .map(|s| (s.id, s.rectangle))
            .collect::<Vec<_>>();

        for screen in self.screens.values_mut() {
            let edges = rects
                .iter()
                .filter(|(id, _)| *id != screen.id)
                .fold(Edges::empty(), |edges, (_, rect)| {
                    edges | screen.rectangle.adjacent_edges(rect)
                });
            screen.edges = edges;
        }
    }

    // ]]] === Modification ===
}

// ]]] === Screens ===

#[cfg(test)]
mod tests {
    use super::{Screens, MISSING_VALUE, NONE};
    use crate::{geometry::Rectangle, types::Edges};

    /// Build a list of screens, one per `(output, crtc, rectangle)`
    fn screens(layout: &[(u32, u32, Rectangle)]) -> Screens {
        let mut screens = Screens::new();
        for &(output, crtc, rect) in layout {
            let id = screens.add(output);
            let screen = screens.get_mut(id).unwrap();
            screen.randr.crtc = crtc;
            screen.rectangle = rect;
        }
        screens
    }

    #[test]
    fn new_screen_is_unbound() {
        let mut screens = Screens::new();
        let id = screens.add(0x42);
        let screen = screens.get(id).unwrap();

        assert_eq!(screen.output(), 0x42);
        assert_eq!(screen.crtc(), NONE);
        assert_eq!(screen.name(), MISSING_VALUE);
        assert!(!screen.randr.primary);
    }

    #[test]
    fn adding_an_output_twice_keeps_one_screen() {
        let mut screens = Screens::new();
        let first = screens.add(0x42);
        let second = screens.add(0x42);

        assert_eq!(first, second);
        assert_eq!(screens.len(), 1);
    }

    #[test]
    fn lookup_by_output_and_crtc() {
        let screens = screens(&[
            (0x42, 0x3f, Rectangle::new(0, 0, 1920, 1080)),
            (0x43, 0x40, Rectangle::new(1920, 0, 1280, 1024)),
        ]);

        let by_output = screens.find_by_output(0x43).unwrap();
        let by_crtc = screens.find_by_crtc(0x40).unwrap();
        assert_eq!(by_output, by_crtc);

        assert_eq!(screens.find_by_output(0x44), None);
        assert_eq!(screens.find_by_crtc(0x41), None);
    }

    #[test]
    fn handles_are_not_reused() {
        let mut screens = Screens::new();
        let a = screens.add(0x42);
        screens.del(a);
        let b = screens.add(0x42);

        assert_ne!(a, b);
        assert!(screens.get(a).is_none());
        assert!(screens.get(b).is_some());
    }

    #[test]
    fn sort_orders_left_to_right_then_top_to_bottom() {
        let mut screens = screens(&[
            (0x44, 0x41, Rectangle::new(1920, 1080, 800, 600)),
            (0x43, 0x40, Rectangle::new(1920, 0, 1280, 1024)),
            (0x42, 0x3f, Rectangle::new(0, 0, 1920, 1080)),
        ]);
        screens.sort();

        let order = screens.iter().map(|s| s.output()).collect::<Vec<_>>();
        assert_eq!(order, vec![0x42, 0x43, 0x44]);
    }

    #[test]
    fn mark_edges_of_a_row() {
        let mut screens = screens(&[
            (0x42, 0x3f, Rectangle::new(0, 0, 1920, 1080)),
            (0x43, 0x40, Rectangle::new(1920, 0, 1920, 1080)),
            (0x44, 0x41, Rectangle::new(3840, 0, 1920, 1080)),
        ]);
        screens.mark_edges();

        let edges = screens.iter().map(|s| s.edges).collect::<Vec<_>>();
        assert_eq!(
            edges,
            vec![Edges::RIGHT, Edges::LEFT | Edges::RIGHT, Edges::LEFT]
        );

        // Removing the middle screen leaves two islands
        let middle = screens.find_by_output(0x43).unwrap();
        screens.del(middle);
        screens.mark_edges();
        assert!(screens.iter().all(|s| s.edges.is_empty()));
    }

    #[test]
    fn update_replaces_geometry() {
        let mut screens = screens(&[(0x42, 0x3f, Rectangle::new(0, 0, 1920, 1080))]);
        let id = screens.find_by_crtc(0x3f).unwrap();

        screens.update(id, Rectangle::new(0, 0, 1080, 1920));
        assert_eq!(
            screens.get(id).unwrap().rectangle,
            Rectangle::new(0, 0, 1080, 1920)
        );
    }
}

//! Side effects of a screen changing, owned by the rest of the window manager

use crate::{geometry::Padding, screen::Screen};

/// What the window manager does with its frames and its bar when the screen
/// layout changes
pub trait ScreenHooks {
    /// Hide the bar on `screen`. The bar's position depends on which screen is
    /// primary, which may be about to change
    fn hide_bar(&mut self, screen: &Screen);

    /// Recompute the area of `screen` that is left for windows
    fn update_workarea(&mut self, screen: &mut Screen);

    /// Lay the frames of `screen` out again
    fn update_frames(&mut self, screen: &Screen);

    /// `screen` was moved or resized in place
    fn update_screen(&mut self, screen: &mut Screen) {
        self.update_workarea(screen);
        self.update_frames(screen);
    }

    /// Redraw any persistent text on the bar
    fn redraw_sticky_bar_text(&mut self);
}

/// [`ScreenHooks`] that keep a padded workarea and log everything else
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultHooks {
    /// Space reserved around the workarea of every screen
    padding: Padding,
}

impl DefaultHooks {
    /// Create a new [`DefaultHooks`]
    pub const fn new(padding: Padding) -> Self {
        Self { padding }
    }
}

impl ScreenHooks for DefaultHooks {
    fn hide_bar(&mut self, screen: &Screen) {
        log::trace!("hiding bar on {}", screen.id());
    }

    fn update_workarea(&mut self, screen: &mut Screen) {
        screen.workarea = screen.rectangle - self.padding;
        log::debug!("{}: workarea {}", screen.id(), screen.workarea);
    }

    fn update_frames(&mut self, screen: &Screen) {
        log::trace!("laying out frames on {}", screen.id());
    }

    fn redraw_sticky_bar_text(&mut self) {
        log::trace!("redrawing sticky bar text");
    }
}

#[cfg(test)]
mod tests {
    use super::{DefaultHooks, ScreenHooks};
    use crate::{
        geometry::{Padding, Rectangle},
        screen::Screens,
    };

    #[test]
    fn workarea_is_padded() {
        let mut screens = Screens::new();
        let id = screens.add(0x42);
        let screen = screens.update(id, Rectangle::new(1920, 0, 1280, 1024)).unwrap();

        let mut hooks = DefaultHooks::new(Padding::new(24, 0, 0, 0));
        hooks.update_screen(screen);

        assert_eq!(screen.workarea, Rectangle::new(1920, 24, 1280, 1000));
    }
}

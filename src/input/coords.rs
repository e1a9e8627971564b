//! Coordinate conversion between screen space and the board surface.
//!
//! Pointer events arrive in screen coordinates. Notes live in
//! surface-local coordinates measured from the surface's top-left corner.
//! Every handler converts through [`SurfaceBounds`] before touching the store.

/// Screen-space placement of the bounded surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBounds {
    /// Top-left corner in screen coordinates
    pub origin: (f32, f32),
    /// Width and height
    pub size: (f32, f32),
}

impl SurfaceBounds {
    pub fn new(origin: (f32, f32), size: (f32, f32)) -> Self {
        Self { origin, size }
    }

    /// Surface at the screen origin.
    pub fn at_origin(size: (f32, f32)) -> Self {
        Self::new((0.0, 0.0), size)
    }

    /// Convert a screen position to surface-local coordinates.
    #[inline]
    pub fn screen_to_surface(&self, screen_pos: (f32, f32)) -> (f32, f32) {
        (screen_pos.0 - self.origin.0, screen_pos.1 - self.origin.1)
    }

    /// Convert a surface-local position to screen coordinates.
    #[inline]
    pub fn surface_to_screen(&self, surface_pos: (f32, f32)) -> (f32, f32) {
        (surface_pos.0 + self.origin.0, surface_pos.1 + self.origin.1)
    }

    /// Whether a screen position lies on the surface.
    pub fn contains_screen_point(&self, screen_pos: (f32, f32)) -> bool {
        let (x, y) = self.screen_to_surface(screen_pos);
        x >= 0.0 && y >= 0.0 && x <= self.size.0 && y <= self.size.1
    }
}

impl Default for SurfaceBounds {
    fn default() -> Self {
        Self::at_origin((f32::INFINITY, f32::INFINITY))
    }
}

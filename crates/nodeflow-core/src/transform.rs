//! Pan/zoom transform between screen space and diagram space.

use kurbo::{Affine, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// The current viewport transform `(translate_x, translate_y, scale)`.
///
/// Diagram coordinates map to screen coordinates as
/// `screen = diagram * zoom + (x, y)`. This module only reads it; panning and
/// zooming happen elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Transform {
    /// Horizontal translation in screen pixels.
    pub x: f64,
    /// Vertical translation in screen pixels.
    pub y: f64,
    /// Scale factor (1.0 = 100%).
    pub zoom: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f64; 3]> for Transform {
    fn from([x, y, zoom]: [f64; 3]) -> Self {
        Self { x, y, zoom }
    }
}

impl From<Transform> for [f64; 3] {
    fn from(transform: Transform) -> Self {
        [transform.x, transform.y, transform.zoom]
    }
}

impl Transform {
    /// No translation, unit scale.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        zoom: 1.0,
    };

    /// Create a transform from translation and scale.
    pub fn new(x: f64, y: f64, zoom: f64) -> Self {
        Self { x, y, zoom }
    }

    /// Translation part as a vector.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get the affine transform for rendering.
    ///
    /// This transform converts diagram coordinates to screen coordinates.
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.offset()) * Affine::scale(self.zoom)
    }

    /// Get the inverse transform for input handling and culling.
    ///
    /// This transform converts screen coordinates to diagram coordinates.
    pub fn inverse_affine(&self) -> Affine {
        Affine::scale(1.0 / self.zoom) * Affine::translate(-self.offset())
    }

    /// Convert a screen point to diagram coordinates.
    pub fn screen_to_world(&self, screen_point: Point) -> Point {
        self.inverse_affine() * screen_point
    }

    /// Convert a diagram point to screen coordinates.
    pub fn world_to_screen(&self, world_point: Point) -> Point {
        self.to_affine() * world_point
    }

    /// Map a screen-space rectangle (e.g. the viewport box) into diagram space.
    pub fn screen_rect_to_world(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.screen_to_world(rect.origin()),
            self.screen_to_world(Point::new(rect.x1, rect.y1)),
        )
    }

    /// CSS-style transform string for the node container.
    pub fn css(&self) -> String {
        format!(
            "translate({}px,{}px) scale({})",
            self.x, self.y, self.zoom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transform() {
        let transform = Transform::default();
        assert_eq!(transform.offset(), Vec2::ZERO);
        assert!((transform.zoom - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_world_with_offset() {
        let transform = Transform::new(50.0, 100.0, 1.0);
        let world = transform.screen_to_world(Point::new(100.0, 200.0));
        assert!((world.x - 50.0).abs() < f64::EPSILON);
        assert!((world.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_world_with_zoom() {
        let transform = Transform::new(0.0, 0.0, 2.0);
        let world = transform.screen_to_world(Point::new(100.0, 200.0));
        assert!((world.x - 50.0).abs() < f64::EPSILON);
        assert!((world.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let transform = Transform::new(30.0, -20.0, 1.5);
        let original = Point::new(123.0, 456.0);
        let back = transform.world_to_screen(transform.screen_to_world(original));
        assert!((back.x - original.x).abs() < 1e-10);
        assert!((back.y - original.y).abs() < 1e-10);
    }

    #[test]
    fn test_screen_rect_to_world() {
        let transform = Transform::new(-100.0, -50.0, 2.0);
        let world = transform.screen_rect_to_world(Rect::new(0.0, 0.0, 200.0, 100.0));
        assert!((world.x0 - 50.0).abs() < 1e-10);
        assert!((world.y0 - 25.0).abs() < 1e-10);
        assert!((world.width() - 100.0).abs() < 1e-10);
        assert!((world.height() - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_css() {
        assert_eq!(Transform::default().css(), "translate(0px,0px) scale(1)");
        assert_eq!(
            Transform::new(12.5, -4.0, 1.5).css(),
            "translate(12.5px,-4px) scale(1.5)"
        );
    }

    #[test]
    fn test_serde_triple() {
        let transform: Transform = serde_json::from_str("[10.0, 20.0, 0.5]").unwrap();
        assert_eq!(transform, Transform::new(10.0, 20.0, 0.5));
        assert_eq!(serde_json::to_string(&transform).unwrap(), "[10.0,20.0,0.5]");
    }
}

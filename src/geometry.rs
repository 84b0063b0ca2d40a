//! Axis-aligned rectangles
//!
//! Canvas coordinates: origin top-left, y grows downward.

use glam::Vec2;

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

/// Edge coordinates of a rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn edges(&self) -> Edges {
        Edges {
            top: self.origin.y,
            right: self.origin.x + self.size.x,
            bottom: self.origin.y + self.size.y,
            left: self.origin.x,
        }
    }

    /// Overlap test. Rectangles whose edges exactly touch count as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        let a = self.edges();
        let b = other.edges();

        !(a.right < b.left || a.left > b.right || a.top > b.bottom || a.bottom < b.top)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        let edges = rect.edges();
        assert_eq!(edges.top, 20.0);
        assert_eq!(edges.right, 40.0);
        assert_eq!(edges.bottom, 60.0);
        assert_eq!(edges.left, 10.0);
    }

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(a.intersects(&right));
        assert!(a.intersects(&below));
    }

    #[test]
    fn test_separated() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Rect::new(10.5, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, -20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_center() {
        let rect = Rect::new(390.0, 290.0, 20.0, 20.0);
        assert_eq!(rect.center(), Vec2::new(400.0, 300.0));
    }

    proptest! {
        #[test]
        fn intersects_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.0f32..100.0, ah in 0.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.0f32..100.0, bh in 0.0f32..100.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn rect_intersects_itself(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 0.0f32..100.0, h in 0.0f32..100.0,
        ) {
            let rect = Rect::new(x, y, w, h);
            prop_assert!(rect.intersects(&rect));
        }
    }
}

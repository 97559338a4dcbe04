//! Core UI widget primitives
//!
//! Shared types used by the component tree and all widgets.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;

/// Reference point on a box
///
/// Used twice per node: as the *anchor* (the point on this node's box its
/// children measure their position from) and as the *origin* (the point on
/// this node's own box that is placed on the parent's anchor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Anchoring {
    /// Top-left corner
    #[default]
    TopLeft,
    /// Top-center
    TopCenter,
    /// Top-right corner
    TopRight,
    /// Middle of the left edge
    LeftCenter,
    /// Center of the box
    Center,
    /// Middle of the right edge
    RightCenter,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-center
    BottomCenter,
    /// Bottom-right corner
    BottomRight,
    /// Explicit pixel point supplied by the node
    Custom,
}

impl Anchoring {
    /// Get the normalized anchor position (0.0 to 1.0)
    ///
    /// `None` for [`Anchoring::Custom`], which has no fixed fraction.
    pub fn to_normalized(self) -> Option<(f32, f32)> {
        match self {
            Self::TopLeft => Some((0.0, 0.0)),
            Self::TopCenter => Some((0.5, 0.0)),
            Self::TopRight => Some((1.0, 0.0)),
            Self::LeftCenter => Some((0.0, 0.5)),
            Self::Center => Some((0.5, 0.5)),
            Self::RightCenter => Some((1.0, 0.5)),
            Self::BottomLeft => Some((0.0, 1.0)),
            Self::BottomCenter => Some((0.5, 1.0)),
            Self::BottomRight => Some((1.0, 1.0)),
            Self::Custom => None,
        }
    }

    /// Resolve to a pixel point on a box of `size`
    ///
    /// `custom` is returned verbatim for [`Anchoring::Custom`] and ignored
    /// otherwise.
    pub fn resolve(self, size: Vec2, custom: Vec2) -> Vec2 {
        match self.to_normalized() {
            Some((fx, fy)) => Vec2::new(size.x * fx, size.y * fy),
            None => custom,
        }
    }

    /// Every anchoring value, in declaration order
    pub const ALL: [Self; 10] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::LeftCenter,
        Self::Center,
        Self::RightCenter,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
        Self::Custom,
    ];
}

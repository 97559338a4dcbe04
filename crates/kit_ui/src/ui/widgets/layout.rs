//! UI layout calculations
//!
//! Resolves a node's anchor/origin configuration against its parent into a
//! pixel offset.

use crate::foundation::math::Vec2;
use super::core::Anchoring;

/// Layout calculator for anchored components
pub struct AnchorLayout;

impl AnchorLayout {
    /// Offset of a node's top-left corner from its parent's top-left corner
    ///
    /// The parent's anchor point is resolved from `parent_anchor` and
    /// `parent_size`, then the node's own origin point, resolved from `origin`
    /// and `own_size`, is subtracted. The node's explicit location is not
    /// included.
    pub fn resolve_offset(
        origin: Anchoring,
        own_size: Vec2,
        parent_anchor: Anchoring,
        parent_size: Vec2,
        custom_origin: Vec2,
        custom_anchor: Vec2,
    ) -> Vec2 {
        let anchor_point = parent_anchor.resolve(parent_size, custom_anchor);
        let origin_point = origin.resolve(own_size, custom_origin);
        anchor_point - origin_point
    }
}

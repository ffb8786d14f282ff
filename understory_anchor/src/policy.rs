// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset policies and axis relations.
//!
//! Configuration carries one signed number per axis. The sign selects the side
//! of the anchor and the magnitude is the gap:
//!
//! - negative: before the anchor (left or above), `|value|` away;
//! - zero: centered over the anchor;
//! - positive: after the anchor (right or below), `value` away.
//!
//! [`OffsetPolicy::from_signed`] decodes that convention once; everything
//! downstream matches on [`AxisRelation`] instead of re-reading signs.

/// Where the overlay sits relative to the anchor on one axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AxisRelation {
    /// Left of or above the anchor.
    Before,
    /// Centered over the anchor span.
    Center,
    /// Right of or below the anchor.
    After,
}

/// A decoded per-axis offset: which side, and how far from the anchor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OffsetPolicy {
    /// Side of the anchor.
    pub relation: AxisRelation,
    /// Non-negative gap between anchor and overlay. Always `0` for
    /// [`AxisRelation::Center`].
    pub gap: f64,
}

impl OffsetPolicy {
    /// Centered, no gap.
    pub const CENTER: Self = Self {
        relation: AxisRelation::Center,
        gap: 0.0,
    };

    /// Before the anchor with the given gap.
    pub fn before(gap: f64) -> Self {
        Self {
            relation: AxisRelation::Before,
            gap: gap.abs(),
        }
    }

    /// After the anchor with the given gap.
    pub fn after(gap: f64) -> Self {
        Self {
            relation: AxisRelation::After,
            gap: gap.abs(),
        }
    }

    /// Decode a signed configuration value.
    ///
    /// ```
    /// use understory_anchor::policy::{AxisRelation, OffsetPolicy};
    ///
    /// assert_eq!(OffsetPolicy::from_signed(-4.0), OffsetPolicy::before(4.0));
    /// assert_eq!(OffsetPolicy::from_signed(0.0).relation, AxisRelation::Center);
    /// assert_eq!(OffsetPolicy::from_signed(2.0).gap, 2.0);
    /// ```
    pub fn from_signed(value: f64) -> Self {
        if value < 0.0 {
            Self::before(value)
        } else if value > 0.0 {
            Self::after(value)
        } else {
            Self::CENTER
        }
    }

    /// Encode back into the signed configuration convention.
    pub fn signed(self) -> f64 {
        match self.relation {
            AxisRelation::Before => -self.gap,
            AxisRelation::Center => 0.0,
            AxisRelation::After => self.gap,
        }
    }

    /// The same gap on the given side.
    ///
    /// The gap is at least `1`: a centered policy has no directional
    /// magnitude of its own.
    pub fn toward(self, relation: AxisRelation) -> Self {
        let gap = self.gap.max(1.0);
        match relation {
            AxisRelation::Before => Self::before(gap),
            AxisRelation::After => Self::after(gap),
            AxisRelation::Center => Self::CENTER,
        }
    }
}

impl Default for OffsetPolicy {
    fn default() -> Self {
        Self::CENTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_sign_convention() {
        assert_eq!(OffsetPolicy::from_signed(-1.0), OffsetPolicy::before(1.0));
        assert_eq!(OffsetPolicy::from_signed(0.0), OffsetPolicy::CENTER);
        assert_eq!(OffsetPolicy::from_signed(-0.0), OffsetPolicy::CENTER);
        assert_eq!(OffsetPolicy::from_signed(7.5), OffsetPolicy::after(7.5));
    }

    #[test]
    fn signed_inverts_decode() {
        for v in [-12.0, -1.0, 0.0, 3.0] {
            assert_eq!(OffsetPolicy::from_signed(v).signed(), v);
        }
    }

    #[test]
    fn toward_keeps_magnitude_or_substitutes_one() {
        assert_eq!(
            OffsetPolicy::before(6.0).toward(AxisRelation::After),
            OffsetPolicy::after(6.0)
        );
        assert_eq!(
            OffsetPolicy::CENTER.toward(AxisRelation::Before),
            OffsetPolicy::before(1.0)
        );
        assert_eq!(
            OffsetPolicy::after(0.25).toward(AxisRelation::After),
            OffsetPolicy::after(1.0)
        );
    }
}

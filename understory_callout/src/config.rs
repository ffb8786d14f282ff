// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callout configuration.
//!
//! A plain struct with defaults; override fields with struct update syntax:
//!
//! ```
//! use kurbo::Vec2;
//! use understory_callout::config::{Alignment, CalloutConfig};
//!
//! let config = CalloutConfig {
//!     alignment: Alignment::Cursor,
//!     offset: Vec2::new(12.0, 16.0),
//!     show_delay_ms: 0,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;
use core::time::Duration;

use kurbo::{Point, Vec2};
use understory_anchor::PlacementRequest;

/// Errors rejected when a configuration is built.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The alignment name is not one of `anchor`, `element`, or `cursor`.
    #[error("unknown alignment {0:?}, expected \"anchor\", \"element\", or \"cursor\"")]
    UnknownAlignment(String),
    /// An offset component is NaN or infinite.
    #[error("`{field}` must be finite")]
    NonFiniteOffset {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// What the callout is positioned against.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Alignment {
    /// Around the anchor element, with viewport fallback.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "element"))]
    Anchor,
    /// At the pointer location where the anchor was entered.
    Cursor,
}

impl FromStr for Alignment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anchor" | "element" => Ok(Self::Anchor),
            "cursor" => Ok(Self::Cursor),
            other => Err(ConfigError::UnknownAlignment(other.to_string())),
        }
    }
}

/// Body of the callout.
#[derive(Clone)]
pub enum Content {
    /// Fixed text. Empty text falls back to the anchor's title.
    Text(String),
    /// Produced on demand, once, before the callout is first shown.
    Deferred(Rc<dyn Fn() -> String>),
}

impl Content {
    /// Content produced by `f` when the callout is first shown.
    pub fn deferred(f: impl Fn() -> String + 'static) -> Self {
        Self::Deferred(Rc::new(f))
    }

    /// Produce the content, using `title` when it is empty.
    pub fn resolve(&self, title: &str) -> String {
        let text = match self {
            Self::Text(text) => text.clone(),
            Self::Deferred(f) => f(),
        };
        if text.is_empty() {
            title.to_string()
        } else {
            text
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Deferred(_) => f.debug_tuple("Deferred").finish_non_exhaustive(),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Configuration for one callout.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CalloutConfig {
    /// Anchor or cursor alignment.
    pub alignment: Alignment,
    /// Signed per-axis offset. See [`understory_anchor::OffsetPolicy`] for the sign convention.
    /// In cursor mode this is added to the cursor location as is.
    pub offset: Vec2,
    /// Extra per-axis displacement of the pointer.
    pub pointer_offset: Vec2,
    /// Whether to attach a pointer.
    pub pointer: bool,
    /// Delay between entering the anchor and showing. `0` shows immediately.
    pub show_delay_ms: u64,
    /// Delay between leaving and hiding. `0` hides immediately.
    pub hide_delay_ms: u64,
    /// Callout body.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub content: Content,
}

impl Default for CalloutConfig {
    fn default() -> Self {
        Self {
            alignment: Alignment::Anchor,
            offset: Vec2::new(0.0, -1.0),
            pointer_offset: Vec2::ZERO,
            pointer: false,
            show_delay_ms: 200,
            hide_delay_ms: 0,
            content: Content::default(),
        }
    }
}

impl CalloutConfig {
    /// Check preconditions that positioning relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.offset.x.is_finite() && self.offset.y.is_finite()) {
            return Err(ConfigError::NonFiniteOffset { field: "offset" });
        }
        if !(self.pointer_offset.x.is_finite() && self.pointer_offset.y.is_finite()) {
            return Err(ConfigError::NonFiniteOffset {
                field: "pointer_offset",
            });
        }
        Ok(())
    }

    /// Show delay as a [`Duration`].
    pub fn show_delay(&self) -> Duration {
        Duration::from_millis(self.show_delay_ms)
    }

    /// Hide delay as a [`Duration`].
    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }

    /// Positioning request for a pass, given where the anchor was entered.
    pub fn request(&self, cursor: Point) -> PlacementRequest {
        let request = match self.alignment {
            Alignment::Anchor => PlacementRequest::anchored(self.offset),
            Alignment::Cursor => PlacementRequest::at_cursor(cursor, self.offset),
        };
        if self.pointer {
            request.with_pointer(self.pointer_offset)
        } else {
            request
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-overlay state record and its show/hide state machine.
//!
//! ## States
//!
//! `Hidden → PendingShow → Shown → PendingHide → Hidden`
//!
//! - Entering the anchor schedules a show (or shows immediately without a delay).
//! - Leaving while a show is pending cancels it; leaving while shown schedules a hide.
//! - Re-entering while a hide is pending cancels it and repositions.
//! - Re-entering while shown repositions without touching any timer.
//!
//! Each state owns at most one scheduled task, so a show and a hide are never
//! pending at the same time.
//!
//! ## Events
//!
//! Transitions that change what is on screen return a [`CalloutEvent`] for the
//! presentation layer to apply (fade in, move, fade out). Positioning errors
//! leave the callout [`Hidden`](Phase::Hidden) with no task pending and are
//! returned to the caller, which takes down an overlay that was visible.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_anchor::{GeometrySnapshot, Viewport};
//! use understory_callout::callout::{Callout, CalloutEvent, LeaveTarget, Phase};
//! use understory_callout::config::CalloutConfig;
//! use understory_callout::schedule::ManualScheduler;
//!
//! let geometry = GeometrySnapshot {
//!     anchor: Rect::new(100.0, 100.0, 150.0, 120.0),
//!     overlay: Size::new(80.0, 30.0),
//!     pointer: Size::ZERO,
//!     viewport: Viewport::new(Size::new(800.0, 600.0), Vec2::ZERO),
//! };
//! let mut timers = ManualScheduler::new();
//! let mut callout = Callout::new(CalloutConfig::default(), "Save").unwrap();
//!
//! callout.anchor_enter(&mut timers, &geometry, Point::new(110.0, 110.0)).unwrap();
//! assert_eq!(callout.phase(), Phase::PendingShow);
//!
//! for (handle, _) in timers.advance(Duration::from_millis(200)) {
//!     let event = callout.fire(handle, &geometry).unwrap();
//!     assert!(matches!(event, Some(CalloutEvent::Show(_))));
//! }
//! assert_eq!(callout.phase(), Phase::Shown);
//!
//! assert_eq!(callout.anchor_leave(&mut timers, LeaveTarget::Elsewhere), Some(CalloutEvent::Hide));
//! ```

use alloc::string::String;
use core::fmt::Debug;

use kurbo::Point;
use understory_anchor::{AnchorGeometryProvider, GeometrySnapshot, Placement, PlacementError, position};

use crate::config::{CalloutConfig, ConfigError};
use crate::schedule::{Scheduler, Task};

/// Coarse state of a callout, without task handles or geometry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Not visible, nothing pending.
    Hidden,
    /// Not visible yet; a show task is scheduled.
    PendingShow,
    /// Visible.
    Shown,
    /// Still visible; a hide task is scheduled.
    PendingHide,
}

/// Full state of a callout. `H` is the scheduler's task handle.
#[derive(Clone, Debug, PartialEq)]
pub enum CalloutState<H> {
    /// Not visible, nothing pending.
    Hidden,
    /// Waiting for the show task.
    PendingShow {
        /// Scheduled show task.
        task: H,
    },
    /// Visible at the given placement.
    Shown {
        /// Most recent placement.
        placement: Placement,
    },
    /// Visible, waiting for the hide task.
    PendingHide {
        /// Scheduled hide task.
        task: H,
        /// Most recent placement.
        placement: Placement,
    },
}

impl<H> CalloutState<H> {
    /// Coarse phase of this state.
    pub fn phase(&self) -> Phase {
        match self {
            Self::Hidden => Phase::Hidden,
            Self::PendingShow { .. } => Phase::PendingShow,
            Self::Shown { .. } => Phase::Shown,
            Self::PendingHide { .. } => Phase::PendingHide,
        }
    }
}

/// A visible change for the presentation layer to apply.
#[derive(Clone, Debug, PartialEq)]
pub enum CalloutEvent {
    /// Make the callout visible at the placement.
    Show(Placement),
    /// Move the already visible callout.
    Reposition(Placement),
    /// Hide the callout.
    Hide,
}

/// Where the pointer went when it left the anchor or the overlay.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LeaveTarget {
    /// Somewhere unrelated.
    Elsewhere,
    /// Onto the callout overlay.
    Overlay,
    /// Back onto the anchor.
    Anchor,
}

/// State record for one anchored callout.
///
/// Instances are fully independent; a host keeps one per anchor.
#[derive(Debug)]
pub struct Callout<H> {
    config: CalloutConfig,
    title: String,
    content: Option<String>,
    cursor: Point,
    state: CalloutState<H>,
}

impl<H: Copy + Eq + Debug> Callout<H> {
    /// Create a hidden callout. `title` is the anchor's title, used when the
    /// configured content is empty.
    pub fn new(config: CalloutConfig, title: impl Into<String>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            title: title.into(),
            content: None,
            cursor: Point::ORIGIN,
            state: CalloutState::Hidden,
        })
    }

    /// Configuration this callout was built with.
    pub fn config(&self) -> &CalloutConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> &CalloutState<H> {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Most recent placement while visible.
    pub fn placement(&self) -> Option<&Placement> {
        match &self.state {
            CalloutState::Shown { placement } | CalloutState::PendingHide { placement, .. } => {
                Some(placement)
            }
            _ => None,
        }
    }

    /// Callout body, produced on first use and kept afterwards.
    ///
    /// Render this into the overlay before the first show so the geometry
    /// provider can measure it.
    pub fn content(&mut self) -> &str {
        let Self {
            config,
            title,
            content,
            ..
        } = self;
        content.get_or_insert_with(|| config.content.resolve(title))
    }

    /// The pointer entered the anchor at `cursor`.
    pub fn anchor_enter<S, G>(
        &mut self,
        scheduler: &mut S,
        geometry: &G,
        cursor: Point,
    ) -> Result<Option<CalloutEvent>, PlacementError>
    where
        S: Scheduler<Handle = H>,
        G: AnchorGeometryProvider + ?Sized,
    {
        self.cursor = cursor;
        match self.state {
            CalloutState::Hidden => {
                if self.config.show_delay_ms == 0 {
                    self.show(geometry).map(Some)
                } else {
                    let task = scheduler.schedule(self.config.show_delay(), Task::Show);
                    tracing::debug!(?task, "show scheduled");
                    self.state = CalloutState::PendingShow { task };
                    Ok(None)
                }
            }
            // The pending show keeps its original deadline.
            CalloutState::PendingShow { .. } => Ok(None),
            CalloutState::Shown { .. } => self.reposition(scheduler, geometry),
            CalloutState::PendingHide { task, placement } => {
                Self::cancel(scheduler, task);
                self.state = CalloutState::Shown { placement };
                self.reposition(scheduler, geometry)
            }
        }
    }

    /// The pointer left the anchor toward `target`.
    pub fn anchor_leave<S>(&mut self, scheduler: &mut S, target: LeaveTarget) -> Option<CalloutEvent>
    where
        S: Scheduler<Handle = H>,
    {
        if target == LeaveTarget::Overlay && self.phase() == Phase::Shown {
            return None;
        }
        self.leave(scheduler)
    }

    /// The pointer entered the visible overlay. Holds it open.
    pub fn overlay_enter<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler<Handle = H>,
    {
        if let CalloutState::PendingHide { task, placement } = self.state {
            Self::cancel(scheduler, task);
            self.state = CalloutState::Shown { placement };
        }
    }

    /// The pointer left the overlay toward `target`.
    pub fn overlay_leave<S>(&mut self, scheduler: &mut S, target: LeaveTarget) -> Option<CalloutEvent>
    where
        S: Scheduler<Handle = H>,
    {
        if target == LeaveTarget::Anchor {
            return None;
        }
        self.leave(scheduler)
    }

    /// A scheduled task elapsed. Handles this callout no longer owns are ignored.
    pub fn fire<G>(&mut self, handle: H, geometry: &G) -> Result<Option<CalloutEvent>, PlacementError>
    where
        G: AnchorGeometryProvider + ?Sized,
    {
        match self.state {
            CalloutState::PendingShow { task } if task == handle => self.show(geometry).map(Some),
            CalloutState::PendingHide { task, .. } if task == handle => {
                tracing::debug!(?task, "hidden after delay");
                self.state = CalloutState::Hidden;
                Ok(Some(CalloutEvent::Hide))
            }
            _ => {
                tracing::debug!(?handle, "ignoring stale task");
                Ok(None)
            }
        }
    }

    /// Recompute the placement of a visible callout, for example after a
    /// scroll or resize. Does nothing while hidden or pending show.
    ///
    /// On error the callout is [`Hidden`](Phase::Hidden) with no task pending;
    /// the overlay it was showing must be taken down by the caller.
    pub fn reposition<S, G>(
        &mut self,
        scheduler: &mut S,
        geometry: &G,
    ) -> Result<Option<CalloutEvent>, PlacementError>
    where
        S: Scheduler<Handle = H>,
        G: AnchorGeometryProvider + ?Sized,
    {
        let pending_hide = match self.state {
            CalloutState::Shown { .. } => None,
            CalloutState::PendingHide { task, .. } => Some(task),
            CalloutState::Hidden | CalloutState::PendingShow { .. } => return Ok(None),
        };
        let fresh = self.pass(geometry).inspect_err(|_| {
            if let Some(task) = pending_hide {
                Self::cancel(scheduler, task);
            }
        })?;
        match &mut self.state {
            CalloutState::Shown { placement } | CalloutState::PendingHide { placement, .. } => {
                *placement = fresh;
            }
            _ => {}
        }
        Ok(Some(CalloutEvent::Reposition(fresh)))
    }

    fn show<G>(&mut self, geometry: &G) -> Result<CalloutEvent, PlacementError>
    where
        G: AnchorGeometryProvider + ?Sized,
    {
        self.content();
        let placement = self.pass(geometry)?;
        tracing::debug!(x = placement.origin.x, y = placement.origin.y, "shown");
        self.state = CalloutState::Shown { placement };
        Ok(CalloutEvent::Show(placement))
    }

    fn leave<S>(&mut self, scheduler: &mut S) -> Option<CalloutEvent>
    where
        S: Scheduler<Handle = H>,
    {
        match self.state {
            CalloutState::PendingShow { task } => {
                Self::cancel(scheduler, task);
                self.state = CalloutState::Hidden;
                None
            }
            CalloutState::Shown { placement } => {
                if self.config.hide_delay_ms == 0 {
                    self.state = CalloutState::Hidden;
                    Some(CalloutEvent::Hide)
                } else {
                    let task = scheduler.schedule(self.config.hide_delay(), Task::Hide);
                    tracing::debug!(?task, "hide scheduled");
                    self.state = CalloutState::PendingHide { task, placement };
                    None
                }
            }
            CalloutState::Hidden | CalloutState::PendingHide { .. } => None,
        }
    }

    /// One positioning pass on a fresh snapshot. Failure hides the callout.
    fn pass<G>(&mut self, geometry: &G) -> Result<Placement, PlacementError>
    where
        G: AnchorGeometryProvider + ?Sized,
    {
        let snapshot = GeometrySnapshot::capture(geometry);
        position(&snapshot, &self.config.request(self.cursor)).inspect_err(|err| {
            tracing::warn!(%err, "callout could not be placed");
            self.state = CalloutState::Hidden;
        })
    }

    fn cancel<S>(scheduler: &mut S, task: H)
    where
        S: Scheduler<Handle = H>,
    {
        if !scheduler.cancel(task) {
            tracing::debug!(?task, "task already elapsed; its delivery will be ignored");
        }
    }
}

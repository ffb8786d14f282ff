// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_callout --heading-base-level=0

//! Understory Callout: per-overlay state for anchored tooltips and popovers.
//!
//! ## Overview
//!
//! This crate keeps the state of one floating callout attached to an anchor: its configuration,
//! its content, whether it is hidden, about to show, shown, or about to hide, and where it was last placed.
//! Positioning itself is done by [`understory_anchor`].
//!
//! It does not bind events, keep time, or draw.
//! The host forwards pointer transitions ([`Callout::anchor_enter`], [`Callout::anchor_leave`],
//! [`Callout::overlay_enter`], [`Callout::overlay_leave`]) and elapsed tasks ([`Callout::fire`]),
//! and applies the returned [`CalloutEvent`]s.
//!
//! ## Timers
//!
//! Show and hide delays go through the [`Scheduler`] trait.
//! Each state owns at most one scheduled task, and conflicting transitions cancel it.
//! [`ManualScheduler`] drives time explicitly and is handy for tests and headless hosts.
//!
//! ## Workflow
//!
//! 1) Build a [`CalloutConfig`] and a [`Callout`] per anchor. Invalid configuration is rejected here.
//! 2) Render [`Callout::content`] into the overlay so it can be measured.
//! 3) Implement [`AnchorGeometryProvider`](understory_anchor::AnchorGeometryProvider) over your
//!    measurements, or pass a [`GeometrySnapshot`](understory_anchor::GeometrySnapshot) directly.
//! 4) Forward pointer transitions and elapsed tasks; apply `Show`, `Reposition`, and `Hide`.
//! 5) On [`PlacementError::Unsolvable`](understory_anchor::PlacementError::Unsolvable), the
//!    callout stays hidden; decide whether to clip, scroll, or skip.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod callout;
pub mod config;
pub mod schedule;

pub use callout::{Callout, CalloutEvent, CalloutState, LeaveTarget, Phase};
pub use config::{Alignment, CalloutConfig, ConfigError, Content};
pub use schedule::{ManualScheduler, Scheduler, Task, TaskId};

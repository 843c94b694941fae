// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page
//!
//! - [`topnav`] - Navigation bar with section links and the theme toggle
//! - [`sections`] - The five content regions of the page
//! - [`contact_form`] - Contact form with validation and relay handoff
//!
//! # Shared Infrastructure
//!
//! - [`section`] - Section enumeration and fixed ordering
//! - [`layout`] - Section geometry within the scrollable page
//! - [`tracker`] - Active-section selection and reveal latches
//! - [`state`] - Tick- and visibility-driven state machines
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod contact_form;
pub mod design_tokens;
pub mod layout;
pub mod section;
pub mod sections;
pub mod state;
pub mod styles;
pub mod theming;
pub mod topnav;
pub mod tracker;

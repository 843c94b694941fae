// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a single-window portfolio/resume application built with
//! the Iced GUI framework.
//!
//! The page content lives in a TOML profile, sections are tracked by a
//! scroll-driven activity tracker, and the contact form forwards submissions
//! to an EmailJS-compatible relay.

pub mod app;
pub mod assets;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod profile;
pub mod relay;
pub mod ui;

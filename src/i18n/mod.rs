// SPDX-License-Identifier: MPL-2.0
//! Localization.
//!
//! All user-facing strings resolve through Fluent bundles embedded in the
//! binary. The display locale is picked from the CLI flag, the settings
//! file, or the OS locale, in that order, falling back to `en-US`.

pub mod fluent;

// SPDX-License-Identifier: MPL-2.0
pub mod track_guard;

pub use track_guard::{track_guard, TrackGuard};

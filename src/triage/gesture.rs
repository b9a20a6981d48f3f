// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-LeanIt-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of LeanIt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::Decision;

/// Horizontal distance a drag must exceed to count as a decision, in gesture
/// units. Equal in magnitude for both directions so skip and save stay
/// symmetric.
pub const SWIPE_DISTANCE_THRESHOLD: f32 = 100.0;

/// Horizontal release speed that counts as a decision regardless of
/// distance, in gesture units per second.
pub const SWIPE_SPEED_THRESHOLD: f32 = 500.0;

/// Downward distance past which a drag dismisses the detail view. Never fed
/// to the deck.
pub const DETAIL_DISMISS_THRESHOLD: f32 = 120.0;

/// Classifies a drag sampled at release into a decision.
///
/// Only the horizontal components participate; vertical motion is ignored
/// for the deck. A rightward offset past [`SWIPE_DISTANCE_THRESHOLD`] or a
/// rightward velocity past [`SWIPE_SPEED_THRESHOLD`] is a save, the mirrored
/// thresholds a skip, anything else `None` (the card settles back, no state
/// change).
pub fn classify_release(offset: (f32, f32), velocity: (f32, f32)) -> Option<Decision> {
    let offset_x = offset.0;
    let velocity_x = velocity.0;

    if offset_x > SWIPE_DISTANCE_THRESHOLD || velocity_x > SWIPE_SPEED_THRESHOLD {
        return Some(Decision::Save);
    }
    if offset_x < -SWIPE_DISTANCE_THRESHOLD || velocity_x < -SWIPE_SPEED_THRESHOLD {
        return Some(Decision::Skip);
    }
    None
}

/// Whether a release offset dismisses the detail view (downward drag).
pub fn dismisses_detail(offset: (f32, f32)) -> bool {
    offset.1 > DETAIL_DISMISS_THRESHOLD
}

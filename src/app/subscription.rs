// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between ticks while something time-dependent is on screen.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates a periodic tick subscription for notification auto-dismiss and
/// the slow-fetch warning. Idle windows get no tick at all.
pub fn create_tick_subscription(is_loading: bool, has_notifications: bool) -> Subscription<Message> {
    if is_loading || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Edge-triggered visibility sensor for the end-of-list sentinel.
//!
//! The view reports the sentinel as shown or hidden. Reports can repeat, for
//! example when the sentinel is re-shown after the list grew, so the sensor
//! only signals on the false -> true transition and only while attached.

/// Turns visibility observations into load-more signals.
#[derive(Debug, Clone)]
pub struct VisibilitySensor {
    attached: bool,
    last_visible: bool,
}

impl Default for VisibilitySensor {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilitySensor {
    /// Creates an attached sensor that has not seen the sentinel yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            attached: true,
            last_visible: false,
        }
    }

    /// Records an observation. Returns `true` when a load-more signal should
    /// be emitted.
    pub fn observe(&mut self, visible: bool) -> bool {
        let fired = self.attached && visible && !self.last_visible;
        self.last_visible = visible;
        fired
    }

    /// Re-arms the sensor after a page was applied.
    ///
    /// When the content changed the last observation is stale, so the next
    /// report is treated as a fresh transition. When it did not change the
    /// last observation still holds, and a visible sentinel signals right
    /// away; otherwise an empty page would leave the sentinel on screen with
    /// nothing left to trigger the next fetch.
    pub fn rearm(&mut self, content_changed: bool) -> bool {
        if !self.attached {
            return false;
        }
        if content_changed {
            self.last_visible = false;
            false
        } else {
            self.last_visible
        }
    }

    /// Stops signalling. Used once the catalog is exhausted.
    pub fn detach(&mut self) {
        self.attached = false;
        self.last_visible = false;
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensor_fires_on_rising_edge_only() {
        let mut sensor = VisibilitySensor::new();
        assert!(sensor.observe(true));
        assert!(!sensor.observe(true));
        assert!(!sensor.observe(true));
        assert!(!sensor.observe(false));
        assert!(sensor.observe(true));
    }

    #[test]
    fn sensor_ignores_hidden_reports() {
        let mut sensor = VisibilitySensor::new();
        assert!(!sensor.observe(false));
        assert!(!sensor.observe(false));
    }

    #[test]
    fn detached_sensor_never_fires() {
        let mut sensor = VisibilitySensor::new();
        sensor.detach();
        assert!(!sensor.is_attached());
        assert!(!sensor.observe(true));
        assert!(!sensor.observe(false));
        assert!(!sensor.observe(true));
        assert!(!sensor.rearm(false));
    }

    #[test]
    fn rearm_after_content_change_waits_for_next_report() {
        let mut sensor = VisibilitySensor::new();
        assert!(sensor.observe(true));
        assert!(!sensor.rearm(true));
        // Sentinel still on screen after the new items were laid out.
        assert!(sensor.observe(true));
    }

    #[test]
    fn rearm_without_content_change_fires_if_still_visible() {
        let mut sensor = VisibilitySensor::new();
        assert!(sensor.observe(true));
        assert!(sensor.rearm(false));
    }

    #[test]
    fn rearm_without_content_change_stays_quiet_if_hidden() {
        let mut sensor = VisibilitySensor::new();
        sensor.observe(true);
        sensor.observe(false);
        assert!(!sensor.rearm(false));
    }
}

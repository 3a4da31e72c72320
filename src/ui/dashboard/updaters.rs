//! Dashboard state update logic
//!
//! Applies queued worker events to the dashboard state

use super::state::DashboardState;

use crate::events::Event;

impl DashboardState {
    /// Drain and apply all queued events.
    pub fn update(&mut self) {
        while let Some(event) = self.pending_events.pop_front() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: Event) {
        match event {
            Event::Phase(phase) => {
                self.phase = phase;
            }
            Event::Users(users) => {
                // Full reconciliation: the server snapshot replaces the local
                // list wholesale. Selection is intentionally left as-is.
                self.users = users;
                self.clamp_cursor();
            }
            Event::Log(log) => {
                self.add_to_activity_log(log);
            }
        }
    }
}

//! Core domain: one-shot countdown windows for deferred step behaviors.

/// A single-shot countdown ticked once per simulation step.
///
/// Every timed window in the simulation (ground-check suppression, wall-jump
/// input lock, invulnerability, one-way pass-through, collapse delay, respawn
/// delay) is one of these. Starting a window while one is already pending
/// supersedes it: last write wins, and expiry fires exactly once.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneShot {
    remaining: f32,
}

impl OneShot {
    /// Arm (or re-arm) the window. Replaces any pending countdown.
    pub fn start(&mut self, seconds: f32) {
        self.remaining = seconds.max(0.0);
    }

    /// True while the window has not yet elapsed.
    pub fn active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Count the window down. Returns true on the exact step it expires.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }
        self.remaining -= dt;
        self.remaining <= 0.0
    }
}

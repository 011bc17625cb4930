use std::time::Duration;
use crate::clock::Timestamp;

/// Click debounce shared by every scene.
///
/// A click is accepted when the cooldown (if armed) has passed and at least
/// `delay` elapsed since the previous accepted click. Rejected clicks do not
/// move the window.
#[derive(Debug, Clone)]
pub struct ClickGate {
    delay: Duration,
    last_accepted: Option<Timestamp>,
    cooldown_until: Option<Timestamp>,
}

impl ClickGate {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_accepted: None,
            cooldown_until: None,
        }
    }

    pub fn arm_cooldown(&mut self, until: Timestamp) {
        self.cooldown_until = Some(until);
    }

    /// True once the post-swap cooldown has run out.
    pub fn is_ready(&self, now: Timestamp) -> bool {
        self.cooldown_until.is_none_or(|until| now >= until)
    }

    pub fn try_accept(&mut self, now: Timestamp) -> bool {
        if !self.is_ready(now) {
            log::debug!("Click at {}ms rejected: cooling down", now.as_millis());
            return false;
        }
        if let Some(last) = self.last_accepted {
            if now.saturating_since(last) < self.delay {
                log::debug!("Click at {}ms rejected: within {:?} of last", now.as_millis(), self.delay);
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }
}

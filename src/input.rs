//! Input intake
//!
//! The telemetry poller and the keyboard hook run outside the dashboard.
//! They hand data over through an [`InputHub`]; the dashboard drains it once
//! per tick.

use crate::channel::{Channel, Latest, TrySendError};
use crate::telemetry::GameSnapshot;

/// Shared storage for dashboard inputs
///
/// `KEYS` is the number of key presses buffered between ticks.
pub struct InputHub<const KEYS: usize> {
    snapshot: Latest<GameSnapshot>,
    keys: Channel<char, KEYS>,
}

impl<const KEYS: usize> InputHub<KEYS> {
    pub const fn new() -> Self {
        Self {
            snapshot: Latest::new(),
            keys: Channel::new(),
        }
    }

    /// Handle for the telemetry poller
    pub const fn telemetry_sender(&self) -> TelemetrySender<'_, KEYS> {
        TelemetrySender { hub: self }
    }

    /// Handle for the keyboard hook service
    pub const fn key_sender(&self) -> KeySender<'_, KEYS> {
        KeySender { hub: self }
    }

    /// Handle for the dashboard
    pub const fn receiver(&self) -> InputReceiver<'_, KEYS> {
        InputReceiver { hub: self }
    }
}

impl<const KEYS: usize> Default for InputHub<KEYS> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct TelemetrySender<'a, const KEYS: usize> {
    hub: &'a InputHub<KEYS>,
}

impl<const KEYS: usize> TelemetrySender<'_, KEYS> {
    /// Publish a complete snapshot for the next tick
    pub fn publish(&self, snapshot: GameSnapshot) {
        self.hub.snapshot.publish(snapshot);
    }
}

#[derive(Clone, Copy)]
pub struct KeySender<'a, const KEYS: usize> {
    hub: &'a InputHub<KEYS>,
}

impl<const KEYS: usize> KeySender<'_, KEYS> {
    /// Returns `Err(TrySendError(key))` if the key buffer is full.
    pub fn try_send(&self, key: char) -> Result<(), TrySendError<char>> {
        self.hub.keys.try_send(key)
    }
}

#[derive(Clone, Copy)]
pub struct InputReceiver<'a, const KEYS: usize> {
    hub: &'a InputHub<KEYS>,
}

impl<const KEYS: usize> InputReceiver<'_, KEYS> {
    /// Take the snapshot published since the last call
    pub fn take_snapshot(&self) -> Option<GameSnapshot> {
        self.hub.snapshot.take()
    }

    /// Take the next buffered key press
    pub fn next_key(&self) -> Option<char> {
        self.hub.keys.try_receive().ok()
    }
}

use std::time::Duration;

use leptos::prelude::*;

/// A single pending timeout tied to the reactive owner that created it.
///
/// Arming replaces whatever was pending. The owner's cleanup cancels the
/// slot, so a callback never outlives its component.
#[derive(Debug, Clone, Copy)]
pub struct TimerSlot(StoredValue<Option<TimeoutHandle>>);

impl TimerSlot {
    pub fn new() -> Self {
        let slot = Self(StoredValue::new(None));
        on_cleanup(move || slot.cancel());
        slot
    }

    pub fn arm(&self, delay: Duration, cb: impl FnOnce() + 'static) {
        self.cancel();
        match set_timeout_with_handle(cb, delay) {
            Ok(handle) => {
                self.0.try_set_value(Some(handle));
            }
            Err(e) => log::warn!("couldn't schedule timer: {e:?}"),
        }
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.0.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    }
}

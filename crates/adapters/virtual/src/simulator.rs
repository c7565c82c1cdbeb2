//! Background task that presses the virtual button on a fixed period.
//!
//! Gives the dashboard's button-state call something to observe when no
//! one is around to poke the device by hand.

use std::time::Duration;

use tokio::task::JoinHandle;

use crate::VirtualDevice;

/// How long each simulated press is held.
pub const HOLD: Duration = Duration::from_millis(250);

/// Spawn a task pressing and releasing the button every `period`.
///
/// The task runs until the returned handle is aborted.
#[must_use]
pub fn spawn_button_simulator(device: VirtualDevice, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        // the first tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            device.press();
            tokio::time::sleep(HOLD.min(period / 2)).await;
            device.release();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn should_press_button_every_period() {
        let device = VirtualDevice::new();
        let handle = spawn_button_simulator(device.clone(), Duration::from_secs(10));

        tokio::time::sleep(Duration::from_secs(35)).await;
        handle.abort();

        let button = device.snapshot().button;
        assert_eq!(button.presses, 3);
        assert!(!button.pressed);
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_press_before_first_period() {
        let device = VirtualDevice::new();
        let handle = spawn_button_simulator(device.clone(), Duration::from_secs(10));

        tokio::time::sleep(Duration::from_secs(5)).await;
        handle.abort();

        assert_eq!(device.snapshot().button.presses, 0);
    }
}

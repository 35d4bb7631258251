//! Countdown display controller
//!
//! Binds one element's initial duration to a display sink and drives it
//! down to the expired label, one tick per [`TICK_PERIOD`].

use tokio::sync::watch;
use tracing::{debug, info};

use crate::{
    countdown::{format_remaining, parse_remaining, EXPIRED_LABEL},
    display::{DisplaySink, Frame},
    host::{Host, REMAINING_KEY},
    scheduler::{Scheduler, TICK_PERIOD},
    state::TimerState,
};

/// What the controller wants after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Another tick is due after the tick period
    Continue,
    /// The countdown is over; nothing more will be scheduled
    Expired,
}

/// Drives a single countdown display
#[derive(Debug)]
pub struct CountdownController<S: DisplaySink> {
    element_id: String,
    state: TimerState,
    sink: S,
    state_tx: watch::Sender<TimerState>,
}

impl<S: DisplaySink> CountdownController<S> {
    /// Look up the countdown element and read its initial duration.
    ///
    /// Returns `None` when the host has no such element; the countdown then
    /// simply never starts.
    pub fn mount<H: Host + ?Sized>(host: &H, element_id: &str, sink: S) -> Option<Self> {
        let Some(element) = host.element_by_id(element_id) else {
            debug!("No element #{} in host, countdown not started", element_id);
            return None;
        };

        let remaining = parse_remaining(element.data(REMAINING_KEY));
        info!("Countdown mounted on #{} with {}s remaining", element_id, remaining);
        Some(Self::new(element_id, remaining, sink))
    }

    /// Create a controller for an already sanitized duration
    pub fn new(element_id: impl Into<String>, remaining_seconds: u64, sink: S) -> Self {
        let state = TimerState::running(remaining_seconds);
        let (state_tx, _) = watch::channel(state.clone());

        Self {
            element_id: element_id.into(),
            state,
            sink,
            state_tx,
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Current countdown state
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Watch the countdown state as it changes
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.state_tx.subscribe()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Run one tick: show the remaining time and count down, or expire.
    pub fn tick(&mut self) -> Tick {
        if self.state.is_expired() {
            return Tick::Expired;
        }

        let Some(seconds) = self.state.remaining_seconds else {
            self.state = TimerState::expired();
            self.show(EXPIRED_LABEL);
            info!("Countdown on #{} expired", self.element_id);
            return Tick::Expired;
        };

        let text = format_remaining(seconds);
        self.state.count_down();
        self.show(&text);
        debug!("Countdown tick: showing {}", text);
        Tick::Continue
    }

    /// Tick immediately, then once per tick period until expired.
    ///
    /// Each wait starts after the previous tick finished, so delays under
    /// load accumulate rather than being caught up.
    pub async fn run<R: Scheduler + ?Sized>(&mut self, scheduler: &mut R) {
        while self.tick() == Tick::Continue {
            scheduler.after(TICK_PERIOD).await;
        }
    }

    fn show(&mut self, text: &str) {
        self.sink
            .set_text(&Frame::new(&self.element_id, text, &self.state));
        self.state_tx.send_replace(self.state.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        display::RecordingSink,
        host::{Element, InlineHost},
        scheduler::ManualScheduler,
    };

    fn host_with(remaining: Option<&str>) -> InlineHost {
        let mut element = Element::new("verify-countdown");
        if let Some(value) = remaining {
            element = element.with_data(REMAINING_KEY, value);
        }
        InlineHost::single(element)
    }

    #[test]
    fn counts_down_through_zero_frame_to_expired() {
        let mut controller = CountdownController::new("c", 3, RecordingSink::new());

        let ticks: Vec<Tick> = (0..5).map(|_| controller.tick()).collect();
        assert_eq!(
            ticks,
            vec![Tick::Continue, Tick::Continue, Tick::Continue, Tick::Continue, Tick::Expired]
        );
        assert_eq!(controller.sink().texts(), vec!["3s", "2s", "1s", "0s", "expired"]);
        assert!(controller.state().is_expired());
    }

    #[test]
    fn ticks_after_expiry_do_nothing() {
        let mut controller = CountdownController::new("c", 0, RecordingSink::new());
        assert_eq!(controller.tick(), Tick::Expired);
        assert_eq!(controller.tick(), Tick::Expired);
        assert_eq!(controller.sink().texts(), vec!["expired"]);
    }

    #[test]
    fn mount_reads_remaining_attribute() {
        let controller = CountdownController::mount(
            &host_with(Some("65")),
            "verify-countdown",
            RecordingSink::new(),
        )
        .expect("element should be found");
        assert_eq!(controller.state(), &TimerState::running(65));
        assert_eq!(controller.element_id(), "verify-countdown");
        assert!(controller.sink().frames().is_empty());
    }

    #[test]
    fn mount_coerces_bad_values_to_zero() {
        for raw in [None, Some("soon"), Some("-5"), Some("")] {
            let controller =
                CountdownController::mount(&host_with(raw), "verify-countdown", RecordingSink::new())
                    .expect("element should be found");
            assert_eq!(controller.state(), &TimerState::running(0), "input {raw:?}");
        }
    }

    #[test]
    fn mount_without_element_does_not_start() {
        let controller =
            CountdownController::mount(&InlineHost::new(), "verify-countdown", RecordingSink::new());
        assert!(controller.is_none());
    }

    #[tokio::test]
    async fn run_schedules_one_period_between_frames() {
        let mut controller = CountdownController::new("c", 65, RecordingSink::new());
        let mut scheduler = ManualScheduler::new();

        controller.run(&mut scheduler).await;

        let texts = controller.sink().texts();
        assert_eq!(texts.first(), Some(&"1m 5s"));
        assert_eq!(texts.get(5), Some(&"1m 0s"));
        assert_eq!(texts.get(6), Some(&"59s"));
        assert_eq!(texts.last(), Some(&"expired"));
        assert_eq!(texts.len(), 67);
        assert_eq!(scheduler.requests().len(), 66);
        assert!(scheduler.requests().iter().all(|delay| *delay == TICK_PERIOD));
    }

    #[tokio::test]
    async fn one_second_shows_zero_frame_before_expiring() {
        let mut controller = CountdownController::new("c", 1, RecordingSink::new());
        let mut scheduler = ManualScheduler::new();

        controller.run(&mut scheduler).await;

        assert_eq!(controller.sink().texts(), vec!["1s", "0s", "expired"]);
        assert_eq!(scheduler.requests(), &[TICK_PERIOD, TICK_PERIOD]);
    }

    #[tokio::test]
    async fn run_requests_one_delay_per_formatted_frame() {
        for n in [0_u64, 1, 2, 3, 59, 60, 61] {
            let mut controller = CountdownController::new("c", n, RecordingSink::new());
            let mut scheduler = ManualScheduler::new();

            controller.run(&mut scheduler).await;

            let expected = if n == 0 { 0 } else { n as usize + 1 };
            assert_eq!(scheduler.requests().len(), expected, "input {n}");
            assert_eq!(controller.sink().texts().len(), expected + 1, "input {n}");
            assert_eq!(controller.sink().current(), Some(EXPIRED_LABEL), "input {n}");
        }
    }

    #[tokio::test]
    async fn run_with_zero_expires_without_scheduling() {
        let mut controller = CountdownController::new("c", 0, RecordingSink::new());
        let mut scheduler = ManualScheduler::new();

        controller.run(&mut scheduler).await;

        assert_eq!(controller.sink().texts(), vec!["expired"]);
        assert!(scheduler.requests().is_empty());
    }

    #[tokio::test]
    async fn subscribers_see_final_state() {
        let mut controller = CountdownController::new("c", 2, RecordingSink::new());
        let mut rx = controller.subscribe();
        assert_eq!(*rx.borrow_and_update(), TimerState::running(2));

        assert_eq!(controller.tick(), Tick::Continue);
        assert!(rx.has_changed().expect("sender alive"));
        assert_eq!(*rx.borrow_and_update(), TimerState::running(1));

        controller.run(&mut ManualScheduler::new()).await;
        assert!(rx.borrow().is_expired());
    }
}

//! Debounce for query edits coming from the search input.
//!
//! The delay itself is delegated to a [`Sleeper`], so the browser build waits
//! on a `gloo-timers` timeout while tests release sleeps by hand.

use async_trait::async_trait;
use std::cell::Cell;
use std::time::Duration;

/// Задержка по умолчанию, как у поля поиска в списках
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebouncePolicy {
    Immediate,
    Delay(Duration),
}

impl Default for DebouncePolicy {
    fn default() -> Self {
        DebouncePolicy::Delay(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, delay: Duration);
}

/// Браузерный таймер на `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerSleeper;

#[async_trait(?Send)]
impl Sleeper for TimerSleeper {
    async fn sleep(&self, delay: Duration) {
        gloo_timers::future::sleep(delay).await;
    }
}

/// Пропускает только последнюю правку из серии
pub struct Debouncer<S> {
    policy: DebouncePolicy,
    sleeper: S,
    latest: Cell<u64>,
}

impl<S: Sleeper> Debouncer<S> {
    pub fn new(policy: DebouncePolicy, sleeper: S) -> Self {
        Self {
            policy,
            sleeper,
            latest: Cell::new(0),
        }
    }

    pub fn policy(&self) -> DebouncePolicy {
        self.policy
    }

    /// Выжидает окно debounce. `false`, если за это время пришла более новая
    /// правка; тогда вызывающий должен отбросить эту.
    pub async fn settle(&self) -> bool {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);

        match self.policy {
            DebouncePolicy::Immediate => true,
            DebouncePolicy::Delay(delay) if delay.is_zero() => true,
            DebouncePolicy::Delay(delay) => {
                self.sleeper.sleep(delay).await;
                self.latest.get() == ticket
            }
        }
    }
}

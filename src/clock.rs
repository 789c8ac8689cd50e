//! Time and id sources used at every create operation

use chrono::{Local, NaiveDate, Utc};
use std::cell::Cell;
use uuid::Uuid;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current-time source for `createdAt` stamps and "today" comparisons
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;

    /// Today's calendar day
    fn today(&self) -> NaiveDate;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        local_date_today()
    }
}

/// Deterministic clock that advances by one millisecond per reading
///
/// Every stamp it hands out is strictly greater than the previous one.
#[derive(Debug)]
pub struct TickingClock {
    next: Cell<i64>,
    today: NaiveDate,
}

impl TickingClock {
    pub fn new(start_millis: i64, today: NaiveDate) -> Self {
        Self {
            next: Cell::new(start_millis),
            today,
        }
    }
}

impl Clock for TickingClock {
    fn now_millis(&self) -> i64 {
        let now = self.next.get();
        self.next.set(now + 1);
        now
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Unique id source
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random UUID v4 ids
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Counter-based ids: `id-1`, `id-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: u32,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("id-{}", self.counter)
    }
}

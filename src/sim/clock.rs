use chrono::{Duration, NaiveDateTime};

/// Minutes between two consecutive samples.
pub const STEP_MINUTES: i64 = 15;

/// A clock walking a fixed number of quarter-hour steps from a start time.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pv_yield_sim::sim::clock::QuarterHourClock;
///
/// let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let mut clock = QuarterHourClock::new(start, 3);
/// let mut minutes = Vec::new();
///
/// clock.run(|_, ts| minutes.push(ts.format("%H:%M").to_string()));
/// assert_eq!(minutes, vec!["00:00", "00:15", "00:30"]);
/// ```
pub struct QuarterHourClock {
    start: NaiveDateTime,
    /// Current step of the walk
    current: usize,
    /// Total steps to walk
    total: usize,
}

impl QuarterHourClock {
    /// Creates a clock that yields `total` timestamps starting at `start`.
    pub fn new(start: NaiveDateTime, total: usize) -> Self {
        Self {
            start,
            current: 0,
            total,
        }
    }

    /// Timestamp of step `index`, independent of the clock's position.
    pub fn timestamp_at(&self, index: usize) -> NaiveDateTime {
        self.start + Duration::minutes(STEP_MINUTES * index as i64)
    }

    /// Advances the clock by one step.
    ///
    /// # Returns
    ///
    /// * `Some((step, timestamp))` - The step before advancing and its timestamp
    /// * `None` - If the clock has reached its total steps
    pub fn tick(&mut self) -> Option<(usize, NaiveDateTime)> {
        if self.current < self.total {
            let step = self.current;
            self.current += 1;
            Some((step, self.timestamp_at(step)))
        } else {
            None
        }
    }

    /// Runs a function for each remaining step.
    pub fn run(&mut self, mut f: impl FnMut(usize, NaiveDateTime)) {
        while let Some((step, ts)) = self.tick() {
            f(step, ts);
        }
    }
}

impl Iterator for QuarterHourClock {
    type Item = (usize, NaiveDateTime);

    fn next(&mut self) -> Option<Self::Item> {
        self.tick()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.current;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for QuarterHourClock {}

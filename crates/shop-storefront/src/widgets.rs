//! Arithmetic behind the decorative home-page widgets.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Time left until a promotion ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Countdown to a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    target: DateTime<Utc>,
}

impl Countdown {
    pub fn new(target: DateTime<Utc>) -> Self {
        Self { target }
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// Remaining time, or `None` once the target has passed.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Remaining> {
        let distance = self.target.signed_duration_since(now);
        if distance < chrono::Duration::zero() {
            return None;
        }
        let total = distance.num_seconds();
        Some(Remaining {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        })
    }
}

/// Paging state of a product carousel; both directions wrap around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    per_slide: usize,
    page: usize,
}

impl Carousel {
    /// Items per slide on the home page.
    pub const DEFAULT_PER_SLIDE: usize = 4;

    pub fn new(len: usize, per_slide: usize) -> Self {
        Self {
            len,
            per_slide: per_slide.max(1),
            page: 0,
        }
    }

    /// Number of slides, at least one.
    pub fn pages(&self) -> usize {
        self.len.div_ceil(self.per_slide).max(1)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn next(&mut self) -> usize {
        self.page = if self.page + 1 < self.pages() { self.page + 1 } else { 0 };
        self.page
    }

    pub fn prev(&mut self) -> usize {
        self.page = if self.page > 0 { self.page - 1 } else { self.pages() - 1 };
        self.page
    }

    /// Horizontal offset of the track, in percent of one item width per slide.
    pub fn offset_percent(&self) -> f64 {
        -(self.page as f64) * (100.0 / self.per_slide as f64)
    }

    /// Item indices shown on the current slide.
    pub fn visible(&self) -> std::ops::Range<usize> {
        let start = (self.page * self.per_slide).min(self.len);
        start..(start + self.per_slide).min(self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_countdown_breakdown() {
        let now = Utc.with_ymd_and_hms(2024, 6, 14, 22, 30, 15).unwrap();
        let countdown = Countdown::new(Utc.with_ymd_and_hms(2024, 6, 16, 0, 0, 0).unwrap());
        assert_eq!(
            countdown.remaining(now),
            Some(Remaining {
                days: 1,
                hours: 1,
                minutes: 29,
                seconds: 45
            })
        );
    }

    #[test]
    fn test_countdown_expired() {
        let target = Utc.with_ymd_and_hms(2024, 6, 16, 0, 0, 0).unwrap();
        let countdown = Countdown::new(target);
        assert!(countdown.remaining(target + Duration::seconds(1)).is_none());
        assert!(countdown.remaining(target).is_some());
    }

    #[test]
    fn test_carousel_wraps() {
        let mut carousel = Carousel::new(10, 4);
        assert_eq!(carousel.pages(), 3);
        assert_eq!(carousel.next(), 1);
        assert_eq!(carousel.next(), 2);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 2);
        assert_eq!(carousel.visible(), 8..10);
    }

    #[test]
    fn test_carousel_offset() {
        let mut carousel = Carousel::new(8, 4);
        carousel.next();
        assert_eq!(carousel.offset_percent(), -25.0);
    }

    #[test]
    fn test_empty_carousel_stays_on_first_page() {
        let mut carousel = Carousel::new(0, 4);
        assert_eq!(carousel.pages(), 1);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
        assert_eq!(carousel.visible(), 0..0);
    }
}

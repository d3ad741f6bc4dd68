use super::shift::ShiftEntry;
use super::time::{to_time_string, TimeOfDay, MINUTES_PER_DAY};

pub const DEFAULT_PIXELS_PER_MINUTE: f32 = 1.0;
const MIN_PIXELS_PER_MINUTE: f32 = 0.25;
const MAX_PIXELS_PER_MINUTE: f32 = 4.0;

/// Horizontal placement of a shift bar, in pixels from the timeline origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftGeometry {
    pub left: f32,
    pub width: f32,
}

/// Maps time of day to horizontal pixels and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    pixels_per_minute: f32,
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::new(DEFAULT_PIXELS_PER_MINUTE)
    }
}

impl TimeScale {
    pub fn new(pixels_per_minute: f32) -> Self {
        let pixels_per_minute = if pixels_per_minute.is_finite() && pixels_per_minute > 0.0 {
            pixels_per_minute
        } else {
            DEFAULT_PIXELS_PER_MINUTE
        };
        Self { pixels_per_minute }
    }

    /// Pixels per minute (the zoom level).
    pub fn pixels_per_minute(&self) -> f32 {
        self.pixels_per_minute
    }

    /// Convert a time of day to an x-pixel offset from the timeline start.
    pub fn position_of(&self, time: TimeOfDay) -> f32 {
        self.minutes_to_x(time.minutes())
    }

    pub fn minutes_to_x(&self, minutes: i32) -> f32 {
        minutes as f32 * self.pixels_per_minute
    }

    /// Convert a pixel distance to whole minutes, rounding to the nearest.
    /// Saturates at two days either way; anything past one day is out of
    /// range for every shift anyway.
    pub fn pixels_to_minutes(&self, delta_x: f32) -> i32 {
        let limit = (2 * MINUTES_PER_DAY) as f32;
        (delta_x / self.pixels_per_minute).round().clamp(-limit, limit) as i32
    }

    /// Total width in pixels of one day.
    pub fn total_width(&self) -> f32 {
        self.minutes_to_x(MINUTES_PER_DAY)
    }

    pub fn shift_geometry(&self, entry: &ShiftEntry) -> ShiftGeometry {
        let left = self.position_of(entry.start);
        ShiftGeometry {
            left,
            width: self.position_of(entry.end) - left,
        }
    }

    /// Hour labels for the time-scale header, paired with their x offset.
    pub fn hour_ticks(&self) -> impl Iterator<Item = (f32, String)> + '_ {
        (0..24).map(move |hour| {
            let minutes = hour * 60;
            (self.minutes_to_x(minutes), to_time_string(minutes))
        })
    }

    /// Zoom in (increase pixels per minute).
    pub fn zoom_in(&mut self) {
        self.pixels_per_minute = (self.pixels_per_minute * 1.25).min(MAX_PIXELS_PER_MINUTE);
    }

    /// Zoom out (decrease pixels per minute).
    pub fn zoom_out(&mut self) {
        self.pixels_per_minute = (self.pixels_per_minute / 1.25).max(MIN_PIXELS_PER_MINUTE);
    }

    pub fn reset_zoom(&mut self) {
        self.pixels_per_minute = DEFAULT_PIXELS_PER_MINUTE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn default_scale_is_one_pixel_per_minute() {
        let scale = TimeScale::default();
        assert_eq!(scale.position_of(t("09:00")), 540.0);
        assert_eq!(scale.total_width(), 1440.0);
        assert_eq!(scale.pixels_to_minutes(60.0), 60);
    }

    #[test]
    fn geometry_follows_scale() {
        let entry = ShiftEntry::new("Mio", t("09:00"), t("17:00"));
        assert_eq!(
            TimeScale::default().shift_geometry(&entry),
            ShiftGeometry { left: 540.0, width: 480.0 }
        );
        assert_eq!(
            TimeScale::new(2.0).shift_geometry(&entry),
            ShiftGeometry { left: 1080.0, width: 960.0 }
        );
    }

    #[test]
    fn pixel_deltas_round_to_whole_minutes() {
        let scale = TimeScale::new(2.0);
        assert_eq!(scale.pixels_to_minutes(121.0), 61);
        assert_eq!(scale.pixels_to_minutes(-3.0), -2);
    }

    #[test]
    fn huge_pixel_deltas_saturate() {
        let scale = TimeScale::default();
        assert_eq!(scale.pixels_to_minutes(1.0e10), 2 * MINUTES_PER_DAY);
        assert_eq!(scale.pixels_to_minutes(-1.0e10), -2 * MINUTES_PER_DAY);
        assert_eq!(scale.pixels_to_minutes(f32::INFINITY), 2 * MINUTES_PER_DAY);
        assert_eq!(TimeScale::new(0.25).pixels_to_minutes(f32::MAX), 2 * MINUTES_PER_DAY);
    }

    #[test]
    fn invalid_scale_falls_back_to_default() {
        assert_eq!(TimeScale::new(0.0), TimeScale::default());
        assert_eq!(TimeScale::new(f32::NAN), TimeScale::default());
    }

    #[test]
    fn hour_ticks_cover_the_day() {
        let ticks: Vec<_> = TimeScale::default().hour_ticks().collect();
        assert_eq!(ticks.len(), 24);
        assert_eq!(ticks[0], (0.0, "00:00".to_string()));
        assert_eq!(ticks[23], (1380.0, "23:00".to_string()));
    }

    #[test]
    fn zoom_is_bounded() {
        let mut scale = TimeScale::default();
        for _ in 0..20 {
            scale.zoom_in();
        }
        assert_eq!(scale.pixels_per_minute, MAX_PIXELS_PER_MINUTE);
        for _ in 0..40 {
            scale.zoom_out();
        }
        assert_eq!(scale.pixels_per_minute, MIN_PIXELS_PER_MINUTE);
        scale.reset_zoom();
        assert_eq!(scale, TimeScale::default());
    }
}

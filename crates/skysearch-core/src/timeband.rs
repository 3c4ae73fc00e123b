//! Wall-clock hour buckets and their departure-hour filter ranges.
//!
//! The bucket boundaries are shared between resolution (concretizing an
//! `any` time preference from the current hour) and URL encoding (the
//! `depMin`/`depMax` filter pair), so both live here.

use crate::intent::TimeOfDay;
use crate::resolved::DayPart;

impl DayPart {
    /// Maps an hour of day (0–23) to its bucket:
    /// [6,12) morning, [12,18) afternoon, [18,22) evening, otherwise night.
    #[must_use]
    pub fn from_hour(hour: u32) -> DayPart {
        match hour {
            6..=11 => DayPart::Morning,
            12..=17 => DayPart::Afternoon,
            18..=21 => DayPart::Evening,
            _ => DayPart::Night,
        }
    }
}

impl TimeOfDay {
    /// Concretizes the preference: explicit buckets pass through, `any`
    /// becomes the bucket containing `hour`.
    #[must_use]
    pub fn resolve_at(self, hour: u32) -> DayPart {
        match self {
            TimeOfDay::Morning => DayPart::Morning,
            TimeOfDay::Afternoon => DayPart::Afternoon,
            TimeOfDay::Evening => DayPart::Evening,
            TimeOfDay::Night => DayPart::Night,
            TimeOfDay::Any => DayPart::from_hour(hour),
        }
    }
}

/// Departure-hour filter range for a bucket, as `(min, max)`.
///
/// Night is the wraparound pair `(22, 6)`, emitted verbatim: min greater
/// than max means the window crosses midnight, and the results view is the
/// component that interprets it that way. Do not renormalize here.
#[must_use]
pub fn departure_hour_range(part: DayPart) -> (u8, u8) {
    match part {
        DayPart::Morning => (6, 12),
        DayPart::Afternoon => (12, 18),
        DayPart::Evening => (18, 22),
        DayPart::Night => (22, 6),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_hour_maps_to_exactly_one_bucket() {
        for hour in 0..24 {
            let part = DayPart::from_hour(hour);
            let expected = match hour {
                6..=11 => DayPart::Morning,
                12..=17 => DayPart::Afternoon,
                18..=21 => DayPart::Evening,
                _ => DayPart::Night,
            };
            assert_eq!(part, expected, "hour {hour}");
        }
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(DayPart::from_hour(5), DayPart::Night);
        assert_eq!(DayPart::from_hour(6), DayPart::Morning);
        assert_eq!(DayPart::from_hour(11), DayPart::Morning);
        assert_eq!(DayPart::from_hour(12), DayPart::Afternoon);
        assert_eq!(DayPart::from_hour(17), DayPart::Afternoon);
        assert_eq!(DayPart::from_hour(18), DayPart::Evening);
        assert_eq!(DayPart::from_hour(21), DayPart::Evening);
        assert_eq!(DayPart::from_hour(22), DayPart::Night);
        assert_eq!(DayPart::from_hour(0), DayPart::Night);
    }

    #[test]
    fn any_always_concretizes() {
        for hour in 0..24 {
            // No assertion on the variant beyond it existing: DayPart has no
            // `any`, so resolving can't produce one. The call compiling and
            // returning is the property.
            let _ = TimeOfDay::Any.resolve_at(hour);
        }
    }

    #[test]
    fn explicit_preference_ignores_hour() {
        assert_eq!(TimeOfDay::Morning.resolve_at(23), DayPart::Morning);
        assert_eq!(TimeOfDay::Night.resolve_at(9), DayPart::Night);
    }

    #[test]
    fn night_range_is_verbatim_wraparound() {
        assert_eq!(departure_hour_range(DayPart::Night), (22, 6));
    }

    #[test]
    fn daytime_ranges_match_bucket_boundaries() {
        assert_eq!(departure_hour_range(DayPart::Morning), (6, 12));
        assert_eq!(departure_hour_range(DayPart::Afternoon), (12, 18));
        assert_eq!(departure_hour_range(DayPart::Evening), (18, 22));
    }
}

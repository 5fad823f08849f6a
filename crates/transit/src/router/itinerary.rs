//! Itinerary answers: alternating wait and ride segments.

use crate::identifiers::*;

/// One step of an itinerary. Durations are in minutes.
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    /// Waiting at `stop` for the next bus
    Wait { stop: StopName, duration: f64 },

    /// Riding `bus` for `span_count` stops
    Ride {
        bus: BusName,
        span_count: usize,
        duration: f64,
    },
}

impl Segment {
    pub fn duration(&self) -> f64 {
        match self {
            Segment::Wait { duration, .. } | Segment::Ride { duration, .. } => *duration,
        }
    }
}

/// Answer to a from/to itinerary request
#[derive(Clone, Debug, PartialEq)]
pub enum Itinerary {
    /// No sequence of buses connects the two stops
    NoRoute,

    /// Origin and destination are the same stop
    AlreadyThere,

    Segments {
        segments: Vec<Segment>,
        total_time: f64,
    },
}

impl Itinerary {
    /// Build from segments, summing their durations
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        let total_time = segments.iter().map(Segment::duration).sum();
        Itinerary::Segments {
            segments,
            total_time,
        }
    }

    /// Total minutes, `None` if there is no route
    pub fn total_time(&self) -> Option<f64> {
        match self {
            Itinerary::NoRoute => None,
            Itinerary::AlreadyThere => Some(0.0),
            Itinerary::Segments { total_time, .. } => Some(*total_time),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        match self {
            Itinerary::Segments { segments, .. } => segments,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_total_time_sums_segments() {
        let itinerary = Itinerary::from_segments(vec![
            Segment::Wait { stop: "A".into(), duration: 6.0 },
            Segment::Ride { bus: "297".into(), span_count: 2, duration: 5.235 },
        ]);

        assert_relative_eq!(itinerary.total_time().unwrap(), 11.235);
        assert_eq!(itinerary.segments().len(), 2);
    }

    #[test]
    fn test_trivial_answers() {
        assert_eq!(Itinerary::AlreadyThere.total_time(), Some(0.0));
        assert!(Itinerary::AlreadyThere.segments().is_empty());
        assert_eq!(Itinerary::NoRoute.total_time(), None);
    }
}

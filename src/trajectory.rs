//! Score-versus-time samples recorded during a search.

use std::time::Instant;

/// What produced a trajectory sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    /// Score of the initial assignment.
    Start,
    /// A perturbed candidate was scored (accepted or not).
    Candidate,
    /// An improving move was applied.
    Improvement,
    /// The search restarted from a fresh random assignment.
    Restart,
}

/// One `(elapsed, score)` sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrajectoryPoint {
    /// Seconds since the solver started.
    pub elapsed_secs: f64,
    pub score: usize,
    pub event: SearchEvent,
}

/// Append-only sample log with its own clock.
#[derive(Debug, Clone)]
pub struct Trajectory {
    start: Instant,
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    /// Starts the clock.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
            points: Vec::new(),
        }
    }

    pub fn record(&mut self, score: usize, event: SearchEvent) {
        self.points.push(TrajectoryPoint {
            elapsed_secs: self.start.elapsed().as_secs_f64(),
            score,
            event,
        });
    }

    /// Stops recording and hands over the samples.
    pub fn finish(self) -> Vec<TrajectoryPoint> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_is_time_ordered() {
        let mut t = Trajectory::start();
        t.record(1, SearchEvent::Start);
        t.record(3, SearchEvent::Improvement);
        t.record(2, SearchEvent::Restart);
        let points = t.finish();
        assert_eq!(points.len(), 3);
        assert_eq!(points[1].score, 3);
        assert_eq!(points[2].event, SearchEvent::Restart);
        for w in points.windows(2) {
            assert!(w[0].elapsed_secs <= w[1].elapsed_secs);
        }
    }
}

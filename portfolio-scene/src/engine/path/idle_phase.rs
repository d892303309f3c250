/// Position of the roaming marker along its idle loop.
///
/// Elapsed time accumulates without bound; the loop position is
/// `(elapsed_ms / period_ms) mod 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdlePhase {
    elapsed_ms: f32,
    period_ms: f32,
}

impl IdlePhase {
    pub fn new(period_ms: f32) -> Self {
        Self {
            elapsed_ms: 0.0,
            period_ms: period_ms.max(f32::EPSILON),
        }
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    /// Current loop position in `[0, 1)`.
    pub fn t(&self) -> f32 {
        (self.elapsed_ms / self.period_ms).rem_euclid(1.0)
    }

    /// Add a frame delta and return the new loop position.
    pub fn advance(&mut self, delta_ms: f32) -> f32 {
        self.elapsed_ms += delta_ms;
        // Keep the accumulator small so long sessions do not lose precision.
        if self.elapsed_ms >= self.period_ms {
            self.elapsed_ms = self.elapsed_ms.rem_euclid(self.period_ms);
        }
        self.t()
    }

    /// Jump to loop position `t`, used when the marker rejoins the path.
    pub fn resync(&mut self, t: f32) {
        self.elapsed_ms = t * self.period_ms;
    }
}

impl Default for IdlePhase {
    fn default() -> Self {
        Self::new(constants::animation::IDLE_PERIOD_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_is_periodic() {
        let period = 2000.0;
        for elapsed in [0.0, 250.0, 999.0, 1500.0, 1999.0] {
            let mut a = IdlePhase::new(period);
            let mut b = IdlePhase::new(period);
            a.advance(elapsed);
            b.advance(elapsed + 3.0 * period);
            assert!((a.t() - b.t()).abs() < 1e-4, "elapsed={elapsed}");
        }
    }

    #[test]
    fn advancing_by_quarter_period() {
        let mut phase = IdlePhase::new(2000.0);
        assert_eq!(phase.advance(500.0), 0.25);
        assert_eq!(phase.advance(500.0), 0.5);
        assert_eq!(phase.advance(1000.0), 0.0);
    }

    #[test]
    fn many_small_steps_wrap() {
        let mut phase = IdlePhase::new(2000.0);
        for _ in 0..1000 {
            phase.advance(16.0);
        }
        // 16000 ms is exactly eight laps.
        assert!(phase.t() < 1e-3 || phase.t() > 1.0 - 1e-3);
        assert!(phase.elapsed_ms() < phase.period_ms);
    }

    #[test]
    fn resync_sets_loop_position() {
        let mut phase = IdlePhase::new(2000.0);
        phase.advance(1234.0);
        phase.resync(0.4);
        assert!((phase.t() - 0.4).abs() < 1e-6);
        assert!((phase.elapsed_ms() - 800.0).abs() < 1e-3);
    }
}

//! Food pellets: constant drift downward, then a linear fade.

use super::config::PelletConfig;
use super::geometry::{Bounds, Vec2};

/// Opacity below this counts as fully faded; ages are summed from frame
/// durations and drift by a few ulps
const FADED: f64 = 1e-9;

/// Opacity of a pellet of the given age
pub fn opacity_at(age_ms: f64, cfg: &PelletConfig) -> f64 {
    if age_ms < cfg.grace_ms {
        return 1.0;
    }
    if cfg.fade_ms <= 0.0 {
        return 0.0;
    }
    let opacity = (1.0 - (age_ms - cfg.grace_ms) / cfg.fade_ms).clamp(0.0, 1.0);
    if opacity <= FADED {
        0.0
    } else {
        opacity
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pellet {
    pub id: u64,
    pub position: Vec2,
    /// px per frame
    pub velocity: Vec2,
    pub age_ms: f64,
}

impl Pellet {
    pub fn new(id: u64, position: Vec2, velocity: Vec2) -> Self {
        Self { id, position, velocity, age_ms: 0.0 }
    }

    /// Advance one frame that lasted `dt_ms`
    pub fn step(&mut self, dt_ms: f64) {
        self.position += self.velocity;
        self.age_ms += dt_ms.max(0.0);
    }

    pub fn opacity(&self, cfg: &PelletConfig) -> f64 {
        opacity_at(self.age_ms, cfg)
    }

    /// Still visible and inside the viewport
    pub fn is_alive(&self, bounds: Bounds, cfg: &PelletConfig) -> bool {
        self.opacity(cfg) > 0.0 && bounds.contains(self.position, cfg.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_grace_then_linear_fade() {
        let cfg = PelletConfig::default();
        assert_eq!(opacity_at(0.0, &cfg), 1.0);
        assert_eq!(opacity_at(cfg.grace_ms - 1.0, &cfg), 1.0);
        assert_eq!(opacity_at(cfg.grace_ms, &cfg), 1.0);

        let mut last = 1.0;
        let mut age = cfg.grace_ms + 10.0;
        while age < cfg.grace_ms + cfg.fade_ms {
            let o = opacity_at(age, &cfg);
            assert!(o < last, "opacity must keep dropping at {}ms", age);
            last = o;
            age += 10.0;
        }
        assert_eq!(opacity_at(cfg.grace_ms + cfg.fade_ms, &cfg), 0.0);
        assert_eq!(opacity_at(cfg.grace_ms + cfg.fade_ms + 500.0, &cfg), 0.0);
    }

    #[test]
    fn test_pellet_dies_when_leaving_bounds() {
        let cfg = PelletConfig::default();
        // floor at 100 - 8 = 92
        let bounds = Bounds::new(200.0, 100.0);
        let mut pellet = Pellet::new(1, Vec2::new(50.0, 91.0), Vec2::new(0.0, 1.5));
        assert!(pellet.is_alive(bounds, &cfg));
        pellet.step(16.0);
        assert_eq!(pellet.position.y, 92.5);
        assert!(pellet.opacity(&cfg) > 0.0);
        assert!(!pellet.is_alive(bounds, &cfg));
    }

    #[test]
    fn test_summed_frame_ages_fade_out_on_time() {
        let cfg = PelletConfig::default();
        let frame_ms = 1000.0 / 60.0;
        let frames = ((cfg.grace_ms + cfg.fade_ms) / frame_ms).round() as usize;
        let mut pellet = Pellet::new(1, Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0));
        for _ in 0..frames {
            pellet.step(frame_ms);
        }
        assert_eq!(pellet.opacity(&cfg), 0.0);
        assert!(!pellet.is_alive(Bounds::new(100.0, 100.0), &cfg));
    }
}

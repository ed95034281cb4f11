//! Wandering fish.

use std::f64::consts::{PI, TAU};

use rand::Rng;

use super::config::SimConfig;
use super::geometry::{Bounds, Vec2};

/// Body colours, assigned round-robin by fish id
pub const FISH_COLORS: [&str; 8] = [
    "#FFD700", // gold
    "#FF6B6B", // coral
    "#4ECDC4", // teal
    "#45B7D1", // blue
    "#96CEB4", // mint
    "#FFEAA7", // yellow
    "#DDA0DD", // plum
    "#98D8C8", // seafoam
];

/// Uniform sample from `[lo, hi)`; collapses to `lo` on an empty range.
pub(crate) fn sample<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Normalize an angle difference into `(-π, π]`
pub fn normalize_angle(mut diff: f64) -> f64 {
    if !diff.is_finite() {
        return 0.0;
    }
    while diff > PI {
        diff -= TAU;
    }
    while diff <= -PI {
        diff += TAU;
    }
    diff
}

/// What happened during one fish step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FishStep {
    /// A new wander target was picked this frame
    pub retargeted: bool,
    /// The fish was within the arrival radius and idled
    pub near_target: bool,
    /// Speed right after the steering/idle branch, before edge handling
    pub steered_speed: f64,
}

/// Cosmetic render transform (no physical effect)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishTransform {
    pub rotation_deg: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl FishTransform {
    pub fn to_css(&self) -> String {
        format!(
            "rotate({:.2}deg) scaleX({:.3}) scaleY({:.3})",
            self.rotation_deg, self.scale_x, self.scale_y
        )
    }
}

/// A single simulated fish
#[derive(Debug, Clone, PartialEq)]
pub struct Fish {
    pub id: u32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f64,
    pub color: &'static str,
    /// Smoothed heading (radians); velocity follows it while cruising
    pub heading: f64,
    /// Squash/stretch phase (radians)
    pub phase: f64,
    pub target: Vec2,
    /// Frames left until the next target re-selection
    pub wander_timer: f64,
}

impl Fish {
    /// Spawn a fish at a random spot inside `bounds`
    pub fn spawn<R: Rng + ?Sized>(id: u32, rng: &mut R, bounds: Bounds, cfg: &SimConfig) -> Self {
        let extent = cfg.sprite_extent;
        let heading = sample(rng, 0.0, TAU);
        let random_point = |rng: &mut R| {
            Vec2::new(
                sample(rng, 0.0, bounds.max_x(extent)),
                sample(rng, 0.0, bounds.max_y(extent)),
            )
        };
        let position = random_point(rng);
        let target = random_point(rng);

        Self {
            id,
            position,
            velocity: Vec2::from_angle(heading) * cfg.spawn_speed,
            size: sample(rng, cfg.size_min, cfg.size_max),
            color: FISH_COLORS[id as usize % FISH_COLORS.len()],
            heading,
            phase: sample(rng, 0.0, TAU),
            target,
            wander_timer: sample(rng, cfg.wander_frames_min, cfg.wander_frames_max),
        }
    }

    /// Advance one frame
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Bounds, cfg: &SimConfig) -> FishStep {
        let extent = cfg.sprite_extent;
        let mut report = FishStep::default();

        // 1. Wander countdown
        self.wander_timer -= 1.0;
        if self.wander_timer <= 0.0 {
            let angle = sample(rng, 0.0, TAU);
            let distance = sample(rng, 0.0, cfg.wander_radius);
            self.target = bounds.clamp(self.target + Vec2::from_angle(angle) * distance, extent);
            self.wander_timer = sample(rng, cfg.wander_frames_min, cfg.wander_frames_max);
            report.retargeted = true;
        }

        // 2./3. Steer toward the target, or idle around it
        let to_target = self.target - self.position;
        if to_target.length() > cfg.arrive_epsilon {
            let diff = normalize_angle(to_target.angle() - self.heading);
            self.heading += diff * cfg.heading_blend;
            let speed = sample(rng, cfg.cruise_speed_min, cfg.cruise_speed_max);
            self.velocity = Vec2::from_angle(self.heading) * speed;
        } else {
            report.near_target = true;
            self.velocity.x += sample(rng, -0.5, 0.5) * cfg.jitter;
            self.velocity.y += sample(rng, -0.5, 0.5) * cfg.jitter;
            self.velocity = self.velocity.clamp_length(cfg.max_speed);
        }
        report.steered_speed = self.velocity.length();

        // 4. Integrate and bounce off the edges
        self.position += self.velocity;
        let (max_x, max_y) = (bounds.max_x(extent), bounds.max_y(extent));
        if self.position.x < 0.0 || self.position.x > max_x {
            self.velocity.x *= -cfg.bounce_damping;
            self.position.x = self.position.x.clamp(0.0, max_x);
        }
        if self.position.y < 0.0 || self.position.y > max_y {
            self.velocity.y *= -cfg.bounce_damping;
            self.position.y = self.position.y.clamp(0.0, max_y);
        }

        // 5. Cosmetic phase
        self.phase = (self.phase + cfg.phase_rate) % TAU;

        report
    }

    /// Clicked: drop the current plan and head somewhere new right away
    pub fn dance<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Bounds, cfg: &SimConfig) {
        let extent = cfg.sprite_extent;
        self.wander_timer = 0.0;
        self.target = Vec2::new(
            sample(rng, 0.0, bounds.max_x(extent)),
            sample(rng, 0.0, bounds.max_y(extent)),
        );
    }

    pub fn transform(&self) -> FishTransform {
        let s = self.phase.sin() * 0.15;
        FishTransform {
            rotation_deg: self.heading.to_degrees(),
            scale_x: 1.0 + s,
            scale_y: 1.0 - s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn idle_fish(cfg: &SimConfig) -> Fish {
        let mut rng = StdRng::seed_from_u64(7);
        let mut fish = Fish::spawn(0, &mut rng, Bounds::new(800.0, 600.0), cfg);
        fish.position = Vec2::new(300.0, 300.0);
        fish.target = fish.position;
        fish.wander_timer = 1000.0;
        fish
    }

    #[test]
    fn test_normalize_angle_range() {
        for raw in [-10.0, -PI, -1.0, 0.0, 1.0, PI, 3.5, 10.0, 7.0 * PI] {
            let n = normalize_angle(raw);
            assert!(n > -PI && n <= PI, "{} -> {}", raw, n);
            assert!(((raw - n) / TAU - ((raw - n) / TAU).round()).abs() < 1e-9);
        }
        assert_eq!(normalize_angle(-PI), PI);
    }

    #[test]
    fn test_heading_takes_short_way_round() {
        let cfg = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut fish = idle_fish(&cfg);
        // Facing just below +π, target just past -π: shortest turn is a small positive step.
        fish.heading = PI - 0.05;
        fish.target = fish.position + Vec2::from_angle(-PI + 0.05) * 200.0;
        fish.step(&mut rng, Bounds::new(2000.0, 2000.0), &cfg);
        assert!(fish.heading > PI - 0.05);
        assert!(fish.heading < PI - 0.05 + 0.1 * cfg.heading_blend + 1e-9);
    }

    #[test]
    fn test_idle_speed_capped() {
        let cfg = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut fish = idle_fish(&cfg);
        fish.velocity = Vec2::new(3.0, -4.0);
        let report = fish.step(&mut rng, Bounds::new(800.0, 600.0), &cfg);
        assert!(report.near_target);
        assert!(report.steered_speed <= cfg.max_speed + 1e-12);
    }

    #[test]
    fn test_edge_bounce_damps_and_clamps() {
        let cfg = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = Bounds::new(800.0, 600.0);
        let mut fish = idle_fish(&cfg);
        fish.position = Vec2::new(0.1, 200.0);
        fish.target = Vec2::new(0.1, 200.0);
        fish.velocity = Vec2::new(-0.4, 0.0);
        fish.step(&mut rng, bounds, &cfg);
        assert!(fish.position.x >= 0.0);
        if fish.velocity.x != 0.0 {
            assert!(fish.velocity.x > 0.0);
        }
    }

    #[test]
    fn test_dance_resets_timer_and_keeps_target_inside() {
        let cfg = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(4);
        let bounds = Bounds::new(640.0, 480.0);
        let mut fish = idle_fish(&cfg);
        fish.dance(&mut rng, bounds, &cfg);
        assert_eq!(fish.wander_timer, 0.0);
        assert!(bounds.contains(fish.target, cfg.sprite_extent));
        assert!(fish.step(&mut rng, bounds, &cfg).retargeted);
    }

    #[test]
    fn test_transform_squash_and_rotation() {
        let cfg = SimConfig::default();
        let mut fish = idle_fish(&cfg);
        fish.phase = PI / 2.0;
        fish.heading = PI;
        let t = fish.transform();
        assert!((t.scale_x - 1.15).abs() < 1e-12);
        assert!((t.scale_y - 0.85).abs() < 1e-12);
        assert!((t.rotation_deg - 180.0).abs() < 1e-9);
        assert!(t.to_css().starts_with("rotate(180.00deg)"));
    }
}

//! Tank: the fish population plus the active pellets.

use rand::Rng;

use super::config::{PelletConfig, SimConfig};
use super::fish::{sample, Fish};
use super::geometry::{Bounds, Vec2};
use super::pellet::Pellet;

#[derive(Debug, Clone, Default)]
pub struct Tank {
    fishes: Vec<Fish>,
    pellets: Vec<Pellet>,
    next_pellet_id: u64,
    sim: SimConfig,
    pellet_cfg: PelletConfig,
}

impl Tank {
    pub fn new(sim: SimConfig, pellet_cfg: PelletConfig) -> Self {
        Self {
            sim,
            pellet_cfg,
            ..Default::default()
        }
    }

    pub fn fishes(&self) -> &[Fish] {
        &self.fishes
    }

    pub fn pellets(&self) -> &[Pellet] {
        &self.pellets
    }

    pub fn sim_config(&self) -> &SimConfig {
        &self.sim
    }

    pub fn pellet_config(&self) -> &PelletConfig {
        &self.pellet_cfg
    }

    pub fn is_empty(&self) -> bool {
        self.fishes.is_empty() && self.pellets.is_empty()
    }

    /// Replace the population with `count` freshly spawned fish (overlay opened)
    pub fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Bounds, count: usize) {
        self.fishes = (0..count as u32)
            .map(|id| Fish::spawn(id, rng, bounds, &self.sim))
            .collect();
        self.pellets.clear();
        log::debug!("tank populated with {} fish in {}x{}", count, bounds.width, bounds.height);
    }

    /// Drop everything (overlay closed)
    pub fn clear(&mut self) {
        self.fishes.clear();
        self.pellets.clear();
    }

    /// One display frame lasting `dt_ms`
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Bounds, dt_ms: f64) {
        for fish in &mut self.fishes {
            fish.step(rng, bounds, &self.sim);
        }

        for pellet in &mut self.pellets {
            pellet.step(dt_ms);
        }
        let cfg = &self.pellet_cfg;
        self.pellets.retain(|p| p.is_alive(bounds, cfg));
    }

    /// Drop a burst of pellets around a random point in the top quarter.
    /// Returns how many were added.
    pub fn feed<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Bounds) -> usize {
        let cfg = &self.pellet_cfg;
        let center = Vec2::new(
            sample(rng, 0.0, bounds.max_x(cfg.size)),
            sample(rng, 0.0, bounds.max_y(cfg.size) * 0.25),
        );

        for _ in 0..cfg.burst {
            let offset = Vec2::new(sample(rng, -cfg.scatter, cfg.scatter), sample(rng, -cfg.scatter / 2.0, cfg.scatter / 2.0));
            let velocity = Vec2::new(sample(rng, -cfg.max_drift, cfg.max_drift), cfg.fall_speed);
            let position = bounds.clamp(center + offset, cfg.size);
            self.pellets.push(Pellet::new(self.next_pellet_id, position, velocity));
            self.next_pellet_id += 1;
        }
        cfg.burst
    }

    /// Make a fish dance; false if there is no such fish
    pub fn dance<R: Rng + ?Sized>(&mut self, fish_id: u32, rng: &mut R, bounds: Bounds) -> bool {
        match self.fishes.iter_mut().find(|f| f.id == fish_id) {
            Some(fish) => {
                fish.dance(rng, bounds, &self.sim);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_populate_and_clear() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = Bounds::new(1024.0, 768.0);
        let mut tank = Tank::default();
        tank.populate(&mut rng, bounds, 8);
        assert_eq!(tank.fishes().len(), 8);
        assert_eq!(tank.fishes()[1].color, crate::sim::FISH_COLORS[1]);
        assert!(tank.fishes().iter().all(|f| bounds.contains(f.position, 100.0)));
        assert!(tank.fishes().iter().all(|f| (40.0..70.0).contains(&f.size)));

        tank.feed(&mut rng, bounds);
        tank.clear();
        assert!(tank.is_empty());
    }

    #[test]
    fn test_feed_drops_burst_in_top_area() {
        let mut rng = StdRng::seed_from_u64(12);
        let bounds = Bounds::new(1024.0, 768.0);
        let mut tank = Tank::default();
        let added = tank.feed(&mut rng, bounds);
        assert_eq!(added, 6);
        assert_eq!(tank.pellets().len(), 6);
        for p in tank.pellets() {
            assert!(p.velocity.y > 0.0);
            assert!(p.velocity.x.abs() <= 0.5);
            assert!(p.position.y <= bounds.max_y(8.0) * 0.25 + 12.0);
        }
        let ids: Vec<u64> = tank.pellets().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_dance_unknown_fish() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut tank = Tank::default();
        assert!(!tank.dance(3, &mut rng, Bounds::new(800.0, 600.0)));
    }
}

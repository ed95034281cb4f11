//! Long-running tank simulations checking the frame invariants.

use rand::rngs::StdRng;
use rand::SeedableRng;
use taskquest_core::sim::{opacity_at, Bounds, PelletConfig, SimConfig, Tank};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn running_tank(seed: u64, bounds: Bounds) -> (Tank, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tank = Tank::new(SimConfig::default(), PelletConfig::default());
    tank.populate(&mut rng, bounds, 8);
    (tank, rng)
}

#[test]
fn test_fish_stay_inside_bounds() {
    let bounds = Bounds::new(640.0, 480.0);
    for seed in 0..5 {
        let (mut tank, mut rng) = running_tank(seed, bounds);
        let extent = tank.sim_config().sprite_extent;
        for _ in 0..3_000 {
            tank.step(&mut rng, bounds, FRAME_MS);
            for fish in tank.fishes() {
                assert!(bounds.contains(fish.position, extent), "fish {} escaped: {:?}", fish.id, fish.position);
                assert!(bounds.contains(fish.target, extent));
            }
        }
    }
}

#[test]
fn test_steered_speed_never_exceeds_cap() {
    let bounds = Bounds::new(500.0, 400.0);
    let (mut tank, mut rng) = running_tank(42, bounds);
    let cfg = tank.sim_config().clone();

    for _ in 0..5_000 {
        let mut fishes = tank.fishes().to_vec();
        for fish in &mut fishes {
            let report = fish.step(&mut rng, bounds, &cfg);
            assert!(report.steered_speed <= cfg.max_speed + 1e-9);
        }
        tank.step(&mut rng, bounds, FRAME_MS);
    }
}

#[test]
fn test_idle_fish_jitter_is_capped() {
    let bounds = Bounds::new(800.0, 600.0);
    let (tank, mut rng) = running_tank(17, bounds);
    let cfg = tank.sim_config().clone();
    let mut fish = tank.fishes()[0].clone();
    fish.wander_timer = f64::MAX;
    fish.velocity = fish.velocity * 10.0;

    for _ in 0..500 {
        // pin the target to the fish so it idles every frame
        fish.target = fish.position;
        let report = fish.step(&mut rng, bounds, &cfg);
        assert!(report.near_target);
        assert!(report.steered_speed <= cfg.max_speed + 1e-9);
    }
}

#[test]
fn test_retarget_only_when_countdown_expires() {
    let bounds = Bounds::new(800.0, 600.0);
    let (tank, mut rng) = running_tank(9, bounds);
    let cfg = tank.sim_config().clone();
    let mut fishes = tank.fishes().to_vec();

    for _ in 0..2_000 {
        for fish in &mut fishes {
            let timer_before = fish.wander_timer;
            let target_before = fish.target;
            let report = fish.step(&mut rng, bounds, &cfg);
            assert_eq!(report.retargeted, timer_before - 1.0 <= 0.0);
            if report.retargeted {
                assert!(bounds.contains(fish.target, cfg.sprite_extent));
                assert!(fish.wander_timer >= cfg.wander_frames_min && fish.wander_timer < cfg.wander_frames_max);
            } else {
                assert_eq!(fish.target, target_before);
            }
        }
    }
}

#[test]
fn test_pellets_removed_when_faded_or_out_of_bounds() {
    let bounds = Bounds::new(1024.0, 768.0);
    let (mut tank, mut rng) = running_tank(3, bounds);
    let cfg = tank.pellet_config().clone();

    assert_eq!(tank.feed(&mut rng, bounds), cfg.burst);
    assert_eq!(tank.feed(&mut rng, bounds), cfg.burst);
    assert_eq!(tank.pellets().len(), 2 * cfg.burst);

    let mut frames = 0;
    while !tank.pellets().is_empty() {
        tank.step(&mut rng, bounds, FRAME_MS);
        for pellet in tank.pellets() {
            assert!(pellet.opacity(&cfg) > 0.0);
            assert!(bounds.contains(pellet.position, cfg.size));
        }
        frames += 1;
        assert!(frames < 1_000, "pellets never expired");
    }
    // gone no later than grace + fade
    assert!(frames as f64 * FRAME_MS <= cfg.grace_ms + cfg.fade_ms + FRAME_MS);
}

#[test]
fn test_short_viewport_drops_pellets_at_the_floor() {
    let bounds = Bounds::new(400.0, 60.0);
    let (mut tank, mut rng) = running_tank(5, bounds);
    tank.feed(&mut rng, bounds);
    // 52 px of fall room at 1.5 px per frame
    for _ in 0..40 {
        tank.step(&mut rng, bounds, FRAME_MS);
    }
    assert!(tank.pellets().is_empty());
}

#[test]
fn test_opacity_curve() {
    let cfg = PelletConfig::default();
    assert_eq!(opacity_at(0.0, &cfg), 1.0);
    assert_eq!(opacity_at(cfg.grace_ms - 1.0, &cfg), 1.0);
    let mut last = 1.0;
    let mut age = cfg.grace_ms + 10.0;
    while age < cfg.grace_ms + cfg.fade_ms {
        let o = opacity_at(age, &cfg);
        assert!(o < last);
        last = o;
        age += 100.0;
    }
    assert_eq!(opacity_at(cfg.grace_ms + cfg.fade_ms, &cfg), 0.0);
}

#[test]
fn test_resize_clamps_on_next_frame() {
    let wide = Bounds::new(1600.0, 1000.0);
    let (mut tank, mut rng) = running_tank(21, wide);
    for _ in 0..100 {
        tank.step(&mut rng, wide, FRAME_MS);
    }
    let narrow = Bounds::new(300.0, 200.0);
    tank.step(&mut rng, narrow, FRAME_MS);
    let extent = tank.sim_config().sprite_extent;
    assert!(tank.fishes().iter().all(|f| narrow.contains(f.position, extent)));
}

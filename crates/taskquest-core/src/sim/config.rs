//! Simulation tuning.

/// Fish steering parameters. Distances are CSS pixels, times are frames.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Square sprite box each fish occupies
    pub sprite_extent: f64,
    /// Maximum displacement of the wander target on re-selection
    pub wander_radius: f64,
    /// Countdown range (frames) between target re-selections
    pub wander_frames_min: f64,
    pub wander_frames_max: f64,
    /// Fraction of the angular difference applied to the heading per frame
    pub heading_blend: f64,
    /// Cruising speed band (px per frame)
    pub cruise_speed_min: f64,
    pub cruise_speed_max: f64,
    /// Initial speed at spawn
    pub spawn_speed: f64,
    /// Distance under which a fish counts as arrived
    pub arrive_epsilon: f64,
    /// Full width of the random velocity nudge while idling at the target
    pub jitter: f64,
    /// Speed cap while idling at the target
    pub max_speed: f64,
    /// Fraction of velocity kept (and reversed) on hitting an edge
    pub bounce_damping: f64,
    /// Squash/stretch phase advance per frame (radians)
    pub phase_rate: f64,
    /// Rendered fish width range (px)
    pub size_min: f64,
    pub size_max: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            sprite_extent: 100.0,
            wander_radius: 150.0,
            wander_frames_min: 100.0,
            wander_frames_max: 300.0,
            heading_blend: 0.008,
            cruise_speed_min: 0.3,
            cruise_speed_max: 0.5,
            spawn_speed: 0.5,
            arrive_epsilon: 5.0,
            jitter: 0.1,
            max_speed: 0.5,
            bounce_damping: 0.8,
            phase_rate: 0.1,
            size_min: 40.0,
            size_max: 70.0,
        }
    }
}

/// Food pellet parameters
#[derive(Debug, Clone, PartialEq)]
pub struct PelletConfig {
    /// Square extent of a pellet (px)
    pub size: f64,
    /// Horizontal drift is drawn from `[-max_drift, max_drift)` px per frame
    pub max_drift: f64,
    /// Downward speed (px per frame)
    pub fall_speed: f64,
    /// Time at full opacity before fading starts
    pub grace_ms: f64,
    /// Duration of the linear fade to zero
    pub fade_ms: f64,
    /// Pellets dropped per feed click
    pub burst: usize,
    /// Horizontal scatter of a burst around its drop point
    pub scatter: f64,
}

impl Default for PelletConfig {
    fn default() -> Self {
        Self {
            size: 8.0,
            max_drift: 0.5,
            fall_speed: 1.5,
            grace_ms: 1000.0,
            fade_ms: 1500.0,
            burst: 6,
            scatter: 24.0,
        }
    }
}

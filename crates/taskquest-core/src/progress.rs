//! Progress ring geometry and artwork lookup.

use std::f64::consts::TAU;

/// Side of the ring's SVG viewport; the ring is centred in it
pub const RING_VIEWPORT: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RingSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl RingSize {
    pub fn stroke_width(&self) -> f64 {
        match self {
            RingSize::Sm => 3.0,
            RingSize::Md => 4.0,
            RingSize::Lg => 6.0,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            RingSize::Sm => "ring-sm",
            RingSize::Md => "ring-md",
            RingSize::Lg => "ring-lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RingColor {
    #[default]
    Primary,
    Success,
    Accent,
    Streak,
}

impl RingColor {
    pub fn class(&self) -> &'static str {
        match self {
            RingColor::Primary => "stroke-primary",
            RingColor::Success => "stroke-success",
            RingColor::Accent => "stroke-accent",
            RingColor::Streak => "stroke-streak",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub radius: f64,
    pub circumference: f64,
    pub stroke_width: f64,
}

impl RingGeometry {
    pub fn for_size(size: RingSize) -> Self {
        let stroke_width = size.stroke_width();
        let radius = RING_VIEWPORT / 2.0 - stroke_width * 2.0;
        Self {
            radius,
            circumference: radius * TAU,
            stroke_width,
        }
    }

    /// Dash pattern drawing `progress` percent of the circle
    pub fn dasharray(&self, progress: f64) -> String {
        let filled = clamp_progress(progress) / 100.0 * self.circumference;
        format!("{:.3} {:.3}", filled, self.circumference)
    }
}

pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 100.0)
    }
}

/// `"42%"`
pub fn percent_label(progress: f64) -> String {
    format!("{}%", clamp_progress(progress).round() as u32)
}

pub const PLACEHOLDER_ART: &str = "assets/categories/progress-placeholder-64x64.png";

/// Character art shown inside a ring, looked up by category name
pub fn category_art(category: Option<&str>) -> &'static str {
    let Some(category) = category else {
        return PLACEHOLDER_ART;
    };
    match category.to_lowercase().as_str() {
        "self care" => "assets/categories/self-care-64x64.png",
        "studying" => "assets/categories/studying-64x64.png",
        "cleaning path" => "assets/categories/cleaning-path-64x64.png",
        "total streak" => "assets/categories/total-streak-64x64.png",
        _ => PLACEHOLDER_ART,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_per_size() {
        let md = RingGeometry::for_size(RingSize::Md);
        assert_eq!(md.radius, 37.0);
        assert!((md.circumference - 37.0 * TAU).abs() < 1e-9);
        assert_eq!(RingGeometry::for_size(RingSize::Lg).radius, 33.0);
        assert_eq!(RingGeometry::for_size(RingSize::Sm).radius, 39.0);
    }

    #[test]
    fn test_dasharray_clamps() {
        let g = RingGeometry::for_size(RingSize::Md);
        let c = format!("{:.3}", g.circumference);
        assert_eq!(g.dasharray(0.0), format!("0.000 {}", c));
        assert_eq!(g.dasharray(100.0), format!("{} {}", c, c));
        assert_eq!(g.dasharray(250.0), g.dasharray(100.0));
        assert_eq!(g.dasharray(-5.0), g.dasharray(0.0));
        assert_eq!(g.dasharray(f64::NAN), g.dasharray(0.0));
    }

    #[test]
    fn test_labels_and_art() {
        assert_eq!(percent_label(44.6), "45%");
        assert_eq!(percent_label(120.0), "100%");
        assert_eq!(category_art(Some("Self Care")), "assets/categories/self-care-64x64.png");
        assert_eq!(category_art(Some("Juggling")), PLACEHOLDER_ART);
        assert_eq!(category_art(None), PLACEHOLDER_ART);
    }
}

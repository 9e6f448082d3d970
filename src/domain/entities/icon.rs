//! Icon identifiers carried as plain data.

use serde::Serialize;

/// Symbolic icon attached to feature cards, highlights and stats.
///
/// The domain only names the icon; the web layer decides how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Thermometer,
    Gauge,
    Settings,
    Shield,
    Zap,
    Cpu,
    TrendingUp,
    Target,
    BadgeCheck,
    Headphones,
    FlaskConical,
    GraduationCap,
    Atom,
    Factory,
    Droplets,
    Award,
    Globe,
    Microscope,
    HeartHandshake,
    Lightbulb,
    ShieldCheck,
    Rocket,
    Mail,
    MapPin,
    Clock,
}

impl IconKind {
    /// Kebab-case name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Self::Thermometer => "thermometer",
            Self::Gauge => "gauge",
            Self::Settings => "settings",
            Self::Shield => "shield",
            Self::Zap => "zap",
            Self::Cpu => "cpu",
            Self::TrendingUp => "trending-up",
            Self::Target => "target",
            Self::BadgeCheck => "badge-check",
            Self::Headphones => "headphones",
            Self::FlaskConical => "flask-conical",
            Self::GraduationCap => "graduation-cap",
            Self::Atom => "atom",
            Self::Factory => "factory",
            Self::Droplets => "droplets",
            Self::Award => "award",
            Self::Globe => "globe",
            Self::Microscope => "microscope",
            Self::HeartHandshake => "heart-handshake",
            Self::Lightbulb => "lightbulb",
            Self::ShieldCheck => "shield-check",
            Self::Rocket => "rocket",
            Self::Mail => "mail",
            Self::MapPin => "map-pin",
            Self::Clock => "clock",
        }
    }
}

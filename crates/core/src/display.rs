use crate::types::HealthStatus;

/// Visual tint for a status. Frontends map these to their own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Blue,
    Teal,
    Green,
    Yellow,
    Orange,
    Red,
    Gray,
}

/// Presentation attributes for one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub label: &'static str,
    pub icon: &'static str,
    pub tint: Tint,
}

/// Status → style, one exhaustive table. The status set is closed, so every
/// frontend dispatch goes through here instead of scattered conditionals.
pub const fn style(status: HealthStatus) -> StatusStyle {
    match status {
        HealthStatus::SeverelyOverwatered => StatusStyle {
            label: "Severely overwatered",
            icon: "🌊",
            tint: Tint::Blue,
        },
        HealthStatus::Overwatered => StatusStyle {
            label: "Overwatered",
            icon: "💧",
            tint: Tint::Teal,
        },
        HealthStatus::Healthy => StatusStyle {
            label: "Healthy",
            icon: "🌿",
            tint: Tint::Green,
        },
        HealthStatus::SlightlyDry => StatusStyle {
            label: "Slightly dry",
            icon: "🌱",
            tint: Tint::Yellow,
        },
        HealthStatus::NeedsWater => StatusStyle {
            label: "Needs water",
            icon: "⚠️",
            tint: Tint::Orange,
        },
        HealthStatus::SeverelyDry => StatusStyle {
            label: "Severely dry",
            icon: "🚨",
            tint: Tint::Red,
        },
        HealthStatus::Unknown => StatusStyle {
            label: "Unknown",
            icon: "❔",
            tint: Tint::Gray,
        },
    }
}

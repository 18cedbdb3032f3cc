use chrono::{DateTime, Duration, Utc};
use verdant_core::display;
use verdant_core::health;
use verdant_core::types::{HealthStatus, PlantRecord, WateringHistory};

const BAR_WIDTH: usize = 12;

/// One line per plant: icon, label, name, dryness, bar.
pub fn print_table(plants: &[PlantRecord], now: DateTime<Utc>) {
    for plant in plants {
        match plant.history(now) {
            Some(history) => {
                let evaluation = verdant_core::evaluate(&history);
                let style = display::style(evaluation.status);
                let dryness = if plant.watering_frequency_days > 0 {
                    format!("{:6.1}%", health::dryness::percent(&history))
                } else {
                    "     —".to_owned()
                };
                println!(
                    "{} {:<22} {:<16} {}  [{}] {:.2}",
                    style.icon,
                    style.label,
                    plant.name,
                    dryness,
                    bar(evaluation.fraction, BAR_WIDTH),
                    evaluation.fraction,
                );
            }
            None => {
                let style = display::style(HealthStatus::Unknown);
                println!(
                    "{} {:<22} {:<16} never watered",
                    style.icon, style.label, plant.name,
                );
            }
        }
    }
}

/// Status/fraction timeline for a plant watered at t=0, optionally preceded
/// by another watering `previous_interval_days` earlier. Transitions are
/// marked in the left margin.
pub fn print_timeline(
    frequency_days: i64,
    previous_interval_days: Option<f64>,
    days: u32,
    step_hours: u32,
) {
    let last = Utc::now();
    let previous = previous_interval_days
        .map(|d| last - Duration::milliseconds((d * 86_400_000.0).round() as i64));
    let history = WateringHistory::new(last, previous, frequency_days);

    let step_hours = u64::from(step_hours.max(1));
    let total_hours = u64::from(days) * 24;
    let mut previous_status = None;

    let mut hour = 0;
    while hour <= total_hours {
        let snapshot = history.at(last + Duration::hours(hour as i64));
        let evaluation = verdant_core::evaluate(&snapshot);
        let style = display::style(evaluation.status);
        let marker = if previous_status != Some(evaluation.status) {
            '*'
        } else {
            ' '
        };
        println!(
            "{} +{:5.1}d  {} {:<22} [{}] {:.2}",
            marker,
            hour as f64 / 24.0,
            style.icon,
            style.label,
            bar(evaluation.fraction, BAR_WIDTH),
            evaluation.fraction,
        );
        previous_status = Some(evaluation.status);
        hour += step_hours;
    }
}

fn bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}

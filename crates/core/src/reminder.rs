use rand::Rng;
use uuid::Uuid;

use crate::types::HealthStatus;

/// Which watering reminder a plant qualifies for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    NeedsWater,
    SeverelyDry,
}

impl ReminderKind {
    /// Reminder-worthy statuses; everything else stays quiet.
    pub fn for_status(status: HealthStatus) -> Option<Self> {
        match status {
            HealthStatus::NeedsWater => Some(Self::NeedsWater),
            HealthStatus::SeverelyDry => Some(Self::SeverelyDry),
            _ => None,
        }
    }
}

/// Title rotation for gentle watering reminders.
pub const NEEDS_WATER_TITLES: [&str; 10] = [
    "Time to give your plant a drink 🌱",
    "Your plant is feeling a bit thirsty 🌿",
    "Hey, your green friend needs some water 🌱",
    "Don't forget to water your plant today 🌿",
    "A little hydration goes a long way 🌱",
    "Your plant could use a refreshing sip 🌿",
    "It's watering time for your plant 🌱",
    "Your plant's leaves are calling for water 🌿",
    "Keep your plant happy — water it now 🌱",
    "Looks like your plant needs a bit of care 🌿",
];

/// Title rotation for urgent reminders.
pub const SEVERELY_DRY_TITLES: [&str; 4] = [
    "Your plant is really thirsty ⚠️",
    "Emergency hydration needed 🚨",
    "Your plant is drying out fast ⚠️",
    "Uh oh...your plant needs water ASAP 🚨",
];

/// A composed reminder, ready for whatever delivery channel is plugged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub plant_id: Uuid,
    pub plant_name: String,
    pub kind: ReminderKind,
    pub title: String,
    pub body: String,
}

impl Reminder {
    /// Compose a reminder with a randomly rotated title.
    pub fn compose(plant_id: Uuid, plant_name: &str, kind: ReminderKind) -> Self {
        Self::compose_with_rng(plant_id, plant_name, kind, &mut rand::thread_rng())
    }

    /// Deterministic variant: the caller supplies the RNG.
    pub fn compose_with_rng<R: Rng>(
        plant_id: Uuid,
        plant_name: &str,
        kind: ReminderKind,
        rng: &mut R,
    ) -> Self {
        let titles: &[&str] = match kind {
            ReminderKind::NeedsWater => &NEEDS_WATER_TITLES,
            ReminderKind::SeverelyDry => &SEVERELY_DRY_TITLES,
        };
        let title = titles[rng.gen_range(0..titles.len())].to_owned();
        let body = match kind {
            ReminderKind::NeedsWater => format!("{plant_name} needs water!"),
            ReminderKind::SeverelyDry => {
                format!("{plant_name} is severely dry and needs immediate watering to recover!")
            }
        };
        Self {
            plant_id,
            plant_name: plant_name.to_owned(),
            kind,
            title,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn only_dry_statuses_qualify() {
        assert_eq!(
            ReminderKind::for_status(HealthStatus::NeedsWater),
            Some(ReminderKind::NeedsWater)
        );
        assert_eq!(
            ReminderKind::for_status(HealthStatus::SeverelyDry),
            Some(ReminderKind::SeverelyDry)
        );
        for status in [
            HealthStatus::Healthy,
            HealthStatus::SlightlyDry,
            HealthStatus::Overwatered,
            HealthStatus::SeverelyOverwatered,
            HealthStatus::Unknown,
        ] {
            assert_eq!(ReminderKind::for_status(status), None);
        }
    }

    #[test]
    fn composed_title_comes_from_the_matching_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        let reminder = Reminder::compose_with_rng(
            Uuid::new_v4(),
            "Rose",
            ReminderKind::NeedsWater,
            &mut rng,
        );
        assert!(NEEDS_WATER_TITLES.contains(&reminder.title.as_str()));
        assert_eq!(reminder.body, "Rose needs water!");

        let urgent = Reminder::compose_with_rng(
            Uuid::new_v4(),
            "Rose",
            ReminderKind::SeverelyDry,
            &mut rng,
        );
        assert!(SEVERELY_DRY_TITLES.contains(&urgent.title.as_str()));
        assert!(urgent.body.contains("severely dry"));
    }

    #[test]
    fn composition_is_deterministic_under_a_seeded_rng() {
        let id = Uuid::new_v4();
        let a = Reminder::compose_with_rng(id, "Fern", ReminderKind::NeedsWater, &mut StdRng::seed_from_u64(42));
        let b = Reminder::compose_with_rng(id, "Fern", ReminderKind::NeedsWater, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}

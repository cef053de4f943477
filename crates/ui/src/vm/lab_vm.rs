use lab_core::model::{Difficulty, Lab, LabId};

/// Whether the learner can do anything with the lab right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabAvailability {
    Available,
    Completed,
    Locked,
}

impl LabAvailability {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Start lab",
            Self::Completed => "Completed",
            Self::Locked => "Locked",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Available => "lab-status available",
            Self::Completed => "lab-status completed",
            Self::Locked => "lab-status locked",
        }
    }
}

/// UI-ready lab card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabCardVm {
    pub id: LabId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty_label: &'static str,
    pub difficulty_class: &'static str,
    pub duration: String,
    pub points: String,
    pub availability: LabAvailability,
}

impl From<&Lab> for LabCardVm {
    fn from(lab: &Lab) -> Self {
        // A completed lab stays "completed" even if it was locked again later.
        let availability = if lab.is_completed {
            LabAvailability::Completed
        } else if lab.is_locked {
            LabAvailability::Locked
        } else {
            LabAvailability::Available
        };

        Self {
            id: lab.id,
            title: lab.title.clone(),
            description: lab.description.clone(),
            category: lab.category.clone(),
            difficulty_label: lab.difficulty.label(),
            difficulty_class: difficulty_class(lab.difficulty),
            duration: format_duration(lab.estimated_minutes),
            points: format!("{} pts", lab.points_awarded),
            availability,
        }
    }
}

#[must_use]
pub fn map_lab_cards(labs: &[Lab]) -> Vec<LabCardVm> {
    labs.iter().map(LabCardVm::from).collect()
}

fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "badge badge-easy",
        Difficulty::Medium => "badge badge-medium",
        Difficulty::Hard => "badge badge-hard",
        Difficulty::Extreme => "badge badge-extreme",
    }
}

/// `45 min`, `1 h`, `1 h 30 min`
#[must_use]
pub fn format_duration(minutes: u32) -> String {
    let (hours, rest) = (minutes / 60, minutes % 60);
    match (hours, rest) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} h"),
        (h, m) => format!("{h} h {m} min"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_core::model::{ModuleId, TrackId};

    fn sample_lab() -> Lab {
        Lab {
            id: LabId::new(9),
            track_id: TrackId::new(1),
            module_id: ModuleId::new(1),
            title: "Buffer Overflow".into(),
            description: "Smash the stack.".into(),
            difficulty: Difficulty::Hard,
            category: "Exploitation".into(),
            estimated_minutes: 90,
            points_awarded: 250,
            is_completed: false,
            is_locked: false,
            lab_type: None,
            docker_image: None,
        }
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(0), "0 min");
        assert_eq!(format_duration(45), "45 min");
        assert_eq!(format_duration(60), "1 h");
        assert_eq!(format_duration(150), "2 h 30 min");
    }

    #[test]
    fn card_maps_difficulty_and_points() {
        let card = LabCardVm::from(&sample_lab());
        assert_eq!(card.difficulty_label, "Hard");
        assert_eq!(card.difficulty_class, "badge badge-hard");
        assert_eq!(card.points, "250 pts");
        assert_eq!(card.duration, "1 h 30 min");
        assert_eq!(card.availability, LabAvailability::Available);
    }

    #[test]
    fn completed_takes_precedence_over_locked() {
        let mut lab = sample_lab();
        lab.is_locked = true;
        assert_eq!(LabCardVm::from(&lab).availability, LabAvailability::Locked);
        lab.is_completed = true;
        assert_eq!(LabCardVm::from(&lab).availability, LabAvailability::Completed);
    }
}

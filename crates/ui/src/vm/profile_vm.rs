use lab_core::ProfileChecklist;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChecklistItemVm {
    pub label: &'static str,
    pub done: bool,
}

/// Everything the profile completion widget renders.
///
/// The raw percentage is passed through untouched; the `<progress>` element
/// clamps its own bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileChecklistVm {
    pub percentage: i32,
    pub items: Vec<ChecklistItemVm>,
    pub completed: usize,
    pub next_hint: Option<String>,
}

impl ProfileChecklistVm {
    #[must_use]
    pub fn new(percentage: i32) -> Self {
        let checklist = ProfileChecklist::new(percentage);
        let items = checklist
            .items()
            .map(|(task, done)| ChecklistItemVm {
                label: task.label,
                done,
            })
            .collect();

        Self {
            percentage,
            items,
            completed: checklist.completed_count(),
            next_hint: checklist
                .next_task()
                .map(|task| format!("Next: {}", task.label)),
        }
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} of {} tasks complete", self.completed, self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_profile_has_hint() {
        let vm = ProfileChecklistVm::new(45);
        assert_eq!(vm.completed, 2);
        assert_eq!(vm.summary(), "2 of 5 tasks complete");
        assert_eq!(vm.next_hint.as_deref(), Some("Next: Finish your first lab"));
        assert_eq!(
            vm.items.iter().map(|item| item.done).collect::<Vec<_>>(),
            vec![true, true, false, false, false]
        );
    }

    #[test]
    fn complete_profile_has_no_hint() {
        let vm = ProfileChecklistVm::new(100);
        assert!(vm.items.iter().all(|item| item.done));
        assert_eq!(vm.next_hint, None);
    }
}

//! Profile completion checklist.
//!
//! One percentage drives every task: a task is done once the percentage
//! reaches its threshold. Input is compared as-is, without clamping.

/// A checklist entry unlocked at `threshold` percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileTask {
    pub threshold: i32,
    pub label: &'static str,
}

/// Ordered by threshold, ascending.
pub const PROFILE_TASKS: [ProfileTask; 5] = [
    ProfileTask {
        threshold: 20,
        label: "Complete your profile info",
    },
    ProfileTask {
        threshold: 30,
        label: "Verify your email address",
    },
    ProfileTask {
        threshold: 50,
        label: "Finish your first lab",
    },
    ProfileTask {
        threshold: 70,
        label: "Enroll in a learning track",
    },
    ProfileTask {
        threshold: 90,
        label: "Earn your first badge",
    },
];

/// Checklist derived from a completion percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileChecklist {
    percentage: i32,
}

impl ProfileChecklist {
    #[must_use]
    pub fn new(percentage: i32) -> Self {
        Self { percentage }
    }

    #[must_use]
    pub fn percentage(&self) -> i32 {
        self.percentage
    }

    /// Every task paired with its done flag, in table order.
    pub fn items(&self) -> impl Iterator<Item = (ProfileTask, bool)> + '_ {
        PROFILE_TASKS
            .iter()
            .map(move |task| (*task, self.percentage >= task.threshold))
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items().filter(|(_, done)| *done).count()
    }

    /// First task not yet reached, if any.
    #[must_use]
    pub fn next_task(&self) -> Option<ProfileTask> {
        self.items().find(|(_, done)| !done).map(|(task, _)| task)
    }
}

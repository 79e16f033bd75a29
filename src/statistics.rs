use std::sync::atomic::{AtomicU32, Ordering};

/// Search counters, updated through shared references so the
/// continuation-passing core can record progress without threading mutable
/// state.
#[derive(Default)]
pub struct Statistics {
    expanded_goals: AtomicU32,
    ancestor_resolutions: AtomicU32,
    renamed_rules: AtomicU32,
    deepening_iterations: AtomicU32,
}

impl Statistics {
    pub fn increment_expanded_goals(&self) {
        self.expanded_goals.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_ancestor_resolutions(&self) {
        self.ancestor_resolutions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_renamed_rules(&self) {
        self.renamed_rules.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deepening_iterations(&self) {
        self.deepening_iterations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn expanded_goals(&self) -> u32 {
        self.expanded_goals.load(Ordering::Relaxed)
    }

    pub fn items(&self) -> [(&'static str, u32); 4] {
        [
            ("expanded goals", self.expanded_goals.load(Ordering::Relaxed)),
            (
                "ancestor resolutions",
                self.ancestor_resolutions.load(Ordering::Relaxed),
            ),
            ("renamed rules", self.renamed_rules.load(Ordering::Relaxed)),
            (
                "deepening iterations",
                self.deepening_iterations.load(Ordering::Relaxed),
            ),
        ]
    }
}

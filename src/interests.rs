//! Interest indicators and the feature encoder.
//!
//! The indicator universe is fixed: names, order, and spelling match the header of the
//! historical training CSV, so they must never be corrected or reordered without
//! retraining every persisted model.

/// Number of interest indicators (and feature vector slots).
pub const INTEREST_COUNT: usize = 59;

/// Canonical indicator order used for both training and inference.
pub const INTEREST_NAMES: [&str; INTEREST_COUNT] = [
    "Drawing",
    "Dancing",
    "Singing",
    "Sports",
    "Video Game",
    "Acting",
    "Travelling",
    "Gardening",
    "Animals",
    "Photography",
    "Teaching",
    "Exercise",
    "Coding",
    "Electricity Components",
    "Mechanic Parts",
    "Computer Parts",
    "Researching",
    "Architecture",
    "Historic Collection",
    "Botany",
    "Zoology",
    "Physics",
    "Accounting",
    "Economics",
    "Sociology",
    "Geography",
    "Psycology",
    "History",
    "Science",
    "Bussiness Education",
    "Chemistry",
    "Mathematics",
    "Biology",
    "Makeup",
    "Designing",
    "Content writing",
    "Crafting",
    "Literature",
    "Reading",
    "Cartooning",
    "Debating",
    "Asrtology",
    "Hindi",
    "French",
    "English",
    "Urdu",
    "Other Language",
    "Solving Puzzles",
    "Gymnastics",
    "Yoga",
    "Engeeniering",
    "Doctor",
    "Pharmisist",
    "Cycling",
    "Knitting",
    "Director",
    "Journalism",
    "Bussiness",
    "Listening Music",
];

/// Thematic tab grouping an ordered subset of indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestGroup {
    /// Tab title.
    pub title: &'static str,
    /// Indicator names shown in this tab, in display order.
    pub members: &'static [&'static str],
}

/// Tabs shown in the form. Every indicator belongs to exactly one group.
pub const INTEREST_GROUPS: &[InterestGroup] = &[
    InterestGroup {
        title: "Arts & Creativity",
        members: &[
            "Drawing",
            "Dancing",
            "Singing",
            "Acting",
            "Photography",
            "Makeup",
            "Designing",
            "Crafting",
            "Cartooning",
            "Knitting",
            "Listening Music",
        ],
    },
    InterestGroup {
        title: "Technology & Engineering",
        members: &[
            "Video Game",
            "Coding",
            "Computer Parts",
            "Electricity Components",
            "Mechanic Parts",
            "Engeeniering",
        ],
    },
    InterestGroup {
        title: "Sciences",
        members: &[
            "Physics",
            "Chemistry",
            "Biology",
            "Mathematics",
            "Botany",
            "Zoology",
            "Science",
        ],
    },
    InterestGroup {
        title: "Medicine & Health",
        members: &["Doctor", "Pharmisist"],
    },
    InterestGroup {
        title: "Humanities",
        members: &[
            "History",
            "Literature",
            "Geography",
            "Sociology",
            "Psycology",
            "Historic Collection",
        ],
    },
    InterestGroup {
        title: "Languages",
        members: &["Hindi", "French", "English", "Urdu", "Other Language"],
    },
    InterestGroup {
        title: "Business & Economics",
        members: &["Accounting", "Economics", "Bussiness Education", "Bussiness"],
    },
    InterestGroup {
        title: "Physical Activities",
        members: &["Sports", "Exercise", "Gymnastics", "Yoga", "Cycling"],
    },
    InterestGroup {
        title: "Professional Skills",
        members: &[
            "Teaching",
            "Researching",
            "Architecture",
            "Content writing",
            "Director",
            "Journalism",
            "Debating",
        ],
    },
    InterestGroup {
        title: "Hobbies & Interests",
        members: &[
            "Travelling",
            "Gardening",
            "Animals",
            "Reading",
            "Asrtology",
            "Solving Puzzles",
        ],
    },
];

/// Return the canonical slot of an indicator name.
pub fn interest_index(name: &str) -> Option<usize> {
    INTEREST_NAMES.iter().position(|candidate| *candidate == name)
}

/// Current on/off state of every interest indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestSelection {
    active: [bool; INTEREST_COUNT],
}

impl Default for InterestSelection {
    fn default() -> Self {
        Self {
            active: [false; INTEREST_COUNT],
        }
    }
}

impl InterestSelection {
    /// Selection with every indicator turned off.
    pub fn none() -> Self {
        Self::default()
    }

    /// Selection with exactly the named indicators active. Unknown names are ignored.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut selection = Self::default();
        for name in names {
            selection.set_by_name(name, true);
        }
        selection
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    /// Set an indicator by canonical index; out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, active: bool) {
        if let Some(slot) = self.active.get_mut(index) {
            *slot = active;
        }
    }

    /// Set an indicator by name, returning `false` when the name is not an indicator.
    pub fn set_by_name(&mut self, name: &str, active: bool) -> bool {
        match interest_index(name) {
            Some(index) => {
                self.active[index] = active;
                true
            }
            None => false,
        }
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(slot) = self.active.get_mut(index) {
            *slot = !*slot;
        }
    }

    pub fn select_all(&mut self) {
        self.active = [true; INTEREST_COUNT];
    }

    pub fn clear_all(&mut self) {
        self.active = [false; INTEREST_COUNT];
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|active| **active).count()
    }

    /// Names of the active indicators in canonical order.
    pub fn active_names(&self) -> Vec<&'static str> {
        INTEREST_NAMES
            .iter()
            .zip(self.active.iter())
            .filter(|(_, active)| **active)
            .map(|(name, _)| *name)
            .collect()
    }
}

/// Ordered numeric encoding of one selection; one slot per indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f32>,
}

impl FeatureVector {
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Encode a selection as `1.0` for active indicators and `0.0` otherwise.
pub fn encode(selection: &InterestSelection) -> FeatureVector {
    FeatureVector {
        values: selection
            .active
            .iter()
            .map(|active| if *active { 1.0 } else { 0.0 })
            .collect(),
    }
}

use super::*;
use crate::interests::INTEREST_NAMES;
use std::path::PathBuf;
use tempfile::TempDir;

/// Small training table where each course is picked by exactly one interest.
pub(super) const PATTERNS: [(&str, &str); 3] = [
    ("Coding", "BCA- Bachelor of Computer Applications"),
    ("Doctor", "MBBS"),
    ("Singing", "Diploma in Dramatic Arts"),
];

pub(super) fn write_training_csv(dir: &Path, name: &str, with_label: bool) -> PathBuf {
    let mut text = INTEREST_NAMES.join(",");
    if with_label {
        text.push_str(",Courses");
    }
    text.push('\n');
    for _ in 0..5 {
        for (interest, course) in PATTERNS {
            let row: Vec<&str> = INTEREST_NAMES
                .iter()
                .map(|name| if *name == interest { "1" } else { "0" })
                .collect();
            text.push_str(&row.join(","));
            if with_label {
                text.push(',');
                text.push_str(course);
            }
            text.push('\n');
        }
    }
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

/// Controller rooted in a fresh working directory with a small forest.
pub(super) fn controller_in_tempdir() -> (EguiController, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = AppConfig::default();
    cfg.training.n_trees = 8;
    let controller = EguiController::new(&cfg, dir.path());
    (controller, dir)
}

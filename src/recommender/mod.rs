//! UI-independent course recommendation core.
//!
//! Every operation takes the active-model holder explicitly. [`Recommender`] bundles
//! the holder with its file locations and training options for callers that want a
//! single owner.

mod inference;
mod model;
mod slot;
mod startup;
mod training;

pub use inference::{Recommendation, RecommendError, recommend};
pub use model::{CourseModel, MODEL_VERSION, ModelLoadError, ModelSaveError};
pub use slot::{ModelSlot, ModelStatus};
pub use startup::{ModelPaths, StartupOutcome, resolve_startup};
pub use training::{TrainingError, TrainingReport, fit_course_model, train_from_csv};

use std::path::Path;

use crate::interests::InterestSelection;
use crate::ml::forest::ForestOptions;

/// Owns the active model plus the settings the workflows need.
#[derive(Debug)]
pub struct Recommender {
    slot: ModelSlot<CourseModel>,
    paths: ModelPaths,
    options: ForestOptions,
}

impl Recommender {
    pub fn new(paths: ModelPaths, options: ForestOptions) -> Self {
        Self {
            slot: ModelSlot::empty(),
            paths,
            options,
        }
    }

    pub fn status(&self) -> ModelStatus {
        self.slot.status()
    }

    pub fn model(&self) -> Option<&CourseModel> {
        self.slot.get()
    }

    pub fn resolve_startup(&mut self) -> StartupOutcome {
        resolve_startup(&mut self.slot, &self.paths, &self.options)
    }

    /// Train from a user-chosen file and persist to the configured model path.
    pub fn train_from_csv(&mut self, csv_path: &Path) -> Result<TrainingReport, TrainingError> {
        train_from_csv(&mut self.slot, csv_path, &self.paths.model_file, &self.options)
    }

    pub fn recommend(
        &self,
        selection: &InterestSelection,
    ) -> Result<Recommendation, RecommendError> {
        recommend(&self.slot, selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interests::{INTEREST_NAMES, InterestSelection};
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    const COURSES: [(&str, &str); 4] = [
        ("Coding", "B.Tech.-Computer Science and Engineering"),
        ("Doctor", "MBBS"),
        ("Accounting", "CA- Chartered Accountancy"),
        ("Drawing", "BVA- Bachelor of Visual Arts"),
    ];

    fn write_training_csv(dir: &Path, name: &str, with_label: bool) -> PathBuf {
        let mut text = INTEREST_NAMES.join(",");
        if with_label {
            text.push_str(",Courses");
        }
        text.push('\n');
        for _ in 0..6 {
            for (interest, course) in COURSES {
                let cells: Vec<&str> = INTEREST_NAMES
                    .iter()
                    .map(|name| if *name == interest { "1" } else { "0" })
                    .collect();
                text.push_str(&cells.join(","));
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

    fn recommender_in(dir: &TempDir) -> Recommender {
        let paths = ModelPaths::anchored(
            dir.path(),
            Path::new("course_model.json"),
            Path::new("stud.csv"),
        );
        let options = ForestOptions {
            n_trees: 10,
            ..ForestOptions::default()
        };
        Recommender::new(paths, options)
    }

    #[test]
    fn startup_without_files_has_no_model() {
        let dir = tempdir().unwrap();
        let mut recommender = recommender_in(&dir);
        let outcome = recommender.resolve_startup();
        match outcome {
            StartupOutcome::NoModel {
                load_error,
                train_error,
            } => {
                assert!(load_error.is_missing());
                assert!(train_error.is_none());
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(recommender.status(), ModelStatus::NoModel);
        assert_eq!(
            recommender.recommend(&InterestSelection::none()),
            Err(RecommendError::ModelUnavailable)
        );
    }

    #[test]
    fn startup_trains_from_default_csv_and_persists() {
        let dir = tempdir().unwrap();
        write_training_csv(dir.path(), "stud.csv", true);
        let mut recommender = recommender_in(&dir);
        let outcome = recommender.resolve_startup();
        assert!(matches!(outcome, StartupOutcome::TrainedFromDefault { .. }));
        assert_eq!(recommender.status(), ModelStatus::Loaded);
        assert!(dir.path().join("course_model.json").is_file());

        let rec = recommender
            .recommend(&InterestSelection::from_names(["Doctor"]))
            .unwrap();
        assert_eq!(rec.course, "MBBS");
    }

    #[test]
    fn startup_prefers_saved_model() {
        let dir = tempdir().unwrap();
        let csv = write_training_csv(dir.path(), "history.csv", true);
        let mut first = recommender_in(&dir);
        first.train_from_csv(&csv).unwrap();

        let mut second = recommender_in(&dir);
        let outcome = second.resolve_startup();
        assert!(matches!(outcome, StartupOutcome::LoadedFromDisk { .. }));
        assert_eq!(second.model(), first.model());
    }

    #[test]
    fn broken_default_csv_reports_both_failures() {
        let dir = tempdir().unwrap();
        write_training_csv(dir.path(), "stud.csv", false);
        std::fs::write(dir.path().join("course_model.json"), b"not json").unwrap();
        let mut recommender = recommender_in(&dir);
        match recommender.resolve_startup() {
            StartupOutcome::NoModel {
                load_error,
                train_error,
            } => {
                assert!(matches!(load_error, ModelLoadError::Parse { .. }));
                assert!(matches!(train_error, Some(TrainingError::Data(_))));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(recommender.status(), ModelStatus::NoModel);
    }

    #[test]
    fn failed_training_keeps_previous_model() {
        let dir = tempdir().unwrap();
        let good = write_training_csv(dir.path(), "good.csv", true);
        let bad = write_training_csv(dir.path(), "bad.csv", false);
        let mut recommender = recommender_in(&dir);
        recommender.train_from_csv(&good).unwrap();
        let before = recommender.model().cloned();
        let selection = InterestSelection::from_names(["Coding"]);
        let expected = recommender.recommend(&selection).unwrap();

        let err = recommender.train_from_csv(&bad).unwrap_err();
        assert!(err.to_string().contains("Courses"));
        assert_eq!(recommender.model().cloned(), before);
        assert_eq!(recommender.recommend(&selection).unwrap(), expected);
    }

    #[test]
    fn failed_save_keeps_previous_model() {
        let dir = tempdir().unwrap();
        let good = write_training_csv(dir.path(), "good.csv", true);
        let mut recommender = recommender_in(&dir);
        recommender.train_from_csv(&good).unwrap();
        let before = recommender.model().cloned();
        let selection = InterestSelection::from_names(["Doctor"]);
        let expected = recommender.recommend(&selection).unwrap();

        let occupied = dir.path().join("occupied");
        std::fs::create_dir(&occupied).unwrap();
        recommender.paths.model_file = occupied.clone();
        let err = recommender.train_from_csv(&good).unwrap_err();
        assert!(matches!(err, TrainingError::Persist(_)));
        assert_eq!(recommender.model().cloned(), before);
        assert_eq!(recommender.recommend(&selection).unwrap(), expected);
        assert!(occupied.is_dir());
        assert!(!dir.path().join("occupied.tmp").exists());
    }

    #[test]
    fn interrupted_save_leaves_existing_file_intact() {
        let dir = tempdir().unwrap();
        let csv = write_training_csv(dir.path(), "stud.csv", true);
        let mut recommender = recommender_in(&dir);
        recommender.train_from_csv(&csv).unwrap();
        let path = dir.path().join("course_model.json");
        let on_disk = std::fs::read(&path).unwrap();

        // A directory in the way of the temporary file makes the write fail.
        std::fs::create_dir(dir.path().join("course_model.tmp")).unwrap();
        let model = recommender.model().cloned().unwrap();
        assert!(matches!(
            model.save_json(&path),
            Err(ModelSaveError::Write { .. })
        ));
        assert_eq!(std::fs::read(&path).unwrap(), on_disk);
        assert_eq!(CourseModel::load_json(&path).unwrap(), model);
    }

    #[test]
    fn repeated_predictions_are_identical() {
        let dir = tempdir().unwrap();
        let csv = write_training_csv(dir.path(), "stud.csv", true);
        let mut recommender = recommender_in(&dir);
        let report = recommender.train_from_csv(&csv).unwrap();
        assert_eq!(report.rows, 24);
        assert_eq!(report.classes, 4);
        let selection = InterestSelection::from_names(["Accounting", "Drawing"]);
        let a = recommender.recommend(&selection).unwrap();
        let b = recommender.recommend(&selection).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn stale_feature_list_is_rejected_on_load() {
        let dir = tempdir().unwrap();
        let csv = write_training_csv(dir.path(), "stud.csv", true);
        let mut recommender = recommender_in(&dir);
        recommender.train_from_csv(&csv).unwrap();
        let mut model = recommender.model().cloned().unwrap();
        model.features.swap(0, 1);
        let path = dir.path().join("stale.json");
        model.save_json(&path).unwrap();
        assert!(matches!(
            CourseModel::load_json(&path),
            Err(ModelLoadError::Invalid { .. })
        ));
    }

    #[test]
    fn fitted_labels_are_reported_against_catalog() {
        let dir = tempdir().unwrap();
        let csv = write_training_csv(dir.path(), "stud.csv", true);
        let mut recommender = recommender_in(&dir);
        let report = recommender.train_from_csv(&csv).unwrap();
        assert_eq!(
            recommender.model().unwrap().classes,
            vec![
                "B.Tech.-Computer Science and Engineering",
                "BVA- Bachelor of Visual Arts",
                "CA- Chartered Accountancy",
                "MBBS",
            ]
        );
        assert_eq!(report.catalog_drift.len(), 4);
    }
}

use super::test_support::{controller_in_tempdir, write_training_csv};
use super::*;
use crate::interests::{INTEREST_COUNT, interest_index};

#[test]
fn startup_without_model_warns_and_disables_predictions() {
    let (mut controller, _dir) = controller_in_tempdir();
    controller.resolve_startup_model();
    assert_eq!(controller.model_status(), ModelStatus::NoModel);
    let notice = controller.ui.notice.clone().expect("notice shown");
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(notice.title, "Model Not Found");
    assert_eq!(controller.ui.status.tone, StatusTone::Warning);

    controller.dismiss_notice();
    controller.request_recommendation();
    let notice = controller.ui.notice.clone().expect("error shown");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Please load data and train the model first!");
    assert_eq!(controller.ui.result.course, None);
}

#[test]
fn startup_trains_from_default_file() {
    let (mut controller, dir) = controller_in_tempdir();
    write_training_csv(dir.path(), "stud.csv", true);
    controller.resolve_startup_model();
    assert_eq!(controller.model_status(), ModelStatus::Loaded);
    assert_eq!(controller.ui.training.model_status, ModelStatus::Loaded);
    let notice = controller.ui.notice.clone().expect("notice shown");
    assert_eq!(notice.message, "Model trained automatically with stud.csv!");
    let summary = controller.ui.training.summary.clone().expect("summary");
    assert_eq!(summary.rows, 15);
    assert_eq!(summary.courses, 3);
}

#[test]
fn recommendation_fills_result_text() {
    let (mut controller, dir) = controller_in_tempdir();
    let csv = write_training_csv(dir.path(), "data.csv", true);
    controller.train_from_path(&csv);
    assert_eq!(controller.model_status(), ModelStatus::Loaded);
    assert_eq!(
        controller.ui.notice.as_ref().map(|n| n.message.as_str()),
        Some("Model trained and saved successfully!")
    );
    controller.dismiss_notice();

    let doctor = interest_index("Doctor").unwrap();
    controller.set_interest(doctor, true);
    controller.request_recommendation();
    assert_eq!(controller.ui.result.course.as_deref(), Some("MBBS"));
    assert_eq!(
        controller.ui.result.text,
        "Based on your interests, we recommend:\n\nMBBS"
    );
    assert!(controller.ui.notice.is_none());
}

#[test]
fn failed_training_reports_error_and_keeps_model() {
    let (mut controller, dir) = controller_in_tempdir();
    let good = write_training_csv(dir.path(), "good.csv", true);
    let bad = write_training_csv(dir.path(), "bad.csv", false);
    controller.train_from_path(&good);
    controller.dismiss_notice();

    controller.train_from_path(&bad);
    assert_eq!(controller.model_status(), ModelStatus::Loaded);
    let notice = controller.ui.notice.clone().expect("error shown");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.starts_with("An error occurred: "));
    assert!(notice.message.contains("Courses"));
    assert_eq!(controller.ui.status.tone, StatusTone::Error);

    controller.dismiss_notice();
    controller.set_interest(interest_index("Coding").unwrap(), true);
    controller.request_recommendation();
    assert_eq!(
        controller.ui.result.course.as_deref(),
        Some("BCA- Bachelor of Computer Applications")
    );
}

#[test]
fn bulk_actions_cover_every_indicator() {
    let (mut controller, _dir) = controller_in_tempdir();
    controller.select_all();
    assert_eq!(controller.ui.form.selection.active_count(), INTEREST_COUNT);
    controller.clear_all();
    assert_eq!(controller.ui.form.selection.active_count(), 0);
    controller.toggle_interest(4);
    assert_eq!(controller.ui.form.selection.active_names(), vec!["Video Game"]);
}

#[test]
fn about_dialog_opens_and_closes() {
    let (mut controller, _dir) = controller_in_tempdir();
    controller.show_about();
    assert!(controller.ui.about_open);
    controller.close_about();
    assert!(!controller.ui.about_open);
    assert!(ABOUT_TEXT.ends_with("Version 2.0"));
}

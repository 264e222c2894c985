//! Library exports for reuse in benchmarks and tests.
/// Application directory resolution.
pub mod app_dirs;
/// Persisted user settings.
pub mod config;
/// Course catalog.
pub mod courses;
/// Training CSV loading and label encoding.
pub mod dataset;
/// egui front end.
pub mod egui_app;
/// Interest indicators and feature encoding.
pub mod interests;
/// Tracing setup.
pub mod logging;
/// Random forest classifier.
pub mod ml;
/// Training, persistence, and inference around the active model.
pub mod recommender;

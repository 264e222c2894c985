//! egui front end: UI state, the controller that drives the recommender, and the renderer.

pub mod controller;
pub mod state;
pub mod ui;

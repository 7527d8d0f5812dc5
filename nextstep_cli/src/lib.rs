//! Terminal front end for the nextstep career path recommender.

pub mod ask;
pub mod components;
pub mod keymap;
pub mod logging;
pub mod report;
pub mod screens;
pub mod ui;

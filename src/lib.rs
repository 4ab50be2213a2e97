pub mod cli;
pub mod config;
pub mod controller;
pub mod generation;
pub mod logging;
pub mod model;
pub mod share;
pub mod storage;
pub mod ui;

pub mod app_config;
pub mod console;
pub mod domain;
pub mod game;
pub mod geo;
pub mod point_loader;
pub mod position;
pub mod presentation;
pub mod progress;
pub mod proximity;
pub mod quiz;
pub mod runner;
pub mod target_resolver;

#[cfg(test)]
pub(crate) mod fixtures;

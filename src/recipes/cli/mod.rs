mod browse;
mod commands;
mod prompt;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;

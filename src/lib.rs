pub mod args;
pub mod cell;
pub mod display;
pub mod input;
pub mod pace;
pub mod pattern;
pub mod sim;
pub mod world;

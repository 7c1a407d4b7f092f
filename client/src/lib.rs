pub use sketch;

mod bridge;
mod demos;
mod render;
mod start;

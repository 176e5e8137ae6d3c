pub mod adapters;
pub mod core;
pub mod global_constants;

#[cfg(test)]
mod frame_capture_tests;

//! Core application setup and state management.

/// App construction: plugins, resources, and the state-gated schedule.
pub mod app_setup;

/// Application state machine and loading transition.
pub mod app_state;

/// Window title and vsync configuration.
pub mod window_config;

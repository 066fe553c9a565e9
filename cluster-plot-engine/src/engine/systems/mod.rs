//! Runtime systems driving the plot each frame.

/// FPS overlay text updates from the frame-time diagnostics.
pub mod fps_tracking;

/// Strategy teardown and activation when the requested mode changes.
pub mod mode_switch;

/// Per-frame proximity scan, override object lifecycle, batch rebuilds.
pub mod proximity;

/// Render mode cycling on the configured toggle key.
pub mod render_mode;

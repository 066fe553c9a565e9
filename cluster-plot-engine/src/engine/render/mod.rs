//! Custom rendering plumbing for the instanced billboard path.

/// Per-instance buffer upload, specialized mesh pipeline, and draw command
/// for bounded billboard batches.
pub mod billboard_render_plugin;

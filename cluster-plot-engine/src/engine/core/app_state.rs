use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

/// Settings and point data load once, synchronously, before any runtime
/// system executes; mode switches are impossible until `Running`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

pub fn transition_to_running(
    progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if progress.dataset_loaded {
        info!("Dataset ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

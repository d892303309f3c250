//! Native bevy_ui overlay for the portfolio scene.
//!
//! In the browser the host page renders the section modal, tooltips and the
//! WIP banner in the DOM from RPC notifications. Native runs have no page, so
//! this module draws the same pieces with bevy_ui:
//!
//! - Section modal with title, body and an optional word cloud
//! - Achievement tooltip that follows the cursor over word-cloud entries
//! - Dismissible work-in-progress banner
//! - FPS counter

/// Button handlers for the close, dismiss and word-cloud buttons.
pub mod interactions;

/// Marker components, colours and the hovered-word resource.
pub mod state;

/// Overlay spawning plus systems that mirror section and notice state into the UI.
pub mod ui;

use bevy::prelude::*;
use state::HoveredWord;

use crate::engine::systems::fps_tracking::fps_text_update_system;
use interactions::{close_button_interaction, wip_dismiss_button_interaction, word_button_interaction};
use ui::{reflect_tooltip, reflect_wip_notice, spawn_overlay, sync_modal_with_sections};

// Registers the hovered-word resource and the overlay UI systems.
pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoveredWord>()
            .add_systems(Startup, spawn_overlay)
            .add_systems(
                Update,
                (
                    close_button_interaction,
                    wip_dismiss_button_interaction,
                    word_button_interaction,
                    sync_modal_with_sections,
                    reflect_tooltip,
                    reflect_wip_notice,
                    fps_text_update_system,
                )
                    .chain(),
            );
    }
}

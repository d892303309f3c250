use crate::engine::assets::scene_settings::SceneSettings;
use bevy::prelude::*;

/// "Work in progress" banner shown once the scene is running.
#[derive(Resource, Default, Debug)]
pub struct WipNotice {
    pub visible: bool,
}

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct DismissWipNotice;

pub fn show_wip_notice(settings: Res<SceneSettings>, mut notice: ResMut<WipNotice>) {
    if settings.show_wip_notice {
        info!("Showing work-in-progress notice");
        notice.visible = true;
    }
}

pub fn dismiss_wip_notice(mut dismissals: EventReader<DismissWipNotice>, mut notice: ResMut<WipNotice>) {
    if dismissals.read().count() == 0 || !notice.visible {
        return;
    }
    info!("Work-in-progress notice dismissed");
    notice.visible = false;
}

use super::state::*;
use crate::interaction::notice::DismissWipNotice;
use crate::interaction::section::{CloseSectionRequest, SectionRequestSource};
use bevy::prelude::*;

fn paint(interaction: Interaction, bg: &mut BackgroundColor) {
    *bg = BackgroundColor(match interaction {
        Interaction::Pressed => BUTTON_PRESSED_COLOUR,
        Interaction::Hovered => BUTTON_HOVER_COLOUR,
        Interaction::None => BUTTON_COLOUR,
    });
}

// Close button hides the modal and flies the camera home
pub fn close_button_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>, With<CloseButton>)>,
    mut requests: EventWriter<CloseSectionRequest>,
) {
    for (interaction, mut bg) in &mut q {
        if *interaction == Interaction::Pressed {
            requests.write(CloseSectionRequest {
                source: SectionRequestSource::Overlay,
            });
        }
        paint(*interaction, &mut bg);
    }
}

pub fn wip_dismiss_button_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>, With<WipDismissButton>)>,
    mut dismissals: EventWriter<DismissWipNotice>,
) {
    for (interaction, mut bg) in &mut q {
        if *interaction == Interaction::Pressed {
            dismissals.write(DismissWipNotice);
        }
        paint(*interaction, &mut bg);
    }
}

// Word-cloud buttons drive the tooltip through HoveredWord
pub fn word_button_interaction(
    mut q: Query<(&Interaction, &WordButton, &mut BackgroundColor), Changed<Interaction>>,
    mut hovered: ResMut<HoveredWord>,
) {
    for (interaction, button, mut bg) in &mut q {
        match *interaction {
            Interaction::Hovered | Interaction::Pressed => {
                hovered.0 = Some(button.word.clone());
            }
            Interaction::None => {
                if hovered.0.as_deref() == Some(button.word.as_str()) {
                    hovered.0 = None;
                }
            }
        }
        paint(*interaction, &mut bg);
    }
}

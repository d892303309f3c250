use bevy::prelude::*;

// Resources
/// Word-cloud entry under the pointer, if any.
#[derive(Resource, Default, Debug, PartialEq)]
pub struct HoveredWord(pub Option<String>);

// Components
#[derive(Component)]
pub struct OverlayRoot;
#[derive(Component)]
pub struct FpsText;
#[derive(Component)]
pub struct ModalPanel;
#[derive(Component)]
pub struct ModalTitle;
#[derive(Component)]
pub struct ModalBody;
#[derive(Component)]
pub struct WordCloud;
#[derive(Component)]
pub struct CloseButton;
#[derive(Component)]
pub struct TooltipPanel;
#[derive(Component)]
pub struct TooltipText;
#[derive(Component)]
pub struct WipBanner;
#[derive(Component)]
pub struct WipDismissButton;

#[derive(Component, Debug, Clone)]
pub struct WordButton {
    pub word: String,
}

pub const PANEL_COLOUR: Color = Color::srgba(0.08, 0.08, 0.10, 0.92);
pub const BUTTON_COLOUR: Color = Color::srgb(0.22, 0.24, 0.28);
pub const BUTTON_HOVER_COLOUR: Color = Color::srgb(0.26, 0.28, 0.32);
pub const BUTTON_PRESSED_COLOUR: Color = Color::srgb(0.18, 0.20, 0.24);
pub const TEXT_COLOUR: Color = Color::WHITE;
pub const ACCENT_COLOUR: Color = Color::srgb(1.0, 1.0, 0.0);

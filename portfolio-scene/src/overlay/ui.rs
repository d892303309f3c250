use super::state::*;
use crate::engine::assets::portfolio_manifest::{PortfolioManifest, SectionContent};
use crate::interaction::notice::WipNotice;
use crate::interaction::pointer::PointerState;
use crate::interaction::section::SectionEvent;
use bevy::prelude::*;

const TOOLTIP_OFFSET: Vec2 = Vec2::new(16.0, 16.0);

// Spawns the overlay: FPS counter, section modal, tooltip and WIP banner.
pub fn spawn_overlay(mut commands: Commands) {
    commands
        .spawn((
            OverlayRoot,
            Name::new("Overlay"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                FpsText,
                Text::new("FPS: "),
                TextFont { font_size: 16.0, ..default() },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
            ));

            spawn_modal(parent);
            spawn_tooltip(parent);
            spawn_wip_banner(parent);
        });
}

fn spawn_modal(parent: &mut ChildSpawnerCommands) {
    parent
        .spawn((
            ModalPanel,
            Name::new("SectionModal"),
            BackgroundColor(PANEL_COLOUR),
            BorderColor(ACCENT_COLOUR),
            Node {
                width: Val::Percent(40.0),
                min_width: Val::Px(320.0),
                max_height: Val::Percent(80.0),
                position_type: PositionType::Absolute,
                left: Val::Percent(5.0),
                top: Val::Percent(10.0),
                padding: UiRect::all(Val::Px(16.0)),
                row_gap: Val::Px(12.0),
                border: UiRect::all(Val::Px(1.0)),
                display: Display::None,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::clip_y(),
                ..default()
            },
        ))
        .with_children(|modal| {
            modal
                .spawn(Node {
                    width: Val::Percent(100.0),
                    display: Display::Flex,
                    align_items: AlignItems::Center,
                    justify_content: JustifyContent::SpaceBetween,
                    ..default()
                })
                .with_children(|header| {
                    header.spawn((
                        ModalTitle,
                        Text::new(""),
                        TextFont { font_size: 24.0, ..default() },
                        TextColor(ACCENT_COLOUR),
                    ));
                    header
                        .spawn((
                            CloseButton,
                            Button,
                            Name::new("CloseButton"),
                            BackgroundColor(BUTTON_COLOUR),
                            Node {
                                width: Val::Px(28.0),
                                height: Val::Px(28.0),
                                display: Display::Flex,
                                align_items: AlignItems::Center,
                                justify_content: JustifyContent::Center,
                                ..default()
                            },
                        ))
                        .with_children(|btn| {
                            btn.spawn((
                                Text::new("x"),
                                TextFont { font_size: 18.0, ..default() },
                                TextColor(TEXT_COLOUR),
                            ));
                        });
                });

            modal.spawn((
                ModalBody,
                Text::new(""),
                TextFont { font_size: 16.0, ..default() },
                TextColor(TEXT_COLOUR),
            ));

            modal.spawn((
                WordCloud,
                Name::new("WordCloud"),
                Node {
                    width: Val::Percent(100.0),
                    display: Display::Flex,
                    flex_wrap: FlexWrap::Wrap,
                    row_gap: Val::Px(8.0),
                    column_gap: Val::Px(8.0),
                    ..default()
                },
            ));
        });
}

fn spawn_tooltip(parent: &mut ChildSpawnerCommands) {
    parent
        .spawn((
            TooltipPanel,
            Name::new("Tooltip"),
            BackgroundColor(PANEL_COLOUR),
            Node {
                max_width: Val::Px(280.0),
                position_type: PositionType::Absolute,
                padding: UiRect::all(Val::Px(8.0)),
                display: Display::None,
                ..default()
            },
            GlobalZIndex(10),
        ))
        .with_children(|tooltip| {
            tooltip.spawn((
                TooltipText,
                Text::new(""),
                TextFont { font_size: 14.0, ..default() },
                TextColor(TEXT_COLOUR),
            ));
        });
}

fn spawn_wip_banner(parent: &mut ChildSpawnerCommands) {
    parent
        .spawn((
            WipBanner,
            Name::new("WipBanner"),
            BackgroundColor(PANEL_COLOUR),
            BorderColor(ACCENT_COLOUR),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                right: Val::Px(12.0),
                padding: UiRect::all(Val::Px(12.0)),
                column_gap: Val::Px(12.0),
                border: UiRect::all(Val::Px(1.0)),
                display: Display::None,
                align_items: AlignItems::Center,
                ..default()
            },
        ))
        .with_children(|banner| {
            banner.spawn((
                Text::new("This site is a work in progress."),
                TextFont { font_size: 16.0, ..default() },
                TextColor(TEXT_COLOUR),
            ));
            banner
                .spawn((
                    WipDismissButton,
                    Button,
                    Name::new("WipDismissButton"),
                    BackgroundColor(BUTTON_COLOUR),
                    Node {
                        padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                        ..default()
                    },
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new("OK"),
                        TextFont { font_size: 16.0, ..default() },
                        TextColor(TEXT_COLOUR),
                    ));
                });
        });
}

/// Fill and show the modal when a section opens, hide it when it closes.
pub fn sync_modal_with_sections(
    mut commands: Commands,
    mut section_events: EventReader<SectionEvent>,
    mut modal: Query<&mut Node, With<ModalPanel>>,
    mut title: Query<&mut Text, (With<ModalTitle>, Without<ModalBody>)>,
    mut body: Query<&mut Text, (With<ModalBody>, Without<ModalTitle>)>,
    cloud: Query<Entity, With<WordCloud>>,
    words: Query<Entity, With<WordButton>>,
    mut hovered: ResMut<HoveredWord>,
) {
    for event in section_events.read() {
        for entity in &words {
            commands.entity(entity).despawn();
        }
        hovered.0 = None;

        let display = match event {
            SectionEvent::Opened(section) => {
                if let Ok(mut text) = title.single_mut() {
                    text.0 = section.title.clone();
                }
                if let Ok(mut text) = body.single_mut() {
                    text.0 = section.body.clone();
                }
                if let Ok(cloud) = cloud.single() {
                    spawn_word_buttons(&mut commands, cloud, section);
                }
                Display::Flex
            }
            SectionEvent::Closed { .. } => Display::None,
        };

        for mut node in &mut modal {
            node.display = display;
        }
    }
}

fn spawn_word_buttons(commands: &mut Commands, cloud: Entity, section: &SectionContent) {
    commands.entity(cloud).with_children(|cloud| {
        for word in &section.words {
            cloud
                .spawn((
                    WordButton { word: word.clone() },
                    Button,
                    BackgroundColor(BUTTON_COLOUR),
                    Node {
                        padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                        ..default()
                    },
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new(word.clone()),
                        TextFont { font_size: 16.0, ..default() },
                        TextColor(ACCENT_COLOUR),
                    ));
                });
        }
    });
}

/// Tooltip copy for a word-cloud entry. Words without an achievement get none.
pub fn tooltip_text(manifest: &PortfolioManifest, word: &str) -> Option<String> {
    let achievement = manifest.achievement(word)?;
    Some(match &achievement.img {
        Some(img) => format!("{}\n[{}]", achievement.desc, img),
        None => achievement.desc.clone(),
    })
}

/// Show the tooltip next to the cursor while a word with an achievement is hovered.
pub fn reflect_tooltip(
    hovered: Res<HoveredWord>,
    pointer: Res<PointerState>,
    manifest: Option<Res<PortfolioManifest>>,
    mut panel: Query<&mut Node, With<TooltipPanel>>,
    mut text: Query<&mut Text, With<TooltipText>>,
) {
    let Ok(mut node) = panel.single_mut() else {
        return;
    };

    let copy = hovered
        .0
        .as_deref()
        .zip(manifest.as_deref())
        .and_then(|(word, manifest)| tooltip_text(manifest, word));

    let Some(copy) = copy else {
        node.display = Display::None;
        return;
    };

    if hovered.is_changed() {
        if let Ok(mut text) = text.single_mut() {
            text.0 = copy;
        }
    }

    let anchor = pointer.cursor.unwrap_or_default() + TOOLTIP_OFFSET;
    node.left = Val::Px(anchor.x);
    node.top = Val::Px(anchor.y);
    node.display = Display::Flex;
}

pub fn reflect_wip_notice(notice: Res<WipNotice>, mut banner: Query<&mut Node, With<WipBanner>>) {
    if !notice.is_changed() {
        return;
    }
    for mut node in &mut banner {
        node.display = if notice.visible { Display::Flex } else { Display::None };
    }
}

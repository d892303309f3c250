use crate::engine::assets::portfolio_manifest::{PortfolioManifest, SectionContent};
use crate::engine::assets::scene_settings::SceneSettings;
use crate::engine::camera::camera_flight::{CameraFlight, Flight};
use crate::engine::scene::markers::FormationMarker;
use crate::interaction::pointer::PointerHit;
use bevy::prelude::*;

/// Where an open or close request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionRequestSource {
    Pointer,
    Keyboard,
    Overlay,
    Rpc,
}

/// The section whose overlay is currently shown.
#[derive(Resource, Default, Debug)]
pub struct OpenSection {
    pub current: Option<SectionContent>,
}

impl OpenSection {
    pub fn id(&self) -> Option<&str> {
        self.current.as_ref().map(|section| section.id.as_str())
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

#[derive(Event, Debug, Clone)]
pub struct OpenSectionRequest {
    pub section_id: String,
    pub source: SectionRequestSource,
}

#[derive(Event, Debug, Clone)]
pub struct CloseSectionRequest {
    pub source: SectionRequestSource,
}

/// Emitted after the open section changes, for the overlay and the web bridge.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum SectionEvent {
    Opened(SectionContent),
    Closed { section_id: String },
}

/// Turn a left click on a hovered formation marker into an open request.
/// Clicks are ignored while a section is open or the camera is flying.
pub fn select_marker_on_click(
    mouse_button: Res<ButtonInput<MouseButton>>,
    hit: Res<PointerHit>,
    open: Res<OpenSection>,
    flight: Res<CameraFlight>,
    mut requests: EventWriter<OpenSectionRequest>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) || open.is_open() || flight.is_active() {
        return;
    }

    if let Some(hit) = &hit.0 {
        requests.write(OpenSectionRequest {
            section_id: hit.section_id.clone(),
            source: SectionRequestSource::Pointer,
        });
    }
}

pub fn close_section_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    open: Res<OpenSection>,
    mut requests: EventWriter<CloseSectionRequest>,
) {
    if keyboard.just_pressed(KeyCode::Escape) && open.is_open() {
        requests.write(CloseSectionRequest {
            source: SectionRequestSource::Keyboard,
        });
    }
}

pub fn handle_open_section_requests(
    mut requests: EventReader<OpenSectionRequest>,
    manifest: Res<PortfolioManifest>,
    settings: Res<SceneSettings>,
    markers: Query<(&GlobalTransform, &FormationMarker)>,
    mut open: ResMut<OpenSection>,
    mut flight: ResMut<CameraFlight>,
    mut section_events: EventWriter<SectionEvent>,
) {
    for request in requests.read() {
        if let Some(current) = open.id() {
            debug!(
                "Ignoring open of {} from {:?}, {} is already open",
                request.section_id, request.source, current
            );
            continue;
        }

        let Some((marker_transform, _)) = markers
            .iter()
            .find(|(_, marker)| marker.section_id == request.section_id)
        else {
            warn!("No formation marker for {}", request.section_id);
            continue;
        };

        let content = manifest.section_or_fallback(&request.section_id);
        info!(
            "Opening section {} ({}) from {:?}",
            content.id, content.title, request.source
        );

        flight.start(Flight::to_marker(
            marker_transform.translation(),
            settings.flight_target_offset(),
        ));
        open.current = Some(content.clone());
        section_events.write(SectionEvent::Opened(content));
    }
}

pub fn handle_close_section_requests(
    mut requests: EventReader<CloseSectionRequest>,
    settings: Res<SceneSettings>,
    mut open: ResMut<OpenSection>,
    mut flight: ResMut<CameraFlight>,
    mut section_events: EventWriter<SectionEvent>,
) {
    let Some(request) = requests.read().last() else {
        return;
    };
    let Some(section) = open.current.take() else {
        debug!("Close from {:?} with no section open", request.source);
        return;
    };

    info!("Closing section {} from {:?}", section.id, request.source);
    flight.start(Flight::home(settings.initial_camera_position()));
    section_events.write(SectionEvent::Closed {
        section_id: section.id,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::camera::camera_flight::FlightKind;
    use crate::interaction::pointer::MarkerHit;

    #[derive(Resource, Default)]
    struct SeenSectionEvents(Vec<SectionEvent>);

    fn section_app() -> App {
        let mut app = App::new();
        app.add_event::<OpenSectionRequest>()
            .add_event::<CloseSectionRequest>()
            .add_event::<SectionEvent>()
            .init_resource::<OpenSection>()
            .init_resource::<CameraFlight>()
            .init_resource::<SeenSectionEvents>()
            .insert_resource(SceneSettings::default())
            .insert_resource(PortfolioManifest::default())
            .add_systems(
                Update,
                (
                    handle_open_section_requests,
                    handle_close_section_requests,
                    |mut reader: EventReader<SectionEvent>, mut seen: ResMut<SeenSectionEvents>| {
                        seen.0.extend(reader.read().cloned());
                    },
                )
                    .chain(),
            );
        app.world_mut().spawn((
            GlobalTransform::from(Transform::from_xyz(0.0, 10.0, 0.0)),
            FormationMarker {
                section_id: "section-0".to_string(),
                radius: 0.5,
                length: 1.0,
            },
        ));
        app
    }

    fn open(app: &mut App, id: &str) {
        app.world_mut().send_event(OpenSectionRequest {
            section_id: id.to_string(),
            source: SectionRequestSource::Rpc,
        });
        app.update();
    }

    #[test]
    fn opening_starts_fly_to_marker() {
        let mut app = section_app();
        open(&mut app, "section-0");

        let world = app.world();
        assert_eq!(world.resource::<OpenSection>().id(), Some("section-0"));
        let flight = world.resource::<CameraFlight>().active().copied().unwrap();
        assert_eq!(flight.kind, FlightKind::ToMarker);
        assert_eq!(flight.target, Vec3::new(5.0, 15.0, 5.0));

        let seen = &world.resource::<SeenSectionEvents>().0;
        assert!(matches!(&seen[..], [SectionEvent::Opened(content)] if content.title == "About"));
    }

    #[test]
    fn unknown_marker_is_ignored() {
        let mut app = section_app();
        open(&mut app, "section-9");

        assert!(!app.world().resource::<OpenSection>().is_open());
        assert!(!app.world().resource::<CameraFlight>().is_active());
    }

    #[test]
    fn second_open_is_ignored_while_open() {
        let mut app = section_app();
        app.world_mut().spawn((
            GlobalTransform::default(),
            FormationMarker {
                section_id: "section-1".to_string(),
                radius: 0.5,
                length: 1.0,
            },
        ));
        open(&mut app, "section-0");
        open(&mut app, "section-1");

        assert_eq!(app.world().resource::<OpenSection>().id(), Some("section-0"));
        assert_eq!(app.world().resource::<SeenSectionEvents>().0.len(), 1);
    }

    #[test]
    fn closing_flies_home() {
        let mut app = section_app();
        open(&mut app, "section-0");

        app.world_mut().send_event(CloseSectionRequest {
            source: SectionRequestSource::Overlay,
        });
        app.update();

        let world = app.world();
        assert!(!world.resource::<OpenSection>().is_open());
        let flight = world.resource::<CameraFlight>().active().copied().unwrap();
        assert_eq!(flight.kind, FlightKind::Home);
        assert_eq!(flight.target, Vec3::new(0.0, 5.8, 25.0));
        assert_eq!(
            world.resource::<SeenSectionEvents>().0.last(),
            Some(&SectionEvent::Closed {
                section_id: "section-0".to_string()
            })
        );
    }

    #[test]
    fn close_without_open_section_does_nothing() {
        let mut app = section_app();
        app.world_mut().send_event(CloseSectionRequest {
            source: SectionRequestSource::Rpc,
        });
        app.update();

        assert!(!app.world().resource::<CameraFlight>().is_active());
        assert!(app.world().resource::<SeenSectionEvents>().0.is_empty());
    }

    #[derive(Resource, Default)]
    struct SeenOpenRequests(Vec<OpenSectionRequest>);

    fn click_app(section_open: bool, flying: bool) -> App {
        let mut buttons = ButtonInput::<MouseButton>::default();
        buttons.press(MouseButton::Left);
        let mut flight = CameraFlight::default();
        if flying {
            flight.start(Flight::home(Vec3::new(0.0, 5.8, 25.0)));
        }
        let mut open = OpenSection::default();
        if section_open {
            open.current = Some(PortfolioManifest::default().section_or_fallback("section-1"));
        }

        let mut app = App::new();
        app.add_event::<OpenSectionRequest>()
            .insert_resource(buttons)
            .insert_resource(flight)
            .insert_resource(open)
            .insert_resource(PointerHit(Some(MarkerHit {
                entity: Entity::from_raw(3),
                section_id: "section-0".to_string(),
                point: Vec3::new(0.0, 10.0, 0.0),
                distance: 15.0,
            })))
            .init_resource::<SeenOpenRequests>()
            .add_systems(
                Update,
                (
                    select_marker_on_click,
                    |mut reader: EventReader<OpenSectionRequest>, mut seen: ResMut<SeenOpenRequests>| {
                        seen.0.extend(reader.read().cloned());
                    },
                )
                    .chain(),
            );
        app
    }

    #[test]
    fn click_on_hovered_marker_requests_open() {
        let mut app = click_app(false, false);
        app.update();

        let seen = &app.world().resource::<SeenOpenRequests>().0;
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].section_id, "section-0");
        assert_eq!(seen[0].source, SectionRequestSource::Pointer);
    }

    #[test]
    fn click_is_ignored_while_section_open() {
        let mut app = click_app(true, false);
        app.update();
        assert!(app.world().resource::<SeenOpenRequests>().0.is_empty());
    }

    #[test]
    fn click_is_ignored_during_flight() {
        let mut app = click_app(false, true);
        app.update();
        assert!(app.world().resource::<SeenOpenRequests>().0.is_empty());
    }

    #[test]
    fn escape_closes_open_section() {
        let mut app = section_app();
        app.init_resource::<ButtonInput<KeyCode>>()
            .add_systems(Update, close_section_on_escape.before(handle_close_section_requests));

        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::Escape);
        app.update();
        assert!(app.world().resource::<SeenSectionEvents>().0.is_empty());
        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().reset_all();

        open(&mut app, "section-0");
        assert_eq!(app.world().resource::<OpenSection>().id(), Some("section-0"));

        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::Escape);
        app.update();
        assert!(!app.world().resource::<OpenSection>().is_open());
        assert_eq!(
            app.world().resource::<CameraFlight>().active().map(|flight| flight.kind),
            Some(FlightKind::Home)
        );
    }
}

use crate::engine::assets::portfolio_manifest::PortfolioManifest;
use crate::engine::camera::camera_flight::CameraFlightFinished;
use crate::engine::scene::markers::FormationMarker;
use crate::interaction::notice::{DismissWipNotice, WipNotice};
use crate::interaction::section::{
    CloseSectionRequest, OpenSection, OpenSectionRequest, SectionEvent, SectionRequestSource,
};
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Value,
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<Value>,
    pub error: Option<RpcError>,
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: Value,
}

/// JSON-RPC error structure following specification.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<Value>,
}

/// Resource managing bidirectional RPC communication between the host page and Bevy.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting response.
    pub fn send_notification(&mut self, method: &str, params: Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Notifications queued since the last flush.
    #[cfg(test)]
    pub fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing the WebRPC communication layer with the hosting page.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    forward_scene_events,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Thread-safe message queue for cross-thread communication.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Filter messages to ensure they contain string data.
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", e);
            return;
        }
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing incoming RPC message from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

/// Read-only view of scene state that RPC methods answer from.
pub struct RpcSnapshot<'a> {
    pub manifest: Option<&'a PortfolioManifest>,
    pub open_section: Option<&'a str>,
    pub marker_sections: Vec<&'a str>,
    pub fps: f32,
}

/// Scene change requested by an RPC method, applied after dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcAction {
    OpenSection(String),
    CloseSection,
    DismissWipNotice,
}

#[derive(SystemParam)]
struct SceneRpcContext<'w, 's> {
    manifest: Option<Res<'w, PortfolioManifest>>,
    open_section: Res<'w, OpenSection>,
    markers: Query<'w, 's, &'static FormationMarker>,
    diagnostics: Res<'w, DiagnosticsStore>,
    open_requests: EventWriter<'w, OpenSectionRequest>,
    close_requests: EventWriter<'w, CloseSectionRequest>,
    dismissals: EventWriter<'w, DismissWipNotice>,
}

impl SceneRpcContext<'_, '_> {
    fn snapshot(&self) -> RpcSnapshot<'_> {
        RpcSnapshot {
            manifest: self.manifest.as_deref(),
            open_section: self.open_section.id(),
            marker_sections: self.markers.iter().map(|m| m.section_id.as_str()).collect(),
            fps: self
                .diagnostics
                .get(&FrameTimeDiagnosticsPlugin::FPS)
                .and_then(|fps_diagnostic| fps_diagnostic.smoothed())
                .unwrap_or(0.0) as f32,
        }
    }

    fn apply(&mut self, action: RpcAction) {
        match action {
            RpcAction::OpenSection(section_id) => {
                self.open_requests.write(OpenSectionRequest {
                    section_id,
                    source: SectionRequestSource::Rpc,
                });
            }
            RpcAction::CloseSection => {
                self.close_requests.write(CloseSectionRequest {
                    source: SectionRequestSource::Rpc,
                });
            }
            RpcAction::DismissWipNotice => {
                self.dismissals.write(DismissWipNotice);
            }
        }
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut context: SceneRpcContext,
) {
    // Later messages in a frame see the actions queued by earlier ones.
    let mut actions = Vec::new();
    {
        let snapshot = context.snapshot();
        for event in events.read() {
            match serde_json::from_str::<RpcRequest>(&event.content) {
                Ok(request) => {
                    debug!("Processing RPC method: {}", request.method);

                    if let Some(response) = handle_rpc_request(&request, &snapshot, &mut actions) {
                        rpc_interface.queue_response(response);
                    }
                }
                Err(parse_error) => {
                    debug!("Ignoring unparseable RPC message: {}", parse_error);
                }
            }
        }
    }

    for action in actions {
        context.apply(action);
    }
}

/// Handle individual RPC request and generate response based on method.
///
/// Notifications (no ID) run the same handlers but never produce a response.
/// `actions` may already hold actions queued earlier in the same frame; the
/// section methods treat those as applied.
pub fn handle_rpc_request(
    request: &RpcRequest,
    snapshot: &RpcSnapshot,
    actions: &mut Vec<RpcAction>,
) -> Option<RpcResponse> {
    if request.jsonrpc != "2.0" {
        let id = request.id.clone()?;
        return Some(create_error_response(id, -32600, "Invalid request", None));
    }

    let result = match request.method.as_str() {
        "open_section" => handle_open_section(&request.params, snapshot, actions),
        "close_section" => handle_close_section(snapshot, actions),
        "get_sections" => handle_get_sections(snapshot),
        "get_achievement" => handle_get_achievement(&request.params, snapshot),
        "dismiss_wip_notice" => {
            actions.push(RpcAction::DismissWipNotice);
            Ok(json!({ "success": true }))
        }
        "get_fps" => Ok(json!({ "fps": snapshot.fps })),
        _ => {
            let Some(id) = request.id.clone() else {
                debug!("Ignoring notification: {}", request.method);
                return None;
            };
            warn!("Unknown RPC method: {}", request.method);
            return Some(create_error_response(
                id,
                -32601,
                "Method not found",
                Some(json!({ "method": request.method })),
            ));
        }
    };

    let id = request.id.clone()?;
    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

fn handle_open_section(
    params: &Value,
    snapshot: &RpcSnapshot,
    actions: &mut Vec<RpcAction>,
) -> Result<Value, RpcError> {
    #[derive(Deserialize)]
    struct OpenSectionParams {
        section_id: String,
    }

    let parsed = serde_json::from_value::<OpenSectionParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'section_id' parameter"))?;

    if !snapshot.marker_sections.contains(&parsed.section_id.as_str()) {
        return Err(RpcError::invalid_params(&format!(
            "Unknown section: {}",
            parsed.section_id
        )));
    }

    if let Some(current) = snapshot.open_section {
        return Err(RpcError::internal_error(&format!(
            "Section {current} is already open"
        )));
    }
    if let Some(pending) = pending_open(actions) {
        return Err(RpcError::internal_error(&format!(
            "Section {pending} is already opening"
        )));
    }

    info!("Open section requested over RPC: {}", parsed.section_id);
    actions.push(RpcAction::OpenSection(parsed.section_id.clone()));

    Ok(json!({
        "success": true,
        "section_id": parsed.section_id
    }))
}

fn handle_close_section(
    snapshot: &RpcSnapshot,
    actions: &mut Vec<RpcAction>,
) -> Result<Value, RpcError> {
    let close_pending = actions.contains(&RpcAction::CloseSection);
    let was_open =
        !close_pending && (snapshot.open_section.is_some() || pending_open(actions).is_some());
    if was_open {
        actions.push(RpcAction::CloseSection);
    }
    Ok(json!({ "success": was_open }))
}

fn pending_open(actions: &[RpcAction]) -> Option<&str> {
    actions.iter().find_map(|action| match action {
        RpcAction::OpenSection(section_id) => Some(section_id.as_str()),
        _ => None,
    })
}

fn handle_get_sections(snapshot: &RpcSnapshot) -> Result<Value, RpcError> {
    let manifest = snapshot
        .manifest
        .ok_or_else(|| RpcError::internal_error("Portfolio content not loaded"))?;

    let sections: Vec<Value> = manifest
        .sections
        .iter()
        .map(|section| {
            json!({
                "id": section.id,
                "title": section.title,
                "has_word_cloud": section.has_word_cloud()
            })
        })
        .collect();

    Ok(Value::Array(sections))
}

fn handle_get_achievement(params: &Value, snapshot: &RpcSnapshot) -> Result<Value, RpcError> {
    #[derive(Deserialize)]
    struct AchievementParams {
        word: String,
    }

    let parsed = serde_json::from_value::<AchievementParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'word' parameter"))?;

    let manifest = snapshot
        .manifest
        .ok_or_else(|| RpcError::internal_error("Portfolio content not loaded"))?;

    let achievement = manifest
        .achievement(&parsed.word)
        .ok_or_else(|| RpcError::invalid_params(&format!("Unknown achievement: {}", parsed.word)))?;

    Ok(json!({
        "word": achievement.word,
        "desc": achievement.desc,
        "img": achievement.img
    }))
}

/// Push scene changes to the host page as notifications.
fn forward_scene_events(
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut section_events: EventReader<SectionEvent>,
    mut flights: EventReader<CameraFlightFinished>,
    notice: Res<WipNotice>,
    mut notice_shown: Local<bool>,
) {
    for event in section_events.read() {
        match event {
            SectionEvent::Opened(section) => rpc_interface.send_notification(
                "section_opened",
                json!({
                    "section_id": section.id,
                    "title": section.title,
                    "body": section.body,
                    "words": section.words,
                    "has_word_cloud": section.has_word_cloud()
                }),
            ),
            SectionEvent::Closed { section_id } => rpc_interface
                .send_notification("section_closed", json!({ "section_id": section_id })),
        }
    }

    for finished in flights.read() {
        rpc_interface.send_notification(
            "camera_flight_finished",
            json!({ "kind": finished.kind.as_str() }),
        );
    }

    if notice.visible != *notice_shown {
        *notice_shown = notice.visible;
        rpc_interface.send_notification("wip_notice", json!({ "visible": notice.visible }));
    }
}

/// Create standardized error response with optional data payload.
fn create_error_response(id: Value, code: i32, message: &str, data: Option<Value>) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(RpcError {
            code,
            message: message.to_string(),
            data,
        }),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Send notifications first.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Send responses second to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to the parent window. A top-level page is its own parent.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op for non-WASM targets.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::portfolio_manifest::{Achievement, SectionContent};
    use crate::engine::camera::camera_flight::FlightKind;

    fn manifest() -> PortfolioManifest {
        PortfolioManifest {
            sections: vec![SectionContent {
                id: "section-3".to_string(),
                title: "Achievements".to_string(),
                body: String::new(),
                words: vec!["Bell".to_string()],
            }],
            achievements: vec![Achievement {
                word: "Bell".to_string(),
                desc: "Drone bootcamp".to_string(),
                img: None,
            }],
            ..default()
        }
    }

    fn snapshot<'a>(manifest: Option<&'a PortfolioManifest>, open: Option<&'a str>) -> RpcSnapshot<'a> {
        RpcSnapshot {
            manifest,
            open_section: open,
            marker_sections: vec!["section-0", "section-3"],
            fps: 60.0,
        }
    }

    fn request(method: &str, params: Value, id: Option<i64>) -> RpcRequest {
        RpcRequest {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
            id: id.map(Value::from),
        }
    }

    fn error_code(response: Option<RpcResponse>) -> i32 {
        response.unwrap().error.unwrap().code
    }

    #[test]
    fn open_section_queues_action() {
        let mut actions = Vec::new();
        let response = handle_rpc_request(
            &request("open_section", json!({ "section_id": "section-3" }), Some(1)),
            &snapshot(None, None),
            &mut actions,
        )
        .unwrap();

        assert_eq!(response.result.unwrap()["section_id"], "section-3");
        assert_eq!(actions, vec![RpcAction::OpenSection("section-3".to_string())]);
    }

    #[test]
    fn open_section_rejects_bad_input() {
        let mut actions = Vec::new();
        let snap = snapshot(None, None);
        assert_eq!(
            error_code(handle_rpc_request(&request("open_section", json!({}), Some(1)), &snap, &mut actions)),
            -32602
        );
        assert_eq!(
            error_code(handle_rpc_request(
                &request("open_section", json!({ "section_id": "section-9" }), Some(2)),
                &snap,
                &mut actions
            )),
            -32602
        );
        assert_eq!(
            error_code(handle_rpc_request(
                &request("open_section", json!({ "section_id": "section-0" }), Some(3)),
                &snapshot(None, Some("section-3")),
                &mut actions
            )),
            -32603
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn second_open_in_one_frame_is_rejected() {
        let mut actions = Vec::new();
        let snap = snapshot(None, None);

        let first = handle_rpc_request(
            &request("open_section", json!({ "section_id": "section-0" }), Some(1)),
            &snap,
            &mut actions,
        )
        .unwrap();
        assert_eq!(first.result.unwrap()["success"], true);

        assert_eq!(
            error_code(handle_rpc_request(
                &request("open_section", json!({ "section_id": "section-3" }), Some(2)),
                &snap,
                &mut actions
            )),
            -32603
        );
        assert_eq!(actions, vec![RpcAction::OpenSection("section-0".to_string())]);
    }

    #[test]
    fn close_sees_open_queued_in_same_frame() {
        let mut actions = Vec::new();
        let snap = snapshot(None, None);
        handle_rpc_request(
            &request("open_section", json!({ "section_id": "section-0" }), None),
            &snap,
            &mut actions,
        );

        let closed = handle_rpc_request(&request("close_section", Value::Null, Some(1)), &snap, &mut actions)
            .unwrap();
        assert_eq!(closed.result.unwrap()["success"], true);

        let again = handle_rpc_request(&request("close_section", Value::Null, Some(2)), &snap, &mut actions)
            .unwrap();
        assert_eq!(again.result.unwrap()["success"], false);
        assert_eq!(
            actions,
            vec![RpcAction::OpenSection("section-0".to_string()), RpcAction::CloseSection]
        );
    }

    #[test]
    fn close_section_works_as_notification() {
        let mut actions = Vec::new();
        let response = handle_rpc_request(
            &request("close_section", Value::Null, None),
            &snapshot(None, Some("section-0")),
            &mut actions,
        );
        assert!(response.is_none());
        assert_eq!(actions, vec![RpcAction::CloseSection]);
    }

    #[test]
    fn achievement_lookup_and_unknown_word() {
        let manifest = manifest();
        let snap = snapshot(Some(&manifest), None);
        let mut actions = Vec::new();

        let found = handle_rpc_request(
            &request("get_achievement", json!({ "word": "Bell" }), Some(1)),
            &snap,
            &mut actions,
        )
        .unwrap();
        let result = found.result.unwrap();
        assert_eq!(result["desc"], "Drone bootcamp");
        assert!(result["img"].is_null());

        assert_eq!(
            error_code(handle_rpc_request(
                &request("get_achievement", json!({ "word": "Nope" }), Some(2)),
                &snap,
                &mut actions
            )),
            -32602
        );
    }

    #[test]
    fn content_methods_need_manifest() {
        let mut actions = Vec::new();
        assert_eq!(
            error_code(handle_rpc_request(
                &request("get_sections", Value::Null, Some(1)),
                &snapshot(None, None),
                &mut actions
            )),
            -32603
        );

        let manifest = manifest();
        let response = handle_rpc_request(
            &request("get_sections", Value::Null, Some(2)),
            &snapshot(Some(&manifest), None),
            &mut actions,
        )
        .unwrap();
        assert_eq!(response.result.unwrap()[0]["has_word_cloud"], true);
    }

    #[test]
    fn unknown_methods_and_versions() {
        let mut actions = Vec::new();
        let snap = snapshot(None, None);
        assert_eq!(
            error_code(handle_rpc_request(&request("teleport", Value::Null, Some(1)), &snap, &mut actions)),
            -32601
        );
        assert!(handle_rpc_request(&request("section_opened", json!({}), None), &snap, &mut actions).is_none());

        let mut old = request("get_fps", Value::Null, Some(4));
        old.jsonrpc = "1.0".to_string();
        assert_eq!(error_code(handle_rpc_request(&old, &snap, &mut actions)), -32600);
    }

    #[test]
    fn get_fps_and_dismiss() {
        let mut actions = Vec::new();
        let snap = snapshot(None, None);
        let fps = handle_rpc_request(&request("get_fps", Value::Null, Some(1)), &snap, &mut actions).unwrap();
        assert_eq!(fps.result.unwrap()["fps"], 60.0);

        handle_rpc_request(&request("dismiss_wip_notice", Value::Null, None), &snap, &mut actions);
        assert_eq!(actions, vec![RpcAction::DismissWipNotice]);
    }

    #[test]
    fn request_without_params_parses() {
        let parsed: RpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"close_section"}"#).unwrap();
        assert!(parsed.params.is_null());
        assert!(parsed.id.is_none());
    }

    #[test]
    fn scene_events_become_notifications() {
        let mut app = App::new();
        app.init_resource::<WebRpcInterface>()
            .init_resource::<WipNotice>()
            .add_event::<SectionEvent>()
            .add_event::<CameraFlightFinished>()
            .add_systems(Update, forward_scene_events);

        app.world_mut().send_event(SectionEvent::Closed {
            section_id: "section-1".to_string(),
        });
        app.world_mut().send_event(CameraFlightFinished {
            kind: FlightKind::Home,
        });
        app.world_mut().resource_mut::<WipNotice>().visible = true;
        app.update();

        let methods: Vec<&str> = app
            .world()
            .resource::<WebRpcInterface>()
            .pending_notifications()
            .iter()
            .map(|n| n.method.as_str())
            .collect();
        assert_eq!(methods, vec!["section_closed", "camera_flight_finished", "wip_notice"]);
    }
}

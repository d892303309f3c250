//! JSON-RPC 2.0 communication layer for the hosting web page.
//!
//! Implements bidirectional messaging between the Bevy scene and the page
//! around its canvas via `postMessage`, supporting both request-response and
//! notification patterns. The page renders the section modal, tooltips and the
//! WIP pop-up in the DOM from these messages.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (parent or same window)  <──postMessage──>  Bevy (canvas)
//!        │                                                   │
//!        ├─ Request (with ID) ─────────────────────────────> │
//!        │                                                   ├─ Dispatch against scene snapshot
//!        │ <──────────────────────────── Response (with ID) ─┤
//!        │                                                   │
//!        │ <─────────────────────── Notification (no ID) ────┤
//! ```
//!
//! Handlers never touch the world directly. They read an `RpcSnapshot` and
//! queue `RpcAction`s, which the system turns into the same open/close/dismiss
//! events the pointer and native overlay use.
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32600`: Invalid request
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error
//!
//! ## Methods
//!
//! ### Sections
//! - `open_section`: Open a section by id and fly to its marker
//! - `close_section`: Close the open section and fly home (request or notification)
//! - `get_sections`: List section ids, titles and word-cloud flags
//!
//! ### Content
//! - `get_achievement`: Tooltip content for a word-cloud entry
//! - `dismiss_wip_notice`: Hide the work-in-progress pop-up
//!
//! ### Diagnostics
//! - `get_fps`: Retrieve current frame rate
//!
//! ## Notifications
//!
//! `section_opened`, `section_closed`, `camera_flight_finished`, `wip_notice`
//! and `fps_update` (every 0.5 s).

/// JSON-RPC 2.0 bidirectional communication system for the host page.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;

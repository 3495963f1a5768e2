//! Firewatch - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading images and videos to the
//! Firewatch detection API (fire, smoke and fall detection).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── DetectionForm × 4 (image / video / fire scan / fall)   │
//! │  └── ResultsSection (when a run completed)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  NotificationStack (toasts, fixed lifetime)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (DetectionResult, Notification, errors)
//! - [`components`] - UI components (forms, toasts, results)
//! - [`services`] - Detection API communication

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    DetectionResult, FireThreat, AnalysisOutcome,
    // Notifications
    Notification, Severity,
    // Errors
    DetectError,
    // Helpers
    format_bytes,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🔥 Firewatch - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Shared state: one notification sink, one latest-result slot.
    // Forms submit independently and report into both.
    let notifier = Notifier::new();
    let (outcome, set_outcome) = create_signal(None::<AnalysisOutcome>);

    notifier.notify(Severity::Info, "Fire Detection System Ready");

    view! {
        <div class="container">
            <Hero/>

            <DetectionForm
                title="Image Detection"
                endpoint=DETECT_IMAGE_ENDPOINT
                field_name=IMAGE_FIELD
                accept=IMAGE_MIME_TYPES
                feedback=Feedback::FireThreat
                notifier=notifier
                set_outcome=set_outcome
                fields=vec![("use_fire", "true")]
            />

            <DetectionForm
                title="Video Detection"
                endpoint=DETECT_VIDEO_ENDPOINT
                field_name=VIDEO_FIELD
                accept=VIDEO_MIME_TYPES
                feedback=Feedback::FireThreat
                notifier=notifier
                set_outcome=set_outcome
                fields=vec![("use_fire", "true")]
            />

            <DetectionForm
                title="Fire Scan"
                endpoint=FIRE_SCAN_ENDPOINT
                field_name=MEDIA_FIELD
                accept=FIRE_SCAN_MIME_TYPES
                feedback=Feedback::FireThreat
                notifier=notifier
                set_outcome=set_outcome
            />

            <DetectionForm
                title="Fall Detection"
                endpoint=DETECT_IMAGE_ENDPOINT
                field_name=IMAGE_FIELD
                accept=IMAGE_MIME_TYPES
                feedback=Feedback::Fall
                notifier=notifier
                set_outcome=set_outcome
            />

            <ResultsSection outcome=outcome/>
        </div>

        <NotificationStack notifier=notifier/>

        <Footer/>
    }
}

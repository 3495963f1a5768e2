//! Hero section component

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME} " - Fire & Fall Detection"</h1>
            <p class="subtitle">
                "Upload an image or a video to scan for fire, smoke and falls. "
                "Analysis runs on the detection server; results appear below."
            </p>
        </div>
    }
}

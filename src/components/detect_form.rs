//! Detection upload form.
//!
//! One generic form component, instantiated once per detection flow
//! (image, video, fire scan, fall). Each instance is an independent
//! submission controller: it validates its own file, posts its own
//! request, and reports through the shared notification sink.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement, SubmitEvent};

use crate::components::notifications::Notifier;
use crate::config::{BACKEND_URL, MAX_UPLOAD_BYTES};
use crate::services::{feedback_for, submit_detection, validate_upload, Feedback, UploadRequest};
use crate::types::{format_bytes, AnalysisOutcome, Severity};

#[component]
pub fn DetectionForm(
    /// Section title, also used as the source label on outcomes.
    #[prop(into)] title: String,
    /// Endpoint path, e.g. "/detect-image".
    endpoint: &'static str,
    /// Multipart field name the backend expects the file under.
    field_name: &'static str,
    /// MIME allow-list for this form.
    accept: &'static [&'static str],
    /// How the response is interpreted for user feedback.
    feedback: Feedback,
    /// Shared notification sink.
    notifier: Notifier,
    /// Where completed runs are published for the results panel.
    set_outcome: WriteSignal<Option<AnalysisOutcome>>,
    /// Auxiliary fields sent with every submission (e.g. use_fire=true).
    #[prop(optional)]
    fields: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let (selected, set_selected) = create_signal(None::<File>);
    let (is_uploading, set_is_uploading) = create_signal(false);

    let source = title.clone();

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        set_selected.set(input.files().and_then(|files| files.get(0)));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(file) = selected.get_untracked() else {
            notifier.notify(Severity::Error, "❌ Please select a file");
            return;
        };

        // Fail fast, before anything touches the network.
        if let Err(e) = validate_upload(
            &file.type_(),
            file.size() as u64,
            accept,
            MAX_UPLOAD_BYTES,
        ) {
            notifier.notify(Severity::Error, format!("❌ Error: {}", e));
            log::error!("{} rejected before upload: {}", source, e);
            return;
        }

        notifier.notify(
            Severity::Info,
            format!(
                "Uploading {} ({})...",
                file.name(),
                format_bytes(file.size() as u64)
            ),
        );

        let mut request = UploadRequest::new(endpoint, field_name, file, accept);
        for (key, value) in &fields {
            request = request.with_field(*key, *value);
        }

        let source = source.clone();
        spawn_local(async move {
            set_is_uploading.set(true);

            match submit_detection(&request, BACKEND_URL).await {
                Ok(result) => {
                    match feedback_for(feedback, &result) {
                        Ok((severity, message)) => notifier.notify(severity, message),
                        Err(e) => {
                            notifier.notify(Severity::Error, format!("❌ Error: {}", e));
                            log::error!("{} returned an unusable response: {}", source, e);
                        }
                    }

                    let completed_at = js_sys::Date::new_0()
                        .to_locale_time_string("en-US")
                        .as_string()
                        .unwrap_or_default();

                    set_outcome.set(Some(AnalysisOutcome {
                        source: source.clone(),
                        completed_at,
                        result,
                    }));
                }
                Err(e) => {
                    notifier.notify(Severity::Error, format!("❌ Error: {}", e));
                    log::error!("{} failed: {}", source, e);
                }
            }

            set_is_uploading.set(false);
        });
    };

    let accept_attr = accept.join(",");

    view! {
        <section class="detect-form">
            <h2>{title}</h2>
            <form on:submit=on_submit>
                <input
                    type="file"
                    accept=accept_attr
                    on:change=on_file_change
                />

                <Show
                    when=move || selected.get().is_some()
                    fallback=|| view! { }
                >
                    <div class="file-info">
                        {move || selected.get()
                            .map(|file| format!("{} ({})", file.name(), format_bytes(file.size() as u64)))
                            .unwrap_or_default()}
                    </div>
                </Show>

                <button
                    type="submit"
                    class="analyze-button"
                    disabled=move || is_uploading.get()
                >
                    {move || if is_uploading.get() { "⏳ Analyzing..." } else { "Analyze" }}
                </button>
            </form>
        </section>
    }
}

//! Results panel for the most recent detection run.
//!
//! Shows recognized fields as badges and the full server response as
//! pretty-printed JSON, unrecognized keys included.

use leptos::*;

use crate::types::{AnalysisOutcome, FireThreat};

#[component]
pub fn ResultsSection(outcome: ReadSignal<Option<AnalysisOutcome>>) -> impl IntoView {
    view! {
        <Show
            when=move || outcome.get().is_some()
            fallback=|| view! { }
        >
            <div class="results-section">
                <h2>"Detection Results"</h2>
                {move || outcome.get().map(|run| {
                    let json = serde_json::to_string_pretty(&run.result)
                        .unwrap_or_else(|_| "{}".to_string());

                    let threat_badge = run.result.fire_threat().map(|threat| {
                        let (class, label) = match threat {
                            FireThreat::Detected => ("badge badge-danger", "🔥 FIRE DETECTED"),
                            FireThreat::Safe => ("badge badge-success", "✅ SAFE"),
                            FireThreat::Unrecognized => ("badge badge-info", "Unrecognized threat level"),
                        };
                        view! { <span class=class>{label}</span> }
                    });

                    let fall_badge = run.result.fall_detected.map(|fell| {
                        let (class, label) = if fell {
                            ("badge badge-danger", "🚨 FALL DETECTED")
                        } else {
                            ("badge badge-success", "✅ No fall detected")
                        };
                        view! { <span class=class>{label}</span> }
                    });

                    view! {
                        <div class="results-meta">
                            <span class="results-source">{run.source.clone()}</span>
                            <span class="results-time">" at " {run.completed_at.clone()}</span>
                        </div>
                        <div class="results-badges">
                            {threat_badge}
                            {fall_badge}
                        </div>
                        <pre class="results-json">{json}</pre>
                    }
                })}
            </div>
        </Show>
    }
}

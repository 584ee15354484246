use dioxus::prelude::*;

/// Full-screen error for content that cannot be shown, with the author-facing
/// message verbatim and an optional retry.
#[component]
pub fn ErrorScreen(
    title: String,
    message: String,
    details: Option<String>,
    on_retry: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            class: "error-screen",
            h1 { class: "error-title", "{title}" }
            p { "{message}" }
            if let Some(ref detail_text) = details {
                pre { class: "error-details", "{detail_text}" }
            }
            if let Some(on_retry) = on_retry {
                button {
                    class: "error-retry",
                    onclick: move |_| on_retry.call(()),
                    "Réessayer"
                }
            }
        }
    }
}

use leptos::*;
use outreach_data::BriefPanel;

/// Rendered brief, or the load error in its place.
#[component]
pub fn BriefCard(brief: Memo<BriefPanel>) -> impl IntoView {
    move || match brief.get() {
        BriefPanel::Error(message) => view! {
          <div class="error">{format!("Error loading files: {message}")}</div>
        }
        .into_view(),
        BriefPanel::Html(html) => view! { <article class="prose" inner_html=html></article> }.into_view(),
    }
}

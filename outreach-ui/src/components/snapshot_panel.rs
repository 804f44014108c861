use leptos::*;

use super::Card;

#[component]
pub fn SnapshotPanel(lead_count: Signal<usize>, ready_count: Signal<usize>) -> impl IntoView {
    view! {
      <Card title="Snapshot">
        <div class="tiles">
          <div class="tile">
            <div class="meta">"Leads"</div>
            <div class="tile-value">{move || lead_count.get()}</div>
          </div>
          <div class="tile">
            <div class="meta">"Drafts ready"</div>
            <div class="tile-value">{move || ready_count.get()}</div>
          </div>
        </div>
        <div class="meta footnote">"UK only • Free tier target: 10 quotes • Paywall after 10"</div>
      </Card>
    }
}

use crate::bridge;
use crate::components::{BriefCard, Card, DraftModal, LeadsPanel, QueuePanel, SnapshotPanel};
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use outreach_data::{
    brief_panel, flash_ack, lead_table, queue_table, CommonMarkRenderer, CopyTarget,
    DashboardState, OutreachDraftRow, Source, COPY_FAILED,
};

#[component]
pub fn App() -> impl IntoView {
    view! {
      <main class="page">
        <div class="container">
          <header class="page-header">
            <h1>"BillyBot Growth HQ"</h1>
            <p class="meta">"UK only • Drafts only until you type “send batch”"</p>
          </header>

          <Dashboard/>

          <footer class="tip">
            "Tip: this app reads the repo files directly. Update:"
            <ul>
              {Source::ALL
                .iter()
                .map(|source| view! { <li>{source.file()}</li> })
                .collect_view()}
            </ul>
          </footer>
        </div>
      </main>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let state = create_rw_signal(DashboardState::new());

    spawn_local(async move {
        let outcome = bridge::load_sources().await;
        if let Some(message) = outcome.error_message() {
            logging::warn!("dashboard load failed: {message}");
        }
        // None once the component is gone; the result is dropped.
        let _ = state.try_update(|s| s.apply_load(outcome));
    });
    on_cleanup(move || {
        let _ = state.try_update(DashboardState::teardown);
    });

    let queue_csv = create_memo(move |_| state.with(|s| s.queue_csv().to_string()));
    let leads_csv = create_memo(move |_| state.with(|s| s.leads_csv().to_string()));
    let brief_source = create_memo(move |_| {
        state.with(|s| (s.error().map(str::to_string), s.brief_markdown().to_string()))
    });

    let queue = create_memo(move |_| queue_csv.with(|csv| queue_table(csv)));
    let leads = create_memo(move |_| leads_csv.with(|csv| lead_table(csv)));
    let brief = create_memo(move |_| {
        brief_source.with(|(error, markdown)| {
            brief_panel(error.as_deref(), markdown, &CommonMarkRenderer)
        })
    });

    let ready_count = Signal::derive(move || queue.with(|t| t.ready_count()));
    let lead_count = Signal::derive(move || leads.with(|t| t.len()));

    let on_view = Callback::new(move |draft: OutreachDraftRow| {
        state.update(|s| s.open_draft(draft));
    });

    let on_copy = Callback::new(move |target: CopyTarget| {
        let Some(draft) = state.with_untracked(|s| s.selected_draft().cloned()) else {
            return;
        };
        let payload = target.payload(&draft);
        spawn_local(async move {
            let message = match bridge::write_clipboard(&payload).await {
                Ok(()) => target.acknowledgement(),
                Err(err) => {
                    logging::warn!("clipboard write failed: {err}");
                    COPY_FAILED
                }
            };
            flash_ack(
                message,
                |message| state.try_update(|s| s.acknowledge(message)).flatten(),
                TimeoutFuture::new,
                |ticket| state.try_update(|s| s.expire_ack(ticket)).unwrap_or(false),
            )
            .await;
        });
    });

    view! {
      <div class="layout">
        <div class="main-column">
          <Card title="Daily brief">
            <BriefCard brief=brief/>
          </Card>
          <QueuePanel queue=queue on_view=on_view/>
        </div>

        <div class="side-column">
          <SnapshotPanel lead_count=lead_count ready_count=ready_count/>
          <LeadsPanel leads=leads/>
        </div>

        <DraftModal state=state on_copy=on_copy/>
      </div>
    }
}

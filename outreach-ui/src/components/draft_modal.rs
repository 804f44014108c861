use leptos::*;
use outreach_data::{CopyTarget, DashboardState};
use web_sys::MouseEvent;

/// Read-only view of one queued draft with copy helpers.
///
/// Closes on the close button or a click on the backdrop; clicks inside the
/// dialog stay there.
#[component]
pub fn DraftModal(
    state: RwSignal<DashboardState>,
    on_copy: Callback<CopyTarget>,
) -> impl IntoView {
    let draft = create_memo(move |_| state.with(|s| s.selected_draft().cloned()));
    let ack = create_memo(move |_| state.with(|s| s.ack_message().map(str::to_string)));
    let close = move |_: MouseEvent| state.update(DashboardState::close_modal);

    move || {
        draft.get().map(|draft| {
            let recipient = draft.recipient();
            view! {
              <div class="modal-backdrop" on:click=close>
                <div
                  class="modal"
                  role="dialog"
                  aria-modal="true"
                  on:click=|ev: MouseEvent| ev.stop_propagation()
                >
                  <div class="modal-header">
                    <div>
                      <h3>{draft.business_name().to_string()}</h3>
                      <div class="meta">
                        {(!recipient.is_empty()).then(|| format!("{recipient} • "))}
                        {draft.email().to_string()}
                      </div>
                    </div>
                    <button class="link" on:click=close>"Close"</button>
                  </div>

                  <div class="field">
                    <div class="meta">"Subject"</div>
                    <div class="subject">{draft.subject().to_string()}</div>
                  </div>
                  <div class="field">
                    <div class="meta">"Body"</div>
                    <pre class="body">{draft.body().to_string()}</pre>
                  </div>
                  <div class="meta">{format!("Status: {}", draft.status())}</div>

                  <div class="row">
                    <button on:click=move |_| on_copy.call(CopyTarget::SubjectAndBody)>
                      "Copy subject + body"
                    </button>
                    <button on:click=move |_| on_copy.call(CopyTarget::Email)>"Copy email"</button>
                    <span class="ack">{move || ack.get()}</span>
                  </div>
                </div>
              </div>
            }
        })
    }
}

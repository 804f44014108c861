use leptos::*;
use outreach_data::{CappedTable, OutreachDraftRow};

use super::Card;

#[component]
pub fn QueuePanel(
    queue: Memo<CappedTable<OutreachDraftRow>>,
    on_view: Callback<OutreachDraftRow>,
) -> impl IntoView {
    let title = Signal::derive(move || queue.with(|t| t.title()));
    let rows = move || {
        queue.with(|t| {
            t.visible()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
      <Card title=title>
        <div class="meta notice">
          "Nothing sends automatically. When you type “send batch”, we’ll send whatever is marked ready."
        </div>
        <div class="table-wrap">
          <table>
            <thead>
              <tr>
                <th>"Business"</th>
                <th>"Email"</th>
                <th>"Subject"</th>
                <th>"Status"</th>
                <th></th>
              </tr>
            </thead>
            <tbody>
              <For
                each=rows
                key=|(i, row)| (*i, row.clone())
                children=move |(_, row)| {
                  let selected = row.clone();
                  view! {
                    <tr class:ready=row.is_ready()>
                      <td>{row.business_name().to_string()}</td>
                      <td>{row.email().to_string()}</td>
                      <td>{row.subject().to_string()}</td>
                      <td>{row.status().to_string()}</td>
                      <td>
                        <button class="link" on:click=move |_| on_view.call(selected.clone())>
                          "View"
                        </button>
                      </td>
                    </tr>
                  }
                }
              />
              <Show when=move || queue.with(CappedTable::is_empty)>
                <tr>
                  <td class="empty" colspan="5">"Queue is empty."</td>
                </tr>
              </Show>
            </tbody>
          </table>
        </div>
        {move || queue.with(CappedTable::overflow_notice).map(|notice| view! {
          <div class="meta overflow">{notice}</div>
        })}
      </Card>
    }
}

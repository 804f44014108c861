use leptos::*;
use outreach_data::{CappedTable, LeadRow, LEADS_DISPLAY_CAP};

use super::Card;

#[component]
pub fn LeadsPanel(leads: Memo<CappedTable<LeadRow>>) -> impl IntoView {
    let rows = move || {
        leads.with(|t| {
            t.visible()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
      <Card title=format!("Leads (first {LEADS_DISPLAY_CAP})")>
        <div class="table-wrap">
          <table>
            <thead>
              <tr>
                <th>"Business"</th>
                <th>"City"</th>
                <th>"Maps"</th>
              </tr>
            </thead>
            <tbody>
              <For
                each=rows
                key=|(i, row)| (*i, row.clone())
                children=move |(_, row)| {
                  let maps = row.maps_url().map(|url| view! {
                    <a href=url.to_string() target="_blank" rel="noreferrer">"open"</a>
                  });
                  view! {
                    <tr>
                      <td>{row.business_name().to_string()}</td>
                      <td>{row.city().to_string()}</td>
                      <td>{maps}</td>
                    </tr>
                  }
                }
              />
              <Show when=move || leads.with(CappedTable::is_empty)>
                <tr>
                  <td class="empty" colspan="3">"No leads yet."</td>
                </tr>
              </Show>
            </tbody>
          </table>
        </div>
        {move || leads.with(CappedTable::overflow_notice).map(|notice| view! {
          <div class="meta overflow">{notice}</div>
        })}
      </Card>
    }
}

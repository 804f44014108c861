use leptos::*;

#[component]
pub fn Card(#[prop(into)] title: MaybeSignal<String>, children: Children) -> impl IntoView {
    view! {
      <section class="card">
        <div class="card-header">
          <h2>{move || title.get()}</h2>
        </div>
        <div class="card-body">{children()}</div>
      </section>
    }
}

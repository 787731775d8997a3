//! プロジェクトカードコンポーネント

use leptos::*;
use crate::models::ProjectEntry;

/// プロジェクトカード
/// 非表示のカードも DOM には残し、display で切り替える
#[component]
pub fn ProjectCard(
    entry: ProjectEntry,
    #[prop(into)] visible: Signal<bool>,
    card_class: String,
    reveal_class: String,
) -> impl IntoView {
    let categories = entry.categories.join(" ");
    let shown_class = format!("{} {}", card_class, reveal_class);

    view! {
        <article
            class=move || if visible.get() { shown_class.clone() } else { card_class.clone() }
            style=move || if visible.get() { "display: block" } else { "display: none" }
            data-id=entry.id.clone()
            data-category=categories
        >
            {entry.image.map(|src| view! {
                <img class="project-image" src=src alt=entry.title.clone() loading="lazy" />
            })}
            <div class="project-body">
                <h3>{entry.title.clone()}</h3>
                <p class="project-description">{entry.description}</p>

                {(!entry.tech.is_empty()).then(|| view! {
                    <ul class="project-tech">
                        {entry.tech.into_iter().map(|t| view! { <li>{t}</li> }).collect_view()}
                    </ul>
                })}

                <div class="project-links">
                    {entry.url.map(|u| view! {
                        <a class="project-link" href=u target="_blank" rel="noopener">"Ver proyecto"</a>
                    })}
                    {entry.repo.map(|u| view! {
                        <a class="project-link repo" href=u target="_blank" rel="noopener">"Código"</a>
                    })}
                </div>
            </div>
        </article>
    }
}

//! プロジェクト一覧（フィルタボタン + もっと見る）

use leptos::*;

use super::ProjectCard;
use crate::config::SiteConfig;
use crate::filter::{CategoryFilter, ProjectFilter};
use crate::models::ProjectEntry;
use crate::utils::log_trace::log_info_with_data;

#[component]
pub fn ProjectGallery(projects: Vec<ProjectEntry>) -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig not found");
    let (filter, set_filter) = create_signal(ProjectFilter::new(projects, config.page_size));

    // 状態が変わるたびに全件から再計算
    let visibility = create_memo(move |_| filter.with(|f| f.recompute()));
    let more_available = move || visibility.with(|v| v.more_available);

    let buttons = config.filter_buttons(&filter.with_untracked(|f| f.categories()));
    let entries = filter.with_untracked(|f| f.entries().to_vec());
    let classes = config.classes.clone();

    let on_load_more = move |_| {
        set_filter.update(|f| {
            let vis = f.load_more();
            log_info_with_data("project-filter", "もっと見る", serde_json::json!({
                "filter": f.active().key(),
                "reveal_count": f.reveal_count(),
                "visible": vis.visible_count(),
                "more_available": vis.more_available,
            }));
        });
    };

    view! {
        <div class="project-gallery">
            <div class="filter-buttons" role="group">
                {buttons.into_iter().map(|button| {
                    let target = CategoryFilter::parse(&button.key);
                    let target_click = target.clone();
                    let active_class = classes.filter_active.clone();
                    let inactive_class = classes.filter_inactive.clone();
                    let is_active = move || filter.with(|f| f.active() == &target);
                    let is_active_aria = is_active.clone();

                    let on_click = move |_| {
                        let key = target_click.key().to_string();
                        set_filter.update(|f| {
                            let vis = f.set_filter(&key);
                            log_info_with_data("project-filter", "フィルタ変更", serde_json::json!({
                                "filter": key.as_str(),
                                "matched": f.filtered_len(),
                                "visible": vis.visible_count(),
                            }));
                        });
                    };

                    view! {
                        <button
                            class=move || if is_active() { active_class.clone() } else { inactive_class.clone() }
                            aria-pressed=move || is_active_aria().to_string()
                            data-filter=button.key.clone()
                            on:click=on_click
                        >
                            {button.label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="projects-grid">
                {entries.into_iter().enumerate().map(|(index, entry)| {
                    let visible = Signal::derive(move || visibility.with(|v| v.is_visible(index)));
                    view! {
                        <ProjectCard
                            entry=entry
                            visible=visible
                            card_class=classes.card.clone()
                            reveal_class=classes.card_reveal.clone()
                        />
                    }
                }).collect_view()}
            </div>

            <button
                id=config.ids.load_more.clone()
                class=classes.load_more.clone()
                style=move || if more_available() { "display: inline-block" } else { "display: none" }
                on:click=on_load_more
            >
                {classes.load_more_label.clone()}
            </button>
        </div>
    }
}

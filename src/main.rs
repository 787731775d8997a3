use leptos::*;

mod components;
mod config;
mod filter;
mod models;
mod utils;

use components::{ProjectGallery, SkillBars, StatsCounter};
use config::{load_site_config, SiteConfig};
use models::PortfolioData;
use utils::fetch::fetch_portfolio;
use utils::log_trace::{clear_logs, get_logs_json, log_error, log_info, log_info_with_data};

// ============================================
// ポートフォリオ本体
// ============================================

#[component]
fn Portfolio(data: PortfolioData) -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig not found");

    view! {
        <section id=config.ids.projects.clone() class="portfolio-section">
            <h2>"Proyectos"</h2>
            <ProjectGallery projects=data.projects />
        </section>

        {(!data.stats.is_empty()).then(|| view! {
            <section id=config.ids.stats.clone() class="portfolio-section">
                <StatsCounter stats=data.stats duration_ms=config.counter_duration_ms />
            </section>
        })}

        {(!data.skills.is_empty()).then(|| view! {
            <section id=config.ids.skills.clone() class="portfolio-section">
                <h2>"Habilidades"</h2>
                <SkillBars skills=data.skills />
            </section>
        })}
    }
}

// ============================================
// デバッグ用ログ表示
// ============================================

#[component]
fn LogPanel() -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let (logs, set_logs) = create_signal(String::new());

    let toggle = move |_| {
        if !open.get() {
            set_logs.set(get_logs_json());
        }
        set_open.update(|o| *o = !*o);
    };

    let clear = move |_| {
        clear_logs();
        log_info("log-trace", "registro borrado");
        set_logs.set(get_logs_json());
    };

    view! {
        <div class="log-panel">
            <button class="log-btn" on:click=toggle>
                {move || if open.get() { "Ocultar registro" } else { "Ver registro" }}
            </button>
            {move || open.get().then(|| view! {
                <button class="log-btn" on:click=clear>"Borrar registro"</button>
                <pre class="log-output">{move || logs.get()}</pre>
            })}
        </div>
    }
}

// ============================================
// メインアプリ
// ============================================

#[component]
fn App() -> impl IntoView {
    let config = load_site_config();
    provide_context(config.clone());

    let (portfolio, set_portfolio) = create_signal(None::<PortfolioData>);
    let (loading, set_loading) = create_signal(true);
    let (error_msg, set_error_msg) = create_signal(None::<String>);

    // ページ読み込み時にコンテンツを取得
    let content_url = config.content_url.clone();
    spawn_local(async move {
        match fetch_portfolio(&content_url).await {
            Ok(data) => {
                log_info_with_data("content", "コンテンツ読み込み完了", serde_json::json!({
                    "url": content_url.as_str(),
                    "projects": data.projects.len(),
                    "stats": data.stats.len(),
                    "skills": data.skills.len(),
                }));
                set_portfolio.set(Some(data));
                set_error_msg.set(None);
            }
            Err(e) => {
                log_error("content", &e);
                set_error_msg.set(Some(e));
            }
        }
        set_loading.set(false);
    });

    view! {
        <div class="app">
            <header class="app-header">
                <h1>{move || portfolio.with(|p| {
                    p.as_ref()
                        .map(|d| d.owner.clone())
                        .filter(|o| !o.is_empty())
                        .unwrap_or_else(|| "Portafolio".to_string())
                })}</h1>
            </header>

            <main class="container">
                {move || loading.get().then(|| view! {
                    <p class="status">"Cargando..."</p>
                })}
                {move || error_msg.get().map(|e| view! {
                    <p class="status error">"No se pudo cargar el contenido: " {e}</p>
                })}
                {move || portfolio.get().map(|data| view! { <Portfolio data=data /> })}
            </main>

            <footer class="app-footer">
                <span class="updated-at">{utils::format_data_modified_time()}</span>
                <LogPanel />
            </footer>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

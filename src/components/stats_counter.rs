//! 数値カウンターアニメーション

use gloo::timers::future::TimeoutFuture;
use leptos::*;

use crate::models::Stat;

const FRAME_MS: u32 = 16;

/// 経過率 progress (0..=1) での表示値。完了時は必ず target
pub fn counter_value(progress: f64, target: u32) -> u32 {
    if progress >= 1.0 {
        return target;
    }
    let progress = progress.max(0.0);
    (progress * target as f64).floor() as u32
}

#[component]
pub fn StatsCounter(stats: Vec<Stat>, duration_ms: u32) -> impl IntoView {
    view! {
        <div class="stats-container">
            {stats.into_iter().map(|stat| view! {
                <AnimatedCounter stat=stat duration_ms=duration_ms />
            }).collect_view()}
        </div>
    }
}

#[component]
fn AnimatedCounter(stat: Stat, duration_ms: u32) -> impl IntoView {
    let (value, set_value) = create_signal(0u32);
    let target = stat.target;

    spawn_local(async move {
        let start = js_sys::Date::now();
        loop {
            let progress = (js_sys::Date::now() - start) / duration_ms.max(1) as f64;
            // コンポーネント破棄後は signal が無くなるので終了
            if set_value.try_set(counter_value(progress, target)).is_some() {
                break;
            }
            if progress >= 1.0 {
                break;
            }
            TimeoutFuture::new(FRAME_MS).await;
        }
    });

    view! {
        <div class="stat-item">
            <span class="stat-number" data-target=target>
                {move || value.get()}
                {stat.suffix.clone()}
            </span>
            <span class="stat-label">{stat.label}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_value() {
        assert_eq!(counter_value(0.0, 25), 0);
        assert_eq!(counter_value(0.5, 25), 12);
        assert_eq!(counter_value(0.99, 25), 24);
        assert_eq!(counter_value(1.0, 25), 25);
        assert_eq!(counter_value(3.0, 25), 25);
        assert_eq!(counter_value(-1.0, 25), 0);
    }

    #[test]
    fn test_counter_value_is_monotonic() {
        let mut last = 0;
        for step in 0..=100 {
            let v = counter_value(step as f64 / 100.0, 18);
            assert!(v >= last);
            last = v;
        }
        assert_eq!(last, 18);
    }
}

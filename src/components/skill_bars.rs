//! スキルバー

use leptos::*;

use crate::models::Skill;

/// バーの幅（%）。100を超える値は丸める
pub fn skill_width(progress: u32) -> u32 {
    progress.min(100)
}

#[component]
pub fn SkillBars(skills: Vec<Skill>) -> impl IntoView {
    // 幅0で描画してから次フレームで目標幅にし、CSSトランジションを走らせる
    let (animated, set_animated) = create_signal(false);
    request_animation_frame(move || {
        let _ = set_animated.try_set(true);
    });

    view! {
        <div class="skills-list">
            {skills.into_iter().map(|skill| {
                let width = skill_width(skill.progress);
                view! {
                    <div class="skill-item">
                        <div class="skill-header">
                            <span class="skill-name">{skill.name}</span>
                            {skill.group.map(|g| view! { <span class="skill-group">{g}</span> })}
                            <span class="skill-percent">{width}"%"</span>
                        </div>
                        <div class="progress-bar">
                            <div
                                class="progress-fill"
                                data-progress=width
                                style=move || format!("width: {}%", if animated.get() { width } else { 0 })
                            ></div>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

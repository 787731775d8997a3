//! UIコンポーネントモジュール

pub mod project_card;
pub mod project_gallery;
pub mod skill_bars;
pub mod stats_counter;

pub use project_card::ProjectCard;
pub use project_gallery::ProjectGallery;
pub use skill_bars::SkillBars;
pub use stats_counter::StatsCounter;

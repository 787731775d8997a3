//! ウィジェット設定
//!
//! クラス名・要素ID・ページサイズなどを config/site.json から読み込む。
//! 項目が欠けていてもデフォルト値で補う。

use serde::{Deserialize, Serialize};

use crate::filter::ALL_KEY;
use crate::utils::log_trace::log_warn;

const SITE_CONFIG_JSON: &str = include_str!("../config/site.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub page_size: usize,
    pub content_url: String,
    pub counter_duration_ms: u32,
    /// 空の場合はコンテンツのカテゴリからボタンを生成
    pub filters: Vec<FilterButton>,
    pub classes: ClassNames,
    pub ids: ElementIds,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterButton {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClassNames {
    pub filter_active: String,
    pub filter_inactive: String,
    pub card: String,
    pub card_reveal: String,
    pub load_more: String,
    pub load_more_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ElementIds {
    pub projects: String,
    pub load_more: String,
    pub stats: String,
    pub skills: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            page_size: 2,
            content_url: "data/portfolio.json".to_string(),
            counter_duration_ms: 2000,
            filters: Vec::new(),
            classes: ClassNames::default(),
            ids: ElementIds::default(),
        }
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        ClassNames {
            filter_active: "filter-btn active".to_string(),
            filter_inactive: "filter-btn".to_string(),
            card: "project-card".to_string(),
            card_reveal: "animate-scale-in".to_string(),
            load_more: "load-more-btn".to_string(),
            load_more_label: "Cargar más".to_string(),
        }
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        ElementIds {
            projects: "projects".to_string(),
            load_more: "load-more-btn".to_string(),
            stats: "stats".to_string(),
            skills: "skills".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SiteConfig =
            serde_json::from_str(json).map_err(|e| format!("設定ファイル解析失敗: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 {
            return Err("page_size は1以上にしてください".to_string());
        }
        if self.counter_duration_ms == 0 {
            return Err("counter_duration_ms は1以上にしてください".to_string());
        }
        if self.content_url.trim().is_empty() {
            return Err("content_url が空です".to_string());
        }
        Ok(())
    }

    /// 表示するフィルタボタン。設定が無ければ "all" + カテゴリ一覧
    pub fn filter_buttons(&self, categories: &[String]) -> Vec<FilterButton> {
        if !self.filters.is_empty() {
            return self.filters.clone();
        }
        let mut buttons = vec![FilterButton {
            key: ALL_KEY.to_string(),
            label: "Todos".to_string(),
        }];
        buttons.extend(categories.iter().map(|tag| FilterButton {
            key: tag.clone(),
            label: capitalize(tag),
        }));
        buttons
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 埋め込み設定を読み込む。失敗時はデフォルトに戻す
pub fn load_site_config() -> SiteConfig {
    match SiteConfig::from_json(SITE_CONFIG_JSON) {
        Ok(config) => config,
        Err(e) => {
            log_warn("config", &format!("{} (デフォルト設定を使用)", e));
            SiteConfig::default()
        }
    }
}

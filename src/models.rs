//! データ構造体モジュール

use serde::{Deserialize, Deserializer, Serialize};

// ============================================
// ポートフォリオ表示用データ構造
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PortfolioData {
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// プロジェクトカード1枚分
/// フィルタが参照するのは categories のみ
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProjectEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_categories")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stat {
    pub label: String,
    pub target: u32,
    #[serde(default)]
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub progress: u32,
    #[serde(default)]
    pub group: Option<String>,
}

// data-category="web design" 形式と配列形式の両方を受け付ける
#[derive(Deserialize)]
#[serde(untagged)]
enum CategoriesRepr {
    Text(String),
    List(Vec<String>),
}

fn deserialize_categories<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match CategoriesRepr::deserialize(deserializer)? {
        CategoriesRepr::Text(text) => parse_categories(&text),
        CategoriesRepr::List(list) => normalize_tags(list.iter().map(String::as_str)),
    };
    Ok(tags)
}

/// 空白・カンマ区切りのカテゴリ文字列をタグ集合に変換（小文字化、重複除去、順序保持）
pub fn parse_categories(text: &str) -> Vec<String> {
    normalize_tags(text.split(|c: char| c.is_whitespace() || c == ','))
}

fn normalize_tags<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_categories() {
        assert_eq!(parse_categories("web design"), vec!["web", "design"]);
        assert_eq!(parse_categories(" Web,  MOBILE web "), vec!["web", "mobile"]);
        assert!(parse_categories("   ").is_empty());
    }

    #[test]
    fn test_categories_from_string_or_list() {
        let json = r#"[
            {"id": "a", "title": "A", "categories": "web design"},
            {"id": "b", "title": "B", "categories": ["Mobile", "web"]},
            {"id": "c", "title": "C"}
        ]"#;
        let entries: Vec<ProjectEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].categories, vec!["web", "design"]);
        assert_eq!(entries[1].categories, vec!["mobile", "web"]);
        assert!(entries[2].categories.is_empty());
    }

    #[test]
    fn test_shipped_portfolio_data() {
        let data: PortfolioData =
            serde_json::from_str(include_str!("../data/portfolio.json")).unwrap();
        assert!(!data.projects.is_empty());
        assert!(data.projects.iter().all(|p| !p.categories.is_empty()));
        assert!(!data.stats.is_empty());
        assert!(data.skills.iter().all(|s| s.progress <= 100));
    }
}

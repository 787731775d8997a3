//! プロジェクト一覧のフィルタと「もっと見る」制御
//!
//! 表示状態は常に (全エントリ, 選択カテゴリ, 表示件数) から再計算する。
//! 部分的な更新はしないので、何度再計算しても結果は同じになる。

use crate::models::ProjectEntry;

/// ワイルドカードのフィルタキー
pub const ALL_KEY: &str = "all";

/// 選択中のカテゴリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Tag(String),
}

impl CategoryFilter {
    /// ボタンの data-filter 値から生成（"all" はワイルドカード）
    pub fn parse(key: &str) -> Self {
        let key = key.trim().to_lowercase();
        if key == ALL_KEY {
            CategoryFilter::All
        } else {
            CategoryFilter::Tag(key)
        }
    }

    pub fn key(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_KEY,
            CategoryFilter::Tag(tag) => tag,
        }
    }

    /// タグ集合に完全一致で含まれるか（部分文字列では判定しない）
    pub fn matches(&self, entry: &ProjectEntry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Tag(tag) => entry.categories.contains(tag),
        }
    }
}

/// 再計算の結果。エントリ順に可視フラグを持つ
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Visibility {
    pub visible: Vec<bool>,
    pub more_available: bool,
}

impl Visibility {
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }
}

#[derive(Debug, Clone)]
pub struct ProjectFilter {
    entries: Vec<ProjectEntry>,
    active: CategoryFilter,
    page_size: usize,
    reveal_count: usize,
}

impl ProjectFilter {
    pub fn new(entries: Vec<ProjectEntry>, page_size: usize) -> Self {
        ProjectFilter {
            entries,
            active: CategoryFilter::All,
            page_size,
            reveal_count: page_size,
        }
    }

    pub fn entries(&self) -> &[ProjectEntry] {
        &self.entries
    }

    pub fn active(&self) -> &CategoryFilter {
        &self.active
    }

    pub fn reveal_count(&self) -> usize {
        self.reveal_count
    }

    /// フィルタ変更。表示件数は必ず page_size に戻す
    pub fn set_filter(&mut self, category: &str) -> Visibility {
        self.active = CategoryFilter::parse(category);
        self.reveal_count = self.page_size;
        self.recompute()
    }

    pub fn load_more(&mut self) -> Visibility {
        self.reveal_count = self.reveal_count.saturating_add(self.page_size);
        self.recompute()
    }

    pub fn filtered_len(&self) -> usize {
        self.entries.iter().filter(|e| self.active.matches(e)).count()
    }

    pub fn recompute(&self) -> Visibility {
        let mut visible = vec![false; self.entries.len()];
        let mut shown = 0;
        let mut matched = 0;

        for (index, entry) in self.entries.iter().enumerate() {
            if !self.active.matches(entry) {
                continue;
            }
            matched += 1;
            if shown < self.reveal_count {
                visible[index] = true;
                shown += 1;
            }
        }

        Visibility {
            visible,
            more_available: self.reveal_count < matched,
        }
    }

    /// コンテンツに現れるカテゴリ（初出順、重複なし）
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for entry in &self.entries {
            for tag in &entry.categories {
                if !seen.contains(tag) {
                    seen.push(tag.clone());
                }
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, categories: &str) -> ProjectEntry {
        ProjectEntry {
            id: id.to_string(),
            title: format!("Proyecto {}", id),
            categories: crate::models::parse_categories(categories),
            ..Default::default()
        }
    }

    fn scenario() -> ProjectFilter {
        ProjectFilter::new(
            vec![
                entry("1", "web"),
                entry("2", "design"),
                entry("3", "web"),
                entry("4", "web"),
            ],
            2,
        )
    }

    fn visible_ids(filter: &ProjectFilter, vis: &Visibility) -> Vec<String> {
        filter
            .entries()
            .iter()
            .enumerate()
            .filter(|(i, _)| vis.is_visible(*i))
            .map(|(_, e)| e.id.clone())
            .collect()
    }

    #[test]
    fn test_scenario() {
        let mut filter = scenario();

        let vis = filter.set_filter("web");
        assert_eq!(visible_ids(&filter, &vis), vec!["1", "3"]);
        assert!(vis.more_available);

        let vis = filter.load_more();
        assert_eq!(visible_ids(&filter, &vis), vec!["1", "3", "4"]);
        assert!(!vis.more_available);

        let vis = filter.set_filter("all");
        assert_eq!(visible_ids(&filter, &vis), vec!["1", "2"]);
        assert!(vis.more_available);
    }

    #[test]
    fn test_initial_state() {
        let filter = scenario();
        assert_eq!(filter.active(), &CategoryFilter::All);
        assert_eq!(filter.reveal_count(), 2);
        assert_eq!(filter.recompute().visible_count(), 2);
    }

    #[test]
    fn test_visible_count_is_min_of_reveal_and_filtered() {
        for key in ["all", "web", "design", "mobile"] {
            let mut filter = scenario();
            filter.set_filter(key);
            for _ in 0..4 {
                let vis = filter.recompute();
                let expected = filter.reveal_count().min(filter.filtered_len());
                assert_eq!(vis.visible_count(), expected, "filter {}", key);
                filter.load_more();
            }
        }
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut filter = scenario();
        filter.set_filter("web");
        filter.load_more();
        assert_eq!(filter.recompute(), filter.recompute());
    }

    #[test]
    fn test_load_more_never_decreases() {
        let mut filter = scenario();
        let mut last = filter.recompute().visible_count();
        for _ in 0..5 {
            let now = filter.load_more().visible_count();
            assert!(now >= last);
            last = now;
        }
        assert_eq!(last, 4);
    }

    #[test]
    fn test_set_filter_resets_reveal_count() {
        let mut filter = scenario();
        filter.load_more();
        filter.load_more();
        assert_eq!(filter.reveal_count(), 6);

        filter.set_filter("design");
        assert_eq!(filter.reveal_count(), 2);
        filter.set_filter("all");
        assert_eq!(filter.reveal_count(), 2);
    }

    #[test]
    fn test_more_available_iff_not_exhausted() {
        let mut filter = scenario();
        for key in ["all", "web", "design"] {
            filter.set_filter(key);
            for _ in 0..3 {
                let vis = filter.recompute();
                assert_eq!(
                    vis.more_available,
                    filter.reveal_count() < filter.filtered_len()
                );
                filter.load_more();
            }
        }
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let mut filter = scenario();
        let vis = filter.set_filter("mobile");
        assert_eq!(vis.visible_count(), 0);
        assert!(!vis.more_available);
        assert_eq!(vis.visible.len(), 4);
    }

    #[test]
    fn test_no_substring_match() {
        let mut filter = ProjectFilter::new(vec![entry("1", "webdesign"), entry("2", "web")], 2);
        let vis = filter.set_filter("web");
        assert!(!vis.is_visible(0));
        assert!(vis.is_visible(1));
    }

    #[test]
    fn test_multi_category_entry() {
        let mut filter = ProjectFilter::new(vec![entry("1", "web design"), entry("2", "mobile")], 2);
        assert_eq!(filter.set_filter("design").visible_count(), 1);
        assert_eq!(filter.set_filter("WEB").visible_count(), 1);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let filter = ProjectFilter::new(
            vec![entry("1", "web design"), entry("2", "design mobile"), entry("3", "web")],
            2,
        );
        assert_eq!(filter.categories(), vec!["web", "design", "mobile"]);
    }

    #[test]
    fn test_empty_entries() {
        let mut filter = ProjectFilter::new(Vec::new(), 2);
        let vis = filter.load_more();
        assert!(vis.visible.is_empty());
        assert!(!vis.more_available);
    }
}

use crate::catalog::KeywordCatalog;

/// Titles shorter than this (in characters) are navigation noise, not announcements.
pub const MIN_TITLE_CHARS: usize = 6;

pub struct KeywordFilter {
    catalog: KeywordCatalog,
}

impl KeywordFilter {
    pub fn new(catalog: KeywordCatalog) -> Self {
        KeywordFilter { catalog }
    }

    /// Title gate applied to every anchor on a listing page.
    ///
    /// A disqualifying word rejects the title even when a qualifying word is
    /// also present.
    pub fn is_valid_title(&self, title: &str) -> bool {
        if title.chars().count() < MIN_TITLE_CHARS {
            return false;
        }
        if self.catalog.invalid_title.iter().any(|w| title.contains(w.as_str())) {
            return false;
        }
        self.catalog.valid_title.iter().any(|w| title.contains(w.as_str()))
    }

    /// True when any content keyword appears in the detail page text or in the title.
    pub fn matches(&self, body: &str, title: &str) -> bool {
        if self.catalog.content_words().any(|w| body.contains(w)) {
            return true;
        }
        self.catalog.content_words().any(|w| title.contains(w))
    }
}

impl Default for KeywordFilter {
    fn default() -> Self {
        KeywordFilter::new(KeywordCatalog::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_titles_are_rejected() {
        let filter = KeywordFilter::default();
        // five characters, all of them qualifying
        assert!(!filter.is_valid_title("公开招聘!"));
        assert!(!filter.is_valid_title("招聘"));
        assert!(!filter.is_valid_title(""));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let filter = KeywordFilter::default();
        // 6 chars, 18 bytes
        assert!(filter.is_valid_title("招聘技术人员"));
        // 5 chars but 15 bytes
        assert!(!filter.is_valid_title("招聘技术员"));
    }

    #[test]
    fn invalid_word_wins_over_valid_word() {
        let filter = KeywordFilter::default();
        assert!(!filter.is_valid_title("招聘项目政策解读说明"));
        assert!(!filter.is_valid_title("2024年公开招聘公示结果"));
    }

    #[test]
    fn title_needs_a_qualifying_word() {
        let filter = KeywordFilter::default();
        assert!(filter.is_valid_title("公开招聘岗位公告"));
        assert!(filter.is_valid_title("某某大学人才引进公告"));
        assert!(!filter.is_valid_title("关于开展年度统计工作的通知"));
    }

    #[test]
    fn body_keyword_matches_regardless_of_title() {
        let filter = KeywordFilter::default();
        assert!(filter.matches("本单位正在推进冷冻电镜平台建设", "无关标题"));
        assert!(filter.matches("冷冻电镜平台建设", ""));
    }

    #[test]
    fn title_keyword_matches_with_unrelated_body() {
        let filter = KeywordFilter::default();
        assert!(filter.matches("<html>nothing here</html>", "某某大学公开招聘公告"));
    }

    #[test]
    fn no_keyword_means_no_match() {
        let filter = KeywordFilter::default();
        assert!(!filter.matches("社会保险缴费基数调整通知", "公开招聘公告"));
        assert!(!filter.matches("", ""));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let filter = KeywordFilter::default();
        assert!(filter.matches("experience with cryo-EM required", ""));
        assert!(!filter.matches("experience with CRYO-em required", ""));
    }

    #[test]
    fn custom_catalog_is_honoured() {
        let mut catalog = KeywordCatalog::default();
        catalog.valid_title = vec!["Recruitment".to_string()];
        catalog.invalid_title = vec![];
        catalog.skills = vec!["NMR".to_string()];
        catalog.positions = vec![];
        catalog.institutions = vec![];
        let filter = KeywordFilter::new(catalog);

        assert!(filter.is_valid_title("Recruitment notice"));
        assert!(!filter.is_valid_title("公开招聘岗位公告"));
        assert!(filter.matches("NMR spectroscopy", ""));
        assert!(!filter.matches("冷冻电镜", ""));
    }
}

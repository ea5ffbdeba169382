//! Keyword sets used to recognise structural-biology postings.

/// Immutable keyword sets consulted by [`crate::filter::KeywordFilter`].
///
/// Title words gate which listing links are worth opening; the skill,
/// position and institution words are matched against the detail page.
#[derive(Debug, Clone)]
pub struct KeywordCatalog {
    pub valid_title: Vec<String>,
    pub invalid_title: Vec<String>,
    pub skills: Vec<String>,
    pub positions: Vec<String>,
    pub institutions: Vec<String>,
}

const VALID_TITLE_WORDS: &[&str] = &["招聘", "公开招聘", "事业单位", "人才引进", "招录"];

const INVALID_TITLE_WORDS: &[&str] = &["会议", "解读", "政策解读", "公示结果"];

const SKILL_WORDS: &[&str] = &[
    // protein work
    "蛋白表达", "蛋白纯化", "重组蛋白", "层析", "AKTA",
    // structure determination
    "晶体", "蛋白晶体", "晶体学",
    "X射线", "X射线衍射",
    "冷冻电镜", "cryo-EM", "cryoEM",
    "cryo-FIB", "FIB",
    "电镜", "透射电镜", "扫描电镜",
    // data analysis
    "结构解析", "单颗粒分析", "亚断层平均",
    "结构生物学",
    // facilities
    "电镜平台", "大型仪器", "仪器管理",
    "共享平台", "公共技术平台",
];

const POSITION_WORDS: &[&str] = &[
    "平台主管",
    "平台工程师",
    "结构生物学平台",
    "仪器平台主管",
    "技术支撑",
    "专技岗位",
    "实验技术",
    "工程师",
    "科研助理",
];

const INSTITUTION_WORDS: &[&str] = &[
    "大学",
    "医学院",
    "生命科学学院",
    "结构生物中心",
    "科研院所",
    "中国科学院",
    "重点实验室",
    "公共平台",
    "共享实验室",
];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl KeywordCatalog {
    /// Every word the content matcher looks for: skills, then positions, then institutions.
    pub fn content_words(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .chain(&self.positions)
            .chain(&self.institutions)
            .map(String::as_str)
    }
}

impl Default for KeywordCatalog {
    fn default() -> Self {
        KeywordCatalog {
            valid_title: owned(VALID_TITLE_WORDS),
            invalid_title: owned(INVALID_TITLE_WORDS),
            skills: owned(SKILL_WORDS),
            positions: owned(POSITION_WORDS),
            institutions: owned(INSTITUTION_WORDS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_words_cover_all_three_sets() {
        let catalog = KeywordCatalog::default();
        let words: Vec<&str> = catalog.content_words().collect();
        assert_eq!(
            words.len(),
            catalog.skills.len() + catalog.positions.len() + catalog.institutions.len()
        );
        assert!(words.contains(&"冷冻电镜"));
        assert!(words.contains(&"科研助理"));
        assert!(words.contains(&"中国科学院"));
    }

    #[test]
    fn title_words_stay_out_of_content_words() {
        let catalog = KeywordCatalog::default();
        for word in catalog.valid_title.iter().chain(&catalog.invalid_title) {
            assert!(!catalog.content_words().any(|w| w == word.as_str()), "{word}");
        }
    }
}

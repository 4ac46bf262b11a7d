//! Display model for fortune results.

use serde::Deserialize;

use crate::domain::entities::Fortune;

pub const RESULT_TITLE: &str = "面相分析结果";
pub const DISCLAIMER: &str = "温馨提示：本分析结果纯属娱乐，如有雷同纯属巧合。愚人节快乐！🎉";

const DEFAULT_OVERALL: &str = "面相奇特，额头有光，疑似外星人转世";
const DEFAULT_CAREER: &str = "建议去月球开分公司，那里竞争小";
const DEFAULT_LOVE: &str = "你的真命天子/天女可能是一只猫";
const DEFAULT_WEALTH: &str = "明天可能会在路上捡到一张彩票，记得刮开看看";
const DEFAULT_HEALTH: &str = "建议每天倒立3小时，据说可以长高";

/// A fortune as received over the wire, where any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartialFortune {
    pub overall: Option<String>,
    pub career: Option<String>,
    pub love: Option<String>,
    pub wealth: Option<String>,
    pub health: Option<String>,
}

impl From<Fortune> for PartialFortune {
    fn from(f: Fortune) -> Self {
        Self {
            overall: Some(f.overall),
            career: Some(f.career),
            love: Some(f.love),
            wealth: Some(f.wealth),
            health: Some(f.health),
        }
    }
}

/// A fully populated result ready for display.
///
/// Missing or blank fields are replaced by fixed fallback texts, so a
/// view always has five non-empty lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FortuneView {
    pub overall: String,
    pub career: String,
    pub love: String,
    pub wealth: String,
    pub health: String,
}

impl FortuneView {
    pub fn from_result(result: Option<&PartialFortune>) -> Self {
        let field = |pick: fn(&PartialFortune) -> &Option<String>, default: &str| {
            result
                .and_then(|r| pick(r).as_deref())
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(default)
                .to_string()
        };

        Self {
            overall: field(|r| &r.overall, DEFAULT_OVERALL),
            career: field(|r| &r.career, DEFAULT_CAREER),
            love: field(|r| &r.love, DEFAULT_LOVE),
            wealth: field(|r| &r.wealth, DEFAULT_WEALTH),
            health: field(|r| &r.health, DEFAULT_HEALTH),
        }
    }

    /// Labeled sections in display order.
    pub fn sections(&self) -> [(&'static str, &str); 5] {
        [
            ("整体面相", &self.overall),
            ("事业运势", &self.career),
            ("感情运势", &self.love),
            ("财运分析", &self.wealth),
            ("健康提醒", &self.health),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_result_uses_all_defaults() {
        let view = FortuneView::from_result(None);

        assert_eq!(view.overall, DEFAULT_OVERALL);
        assert_eq!(view.career, DEFAULT_CAREER);
        assert_eq!(view.love, DEFAULT_LOVE);
        assert_eq!(view.wealth, DEFAULT_WEALTH);
        assert_eq!(view.health, DEFAULT_HEALTH);
    }

    #[test]
    fn test_each_field_falls_back_independently() {
        let partial = PartialFortune {
            overall: Some("网红猫".to_string()),
            career: None,
            love: Some("   ".to_string()),
            wealth: Some("稳赚不赔".to_string()),
            health: None,
        };

        let view = FortuneView::from_result(Some(&partial));

        assert_eq!(view.overall, "网红猫");
        assert_eq!(view.career, DEFAULT_CAREER);
        assert_eq!(view.love, DEFAULT_LOVE);
        assert_eq!(view.wealth, "稳赚不赔");
        assert_eq!(view.health, DEFAULT_HEALTH);
    }

    #[test]
    fn test_full_fortune_is_shown_verbatim() {
        let fortune = Fortune::new("a", "b", "c", "d", "e");
        let partial: PartialFortune = fortune.into();
        let view = FortuneView::from_result(Some(&partial));

        let values: Vec<&str> = view.sections().iter().map(|(_, v)| *v).collect();
        assert_eq!(values, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_section_labels_in_order() {
        let view = FortuneView::from_result(None);
        let labels: Vec<&str> = view.sections().iter().map(|(l, _)| *l).collect();

        assert_eq!(labels, ["整体面相", "事业运势", "感情运势", "财运分析", "健康提醒"]);
        assert_eq!(view.sections()[4].1, DEFAULT_HEALTH);
    }

    #[test]
    fn test_deserializes_with_missing_fields() {
        let partial: PartialFortune =
            serde_json::from_str(r#"{"overall": "外星人", "extra": 1}"#).unwrap();

        assert_eq!(partial.overall.as_deref(), Some("外星人"));
        assert!(partial.career.is_none());
    }
}

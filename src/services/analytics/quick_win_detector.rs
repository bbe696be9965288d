use crate::config::constants::{MAX_QUICK_WINS, QUICK_WIN_KEYWORDS, QUICK_WIN_MINUTES};
use crate::structs::analytics::quick_win::QuickWin;
use crate::structs::issue::Issue;

pub fn is_quick_win(issue: &Issue) -> bool {
    let title = issue.title.to_lowercase();
    QUICK_WIN_KEYWORDS.iter().any(|keyword| title.contains(keyword))
}

/// First few keyword matches in encounter order. Severity plays no part.
pub fn identify_quick_wins(issues: &[Issue]) -> Vec<QuickWin> {
    issues
        .iter()
        .filter(|issue| is_quick_win(issue))
        .take(MAX_QUICK_WINS)
        .map(|issue| QuickWin {
            title: issue.title.clone(),
            category: issue.category.clone(),
            description: issue.description.clone(),
            estimated_time_minutes: QUICK_WIN_MINUTES,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn titled(title: &str, severity: &str) -> Issue {
        Issue::from_record(json!({"title": title, "severity": severity}).as_object().unwrap(), "seo")
    }

    #[test]
    fn matches_keywords_case_insensitively() {
        let issues = vec![
            titled("Missing META description", "high"),
            titled("Slow server response", "critical"),
            titled("Images missing Alt Text", "medium"),
            titled("Enable GZIP compression", "low"),
        ];

        let wins = identify_quick_wins(&issues);

        let titles: Vec<&str> = wins.iter().map(|w| w.title.as_str()).collect();
        assert_eq!(titles, vec!["Missing META description", "Images missing Alt Text", "Enable GZIP compression"]);
        assert!(wins.iter().all(|w| w.estimated_time_minutes == 5));
    }

    #[test]
    fn keeps_only_first_five_in_encounter_order() {
        let issues: Vec<Issue> = (0..8).map(|i| titled(&format!("cache rule {}", i), "low")).collect();

        let wins = identify_quick_wins(&issues);

        assert_eq!(wins.len(), 5);
        assert_eq!(wins[0].title, "cache rule 0");
        assert_eq!(wins[4].title, "cache rule 4");
    }

    #[test]
    fn alt_keyword_needs_the_full_phrase() {
        assert!(!is_quick_win(&titled("alternative layout", "low")));
        assert!(is_quick_win(&titled("subtitle too long", "low")));
    }
}

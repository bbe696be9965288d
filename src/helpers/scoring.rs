/// `100 - issues/max_issues * 100`, floored at zero and rounded to two
/// decimals.
pub fn score(issues_found: usize, max_issues: usize) -> f64 {
    if max_issues == 0 {
        return 100.0;
    }
    let raw = 100.0 - (issues_found as f64 / max_issues as f64 * 100.0);
    (raw.max(0.0) * 100.0).round() / 100.0
}

pub fn grade(score: f64) -> &'static str {
    if score >= 90.0 {
        "A"
    } else if score >= 80.0 {
        "B"
    } else if score >= 70.0 {
        "C"
    } else if score >= 60.0 {
        "D"
    } else {
        "F"
    }
}

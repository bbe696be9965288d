use crate::structs::issue::Issue;

pub fn build_tutorial_prompt(issue: &Issue) -> String {
    format!(
        r#"You are an expert web developer and SEO specialist providing clear, actionable tutorials.

WEBSITE ISSUE DETECTED:
Title: {}
Severity: {}
Description: {}

Please provide a comprehensive tutorial that includes:

1. **Problem Explanation**: Briefly explain what this issue means and why it matters
2. **Impact**: How this affects website performance, SEO, or user experience
3. **Step-by-Step Solution**:
   - List 3-5 clear, numbered steps to fix this issue
   - Include code examples where relevant
   - Provide specific HTML/CSS/JavaScript snippets if applicable
4. **Quick Wins**: Any immediate fixes that can be done in minutes
5. **Best Practices**: General recommendations to prevent this issue in the future
6. **Tools to Verify**: Tools or methods to verify the fix is working
7. **Resources**: Links to documentation (Google Docs, MDN, official guides)

Keep the language simple but professional. Focus on practical solutions over theory.
Be specific to the detected issue. Use markdown formatting for clarity."#,
        issue.title,
        issue.severity,
        issue.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn embeds_issue_fields_and_all_sections() {
        let record = json!({"title": "Missing HTTPS", "severity": "critical", "description": "Site served over HTTP"});
        let issue = Issue::from_record(record.as_object().unwrap(), "security");

        let prompt = build_tutorial_prompt(&issue);

        assert!(prompt.contains("Title: Missing HTTPS"));
        assert!(prompt.contains("Severity: critical"));
        assert!(prompt.contains("Description: Site served over HTTP"));
        for section in ["Problem Explanation", "Impact", "Step-by-Step Solution", "Quick Wins",
                        "Best Practices", "Tools to Verify", "Resources"] {
            assert!(prompt.contains(section), "missing section {}", section);
        }
    }
}

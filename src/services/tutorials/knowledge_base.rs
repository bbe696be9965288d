pub const DEFAULT_SOLUTION: &str = "See documentation for detailed troubleshooting steps.";

struct KnowledgeEntry {
    title: &'static str,
    solution: &'static str,
}

struct CategoryEntries {
    category: &'static str,
    entries: &'static [KnowledgeEntry],
}

static KNOWLEDGE_BASE: &[CategoryEntries] = &[
    CategoryEntries {
        category: "performance",
        entries: &[
            KnowledgeEntry {
                title: "Large Images",
                solution: "1. Use modern formats (WebP, AVIF)\n2. Compress images with tools like TinyPNG\n3. Implement responsive images with srcset\n4. Use lazy loading",
            },
            KnowledgeEntry {
                title: "Render-Blocking Resources",
                solution: "1. Defer non-critical JavaScript\n2. Inline critical CSS\n3. Split large CSS files\n4. Load scripts asynchronously",
            },
            KnowledgeEntry {
                title: "Poor Caching",
                solution: "1. Set cache headers (max-age, etag)\n2. Implement service workers\n3. Use CDN for static assets\n4. Version your assets",
            },
        ],
    },
    CategoryEntries {
        category: "seo",
        entries: &[
            KnowledgeEntry {
                title: "Missing Meta Tags",
                solution: "1. Add meta title (50-60 chars)\n2. Add meta description (150-160 chars)\n3. Use semantic HTML tags\n4. Add Open Graph tags for social sharing",
            },
            KnowledgeEntry {
                title: "Poor Heading Structure",
                solution: "1. Use one H1 per page\n2. Use H2, H3 hierarchically\n3. Avoid skipping levels\n4. Include keywords naturally",
            },
        ],
    },
    CategoryEntries {
        category: "security",
        entries: &[
            KnowledgeEntry {
                title: "Missing HTTPS",
                solution: "1. Get SSL certificate (free via Let's Encrypt)\n2. Install certificate on server\n3. Redirect HTTP to HTTPS\n4. Update internal links",
            },
            KnowledgeEntry {
                title: "Missing Security Headers",
                solution: "1. Add CSP header\n2. Add X-Frame-Options\n3. Add X-Content-Type-Options\n4. Add Strict-Transport-Security",
            },
        ],
    },
];

/// Canned fix for an issue. An entry matches when its title is contained in
/// the issue title, compared case-insensitively; the first match wins.
pub fn get_solution(issue_title: &str, category: &str) -> &'static str {
    let issue_title = issue_title.to_lowercase();

    KNOWLEDGE_BASE
        .iter()
        .find(|group| group.category == category)
        .and_then(|group| {
            group
                .entries
                .iter()
                .find(|entry| issue_title.contains(&entry.title.to_lowercase()))
        })
        .map(|entry| entry.solution)
        .unwrap_or(DEFAULT_SOLUTION)
}

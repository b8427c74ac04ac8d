use super::{make_agent, read_success_body, USER_AGENT};
use crate::error::{AnalysisError, Result};
use crate::types::config::TrendingConfig;
use crate::types::trending::TrendingEntry;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::{debug, warn};

const EMPTY_PAGE_MARKER: &str = "have any trending repositories";

pub trait TrendingSource {
    /// Trending repositories in page order.
    fn fetch(&self) -> Result<Vec<TrendingEntry>>;
}

/// First `num_to_return` entries of the source, in source order.
pub fn get_trending_results(
    source: &dyn TrendingSource,
    num_to_return: usize,
) -> Result<Vec<TrendingEntry>> {
    let mut found = source.fetch()?;
    found.truncate(num_to_return);
    Ok(found)
}

pub struct GitHubTrending {
    agent: ureq::Agent,
    config: TrendingConfig,
}

impl GitHubTrending {
    pub fn new(config: &TrendingConfig, timeout_secs: u64) -> Self {
        Self {
            agent: make_agent(timeout_secs),
            config: config.clone(),
        }
    }

    fn page_url(&self) -> String {
        format!(
            "{}/{}?since={}&spoken_language_code={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.language,
            self.config.since,
            self.config.spoken_language
        )
    }
}

impl TrendingSource for GitHubTrending {
    fn fetch(&self) -> Result<Vec<TrendingEntry>> {
        let url = self.page_url();
        debug!("fetching {}", url);
        let response = self
            .agent
            .get(url.as_str())
            .header("Accept", "text/html")
            .header("User-Agent", USER_AGENT)
            .call()?;
        let html = read_success_body(&url, response)?;
        parse_trending_page(&html)
    }
}

fn heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"<h2[^>]*class="[^"]*lh-condensed[^"]*"[^>]*>\s*<a[^>]*?\bhref="/([\w.-]+)/([\w.-]+)""#,
        )
        .expect("trending heading pattern is valid")
    })
}

pub(crate) fn parse_trending_page(html: &str) -> Result<Vec<TrendingEntry>> {
    let mut seen = HashSet::new();
    let entries: Vec<TrendingEntry> = heading_re()
        .captures_iter(html)
        .map(|caps| format!("{}/{}", &caps[1], &caps[2]))
        .filter(|full_name| seen.insert(full_name.clone()))
        .map(TrendingEntry::new)
        .collect();

    if entries.is_empty() {
        if html.contains(EMPTY_PAGE_MARKER) {
            warn!("trending page lists no repositories");
            return Ok(entries);
        }
        return Err(AnalysisError::TrendingParse(
            "no repository headings found".to_string(),
        ));
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::Since;

    const PAGE: &str = r#"
<article class="Box-row">
  <h2 class="h3 lh-condensed">
    <a data-hydro-click="{}" href="/psf/requests" data-view-component="true" class="Link">
      <span class="text-normal">psf /</span> requests
    </a>
  </h2>
</article>
<article class="Box-row">
  <h2 class="h3 lh-condensed">
    <a href="/huggingface/transformers.js" class="Link">transformers.js</a>
  </h2>
</article>
<article class="Box-row">
  <h2 class="h3 lh-condensed"><a href="/psf/requests">dup</a></h2>
</article>
<a href="/login">Sign in</a>
"#;

    struct FixedSource(Vec<&'static str>);

    impl TrendingSource for FixedSource {
        fn fetch(&self) -> Result<Vec<TrendingEntry>> {
            Ok(self.0.iter().map(|name| TrendingEntry::new(*name)).collect())
        }
    }

    #[test]
    fn parse_extracts_owner_and_name_in_page_order() {
        let entries = parse_trending_page(PAGE).expect("page should parse");
        assert_eq!(
            entries,
            vec![
                TrendingEntry::new("psf/requests"),
                TrendingEntry::new("huggingface/transformers.js"),
            ]
        );
    }

    #[test]
    fn parse_accepts_empty_state_page() {
        let html = "<div class=\"blankslate\">It looks like we don’t have any trending repositories for Python.</div>";
        assert!(parse_trending_page(html).expect("empty page is valid").is_empty());
    }

    #[test]
    fn parse_rejects_unrecognised_layout() {
        let result = parse_trending_page("<html><body>rate limited</body></html>");
        assert!(matches!(result, Err(AnalysisError::TrendingParse(_))));
    }

    #[test]
    fn results_are_truncated_in_source_order() {
        let source = FixedSource(vec!["a/one", "b/two", "c/three"]);
        let entries = get_trending_results(&source, 2).expect("fetch should succeed");
        assert_eq!(
            entries,
            vec![TrendingEntry::new("a/one"), TrendingEntry::new("b/two")]
        );
        assert!(get_trending_results(&source, 0)
            .expect("fetch should succeed")
            .is_empty());
        assert_eq!(
            get_trending_results(&source, 10)
                .expect("fetch should succeed")
                .len(),
            3
        );
    }

    #[test]
    fn page_url_applies_language_window_and_locale() {
        let config = TrendingConfig {
            since: Since::Weekly,
            base_url: "https://github.com/trending/".to_string(),
            ..TrendingConfig::default()
        };
        let source = GitHubTrending::new(&config, 5);
        assert_eq!(
            source.page_url(),
            "https://github.com/trending/python?since=weekly&spoken_language_code=en"
        );
    }
}

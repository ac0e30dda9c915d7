//! Mock service search over a fixed list

/// Searchable service names
pub const SERVICES: [&str; 5] = [
    "SEO Optimization Services",
    "Social Media Marketing",
    "Google Ads Campaigns",
    "Content Marketing Strategy",
    "Email Marketing Automation",
];

/// Queries shorter than this hide the results panel
pub const MIN_QUERY_CHARS: usize = 2;

pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// What the results panel should show for a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Hidden,
    NoResults,
    Matches(Vec<&'static str>),
}

impl SearchOutcome {
    pub fn is_visible(&self) -> bool {
        !matches!(self, SearchOutcome::Hidden)
    }
}

/// Case-insensitive substring search over [`SERVICES`]
pub fn search_services(query: &str) -> SearchOutcome {
    let query = query.to_lowercase();
    if query.chars().count() < MIN_QUERY_CHARS {
        return SearchOutcome::Hidden;
    }

    let matches: Vec<_> = SERVICES
        .iter()
        .copied()
        .filter(|service| service.to_lowercase().contains(&query))
        .collect();

    if matches.is_empty() {
        SearchOutcome::NoResults
    } else {
        SearchOutcome::Matches(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seo_matches_one_service() {
        assert_eq!(
            search_services("seo"),
            SearchOutcome::Matches(vec!["SEO Optimization Services"])
        );
        assert_eq!(search_services("SeO"), search_services("seo"));
    }

    #[test]
    fn test_no_results() {
        let outcome = search_services("zzz");
        assert_eq!(outcome, SearchOutcome::NoResults);
        assert!(outcome.is_visible());
    }

    #[test]
    fn test_short_query_hides_panel() {
        assert_eq!(search_services("s"), SearchOutcome::Hidden);
        assert_eq!(search_services(""), SearchOutcome::Hidden);
        assert!(!search_services("s").is_visible());
    }

    #[test]
    fn test_marketing_matches_several() {
        match search_services("marketing") {
            SearchOutcome::Matches(found) => assert_eq!(found.len(), 3),
            other => panic!("unexpected outcome {other:?}"),
        }
    }
}

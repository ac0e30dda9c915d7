//! Static dashboard data and card filtering

/// Body class marking the dashboard page
pub const DASHBOARD_PAGE_CLASS: &str = "dashboard-page";

/// Delay between consecutive chart bars growing
pub const CHART_BAR_STAGGER_MS: u32 = 100;

/// Mock metric values, keyed by their `data-metric` name
pub const METRICS: [(&str, &str, &str); 4] = [
    ("totalClients", "Total Clients", "156"),
    ("activeCampaigns", "Active Campaigns", "23"),
    ("monthlyRevenue", "Monthly Revenue", "45000"),
    ("conversionRate", "Conversion Rate", "12.5"),
];

/// Filter selected among the dashboard's filter buttons
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DashboardFilter {
    #[default]
    All,
    Category(String),
}

impl DashboardFilter {
    /// Parse a `data-filter` value
    pub fn from_key(key: &str) -> Self {
        match key {
            "all" => DashboardFilter::All,
            other => DashboardFilter::Category(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            DashboardFilter::All => "all",
            DashboardFilter::Category(category) => category,
        }
    }

    /// Whether a card tagged with `category` is shown
    pub fn shows(&self, category: &str) -> bool {
        match self {
            DashboardFilter::All => true,
            DashboardFilter::Category(selected) => selected == category,
        }
    }

    /// CSS `display` value for a card tagged with `category`
    pub fn card_display(&self, category: &str) -> &'static str {
        if self.shows(category) { "block" } else { "none" }
    }
}

/// Filter buttons as (`data-filter`, label)
pub const FILTERS: [(&str, &str); 4] = [
    ("all", "All"),
    ("seo", "SEO"),
    ("social", "Social"),
    ("ads", "Ads"),
];

/// A dashboard card with its category tag
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCard {
    pub title: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    pub bars: &'static [ChartBar],
}

/// One bar of a card's chart; `value` is the target height in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBar {
    pub label: &'static str,
    pub value: u8,
}

/// Delay before bar `index` of a chart starts growing
pub fn bar_delay_ms(index: usize) -> u32 {
    index as u32 * CHART_BAR_STAGGER_MS
}

pub const CARDS: [DashboardCard; 3] = [
    DashboardCard {
        title: "Organic Traffic",
        category: "seo",
        summary: "Visits from search engines over the last six months",
        bars: &[
            ChartBar { label: "Jan", value: 35 },
            ChartBar { label: "Feb", value: 48 },
            ChartBar { label: "Mar", value: 52 },
            ChartBar { label: "Apr", value: 61 },
            ChartBar { label: "May", value: 74 },
            ChartBar { label: "Jun", value: 88 },
        ],
    },
    DashboardCard {
        title: "Social Engagement",
        category: "social",
        summary: "Likes, shares and comments across all channels",
        bars: &[
            ChartBar { label: "Jan", value: 62 },
            ChartBar { label: "Feb", value: 58 },
            ChartBar { label: "Mar", value: 70 },
            ChartBar { label: "Apr", value: 66 },
            ChartBar { label: "May", value: 81 },
            ChartBar { label: "Jun", value: 79 },
        ],
    },
    DashboardCard {
        title: "Ad Conversions",
        category: "ads",
        summary: "Conversions attributed to paid campaigns",
        bars: &[
            ChartBar { label: "Jan", value: 20 },
            ChartBar { label: "Feb", value: 34 },
            ChartBar { label: "Mar", value: 41 },
            ChartBar { label: "Apr", value: 39 },
            ChartBar { label: "May", value: 57 },
            ChartBar { label: "Jun", value: 65 },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filter_shows_every_card() {
        let filter = DashboardFilter::from_key("all");
        assert!(CARDS.iter().all(|card| filter.shows(card.category)));
    }

    #[test]
    fn test_category_filter_is_exclusive() {
        let filter = DashboardFilter::from_key("seo");
        let shown: Vec<_> = CARDS
            .iter()
            .filter(|card| filter.shows(card.category))
            .map(|card| card.title)
            .collect();
        assert_eq!(shown, vec!["Organic Traffic"]);
        assert_eq!(filter.card_display("ads"), "none");
        assert_eq!(filter.key(), "seo");
    }

    #[test]
    fn test_bar_delays() {
        assert_eq!(bar_delay_ms(0), 0);
        assert_eq!(bar_delay_ms(4), 400);
    }

    #[test]
    fn test_metric_keys() {
        let keys: Vec<_> = METRICS.iter().map(|(key, _, _)| *key).collect();
        assert_eq!(
            keys,
            vec!["totalClients", "activeCampaigns", "monthlyRevenue", "conversionRate"]
        );
    }
}

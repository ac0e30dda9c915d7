//! Mock campaign dashboard
//!
//! Renders fixed metrics and cards; nothing here reads the session beyond
//! the header's user menu.

use leptos::prelude::*;

use crate::core::DashboardFilter;
use crate::core::dashboard::{
    CARDS, ChartBar, DASHBOARD_PAGE_CLASS, DashboardCard, FILTERS, METRICS, bar_delay_ms,
};
use crate::ui::auth::UserMenu;
use crate::ui::browser::{after, toggle_body_class};
use crate::ui::theme::ThemeToggle;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let filter = RwSignal::new(DashboardFilter::default());

    Effect::new(move |_| toggle_body_class(DASHBOARD_PAGE_CLASS, true));
    on_cleanup(move || toggle_body_class(DASHBOARD_PAGE_CLASS, false));

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <a href="/" class="logo">
                    <span class="logo-mark">"P"</span>
                    <span class="logo-text">"Pulsemark"</span>
                </a>
                <div class="nav-actions">
                    <ThemeToggle />
                    <UserMenu />
                </div>
            </header>

            <main class="dashboard-main container">
                <h1>"Campaign Overview"</h1>

                <div class="metrics-grid">
                    {METRICS
                        .iter()
                        .map(|(key, label, value)| {
                            view! {
                                <div class="metric-card" data-metric=*key>
                                    <span class="metric-label">{*label}</span>
                                    <span class="metric-value">{*value}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="dashboard-filters">
                    {FILTERS
                        .iter()
                        .map(|(key, label)| {
                            let key = *key;
                            view! {
                                <button
                                    type="button"
                                    class="filter-btn"
                                    class:active=move || filter.with(|f| f.key() == key)
                                    data-filter=key
                                    on:click=move |_| filter.set(DashboardFilter::from_key(key))
                                >
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="dashboard-cards">
                    {CARDS
                        .iter()
                        .map(|card| view! { <CampaignCard card=card.clone() filter=filter /> })
                        .collect_view()}
                </div>
            </main>
        </div>
    }
}

#[component]
fn CampaignCard(card: DashboardCard, filter: RwSignal<DashboardFilter>) -> impl IntoView {
    let category = card.category;

    view! {
        <div
            class="dashboard-card"
            data-category=category
            style:display=move || filter.with(|f| f.card_display(category))
        >
            <h3>{card.title}</h3>
            <p>{card.summary}</p>
            <div class="chart">
                {card
                    .bars
                    .iter()
                    .enumerate()
                    .map(|(index, bar)| view! { <Bar bar=*bar index=index /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Chart bar growing from zero to its value once mounted
#[component]
fn Bar(bar: ChartBar, index: usize) -> impl IntoView {
    let grown = RwSignal::new(false);

    Effect::new(move |_| after(bar_delay_ms(index), move || grown.set(true)));

    view! {
        <div
            class="chart-bar"
            data-value=bar.value.to_string()
            title=bar.label
            style:height=move || if grown.get() { format!("{}%", bar.value) } else { "0%".to_string() }
        >
            <span class="chart-label">{bar.label}</span>
        </div>
    }
}

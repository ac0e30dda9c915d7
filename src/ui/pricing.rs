//! Pricing section with the monthly/yearly toggle

use leptos::prelude::*;

use crate::core::BillingPeriod;
use crate::core::animation::StaggerGroup;
use crate::core::pricing::{PRICING_PLANS, PricingPlan};

#[component]
pub fn PricingSection() -> impl IntoView {
    let period = RwSignal::new(BillingPeriod::default());

    view! {
        <section id="pricing" class="pricing section">
            <div class="container">
                <div class="section-header fade-in">
                    <h2>"Simple, Transparent Pricing"</h2>
                    <p>"Pick a plan that matches your growth stage. Switch or cancel anytime."</p>
                </div>

                <label class="pricing-switch">
                    <span>"Monthly"</span>
                    <input
                        type="checkbox"
                        class="pricing-toggle"
                        on:change=move |ev| period.set(BillingPeriod::from_checked(event_target_checked(&ev)))
                    />
                    <span class="pricing-slider"></span>
                    <span>"Yearly " <em>"(2 months free)"</em></span>
                </label>

                <div class="pricing-grid">
                    {PRICING_PLANS
                        .iter()
                        .enumerate()
                        .map(|(index, plan)| view! { <PricingCard plan=plan.clone() index=index period=period /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingCard(plan: PricingPlan, index: usize, period: RwSignal<BillingPeriod>) -> impl IntoView {
    let group = StaggerGroup::PricingCard;
    let class = if plan.highlighted {
        format!("pricing-card featured {}", group.kind().class())
    } else {
        format!("pricing-card {}", group.kind().class())
    };

    view! {
        <div class=class style=group.delay_style(index)>
            {plan.highlighted.then(|| view! { <div class="pricing-badge">"Most Popular"</div> })}
            <h3>{plan.name}</h3>
            <div class="price price-monthly" style:display=move || period.get().monthly_display()>
                <span class="amount">{plan.monthly_price}</span>
                <span class="period">"/month"</span>
            </div>
            <div class="price price-yearly" style:display=move || period.get().yearly_display()>
                <span class="amount">{plan.yearly_price}</span>
                <span class="period">"/year"</span>
            </div>
            <p class="pricing-description">{plan.description}</p>
            <ul class="pricing-features">
                {plan
                    .features
                    .iter()
                    .map(|feature| view! { <li>{*feature}</li> })
                    .collect_view()}
            </ul>
            <a href="#contact" class=if plan.highlighted { "btn btn-primary" } else { "btn btn-outline" }>
                "Get Started"
            </a>
        </div>
    }
}

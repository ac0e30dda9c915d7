//! Pricing plans and the monthly/yearly display toggle

/// Which set of pre-rendered prices is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    /// The toggle is a checkbox: checked selects yearly prices
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            BillingPeriod::Yearly
        } else {
            BillingPeriod::Monthly
        }
    }

    /// CSS `display` value for the monthly price elements
    pub fn monthly_display(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "block",
            BillingPeriod::Yearly => "none",
        }
    }

    /// CSS `display` value for the yearly price elements
    pub fn yearly_display(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "none",
            BillingPeriod::Yearly => "block",
        }
    }
}

/// A plan card with both price displays rendered up front
#[derive(Debug, Clone, PartialEq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub monthly_price: &'static str,
    pub yearly_price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

pub const PRICING_PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "Starter",
        monthly_price: "$499",
        yearly_price: "$4,990",
        description: "For local businesses taking their first steps online",
        features: &[
            "SEO audit & keyword plan",
            "2 social media channels",
            "Monthly performance report",
            "Email support",
        ],
        highlighted: false,
    },
    PricingPlan {
        name: "Growth",
        monthly_price: "$1,299",
        yearly_price: "$12,990",
        description: "For growing brands ready to scale their reach",
        features: &[
            "Everything in Starter",
            "Google Ads management",
            "Content marketing (4 posts/month)",
            "Email marketing automation",
            "Bi-weekly strategy calls",
        ],
        highlighted: true,
    },
    PricingPlan {
        name: "Enterprise",
        monthly_price: "$2,999",
        yearly_price: "$29,990",
        description: "For organizations that need a dedicated team",
        features: &[
            "Everything in Growth",
            "Dedicated account manager",
            "Unlimited campaigns",
            "Custom analytics dashboard",
            "Priority support",
        ],
        highlighted: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_swaps_visibility() {
        let monthly = BillingPeriod::from_checked(false);
        assert_eq!(monthly.monthly_display(), "block");
        assert_eq!(monthly.yearly_display(), "none");

        let yearly = BillingPeriod::from_checked(true);
        assert_eq!(yearly.monthly_display(), "none");
        assert_eq!(yearly.yearly_display(), "block");
    }

    #[test]
    fn test_exactly_one_highlighted_plan() {
        assert_eq!(PRICING_PLANS.iter().filter(|p| p.highlighted).count(), 1);
    }
}

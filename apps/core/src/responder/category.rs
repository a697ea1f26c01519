//! Topic categories the responder can route a message to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::rules::TableError;

/// Topic bucket for an incoming chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Package prices and budgets
    Pricing,
    /// The $149 Starter package
    StarterPlan,
    /// The $499 Pro package
    ProPlan,
    /// Enterprise and e-commerce builds
    Enterprise,
    /// Overview of the service catalog
    Services,
    /// Delivery times
    DeliveryTimeline,
    /// AI chatbot add-on
    Chatbot,
    /// White-label partnership
    WhiteLabel,
    /// Ongoing support and maintenance
    Support,
    /// Bugs, code, technical issues
    Technical,
    /// How the partnership works
    Process,
    /// What the packages include
    Features,
    /// How to reach the team
    Contact,
    /// Landing pages and portfolio sites
    LandingPage,
    /// Email automation add-on
    EmailAutomation,
    /// Hello, hi, hey
    Greeting,
    /// Payments, invoices, subscriptions
    Billing,
    /// Generic help requests
    Help,
    /// Nothing matched
    Fallback,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 19] = [
        Category::Pricing,
        Category::StarterPlan,
        Category::ProPlan,
        Category::Enterprise,
        Category::Services,
        Category::DeliveryTimeline,
        Category::Chatbot,
        Category::WhiteLabel,
        Category::Support,
        Category::Technical,
        Category::Process,
        Category::Features,
        Category::Contact,
        Category::LandingPage,
        Category::EmailAutomation,
        Category::Greeting,
        Category::Billing,
        Category::Help,
        Category::Fallback,
    ];

    /// Returns the stable identifier used in logs, storage and config files
    pub fn label(&self) -> &'static str {
        match self {
            Category::Pricing => "pricing",
            Category::StarterPlan => "starter-plan",
            Category::ProPlan => "pro-plan",
            Category::Enterprise => "enterprise",
            Category::Services => "services",
            Category::DeliveryTimeline => "delivery-timeline",
            Category::Chatbot => "chatbot",
            Category::WhiteLabel => "white-label",
            Category::Support => "support",
            Category::Technical => "technical",
            Category::Process => "process",
            Category::Features => "features",
            Category::Contact => "contact",
            Category::LandingPage => "landing-page",
            Category::EmailAutomation => "email-automation",
            Category::Greeting => "greeting",
            Category::Billing => "billing",
            Category::Help => "help",
            Category::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.label() == wanted)
            .ok_or(TableError::UnknownCategory(wanted))
    }
}

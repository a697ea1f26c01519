//! Built-in MeetCodeAI response catalog.
//!
//! Rule order below is the canonical evaluation order. Keywords overlap:
//! `pro` also matches "process" and "product", `hi` matches "this" and
//! "which", `email` sends "email automation" questions to contact, and
//! `support` is claimed by the support rule before help is checked.
//! Reordering changes which category wins.

use std::collections::HashMap;

use super::category::Category;
use super::rules::{KeywordRule, ResponseTable, TableError};

/// (category, keywords) in evaluation order.
const RULES: &[(Category, &[&str])] = &[
    (Category::Pricing, &["price", "cost", "budget", "pricing"]),
    (Category::StarterPlan, &["starter", "basic package"]),
    (Category::ProPlan, &["pro", "professional", "popular"]),
    (Category::Enterprise, &["enterprise", "ecommerce", "e-commerce"]),
    (Category::Services, &["service", "what do you", "what can you"]),
    (
        Category::DeliveryTimeline,
        &["delivery", "timeline", "how long", "how fast"],
    ),
    (Category::Chatbot, &["chatbot", "ai bot"]),
    (Category::WhiteLabel, &["white label", "whitelabel", "agency"]),
    (Category::Support, &["support", "maintenance"]),
    (Category::Technical, &["technical", "code", "bug"]),
    (Category::Process, &["process", "how it works", "workflow"]),
    (Category::Features, &["feature", "include", "what's included"]),
    (Category::Contact, &["contact", "email", "reach"]),
    (Category::LandingPage, &["landing page", "portfolio"]),
    (Category::EmailAutomation, &["email automation", "newsletter"]),
    (Category::Greeting, &["hello", "hi", "hey"]),
    (Category::Billing, &["payment", "invoice", "subscription"]),
    (Category::Help, &["support", "help", "assist"]),
];

const REPLIES: &[(Category, &[&str])] = &[
    (
        Category::Pricing,
        &[
            "We have 3 packages: **Starter** ($149) for landing pages/portfolios, **Pro** ($499 - most popular!) with AI chatbot & custom animations, and **Enterprise** ($999+) with e-commerce & unlimited revisions. Which interests you?",
            "Our pricing is super transparent! Starter at $149, Pro at $499 (includes AI chatbot!), and Enterprise at $999+. We also offer AI Chatbots ($49/mo) and Email Automation ($49/mo). What type of project are you planning?",
            "For white-label websites: Starter ($149, 1-week delivery), Pro ($499, includes CMS & chatbot), Enterprise ($999+, e-commerce ready). All prices are one-time for the build. Which fits your client's needs?",
        ],
    ),
    (
        Category::StarterPlan,
        &[
            "The Starter Pack ($149) is perfect for landing pages and portfolios! Includes: lightning-fast websites, mobile-first design, SEO optimization, 1-week delivery, and contact forms. Great for small businesses!",
            "Starter at $149 gets you a professionally designed website delivered in just 1 week. It's mobile-optimized, SEO-ready, and includes contact forms. Best for simple projects like landing pages or portfolios.",
        ],
    ),
    (
        Category::ProPlan,
        &[
            "Pro package ($499) is our MOST POPULAR! 🔥 Includes everything in Starter PLUS custom animations, CMS integration, AI chatbot, analytics dashboard, and 2 weeks support. Perfect for full websites & web apps!",
            "The Professional plan at $499 is our best seller! You get AI chatbot integration, custom animations, CMS, analytics, and priority support. Ideal for growing brands and complete websites.",
        ],
    ),
    (
        Category::Enterprise,
        &[
            "Enterprise ($999+) is for serious projects! Includes everything in Pro PLUS e-commerce functionality, advanced integrations, priority support, unlimited revisions, and white-label dashboard. Perfect for platforms & SaaS!",
            "For e-commerce, you'll want our Enterprise plan ($999+). It comes with secure payment processing, inventory management, product catalogs, and all Pro features. Plus unlimited revisions!",
        ],
    ),
    (
        Category::Services,
        &[
            "We offer: Custom Websites ($149+), Landing Pages ($129), Portfolio Sites ($99), AI Chatbots ($49/mo), Email Automation ($49/mo), and E-commerce Solutions ($199+). All white-labeled for agencies!",
            "Our services include: 🚀 Website Design, 📱 Landing Pages, 💼 Portfolios, 🤖 AI Chatbots, 📧 Email Marketing, and 🛒 E-commerce. We're your secret weapon for amazing client projects!",
            "We specialize in white-label web development! Custom websites, landing pages, AI chatbots, email automation, and e-commerce stores. You keep the client relationship, we handle the technical execution.",
        ],
    ),
    (
        Category::DeliveryTimeline,
        &[
            "Delivery times: Starter packages in 1 week, Pro in 2 weeks, Enterprise 2-4 weeks depending on complexity. We pride ourselves on lightning-fast turnaround! ⚡",
            "We're super fast! Most projects: 1-2 weeks. Complex e-commerce or custom integrations: 2-4 weeks. Tell me about your project and I can give you an exact timeline!",
            "Speed is our thing! Landing pages & portfolios: 5-7 days. Full websites: 2 weeks. E-commerce platforms: 3-4 weeks. What's your ideal deadline?",
        ],
    ),
    (
        Category::Chatbot,
        &[
            "Our AI Chatbot service ($49/mo) provides 24/7 customer support, lead qualification, and appointment scheduling. Included FREE in the Pro package! Want to see a demo?",
            "AI Chatbots are perfect for client websites! $49/mo standalone or FREE with Pro/Enterprise packages. They handle customer support, capture leads, and book appointments automatically. 🤖",
        ],
    ),
    (
        Category::WhiteLabel,
        &[
            "Everything we build is 100% white-labeled! No attribution to us. You present it as your own work, maintain the client relationship, and we stay invisible. Perfect for agencies and freelancers! 🎭",
            "We're your silent partner! All work is done under YOUR brand. Your clients never know we exist. You get professional questionnaires, the finished product for review, and ongoing support—all white-labeled.",
        ],
    ),
    (
        Category::Support,
        &[
            "We provide ongoing support! Starter gets email support, Pro gets 2 weeks priority support, Enterprise gets unlimited support. We also offer maintenance packages to keep everything running smoothly! 🛠️",
            "Support is included in all packages! Plus we offer ongoing maintenance to keep your sites updated and secure. Enterprise clients get priority support 24/7.",
        ],
    ),
    (
        Category::Technical,
        &[
            "Our technical team specializes in custom development, bug fixes, and optimization. Can you describe the specific technical issue you're facing?",
            "For technical support, we have dedicated developers ready to help. What technology stack are you using?",
            "Technical issues can be resolved quickly. Please provide details about the error or issue you're experiencing.",
        ],
    ),
    (
        Category::Process,
        &[
            "Our process is simple: 1️⃣ You bring the client, 2️⃣ We create the solution (white-labeled), 3️⃣ You review & deliver to your client, 4️⃣ We provide ongoing support. You stay in control!",
            "Here's how it works: You secure the client and gather requirements → We build it under your brand → You review and deliver → We support it. Seamless partnership! 🤝",
            "We make it easy! You handle client relationships, we handle technical execution. Everything is built under your brand with no attribution to us. You get all the credit!",
        ],
    ),
    (
        Category::Features,
        &[
            "All plans include: mobile-first design, SEO optimization, and fast hosting. Pro adds: CMS, AI chatbot, analytics. Enterprise adds: e-commerce, integrations, unlimited revisions. What features do you need?",
            "Core features: responsive design, SEO, contact forms. Pro package includes AI chatbot, custom animations, CMS integration. Enterprise has advanced integrations and e-commerce. What's most important for your project?",
            "Every website includes: lightning-fast performance, mobile optimization, SEO, analytics. Upgrade to Pro for AI chatbot & CMS. Enterprise gets e-commerce, priority support, and white-label dashboard!",
        ],
    ),
    (
        Category::Contact,
        &[
            "You can reach us through the contact form on this page! Just fill it out with your project details and we'll get back to you within 24 hours. Or keep chatting with me—I can help! 💬",
            "Want to get started? Use our contact form below to tell us about your project. We typically respond within a few hours during business days. What type of project are you working on?",
        ],
    ),
    (
        Category::LandingPage,
        &[
            "Landing Pages start at $129 (high-converting, A/B testing included). Portfolio Sites start at $99 (custom galleries, case studies). Both include mobile design and SEO! Which interests you?",
            "We specialize in conversion-focused landing pages ($129) and stunning portfolio websites ($99). Both are delivered in about a week and include professional design and SEO optimization!",
        ],
    ),
    (
        Category::EmailAutomation,
        &[
            "Email Automation is $49/month! We set up automated sequences, newsletters, and marketing campaigns that convert subscribers into customers. Great for nurturing leads! 📧",
            "Our Email Automation service ($49/mo) includes: automated email sequences, newsletter templates, marketing campaigns, and analytics. Perfect for client retention and lead nurturing!",
        ],
    ),
    (
        Category::Greeting,
        &[
            "Hey! 👋 Welcome to MeetCodeAI support. How can I help you today? Ask about our services, pricing, or technical support!",
            "Hello! Great to see you here. What would you like to know about our services?",
            "Hi there! 👋 I'm here to help. What can I assist you with?",
        ],
    ),
    (
        Category::Billing,
        &[
            "We accept all major credit cards and PayPal. Subscriptions can be cancelled anytime. Do you have questions about your current subscription?",
            "Billing is easy! You'll receive invoices via email. If you need to update your payment method, I can guide you through it.",
            "Our billing is transparent with no hidden fees. Let me help you with any payment or subscription questions!",
        ],
    ),
    (
        Category::Help,
        &[
            "We're here to help 24/7! What specific area do you need support with?",
            "Our support team is always ready to assist. What's your main concern?",
            "Support is our priority! Tell me what you need help with.",
        ],
    ),
    (
        Category::Fallback,
        &[
            "That's a great question! Our team specializes in web development, AI integration, and digital solutions. Can you tell me more about what you're looking for?",
            "Interesting! To better assist you, could you provide more details about your project or requirements?",
            "I understand. Let me connect you with the right specialist. What's your main goal?",
            "Good point! Our team has extensive experience in that area. What specific outcome are you hoping to achieve?",
        ],
    ),
];

impl ResponseTable {
    /// The catalog the support chat ships with.
    pub fn builtin() -> Self {
        // NOTE: static data, validated by test_builtin_is_valid
        Self::try_builtin().expect("built-in response catalog is invalid")
    }

    fn try_builtin() -> Result<Self, TableError> {
        let rules = RULES
            .iter()
            .map(|(category, keywords)| KeywordRule::new(*category, keywords.iter()))
            .collect();
        let responses: HashMap<Category, Vec<String>> = REPLIES
            .iter()
            .map(|(category, replies)| {
                (*category, replies.iter().map(|r| r.to_string()).collect())
            })
            .collect();
        Self::new(rules, responses)
    }
}

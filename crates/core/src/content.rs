//! Static copy for the landing page sections

use serde::Serialize;

pub const BRAND: &str = "SoftSell";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
}

pub const METADATA: PageMetadata = PageMetadata {
    title: "SoftSell | Buy & Sell Software Licenses",
    description: "SoftSell helps businesses unlock the value of unused software licenses. Sell what you don't need and buy what you do—at a fraction of retail prices.",
    keywords: "software licenses, license transfer, software marketplace, used software, save on software",
};

// Hero

pub const HERO_BADGE: &str = "New: Business License Exchange Platform";
pub const HERO_TAGLINE: &str = METADATA.description;

pub const HERO_BENEFITS: [&str; 4] = [
    "Save up to 70% on licenses",
    "Verified software authenticity",
    "Maximize ROI on unused assets",
    "Secure compliance management",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub name: &'static str,
    pub price: &'static str,
    pub discount: &'static str,
}

pub const MARKETPLACE_LISTINGS: [Listing; 6] = [
    Listing { name: "Adobe Creative Cloud", price: "$29.99", discount: "70% off" },
    Listing { name: "Microsoft 365", price: "$4.99", discount: "65% off" },
    Listing { name: "Salesforce License", price: "$79.99", discount: "55% off" },
    Listing { name: "Figma Enterprise", price: "$11.99", discount: "60% off" },
    Listing { name: "Slack Premium", price: "$5.99", discount: "50% off" },
    Listing { name: "Zoom Pro Account", price: "$7.49", discount: "55% off" },
];

// How it works

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [Step; 3] = [
    Step {
        number: 1,
        title: "List Your License",
        description: "Create an account and list your unused software licenses with just a few clicks. Provide details like purchase date and remaining seats.",
    },
    Step {
        number: 2,
        title: "Get Verified",
        description: "Our verification team ensures all licenses are legitimate and transferable. This process typically takes less than 24 hours.",
    },
    Step {
        number: 3,
        title: "Complete the Transfer",
        description: "Once sold, our secure transfer system guides both parties through the license transfer process, including payment processing and documentation.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const PLATFORM_STATS: [Stat; 4] = [
    Stat { value: "$2.4M", label: "Licenses Sold" },
    Stat { value: "94%", label: "Customer Satisfaction" },
    Stat { value: "3,200+", label: "Active Users" },
    Stat { value: "~6hrs", label: "Avg. Verification Time" },
];

// Why choose us

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Save Up to 70% on Software",
        description: "Purchase verified pre-owned licenses at a fraction of retail prices, helping you optimize your IT budget significantly.",
    },
    Feature {
        title: "100% Secure Transfers",
        description: "Our escrow system and verification team ensure legitimate licenses and secure transfers, giving you complete peace of mind.",
    },
    Feature {
        title: "Quick Turnaround",
        description: "Most licenses are verified within 24 hours and transfers completed within 48 hours, getting you up and running in no time.",
    },
    Feature {
        title: "Dedicated Support",
        description: "Our experienced support team is available to assist you throughout the entire process, from listing to transfer completion.",
    },
];

pub const SAVINGS_STATS: [Stat; 3] = [
    Stat { value: "70%", label: "Average Savings" },
    Stat { value: "12,000+", label: "Successful Transfers" },
    Stat { value: "100%", label: "Secure Transactions" },
];

// Testimonials

pub const MAX_RATING: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    /// Stars out of [`MAX_RATING`]
    pub rating: u8,
    pub image: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        quote: "SoftSell helped us save over $50,000 in annual software costs by purchasing pre-owned licenses. The verification process gave us confidence that everything was legitimate and the transfers were seamless.",
        name: "Sarah Johnson",
        title: "IT Director",
        company: "TechCorp Inc.",
        rating: 5,
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=100&auto=format&fit=crop",
    },
    Testimonial {
        quote: "We were able to sell unused licenses from a recent downsize, recouping nearly 60% of our initial investment. SoftSell made the entire process simple, secure, and surprisingly fast.",
        name: "Michael Chen",
        title: "CFO",
        company: "Innovate Solutions",
        rating: 5,
        image: "https://images.unsplash.com/photo-1560250097-0b93528c311a?q=80&w=100&auto=format&fit=crop",
    },
    Testimonial {
        quote: "As a growing startup, we needed to manage our resources carefully. SoftSell allowed us to acquire enterprise-grade software at prices that actually fit our budget.",
        name: "Emma Rodriguez",
        title: "Operations Manager",
        company: "NextGen Startup",
        rating: 4,
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?q=80&w=100&auto=format&fit=crop",
    },
    Testimonial {
        quote: "The ROI on using SoftSell has been incredible. Not only did we save on purchases, but we also recouped costs on software we were no longer using after our department restructured.",
        name: "David Wilson",
        title: "CTO",
        company: "Global Systems",
        rating: 5,
        image: "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?q=80&w=100&auto=format&fit=crop",
    },
];

// Contact

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub email: &'static str,
    pub phone_display: &'static str,
    pub phone_href: &'static str,
    pub address_lines: [&'static str; 2],
}

pub const CONTACT_DETAILS: ContactDetails = ContactDetails {
    email: "info@softsell.com",
    phone_display: "+1 (800) 555-0123",
    phone_href: "tel:+1-800-555-0123",
    address_lines: ["123 Tech Park Way", "San Francisco, CA 94107"],
};

// Footer

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: [&'static str; 4],
}

pub const FOOTER_TAGLINE: &str =
    "The marketplace for buying and selling software licenses at unbeatable prices.";

pub const FOOTER_LINKS: [LinkGroup; 4] = [
    LinkGroup {
        title: "Solutions",
        links: ["Enterprise Software", "Productivity Suites", "Creative Tools", "Development Tools"],
    },
    LinkGroup {
        title: "Company",
        links: ["About Us", "Careers", "Blog", "Press"],
    },
    LinkGroup {
        title: "Resources",
        links: ["Help Center", "License Guide", "FAQs", "Contact Support"],
    },
    LinkGroup {
        title: "Legal",
        links: ["Privacy Policy", "Terms of Service", "Compliance", "Security"],
    },
];

pub const SOCIAL_LINKS: [&str; 3] = ["LinkedIn", "Twitter", "GitHub"];

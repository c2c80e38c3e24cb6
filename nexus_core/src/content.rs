//! Static content payloads for every page.
//!
//! One [`ContentPayload`] per industry vertical, rendered by the shared
//! page template, plus [`HomeContent`] for the landing page.

use crate::icons::IconRef;
use crate::registry::PageId;

/// Per-vertical colour token. Maps to an `accent-*` class in the stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Accent {
    Slate,
    Rose,
    Violet,
    Sky,
    Emerald,
    Amber,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Slate => "accent-slate",
            Accent::Rose => "accent-rose",
            Accent::Violet => "accent-violet",
            Accent::Sky => "accent-sky",
            Accent::Emerald => "accent-emerald",
            Accent::Amber => "accent-amber",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Solution {
    pub icon: IconRef,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub icon: IconRef,
    pub title: &'static str,
    pub text: &'static str,
    pub button_label: &'static str,
}

/// Everything the industry page template needs for one vertical.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentPayload {
    pub page: PageId,
    pub accent: Accent,
    pub hero_icon: IconRef,
    /// First line of the hero heading.
    pub hero_title: &'static str,
    /// Second, highlighted line of the hero heading.
    pub hero_title_accent: &'static str,
    pub hero_subtitle: &'static str,
    pub stats: &'static [Stat],
    pub solutions_heading: &'static str,
    pub solutions_intro: &'static str,
    pub solutions: &'static [Solution],
    pub cta: CallToAction,
}

impl ContentPayload {
    /// Full hero heading, e.g. "Financial Technology".
    pub fn heading(&self) -> String {
        format!("{} {}", self.hero_title, self.hero_title_accent)
    }

    /// Payload for an industry page; `None` for Home.
    pub fn for_page(page: PageId) -> Option<&'static ContentPayload> {
        match page {
            PageId::Home => None,
            PageId::Medical => Some(&MEDICAL),
            PageId::Ai => Some(&AI),
            PageId::Aerospace => Some(&AEROSPACE),
            PageId::Fintech => Some(&FINTECH),
            PageId::Energy => Some(&ENERGY),
        }
    }
}

/// What a routed page renders. Every [`PageId`] has exactly one body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageBody {
    Home(&'static HomeContent),
    Industry(&'static ContentPayload),
}

impl PageBody {
    pub fn for_page(page: PageId) -> Self {
        match page {
            PageId::Home => PageBody::Home(&HOME),
            PageId::Medical => PageBody::Industry(&MEDICAL),
            PageId::Ai => PageBody::Industry(&AI),
            PageId::Aerospace => PageBody::Industry(&AEROSPACE),
            PageId::Fintech => PageBody::Industry(&FINTECH),
            PageId::Energy => PageBody::Industry(&ENERGY),
        }
    }
}

/// Stat tile on the home page's about section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconStat {
    pub icon: IconRef,
    pub value: &'static str,
    pub label: &'static str,
}

/// Card in the home page's industries grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndustryCard {
    pub icon: IconRef,
    pub accent: Accent,
    pub title: &'static str,
    pub description: &'static str,
    /// Page name; the href is `slug::normalize(link)`.
    pub link: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HomeContent {
    pub hero_lines: [&'static str; 2],
    pub hero_subtitle: &'static str,
    pub hero_cta: &'static str,
    /// Lead, highlighted word, tail: "Transforming *Tomorrow* Today".
    pub about_heading: [&'static str; 3],
    pub about_paragraphs: &'static [&'static str],
    pub about_cta: &'static str,
    pub stats: &'static [IconStat],
    pub industries_heading: &'static str,
    pub industries_intro: &'static str,
    pub industries: &'static [IndustryCard],
}

pub static HOME: HomeContent = HomeContent {
    hero_lines: ["NEXUS", "CORP"],
    hero_subtitle: "Pioneering the future across five revolutionary industries. \
        Where innovation meets excellence, and tomorrow becomes today.",
    hero_cta: "Explore Our Story",
    about_heading: ["Transforming", "Tomorrow", "Today"],
    about_paragraphs: &[
        "At Nexus Corp, we don't just adapt to the future\u{2014}we create it. \
         Our diverse portfolio of companies spans the most dynamic sectors \
         of the global economy, each pushing the boundaries of what's possible.",
        "From life-saving medical devices to revolutionary AI systems, \
         from sustainable energy solutions to cutting-edge aerospace technology, \
         we're building the infrastructure of tomorrow.",
    ],
    about_cta: "Discover Our Innovation",
    stats: &[
        IconStat { icon: IconRef::Users, value: "25,000+", label: "Global Employees" },
        IconStat { icon: IconRef::Globe, value: "45", label: "Countries" },
        IconStat { icon: IconRef::Award, value: "1,200+", label: "Patents" },
        IconStat { icon: IconRef::TrendingUp, value: "35%", label: "Revenue Growth" },
    ],
    industries_heading: "Our Industries",
    industries_intro: "Five dynamic sectors, one unified vision: to advance human progress \
        through breakthrough innovation and technological excellence.",
    industries: &[
        IndustryCard {
            icon: IconRef::Heart,
            accent: Accent::Rose,
            title: "Medical Technology",
            description: "Revolutionary healthcare solutions and medical devices",
            link: "Medical",
        },
        IndustryCard {
            icon: IconRef::Brain,
            accent: Accent::Violet,
            title: "AI Solutions",
            description: "Cutting-edge artificial intelligence and machine learning",
            link: "AI",
        },
        IndustryCard {
            icon: IconRef::Plane,
            accent: Accent::Sky,
            title: "Aerospace",
            description: "Next-generation aerospace technology and innovation",
            link: "Aerospace",
        },
        IndustryCard {
            icon: IconRef::Banknote,
            accent: Accent::Emerald,
            title: "Fintech",
            description: "Financial technology solutions for the digital age",
            link: "Fintech",
        },
        IndustryCard {
            icon: IconRef::Zap,
            accent: Accent::Amber,
            title: "Energy Solutions",
            description: "Sustainable energy and clean technology initiatives",
            link: "Energy",
        },
    ],
};

pub static MEDICAL: ContentPayload = ContentPayload {
    page: PageId::Medical,
    accent: Accent::Rose,
    hero_icon: IconRef::Heart,
    hero_title: "Medical",
    hero_title_accent: "Innovation",
    hero_subtitle: "Revolutionizing healthcare through cutting-edge medical technology, \
        advancing patient care and saving lives worldwide.",
    stats: &[
        Stat { value: "500M+", label: "Lives Improved" },
        Stat { value: "150+", label: "Medical Patents" },
        Stat { value: "45", label: "Countries Served" },
        Stat { value: "98%", label: "Safety Rating" },
    ],
    solutions_heading: "Our Medical Solutions",
    solutions_intro: "Comprehensive medical technology solutions designed to improve patient outcomes \
        and enhance healthcare delivery across all specialties.",
    solutions: &[
        Solution {
            icon: IconRef::Stethoscope,
            title: "Diagnostic Equipment",
            description: "Advanced medical imaging and diagnostic tools powered by AI",
            features: &["MRI Enhancement", "X-Ray Analysis", "Ultrasound Innovation"],
        },
        Solution {
            icon: IconRef::Microscope,
            title: "Laboratory Solutions",
            description: "Precision instruments for medical research and testing",
            features: &["Automated Testing", "Sample Analysis", "Quality Control"],
        },
        Solution {
            icon: IconRef::Activity,
            title: "Patient Monitoring",
            description: "Real-time health monitoring and alert systems",
            features: &["Vital Signs", "Remote Monitoring", "Emergency Response"],
        },
        Solution {
            icon: IconRef::Shield,
            title: "Surgical Instruments",
            description: "Next-generation surgical tools and robotics",
            features: &["Minimally Invasive", "Precision Control", "Smart Integration"],
        },
    ],
    cta: CallToAction {
        icon: IconRef::Users,
        title: "Partner with Medical Innovation Leaders",
        text: "Join healthcare providers worldwide who trust our medical technology \
            to deliver exceptional patient care.",
        button_label: "Learn More About Our Solutions",
    },
};

pub static AI: ContentPayload = ContentPayload {
    page: PageId::Ai,
    accent: Accent::Violet,
    hero_icon: IconRef::Brain,
    hero_title: "Artificial",
    hero_title_accent: "Intelligence",
    hero_subtitle: "Pioneering the future of AI with intelligent solutions that transform \
        businesses and enhance human capabilities across every industry.",
    stats: &[
        Stat { value: "10B+", label: "AI Computations Daily" },
        Stat { value: "200+", label: "AI Models Deployed" },
        Stat { value: "35", label: "Industries Served" },
        Stat { value: "99.9%", label: "System Uptime" },
    ],
    solutions_heading: "AI Solutions Portfolio",
    solutions_intro: "Comprehensive artificial intelligence solutions designed to unlock \
        new possibilities and drive innovation across industries.",
    solutions: &[
        Solution {
            icon: IconRef::Brain,
            title: "Machine Learning Platforms",
            description: "Advanced ML algorithms and neural networks for complex problem-solving",
            features: &["Deep Learning", "Natural Language Processing", "Computer Vision"],
        },
        Solution {
            icon: IconRef::Bot,
            title: "AI Automation",
            description: "Intelligent automation solutions for business process optimization",
            features: &["Process Automation", "Smart Workflows", "Decision Making"],
        },
        Solution {
            icon: IconRef::Target,
            title: "Predictive Analytics",
            description: "Data-driven insights and forecasting for strategic decision making",
            features: &["Market Analysis", "Risk Assessment", "Trend Prediction"],
        },
        Solution {
            icon: IconRef::Cpu,
            title: "AI Infrastructure",
            description: "Scalable computing solutions optimized for AI workloads",
            features: &["Cloud Computing", "Edge Processing", "GPU Acceleration"],
        },
    ],
    cta: CallToAction {
        icon: IconRef::Globe,
        title: "Shape the Future with AI",
        text: "Join leading organizations worldwide who leverage our AI solutions \
            to drive innovation and competitive advantage.",
        button_label: "Explore AI Capabilities",
    },
};

pub static AEROSPACE: ContentPayload = ContentPayload {
    page: PageId::Aerospace,
    accent: Accent::Sky,
    hero_icon: IconRef::Plane,
    hero_title: "Aerospace",
    hero_title_accent: "Engineering",
    hero_subtitle: "Pushing the boundaries of flight and space exploration with \
        innovative aerospace technologies that connect our world and beyond.",
    stats: &[
        Stat { value: "500+", label: "Aircraft Equipped" },
        Stat { value: "25", label: "Satellites Launched" },
        Stat { value: "98%", label: "Mission Success Rate" },
        Stat { value: "30+", label: "Years Experience" },
    ],
    solutions_heading: "Aerospace Solutions",
    solutions_intro: "Comprehensive aerospace technologies spanning commercial aviation, \
        space exploration, and defense applications.",
    solutions: &[
        Solution {
            icon: IconRef::Plane,
            title: "Commercial Aviation",
            description: "Advanced aircraft systems and avionics for next-generation flight",
            features: &["Flight Management", "Navigation Systems", "Safety Technology"],
        },
        Solution {
            icon: IconRef::Satellite,
            title: "Satellite Technology",
            description: "Cutting-edge satellite systems for communication and earth observation",
            features: &["Earth Observation", "Communications", "GPS Navigation"],
        },
        Solution {
            icon: IconRef::Rocket,
            title: "Space Exploration",
            description: "Revolutionary propulsion and spacecraft technologies",
            features: &["Propulsion Systems", "Life Support", "Mission Control"],
        },
        Solution {
            icon: IconRef::Shield,
            title: "Defense Systems",
            description: "Advanced defense and security solutions for aerospace applications",
            features: &["Radar Systems", "Electronic Warfare", "Surveillance"],
        },
    ],
    cta: CallToAction {
        icon: IconRef::Gauge,
        title: "Reach New Heights in Aerospace",
        text: "Partner with aerospace industry leaders to advance flight safety, \
            space exploration, and aviation technology.",
        button_label: "Discover Aerospace Solutions",
    },
};

pub static FINTECH: ContentPayload = ContentPayload {
    page: PageId::Fintech,
    accent: Accent::Emerald,
    hero_icon: IconRef::Banknote,
    hero_title: "Financial",
    hero_title_accent: "Technology",
    hero_subtitle: "Transforming the financial landscape with innovative fintech solutions \
        that make banking, payments, and investments more accessible and secure.",
    stats: &[
        Stat { value: "$50B+", label: "Transaction Volume" },
        Stat { value: "10M+", label: "Active Users" },
        Stat { value: "99.9%", label: "Uptime SLA" },
        Stat { value: "150+", label: "Financial Partners" },
    ],
    solutions_heading: "Fintech Solutions",
    solutions_intro: "Comprehensive financial technology solutions designed to modernize \
        banking, enhance security, and improve financial accessibility.",
    solutions: &[
        Solution {
            icon: IconRef::CreditCard,
            title: "Payment Solutions",
            description: "Secure, fast, and reliable payment processing systems",
            features: &["Digital Wallets", "Contactless Payments", "Cross-border Transfers"],
        },
        Solution {
            icon: IconRef::Shield,
            title: "Security & Compliance",
            description: "Advanced cybersecurity and regulatory compliance solutions",
            features: &["Fraud Detection", "Risk Management", "Regulatory Compliance"],
        },
        Solution {
            icon: IconRef::TrendingUp,
            title: "Investment Platforms",
            description: "Intelligent investment and wealth management technologies",
            features: &["Portfolio Management", "Algorithmic Trading", "Market Analysis"],
        },
        Solution {
            icon: IconRef::Smartphone,
            title: "Mobile Banking",
            description: "Next-generation mobile banking and financial services",
            features: &["Digital Banking", "Personal Finance", "Budgeting Tools"],
        },
    ],
    cta: CallToAction {
        icon: IconRef::Building,
        title: "Revolutionize Your Financial Services",
        text: "Join financial institutions worldwide who trust our fintech solutions \
            to drive innovation and customer satisfaction.",
        button_label: "Explore Financial Solutions",
    },
};

pub static ENERGY: ContentPayload = ContentPayload {
    page: PageId::Energy,
    accent: Accent::Amber,
    hero_icon: IconRef::Zap,
    hero_title: "Renewable",
    hero_title_accent: "Energy",
    hero_subtitle: "Leading the global transition to sustainable energy with innovative \
        renewable energy solutions and smart grid technologies.",
    stats: &[
        Stat { value: "15GW", label: "Renewable Capacity" },
        Stat { value: "200M", label: "Tons CO\u{2082} Reduced" },
        Stat { value: "50+", label: "Countries Served" },
        Stat { value: "95%", label: "Efficiency Rating" },
    ],
    solutions_heading: "Energy Solutions",
    solutions_intro: "Comprehensive renewable energy solutions powering a sustainable future \
        through solar, wind, storage, and smart grid technologies.",
    solutions: &[
        Solution {
            icon: IconRef::Sun,
            title: "Solar Technology",
            description: "Advanced photovoltaic systems and solar energy solutions",
            features: &["Solar Panels", "Energy Storage", "Grid Integration"],
        },
        Solution {
            icon: IconRef::Wind,
            title: "Wind Power",
            description: "Next-generation wind turbines and wind energy systems",
            features: &["Turbine Technology", "Offshore Wind", "Smart Controls"],
        },
        Solution {
            icon: IconRef::Battery,
            title: "Energy Storage",
            description: "Cutting-edge battery technology and energy storage solutions",
            features: &["Lithium-ion Batteries", "Grid Storage", "Home Energy"],
        },
        Solution {
            icon: IconRef::Zap,
            title: "Smart Grid",
            description: "Intelligent power distribution and energy management systems",
            features: &["Grid Optimization", "Demand Response", "Energy Analytics"],
        },
    ],
    cta: CallToAction {
        icon: IconRef::Leaf,
        title: "Power the Future with Clean Energy",
        text: "Partner with us to accelerate the global transition to renewable energy \
            and build a sustainable future for generations to come.",
        button_label: "Discover Energy Solutions",
    },
};

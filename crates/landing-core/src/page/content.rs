//! Static copy for the landing page

/// Every link on the page points here until real routes exist
pub const PLACEHOLDER_HREF: &str = "#";

pub const BRAND: &str = "CORE / OS";

pub const NAV_ITEMS: [&str; 4] = ["Platform", "Telemetry", "Solutions", "Docs"];

pub const RAIL_STATUS: [&str; 3] = ["Sys: Online", "Lat: 12ms", "Ver: 4.0.2"];

pub const HERO_TAGS: [&str; 2] = ["// System Override", "// Network_Ready"];

pub const HEADLINE: [&str; 3] = ["ABSOLUTE", "INFRASTRUCTURE", "VISIBILITY."];

pub const HERO_COPY: &str = "Eliminate the darkness in your stack. Core/OS provides real-time \
telemetry, granular observability, and predictive heuristics for mission-critical architecture.";

pub const HERO_CTA_LABEL: &str = "Initialize Demo";

/// One entry of the status ticker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerItem {
    pub label: &'static str,
    /// Prefixed with a filled accent dot instead of `//`
    pub live: bool,
}

pub const TICKER_ITEMS: [TickerItem; 6] = [
    TickerItem { label: "INGESTING: 40TB/S", live: true },
    TickerItem { label: "// NODE_77: STABLE", live: false },
    TickerItem { label: "// LATENCY: < 10MS", live: false },
    TickerItem { label: "THREAT DETECTED: 0", live: true },
    TickerItem { label: "// UPTIME: 99.999%", live: false },
    TickerItem { label: "// DEPLOY: SUCCESS", live: false },
];

/// Marker drawn before live ticker items
pub const LIVE_DOT: &str = "●";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub head: &'static str,
    pub desc: &'static str,
    pub image: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        id: "01",
        title: "Observe",
        head: "Full-Stack Clarity",
        desc: "Trace requests from edge to database with zero sampling. See every packet, every error, every time.",
        image: "https://images.unsplash.com/photo-1558494949-ef526b0042a0?q=80&w=1000&auto=format&fit=crop",
    },
    Feature {
        id: "02",
        title: "Analyze",
        head: "Predictive Logic",
        desc: "Our heuristic engine identifies bottlenecks before they become outages. Fix the future, today.",
        image: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=1000&auto=format&fit=crop",
    },
    Feature {
        id: "03",
        title: "Control",
        head: "Auto-Remediation",
        desc: "Script responses to common anomalies. Let the system heal itself while you sleep.",
        image: "https://images.unsplash.com/photo-1516110833967-0b5716ca1387?q=80&w=1000&auto=format&fit=crop",
    },
    Feature {
        id: "04",
        title: "Secure",
        head: "Perimeter Defense",
        desc: "Real-time anomaly detection flags intruders instantly. Lock down vectors in milliseconds.",
        image: "https://images.unsplash.com/photo-1510511459019-5dda7724fd87?q=80&w=1000&auto=format&fit=crop",
    },
];

pub const THERMAL_TAG: &str = "// LOAD CAPACITY";
pub const THERMAL_HEAD: &str = "Handling the heat.";
pub const THERMAL_COPY: &str = "Your infrastructure generates massive heat maps of data. Core/OS \
visualizes load distribution in warm, intuitive gradients so you know exactly where the pressure lies.";
pub const THERMAL_IMAGE: &str =
    "https://images.unsplash.com/photo-1620641788421-7a1c342ea42e?q=80&w=1000&auto=format&fit=crop";
pub const THERMAL_IMAGE_ALT: &str = "Thermal Visual";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat { label: "Max Throughput", value: "450 GB/s" },
    Stat { label: "Retention", value: "365 Days" },
    Stat { label: "Query Speed", value: "0.04ms" },
];

pub const FOOTER_TAGLINE: &str = "The standard for enterprise observability.";
pub const FOOTER_HEAD: &str = "READY TO DEPLOY?";
pub const FOOTER_CTA_LABEL: &str = "Start Free Trial";

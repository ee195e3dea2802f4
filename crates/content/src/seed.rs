//! Hardcoded seed catalogue of deal mandates.
//!
//! Always available with zero network dependency, so the portfolio
//! renders immediately while the backend fetch resolves. Remote rows
//! win title collisions during the merge, which lets a stale seed copy
//! drop out once the backend carries fresher data.

use common::{parse_timestamp, Mandate};

struct SeedEntry {
    title: &'static str,
    deal_type: &'static str,
    sector: &'static str,
    deal_size: &'static str,
    status: &'static str,
    description: &'static str,
    created_at: &'static str,
}

/// Local id of the form `seed-<index>-<slugified title>`.
///
/// Slugification lowercases the title and collapses whitespace runs to
/// single hyphens; untitled entries slug as "deal".
fn seed_id(index: usize, title: &str) -> String {
    let lowered = if title.is_empty() {
        "deal".to_string()
    } else {
        title.to_lowercase()
    };
    let slug = lowered.split_whitespace().collect::<Vec<_>>().join("-");
    format!("seed-{index}-{slug}")
}

/// Build the seed mandate list, assigning derived local identifiers.
pub fn seed_mandates() -> Vec<Mandate> {
    SEED.iter()
        .enumerate()
        .map(|(index, entry)| Mandate {
            id: seed_id(index, entry.title),
            title: entry.title.to_string(),
            deal_type: entry.deal_type.to_string(),
            sector: entry.sector.to_string(),
            deal_size: entry.deal_size.to_string(),
            status: entry.status.to_string(),
            description: entry.description.to_string(),
            featured: false,
            created_at: parse_timestamp(Some(entry.created_at)),
        })
        .collect()
}

const SEED: &[SeedEntry] = &[
    SeedEntry {
        title: "SaaS Platform Seeking Series B",
        deal_type: "Capital Raising",
        sector: "Technology",
        deal_size: "$20M – $30M",
        status: "Active",
        description: "Fast-growing enterprise software company with $15M ARR seeking $25M Series B to accelerate GTM and product.",
        created_at: "2025-07-01T09:00:00Z",
    },
    SeedEntry {
        title: "Manufacturing Acquisition Target",
        deal_type: "M&A Advisory",
        sector: "Manufacturing",
        deal_size: "$40M – $50M",
        status: "Active",
        description: "Stable precision components supplier with strong EBITDA margins seeking strategic sale or majority recap.",
        created_at: "2025-06-22T09:00:00Z",
    },
    SeedEntry {
        title: "Distribution Partnership – Healthcare Tech",
        deal_type: "Strategic Partnerships",
        sector: "Healthcare",
        deal_size: "N/A",
        status: "Active",
        description: "Medical device innovator seeking distribution partners in SEA with existing hospital networks.",
        created_at: "2025-06-19T09:00:00Z",
    },
    SeedEntry {
        title: "Climate Analytics – Growth Equity",
        deal_type: "Capital Raising",
        sector: "Climate Tech",
        deal_size: "$30M – $35M",
        status: "Pending",
        description: "B2B climate risk analytics platform raising growth equity to expand to EU utilities and insurers.",
        created_at: "2025-06-12T09:00:00Z",
    },
    SeedEntry {
        title: "AI Agent Infra – Strategic Buyer",
        deal_type: "Sell-Side M&A",
        sector: "Technology",
        deal_size: "$80M – $120M",
        status: "Active",
        description: "Dev tooling for LLM agents; 900 enterprise logos. Exploring strategic sale to hyperscaler ecosystem partner.",
        created_at: "2025-06-10T09:00:00Z",
    },
    SeedEntry {
        title: "Solar EPC Roll-Up",
        deal_type: "Buy-Side M&A",
        sector: "Energy",
        deal_size: "$50M+ program",
        status: "Active",
        description: "Sponsor-backed platform assembling regional EPC firms to achieve scale and procurement leverage.",
        created_at: "2025-06-05T09:00:00Z",
    },
    SeedEntry {
        title: "API-First Bank Data – Series A (Closed)",
        deal_type: "Capital Raising",
        sector: "Financial Services",
        deal_size: "$18M (closed)",
        status: "Closed",
        description: "Open banking API provider; round led by top fintech VC with participation from strategic banks.",
        created_at: "2025-05-28T09:00:00Z",
    },
    SeedEntry {
        title: "D2C Wellness Brand – Minority Sale",
        deal_type: "Secondary / Partial Exit",
        sector: "Consumer",
        deal_size: "$25M – $35M",
        status: "Pending",
        description: "High-margin wellness brand with strong subscription metrics; founder seeking partial liquidity.",
        created_at: "2025-05-24T09:00:00Z",
    },
    SeedEntry {
        title: "Maritime Logistics Network JV",
        deal_type: "Joint Venture",
        sector: "Logistics",
        deal_size: "$60M JV",
        status: "Active",
        description: "Regional port operator exploring JV with 3PL for integrated cold-chain services across 4 hubs.",
        created_at: "2025-05-21T09:00:00Z",
    },
    SeedEntry {
        title: "AI Radiology Assist – Strategic Distribution",
        deal_type: "Strategic Partnerships",
        sector: "Healthcare",
        deal_size: "N/A",
        status: "Closed",
        description: "Signed distribution with multinational imaging OEM to bundle workflow AI with PACS deployments.",
        created_at: "2025-05-18T09:00:00Z",
    },
    SeedEntry {
        title: "EV Charging OS – Series A",
        deal_type: "Capital Raising",
        sector: "Climate Tech",
        deal_size: "$12M – $15M",
        status: "Active",
        description: "OS for multi-vendor chargers; raising to expand utility integrations and payments.",
        created_at: "2025-05-10T09:00:00Z",
    },
    SeedEntry {
        title: "Industrial IoT Edge – Asset Sale",
        deal_type: "Sell-Side M&A",
        sector: "Manufacturing",
        deal_size: "$22M – $28M",
        status: "Closed",
        description: "Sale of edge gateway IP and contracts to global automation player completed.",
        created_at: "2025-05-05T09:00:00Z",
    },
    SeedEntry {
        title: "Cyber Insurtech – Reinsurance Partner",
        deal_type: "Strategic Partnerships",
        sector: "Financial Services",
        deal_size: "Capacity program",
        status: "Pending",
        description: "Cyber MGA seeking panel expansion with \"follow\" capacity and data-sharing partnership.",
        created_at: "2025-04-29T09:00:00Z",
    },
    SeedEntry {
        title: "Agri Robotics – Series Seed+",
        deal_type: "Capital Raising",
        sector: "Industrial Tech",
        deal_size: "$6M – $8M",
        status: "Active",
        description: "Autonomous harvesting robots; pilots completed with two top producers.",
        created_at: "2025-04-24T09:00:00Z",
    },
    SeedEntry {
        title: "Payments ISO Roll-Up",
        deal_type: "Buy-Side M&A",
        sector: "Financial Services",
        deal_size: "$100M+ program",
        status: "Active",
        description: "Platform consolidating ISOs/PayFacs to build scale and improve take rate economics.",
        created_at: "2025-04-18T09:00:00Z",
    },
    SeedEntry {
        title: "Security Awareness SaaS – Acquisition (Closed)",
        deal_type: "Sell-Side M&A",
        sector: "Technology",
        deal_size: "$55M (closed)",
        status: "Closed",
        description: "Sold to global security vendor; cross-sell unlocked 2x ARR in 6 months.",
        created_at: "2025-04-12T09:00:00Z",
    },
    SeedEntry {
        title: "ESG Data Marketplace – Strategic Investor",
        deal_type: "Capital Raising",
        sector: "Climate Tech",
        deal_size: "$10M – $12M",
        status: "Pending",
        description: "Marketplace connecting corporates and suppliers; seeking strategic with distribution.",
        created_at: "2025-04-08T09:00:00Z",
    },
    SeedEntry {
        title: "FoodTech Co-Manufacturing Expansion",
        deal_type: "Project Finance",
        sector: "Consumer",
        deal_size: "$35M CapEx",
        status: "Active",
        description: "Greenfield co-man facility to meet retail demand; anchored by multi-year supply contracts.",
        created_at: "2025-04-02T09:00:00Z",
    },
    SeedEntry {
        title: "Telematics Platform – Carve-Out",
        deal_type: "Carve-Out / Divestiture",
        sector: "Industrial Tech",
        deal_size: "$70M – $95M",
        status: "Active",
        description: "Corporate carve-out of non-core telematics division with valuable OEM integrations.",
        created_at: "2025-03-27T09:00:00Z",
    },
    SeedEntry {
        title: "Green Hydrogen EPC Consortium",
        deal_type: "Consortium / JV",
        sector: "Energy",
        deal_size: "$150M+ program",
        status: "Pending",
        description: "EPC consortium formation to bid on two 20MW electrolyzer projects in MENA.",
        created_at: "2025-03-20T09:00:00Z",
    },
    SeedEntry {
        title: "AI Underwriting Platform – Strategic Investor",
        deal_type: "Strategic Partnerships",
        sector: "Financial Services",
        deal_size: "$25M",
        status: "Active",
        description: "ML underwriting API for insurers; seeking strategic capacity partners.",
        created_at: "2025-02-12T09:00:00Z",
    },
    SeedEntry {
        title: "Vertical Farming Roll-Up",
        deal_type: "Buy-Side M&A",
        sector: "AgriTech",
        deal_size: "$50M program",
        status: "Pending",
        description: "PE sponsor acquiring regional vertical farming operators for scale efficiencies.",
        created_at: "2025-02-01T09:00:00Z",
    },
    SeedEntry {
        title: "Green Data Centre Development",
        deal_type: "Project Finance",
        sector: "Infrastructure",
        deal_size: "$200M CapEx",
        status: "Active",
        description: "Renewable-powered data centre operator raising project equity.",
        created_at: "2025-01-25T09:00:00Z",
    },
    SeedEntry {
        title: "Telehealth Platform Expansion",
        deal_type: "Capital Raising",
        sector: "Healthcare",
        deal_size: "$15M – $20M",
        status: "Active",
        description: "Digital clinic network raising funds for chronic care expansion.",
        created_at: "2025-01-18T09:00:00Z",
    },
    SeedEntry {
        title: "Retail Marketplace Consolidation",
        deal_type: "Buy-Side M&A",
        sector: "Consumer",
        deal_size: "$90M program",
        status: "Pending",
        description: "Aggregator acquiring D2C marketplaces for logistics and payments integration.",
        created_at: "2025-01-02T09:00:00Z",
    },
    SeedEntry {
        title: "Clean Hydrogen Startup – Seed Round",
        deal_type: "Capital Raising",
        sector: "Climate Tech",
        deal_size: "$5M Seed",
        status: "Active",
        description: "Hydrogen catalyst tech for industrial decarbonisation.",
        created_at: "2024-12-20T09:00:00Z",
    },
    SeedEntry {
        title: "EV Fleet Financing Platform",
        deal_type: "Strategic Partnership",
        sector: "Energy",
        deal_size: "$25M Facility",
        status: "Active",
        description: "EV leasing and SaaS platform partnering with financiers for expansion.",
        created_at: "2024-12-05T09:00:00Z",
    },
    SeedEntry {
        title: "MedTech Imaging Device Exit",
        deal_type: "Sell-Side M&A",
        sector: "Healthcare",
        deal_size: "$45M (closed)",
        status: "Closed",
        description: "Imaging device IP sold to US diagnostics group.",
        created_at: "2024-11-15T09:00:00Z",
    },
    SeedEntry {
        title: "Cybersecurity Roll-Up – APAC",
        deal_type: "Buy-Side M&A",
        sector: "Technology",
        deal_size: "$150M program",
        status: "Active",
        description: "Sponsor-backed program acquiring cybersecurity MSPs across APAC.",
        created_at: "2024-11-01T09:00:00Z",
    },
    SeedEntry {
        title: "Agri Drone Analytics Platform",
        deal_type: "Capital Raising",
        sector: "AgriTech",
        deal_size: "$10M Series A",
        status: "Pending",
        description: "Drone imagery analytics for yield optimization.",
        created_at: "2024-10-20T09:00:00Z",
    },
    SeedEntry {
        title: "Digital Wealth Platform – Series C",
        deal_type: "Capital Raising",
        sector: "Financial Services",
        deal_size: "$60M",
        status: "Active",
        description: "Australia-based robo-advisor expanding to Asia with institutional backing.",
        created_at: "2025-07-10T09:00:00Z",
    },
    SeedEntry {
        title: "AI Defence Systems Integration",
        deal_type: "Sell-Side M&A",
        sector: "Defence Tech",
        deal_size: "$75M – $90M",
        status: "Active",
        description: "AI-enabled situational awareness provider exploring strategic acquisition.",
        created_at: "2025-06-30T09:00:00Z",
    },
    SeedEntry {
        title: "Smart Grid Battery Network",
        deal_type: "Project Finance",
        sector: "Energy",
        deal_size: "$220M CapEx",
        status: "Pending",
        description: "Distributed battery storage developer raising project equity across NSW and VIC.",
        created_at: "2025-06-15T09:00:00Z",
    },
    SeedEntry {
        title: "Agribusiness SaaS – Series A",
        deal_type: "Capital Raising",
        sector: "AgriTech",
        deal_size: "$15M",
        status: "Active",
        description: "Farm analytics and credit scoring platform raising growth funding for APAC.",
        created_at: "2025-06-01T09:00:00Z",
    },
    SeedEntry {
        title: "Healthcare AI Diagnostics JV",
        deal_type: "Joint Venture",
        sector: "Healthcare",
        deal_size: "$50M JV",
        status: "Pending",
        description: "Joint venture to deploy AI radiology diagnostics across regional hospitals.",
        created_at: "2025-05-22T09:00:00Z",
    },
    SeedEntry {
        title: "PropTech Platform – Series B",
        deal_type: "Capital Raising",
        sector: "Property Tech",
        deal_size: "$25M",
        status: "Active",
        description: "Property management SaaS automating tenant payments and compliance workflows.",
        created_at: "2025-05-15T09:00:00Z",
    },
    SeedEntry {
        title: "Digital Bank Core System Sale",
        deal_type: "Sell-Side M&A",
        sector: "Technology",
        deal_size: "$65M (negotiating)",
        status: "Pending",
        description: "Core banking infrastructure provider fielding acquisition offers from global vendors.",
        created_at: "2025-05-10T09:00:00Z",
    },
    SeedEntry {
        title: "Recycling & Waste Processing Expansion",
        deal_type: "Project Finance",
        sector: "Infrastructure",
        deal_size: "$80M CapEx",
        status: "Active",
        description: "New materials recovery facilities in VIC and QLD seeking debt and equity partners.",
        created_at: "2025-04-25T09:00:00Z",
    },
    SeedEntry {
        title: "AI Logistics Optimisation Startup",
        deal_type: "Capital Raising",
        sector: "Logistics",
        deal_size: "$9M – $12M",
        status: "Active",
        description: "Route and warehouse AI engine improving fleet utilization by 25%.",
        created_at: "2025-04-18T09:00:00Z",
    },
    SeedEntry {
        title: "EdTech Microlearning App – Seed+",
        deal_type: "Capital Raising",
        sector: "Education",
        deal_size: "$3M – $5M",
        status: "Active",
        description: "Microlearning platform for universities expanding into Asia-Pacific.",
        created_at: "2025-04-10T09:00:00Z",
    },
    SeedEntry {
        title: "Data Centre Cooling JV",
        deal_type: "Joint Venture",
        sector: "Infrastructure",
        deal_size: "$100M JV",
        status: "Pending",
        description: "Engineering partnership for sustainable immersion cooling systems in hyperscale data centres.",
        created_at: "2025-04-01T09:00:00Z",
    },
    SeedEntry {
        title: "Luxury Beverage Brand Partial Sale",
        deal_type: "Secondary / Partial Exit",
        sector: "Consumer",
        deal_size: "$28M",
        status: "Pending",
        description: "Australian-owned premium spirit brand seeking minority investor for APAC expansion.",
        created_at: "2025-03-22T09:00:00Z",
    },
    SeedEntry {
        title: "Marine Renewable Energy Project",
        deal_type: "Project Finance",
        sector: "Energy",
        deal_size: "$180M CapEx",
        status: "Active",
        description: "Wave energy pilot projects targeting commercial-scale deployment off WA coast.",
        created_at: "2025-03-10T09:00:00Z",
    },
    SeedEntry {
        title: "AI Chip Design Platform – Series B",
        deal_type: "Capital Raising",
        sector: "Technology",
        deal_size: "$40M – $55M",
        status: "Active",
        description: "Custom silicon automation tools enabling faster edge AI deployment across robotics and automotive.",
        created_at: "2025-07-14T09:00:00Z",
    },
    SeedEntry {
        title: "Defence-Grade Drone Avionics Exit",
        deal_type: "Sell-Side M&A",
        sector: "Defence Tech",
        deal_size: "$120M – $150M",
        status: "Active",
        description: "Critical flight control systems with NATO certifications; receiving bids from Tier 1 contractors.",
        created_at: "2025-07-13T09:00:00Z",
    },
    SeedEntry {
        title: "Oncology Data Exchange – Series C",
        deal_type: "Capital Raising",
        sector: "Healthcare",
        deal_size: "$85M",
        status: "Pending",
        description: "Interoperability network accelerating clinical trials recruitment with pharma sponsors onboard.",
        created_at: "2025-07-12T09:00:00Z",
    },
    SeedEntry {
        title: "Solar O&M Platform Roll-Up",
        deal_type: "Buy-Side M&A",
        sector: "Energy",
        deal_size: "$150M program",
        status: "Active",
        description: "PE-backed platform targeting fragmented solar maintenance operators to build national footprint.",
        created_at: "2025-07-11T09:00:00Z",
    },
    SeedEntry {
        title: "Advanced EV Battery Recycling",
        deal_type: "Project Finance",
        sector: "Climate Tech",
        deal_size: "$200M CapEx",
        status: "Active",
        description: "Hydrometallurgical facility processing lithium battery waste for OEM recovery programs.",
        created_at: "2025-07-10T09:00:00Z",
    },
    SeedEntry {
        title: "FinCrime Risk Intelligence JV",
        deal_type: "Joint Venture",
        sector: "Financial Services",
        deal_size: "$30M JV",
        status: "Pending",
        description: "Bank-led data consortium forming shared KYC and AML AI capabilities across SEA.",
        created_at: "2025-07-08T09:00:00Z",
    },
    SeedEntry {
        title: "Precision CNC Contract Manufacturer Exit",
        deal_type: "Sell-Side M&A",
        sector: "Manufacturing",
        deal_size: "$45M – $60M",
        status: "Active",
        description: "Aviation-certified machining supplier with backlog visibility and >20% EBITDA margins.",
        created_at: "2025-07-07T09:00:00Z",
    },
    SeedEntry {
        title: "Healthcare Scheduling SaaS – Series A",
        deal_type: "Capital Raising",
        sector: "Healthcare",
        deal_size: "$18M – $22M",
        status: "Active",
        description: "Automated clinician rostering tool with deep hospital integrations and EU expansion.",
        created_at: "2025-07-06T09:00:00Z",
    },
    SeedEntry {
        title: "AI Border Security System",
        deal_type: "Strategic Partnerships",
        sector: "Defence Tech",
        deal_size: "$75M Technology Program",
        status: "Active",
        description: "Autonomous surveillance towers and analytics; seeking deployment partners globally.",
        created_at: "2025-07-05T09:00:00Z",
    },
    SeedEntry {
        title: "Hydrogen Refuelling Infrastructure JV",
        deal_type: "Consortium / JV",
        sector: "Energy",
        deal_size: "$260M JV",
        status: "Pending",
        description: "Consortium forming to roll out heavy-fleet hydrogen stations across freight corridors.",
        created_at: "2025-07-04T09:00:00Z",
    },
    SeedEntry {
        title: "Banking-as-a-Service Exit",
        deal_type: "Sell-Side M&A",
        sector: "Financial Services",
        deal_size: "$90M – $110M",
        status: "Pending",
        description: "Reg-compliant embedded banking platform with multi-market licensing.",
        created_at: "2025-07-03T09:00:00Z",
    },
    SeedEntry {
        title: "Smart Factory Robotics Distributor",
        deal_type: "Buy-Side M&A",
        sector: "Manufacturing",
        deal_size: "$70M Program",
        status: "Active",
        description: "Industrial automation roll-up targeting high-margin regional integrators.",
        created_at: "2025-07-02T09:00:00Z",
    },
    SeedEntry {
        title: "Climate Insurance Parametrics",
        deal_type: "Capital Raising",
        sector: "Climate Tech",
        deal_size: "$25M – $35M",
        status: "Active",
        description: "Weather-indexed insurance platform scaling with reinsurance backers.",
        created_at: "2025-07-01T09:00:00Z",
    },
    SeedEntry {
        title: "Hospital Command Centre AI – Series B",
        deal_type: "Capital Raising",
        sector: "Healthcare",
        deal_size: "$50M",
        status: "Pending",
        description: "Real-time capacity AI deployed across 12 health networks improving ED throughput.",
        created_at: "2025-06-30T09:00:00Z",
    },
    SeedEntry {
        title: "GPU Hosting Provider – Strategic Buyout",
        deal_type: "Sell-Side M&A",
        sector: "Technology",
        deal_size: "$150M – $200M",
        status: "Active",
        description: "Data centre GPU clusters for model training; hyperscaler interest.",
        created_at: "2025-06-29T09:00:00Z",
    },
    SeedEntry {
        title: "Neobank Credit Expansion Facility",
        deal_type: "Strategic Partnerships",
        sector: "Financial Services",
        deal_size: "$75M Facility",
        status: "Active",
        description: "Digital bank forming strategic credit warehouse with institutional lenders.",
        created_at: "2025-06-28T09:00:00Z",
    },
    SeedEntry {
        title: "Naval Composite Structures Acquisition",
        deal_type: "Buy-Side M&A",
        sector: "Defence Tech",
        deal_size: "$95M Program",
        status: "Active",
        description: "Acquiring advanced composite suppliers for navy and aerospace platforms.",
        created_at: "2025-06-27T09:00:00Z",
    },
    SeedEntry {
        title: "Waste-to-Fuel Refinery",
        deal_type: "Project Finance",
        sector: "Energy",
        deal_size: "$240M CapEx",
        status: "Pending",
        description: "Advanced pyrolysis for SAF feedstock with contracted offtake agreements.",
        created_at: "2025-06-26T09:00:00Z",
    },
    SeedEntry {
        title: "IoT Security Platform – Series A+",
        deal_type: "Capital Raising",
        sector: "Technology",
        deal_size: "$22M – $28M",
        status: "Active",
        description: "Device identity and anomaly detection stack for regulated industries.",
        created_at: "2025-06-25T09:00:00Z",
    },
    SeedEntry {
        title: "Industrial ERP Cloud Exit",
        deal_type: "Sell-Side M&A",
        sector: "Manufacturing",
        deal_size: "$55M – $65M",
        status: "Pending",
        description: "Legacy ERP modernization platform with >95% net retention.",
        created_at: "2025-06-24T09:00:00Z",
    },
    SeedEntry {
        title: "AI Claim Processing JV",
        deal_type: "Strategic Partnerships",
        sector: "Financial Services",
        deal_size: "$50M JV",
        status: "Active",
        description: "Automated claims adjudication with insurers as go-to-market partners.",
        created_at: "2025-06-23T09:00:00Z",
    },
    SeedEntry {
        title: "Digital Therapeutics Roll-Out",
        deal_type: "Capital Raising",
        sector: "Healthcare",
        deal_size: "$30M – $40M",
        status: "Active",
        description: "Chronic condition DTx expanding reimbursement in US and UK.",
        created_at: "2025-06-22T09:00:00Z",
    },
    SeedEntry {
        title: "Industrial Drone Solutions Exit",
        deal_type: "Sell-Side M&A",
        sector: "Industrial Tech",
        deal_size: "$60M – $75M",
        status: "Pending",
        description: "Automated inspections across mining and utilities; >300 enterprise customers.",
        created_at: "2025-06-21T09:00:00Z",
    },
    SeedEntry {
        title: "Aged Care Facilities Upgrade",
        deal_type: "Project Finance",
        sector: "Healthcare",
        deal_size: "$180M CapEx",
        status: "Active",
        description: "PPP-backed upgrade of aged care facilities with ESG-linked financing.",
        created_at: "2025-06-20T09:00:00Z",
    },
    SeedEntry {
        title: "Floating Wind Engineering IPO Prep",
        deal_type: "Capital Raising",
        sector: "Energy",
        deal_size: "$95M Pre-IPO",
        status: "Pending",
        description: "Offshore wind foundation engineering specialist scaling into APAC.",
        created_at: "2025-06-19T09:00:00Z",
    },
    SeedEntry {
        title: "GenAI Legal Ops Exit",
        deal_type: "Sell-Side M&A",
        sector: "Technology",
        deal_size: "$85M – $110M",
        status: "Active",
        description: "Contract intelligence trained on 5M legal docs; strategic offers received.",
        created_at: "2025-06-18T09:00:00Z",
    },
    SeedEntry {
        title: "Food Packaging Automation Roll-Up",
        deal_type: "Buy-Side M&A",
        sector: "Manufacturing",
        deal_size: "$120M Program",
        status: "Active",
        description: "Consolidating robotics-based packaging solution providers.",
        created_at: "2025-06-17T09:00:00Z",
    },
    SeedEntry {
        title: "EV Charging Payment JV",
        deal_type: "Joint Venture",
        sector: "Energy",
        deal_size: "$60M JV",
        status: "Pending",
        description: "Payments rails integrated into multi-operator charging networks.",
        created_at: "2025-06-16T09:00:00Z",
    },
    SeedEntry {
        title: "Climate Sensor Network",
        deal_type: "Capital Raising",
        sector: "Climate Tech",
        deal_size: "$20M – $25M",
        status: "Active",
        description: "High-density environmental sensors for city infrastructure analytics.",
        created_at: "2025-06-15T09:00:00Z",
    },
    SeedEntry {
        title: "ICU Device Connectivity Exit",
        deal_type: "Sell-Side M&A",
        sector: "Healthcare",
        deal_size: "$70M – $90M",
        status: "Pending",
        description: "Bedside data platform reducing alarms by 45%; OEM strategic interest.",
        created_at: "2025-06-14T09:00:00Z",
    },
    SeedEntry {
        title: "Asset Tokenization Platform",
        deal_type: "Capital Raising",
        sector: "Financial Services",
        deal_size: "$28M – $35M",
        status: "Active",
        description: "Digitizing alternative fund subscriptions with regulatory approvals.",
        created_at: "2025-06-13T09:00:00Z",
    },
    SeedEntry {
        title: "Space Communications Acquisition",
        deal_type: "Buy-Side M&A",
        sector: "Defence Tech",
        deal_size: "$130M Program",
        status: "Active",
        description: "Secure satcom providers consolidating LEO service coverage.",
        created_at: "2025-06-12T09:00:00Z",
    },
    SeedEntry {
        title: "Synthetic Fuels Project",
        deal_type: "Project Finance",
        sector: "Energy",
        deal_size: "$300M CapEx",
        status: "Pending",
        description: "Electrofuel production with offtake interest from airlines.",
        created_at: "2025-06-11T09:00:00Z",
    },
    SeedEntry {
        title: "Zero-Carbon Mining Solutions",
        deal_type: "Strategic Partnerships",
        sector: "Climate Tech",
        deal_size: "$55M Initiative",
        status: "Active",
        description: "Battery-electric fleet conversions in partnership with mining groups.",
        created_at: "2025-06-10T09:00:00Z",
    },
    SeedEntry {
        title: "AI Commerce Platform Exit",
        deal_type: "Sell-Side M&A",
        sector: "Technology",
        deal_size: "$95M (negotiating)",
        status: "Active",
        description: "Personalization engine with omni-channel retailers in 15 markets.",
        created_at: "2025-06-09T09:00:00Z",
    },
    SeedEntry {
        title: "Regional Grid Interconnect PPP",
        deal_type: "Public-Private Partnership",
        sector: "Infrastructure",
        deal_size: "$400M CapEx",
        status: "Pending",
        description: "Grid upgrade enabling renewables integration across state borders.",
        created_at: "2025-06-08T09:00:00Z",
    },
    SeedEntry {
        title: "Enterprise Robotics Integration",
        deal_type: "Capital Raising",
        sector: "Manufacturing",
        deal_size: "$32M – $45M",
        status: "Active",
        description: "Full-stack robotics automation with major industrial reference sites.",
        created_at: "2025-06-07T09:00:00Z",
    },
    SeedEntry {
        title: "AI Shipyard Automation Exit",
        deal_type: "Sell-Side M&A",
        sector: "Defence Tech",
        deal_size: "$140M – $160M",
        status: "Pending",
        description: "Robotic welding and inspection tech for naval shipbuilding yards.",
        created_at: "2025-06-06T09:00:00Z",
    },
    SeedEntry {
        title: "Smart Packaging Sustainability JV",
        deal_type: "Joint Venture",
        sector: "Consumer",
        deal_size: "$50M JV",
        status: "Active",
        description: "Reusable packaging systems partnering with major FMCG suppliers.",
        created_at: "2025-06-05T09:00:00Z",
    },
    SeedEntry {
        title: "AI Marketing Platform Exit",
        deal_type: "Sell-Side M&A",
        sector: "Technology",
        deal_size: "$45M (closed)",
        status: "Closed",
        description: "Acquisition by global MarTech company completed successfully in Q2.",
        created_at: "2025-02-01T09:00:00Z",
    },
    SeedEntry {
        title: "Regional Hospital PPP",
        deal_type: "Public-Private Partnership",
        sector: "Infrastructure",
        deal_size: "$300M CapEx",
        status: "Pending",
        description: "Consortium bid for regional healthcare infrastructure upgrade project.",
        created_at: "2025-02-15T09:00:00Z",
    },
];

//! netgen-site: content service for the netgen brokerage site.
//!
//! Single-binary Tokio application that:
//! 1. Renders the seed catalogue instantly
//! 2. Refreshes mandates from the hosted backend in the background
//! 3. Applies the interactive sector/status filters
//! 4. Assembles home-page content with fixed fallbacks
//! 5. Accepts contact-form submissions

mod config;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use common::{ContactSubmission, Mandate, SiteConfig, StatusKind};
use content::{
    fallback_featured_mandate, fallback_services, fallback_testimonials, featured_with_fallback,
    new_shared_listing, seed_mandates, services_with_fallback, spawn_refresh,
    testimonials_with_fallback, ListingState, SectorFilter, StatusFilter, STATUS_OPTIONS,
};
use supabase_client::SupabaseRestClient;

/// netgen brokerage content service
#[derive(Parser)]
#[command(name = "netgen-site", about = "netgen brokerage content service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the portfolio listing with optional filters.
    Portfolio {
        /// Sector filter: "All" or an exact sector name.
        #[arg(long, default_value = "All")]
        sector: String,

        /// Status filter: "Any", "Active", "Pending", or "Closed".
        #[arg(long, default_value = "Any")]
        status: String,
    },

    /// Render the home-page content sections.
    Home,

    /// Render the full services page.
    Services,

    /// Submit a contact-form message.
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long, default_value = "")]
        message: String,

        /// Mandate title this inquiry is about; pre-fills the message
        /// and tags the submission as a portfolio inquiry.
        #[arg(long)]
        regarding: Option<String>,
    },

    /// Just probe the backend and exit.
    CheckBackend,
}

#[tokio::main]
async fn main() {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "netgen_site=info,supabase_client=info,content=info".into()),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    // Load configuration.
    let cfg = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if cfg.backend.is_configured() {
        info!("Backend: {}", cfg.backend.url);
    } else {
        info!("Backend: not configured — running from seed content only");
    }

    match cli.command {
        Command::Portfolio { sector, status } => run_portfolio(&cfg, &sector, &status).await,
        Command::Home => run_home(&cfg).await,
        Command::Services => run_services(&cfg).await,
        Command::Contact {
            name,
            email,
            phone,
            company,
            message,
            regarding,
        } => run_contact(&cfg, name, email, phone, company, message, regarding).await,
        Command::CheckBackend => run_check_backend(&cfg).await,
    }
}

/// Build a client only when the backend credentials are present.
fn backend_client(cfg: &SiteConfig) -> Option<SupabaseRestClient> {
    cfg.backend
        .is_configured()
        .then(|| SupabaseRestClient::new(&cfg.backend))
}

// ── Commands ────────────────────────────────────────────────────────

async fn run_portfolio(cfg: &SiteConfig, sector: &str, status: &str) {
    let seed = seed_mandates();
    info!("Rendered {} seed mandates", seed.len());

    let mut state = ListingState::new(seed);
    state.set_sector(SectorFilter::parse(sector));
    state.set_status(StatusFilter::parse(status));

    let shared = new_shared_listing(state);
    if let Some(client) = backend_client(cfg) {
        info!("Refreshing mandates from backend...");
        spawn_refresh(shared.clone(), Arc::new(client)).settled().await;
    }

    let listing = shared.read().await;
    let visible = listing.visible();

    println!("Sectors: {}", listing.sectors().join(" | "));
    println!("Statuses: {}", STATUS_OPTIONS.join(" | "));
    println!(
        "Filters: sector={}, status={} ({} active)",
        listing.sector(),
        listing.status(),
        listing.active_filter_count()
    );
    println!("Showing {} of {} mandates", visible.len(), listing.total());
    println!();

    if visible.is_empty() {
        println!("No mandates found — try adjusting your filters.");
        return;
    }

    for mandate in visible {
        print_mandate_card(mandate);
    }
}

async fn run_home(cfg: &SiteConfig) {
    let client = backend_client(cfg);

    let featured = match &client {
        Some(c) => {
            featured_with_fallback(c.featured_mandates(cfg.listing.featured_mandate_limit).await)
        }
        None => vec![fallback_featured_mandate()],
    };
    let testimonials = match &client {
        Some(c) => {
            testimonials_with_fallback(c.featured_testimonials(cfg.listing.testimonial_limit).await)
        }
        None => fallback_testimonials(),
    };
    let services = match &client {
        Some(c) => {
            services_with_fallback(c.list_services(Some(cfg.listing.home_service_limit)).await)
        }
        None => fallback_services(),
    };
    // The trust bar has no fixed copy — it simply stays empty.
    let companies = match &client {
        Some(c) => c.trusted_companies().await.unwrap_or_else(|e| {
            warn!("trusted companies fetch failed: {}", e);
            Vec::new()
        }),
        None => Vec::new(),
    };

    println!("── Featured Mandates ──────────────────────────────");
    println!();
    for mandate in &featured {
        print_mandate_card(mandate);
    }

    println!("── What Our Clients Say ───────────────────────────");
    println!();
    for testimonial in &testimonials {
        let stars = "★".repeat(testimonial.rating.clamp(0, 5) as usize);
        println!("{} {}", stars, testimonial.content);
        println!(
            "    — {}, {}",
            testimonial.client_name, testimonial.client_role
        );
        println!();
    }

    println!("── Our Services ───────────────────────────────────");
    println!();
    for service in &services {
        println!("  {} — {}", service.title, service.short_description);
    }

    if !companies.is_empty() {
        println!();
        println!(
            "Trusted by: {}",
            companies
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(" · ")
        );
    }
}

async fn run_services(cfg: &SiteConfig) {
    let services = match backend_client(cfg) {
        Some(client) => services_with_fallback(client.list_services(None).await),
        None => fallback_services(),
    };

    println!("── Services ───────────────────────────────────────");
    println!();
    for service in &services {
        println!("{}", service.title);
        let description = if service.full_description.is_empty() {
            &service.short_description
        } else {
            &service.full_description
        };
        println!("    {}", description);
        println!();
    }
}

async fn run_contact(
    cfg: &SiteConfig,
    name: String,
    email: String,
    phone: Option<String>,
    company: Option<String>,
    message: String,
    regarding: Option<String>,
) {
    let Some(client) = backend_client(cfg) else {
        error!("Contact submissions need a configured backend (set SUPABASE_URL and SUPABASE_ANON_KEY)");
        std::process::exit(1);
    };

    let mut submission = ContactSubmission {
        name,
        email,
        phone,
        company,
        message,
        submission_type: None,
        portfolio_item: None,
    };

    if let Some(title) = regarding {
        submission.message = format!(
            "I would like more information about: {}\n\n{}",
            title, submission.message
        );
        submission.submission_type = Some("portfolio_inquiry".into());
        submission.portfolio_item = Some(title);
    }

    if submission.name.trim().is_empty()
        || submission.email.trim().is_empty()
        || submission.message.trim().is_empty()
    {
        error!("name, email, and a message are required");
        std::process::exit(1);
    }

    match client.submit_contact(&submission).await {
        Ok(()) => info!("✅ Message sent — the team will be in touch shortly."),
        Err(e) => {
            error!("❌ Failed to send message: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run_check_backend(cfg: &SiteConfig) {
    let Some(client) = backend_client(cfg) else {
        error!("Backend not configured (set SUPABASE_URL and SUPABASE_ANON_KEY)");
        std::process::exit(1);
    };

    info!("Running backend check...");
    match client.health_check().await {
        Ok(()) => info!("✅ Backend reachable at {}", cfg.backend.url),
        Err(e) => {
            error!("❌ Backend check failed: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Rendering helpers ───────────────────────────────────────────────

fn status_glyph(mandate: &Mandate) -> &'static str {
    match mandate.status_kind() {
        StatusKind::Active => "●",
        StatusKind::Pending => "◐",
        StatusKind::Closed => "○",
        StatusKind::Other => "◆",
    }
}

fn print_mandate_card(mandate: &Mandate) {
    let status = if mandate.status.is_empty() {
        "Active"
    } else {
        &mandate.status
    };
    println!("{} {} [{}]", status_glyph(mandate), mandate.title, status);
    println!(
        "    {} | {} | Deal size: {}",
        mandate.deal_type, mandate.sector, mandate.deal_size
    );
    if !mandate.description.is_empty() {
        println!("    {}", mandate.description);
    }
    println!();
}

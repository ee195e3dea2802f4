//! Fixed fallback content for the home and services pages.
//!
//! Mirrors the copy shipped with the site so every section still
//! renders when the backend is missing, errors, or has no rows yet.

use common::{parse_timestamp, Mandate, Result, Service, Testimonial};
use tracing::warn;

/// The pinned card appended to the featured-mandate strip.
pub fn fallback_featured_mandate() -> Mandate {
    Mandate {
        id: "manual-1".into(),
        title: "SaaS Platform Seeking Series B".into(),
        deal_type: "Capital Raising".into(),
        sector: "Technology".into(),
        deal_size: "$20M - $30M".into(),
        status: "Active".into(),
        description: "Fast-growing enterprise software company with $15M ARR seeking $25M \
                      Series B to accelerate product development and market expansion across \
                      APAC."
            .into(),
        featured: false,
        created_at: parse_timestamp(None),
    }
}

/// Featured mandates with the pinned fallback card appended.
///
/// Remote rows keep their backend order; on failure or an empty result
/// the fallback card stands alone.
pub fn featured_with_fallback(fetched: Result<Vec<Mandate>>) -> Vec<Mandate> {
    match fetched {
        Ok(mut rows) if !rows.is_empty() => {
            rows.push(fallback_featured_mandate());
            rows
        }
        Ok(_) => vec![fallback_featured_mandate()],
        Err(e) => {
            warn!("featured mandate fetch failed, using fallback card: {}", e);
            vec![fallback_featured_mandate()]
        }
    }
}

/// The three pinned testimonials.
pub fn fallback_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "manual-1".into(),
            client_name: "Sophie Bennett".into(),
            client_role: "Managing Director, Apex Partners".into(),
            content: "The team's professionalism and ability to deliver ahead of schedule \
                      exceeded our expectations. Highly recommend for any growth-focused \
                      business."
                .into(),
            rating: 5,
            featured: false,
            created_at: None,
        },
        Testimonial {
            id: "manual-2".into(),
            client_name: "Marcus Chen".into(),
            client_role: "CEO, TechVenture Solutions".into(),
            content: "Outstanding advisory throughout our Series A. Their network opened doors \
                      we couldn't access on our own, and the deal terms exceeded our targets."
                .into(),
            rating: 5,
            featured: false,
            created_at: None,
        },
        Testimonial {
            id: "manual-3".into(),
            client_name: "Jennifer Walsh".into(),
            client_role: "Founder, Industrial Dynamics Group".into(),
            content: "Invaluable guidance during our acquisition process. Their strategic \
                      insight and negotiation expertise helped us achieve a successful exit \
                      with maximum value."
                .into(),
            rating: 5,
            featured: false,
            created_at: None,
        },
    ]
}

/// Remote testimonials, or the pinned three when unavailable.
pub fn testimonials_with_fallback(fetched: Result<Vec<Testimonial>>) -> Vec<Testimonial> {
    match fetched {
        Ok(rows) if !rows.is_empty() => rows,
        Ok(_) => fallback_testimonials(),
        Err(e) => {
            warn!("testimonial fetch failed, using pinned copy: {}", e);
            fallback_testimonials()
        }
    }
}

/// The four fixed advisory service descriptions.
pub fn fallback_services() -> Vec<Service> {
    vec![
        Service {
            id: "placeholder-1".into(),
            title: "Capital Raising".into(),
            slug: String::new(),
            short_description: "Connect with the right investors to fuel your growth. From \
                                seed to Series C and beyond."
                .into(),
            full_description: "Helping ambitious founders raise capital from institutional \
                               investors who align with their vision."
                .into(),
            icon: "TrendingUp".into(),
            order_index: 1,
            created_at: None,
        },
        Service {
            id: "placeholder-2".into(),
            title: "M&A Advisory".into(),
            slug: String::new(),
            short_description: "Expert guidance through mergers, acquisitions, and strategic \
                                exits with maximum value."
                .into(),
            full_description: "Expert support for mergers, acquisitions, and divestments with \
                               precision and confidentiality."
                .into(),
            icon: "Handshake".into(),
            order_index: 2,
            created_at: None,
        },
        Service {
            id: "placeholder-3".into(),
            title: "Strategic Partnerships".into(),
            slug: String::new(),
            short_description: "Build powerful alliances that accelerate market reach and \
                                unlock new opportunities."
                .into(),
            full_description: "We connect companies with synergistic partners to accelerate \
                               growth and market reach."
                .into(),
            icon: "Users".into(),
            order_index: 3,
            created_at: None,
        },
        Service {
            id: "placeholder-4".into(),
            title: "Market Entry".into(),
            slug: String::new(),
            short_description: "Navigate new markets with confidence through strategic \
                                planning and local expertise."
                .into(),
            full_description: "Seamless entry into new regions with localized strategy, \
                               compliance, and partnerships."
                .into(),
            icon: "Globe".into(),
            order_index: 4,
            created_at: None,
        },
    ]
}

/// Remote services, or the fixed four when unavailable.
pub fn services_with_fallback(fetched: Result<Vec<Service>>) -> Vec<Service> {
    match fetched {
        Ok(rows) if !rows.is_empty() => rows,
        Ok(_) => fallback_services(),
        Err(e) => {
            warn!("service fetch failed, using fixed descriptions: {}", e);
            fallback_services()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Error;

    #[test]
    fn test_featured_appends_fallback_card_to_remote_rows() {
        let remote = vec![Mandate {
            id: "m-1".into(),
            title: "Remote Deal".into(),
            deal_type: "M&A Advisory".into(),
            sector: "Energy".into(),
            deal_size: "$40M".into(),
            status: "Active".into(),
            description: String::new(),
            featured: true,
            created_at: parse_timestamp(Some("2025-06-01T00:00:00Z")),
        }];

        let cards = featured_with_fallback(Ok(remote));
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "Remote Deal");
        assert_eq!(cards[1].id, "manual-1");
    }

    #[test]
    fn test_featured_empty_and_error_both_yield_fallback_only() {
        let from_empty = featured_with_fallback(Ok(Vec::new()));
        let from_error = featured_with_fallback(Err(Error::Http("timeout".into())));
        assert_eq!(from_empty.len(), 1);
        assert_eq!(from_error.len(), 1);
        assert_eq!(from_empty[0].id, "manual-1");
        assert_eq!(from_error[0].id, "manual-1");
    }

    #[test]
    fn test_testimonials_fall_back_as_a_set_of_three() {
        let rows = testimonials_with_fallback(Err(Error::Http("timeout".into())));
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|t| t.rating == 5));
    }

    #[test]
    fn test_testimonials_prefer_remote_rows() {
        let remote = vec![Testimonial {
            id: "t-1".into(),
            client_name: "Ana".into(),
            client_role: "CFO, Example Co".into(),
            content: "Great outcome.".into(),
            rating: 4,
            featured: true,
            created_at: None,
        }];
        let rows = testimonials_with_fallback(Ok(remote));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "t-1");
    }

    #[test]
    fn test_services_fall_back_in_display_order() {
        let rows = services_with_fallback(Ok(Vec::new()));
        assert_eq!(rows.len(), 4);
        let order: Vec<i64> = rows.iter().map(|s| s.order_index).collect();
        assert_eq!(order, vec![1, 2, 3, 4]);
        assert_eq!(rows[0].title, "Capital Raising");
    }
}

//! Starter content
//!
//! A fresh deployment has nothing to edit, so each document kind ships
//! with believable starter fields. The content is plain placeholder copy
//! for a small land development company; every document here passes its
//! kind's built-in schema.

use landsite_core::utils::slugify;
use landsite_core::{ContentDocument, DocumentKind};
use serde_json::{json, Value};
use uuid::Uuid;

/// Starter document for one kind. Collection items come with a freshly
/// minted server id so they can be cached and updated right away.
#[must_use]
pub fn starter_document(kind: DocumentKind) -> ContentDocument {
    let fields = match kind {
        DocumentKind::Home => home_fields(),
        DocumentKind::About => about_fields(),
        DocumentKind::Business => business_fields(),
        DocumentKind::Career => career_fields(),
        DocumentKind::Contact => contact_fields(),
        DocumentKind::Investment => investment_fields(),
        DocumentKind::LandWanted => land_wanted_fields(),
        DocumentKind::Media => media_fields(),
        DocumentKind::SiteSettings => site_settings_fields(),
        DocumentKind::Project => project_fields(),
        DocumentKind::NewsArticle => news_article_fields(),
        DocumentKind::MediaAsset => media_asset_fields(),
        DocumentKind::ContactInquiry => contact_inquiry_fields(),
        DocumentKind::CareerApplication => career_application_fields(),
    };

    let document = ContentDocument::new(kind, fields);
    if kind.is_collection() {
        document.with_id(Uuid::new_v4())
    } else {
        document
    }
}

/// One starter document per kind.
#[must_use]
pub fn starter_documents() -> Vec<ContentDocument> {
    DocumentKind::ALL.into_iter().map(starter_document).collect()
}

fn home_fields() -> Value {
    json!({
        "hero": {
            "headline": "Land and homes, built for the long term",
            "subheadline": "We buy well-located plots and develop them into places people want to stay.",
            "cta_label": "See our projects",
            "cta_url": "https://landsite.example/projects"
        },
        "value_propositions": [
            {
                "local_id": "seed-vp-1",
                "position": 1,
                "title": "Straight answers",
                "description": "Clear timelines and one contact person from first viewing to handover."
            },
            {
                "local_id": "seed-vp-2",
                "position": 2,
                "title": "Local knowledge",
                "description": "Twenty years of buying and developing land in this region."
            },
            {
                "local_id": "seed-vp-3",
                "position": 3,
                "title": "Built to keep",
                "description": "We develop for our own portfolio, so quality is in our interest too."
            }
        ]
    })
}

fn about_fields() -> Value {
    json!({
        "headline": "A family firm with a surveyor's patience",
        "story": "Landsite started with a single plot bought at auction and a conviction that good land deserves a plan measured in decades, not quarters. We still walk every site before we bid on it.",
        "team": [
            {
                "local_id": "seed-team-1",
                "position": 1,
                "name": "Ruth Calloway",
                "role": "Managing Director",
                "photo_url": "https://cdn.landsite.example/team/ruth.jpg"
            },
            {
                "local_id": "seed-team-2",
                "position": 2,
                "name": "Omar Haddad",
                "role": "Head of Development",
                "photo_url": "https://cdn.landsite.example/team/omar.jpg"
            }
        ]
    })
}

fn business_fields() -> Value {
    json!({
        "headline": "What we do",
        "intro": "From raw land to finished neighbourhoods, we cover the whole chain in-house.",
        "services": [
            {
                "local_id": "seed-svc-1",
                "position": 1,
                "title": "Land acquisition",
                "summary": "We evaluate, bid on, and close plots with clean titles and honest surveys."
            },
            {
                "local_id": "seed-svc-2",
                "position": 2,
                "title": "Development",
                "summary": "Planning, permits, and construction management for residential projects."
            },
            {
                "local_id": "seed-svc-3",
                "position": 3,
                "title": "Asset management",
                "summary": "Long-term letting and maintenance of the homes we keep."
            }
        ]
    })
}

fn career_fields() -> Value {
    json!({
        "headline": "Work where the plans become places",
        "intro": "Small teams, real responsibility, and sites you can visit on your lunch break.",
        "benefits": [
            {"local_id": "seed-ben-1", "position": 1, "title": "Profit sharing"},
            {"local_id": "seed-ben-2", "position": 2, "title": "Site-to-office rotation"},
            {"local_id": "seed-ben-3", "position": 3, "title": "Paid certification courses"}
        ],
        "openings": [
            {
                "local_id": "seed-open-1",
                "position": 1,
                "title": "Project engineer",
                "location": "North Ridge office",
                "apply_email": "careers@landsite.example"
            }
        ]
    })
}

fn contact_fields() -> Value {
    json!({
        "headline": "Talk to us about your plot",
        "offices": [
            {
                "local_id": "seed-office-1",
                "position": 1,
                "name": "Head office",
                "address": "14 Quarry Lane, North Ridge",
                "email": "office@landsite.example",
                "phone": "+1 555 0114"
            }
        ],
        "map_url": "https://maps.example.com/landsite-head-office"
    })
}

fn investment_fields() -> Value {
    json!({
        "headline": "Invest alongside us",
        "pitch": "We co-invest in every project we open to partners, and we publish the same quarterly numbers to investors that we read ourselves.",
        "highlights": [
            {"local_id": "seed-hl-1", "position": 1, "title": "Co-investment in every project"},
            {"local_id": "seed-hl-2", "position": 2, "title": "Quarterly open books"},
            {"local_id": "seed-hl-3", "position": 3, "title": "Asset-backed positions"}
        ],
        "contact_email": "invest@landsite.example"
    })
}

fn land_wanted_fields() -> Value {
    json!({
        "headline": "We buy land",
        "intro": "Send us your plot. We reply within a week, with a number or a reason.",
        "criteria": [
            {
                "local_id": "seed-crit-1",
                "position": 1,
                "title": "Half a hectare or more",
                "details": "Smaller plots considered when they adjoin land we already hold."
            },
            {
                "local_id": "seed-crit-2",
                "position": 2,
                "title": "Within 50 km of North Ridge",
                "details": "Our crews and partners work this region; we stay where we are good."
            }
        ],
        "submission_email": "land@landsite.example"
    })
}

fn media_fields() -> Value {
    json!({
        "headline": "Press and media",
        "press_contact": {
            "name": "Mara Ellis",
            "email": "press@landsite.example"
        },
        "press_kit_url": "https://cdn.landsite.example/press/landsite-kit.zip"
    })
}

fn site_settings_fields() -> Value {
    json!({
        "site_name": "Landsite",
        "logo": {
            "url": "https://cdn.landsite.example/brand/logo.svg",
            "alt": "Landsite logotype"
        },
        "navigation": [
            {"local_id": "seed-nav-1", "position": 1, "label": "Projects", "url": "/projects"},
            {"local_id": "seed-nav-2", "position": 2, "label": "About", "url": "/about"},
            {"local_id": "seed-nav-3", "position": 3, "label": "Contact", "url": "/contact"}
        ],
        "footer_columns": [
            {
                "local_id": "seed-foot-1",
                "position": 1,
                "heading": "Company",
                "links": [
                    {"local_id": "seed-fl-1", "position": 1, "label": "About us", "url": "/about"},
                    {"local_id": "seed-fl-2", "position": 2, "label": "Careers", "url": "/careers"}
                ]
            },
            {
                "local_id": "seed-foot-2",
                "position": 2,
                "heading": "Get in touch",
                "links": [
                    {"local_id": "seed-fl-3", "position": 1, "label": "Contact", "url": "/contact"},
                    {"local_id": "seed-fl-4", "position": 2, "label": "Sell us land", "url": "/land-wanted"}
                ]
            }
        ],
        "contact_email": "office@landsite.example"
    })
}

fn project_fields() -> Value {
    let title = "Hilltop Residences";
    json!({
        "title": title,
        "slug": slugify(title),
        "summary": "Forty family homes on the northern ridge, first keys in spring.",
        "location": "North Ridge",
        "status": "under_construction",
        "hero_image_url": "https://cdn.landsite.example/projects/hilltop/hero.jpg",
        "gallery": [
            {
                "local_id": "seed-gal-1",
                "position": 1,
                "url": "https://cdn.landsite.example/projects/hilltop/site.jpg",
                "caption": "The ridge before groundworks"
            }
        ]
    })
}

fn news_article_fields() -> Value {
    let title = "Groundworks begin at Hilltop";
    json!({
        "title": title,
        "slug": slugify(title),
        "excerpt": "Excavators arrived this week; the access road is due before the first frost.",
        "body": "After two seasons of surveys and permits, groundworks at Hilltop Residences started on Monday. The access road comes first, then foundations for the show home block.",
        "status": "published",
        "cover_image_url": "https://cdn.landsite.example/news/hilltop-groundworks.jpg"
    })
}

fn media_asset_fields() -> Value {
    json!({
        "title": "hilltop-aerial.jpg",
        "url": "https://cdn.landsite.example/assets/hilltop-aerial.jpg",
        "alt_text": "Aerial view of the Hilltop site before construction",
        "category": "image"
    })
}

fn contact_inquiry_fields() -> Value {
    json!({
        "full_name": "Dana Imani",
        "email": "dana@example.com",
        "subject": "Plot on Quarry Lane",
        "message": "I own the plot adjoining your head office and would like to discuss a sale.",
        "status": "new"
    })
}

fn career_application_fields() -> Value {
    json!({
        "full_name": "Priya Raman",
        "email": "priya@example.com",
        "position": "Project engineer",
        "resume_url": "https://files.example.com/priya-raman-cv.pdf",
        "status": "received"
    })
}

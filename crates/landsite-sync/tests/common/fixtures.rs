//! Test fixtures and sample data

use landsite_core::{ContentDocument, DocumentKind};
use landsite_store::starter_document;
use serde_json::json;
use uuid::Uuid;

/// Sample content documents for editing flows.
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// Home page carrying exactly one value proposition, ready for
    /// repeatable-group edits.
    pub fn home_with_one_value_proposition() -> ContentDocument {
        ContentDocument::new(
            DocumentKind::Home,
            json!({
                "hero": {
                    "headline": "Land and homes, built for the long term",
                    "subheadline": "Well-located plots, developed patiently.",
                    "cta_url": "https://landsite.example/projects"
                },
                "value_propositions": [
                    {
                        "local_id": "vp-1",
                        "position": 1,
                        "title": "Local knowledge",
                        "description": "Twenty years of buying and developing land in this region."
                    }
                ]
            }),
        )
    }

    /// A project draft that fails validation: every required field blank.
    pub fn blank_project() -> ContentDocument {
        ContentDocument::new(
            DocumentKind::Project,
            json!({
                "title": "",
                "slug": "",
                "summary": "",
                "location": "",
                "status": ""
            }),
        )
    }

    /// A fresh inquiry from the public site, status `new`, already
    /// persisted server-side.
    pub fn open_inquiry() -> ContentDocument {
        starter_document(DocumentKind::ContactInquiry)
    }

    /// A saved project item with a server id.
    pub fn saved_project() -> ContentDocument {
        starter_document(DocumentKind::Project)
    }

    /// A second project, distinguishable from [`Self::saved_project`].
    pub fn second_project() -> ContentDocument {
        ContentDocument::new(
            DocumentKind::Project,
            json!({
                "title": "Quarry Lane Mews",
                "slug": "quarry-lane-mews",
                "summary": "Twelve terraced homes around the old quarry pond.",
                "location": "Quarry Lane",
                "status": "planning"
            }),
        )
        .with_id(Uuid::new_v4())
    }
}

//! Built-in schema catalog
//!
//! One schema per document kind, mirroring the fields the admin forms
//! edit. Singleton pages validate structural content (heroes, link lists,
//! office addresses); collection items additionally carry a `status`
//! workflow field constrained to the values the dashboard understands.

use landsite_core::DocumentKind;
use std::collections::HashMap;

use crate::error::{SchemaError, SchemaResult};
use crate::rules::FieldRule;
use crate::schema::Schema;

/// Registry of validation schemas keyed by document kind.
#[derive(Debug, Clone)]
pub struct SchemaCatalog {
    schemas: HashMap<DocumentKind, Schema>,
}

impl SchemaCatalog {
    /// Build the catalog with the built-in schema for every document kind.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidPattern`] if a built-in pattern fails
    /// to parse.
    pub fn new() -> SchemaResult<Self> {
        let mut catalog = Self::empty();
        for kind in DocumentKind::ALL {
            catalog.register(schema_for(kind)?);
        }
        Ok(catalog)
    }

    /// An empty catalog with no schemas registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            schemas: HashMap::new(),
        }
    }

    /// Register a schema, replacing any previous one for the same kind.
    pub fn register(&mut self, schema: Schema) -> Option<Schema> {
        self.schemas.insert(schema.kind(), schema)
    }

    /// Look up the schema for a kind.
    #[must_use]
    pub fn get(&self, kind: DocumentKind) -> Option<&Schema> {
        self.schemas.get(&kind)
    }

    /// Look up the schema for a kind, failing if none is registered.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownKind`] when the kind has no schema.
    pub fn require(&self, kind: DocumentKind) -> SchemaResult<&Schema> {
        self.schemas
            .get(&kind)
            .ok_or(SchemaError::unknown_kind(kind))
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether no schemas are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

fn schema_for(kind: DocumentKind) -> SchemaResult<Schema> {
    match kind {
        DocumentKind::Home => home(),
        DocumentKind::About => about(),
        DocumentKind::Business => business(),
        DocumentKind::Career => career(),
        DocumentKind::Contact => contact(),
        DocumentKind::Investment => investment(),
        DocumentKind::LandWanted => land_wanted(),
        DocumentKind::Media => media(),
        DocumentKind::SiteSettings => site_settings(),
        DocumentKind::Project => project(),
        DocumentKind::NewsArticle => news_article(),
        DocumentKind::MediaAsset => media_asset(),
        DocumentKind::ContactInquiry => contact_inquiry(),
        DocumentKind::CareerApplication => career_application(),
    }
}

fn one_of(values: &[&str]) -> FieldRule {
    FieldRule::OneOf {
        allowed: values.iter().map(ToString::to_string).collect(),
    }
}

fn home() -> SchemaResult<Schema> {
    Schema::builder(DocumentKind::Home)
        .rule("hero.headline", [FieldRule::Required, FieldRule::MaxLength { max: 160 }])
        .rule("hero.subheadline", [FieldRule::MaxLength { max: 240 }])
        .rule("hero.cta_url", [FieldRule::Url])
        .rule("value_propositions[*].title", [FieldRule::Required])
        .rule(
            "value_propositions[*].description",
            [FieldRule::Required, FieldRule::MaxLength { max: 300 }],
        )
        .build()
}

fn about() -> SchemaResult<Schema> {
    Schema::builder(DocumentKind::About)
        .rule("headline", [FieldRule::Required])
        .rule("story", [FieldRule::Required, FieldRule::MinLength { min: 40 }])
        .rule("team[*].name", [FieldRule::Required])
        .rule("team[*].role", [FieldRule::Required])
        .rule("team[*].photo_url", [FieldRule::Url])
        .build()
}

fn business() -> SchemaResult<Schema> {
    Schema::builder(DocumentKind::Business)
        .rule("headline", [FieldRule::Required])
        .rule("intro", [FieldRule::MaxLength { max: 500 }])
        .rule("services[*].title", [FieldRule::Required])
        .rule(
            "services[*].summary",
            [FieldRule::Required, FieldRule::MaxLength { max: 300 }],
        )
        .build()
}

fn career() -> SchemaResult<Schema> {
    Schema::builder(DocumentKind::Career)
        .rule("headline", [FieldRule::Required])
        .rule("intro", [FieldRule::MaxLength { max: 500 }])
        .rule("benefits[*].title", [FieldRule::Required])
        .rule("openings[*].title", [FieldRule::Required])
        .rule("openings[*].location", [FieldRule::Required])
        .rule("openings[*].apply_email", [FieldRule::Email])
        .build()
}

fn contact() -> SchemaResult<Schema> {
    Schema::builder(DocumentKind::Contact)
        .rule("headline", [FieldRule::Required])
        .rule("offices[*].name", [FieldRule::Required])
        .rule("offices[*].address", [FieldRule::Required])
        .rule("offices[*].email", [FieldRule::Email])
        .rule("map_url", [FieldRule::Url])
        .build()
}

fn investment() -> SchemaResult<Schema> {
    Schema::builder(DocumentKind::Investment)
        .rule("headline", [FieldRule::Required])
        .rule("pitch", [FieldRule::Required, FieldRule::MinLength { min: 40 }])
        .rule("highlights[*].title", [FieldRule::Required])
        .rule("contact_email", [FieldRule::Email])
        .build()
}

fn land_wanted() -> SchemaResult<Schema> {
    Schema::builder(DocumentKind::LandWanted)
        .rule("headline", [FieldRule::Required])
        .rule("criteria[*].title", [FieldRule::Required])
        .rule("criteria[*].details", [FieldRule::MaxLength { max: 300 }])
        .rule("submission_email", [FieldRule::Email])
        .build()
}

fn media() -> SchemaResult<Schema> {
    Schema::builder(DocumentKind::Media)
        .rule("headline", [FieldRule::Required])
        .rule("press_contact.name", [FieldRule::Required])
        .rule("press_contact.email", [FieldRule::Email])
        .rule("press_kit_url", [FieldRule::Url])
        .build()
}

fn site_settings() -> SchemaResult<Schema> {
    Schema::builder(DocumentKind::SiteSettings)
        .rule("site_name", [FieldRule::Required])
        .rule("logo.url", [FieldRule::Url])
        .rule("navigation[*].label", [FieldRule::Required])
        .rule("navigation[*].url", [FieldRule::Required])
        .rule("footer_columns[*].heading", [FieldRule::Required])
        .rule("footer_columns[*].links[*].label", [FieldRule::Required])
        .rule("footer_columns[*].links[*].url", [FieldRule::Required])
        .rule("contact_email", [FieldRule::Email])
        .build()
}

fn project() -> SchemaResult<Schema> {
    Schema::builder(DocumentKind::Project)
        .rule("title", [FieldRule::Required, FieldRule::MaxLength { max: 160 }])
        .rule("slug", [FieldRule::Required])
        .rule("summary", [FieldRule::Required, FieldRule::MaxLength { max: 300 }])
        .rule("location", [FieldRule::Required])
        .rule(
            "status",
            [
                FieldRule::Required,
                one_of(&["planning", "under_construction", "completed"]),
            ],
        )
        .rule("hero_image_url", [FieldRule::Url])
        .rule("gallery[*].url", [FieldRule::Url])
        .rule("gallery[*].caption", [FieldRule::MaxLength { max: 200 }])
        .build()
}

fn news_article() -> SchemaResult<Schema> {
    Schema::builder(DocumentKind::NewsArticle)
        .rule("title", [FieldRule::Required, FieldRule::MaxLength { max: 160 }])
        .rule("slug", [FieldRule::Required])
        .rule("excerpt", [FieldRule::MaxLength { max: 300 }])
        .rule("body", [FieldRule::Required, FieldRule::MinLength { min: 40 }])
        .rule("status", [FieldRule::Required, one_of(&["draft", "published"])])
        .rule("cover_image_url", [FieldRule::Url])
        .build()
}

fn media_asset() -> SchemaResult<Schema> {
    Schema::builder(DocumentKind::MediaAsset)
        .rule("title", [FieldRule::Required])
        .rule("url", [FieldRule::Required, FieldRule::Url])
        .rule("alt_text", [FieldRule::MaxLength { max: 200 }])
        .rule("category", [one_of(&["image", "video", "document"])])
        .build()
}

fn contact_inquiry() -> SchemaResult<Schema> {
    Schema::builder(DocumentKind::ContactInquiry)
        .rule("full_name", [FieldRule::Required])
        .rule("email", [FieldRule::Required, FieldRule::Email])
        .rule("message", [FieldRule::Required])
        .rule(
            "status",
            [FieldRule::Required, one_of(&["new", "in_review", "resolved"])],
        )
        .build()
}

fn career_application() -> SchemaResult<Schema> {
    Schema::builder(DocumentKind::CareerApplication)
        .rule("full_name", [FieldRule::Required])
        .rule("email", [FieldRule::Required, FieldRule::Email])
        .rule("position", [FieldRule::Required])
        .rule("resume_url", [FieldRule::Url])
        .rule(
            "status",
            [
                FieldRule::Required,
                one_of(&["received", "interviewing", "offered", "rejected"]),
            ],
        )
        .build()
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use landsite_core::FieldPath;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_catalog_covers_every_kind() {
        let catalog = SchemaCatalog::new().unwrap();

        assert_eq!(catalog.len(), DocumentKind::ALL.len());
        for kind in DocumentKind::ALL {
            let schema = catalog.require(kind).unwrap();
            assert_eq!(schema.kind(), kind);
            assert!(!schema.rules().is_empty(), "{kind} has no rules");
        }
    }

    #[test]
    fn test_empty_catalog_has_no_schemas() {
        let catalog = SchemaCatalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.get(DocumentKind::Home).is_none());

        let err = catalog.require(DocumentKind::Home).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownKind { kind: DocumentKind::Home }));
    }

    #[test]
    fn test_register_replaces_existing_schema() {
        let mut catalog = SchemaCatalog::empty();

        let first = Schema::builder(DocumentKind::Home)
            .rule("a", [FieldRule::Required])
            .build()
            .unwrap();
        let second = Schema::builder(DocumentKind::Home)
            .rule("b", [FieldRule::Required])
            .build()
            .unwrap();

        assert!(catalog.register(first).is_none());
        assert!(catalog.register(second).is_some());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_site_settings_rejects_bad_logo_url() {
        let catalog = SchemaCatalog::new().unwrap();
        let schema = catalog.require(DocumentKind::SiteSettings).unwrap();

        let report = schema.validate(&json!({
            "site_name": "Landsite",
            "logo": {"url": "not-a-url"}
        }));

        assert_eq!(
            report.message(&FieldPath::parse("logo.url").unwrap()),
            Some("Must be a valid URL")
        );
    }

    #[test]
    fn test_project_status_workflow_values() {
        let catalog = SchemaCatalog::new().unwrap();
        let schema = catalog.require(DocumentKind::Project).unwrap();

        let fields = json!({
            "title": "Hilltop Residences",
            "slug": "hilltop-residences",
            "summary": "Forty family homes on the northern ridge.",
            "location": "North Ridge",
            "status": "under_construction"
        });
        assert!(schema.validate(&fields).is_valid());

        let mut bad = fields.clone();
        bad["status"] = json!("abandoned");
        let report = schema.validate(&bad);
        assert_eq!(
            report.message(&FieldPath::parse("status").unwrap()),
            Some("Must be one of: planning, under_construction, completed")
        );
    }

    #[test]
    fn test_inquiry_requires_contact_details() {
        let catalog = SchemaCatalog::new().unwrap();
        let schema = catalog.require(DocumentKind::ContactInquiry).unwrap();

        let report = schema.validate(&json!({"status": "new"}));

        let failing: Vec<String> = report.iter().map(|(p, _)| p.to_string()).collect();
        assert_eq!(failing, ["full_name", "email", "message"]);
    }
}

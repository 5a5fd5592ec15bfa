//! Core data types for the landsite editing model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Well-known field carrying a document's workflow status (e.g. lead handling).
pub const STATUS_FIELD: &str = "status";

/// Every content document type the admin dashboard edits.
///
/// Singleton kinds hold exactly one document per site (the page editors);
/// collection kinds hold many documents addressed by id (CRUD screens and
/// lead management).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Home page content
    Home,
    /// About page content
    About,
    /// Business page content
    Business,
    /// Careers page content
    Career,
    /// Contact page content
    Contact,
    /// Investment page content
    Investment,
    /// Land wanted page content
    LandWanted,
    /// Media page content
    Media,
    /// Site-wide settings (logo, navigation, footer)
    SiteSettings,
    /// A real-estate project record
    Project,
    /// A news article
    NewsArticle,
    /// A media library asset
    MediaAsset,
    /// A contact form inquiry (lead)
    ContactInquiry,
    /// A career application (lead)
    CareerApplication,
}

impl DocumentKind {
    /// All document kinds, singletons first.
    pub const ALL: [Self; 14] = [
        Self::Home,
        Self::About,
        Self::Business,
        Self::Career,
        Self::Contact,
        Self::Investment,
        Self::LandWanted,
        Self::Media,
        Self::SiteSettings,
        Self::Project,
        Self::NewsArticle,
        Self::MediaAsset,
        Self::ContactInquiry,
        Self::CareerApplication,
    ];

    /// Whether documents of this kind are addressed by per-item id.
    #[must_use]
    pub const fn is_collection(self) -> bool {
        matches!(
            self,
            Self::Project
                | Self::NewsArticle
                | Self::MediaAsset
                | Self::ContactInquiry
                | Self::CareerApplication
        )
    }

    /// Whether exactly one document of this kind exists per site.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        !self.is_collection()
    }

    /// Stable identifier, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Business => "business",
            Self::Career => "career",
            Self::Contact => "contact",
            Self::Investment => "investment",
            Self::LandWanted => "land_wanted",
            Self::Media => "media",
            Self::SiteSettings => "site_settings",
            Self::Project => "project",
            Self::NewsArticle => "news_article",
            Self::MediaAsset => "media_asset",
            Self::ContactInquiry => "contact_inquiry",
            Self::CareerApplication => "career_application",
        }
    }

    /// Human-readable name for notifications and the activity feed.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home page",
            Self::About => "About page",
            Self::Business => "Business page",
            Self::Career => "Careers page",
            Self::Contact => "Contact page",
            Self::Investment => "Investment page",
            Self::LandWanted => "Land wanted page",
            Self::Media => "Media page",
            Self::SiteSettings => "Site settings",
            Self::Project => "Project",
            Self::NewsArticle => "News article",
            Self::MediaAsset => "Media asset",
            Self::ContactInquiry => "Contact inquiry",
            Self::CareerApplication => "Career application",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| crate::Error::Other(format!("unknown document kind: {s}")))
    }
}

/// One editable content payload: a page's content tree or one collection item.
///
/// Documents are replaced whole on save, never patched field by field. The
/// `id` is `None` until the server has persisted the document once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    /// Server-assigned identifier, absent until first persisted
    pub id: Option<Uuid>,

    /// Document type tag
    pub kind: DocumentKind,

    /// Nested field tree (scalars, objects, ordered lists of sub-records)
    pub fields: Value,

    /// When the document was first created
    pub created_at: DateTime<Utc>,

    /// When the document was last saved
    pub updated_at: DateTime<Utc>,
}

impl ContentDocument {
    /// Create a document that has not been persisted yet.
    #[must_use]
    pub fn new(kind: DocumentKind, fields: Value) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            kind,
            fields,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach a server-assigned id.
    #[must_use]
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// The document's workflow status field, if it carries one.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.fields.get(STATUS_FIELD).and_then(Value::as_str)
    }

    /// Best-effort display name, derived from well-known name fields.
    #[must_use]
    pub fn entity_name(&self) -> String {
        const NAME_FIELDS: [&str; 5] = ["title", "name", "headline", "full_name", "subject"];

        for field in NAME_FIELDS {
            if let Some(text) = self.fields.get(field).and_then(Value::as_str) {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    return trimmed.to_string();
                }
            }
        }
        self.kind.label().to_string()
    }
}

/// What a content action did, for the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    /// A new document was persisted
    Created,
    /// An existing document was replaced
    Updated,
    /// A document was removed
    Deleted,
    /// A document's workflow status changed
    StatusChanged,
}

impl fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::StatusChanged => "status changed",
        };
        f.write_str(text)
    }
}

/// One append-only audit record for a create/update/delete/status-change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    /// Entry identifier
    pub id: Uuid,

    /// What happened
    pub action: ActivityAction,

    /// Kind of the affected document
    pub entity_kind: DocumentKind,

    /// Id of the affected document, if it had one
    pub entity_id: Option<Uuid>,

    /// Display name of the affected document
    pub entity_name: String,

    /// Free-text description for the activity feed
    pub description: String,

    /// When the action happened
    pub recorded_at: DateTime<Utc>,
}

impl ActivityLogEntry {
    /// Create an entry with a fresh id and the current timestamp.
    #[must_use]
    pub fn new(
        action: ActivityAction,
        entity_kind: DocumentKind,
        entity_id: Option<Uuid>,
        entity_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            action,
            entity_kind,
            entity_id,
            entity_name: entity_name.into(),
            description: description.into(),
            recorded_at: Utc::now(),
        }
    }

    /// Entry for a newly created document.
    #[must_use]
    pub fn created(document: &ContentDocument) -> Self {
        Self::for_document(ActivityAction::Created, document, "Created")
    }

    /// Entry for a saved update.
    #[must_use]
    pub fn updated(document: &ContentDocument) -> Self {
        Self::for_document(ActivityAction::Updated, document, "Updated")
    }

    /// Entry for a save that changed the document's workflow status.
    #[must_use]
    pub fn status_changed(document: &ContentDocument) -> Self {
        let name = document.entity_name();
        let status = document.status().unwrap_or("unknown");
        let description = format!(
            "Changed {} '{}' status to {status}",
            document.kind.label(),
            crate::utils::excerpt(&name, 80)
        );
        Self::new(
            ActivityAction::StatusChanged,
            document.kind,
            document.id,
            name,
            description,
        )
    }

    /// Entry for a deleted document.
    #[must_use]
    pub fn deleted(kind: DocumentKind, id: Uuid, name: impl Into<String>) -> Self {
        let name = name.into();
        let description = format!(
            "Deleted {} '{}'",
            kind.label(),
            crate::utils::excerpt(&name, 80)
        );
        Self::new(ActivityAction::Deleted, kind, Some(id), name, description)
    }

    fn for_document(action: ActivityAction, document: &ContentDocument, verb: &str) -> Self {
        let name = document.entity_name();
        let label = document.kind.label();
        let description = if document.kind.is_collection() {
            format!("{verb} {label} '{}'", crate::utils::excerpt(&name, 80))
        } else {
            format!("{verb} {label}")
        };
        Self::new(action, document.kind, document.id, name, description)
    }
}

#[cfg(test)]
#[allow(
    clippy::missing_panics_doc,
    clippy::uninlined_format_args,
    clippy::too_many_lines
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_document_kind_string_round_trip() {
        for kind in DocumentKind::ALL {
            let parsed: DocumentKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_document_kind_serde_matches_as_str() {
        for kind in DocumentKind::ALL {
            let serialized = serde_json::to_value(kind).unwrap();
            assert_eq!(serialized, json!(kind.as_str()));

            let deserialized: DocumentKind =
                serde_json::from_value(json!(kind.as_str())).unwrap();
            assert_eq!(deserialized, kind);
        }
    }

    #[test]
    fn test_document_kind_unknown_string() {
        let result = "blog_post".parse::<DocumentKind>();
        assert!(result.is_err());
    }

    #[test]
    fn test_document_kind_partition() {
        let collections = [
            DocumentKind::Project,
            DocumentKind::NewsArticle,
            DocumentKind::MediaAsset,
            DocumentKind::ContactInquiry,
            DocumentKind::CareerApplication,
        ];

        for kind in DocumentKind::ALL {
            assert_eq!(kind.is_collection(), collections.contains(&kind));
            assert_eq!(kind.is_singleton(), !kind.is_collection());
        }
    }

    #[test]
    fn test_document_kind_labels_are_unique() {
        let mut labels: Vec<&str> = DocumentKind::ALL.iter().map(|k| k.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), DocumentKind::ALL.len());
    }

    #[test]
    fn test_content_document_new() {
        let document = ContentDocument::new(DocumentKind::Home, json!({"hero": {}}));

        assert!(document.id.is_none());
        assert_eq!(document.kind, DocumentKind::Home);
        assert_eq!(document.created_at, document.updated_at);
    }

    #[test]
    fn test_content_document_with_id() {
        let id = Uuid::new_v4();
        let document = ContentDocument::new(DocumentKind::Project, json!({})).with_id(id);

        assert_eq!(document.id, Some(id));
    }

    #[test]
    fn test_content_document_status() {
        let document = ContentDocument::new(
            DocumentKind::ContactInquiry,
            json!({"status": "new", "name": "Dana"}),
        );
        assert_eq!(document.status(), Some("new"));

        let document = ContentDocument::new(DocumentKind::Home, json!({"hero": {}}));
        assert_eq!(document.status(), None);

        let document =
            ContentDocument::new(DocumentKind::ContactInquiry, json!({"status": 3}));
        assert_eq!(document.status(), None);
    }

    #[test]
    fn test_entity_name_prefers_title() {
        let document = ContentDocument::new(
            DocumentKind::Project,
            json!({"title": "Riverside Plaza", "name": "ignored"}),
        );
        assert_eq!(document.entity_name(), "Riverside Plaza");
    }

    #[test]
    fn test_entity_name_falls_back_through_candidates() {
        let document = ContentDocument::new(
            DocumentKind::ContactInquiry,
            json!({"full_name": "Dana Imani", "title": "   "}),
        );
        assert_eq!(document.entity_name(), "Dana Imani");
    }

    #[test]
    fn test_entity_name_falls_back_to_label() {
        let document = ContentDocument::new(DocumentKind::About, json!({"sections": []}));
        assert_eq!(document.entity_name(), "About page");
    }

    #[test]
    fn test_content_document_serde_round_trip() {
        let document = ContentDocument::new(
            DocumentKind::NewsArticle,
            json!({"title": "Spring opening", "body": "...", "tags": ["news"]}),
        )
        .with_id(Uuid::new_v4());

        let serialized = serde_json::to_string(&document).unwrap();
        let deserialized: ContentDocument = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, document);
    }

    #[test]
    fn test_activity_action_display() {
        assert_eq!(ActivityAction::Created.to_string(), "created");
        assert_eq!(ActivityAction::Updated.to_string(), "updated");
        assert_eq!(ActivityAction::Deleted.to_string(), "deleted");
        assert_eq!(ActivityAction::StatusChanged.to_string(), "status changed");
    }

    #[test]
    fn test_activity_action_serde() {
        assert_eq!(
            serde_json::to_value(ActivityAction::StatusChanged).unwrap(),
            json!("status_changed")
        );
    }

    #[test]
    fn test_activity_entry_for_singleton_update() {
        let document = ContentDocument::new(DocumentKind::Home, json!({"hero": {}}));
        let entry = ActivityLogEntry::updated(&document);

        assert_eq!(entry.action, ActivityAction::Updated);
        assert_eq!(entry.entity_kind, DocumentKind::Home);
        assert_eq!(entry.entity_id, None);
        assert_eq!(entry.description, "Updated Home page");
    }

    #[test]
    fn test_activity_entry_for_collection_create() {
        let id = Uuid::new_v4();
        let document = ContentDocument::new(
            DocumentKind::Project,
            json!({"title": "Hilltop Residences"}),
        )
        .with_id(id);
        let entry = ActivityLogEntry::created(&document);

        assert_eq!(entry.action, ActivityAction::Created);
        assert_eq!(entry.entity_id, Some(id));
        assert_eq!(entry.entity_name, "Hilltop Residences");
        assert_eq!(entry.description, "Created Project 'Hilltop Residences'");
    }

    #[test]
    fn test_activity_entry_for_status_change() {
        let document = ContentDocument::new(
            DocumentKind::ContactInquiry,
            json!({"full_name": "Dana Imani", "status": "resolved"}),
        )
        .with_id(Uuid::new_v4());
        let entry = ActivityLogEntry::status_changed(&document);

        assert_eq!(entry.action, ActivityAction::StatusChanged);
        assert_eq!(
            entry.description,
            "Changed Contact inquiry 'Dana Imani' status to resolved"
        );
    }

    #[test]
    fn test_activity_entry_for_delete() {
        let id = Uuid::new_v4();
        let entry = ActivityLogEntry::deleted(DocumentKind::MediaAsset, id, "lobby.jpg");

        assert_eq!(entry.action, ActivityAction::Deleted);
        assert_eq!(entry.entity_id, Some(id));
        assert_eq!(entry.description, "Deleted Media asset 'lobby.jpg'");
    }

    #[test]
    fn test_activity_entry_serde_round_trip() {
        let entry = ActivityLogEntry::new(
            ActivityAction::Updated,
            DocumentKind::About,
            None,
            "About page",
            "Updated About page",
        );

        let serialized = serde_json::to_string(&entry).unwrap();
        let deserialized: ActivityLogEntry = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, entry);
    }

    #[test]
    fn test_activity_entries_get_distinct_ids() {
        let document = ContentDocument::new(DocumentKind::Home, json!({}));
        let first = ActivityLogEntry::updated(&document);
        let second = ActivityLogEntry::updated(&document);
        assert_ne!(first.id, second.id);
    }
}

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

use crate::i18n::Language;

pub static GLOBAL_CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::load);
pub static GLOBAL_CONTACT: LazyLock<ContactInfo> = LazyLock::new(ContactInfo::load);

pub const PROJECTS_DOCUMENT: &str = "projects.json";
pub const CONTACT_DOCUMENT: &str = "contact.json";

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content document not found: {0}")]
    MissingDocument(String),
    #[error("content document is not valid UTF-8: {0}")]
    Encoding(String),
    #[error("couldn't parse content: {0}")]
    Parse(String),
    #[error("entry #{index} is malformed: {reason}")]
    MalformedEntry { index: usize, reason: String },
    #[error("project has an empty id")]
    EmptyId,
    #[error("project {id}: {field} is missing a translation")]
    IncompleteText { id: String, field: &'static str },
    #[error("project {id}: {field} has {es} Spanish and {en} English entries")]
    MismatchedBullets {
        id: String,
        field: &'static str,
        es: usize,
        en: usize,
    },
    #[error("duplicate project id: {0}")]
    DuplicateId(String),
}

/// Reads one of the embedded content documents as text.
pub fn embedded_document(name: &str) -> Result<String, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::MissingDocument(name.to_string()))?;
    String::from_utf8(file.data.into()).map_err(|_| ContentError::Encoding(name.to_string()))
}

/// A piece of content in both site languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub es: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(es: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            es: es.into(),
            en: en.into(),
        }
    }

    /// Same text for both languages, used for names and labels that aren't translated.
    pub fn uniform(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            es: text.clone(),
            en: text,
        }
    }

    /// Text for `language`, falling back to Spanish when that field is empty.
    pub fn in_language(&self, language: Language) -> &str {
        match language {
            Language::Es => &self.es,
            Language::En if self.en.is_empty() => &self.es,
            Language::En => &self.en,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.es.trim().is_empty() && !self.en.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "ux-ui")]
    UxUi,
    #[serde(rename = "frontend")]
    Frontend,
    #[serde(rename = "fullstack")]
    Fullstack,
}

impl Category {
    pub fn all() -> [Category; 3] {
        [Category::UxUi, Category::Frontend, Category::Fullstack]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Category::UxUi => "ux-ui",
            Category::Frontend => "frontend",
            Category::Fullstack => "fullstack",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.slug() == slug)
    }

    /// Translation key of the filter button / tag label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Category::UxUi => "projects.filter.uxui",
            Category::Frontend => "projects.filter.frontend",
            Category::Fullstack => "projects.filter.fullstack",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub demo: Option<String>,
    pub github: Option<String>,
    pub behance: Option<String>,
    #[serde(rename = "caseStudy")]
    pub case_study: Option<String>,
}

impl ProjectLinks {
    pub fn is_empty(&self) -> bool {
        self.demo.is_none()
            && self.github.is_none()
            && self.behance.is_none()
            && self.case_study.is_none()
    }

    fn normalized(self) -> Self {
        Self {
            demo: real_link(self.demo),
            github: real_link(self.github),
            behance: real_link(self.behance),
            case_study: real_link(self.case_study),
        }
    }
}

// placeholder "#" hrefs in source data mean "no link yet"
fn real_link(url: Option<String>) -> Option<String> {
    url.map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty() && u != "#")
}

// Some entries carry an image search phrase instead of a path.
fn cover_image(id: &str, image: Option<String>) -> Option<String> {
    let image = image.map(|u| u.trim().to_string()).filter(|u| !u.is_empty())?;
    if image.contains(char::is_whitespace) {
        log::warn!("project {id}: ignoring cover {image:?}, not a url or path");
        return None;
    }
    Some(image)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub url: String,
    pub alt: String,
    pub caption: Option<LocalizedText>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub category: Category,
    pub technologies: Vec<String>,
    pub role: Option<LocalizedText>,
    pub duration: Option<LocalizedText>,
    pub client: Option<LocalizedText>,
    pub year: Option<u16>,
    pub challenges: Vec<LocalizedText>,
    pub solution: Option<LocalizedText>,
    pub outcomes: Vec<LocalizedText>,
    pub links: ProjectLinks,
    pub cover: Option<String>,
    pub gallery: Vec<GalleryImage>,
}

impl Project {
    /// Every localized field of the project, with the name used in validation errors.
    pub fn localized_fields(&self) -> Vec<(&'static str, &LocalizedText)> {
        let mut fields = vec![("title", &self.title), ("description", &self.description)];
        let optional = [
            ("role", &self.role),
            ("duration", &self.duration),
            ("client", &self.client),
            ("solution", &self.solution),
        ];
        fields.extend(
            optional
                .into_iter()
                .filter_map(|(name, text)| text.as_ref().map(|t| (name, t))),
        );
        fields.extend(self.challenges.iter().map(|t| ("challenges", t)));
        fields.extend(self.outcomes.iter().map(|t| ("outcomes", t)));
        fields.extend(
            self.gallery
                .iter()
                .filter_map(|img| img.caption.as_ref().map(|c| ("gallery caption", c))),
        );
        fields
    }

    pub fn is_complete(&self) -> bool {
        self.localized_fields().iter().all(|(_, t)| t.is_complete())
    }
}

// Source data mixes plain strings and bilingual records for the same field.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum RawText {
    Plain(String),
    Localized(LocalizedText),
}

impl From<RawText> for LocalizedText {
    fn from(value: RawText) -> Self {
        match value {
            RawText::Plain(s) => LocalizedText::uniform(s),
            RawText::Localized(t) => t,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum RawBullets {
    Items(Vec<RawText>),
    ByLanguage { es: Vec<String>, en: Vec<String> },
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum RawImage {
    Url(String),
    Captioned {
        url: String,
        #[serde(default)]
        alt: String,
        caption: Option<RawText>,
    },
}

impl From<RawImage> for GalleryImage {
    fn from(value: RawImage) -> Self {
        match value {
            RawImage::Url(url) => GalleryImage {
                url,
                alt: String::new(),
                caption: None,
            },
            RawImage::Captioned { url, alt, caption } => GalleryImage {
                url,
                alt,
                caption: caption.map(Into::into),
            },
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RawProject {
    id: String,
    title: RawText,
    description: RawText,
    category: Category,
    #[serde(default)]
    technologies: Vec<String>,
    role: Option<RawText>,
    duration: Option<RawText>,
    client: Option<RawText>,
    year: Option<u16>,
    challenges: Option<RawBullets>,
    challenge: Option<RawText>,
    solution: Option<RawText>,
    outcomes: Option<RawBullets>,
    results: Option<RawText>,
    links: Option<ProjectLinks>,
    image: Option<String>,
    #[serde(default)]
    additional_images: Vec<RawImage>,
    #[serde(default)]
    images: Vec<RawImage>,
    live_url: Option<String>,
    case_study_url: Option<String>,
}

fn bullets(
    id: &str,
    field: &'static str,
    list: Option<RawBullets>,
    single: Option<RawText>,
) -> Result<Vec<LocalizedText>, ContentError> {
    match (list, single) {
        (Some(RawBullets::Items(items)), _) => Ok(items.into_iter().map(Into::into).collect()),
        (Some(RawBullets::ByLanguage { es, en }), _) => {
            if es.len() != en.len() {
                return Err(ContentError::MismatchedBullets {
                    id: id.to_string(),
                    field,
                    es: es.len(),
                    en: en.len(),
                });
            }
            Ok(es
                .into_iter()
                .zip(en)
                .map(|(es, en)| LocalizedText { es, en })
                .collect())
        }
        (None, Some(text)) => Ok(vec![text.into()]),
        (None, None) => Ok(Vec::new()),
    }
}

impl RawProject {
    fn into_project(self) -> Result<Project, ContentError> {
        let id = self.id.trim().to_string();
        if id.is_empty() {
            return Err(ContentError::EmptyId);
        }
        let challenges = bullets(&id, "challenges", self.challenges, self.challenge)?;
        let outcomes = bullets(&id, "outcomes", self.outcomes, self.results)?;

        let mut links = self.links.unwrap_or_default().normalized();
        links.demo = links.demo.or_else(|| real_link(self.live_url));
        links.case_study = links.case_study.or_else(|| real_link(self.case_study_url));
        let cover = cover_image(&id, self.image);

        let gallery = self
            .images
            .into_iter()
            .chain(self.additional_images)
            .map(GalleryImage::from)
            .filter(|img| !img.url.trim().is_empty())
            .collect();

        let project = Project {
            title: self.title.into(),
            description: self.description.into(),
            category: self.category,
            technologies: self
                .technologies
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            role: self.role.map(Into::into),
            duration: self.duration.map(Into::into),
            client: self.client.map(Into::into),
            year: self.year,
            challenges,
            solution: self.solution.map(Into::into),
            outcomes,
            links,
            cover,
            gallery,
            id,
        };

        if let Some((field, _)) = project
            .localized_fields()
            .into_iter()
            .find(|(_, text)| !text.is_complete())
        {
            return Err(ContentError::IncompleteText {
                id: project.id,
                field,
            });
        }
        Ok(project)
    }
}

/// Parses one project entry from its source JSON, normalizing it to the canonical shape.
pub fn parse_project(value: serde_json::Value) -> Result<Project, ContentError> {
    let raw: RawProject =
        serde_json::from_value(value).map_err(|e| ContentError::Parse(e.to_string()))?;
    raw.into_project()
}

/// The project collection, seeded once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Builds a catalog from already-validated projects, keeping the first of any duplicate ids.
    pub fn new(projects: Vec<Project>) -> (Self, Vec<ContentError>) {
        let mut seen = HashSet::new();
        let mut errors = Vec::new();
        let projects = projects
            .into_iter()
            .filter(|p| {
                if seen.insert(p.id.clone()) {
                    true
                } else {
                    errors.push(ContentError::DuplicateId(p.id.clone()));
                    false
                }
            })
            .collect();
        (Self { projects }, errors)
    }

    /// Parses a projects document. Only a document that isn't a JSON array fails outright;
    /// malformed entries are excluded and reported alongside the catalog.
    pub fn from_json(json: &str) -> Result<(Self, Vec<ContentError>), ContentError> {
        let entries: Vec<serde_json::Value> =
            serde_json::from_str(json).map_err(|e| ContentError::Parse(e.to_string()))?;
        let mut errors = Vec::new();
        let projects = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match parse_project(entry) {
                Ok(p) => Some(p),
                Err(ContentError::Parse(reason)) => {
                    errors.push(ContentError::MalformedEntry { index, reason });
                    None
                }
                Err(e) => {
                    errors.push(e);
                    None
                }
            })
            .collect();
        let (catalog, duplicates) = Self::new(projects);
        errors.extend(duplicates);
        Ok((catalog, errors))
    }

    /// Loads the embedded catalog. Problems are logged once here and never surface at render time.
    pub fn load() -> Self {
        let loaded = embedded_document(PROJECTS_DOCUMENT).and_then(|json| Self::from_json(&json));
        match loaded {
            Ok((catalog, errors)) => {
                for e in errors {
                    log::warn!("excluding project from catalog: {e}");
                }
                log::debug!("loaded {} projects", catalog.len());
                catalog
            }
            Err(e) => {
                log::error!("couldn't load project catalog: {e}");
                Self::default()
            }
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn count_in(&self, category: Category) -> usize {
        self.projects
            .iter()
            .filter(|p| p.category == category)
            .count()
    }

    /// Distinct technologies in first-seen order.
    pub fn technologies(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .flat_map(|p| p.technologies.iter())
            .filter(|t| seen.insert(t.as_str()))
            .map(String::as_str)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub behance: Option<String>,
    pub dribbble: Option<String>,
}

impl ContactInfo {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        serde_json::from_str(json).map_err(|e| ContentError::Parse(e.to_string()))
    }

    pub fn load() -> Self {
        embedded_document(CONTACT_DOCUMENT)
            .and_then(|json| Self::from_json(&json))
            .unwrap_or_else(|e| {
                log::error!("couldn't load contact info: {e}");
                Self::default()
            })
    }

    pub fn mailto(&self) -> Option<String> {
        self.email.as_ref().map(|e| format!("mailto:{e}"))
    }

    /// Social profiles that are set, as (network name, url) pairs in display order.
    pub fn socials(&self) -> Vec<(&'static str, &str)> {
        [
            ("LinkedIn", &self.linkedin),
            ("GitHub", &self.github),
            ("Behance", &self.behance),
            ("Dribbble", &self.dribbble),
        ]
        .into_iter()
        .filter_map(|(name, url)| {
            url.as_deref()
                .filter(|u| !u.trim().is_empty())
                .map(|u| (name, u))
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(id: &str, category: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": { "es": format!("Proyecto {id}"), "en": format!("Project {id}") },
            "description": { "es": "Descripción", "en": "Description" },
            "category": category,
            "technologies": ["Rust", "Leptos"]
        })
    }

    #[test]
    fn test_plain_strings_normalize_to_both_languages() {
        let mut value = entry("plain", "frontend");
        value["title"] = json!("Design System: Pulse");
        value["role"] = json!("Lead Designer");
        let project = parse_project(value).unwrap();
        assert_eq!(project.title, LocalizedText::uniform("Design System: Pulse"));
        assert_eq!(project.role.unwrap().en, "Lead Designer");
    }

    #[test]
    fn test_bullets_keyed_by_language_are_zipped() {
        let mut value = entry("keyed", "ux-ui");
        value["challenges"] = json!({ "es": ["Uno", "Dos"], "en": ["One", "Two"] });
        let project = parse_project(value).unwrap();
        assert_eq!(
            project.challenges,
            vec![LocalizedText::new("Uno", "One"), LocalizedText::new("Dos", "Two")]
        );
    }

    #[test]
    fn test_bullets_keyed_by_language_must_match() {
        let mut value = entry("uneven", "ux-ui");
        value["outcomes"] = json!({ "es": ["Uno", "Dos"], "en": ["One"] });
        let err = parse_project(value).unwrap_err();
        assert_eq!(
            err,
            ContentError::MismatchedBullets {
                id: "uneven".to_string(),
                field: "outcomes",
                es: 2,
                en: 1
            }
        );
    }

    #[test]
    fn test_single_narrative_fields_become_bullets() {
        let mut value = entry("narrative", "fullstack");
        value["challenge"] = json!({ "es": "Reto", "en": "Challenge" });
        value["solution"] = json!({ "es": "Solución", "en": "Solution" });
        value["results"] = json!({ "es": "Resultado", "en": "Result" });
        let project = parse_project(value).unwrap();
        assert_eq!(project.challenges, vec![LocalizedText::new("Reto", "Challenge")]);
        assert_eq!(project.outcomes, vec![LocalizedText::new("Resultado", "Result")]);
        assert_eq!(project.solution, Some(LocalizedText::new("Solución", "Solution")));
    }

    #[test]
    fn test_images_and_links_are_normalized() {
        let mut value = entry("gallery", "frontend");
        value["images"] = json!([{
            "url": "https://img.example/a.jpg",
            "alt": "first",
            "caption": { "es": "Primera", "en": "First" }
        }]);
        value["additionalImages"] = json!(["https://img.example/b.jpg"]);
        value["links"] = json!({ "demo": "#", "github": "https://github.com/x/y" });
        value["liveUrl"] = json!("https://live.example");
        value["image"] = json!("analytics dashboard dark");
        let project = parse_project(value).unwrap();

        assert_eq!(project.gallery.len(), 2);
        assert_eq!(project.gallery[0].alt, "first");
        assert!(project.gallery[1].caption.is_none());
        assert_eq!(project.links.demo.as_deref(), Some("https://live.example"));
        assert_eq!(project.links.github.as_deref(), Some("https://github.com/x/y"));
        assert!(project.links.behance.is_none());
        // image search hints are not urls
        assert!(project.cover.is_none());
    }

    #[test]
    fn test_placeholder_links_never_survive() {
        let mut value = entry("placeholders", "ux-ui");
        value["links"] = json!({ "demo": "#", "behance": " # " });
        value["liveUrl"] = json!("#");
        value["caseStudyUrl"] = json!("");
        let project = parse_project(value).unwrap();
        assert!(project.links.demo.is_none());
        assert!(project.links.is_empty());

        let mut value = entry("case-study", "ux-ui");
        value["caseStudyUrl"] = json!("https://medium.example/case");
        value["links"] = json!({ "demo": "https://demo.example" });
        value["liveUrl"] = json!("https://ignored.example");
        let project = parse_project(value).unwrap();
        assert_eq!(project.links.case_study.as_deref(), Some("https://medium.example/case"));
        assert_eq!(project.links.demo.as_deref(), Some("https://demo.example"));
    }

    #[test]
    fn test_cover_accepts_relative_paths() {
        let mut value = entry("relative", "frontend");
        value["image"] = json!("images/cover.png");
        let project = parse_project(value).unwrap();
        assert_eq!(project.cover.as_deref(), Some("images/cover.png"));

        let mut value = entry("absolute", "frontend");
        value["image"] = json!("/static/cover.png");
        assert_eq!(
            parse_project(value).unwrap().cover.as_deref(),
            Some("/static/cover.png")
        );
    }

    #[test]
    fn test_missing_translation_is_rejected() {
        let mut value = entry("half", "frontend");
        value["description"] = json!({ "es": "Descripción", "en": "" });
        let err = parse_project(value).unwrap_err();
        assert_eq!(
            err,
            ContentError::IncompleteText {
                id: "half".to_string(),
                field: "description"
            }
        );
    }

    #[test]
    fn test_catalog_excludes_malformed_and_duplicate_entries() {
        let mut no_title = entry("broken", "frontend");
        no_title.as_object_mut().unwrap().remove("title");
        let doc = json!([
            entry("a", "ux-ui"),
            no_title,
            entry("b", "mobile"),
            entry("a", "frontend"),
            entry("  ", "frontend"),
            entry("c", "fullstack"),
        ]);
        let (catalog, errors) = Catalog::from_json(&doc.to_string()).unwrap();

        let ids = catalog.projects().iter().map(|p| p.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(catalog.get("a").unwrap().category, Category::UxUi);
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ContentError::DuplicateId("a".to_string())));
        assert!(errors.contains(&ContentError::EmptyId));
        assert!(matches!(errors[0], ContentError::MalformedEntry { index: 1, .. }));
    }

    #[test]
    fn test_catalog_rejects_non_array_document() {
        assert!(matches!(
            Catalog::from_json("{\"id\": \"x\"}"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_embedded_catalog_is_complete_and_unique() {
        let catalog = Catalog::load();
        assert!(!catalog.is_empty());

        let mut ids = HashSet::new();
        for project in catalog.projects() {
            assert!(ids.insert(project.id.clone()), "duplicate id {}", project.id);
            assert!(project.is_complete(), "incomplete project {}", project.id);
        }

        // every source entry survives validation
        let json = embedded_document(PROJECTS_DOCUMENT).unwrap();
        let raw: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(raw.len(), catalog.len());
    }

    #[test]
    fn test_catalog_lookup_and_counts() {
        let catalog = &*GLOBAL_CATALOG;
        let first = &catalog.projects()[0];
        assert_eq!(catalog.get(&first.id), Some(first));
        assert!(catalog.get("does-not-exist").is_none());

        let total: usize = Category::all().iter().map(|c| catalog.count_in(*c)).sum();
        assert_eq!(total, catalog.len());

        let techs = catalog.technologies();
        let unique = techs.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), techs.len());
    }

    #[test]
    fn test_contact_info() {
        let contact = &*GLOBAL_CONTACT;
        assert_eq!(contact.mailto().as_deref(), Some("mailto:hola@portfolio.com"));
        assert_eq!(contact.socials().len(), 4);

        let partial = ContactInfo::from_json(r#"{ "email": "me@example.com", "github": "" }"#)
            .unwrap();
        assert!(partial.socials().is_empty());
        assert!(partial.linkedin.is_none());
    }

    #[test]
    fn test_localized_text_fallback() {
        let text = LocalizedText::new("Hola", "");
        assert_eq!(text.in_language(Language::En), "Hola");
        assert!(!text.is_complete());
        assert_eq!(LocalizedText::new("Hola", "Hi").in_language(Language::En), "Hi");
    }

    #[test]
    fn test_category_slugs() {
        for category in Category::all() {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
        assert_eq!(Category::from_slug("mobile"), None);
    }
}

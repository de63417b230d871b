//! Post editor state, including previews of earlier versions.

use chrono::{Local, TimeZone};

use crate::common::ValidationError;
use crate::config::VERSIONS_PAGE_SIZE;
use crate::models::{Blog, BlogVersion, Language};
use crate::types::{CreateBlogRequest, UpdateBlogRequest};
use crate::utils::{parse_datetime_local, to_datetime_local_in};

/// API calls needed to flip the publication state of a loaded post.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishPlan {
    Unpublish,
    /// Make the previewed version live, then publish.
    ApplyThenPublish { version_id: String },
    /// Snapshot the editor contents as a version, apply it, then publish.
    SaveApplyPublish(UpdateBlogRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub title: String,
    pub content: String,
    pub language: Language,
    /// `YYYY-MM-DDTHH:MM` in the viewer's timezone, empty when unset.
    pub custom_date: String,
    pub blog: Option<Blog>,
    /// Newest first.
    pub versions: Vec<BlogVersion>,
    /// 1-based.
    pub versions_page: usize,
    pub active_preview: Option<BlogVersion>,
    pub show_preview: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            language: Language::default(),
            custom_date: String::new(),
            blog: None,
            versions: Vec::new(),
            versions_page: 1,
            active_preview: None,
            show_preview: false,
        }
    }
}

impl EditorState {
    pub fn load(&mut self, blog: Blog, versions: Vec<BlogVersion>) {
        self.load_in(blog, versions, &Local);
    }

    /// Fills the form from a fetched post, rendering the custom date in `tz`.
    pub fn load_in<Tz: TimeZone>(&mut self, blog: Blog, versions: Vec<BlogVersion>, tz: &Tz)
    where
        Tz::Offset: std::fmt::Display,
    {
        self.title = blog.title.clone();
        self.content = blog.content.clone();
        self.language = blog.language;
        self.custom_date = blog
            .custom_date
            .map(|dt| to_datetime_local_in(dt, tz))
            .unwrap_or_default();
        self.blog = Some(blog);
        self.versions = versions;
        self.versions_page = self.versions_page.clamp(1, self.version_pages().max(1));
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err(ValidationError::TitleAndContentRequired);
        }
        Ok(())
    }

    fn custom_date_value(&self) -> Option<String> {
        let value = self.custom_date.trim();
        parse_datetime_local(value).map(|_| value.to_string())
    }

    /// Update payload for the current form; the API stores it as a pending version.
    pub fn draft_request(&self) -> Result<UpdateBlogRequest, ValidationError> {
        self.validate()?;
        Ok(UpdateBlogRequest {
            title: Some(self.title.trim().to_string()),
            content: Some(self.content.trim().to_string()),
            language: Some(self.language),
            images: Vec::new(),
            custom_date: self.custom_date_value(),
        })
    }

    pub fn create_request(&self) -> Result<CreateBlogRequest, ValidationError> {
        self.validate()?;
        Ok(CreateBlogRequest {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            language: Some(self.language),
            images: Vec::new(),
            custom_date: self.custom_date_value(),
        })
    }

    pub fn toggle_preview(&mut self) {
        self.show_preview = !self.show_preview;
    }

    pub fn preview_version(&mut self, version: BlogVersion) {
        self.active_preview = Some(version);
        self.show_preview = true;
    }

    pub fn exit_version_preview(&mut self) {
        self.active_preview = None;
    }

    pub fn is_previewing_version(&self) -> bool {
        self.active_preview.is_some()
    }

    pub fn is_viewing(&self, version: &BlogVersion) -> bool {
        self.active_preview
            .as_ref()
            .is_some_and(|active| active.id == version.id)
    }

    /// Loads the previewed version into the form. The post is marked as a
    /// draft locally so the next action offers "Publish".
    pub fn revert_to_preview(&mut self) -> bool {
        let Some(version) = self.active_preview.take() else {
            return false;
        };

        self.title = version.title;
        self.content = version.content;
        self.language = version.language;
        self.mark_unpublished();
        self.show_preview = false;
        true
    }

    pub fn mark_unpublished(&mut self) {
        if let Some(blog) = self.blog.as_mut() {
            blog.is_published = false;
        }
    }

    /// Called once a publish went through.
    pub fn published(&mut self) {
        self.active_preview = None;
        self.show_preview = false;
    }

    pub fn preview_title(&self) -> &str {
        let title = match &self.active_preview {
            Some(version) => version.title.as_str(),
            None => self.title.as_str(),
        };
        if title.is_empty() { "Untitled" } else { title }
    }

    pub fn preview_content(&self) -> &str {
        match &self.active_preview {
            Some(version) => &version.content,
            None => &self.content,
        }
    }

    pub fn version_pages(&self) -> usize {
        self.versions.len().div_ceil(VERSIONS_PAGE_SIZE)
    }

    pub fn visible_versions(&self) -> &[BlogVersion] {
        let start = (self.versions_page.saturating_sub(1) * VERSIONS_PAGE_SIZE).min(self.versions.len());
        let end = (start + VERSIONS_PAGE_SIZE).min(self.versions.len());
        &self.versions[start..end]
    }

    pub fn has_version_pages(&self) -> bool {
        self.versions.len() > VERSIONS_PAGE_SIZE
    }

    pub fn next_versions_page(&mut self) {
        self.versions_page = (self.versions_page + 1).min(self.version_pages().max(1));
    }

    pub fn prev_versions_page(&mut self) {
        self.versions_page = self.versions_page.saturating_sub(1).max(1);
    }

    /// Whether `version` is what the loaded post currently shows.
    pub fn is_live(&self, version: &BlogVersion) -> bool {
        self.blog.as_ref().is_some_and(|blog| version.matches(blog))
    }

    /// `None` when no post is loaded yet.
    pub fn publish_plan(&self) -> Option<Result<PublishPlan, ValidationError>> {
        let blog = self.blog.as_ref()?;

        if blog.is_published {
            return Some(Ok(PublishPlan::Unpublish));
        }
        if let Some(version) = &self.active_preview {
            return Some(Ok(PublishPlan::ApplyThenPublish {
                version_id: version.id.clone(),
            }));
        }
        Some(self.draft_request().map(PublishPlan::SaveApplyPublish))
    }

    /// Appends an uploaded image to the content.
    pub fn insert_image(&mut self, url: &str) {
        if !self.content.is_empty() && !self.content.ends_with('\n') {
            self.content.push('\n');
        }
        self.content
            .push_str(&format!("<p><img src=\"{}\" alt=\"\" /></p>", url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, Utc};

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn blog(published: bool) -> Blog {
        Blog {
            id: "b1".into(),
            title: "Live title".into(),
            content: "<p>Live</p>".into(),
            preview: String::new(),
            language: Language::English,
            images: String::new(),
            is_published: published,
            published_at: None,
            custom_date: Some(at("2024-01-15T18:30:00Z")),
            likes_count: 3,
            comments_count: 1,
            views_count: 10,
            created_at: at("2024-01-01T00:00:00Z"),
            updated_at: at("2024-01-02T00:00:00Z"),
            comments: None,
            likes: None,
        }
    }

    fn version(id: &str, title: &str) -> BlogVersion {
        BlogVersion {
            id: id.into(),
            blog_id: "b1".into(),
            title: title.into(),
            content: format!("<p>{}</p>", title),
            language: Language::Devanagari,
            images: String::new(),
            is_pending: true,
            created_at: at("2024-01-03T00:00:00Z"),
        }
    }

    fn loaded(published: bool, versions: usize) -> EditorState {
        let mut state = EditorState::default();
        let versions = (0..versions)
            .map(|i| version(&format!("v{}", i), &format!("Version {}", i)))
            .collect();
        state.load_in(blog(published), versions, &Utc);
        state
    }

    #[test]
    fn test_load_converts_custom_date_to_local_input() {
        let mut state = EditorState::default();
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        state.load_in(blog(true), Vec::new(), &ist);
        assert_eq!(state.title, "Live title");
        assert_eq!(state.custom_date, "2024-01-16T00:00");
    }

    #[test]
    fn test_validate_requires_title_and_content() {
        let mut state = EditorState::default();
        state.title = "Hello".into();
        state.content = "   ".into();
        assert_eq!(state.validate(), Err(ValidationError::TitleAndContentRequired));
        assert!(state.create_request().is_err());
    }

    #[test]
    fn test_requests_trim_and_omit_empty_custom_date() {
        let mut state = EditorState::default();
        state.title = "  Hello ".into();
        state.content = " <p>Body</p> ".into();
        let create = state.create_request().unwrap();
        assert_eq!(create.title, "Hello");
        assert_eq!(create.content, "<p>Body</p>");
        assert_eq!(create.custom_date, None);

        state.custom_date = "2024-02-01T09:00".into();
        let draft = state.draft_request().unwrap();
        assert_eq!(draft.custom_date.as_deref(), Some("2024-02-01T09:00"));

        state.custom_date = "someday".into();
        assert_eq!(state.draft_request().unwrap().custom_date, None);
    }

    #[test]
    fn test_version_preview_and_exit() {
        let mut state = loaded(true, 2);
        let v = state.versions[1].clone();
        state.preview_version(v.clone());
        assert!(state.show_preview);
        assert!(state.is_viewing(&v));
        assert_eq!(state.preview_title(), "Version 1");
        assert_eq!(state.preview_content(), "<p>Version 1</p>");

        state.exit_version_preview();
        assert!(state.show_preview);
        assert_eq!(state.preview_title(), "Live title");
    }

    #[test]
    fn test_preview_title_falls_back() {
        let state = EditorState::default();
        assert_eq!(state.preview_title(), "Untitled");
    }

    #[test]
    fn test_revert_loads_version_and_marks_draft() {
        let mut state = loaded(true, 1);
        assert!(!state.revert_to_preview());

        let v = state.versions[0].clone();
        state.preview_version(v);
        assert!(state.revert_to_preview());
        assert_eq!(state.title, "Version 0");
        assert_eq!(state.language, Language::Devanagari);
        assert!(!state.blog.as_ref().unwrap().is_published);
        assert!(state.active_preview.is_none());
        assert!(!state.show_preview);
    }

    #[test]
    fn test_versions_pagination() {
        let mut state = loaded(false, 12);
        assert_eq!(state.version_pages(), 3);
        assert!(state.has_version_pages());
        assert_eq!(state.visible_versions().len(), 5);

        state.next_versions_page();
        state.next_versions_page();
        state.next_versions_page();
        assert_eq!(state.versions_page, 3);
        assert_eq!(state.visible_versions().len(), 2);
        assert_eq!(state.visible_versions()[0].id, "v10");

        state.prev_versions_page();
        state.prev_versions_page();
        state.prev_versions_page();
        assert_eq!(state.versions_page, 1);
    }

    #[test]
    fn test_is_live_compares_title_content_language() {
        let mut state = loaded(true, 0);
        let mut live = version("v9", "Live title");
        live.content = "<p>Live</p>".into();
        live.language = Language::English;
        assert!(state.is_live(&live));

        live.language = Language::Devanagari;
        assert!(!state.is_live(&live));

        state.blog = None;
        assert!(!state.is_live(&live));
    }

    #[test]
    fn test_publish_plan() {
        assert_eq!(EditorState::default().publish_plan(), None);

        let state = loaded(true, 1);
        assert_eq!(state.publish_plan(), Some(Ok(PublishPlan::Unpublish)));

        let mut state = loaded(false, 1);
        let v = state.versions[0].clone();
        state.preview_version(v);
        assert_eq!(
            state.publish_plan(),
            Some(Ok(PublishPlan::ApplyThenPublish {
                version_id: "v0".into()
            }))
        );

        state.exit_version_preview();
        match state.publish_plan() {
            Some(Ok(PublishPlan::SaveApplyPublish(request))) => {
                assert_eq!(request.title.as_deref(), Some("Live title"));
            }
            other => panic!("unexpected plan: {:?}", other),
        }

        state.content.clear();
        assert_eq!(
            state.publish_plan(),
            Some(Err(ValidationError::TitleAndContentRequired))
        );
    }

    #[test]
    fn test_insert_image_appends_tag() {
        let mut state = EditorState::default();
        state.content = "<p>Intro</p>".into();
        state.insert_image("http://localhost:8080/uploads/a.png");
        assert_eq!(
            state.content,
            "<p>Intro</p>\n<p><img src=\"http://localhost:8080/uploads/a.png\" alt=\"\" /></p>"
        );
    }
}

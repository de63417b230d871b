use reqwest::multipart::{Form, Part};

use super::ApiClient;
use crate::common::ApiError;
use crate::models::AudienceKind;
use crate::state::PublishPlan;
use crate::types::*;

impl ApiClient {
    /// Admin listing. Drafts are always included.
    pub async fn admin_list_blogs(&self, query: &BlogListQuery) -> Result<BlogPage, ApiError> {
        let path = "/admin/blogs";
        let query = BlogListQuery {
            published_only: false,
            ..query.clone()
        };
        self.send(path, self.http.get(self.url(path)).query(&query))
            .await
    }

    pub async fn create_blog(&self, request: &CreateBlogRequest) -> Result<BlogMutation, ApiError> {
        let path = "/admin/blogs";
        self.send(path, self.http.post(self.url(path)).json(request))
            .await
    }

    /// Saves the editor state as a new pending version of the post.
    pub async fn update_blog(
        &self,
        id: &str,
        request: &UpdateBlogRequest,
    ) -> Result<BlogMutation, ApiError> {
        let path = format!("/admin/blogs/{}", id);
        self.send(&path, self.http.put(self.url(&path)).json(request))
            .await
    }

    pub async fn apply_version(&self, id: &str, version_id: &str) -> Result<BlogMutation, ApiError> {
        let path = format!("/admin/blogs/{}/versions/{}/apply", id, version_id);
        self.send(&path, self.http.post(self.url(&path))).await
    }

    pub async fn delete_blog(&self, id: &str) -> Result<Acknowledgement, ApiError> {
        let path = format!("/admin/blogs/{}", id);
        self.send(&path, self.http.delete(self.url(&path))).await
    }

    pub async fn publish_blog(&self, id: &str) -> Result<BlogMutation, ApiError> {
        let path = format!("/admin/blogs/{}/publish", id);
        self.send(&path, self.http.post(self.url(&path))).await
    }

    pub async fn unpublish_blog(&self, id: &str) -> Result<BlogMutation, ApiError> {
        let path = format!("/admin/blogs/{}/unpublish", id);
        self.send(&path, self.http.post(self.url(&path))).await
    }

    pub async fn upload_image(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        mime: &str,
    ) -> Result<UploadedImage, ApiError> {
        let path = "/admin/upload/image";
        let mime = match mime.trim() {
            "" => "application/octet-stream",
            mime => mime,
        };
        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime)
            .map_err(|e| ApiError::InvalidRequest(format!("unsupported file type: {e}")))?;
        let form = Form::new().part("image", part);

        self.send(path, self.http.post(self.url(path)).multipart(form))
            .await
    }

    pub async fn audience(
        &self,
        kind: AudienceKind,
        blog_id: &str,
        page: u32,
        limit: u32,
    ) -> Result<AudiencePage, ApiError> {
        let path = format!("/admin/blogs/{}/{}", blog_id, kind.as_str());
        self.send(
            &path,
            self.http
                .get(self.url(&path))
                .query(&[("page", page), ("limit", limit)]),
        )
        .await
    }

    /// Runs the calls behind a [`PublishPlan`], stopping at the first failure.
    pub async fn run_publish_plan(&self, id: &str, plan: &PublishPlan) -> Result<(), ApiError> {
        match plan {
            PublishPlan::Unpublish => {
                self.unpublish_blog(id).await?;
            }
            PublishPlan::ApplyThenPublish { version_id } => {
                self.apply_version(id, version_id).await?;
                self.publish_blog(id).await?;
            }
            PublishPlan::SaveApplyPublish(request) => {
                let saved = self.update_blog(id, request).await?;
                // no version back means nothing changed; publish what is live
                if let Some(version) = saved.version {
                    self.apply_version(id, &version.id).await?;
                }
                self.publish_blog(id).await?;
            }
        }
        Ok(())
    }

    /// Creates a post and, when `publish` is set, publishes it right away.
    pub async fn create_blog_with_status(
        &self,
        request: &CreateBlogRequest,
        publish: bool,
    ) -> Result<BlogMutation, ApiError> {
        let created = self.create_blog(request).await?;
        if !publish {
            return Ok(created);
        }

        let id = created
            .blog
            .as_ref()
            .map(|blog| blog.id.clone())
            .ok_or_else(|| ApiError::InvalidRequest("created blog missing from response".to_string()))?;
        self.publish_blog(&id).await
    }
}

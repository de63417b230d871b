use super::ApiClient;
use crate::common::ApiError;
use crate::types::*;

impl ApiClient {
    pub async fn list_blogs(&self, query: &BlogListQuery) -> Result<BlogPage, ApiError> {
        let path = "/public/blogs";
        self.send(path, self.http.get(self.url(path)).query(query))
            .await
    }

    /// Fetches a post with its versions. The API counts this as a view.
    pub async fn get_blog(&self, id: &str) -> Result<BlogWithVersions, ApiError> {
        let path = format!("/public/blogs/{}", id);
        self.send(&path, self.http.get(self.url(&path))).await
    }

    pub async fn comments(&self, blog_id: &str) -> Result<CommentList, ApiError> {
        let path = format!("/public/blogs/{}/comments", blog_id);
        self.send(&path, self.http.get(self.url(&path))).await
    }

    pub async fn create_comment(
        &self,
        request: &CreateCommentRequest,
    ) -> Result<Acknowledgement, ApiError> {
        let path = format!("/public/blogs/{}/comments", request.blog_id);
        self.send(&path, self.http.post(self.url(&path)).json(request))
            .await
    }

    pub async fn like(&self, blog_id: &str) -> Result<Acknowledgement, ApiError> {
        let path = format!("/public/blogs/{}/like", blog_id);
        self.send(&path, self.http.post(self.url(&path))).await
    }

    pub async fn unlike(&self, blog_id: &str) -> Result<Acknowledgement, ApiError> {
        let path = format!("/public/blogs/{}/like", blog_id);
        self.send(&path, self.http.delete(self.url(&path))).await
    }

    pub async fn like_status(&self, blog_id: &str) -> Result<LikeStatus, ApiError> {
        let path = format!("/public/blogs/{}/like-status", blog_id);
        self.send(&path, self.http.get(self.url(&path))).await
    }
}

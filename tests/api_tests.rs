mod common;

#[cfg(test)]
pub mod api_tests {
    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::common::*;

    use mindkanvas::common::*;
    use mindkanvas::models::*;
    use mindkanvas::state::PublishPlan;
    use mindkanvas::types::*;

    const BEARER: &str = "Bearer test-token";

    #[tokio::test]
    async fn test_list_blogs_sends_filters_as_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/public/blogs")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "2".into()),
                Matcher::UrlEncoded("limit".into(), "6".into()),
                Matcher::UrlEncoded("published_only".into(), "true".into()),
                Matcher::UrlEncoded("language".into(), "devanagari".into()),
                Matcher::UrlEncoded("sort_by".into(), "most_liked".into()),
            ]))
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "blogs": [blog_json("7", "Monsoon", true)],
                    "pagination": pagination_json(2, 6, 7)
                })
                .to_string(),
            )
            .create_async()
            .await;

        let (client, _) = anonymous_client(&server.url());
        let query = BlogListQuery {
            page: 2,
            limit: 6,
            published_only: true,
            language: Some(Language::Devanagari),
            sort_by: SortBy::MostLiked,
        };
        let page = client.list_blogs(&query).await.unwrap();

        mock.assert_async().await;
        assert_eq!(page.blogs.len(), 1);
        assert_eq!(page.blogs[0].title, "Monsoon");
        assert_eq!(page.pagination.total_pages, 2);
    }

    #[tokio::test]
    async fn test_list_blogs_omits_language_when_unset() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/public/blogs")
            .match_query(Matcher::Regex("^page=1&limit=10&published_only=true&sort_by=recent$".into()))
            .with_body(json!({ "blogs": [], "pagination": pagination_json(1, 10, 0) }).to_string())
            .create_async()
            .await;

        let (client, _) = anonymous_client(&server.url());
        let page = client.list_blogs(&BlogListQuery::default()).await.unwrap();

        mock.assert_async().await;
        assert!(page.blogs.is_empty());
    }

    #[tokio::test]
    async fn test_anonymous_request_has_no_authorization_header() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/public/blogs/7/comments")
            .match_header("authorization", Matcher::Missing)
            .with_body(json!({ "comments": [] }).to_string())
            .create_async()
            .await;

        let (client, _) = anonymous_client(&server.url());
        let comments = client.comments("7").await.unwrap();

        mock.assert_async().await;
        assert!(comments.comments.is_empty());
    }

    #[tokio::test]
    async fn test_stored_token_is_sent_as_bearer() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/public/blogs/7/like-status")
            .match_header("authorization", BEARER)
            .with_body(json!({ "liked": true }).to_string())
            .create_async()
            .await;

        let client = admin_client(&server.url());
        let status = client.like_status("7").await.unwrap();

        mock.assert_async().await;
        assert!(status.liked);
    }

    #[tokio::test]
    async fn test_error_body_becomes_status_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_status(401)
            .with_body(json!({ "error": "Invalid credentials" }).to_string())
            .create_async()
            .await;

        let (client, _) = anonymous_client(&server.url());
        let err = client.login("admin", "wrong").await.unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_error_without_body_falls_back_to_reason() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/public/blogs/missing")
            .with_status(404)
            .create_async()
            .await;

        let (client, _) = anonymous_client(&server.url());
        let err = client.get_blog("missing").await.unwrap_err();

        assert!(err.is_not_found());
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not Found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_blog_returns_versions() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/public/blogs/7")
            .with_body(
                json!({
                    "blog": blog_json("7", "Monsoon", true),
                    "versions": [
                        version_json("v2", "7", "Monsoon, revised", true),
                        version_json("v1", "7", "Monsoon", false)
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let (client, _) = anonymous_client(&server.url());
        let post = client.get_blog("7").await.unwrap();

        assert_eq!(post.blog.id, "7");
        assert_eq!(post.versions.len(), 2);
        assert!(post.versions[0].is_pending);
        assert!(post.versions[1].matches(&post.blog));
    }

    #[tokio::test]
    async fn test_create_comment_posts_to_blog() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/public/blogs/7/comments")
            .match_body(Matcher::PartialJson(json!({
                "blog_id": "7",
                "content": "Lovely",
                "is_anonymous": true
            })))
            .with_status(201)
            .with_body(json!({ "message": "Comment created" }).to_string())
            .create_async()
            .await;

        let (client, _) = anonymous_client(&server.url());
        let request = CreateCommentRequest {
            blog_id: "7".to_string(),
            author_name: None,
            email: None,
            content: "Lovely".to_string(),
            is_anonymous: true,
        };
        client.create_comment(&request).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_like_and_unlike_use_post_and_delete() {
        let mut server = Server::new_async().await;
        let like = server
            .mock("POST", "/public/blogs/7/like")
            .match_header("authorization", BEARER)
            .with_body(json!({ "message": "liked" }).to_string())
            .create_async()
            .await;
        let unlike = server
            .mock("DELETE", "/public/blogs/7/like")
            .match_header("authorization", BEARER)
            .with_body(json!({ "message": "unliked" }).to_string())
            .create_async()
            .await;

        let client = admin_client(&server.url());
        client.like("7").await.unwrap();
        client.unlike("7").await.unwrap();

        like.assert_async().await;
        unlike.assert_async().await;
    }

    #[tokio::test]
    async fn test_admin_listing_always_includes_drafts() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/admin/blogs")
            .match_header("authorization", BEARER)
            .match_query(Matcher::UrlEncoded("published_only".into(), "false".into()))
            .with_body(
                json!({
                    "blogs": [blog_json("1", "Draft", false), blog_json("2", "Live", true)],
                    "pagination": pagination_json(1, 10, 2)
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = admin_client(&server.url());
        let page = client
            .admin_list_blogs(&BlogListQuery::default())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(page.blogs.len(), 2);
        assert!(!page.blogs[0].is_published);
    }

    #[tokio::test]
    async fn test_upload_image_sends_multipart() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/admin/upload/image")
            .match_header("content-type", Matcher::Regex("^multipart/form-data".into()))
            .match_body(Matcher::Regex("name=\"image\"; filename=\"cat.png\"".into()))
            .with_body(json!({ "url": "/uploads/cat.png", "filename": "cat.png" }).to_string())
            .create_async()
            .await;

        let client = admin_client(&server.url());
        let uploaded = client
            .upload_image("cat.png", b"GIF89a-not-really".to_vec(), "image/png")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(uploaded.url, "/uploads/cat.png");
    }

    #[tokio::test]
    async fn test_upload_image_without_mime_sends_octet_stream() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/admin/upload/image")
            .match_body(Matcher::Regex("(?i)content-type: application/octet-stream".into()))
            .with_body(json!({ "url": "/uploads/cat.webp", "filename": "cat.webp" }).to_string())
            .create_async()
            .await;

        let client = admin_client(&server.url());
        let uploaded = client
            .upload_image("cat.webp", b"RIFF-not-really".to_vec(), "")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(uploaded.filename, "cat.webp");
    }

    #[tokio::test]
    async fn test_audience_requests_kind_path_with_paging() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/admin/blogs/7/viewers")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "2".into()),
                Matcher::UrlEncoded("limit".into(), "5".into()),
            ]))
            .with_body(
                json!({
                    "items": [{ "id": "a", "created_at": "2026-02-03T12:00:00Z", "display": "203.0.113.9" }],
                    "pagination": pagination_json(2, 5, 6)
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = admin_client(&server.url());
        let page = client
            .audience(AudienceKind::Viewers, "7", 2, 5)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(page.items[0].display, "203.0.113.9");
        assert_eq!(page.pagination.total_pages, 2);
    }

    #[tokio::test]
    async fn test_publish_plan_save_apply_publish_runs_in_order() {
        let mut server = Server::new_async().await;
        let update = server
            .mock("PUT", "/admin/blogs/7")
            .match_body(Matcher::PartialJson(json!({ "title": "New title" })))
            .with_body(
                json!({
                    "message": "Blog updated",
                    "version": version_json("v9", "7", "New title", true)
                })
                .to_string(),
            )
            .create_async()
            .await;
        let apply = server
            .mock("POST", "/admin/blogs/7/versions/v9/apply")
            .with_body(json!({ "blog": blog_json("7", "New title", false) }).to_string())
            .create_async()
            .await;
        let publish = server
            .mock("POST", "/admin/blogs/7/publish")
            .with_body(json!({ "blog": blog_json("7", "New title", true) }).to_string())
            .create_async()
            .await;

        let client = admin_client(&server.url());
        let plan = PublishPlan::SaveApplyPublish(UpdateBlogRequest {
            title: Some("New title".to_string()),
            content: Some("<p>body</p>".to_string()),
            ..Default::default()
        });
        client.run_publish_plan("7", &plan).await.unwrap();

        update.assert_async().await;
        apply.assert_async().await;
        publish.assert_async().await;
    }

    #[tokio::test]
    async fn test_publish_plan_stops_at_first_failure() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/admin/blogs/7/versions/v3/apply")
            .with_status(500)
            .with_body(json!({ "error": "Failed to apply version" }).to_string())
            .create_async()
            .await;
        let publish = server
            .mock("POST", "/admin/blogs/7/publish")
            .expect(0)
            .create_async()
            .await;

        let client = admin_client(&server.url());
        let plan = PublishPlan::ApplyThenPublish {
            version_id: "v3".to_string(),
        };
        let err = client.run_publish_plan("7", &plan).await.unwrap_err();

        assert_eq!(err.status(), Some(500));
        publish.assert_async().await;
    }

    #[tokio::test]
    async fn test_publish_plan_unpublish() {
        let mut server = Server::new_async().await;
        let unpublish = server
            .mock("POST", "/admin/blogs/7/unpublish")
            .with_body(json!({ "blog": blog_json("7", "Monsoon", false) }).to_string())
            .create_async()
            .await;

        let client = admin_client(&server.url());
        client
            .run_publish_plan("7", &PublishPlan::Unpublish)
            .await
            .unwrap();

        unpublish.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_blog_with_status_publishes_new_post() {
        let mut server = Server::new_async().await;
        let create = server
            .mock("POST", "/admin/blogs")
            .with_status(201)
            .with_body(json!({ "blog": blog_json("12", "Fresh", false) }).to_string())
            .create_async()
            .await;
        let publish = server
            .mock("POST", "/admin/blogs/12/publish")
            .with_body(json!({ "blog": blog_json("12", "Fresh", true) }).to_string())
            .create_async()
            .await;

        let client = admin_client(&server.url());
        let request = CreateBlogRequest {
            title: "Fresh".to_string(),
            content: "<p>Fresh</p>".to_string(),
            ..Default::default()
        };
        let result = client.create_blog_with_status(&request, true).await.unwrap();

        create.assert_async().await;
        publish.assert_async().await;
        assert!(result.blog.unwrap().is_published);
    }

    #[tokio::test]
    async fn test_create_blog_as_draft_skips_publish() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/admin/blogs")
            .with_status(201)
            .with_body(json!({ "blog": blog_json("12", "Fresh", false) }).to_string())
            .create_async()
            .await;
        let publish = server
            .mock("POST", "/admin/blogs/12/publish")
            .expect(0)
            .create_async()
            .await;

        let client = admin_client(&server.url());
        let request = CreateBlogRequest {
            title: "Fresh".to_string(),
            content: "<p>Fresh</p>".to_string(),
            ..Default::default()
        };
        let result = client.create_blog_with_status(&request, false).await.unwrap();

        publish.assert_async().await;
        assert!(!result.blog.unwrap().is_published);
    }

    #[tokio::test]
    async fn test_validate_token_reads_claims() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/auth/validate")
            .match_header("authorization", BEARER)
            .with_body(
                json!({ "valid": true, "user_id": "1", "username": "admin", "is_admin": true })
                    .to_string(),
            )
            .create_async()
            .await;

        let client = admin_client(&server.url());
        let claims = client.validate_token().await.unwrap();

        assert!(claims.valid);
        assert!(claims.is_admin);
    }

    #[tokio::test]
    async fn test_signup_returns_created_user() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/auth/signup")
            .match_body(Matcher::Json(json!({ "username": "reader", "password": "secret1" })))
            .with_status(201)
            .with_body(
                json!({ "message": "User created", "user": user_json(&get_seed_reader()) })
                    .to_string(),
            )
            .create_async()
            .await;

        let (client, _) = anonymous_client(&server.url());
        let created = client.signup("reader", "secret1").await.unwrap();

        assert_eq!(created.user, get_seed_reader());
    }
}

use crate::common::ValidationError;
use crate::models::{Blog, User};
use crate::types::CreateCommentRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeAction {
    Like,
    Unlike,
}

/// Like and comment counters shown under a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngagementState {
    pub liked: bool,
    pub likes_count: u64,
    pub comments_count: u64,
}

impl EngagementState {
    pub fn from_blog(blog: &Blog, liked: bool) -> Self {
        Self {
            liked,
            likes_count: blog.likes_count,
            comments_count: blog.comments_count,
        }
    }

    pub fn toggle_like(&self) -> LikeAction {
        if self.liked { LikeAction::Unlike } else { LikeAction::Like }
    }

    /// Records the like state the API accepted.
    pub fn confirm_like(&mut self, liked: bool) {
        if liked == self.liked {
            return;
        }
        self.liked = liked;
        self.likes_count = if liked {
            self.likes_count.saturating_add(1)
        } else {
            self.likes_count.saturating_sub(1)
        };
    }

    pub fn comment_added(&mut self) {
        self.comments_count = self.comments_count.saturating_add(1);
    }
}

/// Contents of the comment form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub text: String,
    pub anonymous: bool,
}

impl CommentDraft {
    /// Logged-out readers comment anonymously by default.
    pub fn for_user(logged_in: bool) -> Self {
        Self {
            text: String::new(),
            anonymous: !logged_in,
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn to_request(
        &self,
        blog_id: &str,
        user: Option<&User>,
    ) -> Result<CreateCommentRequest, ValidationError> {
        let content = self.text.trim();
        if content.is_empty() {
            return Err(ValidationError::Required("Comment"));
        }

        let author_name = if self.anonymous {
            None
        } else {
            let user = user.ok_or(ValidationError::LoginRequiredForNamedComment)?;
            Some(user.username.clone())
        };

        Ok(CreateCommentRequest {
            blog_id: blog_id.to_string(),
            author_name,
            email: None,
            content: content.to_string(),
            is_anonymous: self.anonymous,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn reader() -> User {
        User {
            id: "u1".into(),
            username: "reader".into(),
            is_admin: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_like_toggle_adjusts_count() {
        let mut state = EngagementState {
            liked: false,
            likes_count: 4,
            comments_count: 0,
        };
        assert_eq!(state.toggle_like(), LikeAction::Like);
        state.confirm_like(true);
        assert_eq!(state.likes_count, 5);
        assert_eq!(state.toggle_like(), LikeAction::Unlike);

        // repeated confirmation changes nothing
        state.confirm_like(true);
        assert_eq!(state.likes_count, 5);
    }

    #[test]
    fn test_unlike_never_goes_negative() {
        let mut state = EngagementState {
            liked: true,
            likes_count: 0,
            comments_count: 0,
        };
        state.confirm_like(false);
        assert_eq!(state.likes_count, 0);
        assert!(!state.liked);
    }

    #[test]
    fn test_comment_added() {
        let mut state = EngagementState::default();
        state.comment_added();
        assert_eq!(state.comments_count, 1);
    }

    #[test]
    fn test_draft_defaults_follow_login() {
        assert!(CommentDraft::for_user(false).anonymous);
        assert!(!CommentDraft::for_user(true).anonymous);
    }

    #[test]
    fn test_named_comment_needs_login() {
        let draft = CommentDraft {
            text: "Nice post".into(),
            anonymous: false,
        };
        assert_eq!(
            draft.to_request("b1", None).unwrap_err(),
            ValidationError::LoginRequiredForNamedComment
        );

        let user = reader();
        let request = draft.to_request("b1", Some(&user)).unwrap();
        assert_eq!(request.author_name.as_deref(), Some("reader"));
        assert!(!request.is_anonymous);
    }

    #[test]
    fn test_anonymous_comment_omits_author() {
        let draft = CommentDraft {
            text: "  Lovely  ".into(),
            anonymous: true,
        };
        let user = reader();
        let request = draft.to_request("b1", Some(&user)).unwrap();
        assert_eq!(request.author_name, None);
        assert_eq!(request.content, "Lovely");
        assert!(request.is_anonymous);
    }

    #[test]
    fn test_blank_comment_rejected() {
        let draft = CommentDraft::for_user(false);
        assert!(!draft.can_submit());
        assert_eq!(
            draft.to_request("b1", None).unwrap_err(),
            ValidationError::Required("Comment")
        );
    }
}

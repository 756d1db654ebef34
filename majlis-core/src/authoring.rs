//! Discussion authoring workflow.
//!
//! The composer moves `Browsing -> Composing -> Submitting -> Browsing`;
//! whichever way submission ends, the form closes and the list re-queries.
//! Permission checks here are the UI-level gate only; the buttons they hide
//! are not a security boundary.
use crate::model::{DiscussionPost, DiscussionPostPatch, Identity, NewDiscussionPost, UserRole};

/// Platform tags offered by the multi-select.
pub const PLATFORM_OPTIONS: [&str; 7] = [
    "PC",
    "PS5",
    "PS4",
    "Xbox One",
    "iOS",
    "Android",
    "Nintendo Switch",
];

/// What the open form is doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeMode {
    New,
    /// Editing the post with this id.
    Edit(String),
}

/// Composer state for the discussion screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Composer {
    #[default]
    Browsing,
    Composing(ComposeMode),
    Submitting(ComposeMode),
}

impl Composer {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Browsing)
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting(_))
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(
            self,
            Self::Composing(ComposeMode::Edit(_)) | Self::Submitting(ComposeMode::Edit(_))
        )
    }
}

/// Form fields backing the composer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscussionForm {
    pub title: String,
    pub content: String,
    pub platforms: Vec<String>,
}

impl DiscussionForm {
    /// Form pre-filled from an existing post for editing.
    #[must_use]
    pub fn prefill(post: &DiscussionPost) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            platforms: post.platforms.clone(),
        }
    }

    /// Toggle one platform tag: present removes it, absent appends it.
    /// Insertion order is kept; toggling twice restores the original set.
    pub fn toggle_platform(&mut self, platform: &str) {
        if let Some(pos) = self.platforms.iter().position(|p| p == platform) {
            self.platforms.remove(pos);
        } else {
            self.platforms.push(platform.to_string());
        }
    }

    #[must_use]
    pub fn has_platform(&self, platform: &str) -> bool {
        self.platforms.iter().any(|p| p == platform)
    }

    /// Both free-text fields filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    /// Insert payload for a new post.
    #[must_use]
    pub fn into_new(self, author_id: &str, language: &str) -> NewDiscussionPost {
        NewDiscussionPost {
            title: self.title,
            content: self.content,
            platforms: self.platforms,
            author_id: author_id.to_string(),
            language: language.to_string(),
        }
    }

    /// Update payload for an edited post; the caller supplies the timestamp.
    #[must_use]
    pub fn into_patch(self, updated_at: String) -> DiscussionPostPatch {
        DiscussionPostPatch {
            title: self.title,
            content: self.content,
            platforms: self.platforms,
            updated_at,
        }
    }
}

/// Creating a post needs a signed-in identity with the posting flag.
#[must_use]
pub fn can_create_post(identity: Option<&Identity>, role: Option<&UserRole>) -> bool {
    identity.is_some() && role.is_some_and(|r| r.can_post)
}

/// Editing is open to the author or an admin.
#[must_use]
pub fn can_edit_post(
    identity: Option<&Identity>,
    role: Option<&UserRole>,
    post: &DiscussionPost,
) -> bool {
    identity.is_some_and(|me| me.id == post.author_id || role.is_some_and(|r| r.is_admin))
}

/// Deletion follows the same author-or-admin rule, behind a confirm step.
#[must_use]
pub fn can_delete_post(
    identity: Option<&Identity>,
    role: Option<&UserRole>,
    post: &DiscussionPost,
) -> bool {
    can_edit_post(identity, role, post)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(id: &str) -> Identity {
        Identity {
            id: id.to_string(),
            email: format!("{id}@example.com"),
        }
    }

    fn role(user_id: &str, is_admin: bool, can_post: bool) -> UserRole {
        UserRole {
            user_id: user_id.to_string(),
            is_admin,
            can_post,
        }
    }

    fn post_by(author: &str) -> DiscussionPost {
        DiscussionPost {
            id: String::from("d1"),
            title: String::from("T"),
            content: String::from("C"),
            platforms: vec![],
            author_id: author.to_string(),
            game_id: None,
            language: String::from("en"),
            created_at: String::new(),
            updated_at: String::new(),
            comments_count: 0,
            today_comments: 0,
            author: None,
        }
    }

    #[test]
    fn platform_toggle_is_idempotent_and_order_preserving() {
        let mut form = DiscussionForm::default();
        form.toggle_platform("PC");
        form.toggle_platform("PS5");
        assert_eq!(form.platforms, vec!["PC", "PS5"]);

        form.toggle_platform("PC");
        assert_eq!(form.platforms, vec!["PS5"]);
        form.toggle_platform("PC");
        form.toggle_platform("PC");
        assert_eq!(form.platforms, vec!["PS5"], "double toggle restores the set");
        assert!(form.has_platform("PS5"));
        assert!(!form.has_platform("PC"));
    }

    #[test]
    fn completeness_requires_both_text_fields() {
        let mut form = DiscussionForm::default();
        assert!(!form.is_complete());
        form.title = String::from("T");
        form.content = String::from("  ");
        assert!(!form.is_complete());
        form.content = String::from("C");
        assert!(form.is_complete());
    }

    #[test]
    fn create_gate_needs_identity_and_posting_flag() {
        let me = identity("u1");
        assert!(!can_create_post(None, None));
        assert!(!can_create_post(Some(&me), None));
        assert!(!can_create_post(Some(&me), Some(&role("u1", true, false))));
        assert!(can_create_post(Some(&me), Some(&role("u1", false, true))));
    }

    #[test]
    fn edit_and_delete_open_to_author_or_admin_only() {
        let author = identity("u1");
        let admin = identity("u2");
        let bystander = identity("u3");
        let post = post_by("u1");

        assert!(can_edit_post(Some(&author), None, &post));
        assert!(can_edit_post(Some(&admin), Some(&role("u2", true, true)), &post));
        assert!(!can_edit_post(
            Some(&bystander),
            Some(&role("u3", false, true)),
            &post
        ));
        assert!(!can_edit_post(None, None, &post));
        assert!(!can_delete_post(
            Some(&bystander),
            Some(&role("u3", false, true)),
            &post
        ));
    }

    #[test]
    fn prefill_then_patch_round_trips_the_edited_fields() {
        let mut post = post_by("u1");
        post.platforms = vec![String::from("PC"), String::from("iOS")];
        let mut form = DiscussionForm::prefill(&post);
        assert_eq!(form.title, "T");
        form.toggle_platform("iOS");
        let patch = form.into_patch(String::from("2026-02-01T00:00:00Z"));
        assert_eq!(patch.platforms, vec!["PC"]);
        assert_eq!(patch.updated_at, "2026-02-01T00:00:00Z");
    }

    #[test]
    fn new_payload_carries_author_and_language() {
        let mut form = DiscussionForm::default();
        form.title = String::from("T");
        form.content = String::from("C");
        form.toggle_platform("PC");
        let row = form.into_new("u1", "ar");
        assert_eq!(row.author_id, "u1");
        assert_eq!(row.language, "ar");
        assert_eq!(row.platforms, vec!["PC"]);
    }

    #[test]
    fn composer_states_report_their_phase() {
        assert!(!Composer::Browsing.is_open());
        let editing = Composer::Composing(ComposeMode::Edit(String::from("d1")));
        assert!(editing.is_open());
        assert!(editing.is_editing());
        assert!(!editing.is_submitting());
        let submitting = Composer::Submitting(ComposeMode::New);
        assert!(submitting.is_submitting());
        assert!(!submitting.is_editing());
    }
}

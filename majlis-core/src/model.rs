//! Row types for the hosted tables.
//!
//! Every struct mirrors one remote table (or an embedded join of one). The
//! app never owns these rows; it holds transient copies that are re-fetched
//! after each mutation.
use serde::{Deserialize, Serialize};

/// Authenticated identity issued by the hosted auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
}

/// Community member profile.
///
/// `level` is stored, not derived: the service presents it alongside `xp`
/// and the two can drift. Progress bars use [`crate::level::xp_progress`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub xp: i64,
    #[serde(default = "default_level")]
    pub level: i64,
    #[serde(default)]
    pub preferred_language: String,
    /// Filled by the service; left out of insert payloads when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_at: String,
}

const fn default_level() -> i64 {
    1
}

/// Per-identity privilege flags. Absence of a row means both flags false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRole {
    pub user_id: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub can_post: bool,
}

/// Partial role update. `None` fields are left untouched by the store, which
/// is what lets the posting grant leave `is_admin` alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RolePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_post: Option<bool>,
}

/// Game catalogue entry. Rating aggregates are maintained by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub title_ar: String,
    pub title_en: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description_ar: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_ratings: i64,
    #[serde(default)]
    pub created_at: String,
}

impl Game {
    /// Title in the requested language tag ("ar" selects Arabic, anything
    /// else falls back to English the way the UI does).
    #[must_use]
    pub fn title<'a>(&'a self, lang_tag: &str) -> &'a str {
        if lang_tag == "ar" {
            &self.title_ar
        } else {
            &self.title_en
        }
    }
}

/// Community post, optionally attached to a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    pub author_id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub comments_count: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<Game>,
}

/// Star-rated game review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub game_id: String,
    pub author_id: String,
    pub rating: u8,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub helpful_count: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<Game>,
}

/// Bilingual wiki article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WikiArticle {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    pub title_ar: String,
    pub title_en: String,
    #[serde(default)]
    pub slug: String,
    pub content_ar: String,
    pub content_en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<Game>,
}

impl WikiArticle {
    #[must_use]
    pub fn title<'a>(&'a self, lang_tag: &str) -> &'a str {
        if lang_tag == "ar" {
            &self.title_ar
        } else {
            &self.title_en
        }
    }

    #[must_use]
    pub fn content<'a>(&'a self, lang_tag: &str) -> &'a str {
        if lang_tag == "ar" {
            &self.content_ar
        } else {
            &self.content_en
        }
    }
}

/// Embedded author join carrying only the display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRef {
    pub username: String,
}

/// Discussion-area post with a platform tag set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscussionPost {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub platforms: Vec<String>,
    pub author_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub comments_count: i64,
    #[serde(default)]
    pub today_comments: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorRef>,
}

/// Insert payload for a new discussion post. The service fills id and
/// timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDiscussionPost {
    pub title: String,
    pub content: String,
    pub platforms: Vec<String>,
    pub author_id: String,
    pub language: String,
}

/// Update payload for an edited discussion post. `updated_at` is supplied by
/// the caller so this crate stays clock-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscussionPostPatch {
    pub title: String,
    pub content: String,
    pub platforms: Vec<String>,
    pub updated_at: String,
}

/// Earned badge, joined through the user_badges link table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    #[serde(default)]
    pub id: String,
    pub name_ar: String,
    pub name_en: String,
    #[serde(default)]
    pub icon: String,
}

/// Contribution counters shown on the profile screen, one count query each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthorStats {
    pub posts: u64,
    pub reviews: u64,
    pub wiki_articles: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bilingual_titles_select_by_tag_with_english_fallback() {
        let game = Game {
            id: String::from("g1"),
            title_ar: String::from("لعبة"),
            title_en: String::from("Game"),
            slug: String::new(),
            description_ar: String::new(),
            description_en: String::new(),
            banner_url: None,
            thumbnail_url: None,
            release_date: None,
            developer: None,
            platforms: vec![],
            average_rating: 0.0,
            total_ratings: 0,
            created_at: String::new(),
        };
        assert_eq!(game.title("ar"), "لعبة");
        assert_eq!(game.title("en"), "Game");
        assert_eq!(game.title("fr"), "Game");
    }

    #[test]
    fn role_rows_deserialize_with_missing_flags() {
        let role: UserRole = serde_json::from_str(r#"{"user_id":"u1","can_post":true}"#).unwrap();
        assert!(role.can_post);
        assert!(!role.is_admin);
    }

    #[test]
    fn role_patch_skips_untouched_fields() {
        let patch = RolePatch {
            can_post: Some(true),
            is_admin: None,
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"can_post":true}"#);
    }

    #[test]
    fn discussion_rows_tolerate_absent_joins_and_counters() {
        let post: DiscussionPost = serde_json::from_str(
            r#"{"id":"d1","title":"T","content":"C","author_id":"u1"}"#,
        )
        .unwrap();
        assert!(post.platforms.is_empty());
        assert!(post.author.is_none());
        assert_eq!(post.comments_count, 0);
    }
}

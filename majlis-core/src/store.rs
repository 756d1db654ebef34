//! Content and role store interface.
//!
//! Every operation is one remote table call: select with optional joins,
//! ordering, and equality predicates, or a single-row insert/update/delete.
//! Implementations: [`crate::rest::RestStore`] against the hosted service
//! and [`crate::memory::MemoryStore`] for tests.
use async_trait::async_trait;

use crate::error::Error;
use crate::model::{
    AuthorStats, Badge, DiscussionPost, DiscussionPostPatch, Game, NewDiscussionPost, Post,
    Profile, Review, RolePatch, UserRole, WikiArticle,
};
use crate::query::{PostOrder, ReviewFilter};

#[async_trait(?Send)]
pub trait CommunityStore {
    // --- games -----------------------------------------------------------

    /// Games ordered by total rating count, descending.
    async fn trending_games(&self, limit: usize) -> Result<Vec<Game>, Error>;

    /// All games ordered by average rating, descending.
    async fn games_by_rating(&self) -> Result<Vec<Game>, Error>;

    /// Single game by id, `None` when the id matches nothing.
    async fn game(&self, id: &str) -> Result<Option<Game>, Error>;

    // --- posts -----------------------------------------------------------

    /// Most recent posts with author and game joins.
    async fn latest_posts(&self, limit: usize) -> Result<Vec<Post>, Error>;

    /// Full posts list under the requested ordering.
    async fn posts(&self, order: PostOrder) -> Result<Vec<Post>, Error>;

    /// Posts attached to one game, newest first.
    async fn posts_for_game(&self, game_id: &str) -> Result<Vec<Post>, Error>;

    // --- reviews ---------------------------------------------------------

    /// Most recent reviews with author and game joins.
    async fn latest_reviews(&self, limit: usize) -> Result<Vec<Review>, Error>;

    /// Reviews list, optionally narrowed to one star rating.
    async fn reviews(&self, filter: ReviewFilter) -> Result<Vec<Review>, Error>;

    /// Reviews for one game, newest first.
    async fn reviews_for_game(&self, game_id: &str) -> Result<Vec<Review>, Error>;

    // --- wiki ------------------------------------------------------------

    /// All wiki articles, newest first.
    async fn wiki_articles(&self) -> Result<Vec<WikiArticle>, Error>;

    /// Single article by id.
    async fn wiki_article(&self, id: &str) -> Result<Option<WikiArticle>, Error>;

    /// Articles attached to one game, newest first.
    async fn wiki_for_game(&self, game_id: &str) -> Result<Vec<WikiArticle>, Error>;

    // --- discussion ------------------------------------------------------

    /// Discussion posts, newest first, with the author username join.
    async fn discussion_posts(&self) -> Result<Vec<DiscussionPost>, Error>;

    async fn create_discussion_post(&self, post: NewDiscussionPost) -> Result<(), Error>;

    async fn update_discussion_post(
        &self,
        id: &str,
        patch: DiscussionPostPatch,
    ) -> Result<(), Error>;

    async fn delete_discussion_post(&self, id: &str) -> Result<(), Error>;

    // --- profiles and roles ----------------------------------------------

    /// Profile row for one identity.
    async fn profile(&self, user_id: &str) -> Result<Option<Profile>, Error>;

    async fn insert_profile(&self, profile: Profile) -> Result<(), Error>;

    /// Role row for one identity; `None` means no privileges granted.
    async fn role_for(&self, user_id: &str) -> Result<Option<UserRole>, Error>;

    async fn insert_role(&self, role: UserRole) -> Result<(), Error>;

    async fn update_role(&self, user_id: &str, patch: RolePatch) -> Result<(), Error>;

    // --- profile extras --------------------------------------------------

    /// Contribution counters, three count queries.
    async fn author_stats(&self, user_id: &str) -> Result<AuthorStats, Error>;

    /// Badges earned by one identity.
    async fn badges_for(&self, user_id: &str) -> Result<Vec<Badge>, Error>;
}

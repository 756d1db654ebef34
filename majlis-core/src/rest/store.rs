//! Typed table operations over the shared REST transport.
use std::rc::Rc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Error;
use crate::model::{
    AuthorStats, Badge, DiscussionPost, DiscussionPostPatch, Game, NewDiscussionPost, Post,
    Profile, Review, RolePatch, UserRole, WikiArticle,
};
use crate::query::{PostOrder, ReviewFilter};
use crate::rest::{RestClient, TableQuery};
use crate::store::CommunityStore;

const POST_JOINS: &str = "*,author:profiles(*),game:games(*)";
const AUTHOR_JOIN: &str = "*,author:profiles(*)";
const DISCUSSION_JOIN: &str = "*,author:profiles(username)";

pub struct RestStore {
    client: Rc<RestClient>,
}

impl RestStore {
    #[must_use]
    pub fn new(client: Rc<RestClient>) -> Self {
        Self { client }
    }
}

/// Link-table row joining a user to a badge definition.
#[derive(Debug, Deserialize)]
struct BadgeRow {
    badges: Badge,
}

#[async_trait(?Send)]
impl CommunityStore for RestStore {
    async fn trending_games(&self, limit: usize) -> Result<Vec<Game>, Error> {
        let query = TableQuery::new("games")
            .order_desc("total_ratings")
            .limit(limit);
        self.client.rows(&query).await
    }

    async fn games_by_rating(&self) -> Result<Vec<Game>, Error> {
        let query = TableQuery::new("games").order_desc("average_rating");
        self.client.rows(&query).await
    }

    async fn game(&self, id: &str) -> Result<Option<Game>, Error> {
        let query = TableQuery::new("games").eq("id", id);
        self.client.maybe_single(&query).await
    }

    async fn latest_posts(&self, limit: usize) -> Result<Vec<Post>, Error> {
        let query = TableQuery::new("posts")
            .select(POST_JOINS)
            .order_desc("created_at")
            .limit(limit);
        self.client.rows(&query).await
    }

    async fn posts(&self, order: PostOrder) -> Result<Vec<Post>, Error> {
        let query = TableQuery::new("posts")
            .select(POST_JOINS)
            .order_desc(order.order_column());
        self.client.rows(&query).await
    }

    async fn posts_for_game(&self, game_id: &str) -> Result<Vec<Post>, Error> {
        let query = TableQuery::new("posts")
            .select(AUTHOR_JOIN)
            .eq("game_id", game_id)
            .order_desc("created_at");
        self.client.rows(&query).await
    }

    async fn latest_reviews(&self, limit: usize) -> Result<Vec<Review>, Error> {
        let query = TableQuery::new("reviews")
            .select(POST_JOINS)
            .order_desc("created_at")
            .limit(limit);
        self.client.rows(&query).await
    }

    async fn reviews(&self, filter: ReviewFilter) -> Result<Vec<Review>, Error> {
        let mut query = TableQuery::new("reviews")
            .select(POST_JOINS)
            .order_desc("created_at");
        if let Some(rating) = filter.rating() {
            query = query.eq("rating", &rating.to_string());
        }
        self.client.rows(&query).await
    }

    async fn reviews_for_game(&self, game_id: &str) -> Result<Vec<Review>, Error> {
        let query = TableQuery::new("reviews")
            .select(AUTHOR_JOIN)
            .eq("game_id", game_id)
            .order_desc("created_at");
        self.client.rows(&query).await
    }

    async fn wiki_articles(&self) -> Result<Vec<WikiArticle>, Error> {
        let query = TableQuery::new("wiki_articles")
            .select(POST_JOINS)
            .order_desc("created_at");
        self.client.rows(&query).await
    }

    async fn wiki_article(&self, id: &str) -> Result<Option<WikiArticle>, Error> {
        let query = TableQuery::new("wiki_articles")
            .select(POST_JOINS)
            .eq("id", id);
        self.client.maybe_single(&query).await
    }

    async fn wiki_for_game(&self, game_id: &str) -> Result<Vec<WikiArticle>, Error> {
        let query = TableQuery::new("wiki_articles")
            .select(AUTHOR_JOIN)
            .eq("game_id", game_id)
            .order_desc("created_at");
        self.client.rows(&query).await
    }

    async fn discussion_posts(&self) -> Result<Vec<DiscussionPost>, Error> {
        let query = TableQuery::new("discussion_posts")
            .select(DISCUSSION_JOIN)
            .order_desc("created_at");
        self.client.rows(&query).await
    }

    async fn create_discussion_post(&self, post: NewDiscussionPost) -> Result<(), Error> {
        self.client.insert("discussion_posts", &post).await
    }

    async fn update_discussion_post(
        &self,
        id: &str,
        patch: DiscussionPostPatch,
    ) -> Result<(), Error> {
        let query = TableQuery::new("discussion_posts").eq("id", id);
        self.client.update(&query, &patch).await
    }

    async fn delete_discussion_post(&self, id: &str) -> Result<(), Error> {
        let query = TableQuery::new("discussion_posts").eq("id", id);
        self.client.delete(&query).await
    }

    async fn profile(&self, user_id: &str) -> Result<Option<Profile>, Error> {
        let query = TableQuery::new("profiles").eq("id", user_id);
        self.client.maybe_single(&query).await
    }

    async fn insert_profile(&self, profile: Profile) -> Result<(), Error> {
        self.client.insert("profiles", &profile).await
    }

    async fn role_for(&self, user_id: &str) -> Result<Option<UserRole>, Error> {
        let query = TableQuery::new("user_roles").eq("user_id", user_id);
        self.client.maybe_single(&query).await
    }

    async fn insert_role(&self, role: UserRole) -> Result<(), Error> {
        self.client.insert("user_roles", &role).await
    }

    async fn update_role(&self, user_id: &str, patch: RolePatch) -> Result<(), Error> {
        let query = TableQuery::new("user_roles").eq("user_id", user_id);
        self.client.update(&query, &patch).await
    }

    async fn author_stats(&self, user_id: &str) -> Result<AuthorStats, Error> {
        let count_query = |table: &'static str| {
            TableQuery::new(table)
                .select("id")
                .eq("author_id", user_id)
                .limit(1)
        };
        // Independent counts; each failure would surface on its own.
        let posts = self.client.count(&count_query("posts")).await?;
        let reviews = self.client.count(&count_query("reviews")).await?;
        let wiki_articles = self.client.count(&count_query("wiki_articles")).await?;
        Ok(AuthorStats {
            posts,
            reviews,
            wiki_articles,
        })
    }

    async fn badges_for(&self, user_id: &str) -> Result<Vec<Badge>, Error> {
        let query = TableQuery::new("user_badges")
            .select("badge_id,badges(*)")
            .eq("user_id", user_id);
        let rows: Vec<BadgeRow> = self.client.rows(&query).await?;
        Ok(rows.into_iter().map(|row| row.badges).collect())
    }
}

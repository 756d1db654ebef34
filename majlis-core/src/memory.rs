//! In-memory store and auth doubles.
//!
//! Back the same interfaces as the REST clients with plain vectors so the
//! workflows can be exercised natively. Every operation is appended to an
//! op log; tests assert on it to prove what did or did not reach the store.
use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::rc::Rc;

use async_trait::async_trait;

use crate::auth::AuthClient;
use crate::error::Error;
use crate::model::{
    AuthorRef, AuthorStats, Badge, DiscussionPost, DiscussionPostPatch, Game, Identity,
    NewDiscussionPost, Post, Profile, Review, RolePatch, UserRole, WikiArticle,
};
use crate::query::{PostOrder, ReviewFilter};
use crate::store::CommunityStore;

#[derive(Default)]
pub struct MemoryStore {
    games: RefCell<Vec<Game>>,
    posts: RefCell<Vec<Post>>,
    reviews: RefCell<Vec<Review>>,
    wiki: RefCell<Vec<WikiArticle>>,
    discussion: RefCell<Vec<DiscussionPost>>,
    profiles: RefCell<Vec<Profile>>,
    roles: RefCell<Vec<UserRole>>,
    badges: RefCell<Vec<(String, Badge)>>,
    seq: Cell<u32>,
    ops: RefCell<Vec<String>>,
}

impl MemoryStore {
    /// Operations performed so far, in order, as `op:table` labels.
    #[must_use]
    pub fn op_log(&self) -> Vec<String> {
        self.ops.borrow().clone()
    }

    fn record(&self, op: &str, table: &str) {
        self.ops.borrow_mut().push(format!("{op}:{table}"));
    }

    fn next_seq(&self) -> u32 {
        let seq = self.seq.get() + 1;
        self.seq.set(seq);
        seq
    }

    /// Synthetic monotonic timestamp; lexicographic order matches insertion
    /// order, which is all created_at sorting needs.
    fn next_timestamp(&self) -> String {
        format!("2026-01-01T00:00:00.{:06}Z", self.next_seq())
    }

    // --- seeding helpers for tests ---------------------------------------

    pub fn push_game(&self, game: Game) {
        self.games.borrow_mut().push(game);
    }

    pub fn push_post(&self, post: Post) {
        self.posts.borrow_mut().push(post);
    }

    pub fn push_review(&self, review: Review) {
        self.reviews.borrow_mut().push(review);
    }

    pub fn push_wiki_article(&self, article: WikiArticle) {
        self.wiki.borrow_mut().push(article);
    }

    pub fn push_profile(&self, profile: Profile) {
        self.profiles.borrow_mut().push(profile);
    }

    /// Overwrite or insert the role row for one identity.
    pub fn set_role(&self, role: UserRole) {
        let mut roles = self.roles.borrow_mut();
        if let Some(existing) = roles.iter_mut().find(|r| r.user_id == role.user_id) {
            *existing = role;
        } else {
            roles.push(role);
        }
    }

    pub fn award_badge(&self, user_id: &str, badge: Badge) {
        self.badges.borrow_mut().push((user_id.to_string(), badge));
    }

    fn author_ref(&self, author_id: &str) -> Option<AuthorRef> {
        self.profiles
            .borrow()
            .iter()
            .find(|p| p.id == author_id)
            .map(|p| AuthorRef {
                username: p.username.clone(),
            })
    }
}

#[async_trait(?Send)]
impl CommunityStore for MemoryStore {
    async fn trending_games(&self, limit: usize) -> Result<Vec<Game>, Error> {
        self.record("select", "games");
        let mut games = self.games.borrow().clone();
        games.sort_by(|a, b| b.total_ratings.cmp(&a.total_ratings));
        games.truncate(limit);
        Ok(games)
    }

    async fn games_by_rating(&self) -> Result<Vec<Game>, Error> {
        self.record("select", "games");
        let mut games = self.games.borrow().clone();
        games.sort_by(|a, b| {
            b.average_rating
                .partial_cmp(&a.average_rating)
                .unwrap_or(Ordering::Equal)
        });
        Ok(games)
    }

    async fn game(&self, id: &str) -> Result<Option<Game>, Error> {
        self.record("select_one", "games");
        Ok(self.games.borrow().iter().find(|g| g.id == id).cloned())
    }

    async fn latest_posts(&self, limit: usize) -> Result<Vec<Post>, Error> {
        self.record("select", "posts");
        let mut posts = self.posts.borrow().clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts.truncate(limit);
        Ok(posts)
    }

    async fn posts(&self, order: PostOrder) -> Result<Vec<Post>, Error> {
        self.record("select", "posts");
        let mut posts = self.posts.borrow().clone();
        match order {
            PostOrder::Newest => posts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            PostOrder::Popular => posts.sort_by(|a, b| b.likes_count.cmp(&a.likes_count)),
        }
        Ok(posts)
    }

    async fn posts_for_game(&self, game_id: &str) -> Result<Vec<Post>, Error> {
        self.record("select", "posts");
        let mut posts: Vec<Post> = self
            .posts
            .borrow()
            .iter()
            .filter(|p| p.game_id.as_deref() == Some(game_id))
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn latest_reviews(&self, limit: usize) -> Result<Vec<Review>, Error> {
        self.record("select", "reviews");
        let mut reviews = self.reviews.borrow().clone();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reviews.truncate(limit);
        Ok(reviews)
    }

    async fn reviews(&self, filter: ReviewFilter) -> Result<Vec<Review>, Error> {
        self.record("select", "reviews");
        let mut reviews: Vec<Review> = self
            .reviews
            .borrow()
            .iter()
            .filter(|r| filter.rating().is_none_or(|stars| r.rating == stars))
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }

    async fn reviews_for_game(&self, game_id: &str) -> Result<Vec<Review>, Error> {
        self.record("select", "reviews");
        let mut reviews: Vec<Review> = self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.game_id == game_id)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }

    async fn wiki_articles(&self) -> Result<Vec<WikiArticle>, Error> {
        self.record("select", "wiki_articles");
        let mut articles = self.wiki.borrow().clone();
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(articles)
    }

    async fn wiki_article(&self, id: &str) -> Result<Option<WikiArticle>, Error> {
        self.record("select_one", "wiki_articles");
        Ok(self.wiki.borrow().iter().find(|a| a.id == id).cloned())
    }

    async fn wiki_for_game(&self, game_id: &str) -> Result<Vec<WikiArticle>, Error> {
        self.record("select", "wiki_articles");
        let mut articles: Vec<WikiArticle> = self
            .wiki
            .borrow()
            .iter()
            .filter(|a| a.game_id.as_deref() == Some(game_id))
            .cloned()
            .collect();
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(articles)
    }

    async fn discussion_posts(&self) -> Result<Vec<DiscussionPost>, Error> {
        self.record("select", "discussion_posts");
        let mut posts: Vec<DiscussionPost> = self
            .discussion
            .borrow()
            .iter()
            .cloned()
            .map(|mut post| {
                post.author = self.author_ref(&post.author_id);
                post
            })
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn create_discussion_post(&self, post: NewDiscussionPost) -> Result<(), Error> {
        self.record("insert", "discussion_posts");
        let created_at = self.next_timestamp();
        self.discussion.borrow_mut().push(DiscussionPost {
            id: format!("d{}", self.next_seq()),
            title: post.title,
            content: post.content,
            platforms: post.platforms,
            author_id: post.author_id,
            game_id: None,
            language: post.language,
            created_at: created_at.clone(),
            updated_at: created_at,
            comments_count: 0,
            today_comments: 0,
            author: None,
        });
        Ok(())
    }

    async fn update_discussion_post(
        &self,
        id: &str,
        patch: DiscussionPostPatch,
    ) -> Result<(), Error> {
        self.record("update", "discussion_posts");
        let mut posts = self.discussion.borrow_mut();
        if let Some(post) = posts.iter_mut().find(|p| p.id == id) {
            post.title = patch.title;
            post.content = patch.content;
            post.platforms = patch.platforms;
            post.updated_at = patch.updated_at;
        }
        Ok(())
    }

    async fn delete_discussion_post(&self, id: &str) -> Result<(), Error> {
        self.record("delete", "discussion_posts");
        self.discussion.borrow_mut().retain(|p| p.id != id);
        Ok(())
    }

    async fn profile(&self, user_id: &str) -> Result<Option<Profile>, Error> {
        self.record("select_one", "profiles");
        Ok(self.profiles.borrow().iter().find(|p| p.id == user_id).cloned())
    }

    async fn insert_profile(&self, profile: Profile) -> Result<(), Error> {
        self.record("insert", "profiles");
        self.profiles.borrow_mut().push(profile);
        Ok(())
    }

    async fn role_for(&self, user_id: &str) -> Result<Option<UserRole>, Error> {
        self.record("select_one", "user_roles");
        Ok(self.roles.borrow().iter().find(|r| r.user_id == user_id).cloned())
    }

    async fn insert_role(&self, role: UserRole) -> Result<(), Error> {
        self.record("insert", "user_roles");
        self.roles.borrow_mut().push(role);
        Ok(())
    }

    async fn update_role(&self, user_id: &str, patch: RolePatch) -> Result<(), Error> {
        self.record("update", "user_roles");
        let mut roles = self.roles.borrow_mut();
        if let Some(role) = roles.iter_mut().find(|r| r.user_id == user_id) {
            if let Some(is_admin) = patch.is_admin {
                role.is_admin = is_admin;
            }
            if let Some(can_post) = patch.can_post {
                role.can_post = can_post;
            }
        }
        Ok(())
    }

    async fn author_stats(&self, user_id: &str) -> Result<AuthorStats, Error> {
        self.record("count", "posts");
        self.record("count", "reviews");
        self.record("count", "wiki_articles");
        let posts = self.posts.borrow().iter().filter(|p| p.author_id == user_id).count() as u64;
        let reviews = self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.author_id == user_id)
            .count() as u64;
        let wiki_articles = self
            .wiki
            .borrow()
            .iter()
            .filter(|a| a.author_id.as_deref() == Some(user_id))
            .count() as u64;
        Ok(AuthorStats {
            posts,
            reviews,
            wiki_articles,
        })
    }

    async fn badges_for(&self, user_id: &str) -> Result<Vec<Badge>, Error> {
        self.record("select", "user_badges");
        Ok(self
            .badges
            .borrow()
            .iter()
            .filter(|(owner, _)| owner == user_id)
            .map(|(_, badge)| badge.clone())
            .collect())
    }
}

/// Identity double backed by the same in-memory tables.
pub struct MemoryAuth {
    store: Rc<MemoryStore>,
    accounts: RefCell<Vec<(String, String, Identity)>>,
    current: RefCell<Option<Identity>>,
    seq: Cell<u32>,
}

impl MemoryAuth {
    #[must_use]
    pub fn new(store: Rc<MemoryStore>) -> Self {
        Self {
            store,
            accounts: RefCell::new(Vec::new()),
            current: RefCell::new(None),
            seq: Cell::new(0),
        }
    }

    /// Start a client already signed in as the given identity.
    #[must_use]
    pub fn signed_in(store: Rc<MemoryStore>, identity: Identity) -> Self {
        let auth = Self::new(store);
        *auth.current.borrow_mut() = Some(identity);
        auth
    }
}

#[async_trait(?Send)]
impl AuthClient for MemoryAuth {
    fn current_identity(&self) -> Option<Identity> {
        self.current.borrow().clone()
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Profile, Error> {
        let identity = self
            .accounts
            .borrow()
            .iter()
            .find(|(e, p, _)| e == email && p == password)
            .map(|(_, _, identity)| identity.clone())
            .ok_or(Error::NotAuthorized)?;
        let profile = self
            .store
            .profile(&identity.id)
            .await?
            .ok_or(Error::NotFound)?;
        *self.current.borrow_mut() = Some(identity);
        Ok(profile)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        username: &str,
        preferred_language: &str,
    ) -> Result<Profile, Error> {
        if self.accounts.borrow().iter().any(|(e, _, _)| e == email) {
            return Err(Error::Validation(String::from("email already registered")));
        }
        let seq = self.seq.get() + 1;
        self.seq.set(seq);
        let identity = Identity {
            id: format!("u{seq}"),
            email: email.to_string(),
        };
        self.accounts
            .borrow_mut()
            .push((email.to_string(), password.to_string(), identity.clone()));

        let profile = Profile {
            id: identity.id.clone(),
            username: username.to_string(),
            avatar_url: None,
            bio: String::new(),
            xp: 0,
            level: 1,
            preferred_language: preferred_language.to_string(),
            created_at: String::new(),
        };
        self.store.insert_profile(profile.clone()).await?;
        *self.current.borrow_mut() = Some(identity);
        Ok(profile)
    }

    async fn sign_out(&self) -> Result<(), Error> {
        *self.current.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn game(id: &str, total_ratings: i64, average: f64) -> Game {
        Game {
            id: id.to_string(),
            title_ar: format!("عنوان {id}"),
            title_en: format!("Title {id}"),
            slug: id.to_string(),
            description_ar: String::new(),
            description_en: String::new(),
            banner_url: None,
            thumbnail_url: None,
            release_date: None,
            developer: None,
            platforms: vec![],
            average_rating: average,
            total_ratings,
            created_at: String::new(),
        }
    }

    fn post(id: &str, author: &str, created_at: &str, likes: i64) -> Post {
        Post {
            id: id.to_string(),
            game_id: None,
            author_id: author.to_string(),
            title: format!("post {id}"),
            content: String::new(),
            language: String::from("en"),
            likes_count: likes,
            comments_count: 0,
            created_at: created_at.to_string(),
            author: None,
            game: None,
        }
    }

    #[test]
    fn trending_sorts_by_total_ratings_and_truncates() {
        let store = MemoryStore::default();
        store.push_game(game("g1", 5, 3.0));
        store.push_game(game("g2", 50, 2.0));
        store.push_game(game("g3", 20, 4.5));

        let trending = block_on(store.trending_games(2)).unwrap();
        let ids: Vec<&str> = trending.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["g2", "g3"]);

        let by_rating = block_on(store.games_by_rating()).unwrap();
        assert_eq!(by_rating[0].id, "g3");
    }

    #[test]
    fn post_order_switch_changes_sort_and_issues_one_query_each() {
        let store = MemoryStore::default();
        store.push_post(post("p1", "u1", "2026-01-02T00:00:00Z", 1));
        store.push_post(post("p2", "u1", "2026-01-01T00:00:00Z", 9));

        let newest = block_on(store.posts(PostOrder::Newest)).unwrap();
        assert_eq!(newest[0].id, "p1");
        assert_eq!(store.op_log(), vec!["select:posts"]);

        let popular = block_on(store.posts(PostOrder::Popular)).unwrap();
        assert_eq!(popular[0].id, "p2");
        assert_eq!(store.op_log(), vec!["select:posts", "select:posts"]);
    }

    #[test]
    fn discussion_inserts_join_author_and_sort_newest_first() {
        let store = MemoryStore::default();
        store.push_profile(Profile {
            id: String::from("u1"),
            username: String::from("sara"),
            avatar_url: None,
            bio: String::new(),
            xp: 0,
            level: 1,
            preferred_language: String::from("ar"),
            created_at: String::new(),
        });
        block_on(store.create_discussion_post(NewDiscussionPost {
            title: String::from("first"),
            content: String::from("c"),
            platforms: vec![],
            author_id: String::from("u1"),
            language: String::from("ar"),
        }))
        .unwrap();
        block_on(store.create_discussion_post(NewDiscussionPost {
            title: String::from("second"),
            content: String::from("c"),
            platforms: vec![],
            author_id: String::from("u1"),
            language: String::from("ar"),
        }))
        .unwrap();

        let posts = block_on(store.discussion_posts()).unwrap();
        assert_eq!(posts[0].title, "second");
        assert_eq!(posts[1].title, "first");
        assert_eq!(posts[0].author.as_ref().unwrap().username, "sara");
    }

    #[test]
    fn sign_up_then_sign_in_round_trip() {
        let store = Rc::new(MemoryStore::default());
        let auth = MemoryAuth::new(store.clone());

        let profile = block_on(auth.sign_up("a@b.c", "secret", "amira", "ar")).unwrap();
        assert_eq!(profile.username, "amira");
        assert!(auth.current_identity().is_some());

        block_on(auth.sign_out()).unwrap();
        assert!(auth.current_identity().is_none());

        assert!(block_on(auth.sign_in("a@b.c", "wrong")).is_err());
        let profile = block_on(auth.sign_in("a@b.c", "secret")).unwrap();
        assert_eq!(profile.preferred_language, "ar");
    }

    #[test]
    fn author_stats_count_per_table() {
        let store = MemoryStore::default();
        store.push_post(post("p1", "u1", "t", 0));
        store.push_post(post("p2", "u2", "t", 0));
        let stats = block_on(store.author_stats("u1")).unwrap();
        assert_eq!(stats.posts, 1);
        assert_eq!(stats.reviews, 0);
        assert_eq!(stats.wiki_articles, 0);
    }
}

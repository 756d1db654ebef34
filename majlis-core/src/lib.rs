//! Majlis core
//!
//! Platform-agnostic domain logic for the Majlis community site: the data
//! model, the store/auth client interfaces and their hosted-service REST
//! implementations, the access-code workflow, and the discussion authoring
//! state machine. No UI or browser dependencies live here.

pub mod access;
pub mod auth;
pub mod authoring;
pub mod config;
pub mod error;
pub mod level;
pub mod memory;
pub mod model;
pub mod query;
pub mod rest;
pub mod store;

// Re-export commonly used types
pub use access::{AccessCodes, AccessGrant, is_code_well_formed, redeem_access_code};
pub use auth::{AuthClient, Session};
pub use authoring::{
    ComposeMode, Composer, DiscussionForm, PLATFORM_OPTIONS, can_create_post, can_edit_post,
    can_delete_post,
};
pub use config::SiteConfig;
pub use error::Error;
pub use level::{xp_progress, xp_target};
pub use memory::{MemoryAuth, MemoryStore};
pub use model::{
    AuthorRef, AuthorStats, Badge, DiscussionPost, DiscussionPostPatch, Game, Identity,
    NewDiscussionPost, Post, Profile, Review, RolePatch, UserRole, WikiArticle,
};
pub use query::{PostOrder, ReviewFilter};
pub use rest::{RestAuth, RestClient, RestStore};
pub use store::CommunityStore;

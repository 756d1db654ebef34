//! End-to-end walk through the role grant and discussion authoring flow.
use std::rc::Rc;

use futures::executor::block_on;
use majlis_core::{
    AccessCodes, AuthClient, CommunityStore, DiscussionForm, MemoryAuth, MemoryStore,
    can_create_post, can_delete_post, can_edit_post, redeem_access_code,
};

fn codes() -> AccessCodes {
    AccessCodes {
        posting: String::from("9011502"),
        admin: String::from("55804677"),
    }
}

#[test]
fn posting_code_unlocks_discussion_authoring() {
    let store = Rc::new(MemoryStore::default());
    let auth = MemoryAuth::new(store.clone());

    // U signs up; with no role row the create control must stay hidden.
    let profile = block_on(auth.sign_up("u@example.com", "secret", "yusuf", "en")).unwrap();
    let identity = auth.current_identity().unwrap();
    assert_eq!(profile.id, identity.id);

    let role = block_on(store.role_for(&identity.id)).unwrap();
    assert!(role.is_none());
    assert!(!can_create_post(Some(&identity), role.as_ref()));

    // Redeeming the posting code writes the role row.
    block_on(redeem_access_code(
        store.as_ref(),
        Some(&identity),
        &codes(),
        "9011502",
    ))
    .unwrap();
    let role = block_on(store.role_for(&identity.id)).unwrap().unwrap();
    assert!(role.can_post);
    assert!(!role.is_admin);
    assert!(can_create_post(Some(&identity), Some(&role)));

    // U composes a post with two platform tags.
    let mut form = DiscussionForm::default();
    form.title = String::from("T");
    form.content = String::from("C");
    form.toggle_platform("PC");
    form.toggle_platform("PS5");
    assert!(form.is_complete());

    block_on(store.create_discussion_post(form.into_new(&identity.id, "en"))).unwrap();

    // The refreshed list reflects the insert without any manual reload step.
    let posts = block_on(store.discussion_posts()).unwrap();
    assert_eq!(posts.len(), 1);
    let post = &posts[0];
    assert_eq!(post.title, "T");
    assert_eq!(post.content, "C");
    assert_eq!(post.platforms, vec!["PC", "PS5"]);
    assert_eq!(post.author_id, identity.id);
    assert_eq!(post.author.as_ref().unwrap().username, "yusuf");
}

#[test]
fn edit_and_delete_stay_author_or_admin_only() {
    let store = Rc::new(MemoryStore::default());
    let author_auth = MemoryAuth::new(store.clone());
    block_on(author_auth.sign_up("a@example.com", "secret", "author", "ar")).unwrap();
    let author = author_auth.current_identity().unwrap();

    block_on(redeem_access_code(store.as_ref(), Some(&author), &codes(), "9011502")).unwrap();
    let mut form = DiscussionForm::default();
    form.title = String::from("hello");
    form.content = String::from("world");
    block_on(store.create_discussion_post(form.into_new(&author.id, "ar"))).unwrap();
    let post = block_on(store.discussion_posts()).unwrap().remove(0);

    // A second signed-in identity with posting rights but no ownership.
    let other_auth = MemoryAuth::new(store.clone());
    block_on(other_auth.sign_up("b@example.com", "secret", "other", "en")).unwrap();
    let other = other_auth.current_identity().unwrap();
    block_on(redeem_access_code(store.as_ref(), Some(&other), &codes(), "9011502")).unwrap();
    let other_role = block_on(store.role_for(&other.id)).unwrap();

    assert!(!can_edit_post(Some(&other), other_role.as_ref(), &post));
    assert!(!can_delete_post(Some(&other), other_role.as_ref(), &post));

    // Admin grant flips both affordances on.
    block_on(redeem_access_code(store.as_ref(), Some(&other), &codes(), "55804677")).unwrap();
    let other_role = block_on(store.role_for(&other.id)).unwrap();
    assert!(can_edit_post(Some(&other), other_role.as_ref(), &post));
    assert!(can_delete_post(Some(&other), other_role.as_ref(), &post));

    // Edit then delete, re-querying after each mutation.
    let mut edit = DiscussionForm::prefill(&post);
    edit.title = String::from("hello again");
    block_on(store.update_discussion_post(
        &post.id,
        edit.into_patch(String::from("2026-02-01T00:00:00Z")),
    ))
    .unwrap();
    let refreshed = block_on(store.discussion_posts()).unwrap();
    assert_eq!(refreshed[0].title, "hello again");
    assert_eq!(refreshed[0].updated_at, "2026-02-01T00:00:00Z");

    block_on(store.delete_discussion_post(&post.id)).unwrap();
    assert!(block_on(store.discussion_posts()).unwrap().is_empty());
}

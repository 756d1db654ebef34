//! Access-code redemption.
//!
//! SECURITY FLAW, kept deliberately visible: the codes are compared in
//! client code and ship inside the delivered bundle, so anyone who reads the
//! bundle can grant themselves posting or admin flags. The role row written
//! here is advisory UI state, not a security boundary. A real deployment
//! must validate an invitation token on the backend instead; see DESIGN.md.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;
use crate::model::{Identity, RolePatch, UserRole};
use crate::store::CommunityStore;

/// Code that unlocks posting in the discussion area.
pub const DEFAULT_POSTING_CODE: &str = "9011502";
/// Code that unlocks admin moderation (implies posting).
pub const DEFAULT_ADMIN_CODE: &str = "55804677";

/// The two codes a deployment accepts. Overridable at build time so the
/// shipped defaults can at least be rotated per deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessCodes {
    pub posting: String,
    pub admin: String,
}

impl Default for AccessCodes {
    fn default() -> Self {
        Self {
            posting: option_env!("MAJLIS_POSTING_CODE")
                .unwrap_or(DEFAULT_POSTING_CODE)
                .to_string(),
            admin: option_env!("MAJLIS_ADMIN_CODE")
                .unwrap_or(DEFAULT_ADMIN_CODE)
                .to_string(),
        }
    }
}

/// Privilege tier a matched code grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessGrant {
    Posting,
    Admin,
}

static CODE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4,12}$").expect("code pattern is valid"));

/// Cheap shape check before any comparison; codes are short digit strings.
#[must_use]
pub fn is_code_well_formed(code: &str) -> bool {
    CODE_SHAPE.is_match(code)
}

/// Case-sensitive exact match against the configured codes.
#[must_use]
pub fn classify_code(codes: &AccessCodes, input: &str) -> Option<AccessGrant> {
    if input == codes.admin {
        Some(AccessGrant::Admin)
    } else if input == codes.posting {
        Some(AccessGrant::Posting)
    } else {
        None
    }
}

/// Redeem a typed code for the signed-in identity.
///
/// Requires an identity before anything touches the store. On a match the
/// role row is read, then updated or inserted: the admin code sets both
/// flags, the posting code sets only `can_post` and never clears `is_admin`.
///
/// # Errors
/// [`Error::NotAuthorized`] when signed out, [`Error::Validation`] for a
/// mismatched code, or the store failure from the role read/write.
pub async fn redeem_access_code(
    store: &dyn CommunityStore,
    identity: Option<&Identity>,
    codes: &AccessCodes,
    input: &str,
) -> Result<AccessGrant, Error> {
    let identity = identity.ok_or(Error::NotAuthorized)?;
    if !is_code_well_formed(input) {
        return Err(Error::Validation(String::from("malformed access code")));
    }
    let grant = classify_code(codes, input)
        .ok_or_else(|| Error::Validation(String::from("unrecognized access code")))?;

    let existing = store.role_for(&identity.id).await?;
    match (grant, existing) {
        (AccessGrant::Admin, Some(_)) => {
            store
                .update_role(
                    &identity.id,
                    RolePatch {
                        is_admin: Some(true),
                        can_post: Some(true),
                    },
                )
                .await?;
        }
        (AccessGrant::Admin, None) => {
            store
                .insert_role(UserRole {
                    user_id: identity.id.clone(),
                    is_admin: true,
                    can_post: true,
                })
                .await?;
        }
        (AccessGrant::Posting, Some(_)) => {
            store
                .update_role(
                    &identity.id,
                    RolePatch {
                        is_admin: None,
                        can_post: Some(true),
                    },
                )
                .await?;
        }
        (AccessGrant::Posting, None) => {
            store
                .insert_role(UserRole {
                    user_id: identity.id.clone(),
                    is_admin: false,
                    can_post: true,
                })
                .await?;
        }
    }
    Ok(grant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use futures::executor::block_on;

    fn codes() -> AccessCodes {
        AccessCodes {
            posting: String::from(DEFAULT_POSTING_CODE),
            admin: String::from(DEFAULT_ADMIN_CODE),
        }
    }

    fn user(id: &str) -> Identity {
        Identity {
            id: id.to_string(),
            email: format!("{id}@example.com"),
        }
    }

    #[test]
    fn code_shape_accepts_digit_strings_only() {
        assert!(is_code_well_formed("9011502"));
        assert!(is_code_well_formed("55804677"));
        assert!(!is_code_well_formed(""));
        assert!(!is_code_well_formed("901-1502"));
        assert!(!is_code_well_formed("letmein"));
    }

    #[test]
    fn classification_is_exact_and_case_sensitive() {
        let codes = codes();
        assert_eq!(classify_code(&codes, "55804677"), Some(AccessGrant::Admin));
        assert_eq!(classify_code(&codes, "9011502"), Some(AccessGrant::Posting));
        assert_eq!(classify_code(&codes, "9011502 "), None);
        assert_eq!(classify_code(&codes, "0"), None);
    }

    #[test]
    fn signed_out_redemption_never_touches_the_store() {
        let store = MemoryStore::default();
        let result = block_on(redeem_access_code(&store, None, &codes(), "55804677"));
        assert_eq!(result, Err(Error::NotAuthorized));
        assert!(store.op_log().is_empty());
        assert!(block_on(store.role_for("u1")).unwrap().is_none());
    }

    #[test]
    fn admin_code_sets_both_flags_from_any_prior_state() {
        let store = MemoryStore::default();
        let identity = user("u1");

        // no prior row
        let grant =
            block_on(redeem_access_code(&store, Some(&identity), &codes(), "55804677")).unwrap();
        assert_eq!(grant, AccessGrant::Admin);
        let role = block_on(store.role_for("u1")).unwrap().unwrap();
        assert!(role.is_admin && role.can_post);

        // prior row with flags cleared
        store.set_role(UserRole {
            user_id: String::from("u1"),
            is_admin: false,
            can_post: false,
        });
        block_on(redeem_access_code(&store, Some(&identity), &codes(), "55804677")).unwrap();
        let role = block_on(store.role_for("u1")).unwrap().unwrap();
        assert!(role.is_admin && role.can_post);
    }

    #[test]
    fn posting_code_never_clears_admin() {
        let store = MemoryStore::default();
        let identity = user("u2");

        store.set_role(UserRole {
            user_id: String::from("u2"),
            is_admin: true,
            can_post: false,
        });
        let grant =
            block_on(redeem_access_code(&store, Some(&identity), &codes(), "9011502")).unwrap();
        assert_eq!(grant, AccessGrant::Posting);
        let role = block_on(store.role_for("u2")).unwrap().unwrap();
        assert!(role.can_post);
        assert!(role.is_admin, "posting grant must leave is_admin alone");
    }

    #[test]
    fn posting_code_inserts_a_fresh_row_when_absent() {
        let store = MemoryStore::default();
        let identity = user("u3");
        block_on(redeem_access_code(&store, Some(&identity), &codes(), "9011502")).unwrap();
        let role = block_on(store.role_for("u3")).unwrap().unwrap();
        assert!(role.can_post);
        assert!(!role.is_admin);
    }

    #[test]
    fn mismatched_code_is_a_validation_failure() {
        let store = MemoryStore::default();
        let identity = user("u4");
        let result = block_on(redeem_access_code(&store, Some(&identity), &codes(), "1234"));
        assert!(matches!(result, Err(Error::Validation(_))));
        // the role read happens only after classification
        assert!(store.op_log().is_empty());
    }
}

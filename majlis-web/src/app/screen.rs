//! The screen value the view controller owns.
use std::mem::discriminant;

use yew::AttrValue;

/// Current screen plus its payload. There is no history stack and no URL
/// binding; browser back/forward is not modeled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    SignIn,
    SignUp,
    Games,
    /// Detail view for one game id.
    Game(AttrValue),
    Posts,
    Reviews,
    /// Wiki index, or one article when an id is carried.
    Wiki(Option<AttrValue>),
    Discussion,
    Profile,
}

impl Screen {
    /// Whether a navbar entry for `item` should highlight while this screen
    /// is current. Payloads are ignored: any wiki article still lights up
    /// the wiki entry, while a game detail view highlights nothing.
    #[must_use]
    pub fn is_same_section(&self, item: &Self) -> bool {
        discriminant(self) == discriminant(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_screen_is_home() {
        assert_eq!(Screen::default(), Screen::Home);
    }

    #[test]
    fn section_matching_ignores_payloads() {
        let article = Screen::Wiki(Some(AttrValue::from("w1")));
        assert!(article.is_same_section(&Screen::Wiki(None)));
        assert!(Screen::Wiki(None).is_same_section(&article));

        let detail = Screen::Game(AttrValue::from("g1"));
        assert!(!detail.is_same_section(&Screen::Games));
        assert!(Screen::Posts.is_same_section(&Screen::Posts));
        assert!(!Screen::Posts.is_same_section(&Screen::Reviews));
    }
}

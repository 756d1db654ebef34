//! Language handling.
//!
//! The UI is bilingual Arabic/English. Every screen carries its own text
//! table as a pair of `const` structs, so the compiler checks that both
//! languages cover every string; this module only owns the language value
//! itself, its persistence, and locale-aware date formatting. Unknown tags
//! fall back to English.

const STORAGE_KEY: &str = "majlis.locale";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lang {
    /// Arabic, the site's primary language.
    #[default]
    Ar,
    En,
}

impl Lang {
    /// Parse a stored language tag; anything unrecognized is English.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag == "ar" { Self::Ar } else { Self::En }
    }

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    /// Value for the `dir` attribute and the direction class on screens.
    #[must_use]
    pub const fn dir(self) -> &'static str {
        match self {
            Self::Ar => "rtl",
            Self::En => "ltr",
        }
    }

    /// Locale used for date rendering.
    #[must_use]
    pub const fn date_locale(self) -> &'static str {
        match self {
            Self::Ar => "ar-SA",
            Self::En => "en-US",
        }
    }
}

/// Language persisted from the last visit, Arabic when nothing is stored.
#[must_use]
pub fn saved_lang() -> Lang {
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .map_or(Lang::Ar, |tag| Lang::from_tag(&tag))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Lang::Ar
    }
}

/// Apply a language choice: set `<html lang dir>` and persist it.
pub fn apply_lang(lang: Lang) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", lang.tag());
            let _ = el.set_attribute("dir", lang.dir());
        }
        if let Ok(storage) = crate::dom::local_storage() {
            let _ = storage.set_item(STORAGE_KEY, lang.tag());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (lang, STORAGE_KEY);
    }
}

/// Format an ISO 8601 timestamp as a localized calendar date. The host
/// fallback keeps the date part of the input.
#[must_use]
pub fn fmt_date(iso: &str, lang: Lang) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
        date.to_locale_date_string(lang.date_locale(), &wasm_bindgen::JsValue::UNDEFINED)
            .as_string()
            .unwrap_or_else(|| iso.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = lang;
        iso.split('T').next().unwrap_or(iso).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_and_unknown_falls_back_to_english() {
        assert_eq!(Lang::from_tag("ar"), Lang::Ar);
        assert_eq!(Lang::from_tag("en"), Lang::En);
        assert_eq!(Lang::from_tag("fr"), Lang::En);
        assert_eq!(Lang::Ar.tag(), "ar");
        assert_eq!(Lang::En.tag(), "en");
    }

    #[test]
    fn direction_follows_language() {
        assert!(Lang::Ar.is_rtl());
        assert!(!Lang::En.is_rtl());
        assert_eq!(Lang::Ar.dir(), "rtl");
        assert_eq!(Lang::En.dir(), "ltr");
    }

    #[test]
    fn host_date_formatting_keeps_the_date_part() {
        assert_eq!(fmt_date("2026-03-04T10:30:00Z", Lang::En), "2026-03-04");
        assert_eq!(fmt_date("2026-03-04", Lang::Ar), "2026-03-04");
    }

    #[test]
    fn saved_lang_defaults_to_arabic_off_the_browser() {
        assert_eq!(saved_lang(), Lang::Ar);
        apply_lang(Lang::En);
    }
}

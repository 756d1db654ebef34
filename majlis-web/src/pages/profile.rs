//! Member profile: level card, contribution stats, earned badges.
use majlis_core::level::{xp_progress, xp_target};
use majlis_core::model::Profile;
use yew::prelude::*;

use crate::hooks::use_remote;
use crate::i18n::Lang;
use crate::services::StoreHandle;

struct Text {
    level: &'static str,
    xp: &'static str,
    stats: &'static str,
    posts: &'static str,
    reviews: &'static str,
    wiki_contributions: &'static str,
    badges: &'static str,
    bio: &'static str,
    no_bio: &'static str,
    no_badges: &'static str,
    loading: &'static str,
}

const AR: Text = Text {
    level: "المستوى",
    xp: "نقاط الخبرة",
    stats: "الإحصائيات",
    posts: "المنشورات",
    reviews: "المراجعات",
    wiki_contributions: "مساهمات الموسوعة",
    badges: "الأوسمة",
    bio: "النبذة الشخصية",
    no_bio: "لم يتم إضافة نبذة شخصية",
    no_badges: "لا توجد أوسمة",
    loading: "جار التحميل...",
};

const EN: Text = Text {
    level: "Level",
    xp: "XP",
    stats: "Statistics",
    posts: "Posts",
    reviews: "Reviews",
    wiki_contributions: "Wiki Contributions",
    badges: "Badges",
    bio: "Bio",
    no_bio: "No bio added",
    no_badges: "No badges earned yet",
    loading: "Loading...",
};

impl Text {
    const fn for_lang(lang: Lang) -> &'static Self {
        match lang {
            Lang::Ar => &AR,
            Lang::En => &EN,
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub store: StoreHandle,
    pub lang: Lang,
    pub profile: Option<Profile>,
}

fn initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &Props) -> Html {
    let text = Text::for_lang(props.lang);
    let lang = props.lang;
    let member_id = props.profile.as_ref().map(|p| p.id.clone());

    let stats = use_remote(
        (props.store.clone(), member_id.clone()),
        |(store, member_id)| async move {
            match member_id {
                Some(id) => store.author_stats(&id).await,
                None => Ok(majlis_core::model::AuthorStats::default()),
            }
        },
    );
    let badges = use_remote((props.store.clone(), member_id), |(store, member_id)| async move {
        match member_id {
            Some(id) => store.badges_for(&id).await,
            None => Ok(Vec::new()),
        }
    });

    let Some(member) = props.profile.as_ref() else {
        return html! {
            <div class="page profile-page profile-page--loading" dir={lang.dir()}>
                <div class="loading-placeholder">{ text.loading }</div>
            </div>
        };
    };

    // Presentation only: level is a stored column and may drift from xp.
    let progress_pct = xp_progress(member.xp) * 100.0;
    let stat_cells = stats.ready().copied().unwrap_or_default();

    html! {
        <div class="page profile-page" dir={lang.dir()}>
            <div class="profile-layout">
                <div class="profile-layout__side">
                    <div class="card profile-card">
                        <div class="avatar avatar--xl">{ initial(&member.username) }</div>
                        <h2 class="profile-card__name">{ &member.username }</h2>
                        <div class="profile-card__level">{ format!("{} {}", text.level, member.level) }</div>
                        <div class="profile-card__xp">
                            <div class="profile-card__xp-row">
                                <span>{ text.xp }</span>
                                <span>{ format!("{} / {}", member.xp, xp_target(member.level)) }</span>
                            </div>
                            <div class="progress-track">
                                <div class="progress-fill" style={format!("width: {progress_pct:.0}%")}></div>
                            </div>
                        </div>
                    </div>

                    <div class="card">
                        <h3 class="card__title">{ text.bio }</h3>
                        <p class="profile-bio">
                            { if member.bio.is_empty() { text.no_bio } else { member.bio.as_str() } }
                        </p>
                    </div>
                </div>

                <div class="profile-layout__main">
                    <div class="card">
                        <h3 class="card__title">{ text.stats }</h3>
                        <div class="stat-grid">
                            <div class="stat-tile">
                                <div class="stat-tile__value">{ stat_cells.posts }</div>
                                <div class="stat-tile__label">{ text.posts }</div>
                            </div>
                            <div class="stat-tile">
                                <div class="stat-tile__value">{ stat_cells.reviews }</div>
                                <div class="stat-tile__label">{ text.reviews }</div>
                            </div>
                            <div class="stat-tile">
                                <div class="stat-tile__value">{ stat_cells.wiki_articles }</div>
                                <div class="stat-tile__label">{ text.wiki_contributions }</div>
                            </div>
                        </div>
                    </div>

                    <div class="card">
                        <h3 class="card__title">{ text.badges }</h3>
                        { if badges.rows().is_empty() {
                            html! { <div class="empty-state">{ text.no_badges }</div> }
                        } else {
                            html! {
                                <div class="badge-grid">
                                    { for badges.rows().iter().map(|badge| html! {
                                        <div class="badge-tile">
                                            <div class="badge-tile__icon">
                                                { if badge.icon.is_empty() { "🏆" } else { badge.icon.as_str() } }
                                            </div>
                                            <div class="badge-tile__name">
                                                { if lang == Lang::Ar { &badge.name_ar } else { &badge.name_en } }
                                            </div>
                                        </div>
                                    }) }
                                </div>
                            }
                        } }
                    </div>
                </div>
            </div>
        </div>
    }
}

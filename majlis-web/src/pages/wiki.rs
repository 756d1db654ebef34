//! Encyclopedia index and article reader.
use majlis_core::model::WikiArticle;
use yew::prelude::*;

use crate::hooks::use_remote;
use crate::i18n::{Lang, fmt_date};
use crate::services::StoreHandle;

struct Text {
    title: &'static str,
    contents: &'static str,
    related: &'static str,
    no_data: &'static str,
    author: &'static str,
    updated: &'static str,
    by: &'static str,
    unknown: &'static str,
}

const AR: Text = Text {
    title: "موسوعة الألعاب",
    contents: "المحتويات",
    related: "صفحات ذات صلة",
    no_data: "لا توجد مقالات",
    author: "كاتب المقال",
    updated: "آخر تحديث",
    by: "بواسطة",
    unknown: "غير معروف",
};

const EN: Text = Text {
    title: "Game Encyclopedia",
    contents: "Table of Contents",
    related: "Related Pages",
    no_data: "No articles available",
    author: "Author",
    updated: "Last updated",
    by: "By",
    unknown: "Unknown",
};

impl Text {
    const fn for_lang(lang: Lang) -> &'static Self {
        match lang {
            Lang::Ar => &AR,
            Lang::En => &EN,
        }
    }
}

const RELATED_LIMIT: usize = 5;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub store: StoreHandle,
    pub lang: Lang,
    #[prop_or_default]
    pub article_id: Option<AttrValue>,
}

/// Markdown-style `#` headings, stripped of their markers, for the table of
/// contents rail.
fn table_of_contents(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| line.starts_with('#'))
        .map(|line| line.trim_start_matches('#').trim_start().to_string())
        .collect()
}

fn article_summary(article: &WikiArticle, lang: Lang, text: &Text) -> Html {
    let content = article.content(lang.tag());
    let excerpt: String = content.chars().take(150).collect();
    html! {
        <div class="card wiki-card">
            { article.game.as_ref().map(|game| html! {
                <div class="wiki-card__game">{ game.title(lang.tag()) }</div>
            }).unwrap_or_default() }
            <h3 class="card__title">{ article.title(lang.tag()) }</h3>
            <p class="card__excerpt">{ format!("{excerpt}...") }</p>
            <div class="card__meta">
                <span>{ format!("{} {}", text.by, article.author.as_ref().map_or(text.unknown, |a| a.username.as_str())) }</span>
            </div>
        </div>
    }
}

#[function_component(WikiPage)]
pub fn wiki_page(props: &Props) -> Html {
    let text = Text::for_lang(props.lang);
    let lang = props.lang;

    let articles = use_remote(props.store.clone(), |store| async move {
        store.wiki_articles().await
    });
    let article = use_remote(
        (props.store.clone(), props.article_id.clone()),
        |(store, id)| async move {
            match id {
                Some(id) => store.wiki_article(&id).await,
                None => Ok(None),
            }
        },
    );

    // Reader layout when an article payload resolved; index grid otherwise.
    if let (Some(_), Some(Some(article))) = (&props.article_id, article.ready()) {
        let content = article.content(lang.tag());
        let toc = table_of_contents(content);
        return html! {
            <div class="page wiki-page" dir={lang.dir()}>
                <div class="wiki-layout">
                    <article class="wiki-article card">
                        <h1 class="page__title">{ article.title(lang.tag()) }</h1>
                        { article.game.as_ref().map(|game| html! {
                            <div class="wiki-article__game">{ game.title(lang.tag()) }</div>
                        }).unwrap_or_default() }
                        <div class="wiki-article__content">
                            { for content.split('\n').map(|para| html! { <p>{ para }</p> }) }
                        </div>
                        <footer class="wiki-article__footer">
                            <div>{ format!("{}: {}", text.author, article.author.as_ref().map_or(text.unknown, |a| a.username.as_str())) }</div>
                            <div>{ format!("{}: {}", text.updated, fmt_date(&article.updated_at, lang)) }</div>
                        </footer>
                    </article>

                    <aside class="wiki-rail">
                        { if toc.is_empty() { Html::default() } else {
                            html! {
                                <div class="card">
                                    <h3 class="card__title">{ text.contents }</h3>
                                    { for toc.iter().map(|heading| html! {
                                        <div class="wiki-rail__entry">{ heading }</div>
                                    }) }
                                </div>
                            }
                        } }
                        <div class="card">
                            <h3 class="card__title">{ text.related }</h3>
                            { for articles.rows().iter().take(RELATED_LIMIT).map(|related| html! {
                                <div class="wiki-rail__entry">{ related.title(lang.tag()) }</div>
                            }) }
                        </div>
                    </aside>
                </div>
            </div>
        };
    }

    html! {
        <div class="page wiki-page" dir={lang.dir()}>
            <h1 class="page__title">{ text.title }</h1>
            <div class="card-grid">
                { if articles.rows().is_empty() {
                    html! { <div class="empty-state">{ text.no_data }</div> }
                } else {
                    articles.rows().iter().map(|entry| article_summary(entry, lang, text)).collect()
                } }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toc_extracts_and_strips_heading_markers() {
        let content = "# Intro\nbody text\n## Details\nmore\nplain";
        assert_eq!(table_of_contents(content), vec!["Intro", "Details"]);
        assert!(table_of_contents("no headings here").is_empty());
    }
}

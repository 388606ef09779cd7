use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::newsletter::Newsletter;
use crate::content::site_content;

#[component]
pub fn HomePage() -> impl IntoView {
    let home = match site_content() {
        Ok(content) => Either::Left(view! {
            <Title text=content.home.title.clone() />
            <section class="flex flex-col items-center text-center gap-6 mb-16 section-content">
                <h1 class="font-bold text-4xl">{content.home.headline.clone()}</h1>
                <p class="text-xl text-muted max-w-2xl">{content.home.subline.clone()}</p>
            </section>
            <section class="flex flex-col items-center gap-8 mb-16">
                <Pills heading="Links">
                    {content
                        .home
                        .links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-3 py-1 rounded-md border border-muted/30 hover:bg-cyan/20 hover:text-cyan transition-all duration-200"
                                >
                                    {link.name.clone()}
                                </a>
                            }
                        })
                        .collect_view()}
                </Pills>
                <Pills heading="Skills">
                    {content
                        .home
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <span class="px-3 py-1 rounded-md bg-brightBlack/20 text-muted">
                                    {skill.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </Pills>
            </section>
        }),
        Err(e) => Either::Right(view! {
            <Title text="Home" />
            <p class="text-red">{e.to_string()}</p>
        }),
    };

    view! {
        <div class="w-full page-content">
            {home}
            <Newsletter />
        </div>
    }
}

#[component]
fn Pills(heading: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-2">
            <h2 class="text-sm font-bold uppercase tracking-wide text-muted">{heading}</h2>
            <div class="flex flex-wrap justify-center gap-2 max-w-2xl">{children()}</div>
        </div>
    }
}

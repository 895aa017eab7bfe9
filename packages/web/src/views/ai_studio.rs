//! AI studio: a filterable grid of prompt templates. Choosing one hands the
//! prompt to the full chat through the one-shot navigation slot.

use dioxus::prelude::*;

use api::ai::fallback_templates;
use api::{AiTemplate, ApiClient};
use store::{QueryCache, QueryKey};
use ui::icons::FaLightbulb;
use ui::{cached_query, use_pending_prompt, Icon, QueryState, Spinner};

use crate::views::{AppHeader, RequireAuth};
use crate::Route;

const CATEGORIES: &[&str] = &["all", "investment", "budgeting", "loans"];

#[component]
pub fn AiStudio() -> Element {
    let client = use_context::<ApiClient>();
    let cache = use_context::<QueryCache>();
    let pending_prompt = use_pending_prompt();
    let nav = use_navigator();

    let mut templates = use_signal(|| QueryState::<Vec<AiTemplate>>::Loading);
    let mut category = use_signal(|| "all".to_string());

    let _loader = use_resource(move || {
        let client = client.clone();
        let cache = cache.clone();
        async move {
            let fetch = {
                let client = client.clone();
                move || {
                    let client = client.clone();
                    async move { client.ai_templates().await }
                }
            };
            let loaded = match cached_query(&cache, QueryKey::AiTemplates, fetch).await {
                Ok(list) if !list.is_empty() => list,
                Ok(_) => fallback_templates(),
                Err(e) => {
                    tracing::warn!("template catalogue unavailable, using built-ins: {e}");
                    fallback_templates()
                }
            };
            templates.set(QueryState::Ready(loaded));
        }
    });

    let chips = CATEGORIES.iter().map(|&name| {
        let class = if category() == name {
            "chip chip-active"
        } else {
            "chip"
        };
        rsx! {
            button {
                key: "{name}",
                class: "{class}",
                onclick: move |_| category.set(name.to_string()),
                "{name}"
            }
        }
    });

    let body = match templates() {
        QueryState::Loading => rsx! {
            Spinner { label: "Loading templates…" }
        },
        QueryState::Failed(message) => rsx! {
            div { class: "load-error", "Could not load templates: {message}" }
        },
        QueryState::Ready(list) => {
            let selected = category();
            let cards = list
                .into_iter()
                .filter(|t| selected == "all" || t.category == selected)
                .map(|template| {
                    let question = template.question().to_string();
                    rsx! {
                        button {
                            key: "{template.id}",
                            class: "template-card",
                            onclick: move |_| {
                                pending_prompt.set(question.clone());
                                nav.push(Route::Chat {});
                            },
                            div {
                                class: "template-card-head",
                                Icon { icon: FaLightbulb, width: 16, height: 16 }
                                h3 { "{template.title}" }
                            }
                            p { class: "template-desc", "{template.description}" }
                            span { class: "template-category", "{template.category}" }
                        }
                    }
                });
            rsx! {
                div { class: "template-grid", {cards} }
            }
        }
    };

    rsx! {
        RequireAuth {
            div {
                class: "app-page",
                AppHeader {}
                main {
                    class: "app-main",
                    div {
                        class: "page-title-row",
                        div {
                            h1 { "AI Studio" }
                            p { class: "page-subtitle", "Get instant, personalized financial advice from ready-made prompts." }
                        }
                    }
                    div { class: "chip-row", {chips} }
                    {body}
                }
            }
        }
    }
}

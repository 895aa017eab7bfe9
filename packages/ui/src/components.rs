//! Small shared controls. Plain elements with classes; the stylesheet in the
//! web crate does the rest.

use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = false)] disabled: bool,
    #[props(default)] class: String,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{variant.class()} {class}",
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

/// Centered modal over a dimmed backdrop. Clicking the close button (not the
/// backdrop) dismisses it.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            div {
                class: "modal-card",
                div {
                    class: "modal-header",
                    h2 { "{title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 16, height: 16 }
                    }
                }
                {children}
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Inline success/failure banner under forms.
#[component]
pub fn Banner(kind: BannerKind, message: String) -> Element {
    let class = match kind {
        BannerKind::Success => "banner banner-success",
        BannerKind::Error => "banner banner-error",
    };
    rsx! {
        div { class: "{class}", "{message}" }
    }
}

/// Loading indicator for pending fetches.
#[component]
pub fn Spinner(#[props(default)] label: String) -> Element {
    rsx! {
        div {
            class: "spinner-wrap",
            div { class: "spinner" }
            if !label.is_empty() {
                p { class: "spinner-label", "{label}" }
            }
        }
    }
}

use dioxus::prelude::*;

/// Top navigation bar: a brand title on the left, page actions on the right.
#[component]
pub fn Navbar(
    title: String,
    #[props(default = "navbar".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        nav {
            class: "{class}",
            div {
                class: "nav-content",
                h1 { class: "nav-brand", "{title}" }
                div {
                    class: "nav-actions",
                    {children}
                }
            }
        }
    }
}

use dioxus::prelude::*;

#[component]
pub fn NotFoundView(path: String) -> Element {
    rsx! {
        h1 { "404" }
        p { "Không tìm thấy trang · Page not found: " code { "{path}" } }
        a { href: "/", "Về trang chủ · Back home" }
    }
}

#[component]
pub fn ErrorView(status: u16, message: String) -> Element {
    rsx! {
        h1 { "{status}" }
        p { class: "alert error", "{message}" }
        a { href: "/", "Về trang chủ · Back home" }
    }
}

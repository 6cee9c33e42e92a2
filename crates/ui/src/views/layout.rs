use dioxus::prelude::*;

/// dioxus-html 0.7 ships no `<html>` element; declare it so `rsx!` can emit the
/// document root.
#[allow(non_camel_case_types, non_upper_case_globals, dead_code)]
mod dioxus_elements {
    pub use dioxus::prelude::dioxus_elements::*;

    pub mod elements {
        pub use dioxus::prelude::dioxus_elements::elements::*;
        pub use super::html;
    }

    pub mod html {
        pub use dioxus::prelude::dioxus_elements::global_attributes::*;

        pub const TAG_NAME: &str = "html";
        pub const NAME_SPACE: Option<&str> = None;
    }
}

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Trang chủ"),
    ("/vocabulary", "Từ vựng"),
    ("/exercises", "Bài tập"),
    ("/quiz", "Câu đố"),
    ("/pronunciation", "Phát âm"),
    ("/progress", "Tiến độ"),
    ("/resources", "Tài liệu"),
];

/// Full HTML document with the shared header and navigation.
#[component]
pub fn Layout(title: String, active: String, children: Element) -> Element {
    rsx! {
        html { lang: "vi",
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                title { "{title} · Annie" }
                link { rel: "stylesheet", href: "/static/style.css" }
            }
            body {
                header { class: "site-header",
                    a { class: "brand", href: "/", "Annie" }
                    nav {
                        for (href, label) in NAV_LINKS.iter().copied() {
                            a {
                                key: "{href}",
                                class: if href == active { "nav-link active" } else { "nav-link" },
                                href: "{href}",
                                "{label}"
                            }
                        }
                    }
                }
                main { class: "page", {children} }
                footer { class: "site-footer",
                    p { "Học tiếng Anh mỗi ngày · Learn English every day" }
                }
                script { src: "/static/script.js" }
            }
        }
    }
}

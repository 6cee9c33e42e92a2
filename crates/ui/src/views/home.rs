use dioxus::prelude::*;

const SECTIONS: &[(&str, &str, &str)] = &[
    ("/vocabulary", "Từ vựng", "Browse everyday words with Vietnamese translations."),
    ("/exercises", "Bài tập", "Fill in the blank with the right word."),
    ("/quiz", "Câu đố", "Pick the English word for each Vietnamese prompt."),
    ("/pronunciation", "Phát âm", "Listen to and repeat today's words."),
    ("/progress", "Tiến độ", "See your latest scores."),
];

#[component]
pub fn HomeView() -> Element {
    rsx! {
        section { class: "hero",
            h1 { "Chào mừng đến với Annie" }
            p { "An English learning companion for Vietnamese speakers." }
        }
        div { class: "cards",
            for (href, label, blurb) in SECTIONS.iter().copied() {
                a { key: "{href}", class: "card", href: "{href}",
                    h2 { "{label}" }
                    p { "{blurb}" }
                }
            }
        }
    }
}

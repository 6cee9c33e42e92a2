use dioxus::prelude::*;

/// `(title, url, description)`
pub const RESOURCES: &[(&str, &str, &str)] = &[
    (
        "BBC Learning English",
        "https://www.bbc.co.uk/learningenglish",
        "Short lessons, news and grammar videos.",
    ),
    (
        "British Council LearnEnglish",
        "https://learnenglish.britishcouncil.org",
        "Graded reading, listening and grammar practice.",
    ),
    (
        "VOA Learning English",
        "https://learningenglish.voanews.com",
        "Slow-paced news with transcripts.",
    ),
    (
        "Cambridge Dictionary",
        "https://dictionary.cambridge.org/dictionary/english-vietnamese",
        "English-Vietnamese dictionary with audio.",
    ),
    (
        "Oxford Learner's Dictionaries",
        "https://www.oxfordlearnersdictionaries.com",
        "Definitions and pronunciation for learners.",
    ),
];

#[component]
pub fn ResourcesView() -> Element {
    rsx! {
        h1 { "Tài liệu · Resources" }
        ul { class: "resources",
            for (title, url, description) in RESOURCES.iter().copied() {
                li { key: "{url}",
                    a { href: "{url}", target: "_blank", rel: "noopener", "{title}" }
                    p { class: "muted", "{description}" }
                }
            }
        }
    }
}

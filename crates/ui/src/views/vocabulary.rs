use dioxus::prelude::*;

use crate::vm::{VocabularyPageVm, VocabularyRowVm};

#[component]
pub fn VocabularyView(vm: VocabularyPageVm) -> Element {
    rsx! {
        h1 { "Từ vựng · Vocabulary" }
        if let Some(message) = vm.error.as_deref() {
            p { class: "alert error", "{message}" }
        }
        input {
            id: "vocabularySearch",
            r#type: "search",
            placeholder: "Tìm kiếm / Search",
        }
        if vm.words.is_empty() && vm.error.is_none() {
            p { class: "muted", "No words yet." }
        }
        ul { class: "vocab-list",
            for word in vm.words.iter().cloned() {
                VocabularyItem { key: "{word.id}", word }
            }
        }
    }
}

#[component]
pub fn VocabularyItem(word: VocabularyRowVm) -> Element {
    rsx! {
        li { class: "vocab-item",
            div { class: "vocab-head",
                span { class: "english-word", "{word.english}" }
                AudioButton { word: word.english.clone() }
            }
            span { class: "vietnamese-translation", "{word.vietnamese}" }
            if let Some(example) = word.example.as_deref() {
                p { class: "example", "{example}" }
            }
            if let Some(url) = word.audio_url.as_deref() {
                audio { controls: true, src: "{url}" }
            }
        }
    }
}

/// Speaks `word` with the browser's speech synthesis.
#[component]
pub fn AudioButton(word: String) -> Element {
    rsx! {
        button {
            class: "audio-btn",
            r#type: "button",
            title: "Nghe · Listen",
            "data-word": "{word}",
            "🔊"
        }
    }
}

use dioxus::prelude::*;

use crate::views::vocabulary::{AudioButton, VocabularyItem};
use crate::vm::PronunciationVm;

#[component]
pub fn PronunciationView(vm: PronunciationVm) -> Element {
    rsx! {
        h1 { "Phát âm · Pronunciation" }
        section { class: "current-word",
            p { class: "muted", "Practise this word:" }
            p { class: "big-word", "{vm.current_word}" }
            AudioButton { word: vm.current_word.clone() }
        }
        h2 { "Từ của ngày · Daily words" }
        ul { class: "vocab-list",
            for word in vm.daily_words.iter().cloned() {
                VocabularyItem { key: "{word.id}", word }
            }
        }
    }
}

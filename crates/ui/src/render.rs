use dioxus::prelude::*;

use crate::views::{
    ErrorView, HomeView, Layout, NotFoundView, PracticeView, ProgressView, PronunciationView,
    ResourcesView, VocabularyView,
};
use crate::vm::{PracticePageVm, ProgressPageVm, PronunciationVm, VocabularyPageVm};

/// Everything the server can render, with the data each page needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Vocabulary(VocabularyPageVm),
    Exercises(PracticePageVm),
    Quiz(PracticePageVm),
    Progress(ProgressPageVm),
    Pronunciation(PronunciationVm),
    Resources,
    NotFound { path: String },
    Error { status: u16, message: String },
}

impl Page {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Trang chủ",
            Page::Vocabulary(_) => "Từ vựng",
            Page::Exercises(_) => "Bài tập",
            Page::Quiz(_) => "Câu đố",
            Page::Progress(_) => "Tiến độ",
            Page::Pronunciation(_) => "Phát âm",
            Page::Resources => "Tài liệu",
            Page::NotFound { .. } => "Không tìm thấy",
            Page::Error { .. } => "Lỗi",
        }
    }

    /// Navigation entry highlighted for this page.
    #[must_use]
    pub fn nav_path(&self) -> &'static str {
        match self {
            Page::Home | Page::NotFound { .. } | Page::Error { .. } => "/",
            Page::Vocabulary(_) => "/vocabulary",
            Page::Exercises(_) => "/exercises",
            Page::Quiz(_) => "/quiz",
            Page::Progress(_) => "/progress",
            Page::Pronunciation(_) => "/pronunciation",
            Page::Resources => "/resources",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DocumentProps {
    page: Page,
}

#[component]
fn Document(props: DocumentProps) -> Element {
    let title = props.page.title().to_owned();
    let active = props.page.nav_path().to_owned();
    rsx! {
        Layout { title, active,
            PageBody { page: props.page.clone() }
        }
    }
}

#[component]
fn PageBody(page: Page) -> Element {
    match page {
        Page::Home => rsx! { HomeView {} },
        Page::Vocabulary(vm) => rsx! { VocabularyView { vm } },
        Page::Exercises(vm) | Page::Quiz(vm) => rsx! { PracticeView { vm } },
        Page::Progress(vm) => rsx! { ProgressView { vm } },
        Page::Pronunciation(vm) => rsx! { PronunciationView { vm } },
        Page::Resources => rsx! { ResourcesView {} },
        Page::NotFound { path } => rsx! { NotFoundView { path } },
        Page::Error { status, message } => rsx! { ErrorView { status, message } },
    }
}

/// Render `page` to a complete HTML document.
#[must_use]
pub fn render_page(page: Page) -> String {
    let mut dom = VirtualDom::new_with_props(Document, DocumentProps { page });
    dom.rebuild_in_place();
    format!("<!DOCTYPE html>{}", dioxus_ssr::render(&dom))
}

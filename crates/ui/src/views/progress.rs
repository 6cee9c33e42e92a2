use dioxus::prelude::*;

use crate::vm::{GradeResultVm, ProgressPageVm};

#[component]
pub fn ProgressView(vm: ProgressPageVm) -> Element {
    rsx! {
        h1 { "Tiến độ · Progress" }
        section { class: "overall",
            h2 { "Overall" }
            p { class: "score",
                span { class: "overall-percentage", "{vm.overall_label}" }
                " ({vm.total_correct}/{vm.total_questions})"
            }
            div { class: "bar",
                div { class: "bar-fill", style: "width: {vm.overall_width}%" }
            }
            if !vm.has_activity() {
                p { class: "muted",
                    "Chưa có kết quả. "
                    a { href: "/exercises", "Try an exercise" }
                    " or "
                    a { href: "/quiz", "take a quiz" }
                    "."
                }
            }
        }
        ResultSection { title: "Bài tập · Exercises", result: vm.exercise.clone() }
        ResultSection { title: "Câu đố · Quiz", result: vm.quiz.clone() }
    }
}

#[component]
fn ResultSection(
    title: &'static str,
    #[props(!optional)] result: Option<GradeResultVm>,
) -> Element {
    rsx! {
        section { class: "result",
            h2 { "{title}" }
            match result {
                None => rsx! {
                    p { class: "muted", "Not attempted yet." }
                },
                Some(result) => rsx! {
                    p { class: "score",
                        "{result.correct}/{result.total} correct · {result.percentage_label}"
                    }
                    if let Some(at) = result.graded_at_str.as_deref() {
                        p { class: "muted", "Graded {at}" }
                    }
                    table { class: "details",
                        thead {
                            tr {
                                th { "#" }
                                th { "Result" }
                                th { "Correct answer" }
                            }
                        }
                        tbody {
                            for detail in result.details.iter() {
                                tr {
                                    key: "{detail.id}",
                                    class: if detail.correct { "correct" } else { "incorrect" },
                                    td { "{detail.id}" }
                                    td { if detail.correct { "✓" } else { "✗" } }
                                    td { "{detail.answer}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

use dioxus::prelude::*;

use annie_core::model::QuestionKind;

use crate::vm::{PracticePageVm, PracticeQuestionVm};

#[component]
pub fn PracticeView(vm: PracticePageVm) -> Element {
    let (heading, intro) = match vm.kind {
        QuestionKind::Exercise => (
            "Bài tập · Exercises",
            "Type the missing word. Spelling counts, capitals do not.",
        ),
        QuestionKind::Quiz => ("Câu đố · Quiz", "Choose one answer for each question."),
    };

    rsx! {
        h1 { "{heading}" }
        p { class: "muted", "{intro}" }
        if vm.is_empty() {
            p { class: "alert", "No questions available yet." }
        } else {
            form {
                id: vm.form_id(),
                method: "post",
                action: vm.action(),
                p { id: "validationMessage", class: "alert error hidden",
                    "Vui lòng trả lời tất cả câu hỏi · Please answer every question."
                }
                for question in vm.questions.iter().cloned() {
                    match vm.kind {
                        QuestionKind::Exercise => rsx! {
                            ExerciseQuestion { key: "{question.field_name}", question }
                        },
                        QuestionKind::Quiz => rsx! {
                            QuizQuestion { key: "{question.field_name}", question }
                        },
                    }
                }
                div { class: "form-actions",
                    button { class: "primary", r#type: "submit", "Nộp bài · Submit" }
                    button {
                        id: "showAnswersBtn",
                        class: "secondary",
                        r#type: "button",
                        "Xem đáp án · Show answers"
                    }
                }
            }
        }
    }
}

#[component]
fn ExerciseQuestion(question: PracticeQuestionVm) -> Element {
    rsx! {
        fieldset { class: "exercise-question",
            legend { "{question.number}. {question.prompt}" }
            if let Some(level) = question.difficulty {
                span { class: "tag", "{level}" }
            }
            ul { class: "options",
                for option in question.options.iter() {
                    li { key: "{option}", "{option}" }
                }
            }
            input {
                r#type: "text",
                name: "{question.field_name}",
                autocomplete: "off",
                required: true,
            }
            RevealedAnswer { answer: question.answer.clone() }
        }
    }
}

#[component]
fn QuizQuestion(question: PracticeQuestionVm) -> Element {
    rsx! {
        fieldset { class: "quiz-question",
            legend { "{question.number}. {question.prompt}" }
            if let Some(level) = question.difficulty {
                span { class: "tag", "{level}" }
            }
            for (index, option) in question.options.iter().enumerate() {
                label { key: "{index}", class: "choice",
                    input {
                        r#type: "radio",
                        name: "{question.field_name}",
                        value: "{option}",
                    }
                    " {option}"
                }
            }
            RevealedAnswer { answer: question.answer.clone() }
        }
    }
}

#[component]
fn RevealedAnswer(answer: String) -> Element {
    rsx! {
        p { class: "answer hidden", "Đáp án: {answer}" }
    }
}

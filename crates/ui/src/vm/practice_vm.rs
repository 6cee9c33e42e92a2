use annie_core::model::QuestionKind;
use services::PracticeItem;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeQuestionVm {
    pub number: usize,
    pub field_name: String,
    pub prompt: String,
    pub options: Vec<String>,
    /// Stored answer, revealed on request.
    pub answer: String,
    pub difficulty: Option<&'static str>,
}

/// A rendered exercise or quiz form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticePageVm {
    pub kind: QuestionKind,
    pub questions: Vec<PracticeQuestionVm>,
}

impl PracticePageVm {
    #[must_use]
    pub fn from_items(kind: QuestionKind, items: &[PracticeItem]) -> Self {
        let questions = items
            .iter()
            .enumerate()
            .map(|(index, item)| PracticeQuestionVm {
                number: index + 1,
                field_name: item.field_name(),
                prompt: item.question.prompt().to_owned(),
                options: item.options.clone(),
                answer: item.question.answer().to_owned(),
                difficulty: item.question.difficulty().map(|d| d.as_str()),
            })
            .collect();
        Self { kind, questions }
    }

    /// Route the form posts to.
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self.kind {
            QuestionKind::Exercise => "/check_exercise",
            QuestionKind::Quiz => "/check_quiz",
        }
    }

    #[must_use]
    pub fn form_id(&self) -> &'static str {
        match self.kind {
            QuestionKind::Exercise => "exerciseForm",
            QuestionKind::Quiz => "quizForm",
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

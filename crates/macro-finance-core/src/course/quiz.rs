//! "Test your understanding" questions for session 1.

use serde::Serialize;

use crate::error::MacroFinanceError;
use crate::MacroFinanceResult;

#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub id: u8,
    pub prompt: &'static str,
    pub choices: &'static [&'static str],
    #[serde(skip)]
    correct: usize,
    #[serde(skip)]
    praise: &'static str,
    #[serde(skip)]
    hint: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum QuizOutcome {
    Correct { feedback: String },
    Incorrect { hint: String },
}

const QUESTIONS: [QuizQuestion; 3] = [
    QuizQuestion {
        id: 1,
        prompt: "If β = 0.95 and r = 5%, what happens in equilibrium?",
        choices: &[
            "The agent saves (c₀ < Y₀)",
            "The agent borrows (c₀ > Y₀)",
            "The agent neither saves nor borrows",
        ],
        correct: 2,
        praise: "Correct! With β = 0.95 and 1/(1+r) = 1/1.05 ≈ 0.952 the two are approximately equal, \
                 so the agent's time preference matches market prices.",
        hint: "Try again. Compare β with 1/(1+r).",
    },
    QuizQuestion {
        id: 2,
        prompt: "Why is the bad-state contingent claim typically more expensive per unit probability?",
        choices: &[
            "Because bad states are more likely",
            "Because marginal utility is higher when consumption is low",
            "Because of transaction costs",
        ],
        correct: 1,
        praise: "Correct! State prices reflect probabilities and marginal utilities. \
                 Low consumption → high marginal utility → higher q.",
        hint: "Not quite. Think about the insurance principle.",
    },
    QuizQuestion {
        id: 3,
        prompt: "The First Welfare Theorem states that:",
        choices: &[
            "All Pareto optimal allocations are competitive equilibria",
            "All competitive equilibria are Pareto optimal",
            "Prices always equal marginal costs",
        ],
        correct: 1,
        praise: "Correct! CE ⇒ PO (the Second Welfare Theorem goes the other direction).",
        hint: "That's the Second Welfare Theorem (or incorrect).",
    },
];

pub fn questions() -> &'static [QuizQuestion] {
    &QUESTIONS
}

/// Grade a zero-based `choice` for question `question_id`.
pub fn grade(question_id: u8, choice: usize) -> MacroFinanceResult<QuizOutcome> {
    let question = QUESTIONS
        .iter()
        .find(|q| q.id == question_id)
        .ok_or_else(|| MacroFinanceError::InvalidInput {
            field: "question".into(),
            reason: format!("No question with id {question_id}"),
        })?;

    if choice >= question.choices.len() {
        return Err(MacroFinanceError::InvalidInput {
            field: "choice".into(),
            reason: format!(
                "Question {} has {} choices",
                question_id,
                question.choices.len()
            ),
        });
    }

    if choice == question.correct {
        Ok(QuizOutcome::Correct {
            feedback: question.praise.to_string(),
        })
    } else {
        Ok(QuizOutcome::Incorrect {
            hint: question.hint.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_q1_neither_saves_nor_borrows() {
        assert!(matches!(grade(1, 2).unwrap(), QuizOutcome::Correct { .. }));
        assert_eq!(
            grade(1, 0).unwrap(),
            QuizOutcome::Incorrect {
                hint: "Try again. Compare β with 1/(1+r).".into()
            }
        );
    }

    #[test]
    fn test_out_of_range_choice() {
        assert!(grade(2, 3).is_err());
        assert!(grade(7, 0).is_err());
    }

    #[test]
    fn test_answers_hidden_when_serialised() {
        let json = serde_json::to_value(questions()).unwrap();
        assert!(json[0].get("correct").is_none());
        assert_eq!(json[0]["choices"].as_array().unwrap().len(), 3);
    }
}

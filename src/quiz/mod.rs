use crate::error::{MatchError, Result};
use crate::types::preferences::{
    ExperienceLevel, PortabilityPreference, PrimaryUse, PriorityWeights, UsagePattern,
    UserPreferences,
};
use serde::Deserialize;

/// The fixed quiz step sequence. Each step must be answered in order and the
/// transition is gated by that step's validation predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    Experience,
    PrimaryUse,
    UsagePattern,
    Portability,
    Budget,
    Priorities,
    Results,
}

impl QuizStep {
    pub fn label(&self) -> &'static str {
        match self {
            QuizStep::Experience => "experience",
            QuizStep::PrimaryUse => "primary-use",
            QuizStep::UsagePattern => "usage-pattern",
            QuizStep::Portability => "portability",
            QuizStep::Budget => "budget",
            QuizStep::Priorities => "priorities",
            QuizStep::Results => "results",
        }
    }

    fn next(self) -> QuizStep {
        match self {
            QuizStep::Experience => QuizStep::PrimaryUse,
            QuizStep::PrimaryUse => QuizStep::UsagePattern,
            QuizStep::UsagePattern => QuizStep::Portability,
            QuizStep::Portability => QuizStep::Budget,
            QuizStep::Budget => QuizStep::Priorities,
            QuizStep::Priorities => QuizStep::Results,
            QuizStep::Results => QuizStep::Results,
        }
    }
}

/// One typed answer for one step.
#[derive(Debug, Clone, Copy)]
pub enum Answer {
    Experience(ExperienceLevel),
    PrimaryUse(PrimaryUse),
    UsagePattern(UsagePattern),
    Portability(PortabilityPreference),
    Budget(f64),
    Priorities(PriorityWeights),
}

impl Answer {
    fn step(&self) -> QuizStep {
        match self {
            Answer::Experience(_) => QuizStep::Experience,
            Answer::PrimaryUse(_) => QuizStep::PrimaryUse,
            Answer::UsagePattern(_) => QuizStep::UsagePattern,
            Answer::Portability(_) => QuizStep::Portability,
            Answer::Budget(_) => QuizStep::Budget,
            Answer::Priorities(_) => QuizStep::Priorities,
        }
    }
}

/// Answers file for the non-interactive quiz run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizAnswers {
    pub experience: Option<ExperienceLevel>,
    pub primary_use: Option<PrimaryUse>,
    pub usage_pattern: Option<UsagePattern>,
    pub portability: Option<PortabilityPreference>,
    pub budget: Option<f64>,
    pub priorities: Option<PriorityWeights>,
}

/// Immutable-draft quiz session: answers accumulate step by step and the
/// completed preferences are only handed out once every step has passed.
#[derive(Debug, Default)]
pub struct QuizSession {
    experience: Option<ExperienceLevel>,
    primary_use: Option<PrimaryUse>,
    usage_pattern: Option<UsagePattern>,
    portability: Option<PortabilityPreference>,
    budget: Option<f64>,
    priorities: Option<PriorityWeights>,
    completed: usize,
}

const STEP_ORDER: [QuizStep; 7] = [
    QuizStep::Experience,
    QuizStep::PrimaryUse,
    QuizStep::UsagePattern,
    QuizStep::Portability,
    QuizStep::Budget,
    QuizStep::Priorities,
    QuizStep::Results,
];

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> QuizStep {
        STEP_ORDER[self.completed]
    }

    /// Record an answer for the current step, validating it first. Answers
    /// for any other step are rejected.
    pub fn answer(&mut self, answer: Answer) -> Result<()> {
        let current = self.step();
        if answer.step() != current {
            return Err(MatchError::StepOutOfOrder {
                expected: current.label(),
                got: answer.step().label(),
            });
        }

        match answer {
            Answer::Experience(value) => self.experience = Some(value),
            Answer::PrimaryUse(value) => self.primary_use = Some(value),
            Answer::UsagePattern(value) => self.usage_pattern = Some(value),
            Answer::Portability(value) => self.portability = Some(value),
            Answer::Budget(value) => {
                if !value.is_finite() || value < 0.0 {
                    return Err(MatchError::InvalidPreferences(format!(
                        "budget must be a non-negative amount (found {value})"
                    )));
                }
                self.budget = Some(value);
            }
            Answer::Priorities(value) => {
                value.validate()?;
                self.priorities = Some(value);
            }
        }

        self.completed += 1;
        Ok(())
    }

    /// Only valid once the session has reached the results step.
    pub fn finish(&self) -> Result<UserPreferences> {
        match (
            self.experience,
            self.primary_use,
            self.usage_pattern,
            self.portability,
            self.budget,
            self.priorities,
        ) {
            (
                Some(experience),
                Some(primary_use),
                Some(usage_pattern),
                Some(portability),
                Some(budget),
                Some(priorities),
            ) if self.step() == QuizStep::Results => Ok(UserPreferences {
                experience,
                primary_use,
                usage_pattern,
                portability,
                budget,
                priorities,
            }),
            _ => Err(MatchError::QuizIncomplete(self.step().label())),
        }
    }
}

/// Drive a full session from an answers file. A missing answer errors with
/// the name of the step it was needed for.
pub fn run_quiz(answers: &QuizAnswers) -> Result<UserPreferences> {
    let mut session = QuizSession::new();
    loop {
        let answer = match session.step() {
            QuizStep::Experience => Answer::Experience(
                answers
                    .experience
                    .ok_or(MatchError::MissingAnswer("experience"))?,
            ),
            QuizStep::PrimaryUse => Answer::PrimaryUse(
                answers
                    .primary_use
                    .ok_or(MatchError::MissingAnswer("primary-use"))?,
            ),
            QuizStep::UsagePattern => Answer::UsagePattern(
                answers
                    .usage_pattern
                    .ok_or(MatchError::MissingAnswer("usage-pattern"))?,
            ),
            QuizStep::Portability => Answer::Portability(
                answers
                    .portability
                    .ok_or(MatchError::MissingAnswer("portability"))?,
            ),
            QuizStep::Budget => {
                Answer::Budget(answers.budget.ok_or(MatchError::MissingAnswer("budget"))?)
            }
            QuizStep::Priorities => Answer::Priorities(
                answers
                    .priorities
                    .ok_or(MatchError::MissingAnswer("priorities"))?,
            ),
            QuizStep::Results => break,
        };
        session.answer(answer)?;
    }
    session.finish()
}

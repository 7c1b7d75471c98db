//! Narrative content and story constants
//!
//! Everything the quest says or checks against lives here: names, the
//! hearts target, the lock code, the trivia bank, gifts and dialog pages.
//! Text may contain `{player}` and `{partner}` placeholders, filled in at
//! draw time by [`Story::personalize`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{HEART_COUNT, LOCK_CODE_LEN};
use crate::sim::dialog::DialogPage;

/// Number of gifts the narrative hands out (after Hearts and after Basket)
pub const GIFTS_NEEDED: usize = 2;

/// Story validation failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoryError {
    #[error("lock code must be 4 ASCII digits, got {0:?}")]
    InvalidLockCode(String),

    #[error("hearts target {target} must be between 1 and {available}")]
    HeartTarget { target: usize, available: usize },

    #[error("trivia bank is empty")]
    EmptyTrivia,

    #[error("trivia question {index} has no options")]
    NoOptions { index: usize },

    #[error("trivia question {index}: correct option {correct} out of range ({options} options)")]
    CorrectOutOfRange {
        index: usize,
        correct: usize,
        options: usize,
    },

    #[error("need at least {needed} gifts, found {found}")]
    NotEnoughGifts { found: usize, needed: usize },
}

/// A single trivia question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options`
    pub correct: usize,
}

impl TriviaQuestion {
    fn new(prompt: &str, options: &[&str], correct: usize) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct,
        }
    }
}

/// A gift handed out after a mini-game win
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gift {
    pub name: String,
    /// Image id looked up by the platform (drawn if loaded)
    pub image: String,
    pub blurb: String,
}

/// Immutable story constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Story {
    pub title: String,
    pub player_name: String,
    pub partner_name: String,
    pub hearts_to_collect: usize,
    /// Compared as a string so leading zeros matter
    pub lock_code: String,
    pub trivia: Vec<TriviaQuestion>,
    pub gifts: Vec<Gift>,
    pub intro: Vec<DialogPage>,
    pub hearts_cleared: Vec<DialogPage>,
    pub basket_cleared: Vec<DialogPage>,
    pub lock_opened: Vec<DialogPage>,
    pub trivia_cleared: Vec<DialogPage>,
    /// Shown when the finale question is answered NO
    pub declined: Vec<DialogPage>,
    pub finale_prompt: String,
    pub finale_message: String,
}

impl Default for Story {
    fn default() -> Self {
        Self {
            title: "A Quest for {partner}".to_string(),
            player_name: "Jamie".to_string(),
            partner_name: "Riley".to_string(),
            hearts_to_collect: 7,
            lock_code: "0225".to_string(),
            trivia: vec![
                TriviaQuestion::new(
                    "Where did {player} and {partner} first meet?",
                    &["The coffee shop", "The library", "A concert", "The park"],
                    0,
                ),
                TriviaQuestion::new(
                    "What is {partner}'s favorite dessert?",
                    &["Ice cream", "Tiramisu", "Cheesecake"],
                    1,
                ),
                TriviaQuestion::new(
                    "Which movie did we watch on our first date?",
                    &["Titanic", "Up", "Spirited Away"],
                    2,
                ),
            ],
            gifts: vec![
                Gift {
                    name: "A bouquet of roses".to_string(),
                    image: "gift_roses".to_string(),
                    blurb: "Seven hearts, one bouquet.".to_string(),
                },
                Gift {
                    name: "A box of chocolates".to_string(),
                    image: "gift_chocolates".to_string(),
                    blurb: "Nothing but net.".to_string(),
                },
            ],
            intro: vec![
                DialogPage::new(
                    "Hi {partner}!",
                    "{player} made you a little quest. Press Enter to continue.",
                ),
                DialogPage::new(
                    "Collect the hearts",
                    "Move with A/D or the arrows, jump with W (twice for a double jump), \
                     drop with S. Gather 7 hearts.",
                ),
            ],
            hearts_cleared: vec![
                DialogPage::new("You did it!", "That's 7 hearts. {player} has one more: yours."),
                DialogPage::new("A gift awaits", "Every heart earns a reward..."),
            ],
            basket_cleared: vec![DialogPage::new(
                "Swish!",
                "Three in a row. {player} is impressed.",
            )],
            lock_opened: vec![DialogPage::new(
                "Click!",
                "You remembered the date. Now for a few questions...",
            )],
            trivia_cleared: vec![DialogPage::new(
                "Perfect score",
                "You know us so well. One last question, {partner}...",
            )],
            declined: vec![DialogPage::new("Hmm...", "Are you sure? Think it over and try again.")],
            finale_prompt: "Will you be my Valentine?".to_string(),
            finale_message: "{player} + {partner}, forever.".to_string(),
        }
    }
}

impl Story {
    /// Check the constants the mini-games rely on
    pub fn validate(&self) -> Result<(), StoryError> {
        let code_ok = self.lock_code.len() == LOCK_CODE_LEN
            && self.lock_code.bytes().all(|b| b.is_ascii_digit());
        if !code_ok {
            return Err(StoryError::InvalidLockCode(self.lock_code.clone()));
        }

        if !(1..=HEART_COUNT).contains(&self.hearts_to_collect) {
            return Err(StoryError::HeartTarget {
                target: self.hearts_to_collect,
                available: HEART_COUNT,
            });
        }

        if self.trivia.is_empty() {
            return Err(StoryError::EmptyTrivia);
        }
        for (index, question) in self.trivia.iter().enumerate() {
            if question.options.is_empty() {
                return Err(StoryError::NoOptions { index });
            }
            if question.correct >= question.options.len() {
                return Err(StoryError::CorrectOutOfRange {
                    index,
                    correct: question.correct,
                    options: question.options.len(),
                });
            }
        }

        if self.gifts.len() < GIFTS_NEEDED {
            return Err(StoryError::NotEnoughGifts {
                found: self.gifts.len(),
                needed: GIFTS_NEEDED,
            });
        }

        Ok(())
    }

    /// Fill in `{player}` / `{partner}` placeholders
    pub fn personalize(&self, text: &str) -> String {
        text.replace("{player}", &self.player_name)
            .replace("{partner}", &self.partner_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_story_is_valid() {
        assert_eq!(Story::default().validate(), Ok(()));
    }

    #[test]
    fn test_first_question_answer_is_zero() {
        assert_eq!(Story::default().trivia[0].correct, 0);
    }

    #[test]
    fn test_rejects_bad_lock_code() {
        let story = Story {
            lock_code: "22a5".to_string(),
            ..Default::default()
        };
        assert_eq!(
            story.validate(),
            Err(StoryError::InvalidLockCode("22a5".to_string()))
        );

        let story = Story {
            lock_code: "225".to_string(),
            ..Default::default()
        };
        assert!(matches!(story.validate(), Err(StoryError::InvalidLockCode(_))));
    }

    #[test]
    fn test_rejects_unreachable_heart_target() {
        let story = Story {
            hearts_to_collect: HEART_COUNT + 1,
            ..Default::default()
        };
        assert!(matches!(story.validate(), Err(StoryError::HeartTarget { .. })));
    }

    #[test]
    fn test_rejects_out_of_range_answer() {
        let mut story = Story::default();
        story.trivia[1].correct = 9;
        assert_eq!(
            story.validate(),
            Err(StoryError::CorrectOutOfRange {
                index: 1,
                correct: 9,
                options: 3
            })
        );
    }

    #[test]
    fn test_rejects_missing_gifts() {
        let mut story = Story::default();
        story.gifts.truncate(1);
        assert!(matches!(
            story.validate(),
            Err(StoryError::NotEnoughGifts { found: 1, needed: 2 })
        ));
    }

    #[test]
    fn test_personalize() {
        let story = Story::default();
        assert_eq!(story.personalize("{player} & {partner}"), "Jamie & Riley");
    }
}

use keydrill_core::event::{InputEvent, InputType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Succeeded,
    /// Correct character after a mistake.
    Recovered,
    Failed,
}

/// One correctly typed character of the practice text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub time_stamp: f64,
    pub code_point: char,
    pub time_to_type: f64,
    /// A mistake was made at this position before it was typed right.
    pub typo: bool,
}

/// Matches typed characters against the practice text. The cursor stops on
/// errors: a wrong key marks the position as a typo and must be followed by
/// the expected character.
#[derive(Debug, Clone)]
pub struct TextCursor {
    chars: Vec<char>,
    steps: Vec<Step>,
    typo: bool,
}

impl TextCursor {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            steps: Vec::new(),
            typo: false,
        }
    }

    pub fn reset(&mut self) {
        self.steps.clear();
        self.typo = false;
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn pos(&self) -> usize {
        self.steps.len()
    }

    pub fn at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Next character to type, `None` once completed.
    pub fn expected(&self) -> Option<char> {
        self.at(self.pos())
    }

    pub fn completed(&self) -> bool {
        self.pos() == self.len()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn remaining(&self) -> &[char] {
        &self.chars[self.pos()..]
    }

    pub fn on_input(&mut self, event: InputEvent) -> Feedback {
        match event.input_type {
            InputType::AppendChar => {
                self.append_char(event.time_stamp, event.code_point, event.time_to_type)
            }
            InputType::AppendLineBreak => {
                self.append_char(event.time_stamp, ' ', event.time_to_type)
            }
            InputType::ClearChar => {
                self.typo = true;
                Feedback::Succeeded
            }
            InputType::ClearWord => {
                while self.pos() > 0 && self.chars[self.pos() - 1] != ' ' {
                    self.steps.pop();
                }
                self.typo = true;
                Feedback::Succeeded
            }
        }
    }

    fn append_char(&mut self, time_stamp: f64, code_point: char, time_to_type: f64) -> Feedback {
        let Some(expected) = self.expected() else {
            return Feedback::Failed;
        };

        // A stray space between words is ignored unless it follows a mistake.
        if expected != ' ' && code_point == ' ' && !self.typo {
            return Feedback::Succeeded;
        }

        if expected == code_point {
            let typo = self.typo;
            self.steps.push(Step {
                time_stamp,
                code_point,
                time_to_type,
                typo,
            });
            self.typo = false;
            return if typo {
                Feedback::Recovered
            } else {
                Feedback::Succeeded
            };
        }

        self.typo = true;
        Feedback::Failed
    }
}

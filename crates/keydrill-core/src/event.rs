//! Keystroke events exchanged between the keyboard layer, the romaji input
//! method and the text matcher.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    AppendChar,
    AppendLineBreak,
    ClearChar,
    ClearWord,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputEvent {
    pub input_type: InputType,
    /// Meaningful for `AppendChar` only.
    pub code_point: char,
    /// Milliseconds since the previous keystroke.
    pub time_to_type: f64,
    /// Milliseconds, caller-defined epoch.
    pub time_stamp: f64,
}

impl InputEvent {
    pub fn append_char(code_point: char, time_to_type: f64, time_stamp: f64) -> Self {
        Self {
            input_type: InputType::AppendChar,
            code_point,
            time_to_type,
            time_stamp,
        }
    }

    pub fn line_break(time_to_type: f64, time_stamp: f64) -> Self {
        Self {
            input_type: InputType::AppendLineBreak,
            code_point: '\n',
            time_to_type,
            time_stamp,
        }
    }

    pub fn clear_char(time_stamp: f64) -> Self {
        Self {
            input_type: InputType::ClearChar,
            code_point: '\0',
            time_to_type: 0.0,
            time_stamp,
        }
    }

    pub fn clear_word(time_stamp: f64) -> Self {
        Self {
            input_type: InputType::ClearWord,
            code_point: '\0',
            time_to_type: 0.0,
            time_stamp,
        }
    }

    /// Same event shape with a different character and timing.
    pub fn with_char(&self, code_point: char, time_to_type: f64) -> Self {
        Self {
            input_type: InputType::AppendChar,
            code_point,
            time_to_type,
            time_stamp: self.time_stamp,
        }
    }
}

//! Scripted prompt answers consumed in strict order.

use regex::Regex;
use std::fmt;
use std::sync::Mutex;

use super::error::AutomationError;

/// One queued answer for an upcoming prompt.
///
/// `Literal` answers text prompts verbatim and matches choice labels exactly;
/// `Contains` answers text prompts with its needle and matches any label
/// containing it; `Pattern` matches labels against a regex and cannot answer
/// text prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedInput {
    Literal(String),
    Contains(String),
    Pattern(String),
}

impl ScriptedInput {
    pub fn literal(value: impl Into<String>) -> Self {
        ScriptedInput::Literal(value.into())
    }

    pub fn contains(value: impl Into<String>) -> Self {
        ScriptedInput::Contains(value.into())
    }

    pub fn pattern(value: impl Into<String>) -> Self {
        ScriptedInput::Pattern(value.into())
    }

    /// The text this input would type into an input box, when it can.
    pub fn answer_text(&self) -> Option<&str> {
        match self {
            ScriptedInput::Literal(s) | ScriptedInput::Contains(s) => Some(s),
            ScriptedInput::Pattern(_) => None,
        }
    }

    /// The confirmation this input answers, when it reads as one. Only
    /// literal y/yes/true/n/no/false count.
    pub fn as_yes_no(&self) -> Option<bool> {
        match self {
            ScriptedInput::Literal(s) => match s.to_lowercase().as_str() {
                "y" | "yes" | "true" => Some(true),
                "n" | "no" | "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Whether this input selects the given choice label.
    pub fn matches_label(&self, label: &str) -> Result<bool, AutomationError> {
        match self {
            ScriptedInput::Literal(s) => Ok(label == s),
            ScriptedInput::Contains(s) => Ok(label.contains(s.as_str())),
            ScriptedInput::Pattern(s) => {
                let re = Regex::new(s).map_err(|e| AutomationError::InvalidPattern {
                    pattern: s.clone(),
                    message: e.to_string(),
                })?;
                Ok(re.is_match(label))
            }
        }
    }
}

impl fmt::Display for ScriptedInput {
    /// Renders the raw value only; unused-input errors embed this text and
    /// the retry classifier substring-matches on it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptedInput::Literal(s) | ScriptedInput::Contains(s) | ScriptedInput::Pattern(s) => {
                f.write_str(s)
            }
        }
    }
}

/// FIFO queue of scripted inputs with a consumption cursor.
pub struct InputQueue {
    inputs: Vec<ScriptedInput>,
    cursor: Mutex<usize>,
}

impl InputQueue {
    pub fn new(inputs: Vec<ScriptedInput>) -> Self {
        Self {
            inputs,
            cursor: Mutex::new(0),
        }
    }

    /// Take the next input, or fail naming the prompt that went unanswered.
    pub fn next(&self, prompt: &str) -> Result<ScriptedInput, AutomationError> {
        self.try_next().ok_or_else(|| AutomationError::QueueExhausted {
            prompt: prompt.to_string(),
        })
    }

    /// Take the next input when one is queued. Callers with an interactive
    /// fallback use this instead of [`next`](Self::next).
    pub fn try_next(&self) -> Option<ScriptedInput> {
        let mut cursor = self.cursor.lock().unwrap();
        let input = self.inputs.get(*cursor)?;
        *cursor += 1;
        Some(input.clone())
    }

    pub fn consumed(&self) -> usize {
        *self.cursor.lock().unwrap()
    }

    /// Inputs not yet consumed, in queue order.
    pub fn remaining(&self) -> Vec<ScriptedInput> {
        let cursor = *self.cursor.lock().unwrap();
        self.inputs[cursor..].to_vec()
    }

    /// Error for a run that finished with inputs left over, or None when the
    /// queue was fully drained.
    pub fn unused_inputs_error(&self) -> Option<AutomationError> {
        let remaining = self.remaining();
        if remaining.is_empty() {
            return None;
        }
        Some(AutomationError::UnusedInputs {
            values: remaining.iter().map(|i| i.to_string()).collect(),
        })
    }
}

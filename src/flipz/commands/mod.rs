use crate::model::Side;

pub mod add;
pub mod flip;
pub mod list;
pub mod navigate;
pub mod show;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What an operation hands back to the presentation layer: the data to
/// render plus any messages for the error channel.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Card fronts in deck order, for selection lists.
    pub labels: Vec<String>,
    /// Text of the showing side of the current card, `None` on an empty deck.
    pub text: Option<String>,
    /// The side the next flip would reveal, for the flip affordance label.
    pub reveals: Option<Side>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_reveals(mut self, side: Side) -> Self {
        self.reveals = Some(side);
        self
    }
}

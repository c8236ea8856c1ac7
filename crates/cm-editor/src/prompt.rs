//! Asking the user for a name and code.
//!
//! Dialogs belong to the host UI.  The editor only needs the two strings the
//! user typed, or `None` if they cancelled.  Code normalization and
//! validation happen in the editor, so a prompt can hand back raw input.

/// Which kind of thing is being named.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PromptKind {
    Entrance,
    Label,
}

impl PromptKind {
    /// Dialog title.
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::Entrance => "New entrance",
            PromptKind::Label    => "New label",
        }
    }

    /// Hint shown next to the name field.
    pub fn name_hint(self) -> &'static str {
        match self {
            PromptKind::Entrance => "Enter a name for this building",
            PromptKind::Label    => "Enter a name for this location",
        }
    }

    /// Hint shown next to the code field.
    pub fn code_hint(self) -> &'static str {
        "Enter a 3-letter abbreviated name"
    }
}

/// Raw user input from a prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptReply {
    pub name: String,
    pub code: String,
}

impl PromptReply {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self { name: name.into(), code: code.into() }
    }
}

/// Host-provided naming dialog.
pub trait NamePrompt {
    /// Ask for a name and code.  `None` means the user cancelled.
    fn ask(&mut self, kind: PromptKind) -> Option<PromptReply>;
}

/// Closures work as prompts, which keeps tests and scripted hosts short.
impl<F> NamePrompt for F
where
    F: FnMut(PromptKind) -> Option<PromptReply>,
{
    fn ask(&mut self, kind: PromptKind) -> Option<PromptReply> {
        self(kind)
    }
}

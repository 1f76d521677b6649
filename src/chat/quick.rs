//! Canned prompts offered before a conversation starts.

/// A predefined prompt with a short title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    /// Short title shown in the menu.
    pub title: &'static str,
    /// Prompt sent verbatim as the message.
    pub prompt: &'static str,
}

/// The fixed quick-action menu.
pub static QUICK_ACTIONS: [QuickAction; 5] = [
    QuickAction {
        title: "Business Steps",
        prompt: "Give me steps to start a coffee shop",
    },
    QuickAction {
        title: "Name Ideas",
        prompt: "Suggest names for my business",
    },
    QuickAction {
        title: "Social Media",
        prompt: "Create a LinkedIn post",
    },
    QuickAction {
        title: "Innovation",
        prompt: "Give me innovative ideas",
    },
    QuickAction {
        title: "Logo Design",
        prompt: "Create a logo",
    },
];

/// Looks up a quick action by its 1-based menu position.
pub fn quick_action(position: usize) -> Option<&'static QuickAction> {
    position.checked_sub(1).and_then(|index| QUICK_ACTIONS.get(index))
}

/// Follow-up prompt sent after the user accepts a suggested name.
pub fn name_follow_up(name: &str) -> String {
    format!("I like the name \"{name}\". Can you create a logo for it?")
}

use super::message::Message;
use super::participant::{Participant, Slot};

/// The turn-based transcript engine.
///
/// `TranscriptEngine` owns the whole session state: the two participants,
/// the active-speaker slot, and the ordered message log. It exposes the
/// operations the presentation layer drives one-to-one from user actions:
/// - appending a message attributed to the active speaker
/// - switching the turn between the two slots
/// - renaming a participant
/// - clearing the log
/// - rendering/exporting the log as plain text
///
/// The engine is purely synchronous and never touches the filesystem or
/// any UI toolkit; the presentation layer re-reads its state after each
/// mutation to refresh the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEngine {
    /// The two participants, in slot order.
    participants: [Participant; 2],
    /// The slot currently permitted to compose a message.
    active: Slot,
    /// Append-only message log. Grows via append, empties via clear.
    messages: Vec<Message>,
}

impl TranscriptEngine {
    /// Creates an engine with the default participants ("User 1"/"User 2")
    /// and the first slot active.
    pub fn new() -> Self {
        Self::with_participants(Participant::default_pair())
    }

    /// Creates an engine with the given participants, first slot active
    /// and an empty transcript.
    pub fn with_participants(participants: [Participant; 2]) -> Self {
        Self {
            participants,
            active: Slot::First,
            messages: Vec::new(),
        }
    }

    /// Appends a message attributed to the active speaker.
    ///
    /// The text is trimmed of leading/trailing whitespace first. Empty or
    /// whitespace-only input is a silent no-op, not an error.
    ///
    /// # Returns
    ///
    /// A reference to the appended message, or `None` if the input was
    /// discarded.
    pub fn append_message(&mut self, text: &str) -> Option<&Message> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.messages.push(Message::new(self.active, trimmed));
        self.messages.last()
    }

    /// Toggles the active speaker between the two slots.
    ///
    /// Always succeeds; subsequent appends attribute to the new speaker.
    ///
    /// # Returns
    ///
    /// The slot that is active after the switch.
    pub fn switch_turn(&mut self) -> Slot {
        self.active = self.active.other();
        self.active
    }

    /// Renames the participant in the given slot.
    ///
    /// The new name is trimmed first; empty or whitespace-only input is a
    /// no-op that leaves the old name in place. Renaming never rewrites the
    /// message log: attribution is stored by slot, so already-appended
    /// messages render under the new name.
    ///
    /// # Returns
    ///
    /// `true` if the name was changed, `false` if the input was discarded.
    pub fn rename_participant(&mut self, slot: Slot, new_name: &str) -> bool {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return false;
        }

        self.participants[slot.index()].name = trimmed.to_string();
        true
    }

    /// Empties the message log unconditionally. Irreversible.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Renders the transcript as one `"Name: text"` line per message, in
    /// append order.
    ///
    /// Names are resolved by slot at render time, so a rename relabels
    /// past lines. This is a pure read-only projection.
    pub fn render_lines(&self) -> Vec<String> {
        self.messages
            .iter()
            .map(|m| format!("{}: {}", self.participants[m.slot.index()].name, m.text))
            .collect()
    }

    /// Returns the plain-text export of the transcript: the rendered lines
    /// joined with newlines, no markup, no trailing metadata.
    ///
    /// The engine has no file I/O; writing the returned text to a
    /// user-chosen path is the presentation layer's job.
    pub fn export_text(&self) -> String {
        self.render_lines().join("\n")
    }

    /// Returns the currently active slot.
    pub fn active_slot(&self) -> Slot {
        self.active
    }

    /// Returns the currently active participant.
    pub fn active_participant(&self) -> &Participant {
        &self.participants[self.active.index()]
    }

    /// Returns the participant in the given slot.
    pub fn participant(&self, slot: Slot) -> &Participant {
        &self.participants[slot.index()]
    }

    /// Returns both participants in slot order.
    pub fn participants(&self) -> &[Participant; 2] {
        &self.participants
    }

    /// Returns the message log in append order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the number of messages in the transcript.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for TranscriptEngine {
    fn default() -> Self {
        Self::new()
    }
}

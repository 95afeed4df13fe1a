use serde::{Deserialize, Serialize};

/// Who spoke a turn.
///
/// The wire form is the exact, case-sensitive string `"Agent"` or `"Customer"`.
/// Any other label decodes to `Other`, which is never treated as the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Speaker {
    Agent,
    Customer,
    Other,
}

impl Speaker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agent => "Agent",
            Self::Customer => "Customer",
            Self::Other => "Other",
        }
    }

    pub fn is_agent(&self) -> bool {
        matches!(self, Self::Agent)
    }
}

impl From<String> for Speaker {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Agent" => Self::Agent,
            "Customer" => Self::Customer,
            _ => Self::Other,
        }
    }
}

impl From<Speaker> for &'static str {
    fn from(speaker: Speaker) -> Self {
        speaker.as_str()
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One turn of a call transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    pub speaker: Speaker,
}

impl Utterance {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speaker,
        }
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Speaker::Agent, text)
    }

    pub fn customer(text: impl Into<String>) -> Self {
        Self::new(Speaker::Customer, text)
    }

    pub fn is_agent(&self) -> bool {
        self.speaker.is_agent()
    }
}

/// An ordered call transcript. Index equals turn order.
///
/// Serialized as a bare JSON array of utterances, matching the per-call
/// record format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation {
    utterances: Vec<Utterance>,
}

impl Conversation {
    pub fn new(utterances: Vec<Utterance>) -> Self {
        Self { utterances }
    }

    pub fn utterances(&self) -> &[Utterance] {
        &self.utterances
    }

    pub fn get(&self, index: usize) -> Option<&Utterance> {
        self.utterances.get(index)
    }

    pub fn len(&self) -> usize {
        self.utterances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utterances.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Utterance> {
        self.utterances.iter()
    }

    /// Agent turns with their positions in the call.
    pub fn agent_turns(&self) -> impl Iterator<Item = (usize, &Utterance)> {
        self.utterances
            .iter()
            .enumerate()
            .filter(|(_, u)| u.is_agent())
    }
}

impl From<Vec<Utterance>> for Conversation {
    fn from(utterances: Vec<Utterance>) -> Self {
        Self::new(utterances)
    }
}

impl FromIterator<Utterance> for Conversation {
    fn from_iter<I: IntoIterator<Item = Utterance>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Utterance;
    type IntoIter = std::slice::Iter<'a, Utterance>;

    fn into_iter(self) -> Self::IntoIter {
        self.utterances.iter()
    }
}

/// Raw consumed stream message. The session only tracks `offset`.
/// `value` is opaque text — only the classifier interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamRecord {
    /// Position within the topic, for log correlation.
    pub offset: i64,
    /// Message key, if the producer set one.
    pub key: Option<String>,
    /// UTF-8 payload, expected to be a JSON envelope.
    pub value: String,
}

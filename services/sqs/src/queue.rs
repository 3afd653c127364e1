use std::collections::BTreeMap;

/// Queue is a named SQS queue.
///
/// `url` is empty until the queue has been created or looked up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queue {
    /// Name of the queue, the last path segment of its url.
    pub name: String,
    /// Url the queue is addressed with.
    pub url: String,
    /// Attributes sent with `CreateQueue`, such as `VisibilityTimeout`.
    ///
    /// Kept sorted so `Attribute.N` numbering is stable.
    pub attributes: BTreeMap<String, String>,
}

impl Queue {
    /// Create a queue that is only known by name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Add an attribute used when the queue is created.
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// Build a queue from its url, taking the last path segment as name.
    pub fn from_url(url: &str) -> Self {
        let name = url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default();

        Self {
            name: name.to_string(),
            url: url.to_string(),
            attributes: BTreeMap::new(),
        }
    }
}

/// Message sent to a queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// Id assigned by the service.
    pub message_id: String,
    /// Body as it was sent.
    pub body: String,
    /// MD5 digest of the body reported by the service.
    pub md5_of_body: String,
    /// Delivery delay requested for this message.
    pub delay_seconds: Option<u32>,
}

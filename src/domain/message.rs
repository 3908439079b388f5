#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// One push notification as accepted by the messages API.
///
/// This is a plain record with one slot per API field. An empty string or a
/// zero numeric value means "not set"; unset optional fields are left off the
/// wire. Nothing is checked at construction: the whole record is validated
/// against [`MESSAGE_FIELDS`](crate::domain::MESSAGE_FIELDS) on every send,
/// so a `Message` can be filled in any order and reused across sends.
pub struct Message {
    /// Recipient user (or group) key. Required, exactly 30 printable ASCII
    /// characters.
    pub user: String,
    /// Message body. Required, 1 to 1024 printable ASCII characters.
    pub message: String,
    /// Message title, up to 250 characters. Defaults to the application name
    /// server-side when unset.
    pub title: String,
    /// Name of a single device to deliver to instead of all of them, up to
    /// 25 characters.
    pub device: String,
    /// Supplementary URL shown under the message, up to 512 characters.
    pub url: String,
    /// Link title for [`url`](Message::url), up to 100 characters. Sent only
    /// when `url` itself is set.
    pub url_title: String,
    /// Unix timestamp overriding the message's displayed date. Sent only
    /// when nonzero.
    pub time: i64,
    /// Notification sound name, up to 16 characters.
    pub sound: String,
    /// Priority from -2 (lowest) to 2 (emergency). Out-of-range values are
    /// clamped, never rejected.
    pub priority: i8,
    /// Seconds between repeated emergency notifications. Sent only when
    /// `priority` is 2, clamped into 30..=86400.
    pub retry: u64,
    /// Seconds until an emergency notification stops repeating. Sent only
    /// when `priority` is 2, clamped into 30..=86400.
    pub expire: u64,
}

impl Message {
    /// Create a message with both required fields set and everything else
    /// unset.
    pub fn new(user: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            message: message.into(),
            ..Self::default()
        }
    }
}

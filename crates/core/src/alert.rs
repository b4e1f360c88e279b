//! Water-level alert predicate and notification content.

use crate::types::DbId;

/// Threshold used when `ALERT_THRESHOLD` is unset or unusable.
pub const DEFAULT_ALERT_THRESHOLD: f64 = 200.0;

/// Level above which an ingested reading raises an alert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertThreshold(f64);

impl AlertThreshold {
    /// Build a threshold from an explicit value.
    ///
    /// Non-finite and zero values fall back to [`DEFAULT_ALERT_THRESHOLD`].
    pub fn new(value: f64) -> Self {
        if value.is_finite() && value != 0.0 {
            Self(value)
        } else {
            Self(DEFAULT_ALERT_THRESHOLD)
        }
    }

    /// Parse a raw configuration value.
    ///
    /// Only the leading integer is read, so `"150abc"` is 150 and `"250.9"`
    /// is 250. `None`, blank input, a value with no leading digits and zero
    /// all yield the default threshold.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(leading_integer)
            .map(|n| Self::new(n as f64))
            .unwrap_or_default()
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Strict greater-than comparison against the raw reading value.
    pub fn is_exceeded_by(&self, level: f64) -> bool {
        level > self.0
    }
}

/// Optional sign followed by decimal digits, after leading whitespace.
fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let digits_from = usize::from(s.starts_with(['+', '-']));
    let end = s[digits_from..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| i + digits_from);
    if end == digits_from {
        return None;
    }
    s[..end].parse().ok()
}

impl Default for AlertThreshold {
    fn default() -> Self {
        Self(DEFAULT_ALERT_THRESHOLD)
    }
}

/// Subject, plain-text body and HTML body of one alert email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl AlertMessage {
    /// Content sent to every subscriber of a reservoir whose level crossed
    /// the alert threshold.
    pub fn water_level_rise(reservoir_id: DbId, level: f64) -> Self {
        let subject = "Alert! The water level has risen".to_string();
        let text_body = format!(
            "Hello,\n\n\
             A rise in the water level has been detected at reservoir {reservoir_id} \
             (reading: {level}). Please review the situation as soon as possible."
        );
        let html_body = format!(
            "<p>Hello,</p>\
             <p><strong><span style=\"color: red\">Warning!</span></strong> \
             A rise in the water level has been detected at reservoir {reservoir_id} \
             (reading: {level}).</p>\
             <p>Please review the situation as soon as possible.</p>"
        );
        Self {
            subject,
            text_body,
            html_body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_when_unset() {
        assert_eq!(AlertThreshold::parse(None).value(), 200.0);
    }

    #[test]
    fn parse_defaults_on_garbage_and_zero() {
        assert_eq!(AlertThreshold::parse(Some("high")).value(), 200.0);
        assert_eq!(AlertThreshold::parse(Some("  ")).value(), 200.0);
        assert_eq!(AlertThreshold::parse(Some("0")).value(), 200.0);
        assert_eq!(AlertThreshold::parse(Some("NaN")).value(), 200.0);
    }

    #[test]
    fn parse_accepts_numbers() {
        assert_eq!(AlertThreshold::parse(Some("150")).value(), 150.0);
        assert_eq!(AlertThreshold::parse(Some(" 87 ")).value(), 87.0);
        assert_eq!(AlertThreshold::parse(Some("-5")).value(), -5.0);
    }

    #[test]
    fn parse_reads_leading_integer_only() {
        assert_eq!(AlertThreshold::parse(Some("150abc")).value(), 150.0);
        assert_eq!(AlertThreshold::parse(Some("250.9")).value(), 250.0);
        assert_eq!(AlertThreshold::parse(Some("+300 cm")).value(), 300.0);
        assert_eq!(AlertThreshold::parse(Some("-")).value(), 200.0);
        assert_eq!(AlertThreshold::parse(Some(".5")).value(), 200.0);
    }

    #[test]
    fn comparison_is_strict() {
        let threshold = AlertThreshold::default();
        assert!(threshold.is_exceeded_by(250.0));
        assert!(threshold.is_exceeded_by(200.01));
        assert!(!threshold.is_exceeded_by(200.0));
        assert!(!threshold.is_exceeded_by(150.0));
    }

    #[test]
    fn message_mentions_reservoir_and_level() {
        let msg = AlertMessage::water_level_rise(4, 250.0);
        assert!(msg.subject.contains("water level"));
        assert!(msg.text_body.contains("reservoir 4"));
        assert!(msg.text_body.contains("250"));
        assert!(msg.html_body.starts_with("<p>"));
        assert!(msg.html_body.contains("reservoir 4"));
    }
}

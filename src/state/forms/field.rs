//! Form field value objects

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a contact form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    QueryType,
    Message,
    Consent,
}

impl FieldId {
    /// All fields in form order
    pub const ALL: [FieldId; 6] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::QueryType,
        FieldId::Message,
        FieldId::Consent,
    ];

    /// Key used to address the field (matches the markup names of the form)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::QueryType => "queryType",
            Self::Message => "message",
            Self::Consent => "consent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email Address",
            Self::QueryType => "Query Type",
            Self::Message => "Message",
            Self::Consent => "I consent to being contacted by the team",
        }
    }

    /// Text inputs validate on blur, the checkbox and radio group on change
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            Self::FirstName | Self::LastName | Self::Email | Self::Message
        )
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a contact form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0:?}")]
pub struct UnknownFieldError(pub String);

impl FromStr for FieldId {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

/// Options of the query type radio group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    GeneralEnquiry,
    SupportRequest,
}

impl QueryType {
    pub const ALL: [QueryType; 2] = [QueryType::GeneralEnquiry, QueryType::SupportRequest];

    pub fn label(&self) -> &'static str {
        match self {
            Self::GeneralEnquiry => "General Enquiry",
            Self::SupportRequest => "Support Request",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::GeneralEnquiry => Self::SupportRequest,
            Self::SupportRequest => Self::GeneralEnquiry,
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Choice(Option<QueryType>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Validation state of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    /// Not validated since load or the last reset
    #[default]
    Unknown,
    Valid,
    Invalid,
}

/// Represents a single form field with its value and validation state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
    pub validity: Validity,
    pub error: Option<String>,
}

impl FormField {
    /// Create a new text field
    pub fn text(id: FieldId, is_multiline: bool) -> Self {
        Self::with_value(id, FieldValue::Text(String::new()), is_multiline)
    }

    /// Create a new checkbox field
    pub fn checkbox(id: FieldId) -> Self {
        Self::with_value(id, FieldValue::Flag(false), false)
    }

    /// Create a new radio group field with nothing selected
    pub fn radio(id: FieldId) -> Self {
        Self::with_value(id, FieldValue::Choice(None), false)
    }

    fn with_value(id: FieldId, value: FieldValue, is_multiline: bool) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            value,
            is_multiline,
            validity: Validity::Unknown,
            error: None,
        }
    }

    /// Get the text value (returns empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Get the checkbox state (false for non-checkbox fields)
    pub fn as_flag(&self) -> bool {
        matches!(self.value, FieldValue::Flag(true))
    }

    /// Get the selected radio option
    pub fn as_choice(&self) -> Option<QueryType> {
        match self.value {
            FieldValue::Choice(choice) => choice,
            _ => None,
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    pub fn set_flag(&mut self, checked: bool) {
        self.value = FieldValue::Flag(checked);
    }

    pub fn toggle_flag(&mut self) {
        let checked = self.as_flag();
        self.set_flag(!checked);
    }

    pub fn select(&mut self, choice: Option<QueryType>) {
        self.value = FieldValue::Choice(choice);
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Clear the field back to its initial state
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Flag(checked) => *checked = false,
            FieldValue::Choice(choice) => *choice = None,
        }
        self.validity = Validity::Unknown;
        self.error = None;
    }

    pub fn is_invalid(&self) -> bool {
        self.validity == Validity::Invalid
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(true) => "[x]".to_string(),
            FieldValue::Flag(false) => "[ ]".to_string(),
            FieldValue::Choice(choice) => choice.map(|c| c.label()).unwrap_or("").to_string(),
        }
    }
}

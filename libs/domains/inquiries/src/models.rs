use chrono::{DateTime, Utc};
use domain_notifications::InquiryNotification;
use mongodb::bson;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{InquiryError, InquiryResult};

/// A stored contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new inquiry. Every field must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewInquiry {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub message: String,
}

/// Contact form body as posted by the website.
///
/// Fields are optional so that a missing field and `null` are reported the
/// same way as an empty string. Numbers and booleans are taken as their text
/// (`"phone": 8123` is `"8123"`); arrays and objects count as missing.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct ContactRequest {
    #[serde(default, deserialize_with = "scalar_text")]
    #[schema(example = "Budi")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    #[schema(example = "08123")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    #[schema(example = "a@b.com")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    #[schema(example = "Hi")]
    pub message: Option<String>,
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

fn present(field: Option<String>, name: &'static str) -> InquiryResult<String> {
    field
        .filter(|value| !value.is_empty())
        .ok_or(InquiryError::Incomplete(name))
}

impl ContactRequest {
    /// Check that name, email and message were supplied.
    ///
    /// Phone is not checked here; an empty phone is caught when the
    /// inquiry is validated for storage.
    pub fn into_new_inquiry(self) -> InquiryResult<NewInquiry> {
        Ok(NewInquiry {
            name: present(self.name, "name")?,
            email: present(self.email, "email")?,
            message: present(self.message, "message")?,
            phone: self.phone.unwrap_or_default(),
        })
    }
}

impl Inquiry {
    /// Validate `input` and stamp it with a fresh id and the current time.
    pub fn new(input: NewInquiry) -> InquiryResult<Self> {
        input.validate()?;

        Ok(Self {
            id: Uuid::now_v7(),
            name: input.name,
            phone: input.phone,
            email: input.email,
            message: input.message,
            created_at: Utc::now(),
        })
    }

    /// The fields that go into the owner's notification email.
    pub fn notification(&self) -> InquiryNotification {
        InquiryNotification {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

/// Storage shape of an inquiry in the `inquiries` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: bson::DateTime,
}

impl From<&Inquiry> for InquiryDocument {
    fn from(inquiry: &Inquiry) -> Self {
        Self {
            id: inquiry.id.to_string(),
            name: inquiry.name.clone(),
            phone: inquiry.phone.clone(),
            email: inquiry.email.clone(),
            message: inquiry.message.clone(),
            created_at: bson::DateTime::from_millis(inquiry.created_at.timestamp_millis()),
        }
    }
}

impl TryFrom<InquiryDocument> for Inquiry {
    type Error = InquiryError;

    fn try_from(doc: InquiryDocument) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&doc.id)
            .map_err(|e| InquiryError::Database(format!("Invalid inquiry id '{}': {}", doc.id, e)))?;
        let created_at = DateTime::from_timestamp_millis(doc.created_at.timestamp_millis())
            .ok_or_else(|| InquiryError::Database("Inquiry timestamp out of range".to_string()))?;

        Ok(Self {
            id,
            name: doc.name,
            phone: doc.phone,
            email: doc.email,
            message: doc.message,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budi() -> ContactRequest {
        ContactRequest {
            name: Some("Budi".to_string()),
            phone: Some("08123".to_string()),
            email: Some("a@b.com".to_string()),
            message: Some("Hi".to_string()),
        }
    }

    #[test]
    fn test_complete_request_converts() {
        let input = budi().into_new_inquiry().unwrap();
        assert_eq!(input.name, "Budi");
        assert_eq!(input.phone, "08123");
    }

    #[test]
    fn test_missing_or_empty_fields_are_incomplete() {
        let missing_email = ContactRequest {
            email: None,
            ..budi()
        };
        assert!(matches!(
            missing_email.into_new_inquiry(),
            Err(InquiryError::Incomplete("email"))
        ));

        let empty_message = ContactRequest {
            message: Some(String::new()),
            ..budi()
        };
        assert!(matches!(
            empty_message.into_new_inquiry(),
            Err(InquiryError::Incomplete("message"))
        ));
    }

    #[test]
    fn test_missing_phone_passes_presence_check_but_not_validation() {
        let input = ContactRequest {
            phone: None,
            ..budi()
        }
        .into_new_inquiry()
        .unwrap();

        assert!(matches!(Inquiry::new(input), Err(InquiryError::Validation(_))));
    }

    #[test]
    fn test_scalar_fields_are_read_as_text() {
        let request: ContactRequest = serde_json::from_value(serde_json::json!({
            "name": "Budi",
            "phone": 8123,
            "email": "a@b.com",
            "message": true
        }))
        .unwrap();
        assert_eq!(request.phone.as_deref(), Some("8123"));
        assert_eq!(request.message.as_deref(), Some("true"));
    }

    #[test]
    fn test_structured_fields_count_as_missing() {
        let request: ContactRequest = serde_json::from_value(serde_json::json!({
            "name": { "first": "Budi" },
            "phone": ["08123"],
            "email": null
        }))
        .unwrap();
        assert!(request.name.is_none());
        assert!(request.phone.is_none());
        assert!(request.email.is_none());
        assert!(request.message.is_none());
    }

    #[test]
    fn test_document_round_trip_keeps_millisecond_timestamp() {
        let inquiry = Inquiry::new(budi().into_new_inquiry().unwrap()).unwrap();
        let doc = InquiryDocument::from(&inquiry);
        assert_eq!(doc.id, inquiry.id.to_string());

        let restored = Inquiry::try_from(doc).unwrap();
        assert_eq!(restored.id, inquiry.id);
        assert_eq!(
            restored.created_at.timestamp_millis(),
            inquiry.created_at.timestamp_millis()
        );
    }

    #[test]
    fn test_document_serializes_created_at_in_camel_case() {
        let inquiry = Inquiry::new(budi().into_new_inquiry().unwrap()).unwrap();
        let doc = bson::to_document(&InquiryDocument::from(&inquiry)).unwrap();
        assert!(doc.get_datetime("createdAt").is_ok());
        assert!(doc.get_str("_id").is_ok());
    }
}

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use super::ids::InquiryId;

/// Motivo del mensaje de contacto.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
  #[default]
  General,
  Collaboration,
  Booking,
  Press,
}

impl InquiryType {
  pub fn label(&self) -> &'static str {
    match self {
      InquiryType::General => "General",
      InquiryType::Collaboration => "Collaboration",
      InquiryType::Booking => "Booking",
      InquiryType::Press => "Press & Media",
    }
  }
}

impl fmt::Display for InquiryType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let key = match self {
      InquiryType::General => "general",
      InquiryType::Collaboration => "collaboration",
      InquiryType::Booking => "booking",
      InquiryType::Press => "press",
    };
    f.write_str(key)
  }
}

impl FromStr for InquiryType {
  type Err = ContactError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "general" => Ok(InquiryType::General),
      "collaboration" => Ok(InquiryType::Collaboration),
      "booking" => Ok(InquiryType::Booking),
      "press" | "press & media" => Ok(InquiryType::Press),
      other => Err(ContactError::UnknownInquiryType(other.to_string())),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
  #[error("missing required field: {0}")]
  MissingField(&'static str),

  #[error("invalid email address: {0}")]
  InvalidEmail(String),

  #[error("unknown inquiry type: {0}")]
  UnknownInquiryType(String),
}

/// Registro enviado desde el formulario de contacto.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactForm {
  pub inquiry_type: InquiryType,
  pub name: String,
  pub email: String,
  pub subject: String,
  pub message: String,
}

impl ContactForm {
  /// Comprobación de campos obligatorios, en el orden del formulario.
  ///
  /// El email sólo se valida en forma (`algo@algo`), igual que un
  /// `<input type="email">`.
  pub fn validate(&self) -> Result<(), ContactError> {
    let required = [("name", &self.name), ("email", &self.email), ("subject", &self.subject), ("message", &self.message)];

    for (field, value) in required {
      if value.trim().is_empty() {
        return Err(ContactError::MissingField(field));
      }
    }

    let email = self.email.trim();
    match email.split_once('@') {
      Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => Ok(()),
      _ => Err(ContactError::InvalidEmail(email.to_string())),
    }
  }
}

pub const ACKNOWLEDGMENT_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

/// Acuse de recibo devuelto al visitante.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Acknowledgment {
  pub id: InquiryId,
  pub inquiry_type: InquiryType,
  pub message: String,
}

impl Acknowledgment {
  pub fn for_form(form: &ContactForm) -> Self {
    Self { id: InquiryId::new(), inquiry_type: form.inquiry_type, message: ACKNOWLEDGMENT_MESSAGE.to_string() }
  }
}

/// Pregunta frecuente de la página de contacto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
  pub question: String,
  pub answer: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn filled() -> ContactForm {
    ContactForm {
      inquiry_type: InquiryType::Booking,
      name: "Kaneda".into(),
      email: "kaneda@neo.tokyo".into(),
      subject: "Live set".into(),
      message: "Are you available in March?".into(),
    }
  }

  #[test]
  fn complete_form_is_valid() {
    assert_eq!(filled().validate(), Ok(()));
  }

  #[test]
  fn blank_fields_are_reported_in_form_order() {
    let form = ContactForm { name: "   ".into(), subject: String::new(), ..filled() };
    assert_eq!(form.validate(), Err(ContactError::MissingField("name")));

    let form = ContactForm { message: "\n".into(), ..filled() };
    assert_eq!(form.validate(), Err(ContactError::MissingField("message")));
  }

  #[test]
  fn email_needs_both_sides_of_the_at() {
    for bad in ["kaneda", "@neo.tokyo", "kaneda@", "a@b@c"] {
      let form = ContactForm { email: bad.into(), ..filled() };
      assert!(matches!(form.validate(), Err(ContactError::InvalidEmail(_))), "{bad}");
    }
  }

  #[test]
  fn inquiry_type_parses_keys_and_labels() {
    assert_eq!("Press & Media".parse::<InquiryType>(), Ok(InquiryType::Press));
    assert_eq!("booking".parse::<InquiryType>(), Ok(InquiryType::Booking));
    assert!("spam".parse::<InquiryType>().is_err());
  }
}

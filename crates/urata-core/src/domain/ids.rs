use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Referencia de un mensaje recibido por el formulario de contacto.
///
/// Sólo sirve para correlacionar el acuse con la línea de log; no se persiste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InquiryId(Uuid);

impl InquiryId {
  /// Genera un nuevo identificador único.
  pub fn new() -> Self {
    InquiryId(Uuid::new_v4())
  }
}

impl Default for InquiryId {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for InquiryId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

use crate::domain::{ContactForm, InquiryId};
use crate::errors::CoreError;

// Puerto de salida del formulario de contacto.
// Hoy sólo se registra en el log; un envío por correo implementaría esto mismo.
pub trait ContactInbox {
  fn deliver(&self, id: InquiryId, form: &ContactForm) -> Result<(), CoreError>;
}

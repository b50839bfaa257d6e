use tracing::{Level, info, instrument, warn};

use crate::domain::{Acknowledgment, ContactForm};
use crate::errors::CoreError;
use crate::ports::ContactInbox;

pub struct ContactService<I>
where
  I: ContactInbox,
{
  inbox: I,
}

impl<I> ContactService<I>
where
  I: ContactInbox,
{
  pub fn new(inbox: I) -> Self {
    Self { inbox }
  }

  /// Recibe un mensaje del formulario:
  /// - comprueba los campos obligatorios
  /// - lo entrega al buzón
  /// - devuelve el acuse para el visitante
  #[instrument(skip_all, fields(inquiry = %form.inquiry_type), level = Level::DEBUG)]
  pub fn submit(&self, form: ContactForm) -> Result<Acknowledgment, CoreError> {
    if let Err(e) = form.validate() {
      warn!(error = %e, "contact form rejected");
      return Err(e.into());
    }

    let ack = Acknowledgment::for_form(&form);
    self.inbox.deliver(ack.id, &form)?;
    info!(id = %ack.id, "contact form accepted");

    Ok(ack)
  }
}

use tracing::info;
use urata_core::CoreError;
use urata_core::domain::{ContactForm, InquiryId};
use urata_core::ports::ContactInbox;

/// A `ContactInbox` that only writes the submission to the log.
///
/// Nothing is stored or forwarded; mail delivery would be another implementation
/// of the same port.
#[derive(Debug, Clone, Default)]
pub struct LogInbox;

impl ContactInbox for LogInbox {
  fn deliver(&self, id: InquiryId, form: &ContactForm) -> Result<(), CoreError> {
    info!(
      target: "urata::contact",
      %id,
      inquiry = %form.inquiry_type,
      name = %form.name,
      email = %form.email,
      subject = %form.subject,
      message = %form.message,
      "contact form submitted"
    );
    Ok(())
  }
}

// crates/urata-core/src/errors.rs
use thiserror::Error;

use crate::domain::ContactError;

/// Error genérico del núcleo.
///
/// Resolver un embed nunca falla (ver `EmbedResolution::Unavailable`); estos
/// errores vienen de los puertos (catálogo, buzón) o de validar el formulario.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("catalog error: {0}")]
  Catalog(String),

  #[error("contact form rejected: {0}")]
  Contact(#[from] ContactError),

  #[error("inbox error: {0}")]
  Inbox(String),

  #[error("not found: {0}")]
  NotFound(String),
}

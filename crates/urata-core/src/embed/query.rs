/// Query string con el orden de inserción preservado.
///
/// Los valores que controla el resolutor se codifican; los identificadores se
/// pasan con `push_raw` y van tal cual.
#[derive(Debug, Default)]
pub(crate) struct QueryString {
  pairs: Vec<(&'static str, String)>,
}

impl QueryString {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn push(&mut self, key: &'static str, value: &str) -> &mut Self {
    self.pairs.push((key, urlencoding::encode(value).into_owned()));
    self
  }

  pub(crate) fn push_raw(&mut self, key: &'static str, value: &str) -> &mut Self {
    self.pairs.push((key, value.to_string()));
    self
  }

  /// Booleano como `1` / `0`.
  pub(crate) fn push_flag(&mut self, key: &'static str, on: bool) -> &mut Self {
    self.push_raw(key, if on { "1" } else { "0" })
  }

  pub(crate) fn append_to(&self, base: &str) -> String {
    if self.pairs.is_empty() {
      return base.to_string();
    }

    let query: Vec<String> = self.pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{base}?{}", query.join("&"))
  }
}

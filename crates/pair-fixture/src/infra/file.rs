use {
    crate::{MalformedFixture, domain, dto},
    anyhow::{Context, Result},
    std::path::Path,
};

/// Source formats a fixture can be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Picks the format from a file extension (`.json` or `.toml`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if extension.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else {
            None
        }
    }
}

/// Parses and validates a token pair fixture from its source representation.
pub fn load(source: &str, format: Format) -> Result<domain::TokenPairFixture, MalformedFixture> {
    let result = decode(source, format).and_then(dto::TokenPairFixture::into_domain);
    match &result {
        Ok(fixture) => tracing::debug!(
            ?format,
            token_a = %fixture.token_a().symbol(),
            token_b = %fixture.token_b().symbol(),
            price = %fixture.initial_price().to_rational(),
            "loaded token pair fixture"
        ),
        Err(err) => tracing::debug!(?format, %err, "rejected malformed token pair fixture"),
    }
    result
}

fn decode(source: &str, format: Format) -> Result<dto::TokenPairFixture, MalformedFixture> {
    Ok(match format {
        Format::Json => serde_json::from_str(source)?,
        Format::Toml => toml::from_str(source)?,
    })
}

/// Reads a fixture file and loads it. The format is derived from the file
/// extension.
///
/// Validation errors are returned as [`MalformedFixture`] wrapped with the
/// file path as context, so callers can still `downcast_ref` them.
pub fn load_file(path: impl AsRef<Path>) -> Result<domain::TokenPairFixture> {
    let path = path.as_ref();
    let format = Format::from_path(path).with_context(|| {
        format!(
            "unsupported fixture file extension for {}; expected .json or .toml",
            path.display()
        )
    })?;
    tracing::debug!(path = %path.display(), ?format, "reading token pair fixture");

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture file {}", path.display()))?;
    load(&source, format).with_context(|| format!("malformed fixture file {}", path.display()))
}

impl domain::TokenPairFixture {
    /// Renders the fixture as pretty-printed JSON in its source
    /// representation. Funding amounts are written as decimal strings.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&dto::TokenPairFixture::from_domain(self))
    }

    /// Renders the fixture as TOML in its source representation.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(&dto::TokenPairFixture::from_domain(self))
    }
}

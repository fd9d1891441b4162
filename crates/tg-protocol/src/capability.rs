//! Capability descriptors — the unit of invocation.

use serde::{Deserialize, Serialize};

use crate::price::PriceUsd;

/// HTTP verb a capability is invoked with. Opaque to the engine; passed
/// through to the caller that performs the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    #[default]
    Get,
    Post,
}

impl HttpVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One priced, invocable backend capability.
///
/// Immutable after catalog construction. `id` is the stable identity and is
/// never reused for a different capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capability {
    /// Unique kebab-case identifier.
    pub id: String,
    /// Wire path relative to the API base (e.g. `/v2/news`).
    pub path: String,
    /// HTTP verb for the wire call.
    pub verb: HttpVerb,
    /// Amount charged per call.
    pub price: PriceUsd,
    /// End-user-facing cost shown in listings.
    pub display_price: PriceUsd,
    /// Human-readable name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Alternate identifiers that resolve to this capability's `id`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Upstream vendor path for partner-proxied capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_path: Option<String>,
}

impl Capability {
    pub fn new(
        id: impl Into<String>,
        path: impl Into<String>,
        verb: HttpVerb,
        price: PriceUsd,
        display_price: PriceUsd,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            verb,
            price,
            display_price,
            name: name.into(),
            description: description.into(),
            aliases: Vec::new(),
            partner_path: None,
        }
    }

    /// Attach alternate identifiers (e.g. an underscore-convention variant).
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Attach the upstream vendor path for a partner-proxied capability.
    pub fn with_partner_path(mut self, partner_path: impl Into<String>) -> Self {
        self.partner_path = Some(partner_path.into());
        self
    }
}

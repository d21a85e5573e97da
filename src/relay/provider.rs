//! Supported upstream providers and their proxied endpoints.

use std::fmt;
use std::str::FromStr;

/// An upstream LLM provider reachable through the memory proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    OpenAi,
    Anthropic,
    Gemini,
    Groq,
}

/// Error returned when a provider identifier is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProvider(pub String);

impl fmt::Display for UnknownProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown provider '{}'", self.0)
    }
}

impl std::error::Error for UnknownProvider {}

/// Upstream base endpoint and default model for a provider.
///
/// The table is fixed at compile time and never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderEndpoint {
    /// Base URL of the provider's OpenAI-compatible API. The memory proxy
    /// rewrites this into its own path, so the relay never talks to the
    /// provider directly.
    pub upstream_base: &'static str,
    /// Model used for every request; callers cannot override it.
    pub default_model: &'static str,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::OpenAi,
        Provider::Anthropic,
        Provider::Gemini,
        Provider::Groq,
    ];

    /// Registry lookup. Exhaustive over the closed provider set.
    pub fn endpoint(&self) -> ProviderEndpoint {
        match self {
            Provider::OpenAi => ProviderEndpoint {
                upstream_base: "https://api.openai.com/v1/",
                default_model: "gpt-4o-mini",
            },
            Provider::Anthropic => ProviderEndpoint {
                upstream_base: "https://api.anthropic.com/v1/",
                default_model: "claude-3-5-sonnet-20241022",
            },
            Provider::Gemini => ProviderEndpoint {
                upstream_base: "https://generativelanguage.googleapis.com/v1beta/openai/",
                default_model: "gemini-pro",
            },
            Provider::Groq => ProviderEndpoint {
                upstream_base: "https://api.groq.com/openai/v1",
                default_model: "mixtral-8x7b-32768",
            },
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::OpenAi => write!(f, "openai"),
            Provider::Anthropic => write!(f, "anthropic"),
            Provider::Gemini => write!(f, "gemini"),
            Provider::Groq => write!(f, "groq"),
        }
    }
}

impl FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(Provider::OpenAi),
            "anthropic" => Ok(Provider::Anthropic),
            "gemini" => Ok(Provider::Gemini),
            "groq" => Ok(Provider::Groq),
            _ => Err(UnknownProvider(s.to_string())),
        }
    }
}

impl ProviderEndpoint {
    /// Final URL for the proxied chat-completions call.
    ///
    /// Slashes are normalized on both joints so the compound path stays
    /// well-formed regardless of how the bases are written.
    pub fn chat_completions_url(&self, proxy_base: &str) -> String {
        let base = format!(
            "{}/{}",
            proxy_base.trim_end_matches('/'),
            self.upstream_base
        );
        format!("{}/chat/completions", base.trim_end_matches('/'))
    }
}

// ============================================================================
// Tests
// ============================================================================

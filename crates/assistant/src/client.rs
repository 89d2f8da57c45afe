//! HTTP client for the conversation-creation endpoint.

use anyhow::{Context, Result};
use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use tracing::debug;

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "LEARNBRIDGE_API_KEY";

const DEFAULT_BASE_URL: &str = "https://tavusapi.com";

const DEFAULT_CONTEXT: &str = "Role: Corporate Training Agent (Virtual Onboarding Guide)\n\
    Purpose:\n\
    Your job is to onboard and train new employees by guiding them through tasks, \
    answering their questions, asking them questions to test understanding, and \
    helping them feel confident in their new role.";

/// Call-control properties sent with the conversation request.
#[derive(Debug, Clone, Serialize)]
pub struct CallProperties {
    /// Maximum call duration in seconds
    pub max_call_duration: u32,

    /// Seconds to wait after the participant leaves
    pub participant_left_timeout: u32,

    /// Seconds to wait for the participant to join
    pub participant_absent_timeout: u32,

    /// Whether to render on a greenscreen background
    pub apply_greenscreen: bool,

    /// Conversation language
    pub language: String,
}

impl Default for CallProperties {
    fn default() -> Self {
        Self {
            max_call_duration: 3600,
            participant_left_timeout: 60,
            participant_absent_timeout: 300,
            apply_greenscreen: true,
            language: "english".to_string(),
        }
    }
}

/// Request settings for creating a conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationSettings {
    /// Avatar replica identifier
    pub replica_id: String,

    /// Persona identifier
    pub persona_id: String,

    /// Webhook for conversation events
    pub callback_url: String,

    /// Display name of the conversation
    pub conversation_name: String,

    /// System context handed to the persona
    pub conversational_context: String,

    /// Greeting spoken when the participant joins
    pub custom_greeting: String,

    /// Call-control properties
    pub properties: CallProperties,
}

impl Default for ConversationSettings {
    fn default() -> Self {
        Self {
            replica_id: "ra54d1d861".to_string(),
            persona_id: "p7fb0be3".to_string(),
            callback_url: "http://localhost:8000".to_string(),
            conversation_name: "LearnBridge Training Assistant".to_string(),
            conversational_context: DEFAULT_CONTEXT.to_string(),
            custom_greeting: "Hey there, long time no see!".to_string(),
            properties: CallProperties::default(),
        }
    }
}

/// Client for the avatar-conversation API.
#[derive(Clone)]
pub struct ConversationClient {
    /// HTTP client
    client: Client,

    /// API base URL
    base_url: String,

    /// API credential, sent as the `x-api-key` header
    api_key: String,

    /// Request settings
    settings: ConversationSettings,
}

impl ConversationClient {
    /// Create a client with default settings.
    pub fn new(api_key: String) -> Self {
        Self {
            client: ClientBuilder::new()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            settings: ConversationSettings::default(),
        }
    }

    /// Create a client with the credential taken from [`API_KEY_ENV`].
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .with_context(|| format!("{} is not set", API_KEY_ENV))?;
        Ok(Self::new(api_key))
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request settings.
    pub fn with_settings(mut self, settings: ConversationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Create a conversation and return the session URL to open.
    ///
    /// Any non-2xx response is an error; there is no retry.
    pub async fn create_conversation(&self) -> Result<String> {
        debug!("creating conversation ({})", self.settings.conversation_name);

        let response = self
            .client
            .post(format!("{}/v2/conversations", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&self.settings)
            .send()
            .await
            .context("Failed to call conversation API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Conversation API error (status {}): {}", status, error_text);
        }

        #[derive(serde::Deserialize)]
        struct Response {
            conversation_url: String,
        }

        let response_data: Response = response
            .json()
            .await
            .context("Failed to parse conversation response")?;

        Ok(response_data.conversation_url)
    }
}

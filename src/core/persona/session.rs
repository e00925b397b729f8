use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::profile::PersonaProfile;
use crate::config::{Config, FamiliarityConfig};
use crate::core::familiarity::{FamiliarityState, Phase};
use crate::core::style::request::required_string;
use crate::core::style::{FormatRequest, StylePipeline};
use crate::error::{SessionError, StyleError};

/// One conversational turn: what the user said and what the model produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub user: String,
    #[serde(flatten)]
    pub request: FormatRequest,
}

impl Turn {
    pub fn from_value(value: &Value) -> Result<Self, StyleError> {
        let object = value
            .as_object()
            .ok_or_else(|| StyleError::malformed("turn", "must be a JSON object"))?;
        let user = required_string(object, "user")?;
        let request = FormatRequest::from_value(value)?;
        Ok(Self { user, request })
    }
}

/// Result of one replayed turn.
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutcome {
    pub index: usize,
    pub response: String,
    pub level: f64,
    pub phase: Phase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A single conversation: the styling pipeline plus the familiarity state it
/// owns. Not shared across conversations; `respond` takes `&mut self`.
#[derive(Debug, Clone)]
pub struct PersonaSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    pipeline: StylePipeline,
    rules: FamiliarityConfig,
    state: FamiliarityState,
}

impl PersonaSession {
    pub fn new(profile: PersonaProfile, rules: FamiliarityConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            pipeline: StylePipeline::new(profile),
            rules,
            state: FamiliarityState::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.persona.variant.profile(), config.familiarity.clone())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn state(&self) -> &FamiliarityState {
        &self.state
    }

    pub fn pipeline(&self) -> &StylePipeline {
        &self.pipeline
    }

    /// Style one model output, then record the turn.
    ///
    /// The overlay sees the level from before this turn; the update lands
    /// only after the response is assembled.
    #[tracing::instrument(skip_all, fields(session = %self.id))]
    pub fn respond(&mut self, user_message: &str, raw_text: &str, context: Option<&str>) -> String {
        let response = self.pipeline.render(raw_text, context, self.state.level());
        self.state.update_with(&self.rules, user_message, &response);
        tracing::debug!(
            level = self.state.level(),
            interactions = self.state.interaction_count(),
            "turn recorded"
        );
        response
    }

    pub fn respond_to(&mut self, turn: &Turn) -> String {
        self.respond(&turn.user, &turn.request.text, turn.request.context.as_deref())
    }

    /// Run a transcript of loosely typed turns. A malformed turn yields the
    /// fallback utterance and does not count as an interaction.
    pub fn replay(&mut self, turns: &[Value]) -> Vec<TurnOutcome> {
        turns
            .iter()
            .enumerate()
            .map(|(index, value)| match Turn::from_value(value) {
                Ok(turn) => {
                    let response = self.respond_to(&turn);
                    self.outcome(index, response, None)
                }
                Err(source) => {
                    let err = SessionError::Turn { index, source };
                    tracing::warn!(%err, "skipping malformed turn");
                    let fallback = self.pipeline.fallback_utterance();
                    self.outcome(index, fallback, Some(err.to_string()))
                }
            })
            .collect()
    }

    fn outcome(&self, index: usize, response: String, error: Option<String>) -> TurnOutcome {
        TurnOutcome {
            index,
            response,
            level: self.state.level(),
            phase: self.state.phase(),
            error,
        }
    }
}

/// Parse a transcript document: a JSON array of turn objects.
pub fn parse_transcript(raw: &str) -> Result<Vec<Value>, SessionError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| SessionError::Transcript(e.to_string()))?;
    match value {
        Value::Array(turns) => Ok(turns),
        _ => Err(SessionError::Transcript(
            "expected a JSON array of turns".to_string(),
        )),
    }
}

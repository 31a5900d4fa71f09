//! Session bookkeeping driver.

use async_trait::async_trait;
use fabula_error::{ConfigError, ExtensionError, ExtensionErrorKind, FabulaResult};
use fabula_interface::{
    ConfigAccessor, DriverExtension, Extension, InstructionExtension,
    InstructionExtensionParameter, TurnContext,
};
use tracing::{debug, info, warn};

/// Driver that maintains session variables, plus the `reset_session` verb.
///
/// On every turn start it writes `locale`, increments `turn_count` and, once
/// `extensions.session.max_turns` is reached, sets `session_expired`. On turn
/// end it records `last_scene`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionExtension {
    locale: String,
    max_turns: Option<u64>,
}

impl SessionExtension {
    /// Configuration key limiting the number of turns per session.
    pub const MAX_TURNS_KEY: &'static str = "extensions.session.max_turns";
    /// Verb clearing the session counters.
    pub const RESET_VERB: &'static str = "reset_session";
    /// Story variable holding the number of turns started.
    pub const TURN_COUNT_KEY: &'static str = "turn_count";

    /// Creates the extension from the skill locale and configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `extensions.session.max_turns` is present but is not
    /// a positive integer.
    pub fn new(locale: &str, config: &dyn ConfigAccessor) -> FabulaResult<Self> {
        let max_turns = config.get_u64(Self::MAX_TURNS_KEY)?;
        if max_turns == Some(0) {
            return Err(
                ConfigError::invalid_value(Self::MAX_TURNS_KEY, "must be positive").into(),
            );
        }

        Ok(Self {
            locale: locale.to_string(),
            max_turns,
        })
    }

    /// Locale written into the story state.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Configured turn limit.
    pub fn max_turns(&self) -> Option<u64> {
        self.max_turns
    }
}

impl Extension for SessionExtension {
    fn name(&self) -> &str {
        "session"
    }

    fn as_driver(&self) -> Option<&dyn DriverExtension> {
        Some(self)
    }

    fn as_instruction(&self) -> Option<&dyn InstructionExtension> {
        Some(self)
    }
}

#[async_trait]
impl DriverExtension for SessionExtension {
    async fn on_turn_start(&self, context: &mut TurnContext<'_>) -> FabulaResult<()> {
        let previous = match context.state.get(Self::TURN_COUNT_KEY) {
            None => 0,
            Some(value) => value.as_u64().ok_or_else(|| {
                warn!(value = %value, "Session turn count is not an unsigned integer");
                ExtensionError::new(ExtensionErrorKind::InvalidState {
                    key: Self::TURN_COUNT_KEY.to_string(),
                    message: format!("expected an unsigned integer, found {}", value),
                })
            })?,
        };
        let turns = previous + 1;
        context.state.set("locale", self.locale.as_str());
        context.state.set(Self::TURN_COUNT_KEY, turns);

        if self.max_turns.is_some_and(|max| turns >= max) {
            info!(turns, "Session turn limit reached");
            context.state.set("session_expired", true);
        }
        Ok(())
    }

    async fn on_turn_end(&self, context: &mut TurnContext<'_>) -> FabulaResult<()> {
        context.state.set("last_scene", context.scene_id);
        Ok(())
    }
}

#[async_trait]
impl InstructionExtension for SessionExtension {
    fn verbs(&self) -> &[&'static str] {
        &[Self::RESET_VERB]
    }

    async fn invoke(
        &self,
        verb: &str,
        param: &mut InstructionExtensionParameter<'_>,
    ) -> FabulaResult<()> {
        if verb != Self::RESET_VERB {
            return Err(
                ExtensionError::new(ExtensionErrorKind::UnknownVerb(verb.to_string())).into(),
            );
        }

        param.state.remove(Self::TURN_COUNT_KEY);
        param.state.remove("session_expired");
        debug!("Session counters reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabula_core::StoryState;
    use fabula_interface::MapConfig;
    use serde_json::json;

    async fn run_turn(extension: &SessionExtension, state: &mut StoryState, scene: &str) {
        let mut context = TurnContext {
            scene_id: scene,
            turn: 0,
            state,
        };
        extension.on_turn_start(&mut context).await.unwrap();
        extension.on_turn_end(&mut context).await.unwrap();
    }

    #[test]
    fn test_rejects_zero_turn_limit() {
        let config = MapConfig::new().with(SessionExtension::MAX_TURNS_KEY, "0");
        assert!(SessionExtension::new("en-US", &config).is_err());

        let config = MapConfig::new().with(SessionExtension::MAX_TURNS_KEY, "ten");
        assert!(SessionExtension::new("en-US", &config).is_err());
    }

    #[tokio::test]
    async fn test_counts_turns_and_expires() {
        let config = MapConfig::new().with(SessionExtension::MAX_TURNS_KEY, "2");
        let extension = SessionExtension::new("de-DE", &config).unwrap();
        let mut state = StoryState::new();

        run_turn(&extension, &mut state, "start").await;
        assert_eq!(state.get("turn_count"), Some(&json!(1)));
        assert_eq!(state.get_str("locale"), Some("de-DE"));
        assert!(!state.contains_key("session_expired"));

        run_turn(&extension, &mut state, "middle").await;
        assert_eq!(state.get("turn_count"), Some(&json!(2)));
        assert_eq!(state.get("session_expired"), Some(&json!(true)));
        assert_eq!(state.get_str("last_scene"), Some("middle"));
    }

    #[tokio::test]
    async fn test_corrupted_turn_count_is_reported() {
        let extension = SessionExtension::new("en-US", &MapConfig::new()).unwrap();
        let mut state = StoryState::new();
        state.set(SessionExtension::TURN_COUNT_KEY, "three");

        let mut context = TurnContext {
            scene_id: "start",
            turn: 4,
            state: &mut state,
        };
        let err = extension.on_turn_start(&mut context).await.unwrap_err();

        assert!(err.to_string().contains("Story variable 'turn_count' is invalid"));
        assert_eq!(state.get_str(SessionExtension::TURN_COUNT_KEY), Some("three"));
        assert!(!state.contains_key("locale"));
    }

    #[tokio::test]
    async fn test_reset_clears_counters() {
        let extension = SessionExtension::new("en-US", &MapConfig::new()).unwrap();
        assert_eq!(extension.max_turns(), None);

        let mut state = StoryState::new();
        run_turn(&extension, &mut state, "start").await;

        let mut param = InstructionExtensionParameter::new(&mut state);
        extension
            .invoke(SessionExtension::RESET_VERB, &mut param)
            .await
            .unwrap();

        assert!(!state.contains_key("turn_count"));
        assert_eq!(state.get_str("locale"), Some("en-US"));
    }
}

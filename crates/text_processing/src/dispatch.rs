//! Intent dispatch
//!
//! Routes a [`ClassificationResult`] to the handler registered for its
//! intent. Handlers for `Unknown` and `help` are mandatory; intents without a
//! handler are answered by the `Unknown` handler.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chat_intent_config::ConfigError;
use chat_intent_core::{ClassificationResult, EntityMap, HELP_INTENT, UNKNOWN_INTENT};

/// Turns the entities of a classified message into response text
pub trait IntentHandler: Send + Sync {
    fn handle(&self, entities: &EntityMap) -> String;
}

impl<F> IntentHandler for F
where
    F: Fn(&EntityMap) -> String + Send + Sync,
{
    fn handle(&self, entities: &EntityMap) -> String {
        self(entities)
    }
}

/// Builder for [`Dispatcher`]
#[derive(Default)]
pub struct DispatcherBuilder {
    handlers: HashMap<String, Arc<dyn IntentHandler>>,
}

impl DispatcherBuilder {
    /// Register the handler for `intent`, replacing any previous one
    pub fn on(mut self, intent: impl Into<String>, handler: impl IntentHandler + 'static) -> Self {
        self.handlers.insert(intent.into(), Arc::new(handler));
        self
    }

    /// Fallback handler for unmatched messages
    pub fn on_unknown(self, handler: impl IntentHandler + 'static) -> Self {
        self.on(UNKNOWN_INTENT, handler)
    }

    /// Usage text handler
    pub fn on_help(self, handler: impl IntentHandler + 'static) -> Self {
        self.on(HELP_INTENT, handler)
    }

    pub fn build(self) -> Result<Dispatcher, ConfigError> {
        for required in [UNKNOWN_INTENT, HELP_INTENT] {
            if !self.handlers.contains_key(required) {
                return Err(ConfigError::MissingHandler(required.to_string()));
            }
        }
        Ok(Dispatcher {
            handlers: self.handlers,
        })
    }
}

/// Intent-to-handler routing table
#[derive(Clone)]
pub struct Dispatcher {
    handlers: HashMap<String, Arc<dyn IntentHandler>>,
}

impl Dispatcher {
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::default()
    }

    /// Produce the response text for a classified message
    pub fn dispatch(&self, result: &ClassificationResult) -> String {
        if let Some(handler) = self.handlers.get(&result.intent) {
            return handler.handle(&result.entities);
        }

        tracing::warn!(
            intent = %result.intent,
            "No handler registered for intent, using fallback"
        );
        match self.handlers.get(UNKNOWN_INTENT) {
            Some(fallback) => fallback.handle(&result.entities),
            // build() guarantees the fallback exists
            None => String::new(),
        }
    }

    pub fn has_handler(&self, intent: &str) -> bool {
        self.handlers.contains_key(intent)
    }

    /// Registered intent names, sorted
    pub fn intents(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("intents", &self.intents())
            .finish()
    }
}

//! # chatmark-config
//!
//! Persisted settings for the rewrite workflow: prompt presets, the
//! completion model, and the trigger shortcut. The converter itself is
//! configuration-free; this crate types the data the surrounding workflow
//! stores and hands to the completion-request collaborator.
//!
//! Stored payloads are JSON. Loading is tolerant: missing fields fall
//! back to their defaults so older payloads keep working.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Error type for configuration handling
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed settings payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Completion model used when none is stored.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const BUSINESS_PRESET_ID: &str = "business-proofreading";
const CASUAL_PRESET_ID: &str = "casual-proofreading";

/// A rewrite preset: the instructions sent along with an extracted
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub system_prompt: String,
    pub user_prompt_template: String,
}

impl Preset {
    /// Final user prompt for an extracted markup string.
    pub fn user_prompt(&self, markup: &str) -> String {
        format!("{}{}", self.user_prompt_template, markup)
    }
}

/// Keyboard shortcut that triggers the rewrite flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutBinding {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Default for ShortcutBinding {
    fn default() -> Self {
        Self {
            key: "Enter".to_string(),
            ctrl: false,
            meta: true,
            alt: false,
            shift: false,
        }
    }
}

/// Persisted settings.
///
/// The preset table is insertion-ordered and keyed by preset id; the
/// first entry doubles as the fallback when the active id is gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
    pub presets: IndexMap<String, Preset>,
    pub active_preset: String,
    pub shortcut: ShortcutBinding,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            presets: default_presets(),
            active_preset: BUSINESS_PRESET_ID.to_string(),
            shortcut: ShortcutBinding::default(),
        }
    }
}

impl Settings {
    /// Load settings from a stored JSON payload.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize settings for storage.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Whether an API key has been configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Look up a preset by id.
    pub fn preset(&self, id: &str) -> Option<&Preset> {
        self.presets.get(id)
    }

    /// The active preset, falling back to the first defined preset.
    pub fn active_preset(&self) -> Option<&Preset> {
        self.presets
            .get(&self.active_preset)
            .or_else(|| self.presets.values().next())
    }

    /// Select the active preset. Returns false for an unknown id.
    pub fn set_active_preset(&mut self, id: &str) -> bool {
        if self.presets.contains_key(id) {
            self.active_preset = id.to_string();
            true
        } else {
            false
        }
    }

    /// Insert or overwrite a preset.
    pub fn add_preset(&mut self, id: &str, preset: Preset) {
        self.presets.insert(id.to_string(), preset);
    }

    /// Remove a preset. When the removed preset was active, the first
    /// remaining preset becomes active.
    pub fn remove_preset(&mut self, id: &str) {
        self.presets.shift_remove(id);
        if self.active_preset == id {
            if let Some(first) = self.presets.keys().next() {
                self.active_preset = first.clone();
            }
        }
    }
}

fn default_presets() -> IndexMap<String, Preset> {
    IndexMap::from([
        (
            BUSINESS_PRESET_ID.to_string(),
            Preset {
                name: "Business proofreading".to_string(),
                system_prompt: "You are a skilled copy editor. Rewrite the chat message so it \
                    reads clearly, politely and concisely while keeping the original intent. \
                    Keep any emoji shortcodes (e.g. :+1:, :pray:) and formatting marks \
                    (*bold*, _italic_, `code`, ~strikethrough~) exactly as written."
                    .to_string(),
                user_prompt_template: "Proofread the following chat message and reply with \
                    the revised text only:\n\n"
                    .to_string(),
            },
        ),
        (
            CASUAL_PRESET_ID.to_string(),
            Preset {
                name: "Casual proofreading".to_string(),
                system_prompt: "You are a copy editor. Fix typos and unclear wording in the \
                    chat message while keeping its casual tone. Keep any emoji shortcodes \
                    (e.g. :+1:, :pray:) and formatting marks (*bold*, _italic_, `code`, \
                    ~strikethrough~) exactly as written."
                    .to_string(),
                user_prompt_template: "Tidy up the following chat message and reply with the \
                    revised text only:\n\n"
                    .to_string(),
            },
        ),
    ])
}

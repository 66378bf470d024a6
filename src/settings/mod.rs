//! Settings store.
//!
//! The host persists two well-known values under one namespace: the map of
//! participant configurations and the panel's last position. The engine
//! reads and writes them as JSON through [`SettingsStore`]; typed access
//! goes through the helpers below.

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};

use crate::core::config::{HudOptions, ParticipantConfig, ParticipantConfigs};
use crate::core::error::{HudError, HudResult};
use crate::panel::PanelPosition;

/// Host collaborator holding persisted key-value settings.
pub trait SettingsStore {
    /// Read a value. Unset keys return `None`.
    fn get(&self, namespace: &str, key: &str) -> Option<Value>;

    /// Write a value.
    fn set(&mut self, namespace: &str, key: &str, value: Value) -> HudResult<()>;
}

/// Settings kept in process memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySettings {
    values: FxHashMap<(String, String), Value>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, namespace: &str, key: &str) -> Option<Value> {
        self.values
            .get(&(namespace.to_string(), key.to_string()))
            .cloned()
    }

    fn set(&mut self, namespace: &str, key: &str, value: Value) -> HudResult<()> {
        self.values
            .insert((namespace.to_string(), key.to_string()), value);
        Ok(())
    }
}

/// Load all participant configurations. An unset key is an empty map.
///
/// Entries are parsed one at a time: a malformed entry is logged and
/// skipped so the others stay usable. Only a stored value that is not an
/// object is an error.
pub fn load_participants<S: SettingsStore + ?Sized>(
    store: &S,
    options: &HudOptions,
) -> HudResult<ParticipantConfigs> {
    let entries: Map<String, Value> = match store.get(&options.namespace, &options.configs_key) {
        None | Some(Value::Null) => return Ok(ParticipantConfigs::new()),
        Some(value) => serde_json::from_value(value).map_err(|source| HudError::Settings {
            key: options.configs_key.clone(),
            source,
        })?,
    };

    let mut configs = ParticipantConfigs::new();
    for (id, entry) in entries {
        match serde_json::from_value::<ParticipantConfig>(entry) {
            Ok(config) => configs.insert(id, config),
            Err(err) => log::warn!("skipping malformed participant configuration {id}: {err}"),
        }
    }
    Ok(configs)
}

/// Replace all participant configurations.
pub fn save_participants<S: SettingsStore + ?Sized>(
    store: &mut S,
    options: &HudOptions,
    configs: &ParticipantConfigs,
) -> HudResult<()> {
    let value = serde_json::to_value(configs).map_err(|source| HudError::Settings {
        key: options.configs_key.clone(),
        source,
    })?;
    store.set(&options.namespace, &options.configs_key, value)
}

/// Last saved panel position, or the configured default.
///
/// A malformed stored value is logged and ignored.
pub fn load_position<S: SettingsStore + ?Sized>(store: &S, options: &HudOptions) -> PanelPosition {
    let Some(value) = store.get(&options.namespace, &options.position_key) else {
        return options.default_position.clone();
    };
    serde_json::from_value(value).unwrap_or_else(|err| {
        log::warn!("ignoring stored panel position: {err}");
        options.default_position.clone()
    })
}

/// Persist the panel position.
pub fn save_position<S: SettingsStore + ?Sized>(
    store: &mut S,
    options: &HudOptions,
    position: &PanelPosition,
) -> HudResult<()> {
    let value = serde_json::to_value(position).map_err(|source| HudError::Settings {
        key: options.position_key.clone(),
        source,
    })?;
    store.set(&options.namespace, &options.position_key, value)
}

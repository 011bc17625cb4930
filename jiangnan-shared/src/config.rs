use std::sync::RwLock;
use std::path::Path;
use std::fs;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use toml::Table;

static GLOBAL_CONFIG: OnceCell<RwLock<Table>> = OnceCell::new();

/// Loads `path` into the process-wide table. A missing file or a syntax error
/// leaves an empty table, so every section falls back to its `Default`.
pub fn init<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let path = path.as_ref();

    let content = if path.exists() {
        log::info!("Loading config from {:?}", path);
        fs::read_to_string(path)?
    } else {
        log::warn!("Config file not found at {:?}, using defaults.", path);
        String::new()
    };

    GLOBAL_CONFIG.set(RwLock::new(parse(&content)))
        .map_err(|_| anyhow::anyhow!("Config already initialized"))?;

    Ok(())
}

/// Reads the `[key]` section. Falls back to `T::default()` when the store was
/// never initialised, the section is absent, or it does not deserialise.
pub fn get<T: DeserializeOwned + Default>(key: &str) -> T {
    let Some(store) = GLOBAL_CONFIG.get() else {
        log::warn!("Config not initialized, section '[{}]' uses defaults.", key);
        return T::default();
    };

    match store.read() {
        Ok(table) => section(&table, key),
        Err(poisoned) => section(&poisoned.into_inner(), key),
    }
}

pub fn parse(content: &str) -> Table {
    toml::from_str(content).unwrap_or_else(|e| {
        log::error!("Config syntax error: {}, using empty config.", e);
        Table::new()
    })
}

pub fn section<T: DeserializeOwned + Default>(table: &Table, key: &str) -> T {
    match table.get(key) {
        Some(value) => value.clone().try_into().unwrap_or_else(|e| {
            log::warn!("Config section '[{}]' mismatch: {}. Using default.", key, e);
            T::default()
        }),
        None => T::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(default)]
    struct Timing {
        click_delay_ms: u64,
        frame_rate: u32,
    }

    impl Default for Timing {
        fn default() -> Self {
            Self { click_delay_ms: 200, frame_rate: 60 }
        }
    }

    #[test]
    fn partial_section_keeps_defaults() {
        let table = parse("[timing]\nclick_delay_ms = 120\n");
        let timing: Timing = section(&table, "timing");
        assert_eq!(timing, Timing { click_delay_ms: 120, frame_rate: 60 });
    }

    #[test]
    fn mismatched_section_falls_back() {
        let table = parse("[timing]\nclick_delay_ms = \"fast\"\n");
        let timing: Timing = section(&table, "timing");
        assert_eq!(timing, Timing::default());
    }

    #[test]
    fn broken_file_is_empty_table() {
        let table = parse("[timing\nclick_delay_ms = ");
        assert!(table.is_empty());
        let timing: Timing = section(&table, "timing");
        assert_eq!(timing, Timing::default());
    }
}

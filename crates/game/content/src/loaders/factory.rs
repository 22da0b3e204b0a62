//! Content factory serving battle data from a directory.

use std::path::{Path, PathBuf};

use battle_core::{
    Action, BattleConfig, ContentOracle, FloorConfig, Item, OracleError, RecordKind, Unit,
};
use serde::de::DeserializeOwned;

use crate::loaders::records::{ActionRecord, HostileRecord, ItemRecord};
use crate::loaders::{ConfigLoader, FloorLoader, LoadResult, PlayerLoader};

/// Content factory that loads battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── floors/
/// │   └── cellar.toml
/// ├── players/
/// │   └── aldo.ron
/// ├── actions/
/// │   └── slash.ron
/// ├── items/
/// │   └── slime_jelly.ron
/// └── hostiles/
///     ├── slime.ron
///     └── fire_drake.ron
/// ```
///
/// Records are looked up by file stem, so `load_hostile("slime")` reads
/// `hostiles/slime.ron`. Every lookup reads the file again and hands out a
/// fresh value.
#[derive(Clone, Debug)]
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `config.toml`, or defaults if it is absent.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!("{} not found, using default battle config", path.display());
            return Ok(BattleConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a floor from `floors/{name}.toml`.
    pub fn load_floor(&self, name: &str) -> LoadResult<FloorConfig> {
        let path = self.data_dir.join("floors").join(format!("{}.toml", name));
        FloorLoader::load(&path)
    }

    /// Load an explorer from `players/{name}.ron`.
    pub fn load_player(&self, name: &str) -> LoadResult<Unit> {
        let path = self.data_dir.join("players").join(format!("{}.ron", name));
        PlayerLoader::load(&path, self)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn record_path(&self, kind: RecordKind, name: &str) -> PathBuf {
        let dir = match kind {
            RecordKind::Action => "actions",
            RecordKind::Item => "items",
            RecordKind::Hostile => "hostiles",
            RecordKind::Player => "players",
        };
        self.data_dir.join(dir).join(format!("{}.ron", name))
    }

    fn read_record<T: DeserializeOwned>(
        &self,
        kind: RecordKind,
        name: &str,
    ) -> Result<T, OracleError> {
        let path = self.record_path(kind, name);
        let text = std::fs::read_to_string(&path).map_err(|e| {
            tracing::debug!("cannot read {}: {}", path.display(), e);
            OracleError::not_found(kind, name)
        })?;
        ron::from_str(&text).map_err(|e| OracleError::Parse {
            kind,
            name: name.to_string(),
            message: e.to_string(),
        })
    }
}

impl ContentOracle for ContentFactory {
    fn load_action(&self, name: &str) -> Result<Action, OracleError> {
        self.read_record::<ActionRecord>(RecordKind::Action, name)?
            .into_action()
    }

    fn load_item(&self, name: &str) -> Result<Item, OracleError> {
        Ok(self.read_record::<ItemRecord>(RecordKind::Item, name)?.into())
    }

    fn load_hostile(&self, name: &str) -> Result<Unit, OracleError> {
        self.read_record::<HostileRecord>(RecordKind::Hostile, name)?
            .into_unit(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{Element, Slot};

    fn write(dir: &Path, relative: &str, contents: &str) {
        let path = dir.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    fn seeded() -> (tempfile::TempDir, ContentFactory) {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "actions/bite.ron",
            r#"(name: "Bite", kind: "damage", target: "oppt", multiplier: 1.1)"#,
        );
        write(
            dir.path(),
            "items/fang.ron",
            r#"(name: "Fang", description: "Sharp.", price: 4)"#,
        );
        write(
            dir.path(),
            "hostiles/wolf.ron",
            r#"(
                name: "Wolf",
                kind: "monster",
                element: 1,
                level: 2,
                stats: [30, 12, 6, 2, 4, 18, 5],
                loot: ["fang"],
                actions: (basic: Some("bite")),
            )"#,
        );
        let factory = ContentFactory::new(dir.path());
        (dir, factory)
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(
            factory.record_path(RecordKind::Hostile, "slime"),
            Path::new("/tmp/data/hostiles/slime.ron")
        );
    }

    #[test]
    fn hostiles_come_with_actions_and_loot() {
        let (_dir, factory) = seeded();
        let wolf = factory.load_hostile("wolf").unwrap();

        assert_eq!(wolf.name(), "Wolf");
        assert_eq!(wolf.element(), Some(Element::Earth));
        assert_eq!(wolf.loot()[0].name, "Fang");
        assert_eq!(wolf.actions().get(Slot::Basic).unwrap().name(), "Bite");
    }

    #[test]
    fn loads_are_independent_copies() {
        let (_dir, factory) = seeded();
        let mut first = factory.load_hostile("wolf").unwrap();
        first.take_loot();
        let second = factory.load_hostile("wolf").unwrap();
        assert_eq!(second.loot().len(), 1);
    }

    #[test]
    fn missing_records_are_not_found() {
        let (_dir, factory) = seeded();
        assert_eq!(
            factory.load_item("crown").unwrap_err(),
            OracleError::not_found(RecordKind::Item, "crown")
        );
    }

    #[test]
    fn broken_records_are_parse_errors() {
        let (dir, factory) = seeded();
        write(dir.path(), "actions/broken.ron", "(name: ");
        assert!(matches!(
            factory.load_action("broken").unwrap_err(),
            OracleError::Parse {
                kind: RecordKind::Action,
                ..
            }
        ));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let (_dir, factory) = seeded();
        assert_eq!(factory.load_config().unwrap(), BattleConfig::default());
    }
}

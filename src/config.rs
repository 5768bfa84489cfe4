use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::coordinates::Coordinates;
use crate::generators::GeneratorKind;
use crate::graphs::GraphKind;

pub const MIN_DIM: usize = 4;
pub const MAX_DIM: usize = 125;
pub const MAX_OPENINGS: usize = 4;

/// One maze to build, in the layout of the json configuration files.
///
/// ```json
/// {
///     "dataStructure": "edge-list",
///     "rowNum": 4,
///     "colNum": 4,
///     "entrances": [[-1, 0]],
///     "exits": [[4, 3]],
///     "generator": "recur",
///     "visualise": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MazeConfig {
    pub data_structure: GraphKind,
    pub row_num: usize,
    pub col_num: usize,
    #[serde(default)]
    pub entrances: Vec<[i32; 2]>,
    #[serde(default)]
    pub exits: Vec<[i32; 2]>,
    pub generator: GeneratorKind,
    #[serde(default)]
    pub visualise: bool,
}

impl MazeConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(ConfigError::Io)?;
        serde_json::from_reader(BufReader::new(file)).map_err(ConfigError::Parse)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    /// A random benchmarking configuration: both extents in 4..=125, one to
    /// four entrances, and an exit count within two of the entrance count.
    /// Every opening sits one step outside the grid.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, data_structure: GraphKind) -> Self {
        let row_num = rng.gen_range(MIN_DIM, MAX_DIM + 1);
        let col_num = rng.gen_range(MIN_DIM, MAX_DIM + 1);

        let entrance_count = rng.gen_range(1, MAX_OPENINGS + 1);
        let min_exits = entrance_count.saturating_sub(2).max(1);
        let max_exits = (entrance_count + 2).min(MAX_OPENINGS);
        let exit_count = rng.gen_range(min_exits, max_exits + 1);

        let entrances = (0..entrance_count)
            .map(|_| random_boundary(rng, row_num, col_num))
            .collect();
        let exits = (0..exit_count)
            .map(|_| random_boundary(rng, row_num, col_num))
            .collect();

        Self {
            data_structure,
            row_num,
            col_num,
            entrances,
            exits,
            generator: GeneratorKind::RecurBack,
            visualise: false,
        }
    }

    pub fn entrance_coords(&self) -> impl Iterator<Item = Coordinates> + '_ {
        self.entrances.iter().map(|pair| Coordinates::from(*pair))
    }

    pub fn exit_coords(&self) -> impl Iterator<Item = Coordinates> + '_ {
        self.exits.iter().map(|pair| Coordinates::from(*pair))
    }
}

/// A non-corner position on the ring just outside a rows x columns grid
fn random_boundary<R: Rng + ?Sized>(rng: &mut R, rows: usize, columns: usize) -> [i32; 2] {
    let (rows, columns) = (rows as i32, columns as i32);
    if rng.gen::<bool>() {
        let row = if rng.gen::<bool>() { -1 } else { rows };
        [row, rng.gen_range(0, columns)]
    } else {
        let col = if rng.gen::<bool>() { -1 } else { columns };
        [rng.gen_range(0, rows), col]
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "could not read configuration: {}", err),
            ConfigError::Parse(err) => write!(f, "invalid configuration: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod test_config {
    use super::*;
    use crate::maze::Maze;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parses_config_file_layout() {
        let json = r#"{
            "dataStructure": "inc-mat",
            "rowNum": 4,
            "colNum": 5,
            "entrances": [[-1, 0]],
            "exits": [[4, 3], [2, 5]],
            "generator": "recur",
            "visualise": true
        }"#;

        let config = MazeConfig::from_json(json).unwrap();

        assert_eq!(config.data_structure, GraphKind::IncMat);
        assert_eq!((config.row_num, config.col_num), (4, 5));
        assert_eq!(config.entrance_coords().collect::<Vec<_>>(), vec![Coordinates::new(-1, 0)]);
        assert_eq!(
            config.exit_coords().collect::<Vec<_>>(),
            vec![Coordinates::new(4, 3), Coordinates::new(2, 5)]
        );
        assert_eq!(config.generator, GeneratorKind::RecurBack);
        assert!(config.visualise);
    }

    #[test]
    fn unknown_tags_are_rejected() {
        let json = r#"{"dataStructure": "linked", "rowNum": 4, "colNum": 4, "generator": "recur"}"#;
        assert!(matches!(MazeConfig::from_json(json), Err(ConfigError::Parse(_))));

        let json = r#"{"dataStructure": "array", "rowNum": 4, "colNum": 4, "generator": "prim"}"#;
        assert!(matches!(MazeConfig::from_json(json), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{"dataStructure": "array", "rowNum": 6, "colNum": 7, "generator": "recur"}"#;
        let config = MazeConfig::from_json(json).unwrap();

        assert!(config.entrances.is_empty());
        assert!(config.exits.is_empty());
        assert!(!config.visualise);
    }

    #[test]
    fn random_configs_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let config = MazeConfig::random(&mut rng, GraphKind::EdgeList);
            assert!((MIN_DIM..=MAX_DIM).contains(&config.row_num));
            assert!((MIN_DIM..=MAX_DIM).contains(&config.col_num));

            let entrances = config.entrances.len();
            let exits = config.exits.len();
            assert!((1..=MAX_OPENINGS).contains(&entrances));
            assert!((1..=MAX_OPENINGS).contains(&exits));
            assert!((exits as i64 - entrances as i64).abs() <= 2);

            let maze = Maze::new(config.row_num, config.col_num, config.data_structure);
            for coords in config.entrance_coords().chain(config.exit_coords()) {
                assert!(maze.is_boundary(coords), "{}", coords);
                assert!(!maze.is_in_grid(coords), "{}", coords);
            }
        }
    }
}

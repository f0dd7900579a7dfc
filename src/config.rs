use serde::{Deserialize, Serialize};

use crate::coord::Coord2;
use crate::corridor_first::CorridorFirstConfig;
use crate::drunkard::WalkConfig;
use crate::error::LayoutError;
use crate::graph_layout::GraphConfig;
use crate::room::RoomShape;
use crate::room_first::{RoomFill, RoomFirstConfig, SplitPolicy};

/// Which pipeline builds the layout, with its parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    CorridorFirst(CorridorFirstConfig),
    RoomFirst(RoomFirstConfig),
    Graph(GraphConfig),
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::CorridorFirst(CorridorFirstConfig::default())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub seed: u64,
    pub strategy: Strategy,
}

impl GenerationConfig {
    /// Parses and validates a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: GenerationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        match &self.strategy {
            Strategy::CorridorFirst(c) => validate_corridor_first(c),
            Strategy::RoomFirst(c) => validate_room_first(c),
            Strategy::Graph(c) => validate_graph(c),
        }
    }
}

fn validate_corridor_first(config: &CorridorFirstConfig) -> Result<(), LayoutError> {
    if !(0.0..=1.0).contains(&config.room_percent) {
        return Err(LayoutError::InvalidConfig("room_percent must be within [0, 1]"));
    }
    if config.corridor_length == 0 {
        return Err(LayoutError::InvalidConfig("corridor_length must be positive"));
    }
    match &config.room_shape {
        RoomShape::Box {
            min_size,
            size_delta,
        } => {
            check_positive(*min_size, "room min_size must be positive")?;
            check_non_negative(*size_delta, "room size_delta must not be negative")
        }
        RoomShape::RandomWalk(walk) => validate_walk(walk),
    }
}

fn validate_room_first(config: &RoomFirstConfig) -> Result<(), LayoutError> {
    check_non_negative(config.area_size, "area_size must not be negative")?;
    if config.space_between_rooms < 0 {
        return Err(LayoutError::InvalidConfig("space_between_rooms must not be negative"));
    }
    if config.split == SplitPolicy::MinSize {
        check_positive(config.min_room_size, "min_room_size must be positive")?;
    }
    match &config.fill {
        RoomFill::Simple => Ok(()),
        RoomFill::RandomWalk(walk) => validate_walk(walk),
    }
}

fn validate_graph(config: &GraphConfig) -> Result<(), LayoutError> {
    let area_ok = |v: f32| v.is_finite() && v >= 0.0;
    if !area_ok(config.area_width) || !area_ok(config.area_height) {
        return Err(LayoutError::InvalidConfig("generation area must be finite and not negative"));
    }
    check_positive(config.min_room_size, "min_room_size must be positive")?;
    check_non_negative(config.room_size_delta, "room_size_delta must not be negative")?;
    if config.space_between_rooms < 0 {
        return Err(LayoutError::InvalidConfig("space_between_rooms must not be negative"));
    }
    if !(config.main_room_multiplier.is_finite() && config.main_room_multiplier > 0.0) {
        return Err(LayoutError::InvalidConfig("main_room_multiplier must be positive"));
    }
    Ok(())
}

fn validate_walk(walk: &WalkConfig) -> Result<(), LayoutError> {
    if walk.iterations == 0 {
        return Err(LayoutError::InvalidConfig("walk iterations must be positive"));
    }
    Ok(())
}

fn check_positive(v: Coord2, reason: &'static str) -> Result<(), LayoutError> {
    if v.x > 0 && v.y > 0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidConfig(reason))
    }
}

fn check_non_negative(v: Coord2, reason: &'static str) -> Result<(), LayoutError> {
    if v.x >= 0 && v.y >= 0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidConfig(reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corridor::CorridorWidth;

    #[test]
    fn defaults_are_valid() {
        assert!(GenerationConfig::default().validate().is_ok());
        for strategy in [
            Strategy::RoomFirst(RoomFirstConfig::default()),
            Strategy::Graph(GraphConfig::default()),
        ] {
            let config = GenerationConfig { seed: 1, strategy };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn parse_partial_json() {
        let config = GenerationConfig::from_json(
            r#"{ "seed": 42, "strategy": { "kind": "graph", "corridor_width": 3, "only_main_rooms": true } }"#,
        )
        .unwrap();
        assert_eq!(config.seed, 42);
        let Strategy::Graph(graph) = config.strategy else {
            panic!("expected graph strategy");
        };
        assert_eq!(graph.corridor_width, CorridorWidth::Three);
        assert!(graph.only_main_rooms);
        assert_eq!(graph.main_room_multiplier, 1.25);
    }

    #[test]
    fn parse_nested_room_shapes() {
        let config = GenerationConfig::from_json(
            r#"{
                "strategy": {
                    "kind": "corridor_first",
                    "room_percent": 0.5,
                    "room_shape": { "kind": "random_walk", "walk_length": 6, "iterations": 3 },
                    "finish": { "remove_holes": 2 }
                }
            }"#,
        )
        .unwrap();
        let Strategy::CorridorFirst(c) = config.strategy else {
            panic!("expected corridor-first strategy");
        };
        assert_eq!(
            c.room_shape,
            RoomShape::RandomWalk(WalkConfig {
                walk_length: 6,
                iterations: 3,
                start_randomly: true,
            })
        );
        assert_eq!(c.finish.remove_holes, Some(2));
        assert_eq!(c.finish.expand_floor, None);
    }

    #[test]
    fn parse_room_first_policies() {
        let config = GenerationConfig::from_json(
            r#"{ "strategy": { "kind": "room_first", "split": "to_count", "fill": { "kind": "simple" } } }"#,
        )
        .unwrap();
        let Strategy::RoomFirst(c) = config.strategy else {
            panic!("expected room-first strategy");
        };
        assert_eq!(c.split, SplitPolicy::ToCount);
        assert_eq!(c.fill, RoomFill::Simple);
    }

    #[test]
    fn corridor_width_out_of_range_is_rejected() {
        let err = GenerationConfig::from_json(
            r#"{ "strategy": { "kind": "room_first", "corridor_width": 4 } }"#,
        )
        .unwrap_err();
        let LayoutError::ConfigParse(message) = err else {
            panic!("expected a parse error, got {err:?}");
        };
        assert!(message.contains("corridor width"), "{message}");
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert!(matches!(
            GenerationConfig::from_json(r#"{ "strategy": { "kind": "cave" } }"#),
            Err(LayoutError::ConfigParse(_))
        ));
    }

    #[test]
    fn room_percent_out_of_range() {
        let config = GenerationConfig {
            seed: 0,
            strategy: Strategy::CorridorFirst(CorridorFirstConfig {
                room_percent: 1.5,
                ..CorridorFirstConfig::default()
            }),
        };
        assert_eq!(
            config.validate(),
            Err(LayoutError::InvalidConfig("room_percent must be within [0, 1]"))
        );
    }

    #[test]
    fn non_positive_multiplier() {
        let config = GenerationConfig {
            seed: 0,
            strategy: Strategy::Graph(GraphConfig {
                main_room_multiplier: 0.0,
                ..GraphConfig::default()
            }),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_walk_iterations() {
        let config = GenerationConfig {
            seed: 0,
            strategy: Strategy::RoomFirst(RoomFirstConfig {
                fill: RoomFill::RandomWalk(WalkConfig {
                    iterations: 0,
                    ..WalkConfig::default()
                }),
                ..RoomFirstConfig::default()
            }),
        };
        assert!(config.validate().is_err());
    }
}

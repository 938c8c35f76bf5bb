#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use petri::simulation::params::{ConfigError, Params};

#[test]
fn test_default_params_are_valid() {
    let params = Params::default();
    assert!(params.validate().is_ok());
}

#[test]
fn test_rejects_non_positive_environment() {
    let params = Params {
        env_width: 0.0,
        ..Params::default()
    };
    assert!(matches!(
        params.validate(),
        Err(ConfigError::NonPositiveEnvironment { .. })
    ));

    let params = Params {
        env_height: -600.0,
        ..Params::default()
    };
    assert!(matches!(
        params.validate(),
        Err(ConfigError::NonPositiveEnvironment { .. })
    ));
}

#[test]
fn test_rejects_non_positive_radius() {
    let params = Params {
        cell_radius: 0.0,
        ..Params::default()
    };
    assert!(matches!(
        params.validate(),
        Err(ConfigError::NonPositiveRadius(_))
    ));
}

#[test]
fn test_rejects_partition_exceeding_environment() {
    let params = Params {
        partition_width: 700.0,
        ..Params::default()
    };
    assert!(matches!(
        params.validate(),
        Err(ConfigError::PartitionExceedsEnvironment { .. })
    ));
}

#[test]
fn test_rejects_partition_below_collision_diameter() {
    // Radius 10 means two touching cells span 20 units; a 15-unit bucket
    // would let the 3x3 broad phase miss real collisions.
    let params = Params {
        partition_width: 15.0,
        partition_height: 15.0,
        ..Params::default()
    };
    assert!(matches!(
        params.validate(),
        Err(ConfigError::PartitionBelowCollisionDiameter { .. })
    ));
}

#[test]
fn test_rejects_friction_out_of_range() {
    for friction in [0.0, 1.0, 1.5, -0.2] {
        let params = Params {
            friction,
            ..Params::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::FrictionOutOfRange(_))
        ));
    }
}

#[test]
fn test_rejects_repulsion_out_of_range() {
    for cell_repulsion in [0.0, 1.1, -0.5] {
        let params = Params {
            cell_repulsion,
            ..Params::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::RepulsionOutOfRange(_))
        ));
    }

    // Full-strength correction is allowed.
    let params = Params {
        cell_repulsion: 1.0,
        ..Params::default()
    };
    assert!(params.validate().is_ok());
}

#[test]
fn test_rejects_zero_substeps_and_cycle_length() {
    let params = Params {
        substeps: 0,
        ..Params::default()
    };
    assert!(matches!(params.validate(), Err(ConfigError::ZeroSubsteps)));

    let params = Params {
        cell_cycle_length: 0,
        ..Params::default()
    };
    assert!(matches!(params.validate(), Err(ConfigError::ZeroCycleLength)));
}

#[test]
fn test_rejects_invalid_mitosis_offsets() {
    let params = Params {
        mitosis_offset_min: 20.0,
        mitosis_offset_max: 15.0,
        ..Params::default()
    };
    assert!(matches!(
        params.validate(),
        Err(ConfigError::InvalidMitosisOffsets { .. })
    ));

    let params = Params {
        mitosis_offset_min: -1.0,
        ..Params::default()
    };
    assert!(matches!(
        params.validate(),
        Err(ConfigError::InvalidMitosisOffsets { .. })
    ));
}

#[test]
fn test_params_json_round_trip() {
    let params = Params {
        env_width: 400.0,
        n_cells: 25,
        seed: 99,
        ..Params::default()
    };

    let json = serde_json::to_string_pretty(&params).expect("serialize params");
    let restored: Params = serde_json::from_str(&json).expect("deserialize params");

    assert_eq!(restored.env_width, 400.0);
    assert_eq!(restored.n_cells, 25);
    assert_eq!(restored.seed, 99);
    assert_eq!(restored.friction, params.friction);
    assert!(restored.validate().is_ok());
}

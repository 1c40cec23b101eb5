#![cfg(feature = "serde")]

use nozzle_numeric::{
    Branch, StagnationConditions,
    inverse::Config,
};
use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};

#[test]
fn stagnation_conditions_round_trip() {
    let conditions = StagnationConditions::default()
        .with_density(MassDensity::new::<kilogram_per_cubic_meter>(1.2));

    let json = serde_json::to_string(&conditions).unwrap();
    let back: StagnationConditions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, conditions);
}

#[test]
fn inverse_config_from_json() {
    let config: Config = serde_json::from_str(
        r#"{
            "max_iters": 50,
            "log_mach_abs_tol": 1e-10,
            "log_mach_rel_tol": 0.0,
            "area_rel_tol": 1e-10
        }"#,
    )
    .unwrap();

    assert_eq!(config.max_iters, 50);
    assert_eq!(config.validate(), Ok(()));

    let branch: Branch = serde_json::from_str(r#""Supersonic""#).unwrap();
    assert_eq!(branch, Branch::Supersonic);
}

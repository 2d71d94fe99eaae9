use anyhow::Result;
use oop_labs::utils::validation::Numeric;
use oop_labs::{
    Car, Clock, ErrorCategory, FixedClock, LabError, SystemClock, Truck, Vehicle, VehicleBase,
};

/// Cars, trucks and the bare base all work behind `dyn Vehicle`.
#[test]
fn test_vehicles_share_base_behaviour() -> Result<()> {
    let mut truck = Truck::new("Volvo", 2015, 500)?;
    truck.set_cargo_weight(400)?;
    let fleet: Vec<Box<dyn Vehicle>> = vec![
        Box::new(Car::new("Toyota", 1995, 5)?),
        Box::new(truck),
        Box::new(VehicleBase::new(Some("Unknown"), "Ford", 2004)?),
    ];

    let clock = FixedClock(2024);
    let ages: Vec<i32> = fleet.iter().map(|v| v.age_at(&clock)).collect();
    assert_eq!(ages, vec![29, 9, 20]);

    let categories: Vec<&str> = fleet.iter().map(|v| v.category()).collect();
    assert_eq!(categories, vec!["Passenger", "Cargo", "Unknown"]);

    let costs: Vec<f64> = fleet.iter().map(|v| v.maintenance_cost(200.0, 8.0)).collect();
    assert_eq!(costs, vec![1600.0, 2000.0, 1600.0]);
    Ok(())
}

#[test]
fn test_age_follows_system_clock() -> Result<()> {
    let car = Car::new("Toyota", 1995, 5)?;
    assert_eq!(car.age(), SystemClock.current_year() - 1995);
    assert!(car.to_string().starts_with("Passenger vehicle: Toyota, released 1995\n"));
    Ok(())
}

#[test]
fn test_truck_scenarios() -> Result<()> {
    let mut truck = Truck::new("Volvo", 2015, 500)?;
    truck.set_cargo_weight(400)?;
    assert_eq!(truck.maintenance_cost_with_fee(200.0, 8.0, 2.0), 2400.0);

    let mut truck = Truck::new("Volvo", 2015, 105)?;
    truck.set_cargo_weight(60.3)?;
    assert_eq!(truck.load_capacity_utilization(), 57.43);
    Ok(())
}

#[test]
fn test_maintenance_cost_with_fee_formula() -> Result<()> {
    let mut truck = Truck::new("Scania", 2020, 1000)?;
    for weight in [0.0, 12.5, 999.0] {
        truck.set_cargo_weight(weight)?;
        for (distance, rate, fee) in [(0.0, 3.0, 1.5), (150.0, 2.0, 0.5), (10.0, 10.0, 4.0)] {
            assert_eq!(
                truck.maintenance_cost_with_fee(distance, rate, fee),
                distance * rate + weight * fee
            );
        }
        assert_eq!(truck.maintenance_cost(10.0, 2.0), 20.0 + weight);
    }
    Ok(())
}

#[test]
fn test_rejections_leave_state_unchanged() -> Result<()> {
    let mut car = Car::new("Lada", 2003, 4)?;
    car.set_passenger_count(3)?;
    for bad in [serde_json::json!("3"), serde_json::json!(2.5), serde_json::json!(5)] {
        assert!(car.set_passenger_count(bad).is_err());
    }
    assert_eq!(car.passenger_count(), 3);

    let mut truck = Truck::new("MAN", 2001, 50)?;
    truck.set_cargo_weight(30.1)?;
    for bad in [serde_json::json!("20"), serde_json::json!(null), serde_json::json!(50.5)] {
        assert!(truck.set_cargo_weight(bad).is_err());
    }
    assert_eq!(truck.cargo_weight(), Numeric::Real(30.1));
    Ok(())
}

#[test]
fn test_construction_errors() {
    let err = VehicleBase::new(None, "Ford", 2005).unwrap_err();
    assert!(matches!(err, LabError::MissingCategory));

    let err = Car::new(42, 1995, 5).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::TypeMismatch);

    let err = Truck::new("Volvo", 2025, 10).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Invariant);
}

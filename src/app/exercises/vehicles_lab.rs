use super::Checks;
use crate::domain::ports::{Clock, Exercise};
use crate::domain::vehicle::{Car, Truck, Vehicle, VehicleBase};
use crate::utils::error::{ErrorCategory, Result};
use crate::utils::validation::Numeric;

pub struct VehiclesExercise;

impl Exercise for VehiclesExercise {
    fn name(&self) -> &str {
        "lab4: vehicles"
    }

    fn run(&self, clock: &dyn Clock) -> Result<usize> {
        let mut checks = Checks::new(self.name());
        let year = clock.current_year();

        // base vehicle
        checks.fails_with(
            "vehicle without category",
            VehicleBase::new(None, "Ford", 2005),
            ErrorCategory::Invariant,
        )?;
        checks.fails_with(
            "numeric brand",
            VehicleBase::new(Some("Unknown"), 999, 2015),
            ErrorCategory::TypeMismatch,
        )?;
        checks.fails_with(
            "textual year",
            VehicleBase::new(Some("Unknown"), "Mitsubishi", "1987"),
            ErrorCategory::TypeMismatch,
        )?;
        checks.fails_with(
            "year before 1900",
            VehicleBase::new(Some("Unknown"), "Kia", 1899),
            ErrorCategory::Invariant,
        )?;

        let ford = checks.ok("ford", VehicleBase::new(Some("Unknown"), "Ford", 2004))?;
        checks.equal("ford age", ford.age_at(clock), year - 2004)?;
        checks.equal("ford maintenance", ford.maintenance_cost(300.0, 15.0), 4500.0)?;
        checks.equal(
            "ford repr",
            format!("{:?}", ford),
            "Vehicle(type='Unknown', brand='Ford', year_release=2004)".to_string(),
        )?;

        // car
        let toyota = checks.ok("toyota", Car::new("Toyota", 1995, 5))?;
        checks.equal(
            "toyota summary",
            toyota.summary_at(clock),
            format!(
                "Passenger vehicle: Toyota, released 1995\nVehicle age: {}",
                year - 1995
            ),
        )?;
        checks.fails_with(
            "textual seating capacity",
            Car::new("Toyota", 1995, "2"),
            ErrorCategory::TypeMismatch,
        )?;

        let mut lada = checks.ok("lada", Car::new("Lada", 2003, 4))?;
        checks.fails_with(
            "textual passenger count",
            lada.set_passenger_count("7"),
            ErrorCategory::TypeMismatch,
        )?;
        checks.fails_with(
            "too many passengers",
            lada.set_passenger_count(7),
            ErrorCategory::Invariant,
        )?;
        checks.ok("four passengers", lada.set_passenger_count(4))?;
        checks.equal("lada passengers", lada.passenger_count(), 4)?;

        let mut lada = checks.ok("lada 2001", Car::new("Lada", 2001, 5))?;
        checks.ok("three passengers", lada.set_passenger_count(3))?;
        checks.equal(
            "lada repr",
            format!("{:?}", lada),
            "Car(type='Passenger', brand='Lada', year_release=2001, seating_capacity=5, passenger_count=3)"
                .to_string(),
        )?;

        // truck
        checks.fails_with(
            "fractional cargo capacity",
            Truck::new("Volvo", 2015, 30.5),
            ErrorCategory::TypeMismatch,
        )?;
        let mut volvo = checks.ok("volvo", Truck::new("Volvo", 2015, 30))?;
        checks.fails_with(
            "textual cargo weight",
            volvo.set_cargo_weight("20"),
            ErrorCategory::TypeMismatch,
        )?;
        checks.fails_with(
            "overloaded truck",
            volvo.set_cargo_weight(30.5),
            ErrorCategory::Invariant,
        )?;
        checks.ok("half a load", volvo.set_cargo_weight(29.5))?;
        checks.equal("volvo weight", volvo.cargo_weight(), Numeric::Real(29.5))?;

        let mut volvo = checks.ok("volvo 105", Truck::new("Volvo", 2015, 105))?;
        checks.ok("load 60.3", volvo.set_cargo_weight(60.3))?;
        checks.equal("utilization", volvo.load_capacity_utilization(), 57.43)?;

        let mut volvo = checks.ok("volvo 500", Truck::new("Volvo", 2015, 500))?;
        checks.ok("load 400", volvo.set_cargo_weight(400))?;
        checks.equal(
            "maintenance with fee",
            volvo.maintenance_cost_with_fee(200.0, 8.0, 2.0),
            2400.0,
        )?;
        checks.equal("maintenance default fee", volvo.maintenance_cost(200.0, 8.0), 2000.0)?;

        let mut man = checks.ok("man", Truck::new("MAN", 2001, 50))?;
        checks.ok("load 30.1", man.set_cargo_weight(30.1))?;
        checks.equal(
            "man repr",
            format!("{:?}", man),
            "Truck(type='Cargo', brand='MAN', year_release=2001, cargo_capacity=50, cargo_weight=30.1)"
                .to_string(),
        )?;

        Ok(checks.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixedClock;

    #[test]
    fn test_vehicles_exercise_passes() {
        let checks = VehiclesExercise.run(&FixedClock(2024)).unwrap();
        assert!(checks > 20);
    }

    #[test]
    fn test_vehicles_exercise_follows_clock() {
        assert!(VehiclesExercise.run(&FixedClock(2030)).is_ok());
    }
}

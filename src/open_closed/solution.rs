//! Each role is its own type. The payroll code only ever sees
//! `dyn Employee`, so adding a role never touches existing types.

/// Keep this to a single method.
pub trait Payroll {
    fn calculate_salary(&self) -> f64;
}

pub trait Employee: Payroll {
    fn full_name(&self) -> &str;
}

macro_rules! role {
    ($name:ident, $rate:expr) => {
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            full_name: String,
            hours_reported: u32,
        }

        impl $name {
            pub const HOURLY_RATE: f64 = $rate;

            pub fn new(full_name: impl Into<String>, hours_reported: u32) -> Self {
                Self {
                    full_name: full_name.into(),
                    hours_reported,
                }
            }

            pub fn hours_reported(&self) -> u32 {
                self.hours_reported
            }
        }

        impl Payroll for $name {
            fn calculate_salary(&self) -> f64 {
                f64::from(self.hours_reported) * Self::HOURLY_RATE
            }
        }

        impl Employee for $name {
            fn full_name(&self) -> &str {
                &self.full_name
            }
        }
    };
}

role!(Junior, 15.25);
role!(Senior, 17.50);
role!(Principal, 18.75);

pub fn total_payroll(employees: &[Box<dyn Employee>]) -> f64 {
    employees.iter().map(|e| e.calculate_salary()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// A role added after the fact, with no change to the code above.
    struct Contractor {
        full_name: String,
        fixed_fee: f64,
    }

    impl Payroll for Contractor {
        fn calculate_salary(&self) -> f64 {
            self.fixed_fee
        }
    }

    impl Employee for Contractor {
        fn full_name(&self) -> &str {
            &self.full_name
        }
    }

    fn staff(hours: u32) -> Vec<Box<dyn Employee>> {
        vec![
            Box::new(Junior::new("Joseph", hours)),
            Box::new(Senior::new("Petter", hours)),
            Box::new(Principal::new("John", hours)),
        ]
    }

    #[test]
    fn test_salaries_for_forty_hours() {
        let salaries: Vec<f64> = staff(40).iter().map(|e| e.calculate_salary()).collect();
        assert_eq!(salaries, vec![610.0, 700.0, 750.0]);
    }

    #[test]
    fn test_names_survive_dispatch() {
        let names: Vec<String> = staff(1).iter().map(|e| e.full_name().to_string()).collect();
        assert_eq!(names, vec!["Joseph", "Petter", "John"]);
    }

    #[test]
    fn test_new_role_plugs_in() {
        let mut employees = staff(40);
        employees.push(Box::new(Contractor {
            full_name: "Maya".to_string(),
            fixed_fee: 1000.0,
        }));
        assert_eq!(total_payroll(&employees), 3060.0);
        assert_eq!(employees[3].full_name(), "Maya");
    }

    #[test]
    fn test_empty_payroll() {
        assert_eq!(total_payroll(&[]), 0.0);
    }

    #[test]
    fn test_zero_hours() {
        assert_eq!(Junior::new("Joseph", 0).calculate_salary(), 0.0);
    }

    proptest! {
        #[test]
        fn test_salary_is_hours_times_rate(hours in 0u32..10_000) {
            let h = f64::from(hours);
            prop_assert_eq!(Junior::new("j", hours).calculate_salary(), h * Junior::HOURLY_RATE);
            prop_assert_eq!(Senior::new("s", hours).calculate_salary(), h * Senior::HOURLY_RATE);
            prop_assert_eq!(Principal::new("p", hours).calculate_salary(), h * Principal::HOURLY_RATE);
        }

        #[test]
        fn test_rates_keep_seniority_order(hours in 1u32..10_000) {
            let junior = Junior::new("j", hours).calculate_salary();
            let senior = Senior::new("s", hours).calculate_salary();
            let principal = Principal::new("p", hours).calculate_salary();
            prop_assert!(junior < senior && senior < principal);
        }
    }
}

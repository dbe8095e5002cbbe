/// Every new role means another arm in [`Employee::calculate_salary`].
#[derive(Debug, Clone)]
pub struct Employee {
    full_name: String,
    role: String,
}

impl Employee {
    pub fn new(full_name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            role: role.into(),
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn calculate_salary(&self, hours_reported: u32) -> f64 {
        let hours = f64::from(hours_reported);
        match self.role.as_str() {
            "Junior" => hours * 15.25,
            "Senior" => hours * 17.50,
            "Principal" => hours * 18.75,
            _ => 0.0,
        }
    }
}

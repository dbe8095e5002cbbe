use std::f64::consts::PI;

use crate::error::{Result, SolidError};

pub trait Shape {
    fn area(&self) -> Result<f64>;
}

pub struct CircleShape {
    radius: f64,
}

impl CircleShape {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for CircleShape {
    fn area(&self) -> Result<f64> {
        Ok(PI * self.radius.powi(2))
    }
}

pub struct SquareShape {
    width: f64,
}

impl SquareShape {
    pub fn new(width: f64) -> Self {
        Self { width }
    }
}

impl Shape for SquareShape {
    fn area(&self) -> Result<f64> {
        Ok(self.width.powi(2))
    }
}

/// Forced to implement `area` even though a line has none.
pub struct LineShape;

impl Shape for LineShape {
    fn area(&self) -> Result<f64> {
        Err(SolidError::area_undefined("LineShape"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_areas() {
        assert_eq!(CircleShape::new(5.0).area().unwrap(), PI * 25.0);
        assert_eq!(SquareShape::new(7.0).area().unwrap(), 49.0);
    }

    #[test]
    fn test_line_breaks_the_contract() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(CircleShape::new(5.0)),
            Box::new(SquareShape::new(7.0)),
            Box::new(LineShape),
        ];
        let total: Result<Vec<f64>> = shapes.iter().map(|s| s.area()).collect();
        assert!(matches!(total, Err(SolidError::AreaUndefined { .. })));
    }
}

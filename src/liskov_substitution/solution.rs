use std::f64::consts::PI;

/// Common to every shape. Carries no area, so every implementor can honour it.
pub trait Shape {
    fn name(&self) -> &'static str;

    fn as_one_dimensional(&self) -> Option<&dyn OneDimensionalShape> {
        None
    }

    fn as_two_dimensional(&self) -> Option<&dyn TwoDimensionalShape> {
        None
    }
}

pub trait OneDimensionalShape: Shape {
    fn length(&self) -> f64;
}

pub trait TwoDimensionalShape: Shape {
    fn area(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleShape {
    radius: f64,
}

impl CircleShape {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for CircleShape {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn as_two_dimensional(&self) -> Option<&dyn TwoDimensionalShape> {
        Some(self)
    }
}

impl TwoDimensionalShape for CircleShape {
    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareShape {
    width: f64,
}

impl SquareShape {
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

impl Shape for SquareShape {
    fn name(&self) -> &'static str {
        "Square"
    }

    fn as_two_dimensional(&self) -> Option<&dyn TwoDimensionalShape> {
        Some(self)
    }
}

impl TwoDimensionalShape for SquareShape {
    fn area(&self) -> f64 {
        self.width.powi(2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineShape {
    length: f64,
}

impl LineShape {
    pub fn new(length: f64) -> Self {
        Self { length }
    }
}

impl Shape for LineShape {
    fn name(&self) -> &'static str {
        "Line"
    }

    fn as_one_dimensional(&self) -> Option<&dyn OneDimensionalShape> {
        Some(self)
    }
}

impl OneDimensionalShape for LineShape {
    fn length(&self) -> f64 {
        self.length
    }
}

/// Areas of the two-dimensional shapes, in input order.
pub fn areas(shapes: &[Box<dyn Shape>]) -> Vec<f64> {
    shapes
        .iter()
        .filter_map(|shape| shape.as_two_dimensional())
        .map(|shape| shape.area())
        .collect()
}

pub fn total_length(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes
        .iter()
        .filter_map(|shape| shape.as_one_dimensional())
        .map(|shape| shape.length())
        .sum()
}

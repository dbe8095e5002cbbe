//! The repository keeps storage and queries. Creating widgets belongs to
//! [`WidgetFactory`]; editing them belongs to [`WidgetOperations`].

use std::slice;

pub use super::Widget;
use crate::error::{Result, SolidError};

#[derive(Debug, Default)]
pub struct WidgetRepository {
    widgets: Vec<Widget>,
}

impl WidgetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_widget(&mut self, widget: Widget) {
        tracing::debug!(name = widget.name(), "adding widget");
        self.widgets.push(widget);
    }

    /// First widget whose name matches, ignoring case.
    pub fn get_widget_by_name(&self, name: &str) -> Result<&Widget> {
        self.widgets
            .iter()
            .find(|w| w.is_named(name))
            .ok_or_else(|| SolidError::widget_not_found(name))
    }

    pub fn get_widget_by_name_mut(&mut self, name: &str) -> Result<&mut Widget> {
        self.widgets
            .iter_mut()
            .find(|w| w.is_named(name))
            .ok_or_else(|| SolidError::widget_not_found(name))
    }

    /// Removes the first widget equal to `widget` and hands it back.
    pub fn remove_widget(&mut self, widget: &Widget) -> Option<Widget> {
        let pos = self.widgets.iter().position(|w| w == widget)?;
        tracing::debug!(name = widget.name(), "removing widget");
        Some(self.widgets.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Widget> {
        self.widgets.iter()
    }
}

impl<'a> IntoIterator for &'a WidgetRepository {
    type Item = &'a Widget;
    type IntoIter = slice::Iter<'a, Widget>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct WidgetFactory;

impl WidgetFactory {
    pub fn create_widget(name: &str) -> Widget {
        Widget::new(name)
    }
}

pub struct WidgetOperations;

impl WidgetOperations {
    pub fn change_widget_name(widget: &mut Widget, name: &str) {
        widget.set_name(name);
    }
}

use super::Widget;
use crate::error::{Result, SolidError};

/// Storage, construction and editing all live here.
#[derive(Debug, Default)]
pub struct WidgetRepository {
    widgets: Vec<Widget>,
}

impl WidgetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_widget(&mut self, widget: Widget) {
        self.widgets.push(widget);
    }

    pub fn change_widget_name(&self, widget: &mut Widget, name: &str) {
        widget.set_name(name);
    }

    pub fn create_widget(&self, name: &str) -> Widget {
        Widget::new(name)
    }

    pub fn get_widget_by_name(&self, name: &str) -> Result<&Widget> {
        self.widgets
            .iter()
            .find(|w| w.is_named(name))
            .ok_or_else(|| SolidError::widget_not_found(name))
    }

    pub fn remove_widget(&mut self, widget: &Widget) {
        if let Some(pos) = self.widgets.iter().position(|w| w == widget) {
            self.widgets.remove(pos);
        }
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_god_repository_round() {
        let mut repo = WidgetRepository::new();
        let mut widget = repo.create_widget("gear");
        repo.change_widget_name(&mut widget, "Sprocket");
        repo.add_widget(widget);

        assert_eq!(repo.get_widget_by_name("sprocket").unwrap().name(), "Sprocket");
        assert!(repo.get_widget_by_name("gear").is_err());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut repo = WidgetRepository::new();
        repo.add_widget(Widget::new("a"));
        repo.remove_widget(&Widget::new("b"));
        assert_eq!(repo.len(), 1);

        repo.remove_widget(&Widget::new("a"));
        assert!(repo.is_empty());
    }
}

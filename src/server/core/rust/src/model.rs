/* src/server/core/rust/src/model.rs */

use serde::Serialize;

use crate::widget::WidgetDescriptor;

/// Ordered widget descriptors collected for one request before template rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageModel {
  pub widgets: Vec<WidgetDescriptor>,
}

impl PageModel {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, widget: WidgetDescriptor) {
    self.widgets.push(widget);
  }

  pub fn len(&self) -> usize {
    self.widgets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.widgets.is_empty()
  }

  pub fn to_json(&self) -> serde_json::Value {
    serde_json::to_value(self).unwrap_or_default()
  }
}

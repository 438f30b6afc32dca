use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};

use crate::fields::FormField;

pub const BUTTON_TYPE: &str = "button";
pub const BUTTON_TEMPLATE: &str = "fields/button.html";

/// Plain `<button>` form field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ButtonField {
    title: String,
}

impl ButtonField {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl FormField for ButtonField {
    fn field_type(&self) -> &str {
        BUTTON_TYPE
    }

    fn template(&self) -> &str {
        BUTTON_TEMPLATE
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl Serialize for ButtonField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ButtonField", 3)?;
        state.serialize_field("type", BUTTON_TYPE)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("template", BUTTON_TEMPLATE)?;
        state.end()
    }
}

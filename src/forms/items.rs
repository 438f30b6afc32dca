use serde::Deserialize;
use validator::Validate;

use crate::domain::item::NewItem;
use crate::fields::button::ButtonField;
use crate::forms::FormError;

/// Form submitted from the listing page to add an item.
#[derive(Debug, Deserialize, Validate)]
pub struct AddItemForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

impl AddItemForm {
    /// Submit button rendered under the form.
    pub fn submit_button() -> ButtonField {
        ButtonField::new("Add item")
    }
}

impl TryFrom<AddItemForm> for NewItem {
    type Error = FormError;

    fn try_from(form: AddItemForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let item = NewItem::new(form.name);
        if item.name.is_empty() {
            return Err(FormError::InvalidName);
        }
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_name() {
        let item = NewItem::try_from(AddItemForm {
            name: "  Widget ".to_string(),
        })
        .unwrap();
        assert_eq!(item.name, "Widget");
    }

    #[test]
    fn rejects_blank_names() {
        assert!(matches!(
            NewItem::try_from(AddItemForm {
                name: String::new()
            }),
            Err(FormError::Validation(_))
        ));
        assert!(matches!(
            NewItem::try_from(AddItemForm {
                name: "   ".to_string()
            }),
            Err(FormError::InvalidName)
        ));
    }
}

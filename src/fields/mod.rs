//! Form field descriptors consumed by the form renderer.

pub mod button;

/// Common surface of every renderable form field.
pub trait FormField {
    /// HTML input type of the field.
    fn field_type(&self) -> &str;

    /// Template used to render the field.
    fn template(&self) -> &str;

    fn title(&self) -> &str;
}

use crate::dsl::error::CannotSetText;
use crate::widget::ObjectRef;

/// Which setter accepted a piece of display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextProbe {
    SetText,
    SetTitle,
}

/// Give `target` its display text: `set_text` first, then `set_title`.
pub fn apply_text(target: &ObjectRef, text: &str) -> Result<TextProbe, CannotSetText> {
    let mut obj = target.borrow_mut();
    if obj.set_text(text).is_ok() {
        return Ok(TextProbe::SetText);
    }
    obj.set_title(text).map(|()| TextProbe::SetTitle).map_err(|_| CannotSetText {
        class: obj.class_name().to_string(),
        text: text.to_string(),
    })
}

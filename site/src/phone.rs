//! Phone field auto-formatting

use shared::config::PhoneConfig;
use shared::phone::format_phone;
use shared::SiteError;
use web_sys::HtmlInputElement;

use crate::dom::{Listeners, Page};

pub fn install(page: &Page, listeners: &mut Listeners, config: &PhoneConfig) -> Result<(), SiteError> {
    let input: HtmlInputElement = page.typed_by_id(&config.input_id)?;

    for event in ["input", "keyup"] {
        let field = input.clone();
        listeners.listen(&input, event, move |_| reformat(&field));
    }
    Ok(())
}

fn reformat(field: &HtmlInputElement) {
    let value = field.value();
    let formatted = format_phone(&value);
    // untouched values keep the caret where the user left it
    if formatted != value {
        field.set_value(&formatted);
    }
}

//! Contact form submission

use std::cell::RefCell;
use std::rc::Rc;

use shared::config::FormConfig;
use shared::form::{ButtonView, Completion, SubmitFlow};
use shared::{Scheduler, SiteError};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlFormElement};

use crate::api;
use crate::dom::{self, Listeners, Page};

/// the elements a submission updates
#[derive(Clone)]
struct FormView {
    form: HtmlFormElement,
    button: HtmlButtonElement,
    success: Option<Element>,
    success_class: String,
}

pub fn install<S>(page: &Page, listeners: &mut Listeners, timers: S, config: &FormConfig) -> Result<(), SiteError>
where
    S: Scheduler + Clone + 'static,
{
    let form: HtmlFormElement = page.typed_by_id(&config.form_id)?;
    let button = form
        .query_selector(&config.submit_selector)
        .map_err(dom::js_error)?
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        .ok_or_else(|| SiteError::MissingElement(config.submit_selector.clone()))?;
    let success = page.by_id(&config.success_id).ok();
    if success.is_none() {
        log::debug!("no #{} panel, success only hides the form", config.success_id);
    }

    let flow = Rc::new(RefCell::new(SubmitFlow::new(button.text_content().unwrap_or_default())));
    let view = FormView {
        form: form.clone(),
        button,
        success,
        success_class: config.success_class.clone(),
    };

    listeners.intercept(&form, "submit", move |event| {
        event.prevent_default();

        // in flight or already sent
        let Some(pending) = flow.borrow_mut().begin() else {
            return;
        };
        render(&view.button, &pending);

        let (view, flow, timers) = (view.clone(), flow.clone(), timers.clone());
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = api::submit_form(&view.form).await;
            if let Err(e) = &outcome {
                log::debug!("contact form: {}", e);
            }
            let completion = flow.borrow_mut().finish(outcome);
            view.complete(completion, &flow, &timers);
        });
    });
    Ok(())
}

impl FormView {
    /// success swaps the form for the panel; failure relabels and schedules the reset
    fn complete<S: Scheduler>(&self, completion: Completion, flow: &Rc<RefCell<SubmitFlow>>, timers: &S) {
        match completion {
            Completion::ShowSuccess => {
                dom::set_style(&self.form, "display", "none");
                if let Some(panel) = &self.success {
                    dom::add_class(panel, &self.success_class);
                }
            }
            Completion::ShowError { view, reset_after_ms, generation } => {
                render(&self.button, &view);
                let (button, flow) = (self.button.clone(), flow.clone());
                timers.defer(
                    reset_after_ms,
                    Box::new(move || {
                        let restored = flow.borrow_mut().recover(generation);
                        if let Some(view) = restored {
                            render(&button, &view);
                        }
                    }),
                );
            }
        }
    }
}

fn render(button: &HtmlButtonElement, view: &ButtonView) {
    button.set_text_content(Some(&view.label));
    button.set_disabled(view.disabled);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::testing::{wait_until, Fixture, ManualTimers};
    use shared::form::{ERROR_LABEL, ERROR_RESET_MS, SENDING_LABEL};
    use shared::SubmitError;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::{Event, HtmlElement};

    // nothing listens on the discard port, so the POST fails in transport
    const MARKUP: &str = r#"
        <form id="contact-fx" action="http://127.0.0.1:9/contact" method="post">
            <input name="email" value="ops@example.com">
            <button type="submit">Book a Demo</button>
        </form>
        <div id="contact-fx-done"></div>
    "#;

    fn config() -> FormConfig {
        FormConfig {
            form_id: "contact-fx".to_string(),
            success_id: "contact-fx-done".to_string(),
            ..FormConfig::default()
        }
    }

    fn view(fixture: &Fixture) -> FormView {
        let form: HtmlFormElement = fixture.get("contact-fx").dyn_into().unwrap();
        let button = form.query_selector("button").unwrap().unwrap().dyn_into().unwrap();
        FormView {
            form,
            button,
            success: Some(fixture.get("contact-fx-done")),
            success_class: config().success_class,
        }
    }

    fn label(button: &HtmlButtonElement) -> String {
        button.text_content().unwrap_or_default()
    }

    // ===========================================================================
    // completion rendering
    // ===========================================================================

    #[wasm_bindgen_test]
    fn test_success_hides_form_and_shows_panel() {
        let fixture = Fixture::mount(MARKUP);
        let view = view(&fixture);
        let flow = Rc::new(RefCell::new(SubmitFlow::new(label(&view.button))));
        let timers = ManualTimers::default();

        flow.borrow_mut().begin().unwrap();
        let completion = flow.borrow_mut().finish(Ok(()));
        view.complete(completion, &flow, &timers);

        let form: &HtmlElement = view.form.as_ref();
        assert_eq!(form.style().get_property_value("display").unwrap(), "none");
        assert!(dom::has_class(&fixture.get("contact-fx-done"), &config().success_class));
        assert!(timers.delays().is_empty());
    }

    #[wasm_bindgen_test]
    fn test_rejected_submit_shows_error_then_restores_label() {
        let fixture = Fixture::mount(MARKUP);
        let view = view(&fixture);
        let flow = Rc::new(RefCell::new(SubmitFlow::new(label(&view.button))));
        let timers = ManualTimers::default();

        flow.borrow_mut().begin().unwrap();
        let completion = flow.borrow_mut().finish(Err(SubmitError::Rejected { status: 500 }));
        view.complete(completion, &flow, &timers);

        assert_eq!(label(&view.button), ERROR_LABEL);
        assert!(!view.button.disabled());
        assert_eq!(timers.delays(), vec![ERROR_RESET_MS]);

        timers.run_all();
        assert_eq!(label(&view.button), "Book a Demo");
        assert!(!view.button.disabled());
        assert!(!dom::has_class(&fixture.get("contact-fx-done"), &config().success_class));
    }

    // ===========================================================================
    // wired submit handler
    // ===========================================================================

    #[wasm_bindgen_test]
    async fn test_failed_post_runs_the_error_path() {
        let fixture = Fixture::mount(MARKUP);
        let mut listeners = Listeners::default();
        let timers = ManualTimers::default();
        install(fixture.page(), &mut listeners, timers.clone(), &config()).unwrap();

        let form = fixture.get("contact-fx");
        let button: HtmlButtonElement = form.query_selector("button").unwrap().unwrap().dyn_into().unwrap();
        form.dispatch_event(&Event::new("submit").unwrap()).unwrap();
        assert_eq!(label(&button), SENDING_LABEL);
        assert!(button.disabled());

        // a second submit while in flight is ignored
        form.dispatch_event(&Event::new("submit").unwrap()).unwrap();

        assert!(wait_until(5000, || label(&button) == ERROR_LABEL).await);
        assert!(!button.disabled());
        assert_eq!(timers.delays(), vec![ERROR_RESET_MS]);

        timers.run_all();
        assert_eq!(label(&button), "Book a Demo");
    }
}

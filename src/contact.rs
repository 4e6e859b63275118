use crate::constants::{FORM_ACCESS_KEY, FORM_ENDPOINT, SUBMIT_ERROR_TEXT};
use crate::core::{SubmissionTracker, SUCCESS_DISMISS_MS};
use crate::dom;
use gloo_net::http::Request;
use serde::Deserialize;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

// Delivery is entirely the relay service's problem; this module only tracks
// pending/succeeded/failed UI state around a single POST.

#[derive(Debug, Deserialize)]
struct RelayResponse {
    success: bool,
}

/// POST the collected fields. Any transport error or an application-level
/// `success: false` reads as failure.
async fn post_form(data: web::FormData) -> bool {
    let request = match Request::post(FORM_ENDPOINT).body(data) {
        Ok(r) => r,
        Err(e) => {
            log::error!("form request build error: {:?}", e);
            return false;
        }
    };
    let response = match request.send().await {
        Ok(r) => r,
        Err(e) => {
            log::error!("form submission error: {:?}", e);
            return false;
        }
    };
    match response.json::<RelayResponse>().await {
        Ok(body) => body.success,
        Err(e) => {
            log::error!("form response parse error: {:?}", e);
            false
        }
    }
}

fn set_submit_button(document: &web::Document, sending: bool) {
    if let Some(el) = document.get_element_by_id("contact-submit") {
        if let Ok(button) = el.dyn_into::<web::HtmlButtonElement>() {
            button.set_disabled(sending);
            button.set_text_content(Some(if sending { "Sending\u{2026}" } else { "Send Message" }));
        }
    }
}

fn schedule_success_dismiss(tracker: Rc<RefCell<SubmissionTracker>>) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        tracker.borrow_mut().dismiss();
        if let Some(document) = dom::window_document() {
            dom::add_class(&document, "contact-success", "hidden");
        }
    }) as Box<dyn FnMut()>);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        SUCCESS_DISMISS_MS,
    );
    closure.forget();
}

/// Wire the contact form's submit handler. Default page navigation is
/// suppressed; fields plus the fixed access key go out in one POST and the
/// tracker gates re-entrant submission while it is in flight.
pub fn wire_contact_form(document: &web::Document) -> anyhow::Result<()> {
    let form: web::HtmlFormElement = document
        .get_element_by_id("contact-form")
        .ok_or_else(|| anyhow::anyhow!("missing #contact-form"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let tracker = Rc::new(RefCell::new(SubmissionTracker::default()));

    let form_for_submit = form.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        if !tracker.borrow_mut().begin() {
            log::warn!("[contact] submit ignored; one already in flight");
            return;
        }

        let data = match web::FormData::new_with_form(&form_for_submit) {
            Ok(d) => d,
            Err(e) => {
                log::error!("FormData error: {:?}", e);
                tracker.borrow_mut().resolve(false);
                return;
            }
        };
        _ = data.append_with_str("access_key", FORM_ACCESS_KEY);

        if let Some(document) = dom::window_document() {
            set_submit_button(&document, true);
        }

        let form_async = form_for_submit.clone();
        let tracker_async = tracker.clone();
        spawn_local(async move {
            let ok = post_form(data).await;
            // In-flight flag clears on both outcomes.
            tracker_async.borrow_mut().resolve(ok);
            if let Some(document) = dom::window_document() {
                set_submit_button(&document, false);
                if ok {
                    form_async.reset();
                    dom::remove_class(&document, "contact-success", "hidden");
                    schedule_success_dismiss(tracker_async.clone());
                }
            }
            if !ok {
                if let Some(window) = web::window() {
                    _ = window.alert_with_message(SUBMIT_ERROR_TEXT);
                }
            }
        });
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    closure.forget();
    Ok(())
}

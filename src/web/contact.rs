// contact.rs - Contact form bindings
//
// `EmailJs` posts the fields to the EmailJS REST API; `DomForm` reads and
// updates the form element. `attach` wires the submit event to `form::submit`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, FormData, HtmlButtonElement, HtmlFormElement};

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::form::{self, ButtonState, FormFields, FormView, Relay, Submitter};

/// Marks a form whose submit listener is already installed
const ATTACHED_ATTR: &str = "data-relay-attached";

pub struct EmailJs {
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a FormFields,
}

impl From<&RelayConfig> for EmailJs {
    fn from(config: &RelayConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
        }
    }
}

impl Relay for EmailJs {
    async fn send(&self, fields: &FormFields) -> Result<(), RelayError> {
        let body = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: fields,
        };

        let resp = Request::post(&self.endpoint)
            .json(&body)
            .map_err(|e| RelayError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RelayError::Status { status, body });
        }
        Ok(())
    }
}

pub struct DomForm {
    form: HtmlFormElement,
    button: Option<HtmlButtonElement>,
}

impl FormView for DomForm {
    fn fields(&self) -> FormFields {
        let Ok(data) = FormData::new_with_form(&self.form) else {
            return FormFields::new();
        };
        let Ok(Some(entries)) = js_sys::try_iter(&data) else {
            return FormFields::new();
        };

        // Entries are [name, value]; file inputs have non-string values
        entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let pair = js_sys::Array::from(&entry);
                Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
            })
            .collect()
    }

    fn show(&self, state: &ButtonState) {
        let Some(button) = &self.button else { return };
        button.set_inner_text(&state.label);
        button.set_disabled(state.disabled);
        let style = button.style();
        let result = match state.color {
            Some(color) => style.set_property("background-color", color),
            None => style.remove_property("background-color").map(|_| ()),
        };
        if let Err(e) = result {
            log::warn!("contact form: could not style button: {e:?}");
        }
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else { return };
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("contact form: could not alert: {e:?}");
        }
    }

    fn reset(&self) {
        self.form.reset();
    }
}

/// Hook the contact form's submit event. Returns `false` when the page has
/// no contact form.
pub fn attach(config: &RelayConfig) -> Result<bool, JsValue> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Ok(false);
    };
    let Some(element) = document.get_element_by_id(&config.form_id) else {
        log::debug!("contact form: #{} not on this page", config.form_id);
        return Ok(false);
    };
    let form: HtmlFormElement = element.dyn_into().map_err(JsValue::from)?;
    if form.has_attribute(ATTACHED_ATTR) {
        log::debug!("contact form: #{} already attached", config.form_id);
        return Ok(true);
    }
    if !config.has_public_key() {
        log::warn!("contact form: no EmailJS public key configured, submissions will be rejected");
    }
    let button = form
        .query_selector("button")?
        .and_then(|b| b.dyn_into::<HtmlButtonElement>().ok());
    let label = button.as_ref().map(|b| b.inner_text()).unwrap_or_default();

    let view = Rc::new(DomForm { form: form.clone(), button });
    let submitter = Rc::new(RefCell::new(Submitter::new(label)));
    let relay = Rc::new(EmailJs::from(config));
    let delay_ms = config.reset_delay_ms;

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let (view, submitter, relay) = (view.clone(), submitter.clone(), relay.clone());
        wasm_bindgen_futures::spawn_local(async move {
            let delay = || TimeoutFuture::new(delay_ms);
            if form::submit(&submitter, &*relay, &*view, delay).await.is_ok() {
                log::info!("contact form: message sent");
            }
        });
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    form.set_attribute(ATTACHED_ATTR, "")?;

    log::debug!("contact form: attached to #{}", config.form_id);
    Ok(true)
}

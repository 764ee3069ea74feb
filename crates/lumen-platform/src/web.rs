//! Browser runner (wasm32): binds every panel on the page through web-sys.
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlAudioElement, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement,
};

use lumen_core::{AudioHandle, Deferred, Error, Host, Playable, Result, Task};
use lumen_widgets::Registry;

use crate::controls::{Control, ControlKind};
use crate::options::{OptionsError, PanelOptions};
use crate::panel::{Page, Panel};

/// Entry point called from the page once the DOM is ready.
///
/// `options_json` is an optional JSON object overriding [`PanelOptions`].
#[wasm_bindgen]
pub fn run_panels(options_json: Option<String>) -> Result<(), JsValue> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let options = match options_json.as_deref() {
        Some(json) => PanelOptions::from_json(json).map_err(options_err)?,
        None => PanelOptions::default(),
    };
    let level = options.level().map_err(options_err)?;
    let _ = console_log::init_with_level(level);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let registry = Registry::standard();

    let containers = document.get_elements_by_class_name(&options.panel_class);
    log::info!("binding {} panels", containers.length());
    for i in 0..containers.length() {
        if let Some(container) = containers.item(i) {
            bind_panel(&document, &container, &options, &registry)?;
        }
    }
    Ok(())
}

fn options_err(e: OptionsError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn js_err(e: JsValue) -> Error {
    Error::Host(format!("{e:?}"))
}

fn first_by_class(parent: &Element, class: &str) -> Result<Element, JsValue> {
    parent
        .get_elements_by_class_name(class)
        .item(0)
        .ok_or_else(|| JsValue::from_str(&format!("`{}` has no .{class}", parent.id())))
}

fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    mut f: impl FnMut() + 'static,
) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(move |_event: Event| f()) as Box<dyn FnMut(_)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn bind_panel(
    document: &Document,
    container: &Element,
    options: &PanelOptions,
    registry: &Registry,
) -> Result<(), JsValue> {
    let preview = first_by_class(container, &options.preview_class)?;
    let controls = first_by_class(container, &options.controls_class)?;

    let panel = Rc::new(RefCell::new(Panel::new(container.id(), registry)));
    let page = Rc::new(RefCell::new(WebPage {
        host: WebHost {
            document: document.clone(),
        },
        container: container.clone(),
        preview,
        controls: controls.clone(),
    }));

    // Buttons have no value of their own; track whether each is held.
    let buttons = controls.query_selector_all("input[type='button']")?;
    for i in 0..buttons.length() {
        let Some(button) = buttons
            .item(i)
            .and_then(|n| n.dyn_into::<HtmlInputElement>().ok())
        else {
            continue;
        };
        let name = button.name();
        listen(&button, "mousedown", {
            let panel = panel.clone();
            let name = name.clone();
            move || panel.borrow_mut().press(&name)
        })?;
        listen(&button, "mouseup", {
            let panel = panel.clone();
            move || panel.borrow_mut().release(&name)
        })?;
    }

    let refresh = move || {
        let mut page = page.borrow_mut();
        panel.borrow_mut().handle(&mut *page);
    };
    listen(&controls, "mousedown", refresh.clone())?;
    listen(&controls, "input", refresh.clone())?;
    refresh();
    Ok(())
}

/// Document-level primitives. Deferred tasks get a fresh one when they fire.
struct WebHost {
    document: Document,
}

impl WebHost {
    fn element(&self, id: &str) -> Result<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| Error::MissingElement(id.to_string()))
    }

    fn html_element(&self, id: &str) -> Result<HtmlElement> {
        self.element(id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| Error::Host(format!("`{id}` is not an HTML element")))
    }
}

struct WebAudio {
    src: String,
    element: HtmlAudioElement,
}

impl Playable for WebAudio {
    fn src(&self) -> &str {
        &self.src
    }

    fn play(&self) -> Result<()> {
        self.element
            .play()
            .map(|_| ())
            .map_err(|e| Error::Audio {
                src: self.src.clone(),
                message: format!("{e:?}"),
            })
    }
}

impl Host for WebHost {
    fn set_html(&mut self, id: &str, html: &str) -> Result<()> {
        self.element(id)?.set_inner_html(html);
        Ok(())
    }

    fn set_style(&mut self, id: &str, property: &str, value: &str) -> Result<()> {
        self.html_element(id)?
            .style()
            .set_property(property, value)
            .map_err(js_err)
    }

    fn focus(&mut self, id: &str) -> Result<()> {
        self.html_element(id)?.focus().map_err(js_err)
    }

    fn activate(&mut self, id: &str) -> Result<()> {
        let event = Event::new("click").map_err(js_err)?;
        self.element(id)?.dispatch_event(&event).map_err(js_err)?;
        Ok(())
    }

    fn load_audio(&mut self, src: &str) -> Result<AudioHandle> {
        let element = HtmlAudioElement::new_with_src(src).map_err(|e| Error::Audio {
            src: src.to_string(),
            message: format!("{e:?}"),
        })?;
        Ok(Rc::new(WebAudio {
            src: src.to_string(),
            element,
        }))
    }

    fn defer(&mut self, delay: Duration, task: Task) -> Deferred {
        let handle = Deferred::new();
        let task = handle.guard(task);
        let document = self.document.clone();
        let cb = Closure::once_into_js(move || {
            let mut host = WebHost { document };
            if let Err(e) = task(&mut host) {
                log::error!("deferred task failed: {e}");
            }
        });

        let scheduled = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))
            .and_then(|w| {
                w.set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.unchecked_ref(),
                    delay.as_millis() as i32,
                )
            });
        if let Err(e) = scheduled {
            log::error!("could not schedule task: {e:?}");
            handle.cancel();
        }
        handle
    }
}

/// One panel's regions plus the document.
struct WebPage {
    host: WebHost,
    container: Element,
    preview: Element,
    controls: Element,
}

impl Host for WebPage {
    fn set_html(&mut self, id: &str, html: &str) -> Result<()> {
        self.host.set_html(id, html)
    }
    fn set_style(&mut self, id: &str, property: &str, value: &str) -> Result<()> {
        self.host.set_style(id, property, value)
    }
    fn focus(&mut self, id: &str) -> Result<()> {
        self.host.focus(id)
    }
    fn activate(&mut self, id: &str) -> Result<()> {
        self.host.activate(id)
    }
    fn load_audio(&mut self, src: &str) -> Result<AudioHandle> {
        self.host.load_audio(src)
    }
    fn defer(&mut self, delay: Duration, task: Task) -> Deferred {
        self.host.defer(delay, task)
    }
}

impl Page for WebPage {
    fn panel_ids(&self) -> Vec<String> {
        vec![self.container.id()]
    }

    fn controls(&self, _panel: &str) -> Result<Vec<Control>> {
        let nodes = self
            .controls
            .query_selector_all("input, textarea")
            .map_err(js_err)?;
        let mut out = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else { continue };
            if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
                out.push(Control {
                    name: input.name(),
                    kind: ControlKind::from_input_type(&input.type_()),
                    value: input.value(),
                    checked: input.checked(),
                });
            } else if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
                out.push(Control::text(area.name(), area.value()));
            }
        }
        Ok(out)
    }

    fn replace_preview(&mut self, _panel: &str, html: &str) -> Result<()> {
        self.preview.set_inner_html(html);
        Ok(())
    }
}

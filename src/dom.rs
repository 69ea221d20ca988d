//! DOM Bindings
//!
//! `Surface` and event adapters over `web_sys`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlTemplateElement, KeyboardEvent};

use waypoint_list::{KeyInput, ListConfig, RenderError, RenderPosition, Surface, UiEvent};

fn js_err(err: JsValue) -> RenderError {
    RenderError::Dom(format!("{:?}", err))
}

/// Mount primitive backed by the page document
#[derive(Clone)]
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Surface over the current window's document
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }
}

impl Surface for DomSurface {
    type Node = Element;

    fn create_element(&mut self, markup: &str) -> Result<Element, RenderError> {
        let template = self
            .document
            .create_element("template")
            .map_err(js_err)?
            .dyn_into::<HtmlTemplateElement>()
            .map_err(|_| RenderError::Dom("<template> is not supported".to_string()))?;
        template.set_inner_html(markup.trim());
        template
            .content()
            .first_element_child()
            .ok_or_else(|| RenderError::EmptyMarkup(markup.trim().to_string()))
    }

    fn insert(&mut self, node: &Element, target: &Element, position: RenderPosition) -> Result<(), RenderError> {
        let where_ = match position {
            RenderPosition::BeforeBegin => "beforebegin",
            RenderPosition::AfterBegin => "afterbegin",
            RenderPosition::BeforeEnd => "beforeend",
            RenderPosition::AfterEnd => "afterend",
        };
        match target.insert_adjacent_element(where_, node).map_err(js_err)? {
            Some(_) => Ok(()),
            None => Err(RenderError::Detached(target.tag_name())),
        }
    }

    fn replace(&mut self, container: &Element, new: &Element, old: &Element) -> Result<(), RenderError> {
        if new == old {
            return Ok(());
        }
        container.replace_child(new, old).map_err(js_err)?;
        Ok(())
    }

    fn remove(&mut self, node: &Element) -> Result<(), RenderError> {
        node.remove();
        Ok(())
    }
}

/// Any DOM event, seen as a cancelable activation
pub struct DomEvent<'a>(&'a web_sys::Event);

impl<'a> DomEvent<'a> {
    pub fn new(event: &'a web_sys::Event) -> Self {
        Self(event)
    }
}

impl UiEvent for DomEvent<'_> {
    fn prevent_default(&mut self) {
        self.0.prevent_default();
    }

    fn default_prevented(&self) -> bool {
        self.0.default_prevented()
    }
}

/// A `keydown` event with its key identifier read once
pub struct DomKey<'a> {
    event: &'a KeyboardEvent,
    key: String,
}

impl<'a> DomKey<'a> {
    pub fn new(event: &'a KeyboardEvent) -> Self {
        Self { event, key: event.key() }
    }
}

impl UiEvent for DomKey<'_> {
    fn prevent_default(&mut self) {
        self.event.prevent_default();
    }

    fn default_prevented(&self) -> bool {
        self.event.default_prevented()
    }
}

impl KeyInput for DomKey<'_> {
    fn key(&self) -> &str {
        &self.key
    }
}

/// Element id of the optional JSON config block
const CONFIG_ELEMENT_ID: &str = "trip-config";

/// Read `<script id="trip-config" type="application/json">`, falling back to defaults
pub fn load_config(document: &Document) -> ListConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return ListConfig::default();
    };

    match ListConfig::from_json(&json) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("[APP] {}, using defaults", err);
            ListConfig::default()
        }
    }
}

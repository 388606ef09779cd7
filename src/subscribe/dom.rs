use js_sys::{Array, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlScriptElement};

use super::response::{ResponseNode, ResponseSource};
use super::script::{MergeField, ScriptHost};

pub struct DocumentHost {
    document: Document,
}

impl DocumentHost {
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl ScriptHost for DocumentHost {
    fn has_script(&self, selector: &str) -> bool {
        matches!(self.document.query_selector(selector), Ok(Some(_)))
    }

    fn attach_script(&mut self, src: &str) {
        let script = match self
            .document
            .create_element("script")
            .map(|el| el.unchecked_into::<HtmlScriptElement>())
        {
            Ok(s) => s,
            Err(e) => {
                log::warn!("couldn't create script element: {e:?}");
                return;
            }
        };
        script.set_src(src);
        script.set_async(true);
        let Some(body) = self.document.body() else {
            log::warn!("no body to attach {src} to");
            return;
        };
        if let Err(e) = body.append_child(&script) {
            log::warn!("couldn't attach {src}: {e:?}");
        }
    }

    fn register_fields(&mut self, fields: &[MergeField]) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let fnames = Array::new();
        let ftypes = Array::new();
        for field in fields {
            fnames.push(&JsValue::from_str(field.name));
            ftypes.push(&JsValue::from_str(field.kind));
        }
        let set = |key: &str, value: &Array| Reflect::set(&window, &JsValue::from_str(key), value);
        if let Err(e) = set("fnames", &fnames).and_then(|_| set("ftypes", &ftypes)) {
            log::warn!("couldn't register merge fields: {e:?}");
        }
    }
}

impl ResponseSource for DocumentHost {
    fn read(&self, id: &str) -> Option<ResponseNode> {
        let el = self.document.get_element_by_id(id)?;
        let el = el.dyn_into::<HtmlElement>().ok()?;
        let display = el.style().get_property_value("display").unwrap_or_default();
        Some(ResponseNode {
            visible: display.trim() != "none",
            text: el.text_content().unwrap_or_default(),
        })
    }
}

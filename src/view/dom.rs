//! DOM renderer (WASM only)
//!
//! Rebuilds the page from stored state after every write. Card buttons are
//! handled by a single delegated listener on the card container, keyed by
//! `data-index` / `data-action`, so re-rendering never adds listeners.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, MouseEvent};

use super::{CLEAR_CONFIRM_TEXT, CardView, FormState, ProfileView, SaveForm, Thumb};
use crate::cards::CardUpdate;
use crate::dom_ids;
use crate::persistence::PortfolioStore;
use crate::platform::LocalStore;
use crate::platform::file::{read_as_data_url, selected_file};

/// Page editor bound to LocalStorage
pub struct Editor {
    portfolio: PortfolioStore<LocalStore>,
    document: Document,
}

/// Ensure defaults exist, render the page and attach handlers once
pub fn start(portfolio: PortfolioStore<LocalStore>) -> Result<Rc<Editor>, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if let Err(e) = portfolio.ensure_defaults() {
        log::error!("Could not initialize storage: {}", e);
    }

    let editor = Rc::new(Editor {
        portfolio,
        document,
    });
    editor.render_all();

    setup_card_actions(editor.clone())?;
    setup_profile_upload(editor.clone())?;

    Ok(editor)
}

impl Editor {
    /// Re-render profile and cards from storage
    pub fn render_all(&self) {
        if let Err(e) = self.try_render_all() {
            log::error!("Render failed: {:?}", e);
        }
    }

    fn try_render_all(&self) -> Result<(), JsValue> {
        let state = self
            .portfolio
            .load_state()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        // Profile
        let profile = ProfileView::new(&state.profile, self.portfolio.config());
        if let Some(photo) = self.document.get_element_by_id(dom_ids::PROFILE_PHOTO) {
            photo.set_attribute("src", &profile.photo_src)?;
        }
        self.set_text(dom_ids::FULL_NAME, &profile.name);
        self.set_text(dom_ids::LEGAJO, &profile.legajo);
        self.set_text(dom_ids::MATERIA, &profile.materia);
        self.set_text(dom_ids::CURSO, &profile.curso);

        // Cards
        let container = self
            .document
            .get_element_by_id(dom_ids::CARDS_CONTAINER)
            .ok_or_else(|| JsValue::from_str("no cards container"))?;
        container.set_inner_html("");
        for view in CardView::all(&state.cards) {
            let card_el = self.create_card_element(&view)?;
            container.append_child(&card_el)?;
        }

        Ok(())
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn element(&self, tag: &str, class: &str) -> Result<Element, JsValue> {
        let el = self.document.create_element(tag)?;
        if !class.is_empty() {
            el.set_class_name(class);
        }
        Ok(el)
    }

    fn input(&self, kind: &str, field: &str, placeholder: &str) -> Result<Element, JsValue> {
        let input = self.element("input", "")?;
        input.set_attribute("type", kind)?;
        input.set_attribute("data-field", field)?;
        if !placeholder.is_empty() {
            input.set_attribute("placeholder", placeholder)?;
        }
        Ok(input)
    }

    fn button(&self, class: &str, action: &str, label: &str) -> Result<Element, JsValue> {
        let btn = self.element("button", class)?;
        btn.set_attribute("type", "button")?;
        btn.set_attribute("data-action", action)?;
        btn.set_text_content(Some(label));
        Ok(btn)
    }

    fn create_card_element(&self, view: &CardView) -> Result<Element, JsValue> {
        let card = self.element("article", "card")?;
        card.set_attribute("data-index", &view.index.to_string())?;

        // Thumb (image or placeholder)
        let thumb = self.element("div", "thumb")?;
        match &view.thumb {
            Thumb::Image { src, alt, external } => {
                let img = self.element("img", "")?;
                img.set_attribute("src", src)?;
                img.set_attribute("alt", alt)?;
                if *external {
                    img.set_attribute("loading", "lazy")?;
                    img.set_attribute("referrerpolicy", "no-referrer")?;
                }
                thumb.append_child(&img)?;
            }
            Thumb::Placeholder(text) => thumb.set_text_content(Some(text)),
        }
        card.append_child(&thumb)?;

        let heading = self.element("h3", "")?;
        heading.set_text_content(Some(&view.heading));
        card.append_child(&heading)?;

        let link = self.element("a", "project-link")?;
        link.set_attribute("href", &view.link_href)?;
        link.set_attribute("target", "_blank")?;
        link.set_attribute("rel", "noopener")?;
        link.set_text_content(Some(&view.link_text));
        card.append_child(&link)?;

        // Inline edit form, collapsed on every render
        let form = self.element("div", "form")?;
        form.set_attribute(
            "style",
            &format!("display: {}", FormState::Collapsed.css_display()),
        )?;

        let title = self.input("text", "title", "Título del proyecto")?;
        title.set_attribute("value", &view.form_title)?;
        form.append_child(&title)?;

        let link_input = self.input("url", "link", "Link del proyecto (https://...)")?;
        link_input.set_attribute("value", &view.form_link)?;
        form.append_child(&link_input)?;

        let label = self.element("label", "small")?;
        label.set_text_content(Some("Subir imagen (archivo local) o pegar URL abajo"));
        form.append_child(&label)?;

        let file = self.input("file", "file", "")?;
        file.set_attribute("accept", "image/*")?;
        form.append_child(&file)?;

        let image_url = self.input("url", "image-url", "URL de imagen (opcional)")?;
        form.append_child(&image_url)?;

        let controls = self.element("div", "controls")?;
        controls.append_child(&self.button("btn", "edit", "Editar")?)?;
        controls.append_child(&self.button("btn primary", "save", "Guardar")?)?;
        controls.append_child(&self.button("btn", "clear", "Borrar")?)?;
        form.append_child(&controls)?;

        card.append_child(&form)?;
        Ok(card)
    }

    /// Apply an update to one card and re-render
    fn save_card(&self, index: usize, update: CardUpdate) {
        match self.portfolio.apply_card_save(index, &update) {
            Ok(_) => self.render_all(),
            Err(e) => log::error!("Saving card {} failed: {}", index + 1, e),
        }
    }

    fn set_profile_photo(&self, data_url: String) {
        match self.portfolio.set_profile_photo(data_url) {
            Ok(_) => self.render_all(),
            Err(e) => log::error!("Saving profile photo failed: {}", e),
        }
    }
}

/// The `.form` element of a card
fn card_form(card: &Element) -> Result<HtmlElement, JsValue> {
    card.query_selector(".form")?
        .ok_or_else(|| JsValue::from_str("card has no form"))?
        .dyn_into::<HtmlElement>()
        .map_err(JsValue::from)
}

fn card_input(card: &Element, field: &str) -> Result<HtmlInputElement, JsValue> {
    card.query_selector(&format!("input[data-field='{}']", field))?
        .ok_or_else(|| JsValue::from_str("card form field missing"))?
        .dyn_into::<HtmlInputElement>()
        .map_err(JsValue::from)
}

fn set_form_state(form: &HtmlElement, state: FormState) -> Result<(), JsValue> {
    form.style().set_property("display", state.css_display())
}

fn handle_card_click(editor: &Rc<Editor>, event: &MouseEvent) -> Result<(), JsValue> {
    let Some(target) = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
    else {
        return Ok(());
    };
    let Some(button) = target.closest("[data-action]")? else {
        return Ok(());
    };
    let Some(card) = button.closest("article.card")? else {
        return Ok(());
    };
    let Some(index) = card
        .get_attribute("data-index")
        .and_then(|i| i.parse::<usize>().ok())
    else {
        return Ok(());
    };
    let action = button.get_attribute("data-action").unwrap_or_default();
    let form = card_form(&card)?;

    match action.as_str() {
        "edit" => {
            let display = form.style().get_property_value("display")?;
            set_form_state(&form, FormState::from_css_display(&display).toggle())?;
        }
        "save" => {
            let fields = SaveForm {
                title: card_input(&card, "title")?.value(),
                link: card_input(&card, "link")?.value(),
                image_url: card_input(&card, "image-url")?.value(),
            };

            match selected_file(&card_input(&card, "file")?) {
                Some(file) => {
                    let editor = editor.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match read_as_data_url(file).await {
                            Ok(data_url) => {
                                editor.save_card(index, fields.into_update(Some(data_url)))
                            }
                            Err(e) => log::error!("Reading card image failed: {:?}", e),
                        }
                    });
                }
                None => editor.save_card(index, fields.into_update(None)),
            }
            set_form_state(&form, FormState::Collapsed)?;
        }
        "clear" => {
            let confirm = || {
                web_sys::window()
                    .map(|w| w.confirm_with_message(CLEAR_CONFIRM_TEXT).unwrap_or(false))
                    .unwrap_or(false)
            };
            match editor.portfolio.clear_card_if(index, confirm) {
                Ok(Some(_)) => {
                    log::info!("Card {} cleared", index + 1);
                    editor.render_all();
                }
                Ok(None) => {}
                Err(e) => log::error!("Clearing card {} failed: {}", index + 1, e),
            }
        }
        other => log::warn!("Unknown card action '{}'", other),
    }

    Ok(())
}

fn setup_card_actions(editor: Rc<Editor>) -> Result<(), JsValue> {
    let container = editor
        .document
        .get_element_by_id(dom_ids::CARDS_CONTAINER)
        .ok_or_else(|| JsValue::from_str("no cards container"))?;

    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        if let Err(e) = handle_card_click(&editor, &event) {
            log::error!("Card action failed: {:?}", e);
        }
    });
    container.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn setup_profile_upload(editor: Rc<Editor>) -> Result<(), JsValue> {
    let Some(input) = editor
        .document
        .get_element_by_id(dom_ids::PROFILE_PHOTO_INPUT)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        log::warn!("No profile photo input, uploads disabled");
        return Ok(());
    };

    let input_clone = input.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        let Some(file) = selected_file(&input_clone) else {
            return;
        };
        let editor = editor.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match read_as_data_url(file).await {
                Ok(data_url) => editor.set_profile_photo(data_url),
                Err(e) => log::error!("Reading profile photo failed: {:?}", e),
            }
        });
    });
    input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

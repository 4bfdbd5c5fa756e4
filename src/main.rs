//! Folio Cards entry point
//!
//! On the web this wires the editor to the page; natively it prints the
//! default portfolio as text.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use wasm_bindgen::prelude::*;

    use folio_cards::view::dom;
    use folio_cards::{EditorConfig, PortfolioStore, platform};

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
        }
        log::info!("Folio Cards starting...");

        let store = platform::default_store().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let config = EditorConfig::default();
        log::info!("Editing {} project cards", config.card_count);

        dom::start(PortfolioStore::new(store, config))?;
        log::info!("Folio Cards ready");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use folio_cards::data_url::{self, ImageSource};
    use folio_cards::view::{CardView, ProfileView, Thumb};
    use folio_cards::{EditorConfig, PortfolioStore, platform};

    env_logger::init();
    log::info!("Folio Cards (native) starting...");
    log::info!("The editor runs in the browser - build for wasm32 and serve index.html");

    let store = match platform::default_store() {
        Ok(store) => store,
        Err(e) => {
            log::error!("No storage: {}", e);
            return;
        }
    };
    let portfolio = PortfolioStore::new(store, EditorConfig::default());
    let state = match portfolio.load_state() {
        Ok(state) => state,
        Err(e) => {
            log::error!("Loading portfolio failed: {}", e);
            return;
        }
    };

    let profile = ProfileView::new(&state.profile, portfolio.config());
    println!("{} ({})", profile.name, profile.legajo);
    println!("{} {}", profile.materia, profile.curso);
    match data_url::classify(&profile.photo_src) {
        ImageSource::Embedded { mime } => {
            let size = data_url::decode(&profile.photo_src).map_or(0, |b| b.len());
            println!("photo: embedded {} ({} bytes)", mime, size);
        }
        ImageSource::External(src) => println!("photo: {}", src),
    }

    for card in CardView::all(&state.cards) {
        let thumb = match &card.thumb {
            Thumb::Image { src, .. } => src.as_str(),
            Thumb::Placeholder(text) => *text,
        };
        println!("\n[{}] {}", card.index + 1, card.heading);
        println!("  {}", thumb);
        println!("  {}", card.link_text);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

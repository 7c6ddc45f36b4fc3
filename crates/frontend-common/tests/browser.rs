#![cfg(target_arch = "wasm32")]

use gloo_utils::{document, document_element};
use softsell_core::{CoreError, SectionGeometry, SectionId, Theme, ThemeConfig, ThemeStore};
use softsell_frontend_common::DomSectionGeometry;
use softsell_frontend_common::theme::{LocalThemeStore, update_document_theme};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear_saved_theme() {
    if let Ok(Some(storage)) = gloo_utils::window().local_storage() {
        let _ = storage.remove_item(ThemeConfig::STORAGE_KEY);
    }
}

#[wasm_bindgen_test]
fn saved_theme_survives_reload() {
    clear_saved_theme();
    assert_eq!(LocalThemeStore.load(), None);

    LocalThemeStore.save(Theme::Dark);
    assert_eq!(LocalThemeStore.load(), Some(Theme::Dark));
    assert_eq!(LocalThemeStore.initial_theme(), Theme::Dark);

    clear_saved_theme();
}

#[wasm_bindgen_test]
fn corrupt_saved_theme_is_ignored() {
    let storage = gloo_utils::window()
        .local_storage()
        .ok()
        .flatten()
        .expect("local storage");
    storage
        .set_item(ThemeConfig::STORAGE_KEY, "purple")
        .expect("write storage");

    assert_eq!(LocalThemeStore.load(), None);

    clear_saved_theme();
}

#[wasm_bindgen_test]
fn dark_class_follows_theme() {
    update_document_theme(Theme::Dark);
    assert!(document_element().class_list().contains("dark"));

    update_document_theme(Theme::Light);
    assert!(!document_element().class_list().contains("dark"));
}

#[wasm_bindgen_test]
fn missing_section_reports_its_anchor() {
    let err = DomSectionGeometry
        .bounds(SectionId::Testimonials)
        .expect_err("no testimonials element on the test page");
    assert_eq!(err, CoreError::section_not_found("testimonials"));
}

#[wasm_bindgen_test]
fn section_bounds_come_from_layout() {
    let section = document().create_element("section").expect("create section");
    section.set_id("how-it-works");
    section
        .set_attribute("style", "height: 240px; margin: 0; padding: 0;")
        .expect("style section");
    document().body().expect("body").append_child(&section).expect("attach section");

    let bounds = DomSectionGeometry
        .bounds(SectionId::HowItWorks)
        .expect("section is attached");
    assert_eq!(bounds.id, SectionId::HowItWorks);
    assert_eq!(bounds.height, 240.0);

    section.remove();
}

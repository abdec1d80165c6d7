use hydroatlas_core::{is_allowed, CompactParity, DeniedBehavior, Page, Role};

use crate::common::*;

fn mounted_marker(page: Page) -> String {
    format!(r#"data-mounted="{}""#, page.as_str())
}

#[test]
fn expert_mounts_every_page() {
    for page in Page::ALL {
        let html = render_default(active_on(expert(), page));
        assert!(html.contains(&mounted_marker(page)), "{page:?}");
        assert_eq!(html.matches("data-mounted=").count(), 1, "{page:?}");
    }
}

#[test]
fn guest_mounts_only_allowed_pages() {
    for page in Page::ALL {
        let html = render_default(active_on(guest(), page));
        assert_eq!(
            html.contains(&mounted_marker(page)),
            is_allowed(page, Role::Guest),
            "{page:?}"
        );
    }
}

#[test]
fn silent_denial_renders_empty_host() {
    let html = render_default(active_on(guest(), Page::Hardware));
    assert!(html.contains(r#"<div class="page-host"></div>"#));
    assert!(!html.contains("Доступ запрещён"));
    assert!(!html.contains("data-mounted="));
}

#[test]
fn explicit_denial_renders_notice() {
    let html = render_shell(
        active_on(guest(), Page::Objects),
        CompactParity::Source,
        DeniedBehavior::Explicit,
    );
    assert!(html.contains("Доступ запрещён"));
    assert!(html.contains("Объекты"));
    assert!(!html.contains("data-mounted="));
}

#[test]
fn mounted_page_shows_its_body() {
    let html = render_default(active_on(guest(), Page::Chatbot));
    assert!(html.contains("Ассистент по данным мониторинга."));
    assert!(!html.contains("Сводка по водным объектам"));
}

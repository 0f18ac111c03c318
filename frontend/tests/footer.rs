// wasm-pack test --headless --firefox frontend

#![cfg(target_arch = "wasm32")]

use leptos::*;
use portfolio::{Footer, ATTRIBUTION_LINKS, MAX_WIDTH, SOCIAL_ACCOUNTS, SOURCE_CODE_URL};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Mounts a view into a fresh container appended to `<body>`.
fn render<F, N>(f: F) -> Element
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let container = gloo_utils::document().create_element("div").unwrap();
    gloo_utils::body().append_child(&container).unwrap();
    let target: HtmlElement = container.clone().dyn_into().unwrap();
    mount_to(target, f);
    container
}

fn select(root: &Element, selector: &str) -> Vec<Element> {
    let nodes = root.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn attr(element: &Element, name: &str) -> String {
    element.get_attribute(name).unwrap_or_default()
}

#[wasm_bindgen_test]
fn test_social_links_follow_declaration_order() {
    let root = render(|| view! { <Footer max_width=MAX_WIDTH/> });

    let links = select(&root, ".social-row a");
    assert_eq!(links.len(), SOCIAL_ACCOUNTS.len());

    for (link, account) in links.iter().zip(SOCIAL_ACCOUNTS) {
        assert_eq!(attr(link, "href"), account.path);
        assert_eq!(attr(link, "aria-label"), account.title);

        let buttons = select(link, "button");
        assert_eq!(buttons.len(), 1);
        assert_eq!(attr(&buttons[0], "aria-label"), account.title);
        assert_eq!(select(&buttons[0], "svg").len(), 1);
    }
}

#[wasm_bindgen_test]
fn test_each_account_has_exactly_one_link() {
    let root = render(|| view! { <Footer max_width=MAX_WIDTH/> });

    for account in SOCIAL_ACCOUNTS {
        let matching = select(&root, "a")
            .into_iter()
            .filter(|a| attr(a, "href") == account.path && attr(a, "aria-label") == account.title)
            .count();
        assert_eq!(matching, 1, "{}", account.title);
    }
}

#[wasm_bindgen_test]
fn test_attribution_links() {
    let root = render(|| view! { <Footer max_width=MAX_WIDTH/> });

    let links = select(&root, "a.attribution-link");
    let hrefs: Vec<_> = links.iter().map(|a| attr(a, "href")).collect();
    assert_eq!(
        hrefs,
        ["https://nextjs.org/", "https://chakra-ui.com/", "http://vercel.com/"]
    );

    let labels: Vec<_> = links.iter().map(|a| a.text_content().unwrap_or_default()).collect();
    let expected: Vec<_> = ATTRIBUTION_LINKS.iter().map(|l| l.label.to_string()).collect();
    assert_eq!(labels, expected);

    let text = root.query_selector("p").unwrap().unwrap().text_content().unwrap();
    assert_eq!(text, "Built with ❤️, Next.js, Chakra UI, Hosted in Vercel.");
}

#[wasm_bindgen_test]
fn test_source_code_link() {
    let root = render(|| view! { <Footer max_width=MAX_WIDTH/> });

    let links = select(&root, "a[aria-label='source code']");
    assert_eq!(links.len(), 1);
    assert_eq!(attr(&links[0], "href"), SOURCE_CODE_URL);
    assert_eq!(select(&links[0], "button.icon-code").len(), 1);
}

#[wasm_bindgen_test]
fn test_links_do_not_expose_opener() {
    let root = render(|| view! { <Footer max_width=MAX_WIDTH/> });

    let links = select(&root, "a");
    assert_eq!(links.len(), SOCIAL_ACCOUNTS.len() + 3 + 1);
    for link in &links {
        assert_eq!(attr(link, "target"), "_blank");
        assert_eq!(attr(link, "rel"), "noopener noreferrer");
    }
}

#[wasm_bindgen_test]
fn test_heart_is_labelled_and_not_a_link() {
    let root = render(|| view! { <Footer max_width=MAX_WIDTH/> });

    let hearts = select(&root, "span[role='img']");
    assert_eq!(hearts.len(), 1);
    assert_eq!(attr(&hearts[0], "aria-label"), "red heart");
    assert!(hearts[0].closest("a").unwrap().is_none());
}

#[wasm_bindgen_test]
fn test_empty_social_row() {
    let root = render(|| view! { <Footer max_width=MAX_WIDTH accounts=&[]/> });

    assert_eq!(select(&root, ".social-row").len(), 1);
    assert!(select(&root, ".social-row a").is_empty());
    assert_eq!(select(&root, "a[aria-label='source code']").len(), 1);
}

#[wasm_bindgen_test]
fn test_max_width_is_applied() {
    let root = render(|| view! { <Footer max_width="42rem"/> });

    let inner = select(&root, "footer .footer-inner");
    assert_eq!(inner.len(), 1);
    assert_eq!(attr(&inner[0], "style"), "max-width: 42rem");
}

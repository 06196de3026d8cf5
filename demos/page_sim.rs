use scroll_to_section::{Document, ScrollOptions, ScrollToSection};

/// A minimal simulated page: named elements with document-relative top offsets.
struct Page {
    elements: Vec<(&'static str, u64)>,
    scroll: u64,
}

#[derive(Clone)]
struct El(usize);

impl Document for Page {
    type Element = El;
    type ClickBinding = usize;

    fn query_first(&self, selector: &str) -> Option<El> {
        self.elements.iter().position(|(sel, _)| *sel == selector).map(El)
    }

    fn root(&self) -> El {
        El(0)
    }

    fn element_top(&self, element: &El) -> u64 {
        self.elements[element.0].1
    }

    fn scroll_offset(&self) -> u64 {
        self.scroll
    }

    fn set_scroll_offset(&mut self, offset: u64) {
        self.scroll = offset;
    }

    fn bind_click(&mut self, element: &El) -> usize {
        element.0
    }

    fn unbind_click(&mut self, _binding: usize) {}
}

fn main() {
    // An adapter would:
    // - construct the controller with its document handle
    // - call on_click(now_ms) when the page dispatches a click on the bound anchor
    // - call tick(now_ms) in a frame loop while is_animating()
    let page = Page {
        elements: vec![(":root", 0), ("#go", 40), ("#pricing", 1200)],
        scroll: 0,
    };

    let mut c = ScrollToSection::new(
        page,
        ScrollOptions::new()
            .with_anchor("#go")
            .with_section("#pricing")
            .with_offset(-16)
            .with_duration_ms(240)
            .with_on_before_scroll(|c: &ScrollToSection<Page>| {
                println!("before: scroll={}", c.document().scroll_offset())
            })
            .with_on_complete(|c: &ScrollToSection<Page>| {
                println!("complete: scroll={}", c.document().scroll_offset())
            }),
    );

    let prevent_default = c.on_click(0);
    println!(
        "click handled={prevent_default} destination={:?}",
        c.last_destination()
    );

    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            println!("t={now_ms} scroll={off}");
        }
    }
}

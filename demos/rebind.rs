use scroll_to_section::{Document, ScrollOptions, ScrollToSection};

/// A page sim that logs click-listener churn, to show unbind-before-rebind.
struct Page {
    elements: Vec<(&'static str, u64)>,
    scroll: u64,
    live_bindings: usize,
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
        self.live_bindings += 1;
        println!("bind   #{} (live={})", element.0, self.live_bindings);
        element.0
    }

    fn unbind_click(&mut self, binding: usize) {
        self.live_bindings -= 1;
        println!("unbind #{binding} (live={})", self.live_bindings);
    }
}

fn main() {
    let page = Page {
        elements: vec![(":root", 0), ("#nav-a", 10), ("#nav-b", 20), ("#docs", 800)],
        scroll: 0,
        live_bindings: 0,
    };

    let mut c = ScrollToSection::new(
        page,
        ScrollOptions::new()
            .with_anchor("#nav-a")
            .with_section("#docs")
            .with_duration_ms(0),
    );

    // Re-selecting the anchor releases the previous listener before installing the
    // new one; exactly one binding stays live.
    c.set_anchor("#nav-b").set_anchor("#nav-a");
    println!("live bindings after rebinds: {}", c.document().live_bindings);

    c.on_click(0);
    println!("scroll={}", c.document().scroll_offset());

    let page = c.into_document();
    println!("live bindings after teardown: {}", page.live_bindings);
}

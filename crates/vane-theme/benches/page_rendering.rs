//! Benchmarks for page rendering performance.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use vane_dom::{Document, Element};
use vane_theme::{LayoutComposer, Page, PageMeta, SiteMeta};

/// Generate a page body with the given structure.
fn generate_body(sections: usize, paragraphs_per_section: usize) -> Element {
    let mut body = Element::new("body");

    let mut h1 = Element::new("h1");
    h1.push_text("Document Title");
    body.push_elem(h1);

    for i in 0..sections {
        let mut heading = Element::new("h2");
        heading.push_text(format!("Section {i}"));
        body.push_elem(heading);

        for j in 0..paragraphs_per_section {
            let mut p = Element::new("p");
            p.push_text(format!(
                "This is paragraph {j} in section {i}. See {{@link demo.Widget}} for details."
            ));
            body.push_elem(p);
        }

        let mut pre = Element::new("pre");
        pre.set_attr("data-lang", "java");
        pre.push_text(format!("int section = {i};"));
        body.push_elem(pre);
    }
    body
}

fn make_page(sections: usize, paragraphs_per_section: usize) -> Page {
    let mut html = Element::new("html");
    html.push_elem(generate_body(sections, paragraphs_per_section));
    Page::new(
        Document::new(html),
        PageMeta {
            title: Some("Benchmark".to_owned()),
            site: SiteMeta {
                author: Some("A. Writer".to_owned()),
                name: Some("Docs".to_owned()),
                base_url: Some("/doc/api".to_owned()),
            },
            ..Default::default()
        },
    )
}

fn bench_render_simple(c: &mut Criterion) {
    let composer = LayoutComposer::new();
    let page = make_page(1, 1);

    c.bench_function("render_simple_page", |b| {
        b.iter(|| composer.render(&page).unwrap());
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let composer = LayoutComposer::new();
    let mut group = c.benchmark_group("render_page_sizes");

    for sections in [5_usize, 20, 50] {
        let page = make_page(sections, 3);
        let size = page.dom.root.to_html().len() as u64;
        group.throughput(Throughput::Bytes(size));
        group.bench_with_input(
            BenchmarkId::from_parameter(sections),
            &page,
            |b, page| {
                b.iter(|| composer.render(page).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_render_simple, bench_render_varying_sizes);
criterion_main!(benches);
